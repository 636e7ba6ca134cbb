//! Delete Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{
        responses::{CartResultResponse, into_cart_result},
        user_cart,
    },
    extensions::*,
    state::State,
};

/// Delete Cart Item Handler
#[endpoint(
    tags("carts"),
    summary = "Delete Cart Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart item deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Cart mutation rejected"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
pub(crate) async fn handler(
    item: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResultResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    let cart = user_cart(state, user).await?;

    let result = state
        .app
        .carts
        .remove_item(cart.uuid, item.into_inner().into())
        .await;

    into_cart_result(result, user, res)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::carts::{
        CartsServiceError, MockCartsService, records::CartItemUuid,
    };

    use crate::test_helpers::{carts_service, make_cart, make_cart_with_item};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(
            carts,
            Router::with_path("cart/items/{item}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_item_success() -> TestResult {
        let cart = make_cart_with_item("1", 29_999, 1);
        let uuid = cart.uuid;
        let item = cart.items.first().map(|i| i.uuid).ok_or("item missing")?;
        let emptied = make_cart();

        let mut carts = MockCartsService::new();

        carts
            .expect_get_or_create_user_cart()
            .once()
            .return_once(move |_| Ok(cart));

        carts
            .expect_remove_item()
            .once()
            .withf(move |c, i| *c == uuid && *i == item)
            .return_once(move |_, _| Ok(emptied));

        let mut res = TestClient::delete(format!("http://example.com/cart/items/{item}"))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CartResultResponse = res.take_json().await?;

        assert!(body.success, "expected success");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_unknown_item_returns_400_envelope() -> TestResult {
        let cart = make_cart();
        let item = CartItemUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_get_or_create_user_cart()
            .once()
            .return_once(move |_| Ok(cart));

        carts
            .expect_remove_item()
            .once()
            .withf(move |_, i| *i == item)
            .return_once(|_, _| Err(CartsServiceError::ItemNotFound));

        let mut res = TestClient::delete(format!("http://example.com/cart/items/{item}"))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: CartResultResponse = res.take_json().await?;

        assert!(!body.success, "expected failure");
        assert_eq!(body.error.as_deref(), Some("Item not found in cart"));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_invalid_uuid_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_get_or_create_user_cart().never();
        carts.expect_remove_item().never();

        let res = TestClient::delete("http://example.com/cart/items/not-a-uuid")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
