//! Create Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};
use serde::{Deserialize, Serialize};

use storefront_app::domain::carts::data::NewCartItem;

use crate::{
    carts::{
        responses::{CartResultResponse, into_cart_result},
        user_cart,
    },
    extensions::*,
    state::State,
};

fn default_quantity() -> i64 {
    1
}

/// Create Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCartItemRequest {
    /// Catalog id of the product to add
    pub product_id: String,

    /// Units to add, defaults to one
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

impl From<CreateCartItemRequest> for NewCartItem {
    fn from(request: CreateCartItemRequest) -> Self {
        NewCartItem {
            product: request.product_id.into(),
            quantity: request.quantity,
        }
    }
}

/// Create Cart Item Handler
///
/// Adds units of a product to the user's cart, merging with an existing line
/// for the same product.
#[endpoint(
    tags("carts"),
    summary = "Add Item to Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Cart mutation rejected"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResultResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    let cart = user_cart(state, user).await?;

    let result = state
        .app
        .carts
        .add_item(cart.uuid, json.into_inner().into())
        .await;

    into_cart_result(result, user, res)
}
