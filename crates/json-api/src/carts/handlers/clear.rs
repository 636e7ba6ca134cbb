//! Clear Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{
        responses::{CartResultResponse, into_cart_result},
        user_cart,
    },
    extensions::*,
    state::State,
};

/// Clear Cart Handler
///
/// Removes every item from the authenticated user's cart.
#[endpoint(
    tags("carts"),
    summary = "Clear Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart cleared"),
        (status_code = StatusCode::BAD_REQUEST, description = "Cart mutation rejected"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResultResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    let cart = user_cart(state, user).await?;

    let result = state.app.carts.clear_cart(cart.uuid).await;

    into_cart_result(result, user, res)
}
