//! Carts

use salvo::prelude::StatusError;

use storefront_app::domain::{carts::records::CartRecord, users::records::UserRecord};

use crate::state::State;

pub(crate) mod errors;
mod handlers;
pub(crate) mod items;
pub(crate) mod responses;

pub(crate) use handlers::*;

/// The authenticated user's cart, created on first access.
pub(crate) async fn user_cart(state: &State, user: &UserRecord) -> Result<CartRecord, StatusError> {
    state
        .app
        .carts
        .get_or_create_user_cart(user.uuid)
        .await
        .map_err(|error| errors::into_status_error(error, user))
}
