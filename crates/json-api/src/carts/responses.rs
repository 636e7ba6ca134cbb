//! Cart response bodies.

use salvo::{
    http::StatusCode,
    oapi::ToSchema,
    prelude::{Json, Response, StatusError},
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use storefront_app::domain::{
    carts::{
        CartsServiceError,
        records::{CartItemRecord, CartRecord},
    },
    users::records::UserRecord,
};

use crate::carts::errors::into_status_error;

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub uuid: Uuid,

    /// The lines of the cart, in the order they were added
    pub items: Vec<CartItemResponse>,

    /// Sum of line totals in pence/cents
    pub total: u64,

    /// Sum of line quantities
    pub item_count: u64,

    /// The date and time the cart was created
    pub created_at: String,

    /// The date and time the cart was last updated
    pub updated_at: String,
}

impl From<CartRecord> for CartResponse {
    fn from(cart: CartRecord) -> Self {
        CartResponse {
            uuid: cart.uuid.into_uuid(),
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
            total: cart.total,
            item_count: cart.item_count,
            created_at: cart.created_at.to_string(),
            updated_at: cart.updated_at.to_string(),
        }
    }
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// The unique identifier of the cart item
    pub uuid: Uuid,

    /// The catalog id of the product
    pub product_id: String,

    /// Product name when the item was added
    pub name: String,

    /// Unit price in pence/cents when the item was added
    pub price: u64,

    /// Units of the product in the cart
    pub quantity: u32,

    /// Product image when the item was added
    pub image: String,

    /// Stock when the item was added; the quantity can not exceed it
    pub max_quantity: u32,
}

impl From<CartItemRecord> for CartItemResponse {
    fn from(item: CartItemRecord) -> Self {
        Self {
            uuid: item.uuid.into_uuid(),
            product_id: item.product.to_string(),
            name: item.name,
            price: item.price,
            quantity: item.quantity,
            image: item.image,
            max_quantity: item.max_quantity,
        }
    }
}

/// Outcome of a cart mutation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResultResponse {
    /// Whether the mutation was applied
    pub success: bool,

    /// Why the mutation was rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// The cart after the mutation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart: Option<CartResponse>,
}

/// Render a mutation result: the cart on success, a 400 envelope for rejected
/// mutations, and a 500 for storage failures.
pub(crate) fn into_cart_result(
    result: Result<CartRecord, CartsServiceError>,
    user: &UserRecord,
    res: &mut Response,
) -> Result<Json<CartResultResponse>, StatusError> {
    match result {
        Ok(cart) => Ok(Json(CartResultResponse {
            success: true,
            error: None,
            cart: Some(cart.into()),
        })),
        Err(error) if error.is_client_error() => {
            warn!(user_uuid = %user.uuid, "cart mutation rejected: {error}");

            res.status_code(StatusCode::BAD_REQUEST);

            Ok(Json(CartResultResponse {
                success: false,
                error: Some(error.to_string()),
                cart: None,
            }))
        }
        Err(error) => Err(into_status_error(error, user)),
    }
}
