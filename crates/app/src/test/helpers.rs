//! Test Helpers

use crate::domain::{
    carts::{
        CartsService, CartsServiceError,
        data::NewCartItem,
        records::{CartItemRecord, CartRecord, CartUuid},
    },
    products::records::ProductRecord,
    users::records::{UserRecord, UserUuid},
};

use super::TestContext;

pub(crate) fn product(id: &str, price: u64, stock: u32) -> ProductRecord {
    ProductRecord {
        id: id.into(),
        name: format!("Product {id}"),
        price,
        stock,
        image: format!("/images/{id}.jpg"),
    }
}

pub(crate) fn user(name: &str) -> UserRecord {
    UserRecord {
        uuid: UserUuid::new(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
    }
}

/// Alice's cart, created on first call.
pub(crate) async fn user_cart(ctx: &TestContext) -> Result<CartRecord, CartsServiceError> {
    ctx.carts.get_or_create_user_cart(ctx.alice.uuid).await
}

pub(crate) async fn add_item(
    ctx: &TestContext,
    cart: CartUuid,
    product: &str,
    quantity: i64,
) -> Result<CartRecord, CartsServiceError> {
    ctx.carts
        .add_item(
            cart,
            NewCartItem {
                product: product.into(),
                quantity,
            },
        )
        .await
}

pub(crate) fn assert_totals_consistent(cart: &CartRecord) {
    let total: Option<u64> = cart.items.iter().map(CartItemRecord::line_total).sum();
    let count: u64 = cart.items.iter().map(|line| u64::from(line.quantity)).sum();

    assert_eq!(Some(cart.total), total, "total must equal the sum of line totals");
    assert_eq!(cart.item_count, count, "item_count must equal the sum of quantities");
}
