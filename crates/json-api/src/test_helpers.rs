//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use storefront_app::{
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            records::{CartItemRecord, CartRecord, CartUuid},
        },
        products::{MockProductsService, records::ProductRecord},
        users::{
            MockUsersService,
            records::{UserRecord, UserUuid},
        },
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_u128(1);

pub(crate) fn test_user() -> UserRecord {
    UserRecord {
        uuid: TEST_USER_UUID,
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
    }
}

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user(test_user());
    ctrl.call_next(req, depot, res).await;
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();

    products
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_get_or_create_user_cart().never();
    carts.expect_add_item().never();
    carts.expect_update_item_quantity().never();
    carts.expect_remove_item().never();
    carts.expect_clear_cart().never();

    carts
}

fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_authenticate_token().never();

    users
}

fn state(
    products: MockProductsService,
    carts: MockCartsService,
    users: MockUsersService,
) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
        carts: Arc::new(carts),
        users: Arc::new(users),
    })
}

pub(crate) fn state_with_users(users: MockUsersService) -> Arc<State> {
    state(strict_products_mock(), strict_carts_mock(), users)
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(products, strict_carts_mock(), strict_users_mock())))
            .push(route),
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(strict_products_mock(), carts, strict_users_mock())))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn make_product(id: &str, price: u64, stock: u32) -> ProductRecord {
    ProductRecord {
        id: id.into(),
        name: format!("Product {id}"),
        price,
        stock,
        image: format!("/images/{id}.jpg"),
    }
}

pub(crate) fn make_cart() -> CartRecord {
    CartRecord::new(CartUuid::new(), Some(TEST_USER_UUID), Timestamp::UNIX_EPOCH)
}

/// A cart holding one line of `quantity` units, with totals filled in.
pub(crate) fn make_cart_with_item(product: &str, price: u64, quantity: u32) -> CartRecord {
    let mut cart = make_cart();
    let item = CartItemRecord::from_product(&make_product(product, price, 10), quantity);

    cart.total = item.price * u64::from(quantity);
    cart.item_count = u64::from(quantity);
    cart.items.push(item);

    cart
}
