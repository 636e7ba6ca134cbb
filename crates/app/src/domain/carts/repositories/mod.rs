//! Cart Repositories

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::{
    carts::{
        errors::CartsRepositoryError,
        records::{CartRecord, CartUuid},
    },
    users::records::UserUuid,
};

mod memory;

pub use memory::InMemoryCartsRepository;

/// Storage for cart records.
///
/// Records go in and come out by value; callers never hold a reference into
/// the store.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CartsRepository: Send + Sync {
    /// Fetch a snapshot of a cart.
    async fn get_cart(&self, cart: CartUuid) -> Result<Option<CartRecord>, CartsRepositoryError>;

    /// Store `cart`, replacing any previous version with the same uuid.
    async fn put_cart(&self, cart: CartRecord) -> Result<(), CartsRepositoryError>;

    /// Fetch the cart owned by `user`, if one has been created.
    async fn find_user_cart(
        &self,
        user: UserUuid,
    ) -> Result<Option<CartRecord>, CartsRepositoryError>;

    /// Store `cart` as the cart of `user` unless the user already has one, in
    /// which case the existing cart is returned and `cart` is discarded.
    ///
    /// The check and the insert are a single atomic step.
    async fn insert_user_cart(
        &self,
        user: UserUuid,
        cart: CartRecord,
    ) -> Result<CartRecord, CartsRepositoryError>;
}
