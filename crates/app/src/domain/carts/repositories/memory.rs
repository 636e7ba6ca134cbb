//! In-memory Carts Repository

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

use crate::domain::{
    carts::{
        errors::CartsRepositoryError,
        records::{CartRecord, CartUuid},
        repositories::CartsRepository,
    },
    users::records::UserUuid,
};

#[derive(Debug, Default)]
struct CartsState {
    carts: FxHashMap<CartUuid, CartRecord>,
    by_user: FxHashMap<UserUuid, CartUuid>,
}

/// Process-lifetime cart storage. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryCartsRepository {
    state: RwLock<CartsState>,
}

impl InMemoryCartsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartsRepository for InMemoryCartsRepository {
    async fn get_cart(&self, cart: CartUuid) -> Result<Option<CartRecord>, CartsRepositoryError> {
        Ok(self.state.read().await.carts.get(&cart).cloned())
    }

    async fn put_cart(&self, cart: CartRecord) -> Result<(), CartsRepositoryError> {
        let mut state = self.state.write().await;

        if let Some(user) = cart.user {
            state.by_user.entry(user).or_insert(cart.uuid);
        }

        state.carts.insert(cart.uuid, cart);

        Ok(())
    }

    async fn find_user_cart(
        &self,
        user: UserUuid,
    ) -> Result<Option<CartRecord>, CartsRepositoryError> {
        let state = self.state.read().await;

        Ok(state
            .by_user
            .get(&user)
            .and_then(|cart| state.carts.get(cart))
            .cloned())
    }

    async fn insert_user_cart(
        &self,
        user: UserUuid,
        mut cart: CartRecord,
    ) -> Result<CartRecord, CartsRepositoryError> {
        let mut state = self.state.write().await;

        if let Some(existing) = state
            .by_user
            .get(&user)
            .and_then(|uuid| state.carts.get(uuid))
        {
            return Ok(existing.clone());
        }

        if state.carts.contains_key(&cart.uuid) {
            return Err(CartsRepositoryError::AlreadyExists(cart.uuid));
        }

        cart.user = Some(user);

        state.by_user.insert(user, cart.uuid);
        state.carts.insert(cart.uuid, cart.clone());

        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use super::*;

    fn empty_cart() -> CartRecord {
        CartRecord::new(CartUuid::new(), None, Timestamp::now())
    }

    #[tokio::test]
    async fn get_returns_independent_snapshots() -> TestResult {
        let repository = InMemoryCartsRepository::new();
        let cart = empty_cart();

        repository.put_cart(cart.clone()).await?;

        let mut snapshot = repository.get_cart(cart.uuid).await?.ok_or("cart missing")?;

        snapshot.total = 42;

        let stored = repository.get_cart(cart.uuid).await?.ok_or("cart missing")?;

        assert_eq!(stored.total, 0, "mutating a snapshot must not touch the store");

        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_cart_returns_none() -> TestResult {
        let repository = InMemoryCartsRepository::new();

        assert!(repository.get_cart(CartUuid::new()).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn insert_user_cart_keeps_the_first_cart() -> TestResult {
        let repository = InMemoryCartsRepository::new();
        let user = UserUuid::new();

        let first = repository.insert_user_cart(user, empty_cart()).await?;
        let second = repository.insert_user_cart(user, empty_cart()).await?;

        assert_eq!(first.uuid, second.uuid);
        assert_eq!(first.user, Some(user));

        let found = repository.find_user_cart(user).await?.ok_or("cart missing")?;

        assert_eq!(found.uuid, first.uuid);

        Ok(())
    }

    #[tokio::test]
    async fn insert_user_cart_rejects_uuid_collision() -> TestResult {
        let repository = InMemoryCartsRepository::new();
        let cart = empty_cart();

        repository.put_cart(cart.clone()).await?;

        let result = repository.insert_user_cart(UserUuid::new(), cart.clone()).await;

        assert!(
            matches!(result, Err(CartsRepositoryError::AlreadyExists(uuid)) if uuid == cart.uuid),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn find_user_cart_without_cart_returns_none() -> TestResult {
        let repository = InMemoryCartsRepository::new();

        assert!(repository.find_user_cart(UserUuid::new()).await?.is_none());

        Ok(())
    }
}
