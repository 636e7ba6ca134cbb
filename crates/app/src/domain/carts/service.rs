//! Carts service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tokio::sync::OwnedMutexGuard;
use tracing::{debug, info, warn};

use crate::{
    domain::{
        carts::{
            data::NewCartItem,
            errors::CartsServiceError,
            locks::CartLocks,
            records::{CartItemRecord, CartItemUuid, CartRecord, CartUuid},
            repositories::{CartsRepository, InMemoryCartsRepository},
        },
        products::{ProductsService, ProductsServiceError},
        users::records::UserUuid,
    },
    latency::SimulatedLatency,
};

/// Cart store over a [`CartsRepository`].
///
/// Every mutation runs under the cart's lock: read a snapshot, validate,
/// change the snapshot, recompute totals, write it back. A failed validation
/// returns before anything is written. Catalog lookups happen before the lock
/// is taken.
#[derive(Clone)]
pub struct StoreCartsService {
    repository: Arc<dyn CartsRepository>,
    products: Arc<dyn ProductsService>,
    locks: Arc<CartLocks>,
    latency: SimulatedLatency,
}

impl fmt::Debug for StoreCartsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreCartsService")
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}

impl StoreCartsService {
    /// A cart store backed by process memory.
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>, latency: SimulatedLatency) -> Self {
        Self::with_repository(Arc::new(InMemoryCartsRepository::new()), products, latency)
    }

    #[must_use]
    pub fn with_repository(
        repository: Arc<dyn CartsRepository>,
        products: Arc<dyn ProductsService>,
        latency: SimulatedLatency,
    ) -> Self {
        Self {
            repository,
            products,
            locks: Arc::new(CartLocks::default()),
            latency,
        }
    }

    async fn ensure_exists(&self, cart: CartUuid) -> Result<(), CartsServiceError> {
        if self.repository.get_cart(cart).await?.is_none() {
            warn!(cart_uuid = %cart, "cart not found");

            return Err(CartsServiceError::CartNotFound);
        }

        Ok(())
    }

    /// Lock `cart` and read its current state. Call after [`Self::ensure_exists`]
    /// so unknown ids never get a lock entry.
    async fn lock(
        &self,
        cart: CartUuid,
    ) -> Result<(OwnedMutexGuard<()>, CartRecord), CartsServiceError> {
        let guard = self.locks.acquire(cart).await;

        let record = self
            .repository
            .get_cart(cart)
            .await?
            .ok_or(CartsServiceError::CartNotFound)?;

        Ok((guard, record))
    }

    async fn checkout(
        &self,
        cart: CartUuid,
    ) -> Result<(OwnedMutexGuard<()>, CartRecord), CartsServiceError> {
        self.ensure_exists(cart).await?;
        self.lock(cart).await
    }

    /// Recompute totals and write the cart back. Call while holding the cart's lock.
    async fn commit(&self, mut record: CartRecord) -> Result<CartRecord, CartsServiceError> {
        if let Err(error) = record.recompute_totals(Timestamp::now()) {
            warn!(cart_uuid = %record.uuid, "cart total overflow");

            return Err(error);
        }

        self.repository.put_cart(record.clone()).await?;

        debug!(
            cart_uuid = %record.uuid,
            total = record.total,
            item_count = record.item_count,
            "cart committed"
        );

        Ok(record)
    }

    fn remove_line(record: &mut CartRecord, item: CartItemUuid) -> Result<(), CartsServiceError> {
        let Some(position) = record.item_position(item) else {
            warn!(cart_uuid = %record.uuid, item_uuid = %item, "cart item not found");

            return Err(CartsServiceError::ItemNotFound);
        };

        record.items.remove(position);

        Ok(())
    }
}

#[async_trait]
impl CartsService for StoreCartsService {
    async fn get_cart(&self, cart: CartUuid) -> Result<Option<CartRecord>, CartsServiceError> {
        self.latency.pause().await;

        Ok(self.repository.get_cart(cart).await?)
    }

    async fn get_or_create_user_cart(&self, user: UserUuid) -> Result<CartRecord, CartsServiceError> {
        self.latency.pause().await;

        if let Some(cart) = self.repository.find_user_cart(user).await? {
            return Ok(cart);
        }

        let candidate = CartRecord::new(CartUuid::new(), Some(user), Timestamp::now());
        let candidate_uuid = candidate.uuid;

        let cart = self.repository.insert_user_cart(user, candidate).await?;

        if cart.uuid == candidate_uuid {
            info!(cart_uuid = %cart.uuid, user_uuid = %user, "created cart");
        }

        Ok(cart)
    }

    async fn add_item(
        &self,
        cart: CartUuid,
        item: NewCartItem,
    ) -> Result<CartRecord, CartsServiceError> {
        self.ensure_exists(cart).await?;

        if item.quantity < 1 {
            warn!(cart_uuid = %cart, quantity = item.quantity, "rejected non-positive quantity");

            return Err(CartsServiceError::InvalidQuantity);
        }

        let product = self
            .products
            .get_product(item.product.clone())
            .await
            .map_err(|error| match error {
                ProductsServiceError::NotFound => CartsServiceError::ProductNotFound,
            })?;

        let (_guard, mut record) = self.lock(cart).await?;

        let available = product.stock;
        let insufficient = CartsServiceError::InsufficientStock { available };

        let Ok(requested) = u32::try_from(item.quantity) else {
            return Err(insufficient);
        };

        if let Some(existing) = record
            .items
            .iter_mut()
            .find(|line| line.product == product.id)
        {
            if u64::from(existing.quantity) + u64::from(requested) > u64::from(available) {
                warn!(cart_uuid = %cart, product_id = %product.id, available, "insufficient stock");

                return Err(insufficient);
            }

            existing.quantity += requested;
        } else {
            if requested > available {
                warn!(cart_uuid = %cart, product_id = %product.id, available, "insufficient stock");

                return Err(insufficient);
            }

            record
                .items
                .push(CartItemRecord::from_product(&product, requested));
        }

        info!(cart_uuid = %cart, product_id = %product.id, quantity = requested, "added item");

        self.commit(record).await
    }

    async fn update_item_quantity(
        &self,
        cart: CartUuid,
        item: CartItemUuid,
        quantity: i64,
    ) -> Result<CartRecord, CartsServiceError> {
        self.latency.pause().await;

        let (_guard, mut record) = self.checkout(cart).await?;

        if quantity <= 0 {
            Self::remove_line(&mut record, item)?;

            info!(cart_uuid = %cart, item_uuid = %item, "removed item via zero quantity");

            return self.commit(record).await;
        }

        let Some(line) = record.items.iter_mut().find(|line| line.uuid == item) else {
            warn!(cart_uuid = %cart, item_uuid = %item, "cart item not found");

            return Err(CartsServiceError::ItemNotFound);
        };

        let available = line.max_quantity;

        match u32::try_from(quantity) {
            Ok(requested) if requested <= available => line.quantity = requested,
            _ => {
                warn!(cart_uuid = %cart, item_uuid = %item, available, "quantity exceeds stock snapshot");

                return Err(CartsServiceError::InsufficientStock { available });
            }
        }

        info!(cart_uuid = %cart, item_uuid = %item, quantity, "updated item quantity");

        self.commit(record).await
    }

    async fn remove_item(
        &self,
        cart: CartUuid,
        item: CartItemUuid,
    ) -> Result<CartRecord, CartsServiceError> {
        self.latency.pause().await;

        let (_guard, mut record) = self.checkout(cart).await?;

        Self::remove_line(&mut record, item)?;

        info!(cart_uuid = %cart, item_uuid = %item, "removed item");

        self.commit(record).await
    }

    async fn clear_cart(&self, cart: CartUuid) -> Result<CartRecord, CartsServiceError> {
        self.latency.pause().await;

        let (_guard, mut record) = self.checkout(cart).await?;

        record.items.clear();

        info!(cart_uuid = %cart, "cleared cart");

        self.commit(record).await
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve a single cart, `None` when the uuid is unknown.
    async fn get_cart(&self, cart: CartUuid) -> Result<Option<CartRecord>, CartsServiceError>;

    /// Return the user's cart, creating an empty one on first access.
    async fn get_or_create_user_cart(&self, user: UserUuid) -> Result<CartRecord, CartsServiceError>;

    /// Add units of a product, merging with an existing line for that product.
    async fn add_item(
        &self,
        cart: CartUuid,
        item: NewCartItem,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Set a line's quantity; zero or less removes the line.
    async fn update_item_quantity(
        &self,
        cart: CartUuid,
        item: CartItemUuid,
        quantity: i64,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Remove a line from the cart.
    async fn remove_item(
        &self,
        cart: CartUuid,
        item: CartItemUuid,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Remove every line from the cart.
    async fn clear_cart(&self, cart: CartUuid) -> Result<CartRecord, CartsServiceError>;
}
