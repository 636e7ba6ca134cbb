//! Cart Records

use jiff::Timestamp;

use crate::{
    domain::{
        carts::errors::CartsServiceError,
        products::records::{ProductId, ProductRecord},
        users::records::UserUuid,
    },
    uuids::TypedUuid,
};

/// Cart UUID
pub type CartUuid = TypedUuid<CartRecord>;

/// Cart Record
///
/// `total` and `item_count` are derived from `items` and are only ever
/// written by [`CartRecord::recompute_totals`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRecord {
    pub uuid: CartUuid,
    pub user: Option<UserUuid>,
    pub items: Vec<CartItemRecord>,
    /// Sum of line totals, in minor currency units.
    pub total: u64,
    /// Sum of line quantities.
    pub item_count: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CartRecord {
    /// An empty cart created at `now`.
    #[must_use]
    pub fn new(uuid: CartUuid, user: Option<UserUuid>, now: Timestamp) -> Self {
        Self {
            uuid,
            user,
            items: Vec::new(),
            total: 0,
            item_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Find a line by its uuid.
    #[must_use]
    pub fn item(&self, item: CartItemUuid) -> Option<&CartItemRecord> {
        self.items.iter().find(|line| line.uuid == item)
    }

    /// Find the line holding `product`, if any.
    #[must_use]
    pub fn item_for_product(&self, product: &ProductId) -> Option<&CartItemRecord> {
        self.items.iter().find(|line| line.product == *product)
    }

    pub(crate) fn item_position(&self, item: CartItemUuid) -> Option<usize> {
        self.items.iter().position(|line| line.uuid == item)
    }

    /// Derive `total` and `item_count` from the current lines and stamp `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`CartsServiceError::TotalTooLarge`] and leaves the record untouched
    /// when the total does not fit in `u64`.
    pub(crate) fn recompute_totals(&mut self, now: Timestamp) -> Result<(), CartsServiceError> {
        let total = self
            .items
            .iter()
            .try_fold(0_u64, |total, line| total.checked_add(line.line_total()?))
            .ok_or(CartsServiceError::TotalTooLarge)?;

        self.total = total;
        self.item_count = self.items.iter().map(|line| u64::from(line.quantity)).sum();
        self.updated_at = now;

        Ok(())
    }
}

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItemRecord>;

/// CartItem Record
///
/// `name`, `price`, `image` and `max_quantity` are snapshots of the catalog
/// at the time the line was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemRecord {
    pub uuid: CartItemUuid,
    pub product: ProductId,
    pub name: String,
    /// Unit price in minor currency units.
    pub price: u64,
    pub quantity: u32,
    pub image: String,
    pub max_quantity: u32,
}

impl CartItemRecord {
    /// A new line for `quantity` units of `product`.
    #[must_use]
    pub fn from_product(product: &ProductRecord, quantity: u32) -> Self {
        Self {
            uuid: CartItemUuid::new(),
            product: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity,
            image: product.image.clone(),
            max_quantity: product.stock,
        }
    }

    /// Unit price times quantity, `None` on overflow.
    #[must_use]
    pub fn line_total(&self) -> Option<u64> {
        self.price.checked_mul(u64::from(self.quantity))
    }
}
