//! Cart Data

use crate::domain::products::records::ProductId;

/// New Cart Item Data
///
/// `quantity` is signed so that callers can pass through whatever the client
/// sent; non-positive values are rejected by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub product: ProductId,
    pub quantity: i64,
}

impl NewCartItem {
    /// A single unit of `product`.
    #[must_use]
    pub fn single(product: impl Into<ProductId>) -> Self {
        Self {
            product: product.into(),
            quantity: 1,
        }
    }
}
