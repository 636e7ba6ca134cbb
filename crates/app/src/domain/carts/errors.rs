//! Carts service errors.

use thiserror::Error;

use crate::domain::carts::records::CartUuid;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("Cart not found")]
    CartNotFound,

    #[error("Product not found")]
    ProductNotFound,

    #[error("Item not found in cart")]
    ItemNotFound,

    #[error("Insufficient stock. Only {available} available")]
    InsufficientStock { available: u32 },

    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    #[error("Cart total exceeds the maximum supported amount")]
    TotalTooLarge,

    #[error("storage error")]
    Storage(#[from] CartsRepositoryError),
}

impl CartsServiceError {
    /// Whether the error was caused by the request rather than the store.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

/// Errors raised by a [`CartsRepository`](crate::domain::carts::repositories::CartsRepository).
#[derive(Debug, Error)]
pub enum CartsRepositoryError {
    #[error("cart {0} already exists")]
    AlreadyExists(CartUuid),

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_client_facing_wording() {
        assert_eq!(
            CartsServiceError::ItemNotFound.to_string(),
            "Item not found in cart"
        );
        assert_eq!(
            CartsServiceError::InsufficientStock { available: 10 }.to_string(),
            "Insufficient stock. Only 10 available"
        );
    }

    #[test]
    fn storage_errors_are_not_client_errors() {
        let storage = CartsServiceError::from(CartsRepositoryError::Unavailable("down".into()));

        assert!(!storage.is_client_error());
        assert!(CartsServiceError::CartNotFound.is_client_error());
    }
}
