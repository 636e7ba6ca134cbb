//! Carts

pub mod data;
pub mod errors;
mod locks;
pub mod records;
pub mod repositories;
pub mod service;

pub use errors::{CartsRepositoryError, CartsServiceError};
pub use service::*;
