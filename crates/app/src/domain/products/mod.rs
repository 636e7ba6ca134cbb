//! Products

pub mod errors;
pub mod fixtures;
pub mod records;
mod repository;
pub mod service;

pub use errors::ProductsServiceError;
pub use service::*;
