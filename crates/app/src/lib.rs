//! Storefront domain: product catalog, users and the cart store.

pub mod context;
pub mod domain;
pub mod fixtures;
pub mod latency;
pub mod uuids;

#[cfg(test)]
mod test;
