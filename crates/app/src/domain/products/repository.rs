//! Products Repository

use rustc_hash::FxHashMap;

use crate::{
    domain::products::records::{ProductId, ProductRecord},
    fixtures::FixtureError,
};

/// Read-only catalog held in memory, preserving fixture order.
#[derive(Debug, Clone, Default)]
pub(crate) struct InMemoryProductsRepository {
    products: Vec<ProductRecord>,
    index: FxHashMap<ProductId, usize>,
}

impl InMemoryProductsRepository {
    pub(crate) fn new(products: Vec<ProductRecord>) -> Result<Self, FixtureError> {
        let mut index = FxHashMap::default();

        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id.clone(), position).is_some() {
                return Err(FixtureError::DuplicateProduct(product.id.to_string()));
            }
        }

        Ok(Self { products, index })
    }

    pub(crate) fn list_products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub(crate) fn get_product(&self, product: &ProductId) -> Option<&ProductRecord> {
        self.index
            .get(product)
            .and_then(|position| self.products.get(*position))
    }
}
