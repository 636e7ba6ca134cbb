//! Products service.

use std::{fmt, path::Path, sync::Arc};

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::products::{
        errors::ProductsServiceError,
        fixtures::load_catalog,
        records::{ProductId, ProductRecord},
        repository::InMemoryProductsRepository,
    },
    fixtures::FixtureError,
    latency::SimulatedLatency,
};

#[derive(Clone)]
pub struct CatalogProductsService {
    repository: Arc<InMemoryProductsRepository>,
    latency: SimulatedLatency,
}

impl fmt::Debug for CatalogProductsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogProductsService")
            .field("products_count", &self.repository.list_products().len())
            .field("latency", &self.latency)
            .finish()
    }
}

impl CatalogProductsService {
    /// Build a catalog from the given products.
    ///
    /// # Errors
    ///
    /// Returns an error when two products share an id.
    pub fn new(
        products: Vec<ProductRecord>,
        latency: SimulatedLatency,
    ) -> Result<Self, FixtureError> {
        Ok(Self {
            repository: Arc::new(InMemoryProductsRepository::new(products)?),
            latency,
        })
    }

    /// Build a catalog from a YAML fixture, or the built-in demo catalog.
    ///
    /// # Errors
    ///
    /// Returns an error when the fixture cannot be loaded or contains duplicates.
    pub fn from_fixture(
        path: Option<&Path>,
        latency: SimulatedLatency,
    ) -> Result<Self, FixtureError> {
        Self::new(load_catalog(path)?, latency)
    }
}

#[async_trait]
impl ProductsService for CatalogProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        self.latency.pause().await;

        Ok(self.repository.list_products().to_vec())
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        self.latency.pause().await;

        self.repository
            .get_product(&product)
            .cloned()
            .ok_or(ProductsServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products in catalog order.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;
}
