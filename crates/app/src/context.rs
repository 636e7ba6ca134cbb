//! App Context

use std::{path::PathBuf, sync::Arc};

use thiserror::Error;
use tracing::info;

use crate::{
    domain::{
        carts::{CartsService, StoreCartsService},
        products::{CatalogProductsService, ProductsService},
        users::{InMemoryUsersService, UsersService},
    },
    fixtures::FixtureError,
    latency::SimulatedLatency,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to load product catalog")]
    Catalog(#[source] FixtureError),

    #[error("failed to load users")]
    Users(#[source] FixtureError),
}

/// Where the stores get their seed data from, and how slow they pretend to be.
#[derive(Debug, Clone, Default)]
pub struct AppSettings {
    /// Catalog fixture; the built-in demo catalog when `None`.
    pub catalog_path: Option<PathBuf>,
    /// Users fixture; the built-in demo users when `None`.
    pub users_path: Option<PathBuf>,
    pub latency: SimulatedLatency,
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub users: Arc<dyn UsersService>,
}

impl AppContext {
    /// Build application context from fixture settings.
    ///
    /// # Errors
    ///
    /// Returns an error when a fixture cannot be read or is invalid.
    pub fn from_settings(settings: &AppSettings) -> Result<Self, AppInitError> {
        let products: Arc<dyn ProductsService> = Arc::new(
            CatalogProductsService::from_fixture(settings.catalog_path.as_deref(), settings.latency)
                .map_err(AppInitError::Catalog)?,
        );

        let users = InMemoryUsersService::from_fixture(settings.users_path.as_deref(), settings.latency)
            .map_err(AppInitError::Users)?;

        info!(
            catalog = ?settings.catalog_path,
            users = ?settings.users_path,
            latency_ms = settings.latency.delay().as_millis(),
            "loaded fixtures"
        );

        Ok(Self {
            carts: Arc::new(StoreCartsService::new(Arc::clone(&products), settings.latency)),
            products,
            users: Arc::new(users),
        })
    }
}
