//! Store Config

use std::path::PathBuf;

use clap::Args;

use storefront_app::{context::AppSettings, latency::SimulatedLatency};

/// Seed data and behaviour of the in-memory stores.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// YAML product catalog; the built-in demo catalog is used when unset
    #[arg(long, env = "CATALOG_PATH")]
    pub catalog_path: Option<PathBuf>,

    /// YAML users and their bearer tokens; the built-in demo users are used when unset
    #[arg(long, env = "USERS_PATH")]
    pub users_path: Option<PathBuf>,

    /// Artificial delay applied before every catalog, user and cart operation
    #[arg(long, env = "SIMULATED_LATENCY_MS", default_value_t = 0_u64)]
    pub simulated_latency_ms: u64,
}

impl StoreConfig {
    /// Settings for building the application context.
    #[must_use]
    pub fn app_settings(&self) -> AppSettings {
        AppSettings {
            catalog_path: self.catalog_path.clone(),
            users_path: self.users_path.clone(),
            latency: SimulatedLatency::from_millis(self.simulated_latency_ms),
        }
    }
}
