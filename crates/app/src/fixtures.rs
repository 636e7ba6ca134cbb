//! Fixtures

use std::{fs, path::Path};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Fixture Loading Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// The same product id appears more than once
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// The same user uuid or token appears more than once
    #[error("Duplicate user: {0}")]
    DuplicateUser(String),

    /// A user was defined with an empty token
    #[error("User {0} has an empty token")]
    EmptyToken(String),
}

/// Parse a YAML fixture from `path`, falling back to the built-in `default`
/// document when no path is configured.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the YAML does not match `T`.
pub(crate) fn load_yaml<T: DeserializeOwned>(
    path: Option<&Path>,
    default: &str,
) -> Result<T, FixtureError> {
    let parsed = match path {
        Some(path) => serde_norway::from_str(&fs::read_to_string(path)?)?,
        None => serde_norway::from_str(default)?,
    };

    Ok(parsed)
}
