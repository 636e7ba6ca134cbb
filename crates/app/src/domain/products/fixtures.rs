//! Catalog Fixtures

use std::path::Path;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::Deserialize;

use crate::{
    domain::products::records::{ProductId, ProductRecord},
    fixtures::{FixtureError, load_yaml},
};

const DEFAULT_CATALOG: &str = include_str!("../../../fixtures/catalog.yaml");

/// Wrapper for the catalog in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Products in display order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    pub id: String,
    pub name: String,

    /// Decimal price, e.g. `"299.99"`
    pub price: String,

    pub stock: u32,
    pub image: String,
}

impl TryFrom<ProductFixture> for ProductRecord {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::new(fixture.id),
            name: fixture.name,
            price: parse_price(&fixture.price)?,
            stock: fixture.stock,
            image: fixture.image,
        })
    }
}

/// Load the catalog from `path`, or the built-in demo catalog.
///
/// # Errors
///
/// Returns an error if the fixture cannot be read or parsed, or a price is malformed.
pub fn load_catalog(path: Option<&Path>) -> Result<Vec<ProductRecord>, FixtureError> {
    let fixture: CatalogFixture = load_yaml(path, DEFAULT_CATALOG)?;

    fixture
        .products
        .into_iter()
        .map(ProductRecord::try_from)
        .collect()
}

/// Parse a decimal price string (e.g. `"2.99"`) into minor units.
///
/// # Errors
///
/// Returns an error if the amount is not a decimal, is negative, or does not
/// fit in minor units.
pub fn parse_price(s: &str) -> Result<u64, FixtureError> {
    let amount = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|value| value.round_dp(0).to_u64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_prices_into_minor_units() -> TestResult {
        assert_eq!(parse_price("299.99")?, 29_999);
        assert_eq!(parse_price("5")?, 500);
        assert_eq!(parse_price(" 0.5 ")?, 50);

        Ok(())
    }

    #[test]
    fn rejects_malformed_and_negative_prices() {
        assert!(matches!(
            parse_price("twelve"),
            Err(FixtureError::InvalidPrice(_))
        ));
        assert!(matches!(
            parse_price("-1.00"),
            Err(FixtureError::InvalidPrice(_))
        ));
    }

    #[test]
    fn built_in_catalog_contains_headphones() -> TestResult {
        let catalog = load_catalog(None)?;

        let headphones = catalog
            .iter()
            .find(|product| product.id.as_str() == "1")
            .ok_or("product 1 missing from built-in catalog")?;

        assert_eq!(headphones.price, 29_999);
        assert_eq!(headphones.stock, 10);

        Ok(())
    }
}
