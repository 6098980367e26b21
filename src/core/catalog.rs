//! Catalog facade over the four stores

use std::path::Path;

use rust_decimal::Decimal;

use crate::core::config::Config;
use crate::core::store::{Store, StoreError};
use crate::entities::{LaborResource, Product, RawMaterial, TaxRate};
use crate::pricing::{price_product, PriceBreakdown, PricingError};

/// The four stores of one catalog directory, opened together.
///
/// Writes go through the individual stores and carry no cross-entity
/// checks: a product may name a labor resource or material that does not
/// exist yet (or no longer exists). Catalog edits stay order-independent
/// that way; a dangling reference only surfaces when the product is
/// priced, as a typed [`PricingError`].
#[derive(Debug)]
pub struct Catalog {
    labor: Store<LaborResource>,
    materials: Store<RawMaterial>,
    taxes: Store<TaxRate>,
    products: Store<Product>,
    config: Config,
}

impl Catalog {
    /// Open the catalog under `dir`, reading `config.json` for options.
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        let config = Config::load(dir);
        Self::open_with(dir, config)
    }

    /// Open the catalog under `dir` with explicit configuration.
    pub fn open_with(dir: &Path, config: Config) -> Result<Self, StoreError> {
        let options = config.store_options();
        Ok(Self {
            labor: Store::open(dir, options)?,
            materials: Store::open(dir, options)?,
            taxes: Store::open(dir, options)?,
            products: Store::open(dir, options)?,
            config,
        })
    }

    pub fn labor(&self) -> &Store<LaborResource> {
        &self.labor
    }

    pub fn labor_mut(&mut self) -> &mut Store<LaborResource> {
        &mut self.labor
    }

    pub fn materials(&self) -> &Store<RawMaterial> {
        &self.materials
    }

    pub fn materials_mut(&mut self) -> &mut Store<RawMaterial> {
        &mut self.materials
    }

    pub fn taxes(&self) -> &Store<TaxRate> {
        &self.taxes
    }

    pub fn taxes_mut(&mut self) -> &mut Store<TaxRate> {
        &mut self.taxes
    }

    pub fn products(&self) -> &Store<Product> {
        &self.products
    }

    pub fn products_mut(&mut self) -> &mut Store<Product> {
        &mut self.products
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Price a product against the catalog's current rates.
    pub fn price(
        &self,
        product: &Product,
        jurisdiction: Option<&str>,
        profit_percent: Decimal,
    ) -> Result<PriceBreakdown, PricingError> {
        price_product(
            product,
            &self.labor,
            &self.materials,
            &self.taxes,
            jurisdiction,
            profit_percent,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_empty_directory() {
        let dir = tempdir().unwrap();
        let catalog = Catalog::open(dir.path()).unwrap();
        assert!(catalog.labor().is_empty());
        assert!(catalog.materials().is_empty());
        assert!(catalog.taxes().is_empty());
        assert!(catalog.products().is_empty());
    }

    #[test]
    fn test_config_options_reach_the_stores() {
        let dir = tempdir().unwrap();
        let config = Config {
            unique_names: true,
            ..Config::default()
        };
        config.write(dir.path()).unwrap();

        let mut catalog = Catalog::open(dir.path()).unwrap();
        catalog
            .taxes_mut()
            .add(TaxRate::new("CA", Decimal::from(8)))
            .unwrap();
        assert!(catalog
            .taxes_mut()
            .add(TaxRate::new("CA", Decimal::from(9)))
            .is_err());
    }

    #[test]
    fn test_product_may_reference_missing_resources_at_write_time() {
        let dir = tempdir().unwrap();
        let mut catalog = Catalog::open(dir.path()).unwrap();

        let mut product = Product::new("Gate");
        product
            .labor_usage
            .insert("Welder".to_string(), Decimal::from(2));

        // no Welder in the labor store, yet the write is accepted
        let id = catalog.products_mut().add(product).unwrap();
        assert!(catalog.products().get(id).is_some());
    }
}
