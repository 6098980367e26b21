//! Product entity - a named bill of materials

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::entity::{check_name, check_non_negative, CatalogEntity};
use crate::core::store::ValidationError;

/// A composite product: hours of labor and quantities of materials,
/// keyed by the referenced record's name.
///
/// The references are soft. Writing a product that names a missing
/// resource is allowed; resolution happens at pricing time. Both usage
/// maps serialize as nested JSON objects, and either may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "Nome")]
    pub name: String,

    /// Hours of each labor resource.
    #[serde(rename = "Maos_de_Obra", default)]
    pub labor_usage: BTreeMap<String, Decimal>,

    /// Quantity of each raw material.
    #[serde(rename = "Materias_Primas", default)]
    pub material_usage: BTreeMap<String, Decimal>,
}

impl Product {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            labor_usage: BTreeMap::new(),
            material_usage: BTreeMap::new(),
        }
    }
}

impl CatalogEntity for Product {
    const KIND: &'static str = "product";
    const FILE_NAME: &'static str = "produtos.json";

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_name(&self.name)?;
        for (resource, hours) in &self.labor_usage {
            check_non_negative(format!("hours of '{resource}'"), *hours)?;
        }
        for (material, quantity) in &self.material_usage {
            check_non_negative(format!("quantity of '{material}'"), *quantity)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chair() -> Product {
        let mut product = Product::new("Chair");
        product
            .labor_usage
            .insert("Welder".to_string(), Decimal::from(2));
        product
            .material_usage
            .insert("Steel".to_string(), Decimal::from(3));
        product
    }

    #[test]
    fn test_usage_maps_serialize_as_nested_objects() {
        let json = serde_json::to_value(chair()).unwrap();
        assert_eq!(json["Nome"], "Chair");
        assert!(json["Maos_de_Obra"].is_object());
        assert_eq!(json["Maos_de_Obra"]["Welder"], serde_json::json!(2.0));
        assert_eq!(json["Materias_Primas"]["Steel"], serde_json::json!(3.0));
    }

    #[test]
    fn test_round_trips_losslessly() {
        let original = chair();
        let json = serde_json::to_string(&original).unwrap();
        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_empty_usage_maps_are_valid() {
        let product = Product::new("Prototype");
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_negative_usage_is_rejected() {
        let mut product = Product::new("Chair");
        product
            .labor_usage
            .insert("Welder".to_string(), Decimal::from(-2));
        assert!(matches!(
            product.validate(),
            Err(ValidationError::NegativeValue { .. })
        ));
    }
}
