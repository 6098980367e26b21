//! Raw material entity

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::entity::{check_name, check_non_negative, CatalogEntity};
use crate::core::store::ValidationError;

/// A raw material costed per unit (kilogram, meter, piece - the catalog
/// does not track units, only the cost of one).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMaterial {
    #[serde(rename = "Nome")]
    pub name: String,

    #[serde(rename = "Custo_Unidade")]
    pub unit_cost: Decimal,
}

impl RawMaterial {
    pub fn new(name: impl Into<String>, unit_cost: Decimal) -> Self {
        Self {
            name: name.into(),
            unit_cost,
        }
    }
}

impl CatalogEntity for RawMaterial {
    const KIND: &'static str = "raw material";
    const FILE_NAME: &'static str = "materias_primas.json";

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_name(&self.name)?;
        check_non_negative("unit cost", self.unit_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_interchange_keys() {
        let material = RawMaterial::new("Steel", Decimal::from(10));
        let json = serde_json::to_value(&material).unwrap();
        assert_eq!(json["Nome"], "Steel");
        assert_eq!(json["Custo_Unidade"], serde_json::json!(10.0));
    }
}
