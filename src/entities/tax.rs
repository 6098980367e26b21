//! Tax rate entity

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::entity::{check_name, check_non_negative, CatalogEntity};
use crate::core::store::ValidationError;

/// Tax percentage applied in one jurisdiction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRate {
    #[serde(rename = "Estado")]
    pub jurisdiction: String,

    #[serde(rename = "Percentual")]
    pub percent: Decimal,
}

impl TaxRate {
    pub fn new(jurisdiction: impl Into<String>, percent: Decimal) -> Self {
        Self {
            jurisdiction: jurisdiction.into(),
            percent,
        }
    }
}

impl CatalogEntity for TaxRate {
    const KIND: &'static str = "tax rate";
    const FILE_NAME: &'static str = "impostos.json";

    fn name(&self) -> &str {
        &self.jurisdiction
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_name(&self.jurisdiction)?;
        check_non_negative("tax percent", self.percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_interchange_keys() {
        let rate = TaxRate::new("CA", Decimal::from(8));
        let json = serde_json::to_value(&rate).unwrap();
        assert_eq!(json["Estado"], "CA");
        assert_eq!(json["Percentual"], serde_json::json!(8.0));
    }
}
