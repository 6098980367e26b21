//! Labor resource entity

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::entity::{check_name, check_non_negative, CatalogEntity};
use crate::core::store::ValidationError;

/// A labor resource billed by the hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborResource {
    #[serde(rename = "Nome")]
    pub name: String,

    #[serde(rename = "Custo_Hora")]
    pub hourly_cost: Decimal,
}

impl LaborResource {
    pub fn new(name: impl Into<String>, hourly_cost: Decimal) -> Self {
        Self {
            name: name.into(),
            hourly_cost,
        }
    }
}

impl CatalogEntity for LaborResource {
    const KIND: &'static str = "labor resource";
    const FILE_NAME: &'static str = "maos_de_obra.json";

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_name(&self.name)?;
        check_non_negative("hourly cost", self.hourly_cost)
    }
}
