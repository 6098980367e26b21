//! Entity trait - common interface for all catalog record types

use rust_decimal::Decimal;
use serde::{de::DeserializeOwned, Serialize};

use crate::core::store::ValidationError;

/// Common trait for records held by a [`Store`](crate::core::Store).
///
/// The serialized form of an implementor is the interchange format of the
/// durable catalog files, so field renames on the struct are load-bearing.
pub trait CatalogEntity: Serialize + DeserializeOwned + Clone {
    /// Kind label used in messages (e.g. "labor resource")
    const KIND: &'static str;

    /// File name of the durable collection under the catalog directory
    const FILE_NAME: &'static str;

    /// The record's name, the key other records use to reference it
    fn name(&self) -> &str;

    /// Reject invalid field values before any mutation is applied
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Names must carry at least one non-whitespace character.
pub(crate) fn check_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

/// Cost, percent, and quantity fields must all be non-negative.
pub(crate) fn check_non_negative(
    field: impl Into<String>,
    value: Decimal,
) -> Result<(), ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::NegativeValue {
            field: field.into(),
            value,
        });
    }
    Ok(())
}
