//! Entity type definitions
//!
//! The catalog holds four record kinds:
//!
//! - [`LaborResource`] - labor billed by the hour
//! - [`RawMaterial`] - materials costed per unit
//! - [`TaxRate`] - tax percentage per jurisdiction
//! - [`Product`] - composite products whose bill of materials references
//!   labor and materials by name
//!
//! Serialized field names are the interchange keys of the durable JSON
//! files and must not change; the Rust-side names are free.

pub mod labor;
pub mod material;
pub mod product;
pub mod tax;

pub use labor::LaborResource;
pub use material::RawMaterial;
pub use product::Product;
pub use tax::TaxRate;
