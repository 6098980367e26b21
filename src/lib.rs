//! Precofino: small-shop sale pricing
//!
//! Keeps a catalog of labor resources, raw materials, tax rates, and
//! products as plain JSON files, and derives a final sale price from a
//! product's bill of materials, a profit margin, and a tax jurisdiction.

pub mod cli;
pub mod core;
pub mod entities;
pub mod pricing;
