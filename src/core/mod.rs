//! Core module - stores, catalog facade, and configuration

pub mod catalog;
pub mod config;
pub mod entity;
pub mod store;

pub use catalog::Catalog;
pub use config::Config;
pub use entity::CatalogEntity;
pub use store::{RecordId, Row, Store, StoreError, StoreOptions, ValidationError};
