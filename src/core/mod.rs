//! Core module - catalog store, validation, and search

pub mod config;
pub mod entity;
pub mod inventory;
pub mod search;
pub mod validate;

pub use config::Config;
pub use entity::{Entity, EntityKind};
pub use inventory::Inventory;
pub use validate::{validate_part, validate_product, ValidationError};
