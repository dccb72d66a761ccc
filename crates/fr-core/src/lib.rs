//! fr-core - Core library for FoodReach
//!
//! This crate provides the shared types used across all FoodReach
//! components: environment-based connection settings, the `Cell`/`Frame`
//! tabular snapshot types, and the core error type.

pub mod config;
pub mod error;
pub mod frame;

pub use config::DbSettings;
pub use error::{CoreError, CoreResult};
pub use frame::{Cell, Frame};
