//! fr-db - Database abstraction layer for FoodReach
//!
//! This crate provides the `Database` trait and implementations for
//! Postgres (the hosted census database) and embedded DuckDB (tests and
//! local fixtures).

pub mod duckdb;
pub mod error;
pub mod param;
pub mod postgres;
pub mod traits;

#[cfg(feature = "test-support")]
pub mod test_support;

pub use crate::duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
pub use param::SqlParam;
pub use postgres::PgBackend;
pub use traits::{Database, UpdateStatement};
