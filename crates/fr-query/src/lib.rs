//! fr-query - Dashboard query catalog for FoodReach
//!
//! Every screen reads through [`Dashboard`]: a fixed set of parameterized
//! statements over the census tables, memoized per query key until a
//! write invalidates the cache.

pub mod cache;
pub mod county;
pub mod dashboard;
pub mod error;
pub(crate) mod row_helpers;
pub mod state;
pub mod tract;

pub use cache::QueryCache;
pub use county::{CountyBreakdown, CountyNoVehicle};
pub use dashboard::Dashboard;
pub use error::{QueryError, QueryResult};
pub use state::{AccessTotals, StatePopulation, UrbanRuralSplit};
pub use tract::{TractDemographics, SAMPLE_LIMIT};
