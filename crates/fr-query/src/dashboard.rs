//! The dashboard read facade.
//!
//! One [`Dashboard`] per session: it owns the database handle and the
//! result cache. Every screen load goes through `cached`, so a repeated
//! read is served without touching the database until a write
//! invalidates the cache. Each method is an independent operation; a
//! failing screen leaves the others able to render.

use crate::cache::QueryCache;
use crate::county::{self, CountyBreakdown, CountyNoVehicle};
use crate::error::QueryResult;
use crate::row_helpers::require_str;
use crate::state::{self, StatePopulation, UrbanRuralSplit};
use crate::tract::{self, TractDemographics};
use fr_core::Frame;
use fr_db::{Database, SqlParam};
use std::sync::Arc;

/// Read facade over the census database for one session.
pub struct Dashboard {
    db: Arc<dyn Database>,
    cache: QueryCache,
}

impl Dashboard {
    /// New facade with an empty cache.
    pub fn new(db: Arc<dyn Database>) -> Self {
        Self {
            db,
            cache: QueryCache::new(),
        }
    }

    /// Shared handle to the underlying database.
    pub fn db(&self) -> Arc<dyn Database> {
        Arc::clone(&self.db)
    }

    /// Drop all memoized results. Called after any successful write.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }

    async fn cached(&self, sql: &str, params: &[SqlParam]) -> QueryResult<Frame> {
        let key = QueryCache::key(sql, params);
        if let Some(frame) = self.cache.get(&key) {
            return Ok(frame);
        }
        let frame = self.db.query(sql, params).await?;
        self.cache.insert(key, frame.clone());
        Ok(frame)
    }

    /// Counties ranked by households lacking vehicle access among the
    /// low-access population.
    pub async fn top_counties_no_vehicle(
        &self,
        limit: i64,
        state: Option<&str>,
    ) -> QueryResult<Vec<CountyNoVehicle>> {
        let (sql, params) = county::top_no_vehicle_query(limit, state);
        let frame = self.cached(&sql, &params).await?;
        CountyNoVehicle::from_frame(&frame)
    }

    /// Per-county demographic breakdown of the low-access population.
    pub async fn county_low_access_breakdown(
        &self,
        state: Option<&str>,
    ) -> QueryResult<Vec<CountyBreakdown>> {
        let (sql, params) = county::breakdown_query(state);
        let frame = self.cached(&sql, &params).await?;
        CountyBreakdown::from_frame(&frame)
    }

    /// Raw snapshot behind the editable grid, bounded and ordered.
    pub async fn demographics_sample(&self) -> QueryResult<Frame> {
        let (sql, params) = tract::demographics_sample_query();
        self.cached(&sql, &params).await
    }

    /// Typed rows of the grid snapshot.
    pub async fn tract_rows(&self) -> QueryResult<Vec<TractDemographics>> {
        let frame = self.demographics_sample().await?;
        TractDemographics::from_frame(&frame)
    }

    /// Total vs. low-access population for one state; `None` when the
    /// state has no tracts.
    pub async fn state_population(&self, state: &str) -> QueryResult<Option<StatePopulation>> {
        let (sql, params) = state::state_population_query(state);
        let frame = self.cached(&sql, &params).await?;
        StatePopulation::from_frame(&frame)
    }

    /// Urban vs. rural low-access split for one state; `None` when the
    /// state has no tracts.
    pub async fn state_urban_rural(&self, state: &str) -> QueryResult<Option<UrbanRuralSplit>> {
        let (sql, params) = state::urban_rural_query(state);
        let frame = self.cached(&sql, &params).await?;
        UrbanRuralSplit::from_frame(state, &frame)
    }

    /// State selector options.
    pub async fn list_states(&self) -> QueryResult<Vec<String>> {
        let (sql, params) = state::list_states_query();
        let frame = self.cached(&sql, &params).await?;
        name_column(&frame)
    }

    /// County selector options, optionally within one state.
    pub async fn list_counties(&self, state: Option<&str>) -> QueryResult<Vec<String>> {
        let (sql, params) = county::list_counties_query(state);
        let frame = self.cached(&sql, &params).await?;
        name_column(&frame)
    }
}

fn name_column(frame: &Frame) -> QueryResult<Vec<String>> {
    (0..frame.row_count())
        .map(|row| require_str(frame, row, 0))
        .collect()
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
