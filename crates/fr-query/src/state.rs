//! State-level reads: population totals and the urban/rural split.

use crate::error::QueryResult;
use crate::row_helpers::{require_bool, require_i64, require_str};
use fr_core::Frame;
use fr_db::SqlParam;
use serde::Serialize;

/// Total vs. low-access population for one state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatePopulation {
    /// State name
    pub state: String,
    /// Total population across the state's tracts
    pub total_population: i64,
    /// Low-access population across the state's tracts
    pub low_access_population: i64,
}

/// Population totals for one urban-or-rural group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessTotals {
    /// Total population in the group
    pub population: i64,
    /// Low-access population in the group
    pub low_access_population: i64,
    /// Low-access share as a percentage; undefined when the group is empty
    pub low_access_pct: Option<f64>,
}

impl AccessTotals {
    /// Build totals, computing the percentage with its zero guard.
    pub fn new(population: i64, low_access_population: i64) -> Self {
        let low_access_pct = if population == 0 {
            None
        } else {
            Some(low_access_population as f64 / population as f64 * 100.0)
        };
        Self {
            population,
            low_access_population,
            low_access_pct,
        }
    }

    fn empty() -> Self {
        Self::new(0, 0)
    }
}

/// Urban vs. rural low-access split for one state.
///
/// A state whose tracts are all one kind still yields both groups; the
/// absent one is zeroed with an undefined percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrbanRuralSplit {
    /// State name
    pub state: String,
    /// Urban-tract totals
    pub urban: AccessTotals,
    /// Rural-tract totals
    pub rural: AccessTotals,
}

const JOINS: &str = r#"FROM "FoodAccessIndicator" f
JOIN "CensusTract" ct ON ct.tract_id = f.tract_id
JOIN "County" c ON c.county_id = ct.county_id
JOIN "State" s ON s.state_id = c.state_id"#;

pub(crate) fn state_population_query(state: &str) -> (String, Vec<SqlParam>) {
    let sql = format!(
        r#"SELECT s.state_name,
CAST(COALESCE(SUM(f."Pop2010"), 0) AS BIGINT) AS "TotalPopulation",
CAST(COALESCE(SUM(f."LaPop1"), 0) AS BIGINT) AS "LowAccessPopulation"
{JOINS}
WHERE s.state_name = $1
GROUP BY s.state_name"#
    );
    (sql, vec![SqlParam::from(state)])
}

pub(crate) fn urban_rural_query(state: &str) -> (String, Vec<SqlParam>) {
    let sql = format!(
        r#"SELECT f."Urban",
CAST(COALESCE(SUM(f."Pop2010"), 0) AS BIGINT) AS "Population",
CAST(COALESCE(SUM(f."LaPop1"), 0) AS BIGINT) AS "LowAccessPopulation"
{JOINS}
WHERE s.state_name = $1
GROUP BY f."Urban"
ORDER BY f."Urban" DESC"#
    );
    (sql, vec![SqlParam::from(state)])
}

pub(crate) fn list_states_query() -> (String, Vec<SqlParam>) {
    (
        r#"SELECT state_name FROM "State" ORDER BY state_name ASC"#.to_string(),
        Vec::new(),
    )
}

impl StatePopulation {
    /// Typed view over the totals frame; `None` when the state matched
    /// no tracts.
    pub fn from_frame(frame: &Frame) -> QueryResult<Option<Self>> {
        if frame.is_empty() {
            return Ok(None);
        }
        let state = frame.require_column("state_name")?;
        let total = frame.require_column("TotalPopulation")?;
        let low_access = frame.require_column("LowAccessPopulation")?;
        Ok(Some(Self {
            state: require_str(frame, 0, state)?,
            total_population: require_i64(frame, 0, total)?,
            low_access_population: require_i64(frame, 0, low_access)?,
        }))
    }
}

impl UrbanRuralSplit {
    /// Typed view over the split frame; `None` when the state matched
    /// no tracts.
    pub fn from_frame(state: &str, frame: &Frame) -> QueryResult<Option<Self>> {
        if frame.is_empty() {
            return Ok(None);
        }
        let urban_col = frame.require_column("Urban")?;
        let pop = frame.require_column("Population")?;
        let low_access = frame.require_column("LowAccessPopulation")?;

        let mut urban = AccessTotals::empty();
        let mut rural = AccessTotals::empty();
        for row in 0..frame.row_count() {
            let totals = AccessTotals::new(
                require_i64(frame, row, pop)?,
                require_i64(frame, row, low_access)?,
            );
            if require_bool(frame, row, urban_col)? {
                urban = totals;
            } else {
                rural = totals;
            }
        }

        Ok(Some(Self {
            state: state.to_string(),
            urban,
            rural,
        }))
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
