//! County-level reads: the no-vehicle ranking and the per-county
//! low-access demographic breakdown.
//!
//! Aggregates sum tract rows within a county; the tract → county →
//! state joins follow the reference keys only, so no tract is counted
//! twice. Sums are cast to BIGINT and COALESCEd so counties whose
//! tracts carry NULL indicators still aggregate.

use crate::error::QueryResult;
use crate::row_helpers::{require_i64, require_str};
use fr_core::Frame;
use fr_db::SqlParam;
use serde::Serialize;

/// One row of the no-vehicle ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountyNoVehicle {
    /// County name
    pub county: String,
    /// State the county belongs to
    pub state: String,
    /// Households lacking vehicle access among the low-access population
    pub households_no_vehicle: i64,
}

/// One row of the per-county low-access breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountyBreakdown {
    /// County name
    pub county: String,
    /// State the county belongs to
    pub state: String,
    /// Low-access population across the county's tracts
    pub low_access_pop: i64,
    /// Low-income share of the low-access population
    pub low_income: i64,
    /// Children in the low-access population
    pub kids: i64,
    /// Seniors in the low-access population
    pub seniors: i64,
    /// SNAP-recipient households in the low-access population
    pub snap_households: i64,
}

const JOINS: &str = r#"FROM "LowAccess1Mile" la
JOIN "CensusTract" ct ON ct.tract_id = la.tract_id
JOIN "County" c ON c.county_id = ct.county_id
JOIN "State" s ON s.state_id = c.state_id"#;

/// Ranking statement: counties ordered by summed no-vehicle households,
/// descending; ties break by county then state name so repeated loads
/// render identically.
pub(crate) fn top_no_vehicle_query(limit: i64, state: Option<&str>) -> (String, Vec<SqlParam>) {
    let mut params = Vec::new();
    let filter = state_filter(state, &mut params);
    params.push(SqlParam::Int(limit));
    let sql = format!(
        r#"SELECT c.county_name, s.state_name,
CAST(COALESCE(SUM(la."LaHunv1"), 0) AS BIGINT) AS "HouseholdsNoVehicle"
{JOINS}{filter}
GROUP BY c.county_name, s.state_name
ORDER BY "HouseholdsNoVehicle" DESC, c.county_name ASC, s.state_name ASC
LIMIT ${}"#,
        params.len()
    );
    (sql, params)
}

/// Breakdown statement: per-county sums of the low-access demographic
/// groups, ordered by county then state name.
pub(crate) fn breakdown_query(state: Option<&str>) -> (String, Vec<SqlParam>) {
    let mut params = Vec::new();
    let filter = state_filter(state, &mut params);
    let sql = format!(
        r#"SELECT c.county_name, s.state_name,
CAST(COALESCE(SUM(la."LaPop1"), 0) AS BIGINT) AS "LowAccessPop",
CAST(COALESCE(SUM(la."LaLowI1"), 0) AS BIGINT) AS "LowIncome",
CAST(COALESCE(SUM(la."LaKids1"), 0) AS BIGINT) AS "Kids",
CAST(COALESCE(SUM(la."LaSeniors1"), 0) AS BIGINT) AS "Seniors",
CAST(COALESCE(SUM(la."LaSnap1"), 0) AS BIGINT) AS "SnapHouseholds"
{JOINS}{filter}
GROUP BY c.county_name, s.state_name
ORDER BY c.county_name ASC, s.state_name ASC"#
    );
    (sql, params)
}

/// Selector options: county names, optionally within one state.
pub(crate) fn list_counties_query(state: Option<&str>) -> (String, Vec<SqlParam>) {
    match state {
        Some(name) => (
            r#"SELECT c.county_name
FROM "County" c
JOIN "State" s ON s.state_id = c.state_id
WHERE s.state_name = $1
ORDER BY c.county_name ASC"#
                .to_string(),
            vec![SqlParam::from(name)],
        ),
        None => (
            r#"SELECT c.county_name
FROM "County" c
ORDER BY c.county_name ASC"#
                .to_string(),
            Vec::new(),
        ),
    }
}

fn state_filter(state: Option<&str>, params: &mut Vec<SqlParam>) -> String {
    match state {
        Some(name) => {
            params.push(SqlParam::from(name));
            format!("\nWHERE s.state_name = ${}", params.len())
        }
        None => String::new(),
    }
}

impl CountyNoVehicle {
    /// Typed view over a ranking frame.
    pub fn from_frame(frame: &Frame) -> QueryResult<Vec<Self>> {
        let county = frame.require_column("county_name")?;
        let state = frame.require_column("state_name")?;
        let hunv = frame.require_column("HouseholdsNoVehicle")?;

        (0..frame.row_count())
            .map(|row| {
                Ok(Self {
                    county: require_str(frame, row, county)?,
                    state: require_str(frame, row, state)?,
                    households_no_vehicle: require_i64(frame, row, hunv)?,
                })
            })
            .collect()
    }
}

impl CountyBreakdown {
    /// Typed view over a breakdown frame.
    pub fn from_frame(frame: &Frame) -> QueryResult<Vec<Self>> {
        let county = frame.require_column("county_name")?;
        let state = frame.require_column("state_name")?;
        let la_pop = frame.require_column("LowAccessPop")?;
        let low_income = frame.require_column("LowIncome")?;
        let kids = frame.require_column("Kids")?;
        let seniors = frame.require_column("Seniors")?;
        let snap = frame.require_column("SnapHouseholds")?;

        (0..frame.row_count())
            .map(|row| {
                Ok(Self {
                    county: require_str(frame, row, county)?,
                    state: require_str(frame, row, state)?,
                    low_access_pop: require_i64(frame, row, la_pop)?,
                    low_income: require_i64(frame, row, low_income)?,
                    kids: require_i64(frame, row, kids)?,
                    seniors: require_i64(frame, row, seniors)?,
                    snap_households: require_i64(frame, row, snap)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "county_test.rs"]
mod tests;
