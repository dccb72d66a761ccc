//! Per-tract raw demographics: the bounded sample behind the editable
//! grid. `demo_id` leads the column list because the edit path keys
//! every update by it.

use crate::error::QueryResult;
use crate::row_helpers::{optional_i64, require_i64};
use fr_core::Frame;
use fr_db::SqlParam;
use serde::Serialize;

/// Rows fetched for the grid view.
pub const SAMPLE_LIMIT: i64 = 25;

/// One tract's raw demographic indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TractDemographics {
    /// Durable record identifier
    pub demo_id: i64,
    /// Census tract the record describes
    pub tract_id: i64,
    /// Low-income count
    pub low_income: Option<i64>,
    /// Children count
    pub kids: Option<i64>,
    /// Seniors count
    pub seniors: Option<i64>,
    /// SNAP-recipient count
    pub snap: Option<i64>,
    /// Households-without-vehicle count
    pub no_vehicle: Option<i64>,
}

pub(crate) fn demographics_sample_query() -> (String, Vec<SqlParam>) {
    (
        r#"SELECT d.demo_id, d.tract_id,
d."TractLOWI", d."TractKids", d."TractSeniors", d."TractSNAP", d."TractHUNV"
FROM "Demographics" d
ORDER BY d.demo_id ASC
LIMIT $1"#
            .to_string(),
        vec![SqlParam::Int(SAMPLE_LIMIT)],
    )
}

impl TractDemographics {
    /// Typed view over the sample frame.
    pub fn from_frame(frame: &Frame) -> QueryResult<Vec<Self>> {
        let demo_id = frame.require_column("demo_id")?;
        let tract_id = frame.require_column("tract_id")?;
        let lowi = frame.require_column("TractLOWI")?;
        let kids = frame.require_column("TractKids")?;
        let seniors = frame.require_column("TractSeniors")?;
        let snap = frame.require_column("TractSNAP")?;
        let hunv = frame.require_column("TractHUNV")?;

        (0..frame.row_count())
            .map(|row| {
                Ok(Self {
                    demo_id: require_i64(frame, row, demo_id)?,
                    tract_id: require_i64(frame, row, tract_id)?,
                    low_income: optional_i64(frame, row, lowi)?,
                    kids: optional_i64(frame, row, kids)?,
                    seniors: optional_i64(frame, row, seniors)?,
                    snap: optional_i64(frame, row, snap)?,
                    no_vehicle: optional_i64(frame, row, hunv)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tract_test.rs"]
mod tests;
