//! Shared in-memory fixture for crates testing against the census schema.
//!
//! Mirrors the hosted Postgres layout: six tables with quoted mixed-case
//! identifiers, tract rows nesting under counties and states.

use crate::duckdb::DuckDbBackend;
use crate::error::DbResult;

/// DDL for the six census tables.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE "State" (
    state_id BIGINT PRIMARY KEY,
    state_name VARCHAR NOT NULL
);
CREATE TABLE "County" (
    county_id BIGINT PRIMARY KEY,
    state_id BIGINT NOT NULL,
    county_name VARCHAR NOT NULL
);
CREATE TABLE "CensusTract" (
    tract_id BIGINT PRIMARY KEY,
    county_id BIGINT NOT NULL
);
CREATE TABLE "Demographics" (
    demo_id BIGINT PRIMARY KEY,
    tract_id BIGINT NOT NULL,
    "TractLOWI" BIGINT,
    "TractKids" BIGINT,
    "TractSeniors" BIGINT,
    "TractSNAP" BIGINT,
    "TractHUNV" BIGINT
);
CREATE TABLE "LowAccess1Mile" (
    la_id BIGINT PRIMARY KEY,
    tract_id BIGINT NOT NULL,
    "LaPop1" BIGINT,
    "LaLowI1" BIGINT,
    "LaKids1" BIGINT,
    "LaSeniors1" BIGINT,
    "LaSnap1" BIGINT,
    "LaHunv1" BIGINT
);
CREATE TABLE "FoodAccessIndicator" (
    fai_id BIGINT PRIMARY KEY,
    tract_id BIGINT NOT NULL,
    "Pop2010" BIGINT,
    "LaPop1" BIGINT,
    "Urban" BOOLEAN
);
"#;

/// Deterministic sample rows.
///
/// Two states with tracts (Alabama, Georgia) plus one without (Wyoming);
/// Autauga and Baldwin tie on no-vehicle households; Georgia has only
/// urban tracts; demo row 5 has a NULL "TractHUNV".
pub const SEED_SQL: &str = r#"
INSERT INTO "State" VALUES (1, 'Alabama'), (2, 'Georgia'), (3, 'Wyoming');
INSERT INTO "County" VALUES
    (1, 1, 'Autauga'),
    (2, 1, 'Baldwin'),
    (3, 2, 'Fulton');
INSERT INTO "CensusTract" VALUES
    (101, 1), (102, 1), (201, 2), (301, 3), (302, 3);
INSERT INTO "Demographics" VALUES
    (1, 101, 700, 300, 120, 80, 40),
    (2, 102, 500, 250, 90, 60, 30),
    (3, 201, 900, 400, 150, 110, 70),
    (4, 301, 1200, 500, 200, 160, 90),
    (5, 302, 300, 100, 40, 20, NULL);
INSERT INTO "LowAccess1Mile" VALUES
    (1, 101, 2000, 700, 300, 120, 80, 40),
    (2, 102, 1500, 500, 250, 90, 60, 30),
    (3, 201, 3000, 900, 400, 150, 110, 70),
    (4, 301, 4000, 1200, 500, 200, 160, 90),
    (5, 302, 800, 300, 100, 40, 20, 10);
INSERT INTO "FoodAccessIndicator" VALUES
    (1, 101, 5000, 2000, TRUE),
    (2, 102, 4000, 1500, FALSE),
    (3, 201, 7000, 3000, TRUE),
    (4, 301, 9000, 4000, TRUE),
    (5, 302, 2000, 800, TRUE);
"#;

/// In-memory backend with the schema created and sample rows loaded.
pub fn seeded_backend() -> DbResult<DuckDbBackend> {
    let db = DuckDbBackend::in_memory()?;
    db.execute_batch(SCHEMA_SQL)?;
    db.execute_batch(SEED_SQL)?;
    Ok(db)
}

/// In-memory backend with the schema created and no rows.
pub fn empty_backend() -> DbResult<DuckDbBackend> {
    let db = DuckDbBackend::in_memory()?;
    db.execute_batch(SCHEMA_SQL)?;
    Ok(db)
}
