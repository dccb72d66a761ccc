//! fr-grid - Edit reconciliation for FoodReach
//!
//! The editable grid reports cell edits by row position; this crate
//! resolves each one to its durable `demo_id` at capture time, tracks
//! the idle/editing/saving session states, and turns the pending edit
//! set into one transaction of per-row UPDATE statements.

pub mod edits;
pub mod error;
pub mod session;
pub mod snapshot;

pub use edits::{is_editable, EditSet, EDITABLE_COLUMNS};
pub use error::{GridError, GridResult};
pub use session::{GridSession, SaveOutcome, SessionState};
pub use snapshot::GridSnapshot;
