//! The grid editing session.
//!
//! One session per loaded grid view. Transitions:
//! idle → editing (first recorded edit), editing → saving (save
//! trigger), then back to idle on success or to error with the edit
//! set retained for retry.

use crate::edits::EditSet;
use crate::error::{GridError, GridResult};
use crate::snapshot::GridSnapshot;
use fr_core::Cell;
use fr_query::Dashboard;
use std::sync::Arc;

/// Where the session currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No pending edits
    Idle,
    /// Edits captured, not yet saved
    Editing,
    /// Save in progress
    Saving,
    /// Last save failed; pending edits retained
    Error(String),
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    /// Rows the transaction updated
    pub rows_updated: u64,
    /// Cell edits that were applied
    pub cells_applied: usize,
}

/// An editable view over the demographics sample.
pub struct GridSession {
    dashboard: Arc<Dashboard>,
    snapshot: GridSnapshot,
    edits: EditSet,
    state: SessionState,
}

impl GridSession {
    /// Load the snapshot and start an idle session.
    pub async fn load(dashboard: Arc<Dashboard>) -> GridResult<Self> {
        let frame = dashboard.demographics_sample().await?;
        let snapshot = GridSnapshot::from_frame(frame)?;
        Ok(Self {
            dashboard,
            snapshot,
            edits: EditSet::new(),
            state: SessionState::Idle,
        })
    }

    /// The loaded snapshot.
    pub fn snapshot(&self) -> &GridSnapshot {
        &self.snapshot
    }

    /// Current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Number of pending cell edits.
    pub fn pending_cells(&self) -> usize {
        self.edits.cell_count()
    }

    /// Capture one cell edit, by grid row position and column name.
    pub fn record_edit(&mut self, row_index: usize, column: &str, value: Cell) -> GridResult<()> {
        self.edits.record(&self.snapshot, row_index, column, value)?;
        self.state = if self.edits.is_empty() {
            SessionState::Idle
        } else {
            SessionState::Editing
        };
        Ok(())
    }

    /// Apply every pending edit in one transaction.
    ///
    /// On success the edit set is cleared, the dashboard cache is
    /// invalidated, and the snapshot is reloaded so the view reflects
    /// the write. On failure the edit set and snapshot are untouched.
    pub async fn save(&mut self) -> GridResult<SaveOutcome> {
        if self.edits.is_empty() {
            self.state = SessionState::Idle;
            return Ok(SaveOutcome {
                rows_updated: 0,
                cells_applied: 0,
            });
        }

        self.state = SessionState::Saving;
        let statements = self.edits.to_statements();
        let cells_applied = self.edits.cell_count();

        let rows_updated = match self.dashboard.db().apply_updates(&statements).await {
            Ok(n) => n,
            Err(e) => {
                log::warn!("grid save failed, retaining {cells_applied} pending edits: {e}");
                self.state = SessionState::Error(e.to_string());
                return Err(GridError::Save(e));
            }
        };

        self.edits.clear();
        self.dashboard.invalidate_cache();

        match self.reload().await {
            Ok(()) => {
                self.state = SessionState::Idle;
                Ok(SaveOutcome {
                    rows_updated,
                    cells_applied,
                })
            }
            Err(e) => {
                // The write committed; only the fresh view is missing.
                self.state = SessionState::Error(e.to_string());
                Err(e)
            }
        }
    }

    async fn reload(&mut self) -> GridResult<()> {
        let frame = self.dashboard.demographics_sample().await?;
        self.snapshot = GridSnapshot::from_frame(frame)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
