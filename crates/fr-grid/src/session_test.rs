use super::*;
use fr_db::test_support::seeded_backend;
use fr_db::{Database, SqlParam};

async fn session() -> (Arc<Dashboard>, GridSession) {
    let dashboard = Arc::new(Dashboard::new(Arc::new(seeded_backend().unwrap())));
    let session = GridSession::load(dashboard.clone()).await.unwrap();
    (dashboard, session)
}

#[tokio::test]
async fn test_load_starts_idle() {
    let (_, session) = session().await;
    assert_eq!(session.state(), &SessionState::Idle);
    assert_eq!(session.snapshot().row_count(), 5);
    assert_eq!(session.pending_cells(), 0);
    assert!(session.snapshot().loaded_at() <= chrono::Utc::now());
}

#[tokio::test]
async fn test_first_edit_moves_to_editing_and_revert_back() {
    let (_, mut session) = session().await;
    session.record_edit(0, "TractKids", Cell::Int(42)).unwrap();
    assert_eq!(session.state(), &SessionState::Editing);

    // Reverting to the loaded value empties the set again.
    session.record_edit(0, "TractKids", Cell::Int(300)).unwrap();
    assert_eq!(session.state(), &SessionState::Idle);
}

#[tokio::test]
async fn test_save_without_edits_is_a_no_op() {
    let (_, mut session) = session().await;
    let outcome = session.save().await.unwrap();
    assert_eq!(outcome.rows_updated, 0);
    assert_eq!(session.state(), &SessionState::Idle);
}

#[tokio::test]
async fn test_edit_round_trip() {
    let (dashboard, mut session) = session().await;

    // Warm the cache so the post-save read proves invalidation.
    let before = dashboard.tract_rows().await.unwrap();
    assert_eq!(before[3].kids, Some(500));

    // Row 3 of the snapshot is demo_id 4.
    session.record_edit(3, "TractKids", Cell::Int(42)).unwrap();
    let outcome = session.save().await.unwrap();
    assert_eq!(outcome.rows_updated, 1);
    assert_eq!(outcome.cells_applied, 1);
    assert_eq!(session.state(), &SessionState::Idle);
    assert_eq!(session.pending_cells(), 0);

    let after = dashboard.tract_rows().await.unwrap();
    let edited = after.iter().find(|r| r.demo_id == 4).unwrap();
    assert_eq!(edited.kids, Some(42));
    // Every other column of the row is untouched.
    assert_eq!(edited.low_income, Some(1200));
    assert_eq!(edited.seniors, Some(200));
    assert_eq!(edited.snap, Some(160));
    assert_eq!(edited.no_vehicle, Some(90));
    // Every other row is untouched.
    for (b, a) in before.iter().zip(&after) {
        if a.demo_id != 4 {
            assert_eq!(b, a);
        }
    }

    // The reloaded snapshot reflects the write.
    assert_eq!(session.snapshot().cell(3, "TractKids"), Some(&Cell::Int(42)));
}

#[tokio::test]
async fn test_failed_save_retains_edits() {
    let (dashboard, mut session) = session().await;
    session.record_edit(0, "TractKids", Cell::Int(1)).unwrap();
    session.record_edit(4, "TractSNAP", Cell::Int(2)).unwrap();

    // Row 4 (demo_id 5) disappears between load and save.
    dashboard
        .db()
        .execute(
            "DELETE FROM \"Demographics\" WHERE demo_id = $1",
            &[SqlParam::Int(5)],
        )
        .await
        .unwrap();

    let err = session.save().await.unwrap_err();
    assert!(matches!(err, GridError::Save(_)));
    assert!(matches!(session.state(), SessionState::Error(_)));
    assert_eq!(session.pending_cells(), 2);

    // All-or-nothing: the surviving row's edit was rolled back too.
    // Bypass the (still valid) cache to read what was committed.
    dashboard.invalidate_cache();
    let rows = dashboard.tract_rows().await.unwrap();
    assert_eq!(rows.iter().find(|r| r.demo_id == 1).unwrap().kids, Some(300));
}

#[tokio::test]
async fn test_two_stale_saves_last_writer_wins() {
    let dashboard = Arc::new(Dashboard::new(Arc::new(seeded_backend().unwrap())));
    let mut first = GridSession::load(dashboard.clone()).await.unwrap();
    let mut second = GridSession::load(dashboard.clone()).await.unwrap();

    // Both sessions edit the same cell from the same stale snapshot.
    first.record_edit(0, "TractKids", Cell::Int(111)).unwrap();
    second.record_edit(0, "TractKids", Cell::Int(222)).unwrap();

    // Both saves succeed; nothing detects the overlap.
    first.save().await.unwrap();
    second.save().await.unwrap();

    let rows = dashboard.tract_rows().await.unwrap();
    assert_eq!(rows[0].kids, Some(222));
}

#[tokio::test]
async fn test_clearing_a_cell_to_null() {
    let (dashboard, mut session) = session().await;
    session.record_edit(1, "TractSeniors", Cell::Null).unwrap();
    session.save().await.unwrap();

    let rows = dashboard.tract_rows().await.unwrap();
    assert_eq!(rows.iter().find(|r| r.demo_id == 2).unwrap().seniors, None);
}
