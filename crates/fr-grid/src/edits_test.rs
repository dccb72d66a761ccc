use super::*;
use fr_core::Frame;

fn snapshot() -> GridSnapshot {
    let frame = Frame::new(
        vec![
            "demo_id".to_string(),
            "tract_id".to_string(),
            "TractKids".to_string(),
            "TractSNAP".to_string(),
        ],
        vec![
            vec![Cell::Int(11), Cell::Int(101), Cell::Int(300), Cell::Int(80)],
            vec![Cell::Int(14), Cell::Int(102), Cell::Int(250), Cell::Int(60)],
        ],
    );
    GridSnapshot::from_frame(frame).unwrap()
}

#[test]
fn test_record_resolves_position_to_durable_id() {
    let snap = snapshot();
    let mut edits = EditSet::new();
    edits.record(&snap, 1, "TractKids", Cell::Int(42)).unwrap();

    let statements = edits.to_statements();
    assert_eq!(statements.len(), 1);
    // Keyed by demo_id 14, not by position 1.
    assert_eq!(
        statements[0].sql,
        "UPDATE \"Demographics\" SET \"TractKids\" = $1 WHERE demo_id = $2"
    );
    assert_eq!(
        statements[0].params,
        vec![SqlParam::Int(42), SqlParam::Int(14)]
    );
}

#[test]
fn test_record_rejects_non_editable_column() {
    let snap = snapshot();
    let mut edits = EditSet::new();
    for column in ["demo_id", "tract_id", "county_name"] {
        let err = edits.record(&snap, 0, column, Cell::Int(1)).unwrap_err();
        assert!(matches!(err, GridError::ColumnNotEditable { .. }), "{column}");
    }
    assert!(edits.is_empty());
}

#[test]
fn test_record_rejects_out_of_range_row() {
    let snap = snapshot();
    let mut edits = EditSet::new();
    let err = edits.record(&snap, 7, "TractKids", Cell::Int(1)).unwrap_err();
    assert!(matches!(err, GridError::RowOutOfRange { index: 7, rows: 2 }));
}

#[test]
fn test_record_rejects_text_value() {
    let snap = snapshot();
    let mut edits = EditSet::new();
    let err = edits
        .record(&snap, 0, "TractKids", Cell::Text("many".to_string()))
        .unwrap_err();
    assert!(matches!(err, GridError::ValueType { .. }));
}

#[test]
fn test_latest_value_wins() {
    let snap = snapshot();
    let mut edits = EditSet::new();
    edits.record(&snap, 0, "TractKids", Cell::Int(1)).unwrap();
    edits.record(&snap, 0, "TractKids", Cell::Int(2)).unwrap();
    assert_eq!(edits.cell_count(), 1);
    assert_eq!(edits.to_statements()[0].params[0], SqlParam::Int(2));
}

#[test]
fn test_reverting_to_snapshot_value_drops_the_edit() {
    let snap = snapshot();
    let mut edits = EditSet::new();
    edits.record(&snap, 0, "TractKids", Cell::Int(42)).unwrap();
    assert_eq!(edits.cell_count(), 1);

    edits.record(&snap, 0, "TractKids", Cell::Int(300)).unwrap();
    assert!(edits.is_empty());
    assert!(edits.to_statements().is_empty());
}

#[test]
fn test_unchanged_value_is_never_recorded() {
    let snap = snapshot();
    let mut edits = EditSet::new();
    edits.record(&snap, 0, "TractSNAP", Cell::Int(80)).unwrap();
    assert!(edits.is_empty());
}

#[test]
fn test_statement_contains_only_changed_columns() {
    let snap = snapshot();
    let mut edits = EditSet::new();
    edits.record(&snap, 0, "TractSNAP", Cell::Int(90)).unwrap();
    edits.record(&snap, 0, "TractKids", Cell::Int(310)).unwrap();
    edits.record(&snap, 1, "TractKids", Cell::Null).unwrap();

    let statements = edits.to_statements();
    assert_eq!(statements.len(), 2);
    // Columns in name order, rows in demo_id order.
    assert_eq!(
        statements[0].sql,
        "UPDATE \"Demographics\" SET \"TractKids\" = $1, \"TractSNAP\" = $2 WHERE demo_id = $3"
    );
    assert_eq!(
        statements[0].params,
        vec![SqlParam::Int(310), SqlParam::Int(90), SqlParam::Int(11)]
    );
    assert_eq!(
        statements[1].params,
        vec![SqlParam::Null, SqlParam::Int(14)]
    );
    assert!(!statements[0].sql.contains("TractLOWI"));
}

#[test]
fn test_is_editable() {
    assert!(is_editable("TractKids"));
    assert!(!is_editable("tractkids"));
    assert!(!is_editable("demo_id"));
}
