use super::*;

fn sample_frame() -> Frame {
    Frame::new(
        vec!["county_name".to_string(), "TractKids".to_string()],
        vec![
            vec![Cell::Text("Autauga".to_string()), Cell::Int(1766)],
            vec![Cell::Text("Baldwin".to_string()), Cell::Null],
        ],
    )
}

#[test]
fn test_column_lookup_is_case_sensitive() {
    let frame = sample_frame();
    assert_eq!(frame.column_index("TractKids"), Some(1));
    assert_eq!(frame.column_index("tractkids"), None);
}

#[test]
fn test_require_column_error_names_column() {
    let frame = sample_frame();
    let err = frame.require_column("TractSNAP").unwrap_err();
    assert!(err.to_string().contains("TractSNAP"));
}

#[test]
fn test_get_out_of_range() {
    let frame = sample_frame();
    assert_eq!(frame.get(0, 1), Some(&Cell::Int(1766)));
    assert_eq!(frame.get(2, 0), None);
    assert_eq!(frame.get(0, 5), None);
}

#[test]
fn test_cell_accessors() {
    assert_eq!(Cell::Int(7).as_i64(), Some(7));
    assert_eq!(Cell::Int(7).as_f64(), Some(7.0));
    assert_eq!(Cell::Float(2.5).as_i64(), None);
    assert_eq!(Cell::Text("x".to_string()).as_str(), Some("x"));
    assert!(Cell::Null.is_null());
    assert_eq!(Cell::Bool(true).as_bool(), Some(true));
}

#[test]
fn test_null_renders_as_null() {
    let frame = sample_frame();
    let rows = frame.to_string_rows();
    assert_eq!(rows[1], vec!["Baldwin".to_string(), "null".to_string()]);
}

#[test]
fn test_json_round_trip() {
    let json = serde_json::json!(42);
    assert_eq!(Cell::from_json(&json), Some(Cell::Int(42)));
    assert_eq!(Cell::Int(42).to_json(), json);

    assert_eq!(Cell::from_json(&serde_json::json!(null)), Some(Cell::Null));
    assert_eq!(Cell::from_json(&serde_json::json!([1, 2])), None);
}

#[test]
fn test_to_json_rows() {
    let frame = sample_frame();
    let rows = frame.to_json_rows();
    assert_eq!(rows[0]["county_name"], serde_json::json!("Autauga"));
    assert_eq!(rows[1]["TractKids"], serde_json::Value::Null);
}

#[test]
fn test_identical_frames_compare_equal() {
    assert_eq!(sample_frame(), sample_frame());
}
