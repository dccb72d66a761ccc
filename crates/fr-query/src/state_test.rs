use super::*;
use fr_core::Cell;

#[test]
fn test_population_query_binds_state() {
    let (sql, params) = state_population_query("Alabama");
    assert!(sql.contains("WHERE s.state_name = $1"));
    assert!(sql.contains("\"FoodAccessIndicator\""));
    assert_eq!(params, vec![SqlParam::from("Alabama")]);
}

#[test]
fn test_pct_zero_guard() {
    assert_eq!(AccessTotals::new(0, 0).low_access_pct, None);
    let totals = AccessTotals::new(4000, 1500);
    let pct = totals.low_access_pct.unwrap();
    assert!((pct - 37.5).abs() < 1e-9);
}

#[test]
fn test_pct_stays_in_range() {
    for (pop, la) in [(100, 0), (100, 37), (100, 100)] {
        let pct = AccessTotals::new(pop, la).low_access_pct.unwrap();
        assert!((0.0..=100.0).contains(&pct), "pct {pct} out of range");
    }
}

#[test]
fn test_population_from_empty_frame_is_none() {
    let frame = Frame::new(
        vec![
            "state_name".to_string(),
            "TotalPopulation".to_string(),
            "LowAccessPopulation".to_string(),
        ],
        vec![],
    );
    assert_eq!(StatePopulation::from_frame(&frame).unwrap(), None);
}

#[test]
fn test_population_from_frame() {
    let frame = Frame::new(
        vec![
            "state_name".to_string(),
            "TotalPopulation".to_string(),
            "LowAccessPopulation".to_string(),
        ],
        vec![vec![
            Cell::Text("Alabama".to_string()),
            Cell::Int(16000),
            Cell::Int(6500),
        ]],
    );
    let totals = StatePopulation::from_frame(&frame).unwrap().unwrap();
    assert_eq!(totals.state, "Alabama");
    assert_eq!(totals.total_population, 16000);
    assert_eq!(totals.low_access_population, 6500);
}

fn split_frame(rows: Vec<Vec<Cell>>) -> Frame {
    Frame::new(
        vec![
            "Urban".to_string(),
            "Population".to_string(),
            "LowAccessPopulation".to_string(),
        ],
        rows,
    )
}

#[test]
fn test_split_fills_missing_rural_group() {
    let frame = split_frame(vec![vec![Cell::Bool(true), Cell::Int(11000), Cell::Int(4800)]]);
    let split = UrbanRuralSplit::from_frame("Georgia", &frame).unwrap().unwrap();
    assert_eq!(split.urban.population, 11000);
    assert_eq!(split.rural.population, 0);
    assert_eq!(split.rural.low_access_pct, None);
}

#[test]
fn test_split_with_both_groups() {
    let frame = split_frame(vec![
        vec![Cell::Bool(true), Cell::Int(12000), Cell::Int(5000)],
        vec![Cell::Bool(false), Cell::Int(4000), Cell::Int(1500)],
    ]);
    let split = UrbanRuralSplit::from_frame("Alabama", &frame).unwrap().unwrap();
    assert_eq!(split.urban.low_access_population, 5000);
    assert!((split.rural.low_access_pct.unwrap() - 37.5).abs() < 1e-9);
}

#[test]
fn test_split_empty_frame_is_none() {
    let frame = split_frame(vec![]);
    assert_eq!(UrbanRuralSplit::from_frame("Wyoming", &frame).unwrap(), None);
}
