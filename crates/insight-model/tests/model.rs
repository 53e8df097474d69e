use insight_model::{CellValue, Column, ColumnType, Dataset, FormatTag};

#[test]
fn cell_value_serializes_tagged() {
    let cell = CellValue::Int(42);
    let json = serde_json::to_string(&cell).expect("serialize cell");
    let round: CellValue = serde_json::from_str(&json).expect("deserialize cell");
    assert_eq!(round, CellValue::Int(42));
}

#[test]
fn dataset_round_trips_through_serde() {
    let dataset = Dataset::new(vec![
        Column::new(
            "count",
            ColumnType::Int,
            vec![CellValue::Int(1), CellValue::Null],
        ),
        Column::new(
            "label",
            ColumnType::Text,
            vec![
                CellValue::Text("a".to_string()),
                CellValue::Text("b".to_string()),
            ],
        ),
    ])
    .expect("valid dataset");
    let json = serde_json::to_string(&dataset).expect("serialize dataset");
    let round: Dataset = serde_json::from_str(&json).expect("deserialize dataset");
    assert_eq!(round, dataset);
    assert_eq!(round.row_count(), 2);
}

#[test]
fn format_tag_displays_lowercase() {
    assert_eq!(FormatTag::Delimited.to_string(), "delimited");
    assert_eq!(FormatTag::Json.to_string(), "json");
    assert_eq!(FormatTag::Text.to_string(), "text");
}
