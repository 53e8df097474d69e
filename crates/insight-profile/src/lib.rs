//! Read-only schema profiling.
//!
//! Everything here is a pure function of the dataset: profiles are
//! recomputed on every dataset replacement and never cached across them.

use std::collections::{HashMap, HashSet};

use insight_model::{CellValue, Column, ColumnType, Dataset};

/// Derived summary of one column.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub column_type: ColumnType,
    pub non_null: usize,
    pub nulls: usize,
    pub distinct: usize,
    /// Most frequent value and its count, for categorical columns only.
    /// First-seen value wins ties.
    pub mode: Option<(String, usize)>,
    /// Min/max/mean over non-null cells, for numeric columns only.
    pub numeric: Option<NumericStats>,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct NumericStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Dataset-level aggregates.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub columns: usize,
    pub distinct_types: usize,
    pub missing_cells: usize,
    /// Sum of per-cell size estimates, not an allocator measurement.
    pub approx_bytes: usize,
    pub complete_rows: usize,
    pub duplicate_rows: usize,
}

/// Profile every column of the dataset.
pub fn profile(dataset: &Dataset) -> Vec<ColumnProfile> {
    dataset.columns().iter().map(profile_column).collect()
}

fn profile_column(column: &Column) -> ColumnProfile {
    let mut non_null = 0;
    let mut distinct = HashSet::new();
    for value in &column.values {
        if value.is_null() {
            continue;
        }
        non_null += 1;
        distinct.insert(value.display_string());
    }
    ColumnProfile {
        name: column.name.clone(),
        column_type: column.column_type,
        non_null,
        nulls: column.values.len() - non_null,
        distinct: distinct.len(),
        mode: column
            .column_type
            .is_categorical()
            .then(|| modal_value(&column.values))
            .flatten(),
        numeric: column
            .column_type
            .is_numeric()
            .then(|| numeric_stats(&column.values))
            .flatten(),
    }
}

/// Most frequent non-null value; the value seen first wins ties.
fn modal_value(values: &[CellValue]) -> Option<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    for value in values {
        if value.is_null() {
            continue;
        }
        let key = value.display_string();
        let count = counts.entry(key.clone()).or_insert(0);
        if *count == 0 {
            order.push(key);
        }
        *count += 1;
    }
    let mut best: Option<(String, usize)> = None;
    for key in order {
        let count = counts[&key];
        // Strict comparison keeps the first-seen value on ties.
        if best.as_ref().is_none_or(|(_, best_count)| count > *best_count) {
            best = Some((key, count));
        }
    }
    best
}

fn numeric_stats(values: &[CellValue]) -> Option<NumericStats> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        if let Some(number) = value.as_f64() {
            min = min.min(number);
            max = max.max(number);
            sum += number;
            count += 1;
        }
    }
    (count > 0).then(|| NumericStats {
        min,
        max,
        mean: sum / count as f64,
    })
}

/// Compute dataset-level aggregates.
pub fn summarize(dataset: &Dataset) -> DatasetSummary {
    let rows = dataset.row_count();
    let mut missing_cells = 0;
    let mut approx_bytes = 0;
    let mut types = HashSet::new();
    for column in dataset.columns() {
        types.insert(column.column_type);
        for value in &column.values {
            if value.is_null() {
                missing_cells += 1;
            }
            approx_bytes += cell_size(value);
        }
    }
    let mut complete_rows = 0;
    let mut seen_rows = HashSet::new();
    let mut duplicate_rows = 0;
    for index in 0..rows {
        let row = dataset.row(index);
        if row.iter().all(|value| !value.is_null()) {
            complete_rows += 1;
        }
        let key: Vec<String> = row.iter().map(|value| value.display_string()).collect();
        if !seen_rows.insert(key) {
            duplicate_rows += 1;
        }
    }
    DatasetSummary {
        rows,
        columns: dataset.column_count(),
        distinct_types: types.len(),
        missing_cells,
        approx_bytes,
        complete_rows,
        duplicate_rows,
    }
}

/// Rough in-memory size of one cell.
fn cell_size(value: &CellValue) -> usize {
    match value {
        CellValue::Int(_) | CellValue::Float(_) | CellValue::Timestamp(_) => 8,
        CellValue::Bool(_) => 1,
        CellValue::Text(text) => text.len() + 24,
        CellValue::Null => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insight_model::{CellValue, Column, ColumnType, Dataset};

    fn sample() -> Dataset {
        Dataset::new(vec![
            Column::new(
                "region",
                ColumnType::Text,
                vec![
                    CellValue::Text("north".to_string()),
                    CellValue::Text("south".to_string()),
                    CellValue::Text("north".to_string()),
                    CellValue::Null,
                ],
            ),
            Column::new(
                "sales",
                ColumnType::Int,
                vec![
                    CellValue::Int(10),
                    CellValue::Int(30),
                    CellValue::Int(20),
                    CellValue::Int(20),
                ],
            ),
        ])
        .expect("valid dataset")
    }

    #[test]
    fn profiles_count_nulls_and_distincts() {
        let profiles = profile(&sample());
        let region = &profiles[0];
        assert_eq!(region.non_null, 3);
        assert_eq!(region.nulls, 1);
        assert_eq!(region.distinct, 2);
        assert_eq!(region.mode, Some(("north".to_string(), 2)));
        let sales = &profiles[1];
        assert_eq!(sales.distinct, 3);
        assert_eq!(sales.mode, None);
        let stats = sales.numeric.expect("numeric stats");
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 30.0);
        assert_eq!(stats.mean, 20.0);
    }

    #[test]
    fn mode_tie_goes_to_first_seen() {
        let column = Column::new(
            "c",
            ColumnType::Text,
            vec![
                CellValue::Text("b".to_string()),
                CellValue::Text("a".to_string()),
                CellValue::Text("a".to_string()),
                CellValue::Text("b".to_string()),
            ],
        );
        let dataset = Dataset::new(vec![column]).expect("valid dataset");
        let profiles = profile(&dataset);
        assert_eq!(profiles[0].mode, Some(("b".to_string(), 2)));
    }

    #[test]
    fn summary_aggregates_match() {
        let summary = summarize(&sample());
        assert_eq!(summary.rows, 4);
        assert_eq!(summary.columns, 2);
        assert_eq!(summary.distinct_types, 2);
        assert_eq!(summary.missing_cells, 1);
        assert_eq!(summary.complete_rows, 3);
        assert_eq!(summary.duplicate_rows, 0);
        assert!(summary.approx_bytes > 0);
    }

    #[test]
    fn duplicate_rows_are_counted() {
        let dataset = Dataset::new(vec![Column::new(
            "v",
            ColumnType::Int,
            vec![CellValue::Int(1), CellValue::Int(1), CellValue::Int(2)],
        )])
        .expect("valid dataset");
        assert_eq!(summarize(&dataset).duplicate_rows, 1);
    }

    #[test]
    fn empty_dataset_summary_is_zeroed() {
        let summary = summarize(&Dataset::empty());
        assert_eq!(summary.rows, 0);
        assert_eq!(summary.columns, 0);
        assert_eq!(summary.distinct_types, 0);
        assert_eq!(summary.missing_cells, 0);
    }
}
