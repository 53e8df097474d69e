//! Heuristic selection of charts for a dataset.
//!
//! The selector inspects the schema only; it never renders anything.
//! Zero specs is an accepted outcome for datasets with no numeric and no
//! low-cardinality categorical columns.

use std::collections::HashSet;

use insight_model::{Column, Dataset};
use tracing::debug;

/// Bar charts are only offered for columns with at most this many
/// distinct values.
const BAR_CARDINALITY_CAP: usize = 15;

/// A bar chart shows at most this many top values.
const BAR_TOP_VALUES: usize = 10;

/// Histograms use at most this many bins.
const HISTOGRAM_MAX_BINS: usize = 30;

/// Renderers cap the rows they consider for a single chart.
const RENDER_ROW_CAP: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Histogram,
    Bar,
    Heatmap,
}

/// A declarative description of one chart to render.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    /// Target column names; a single column except for the heatmap.
    pub columns: Vec<String>,
    /// For bar charts, the number of top values to show; otherwise the
    /// number of source rows the renderer should consider.
    pub row_cap: usize,
    /// Bin count, histograms only.
    pub bins: Option<usize>,
}

/// Pick which charts to offer for this dataset.
///
/// Policy: a histogram for the first numeric column, a bar chart for the
/// first categorical column with at most 15 distinct values, and a
/// correlation heatmap over all numeric columns when fewer than two specs
/// were produced and more than one numeric column exists.
pub fn select_charts(dataset: &Dataset) -> Vec<ChartSpec> {
    let mut specs = Vec::new();
    let numeric: Vec<&Column> = dataset
        .columns()
        .iter()
        .filter(|column| column.column_type.is_numeric())
        .collect();
    if let Some(column) = numeric.first() {
        let bins = HISTOGRAM_MAX_BINS.min(distinct_count(column)).max(1);
        specs.push(ChartSpec {
            kind: ChartKind::Histogram,
            columns: vec![column.name.clone()],
            row_cap: RENDER_ROW_CAP,
            bins: Some(bins),
        });
    }
    let categorical = dataset
        .columns()
        .iter()
        .find(|column| {
            column.column_type.is_categorical() && distinct_count(column) <= BAR_CARDINALITY_CAP
        });
    if let Some(column) = categorical {
        specs.push(ChartSpec {
            kind: ChartKind::Bar,
            columns: vec![column.name.clone()],
            row_cap: BAR_TOP_VALUES,
            bins: None,
        });
    }
    if specs.len() < 2 && numeric.len() > 1 {
        specs.push(ChartSpec {
            kind: ChartKind::Heatmap,
            columns: numeric.iter().map(|column| column.name.clone()).collect(),
            row_cap: RENDER_ROW_CAP,
            bins: None,
        });
    }
    debug!(specs = specs.len(), "chart selection done");
    specs
}

fn distinct_count(column: &Column) -> usize {
    let mut seen = HashSet::new();
    for value in &column.values {
        if !value.is_null() {
            seen.insert(value.display_string());
        }
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use insight_model::{CellValue, Column, ColumnType, Dataset};

    fn int_column(name: &str, values: &[i64]) -> Column {
        Column::new(
            name,
            ColumnType::Int,
            values.iter().map(|value| CellValue::Int(*value)).collect(),
        )
    }

    fn text_column(name: &str, values: &[&str]) -> Column {
        Column::new(
            name,
            ColumnType::Text,
            values
                .iter()
                .map(|value| CellValue::Text((*value).to_string()))
                .collect(),
        )
    }

    #[test]
    fn numeric_and_categorical_yield_histogram_and_bar() {
        let dataset = Dataset::new(vec![
            int_column("sales", &[1, 2, 3]),
            text_column("region", &["n", "s", "n"]),
        ])
        .expect("valid dataset");
        let specs = select_charts(&dataset);
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].kind, ChartKind::Histogram);
        assert_eq!(specs[0].columns, vec!["sales".to_string()]);
        assert_eq!(specs[0].bins, Some(3));
        assert_eq!(specs[1].kind, ChartKind::Bar);
        assert_eq!(specs[1].row_cap, 10);
    }

    #[test]
    fn high_cardinality_categorical_is_skipped() {
        let values: Vec<String> = (0..20).map(|index| format!("v{index}")).collect();
        let refs: Vec<&str> = values.iter().map(String::as_str).collect();
        let dataset =
            Dataset::new(vec![text_column("id", &refs)]).expect("valid dataset");
        assert!(select_charts(&dataset).is_empty());
    }

    #[test]
    fn heatmap_fills_the_second_slot() {
        let dataset = Dataset::new(vec![
            int_column("a", &[1, 2, 3]),
            int_column("b", &[4, 5, 6]),
        ])
        .expect("valid dataset");
        let specs = select_charts(&dataset);
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[1].kind, ChartKind::Heatmap);
        assert_eq!(
            specs[1].columns,
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn single_numeric_column_yields_histogram_only() {
        let dataset =
            Dataset::new(vec![int_column("a", &[1, 1, 2])]).expect("valid dataset");
        let specs = select_charts(&dataset);
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].bins, Some(2));
    }

    #[test]
    fn bins_are_at_least_one() {
        let dataset = Dataset::new(vec![Column::new(
            "a",
            ColumnType::Int,
            vec![CellValue::Null, CellValue::Null],
        )])
        .expect("valid dataset");
        let specs = select_charts(&dataset);
        assert_eq!(specs[0].bins, Some(1));
    }

    #[test]
    fn no_qualifying_columns_is_empty_not_an_error() {
        let values: Vec<String> = (0..30).map(|index| format!("v{index}")).collect();
        let refs: Vec<&str> = values.iter().map(String::as_str).collect();
        let dataset = Dataset::new(vec![
            text_column("free_text", &refs),
        ])
        .expect("valid dataset");
        assert!(select_charts(&dataset).is_empty());
    }
}
