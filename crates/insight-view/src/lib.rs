//! Filtered, sorted views over a dataset.
//!
//! Applying a view produces a new dataset; the source is never mutated,
//! so views can be recomputed freely without coordination.

use std::collections::BTreeSet;

use insight_model::{Column, Dataset, ModelError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("unknown column {0:?}")]
    UnknownColumn(String),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// One user-specified constraint over a single column.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FilterSpec {
    /// Keep rows whose cell (rendered as text) is a member of the set.
    /// Null cells never match.
    Members {
        column: String,
        values: BTreeSet<String>,
    },
    /// Keep rows whose numeric cell lies in the closed interval.
    /// Null and non-numeric cells never match.
    Range { column: String, min: f64, max: f64 },
}

impl FilterSpec {
    fn column(&self) -> &str {
        match self {
            FilterSpec::Members { column, .. } | FilterSpec::Range { column, .. } => column,
        }
    }
}

/// An ordered set of filters plus optional sort column and row cap.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewFilter {
    pub filters: Vec<FilterSpec>,
    pub sort_by: Option<String>,
    pub row_cap: Option<usize>,
}

/// Apply a view to a dataset, producing a new dataset.
///
/// Filters compose with logical AND. Sorting is stable and ascending by
/// the column's natural order, nulls last. The row cap truncates by
/// prefix after filtering and sorting.
pub fn apply_view(dataset: &Dataset, view: &ViewFilter) -> Result<Dataset, ViewError> {
    let mut kept: Vec<usize> = (0..dataset.row_count()).collect();
    for filter in &view.filters {
        let column = dataset
            .column(filter.column())
            .ok_or_else(|| ViewError::UnknownColumn(filter.column().to_string()))?;
        kept.retain(|&row| matches(filter, column, row));
    }
    if let Some(sort_column) = &view.sort_by {
        let column = dataset
            .column(sort_column)
            .ok_or_else(|| ViewError::UnknownColumn(sort_column.clone()))?;
        kept.sort_by(|&a, &b| column.values[a].natural_cmp(&column.values[b]));
    }
    if let Some(cap) = view.row_cap {
        kept.truncate(cap);
    }
    let columns = dataset
        .columns()
        .iter()
        .map(|column| {
            Column::new(
                column.name.clone(),
                column.column_type,
                kept.iter().map(|&row| column.values[row].clone()).collect(),
            )
        })
        .collect();
    Ok(Dataset::new(columns)?)
}

fn matches(filter: &FilterSpec, column: &Column, row: usize) -> bool {
    let value = &column.values[row];
    if value.is_null() {
        return false;
    }
    match filter {
        FilterSpec::Members { values, .. } => values.contains(&value.display_string()),
        FilterSpec::Range { min, max, .. } => value
            .as_f64()
            .is_some_and(|number| number >= *min && number <= *max),
    }
}
