//! Serialization of datasets for export.
//!
//! Three formats: delimited text with a header row, a JSON array of
//! row-objects, and a human-readable plain-text summary. All three work
//! on the live dataset or any filtered view of it.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use anyhow::{Context, Result};
use insight_model::{CellValue, ColumnType, Dataset};
use insight_profile::summarize;
use serde_json::Value;

/// Serialize the dataset as comma-separated text with a header row.
/// Null cells become empty fields.
pub fn to_delimited(dataset: &Dataset) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(dataset.column_names())
        .context("write header row")?;
    for index in 0..dataset.row_count() {
        let record: Vec<String> = dataset
            .row(index)
            .iter()
            .map(|value| value.display_string())
            .collect();
        writer.write_record(&record).context("write data row")?;
    }
    let bytes = writer
        .into_inner()
        .map_err(csv::IntoInnerError::into_error)
        .context("flush csv writer")?;
    String::from_utf8(bytes).context("csv output is utf-8")
}

/// Serialize the dataset as a JSON array of row-objects, preserving cell
/// types: numbers and booleans stay themselves, timestamps render as
/// ISO-8601 text, nulls as JSON null.
pub fn to_json_records(dataset: &Dataset) -> Result<String> {
    let mut records = Vec::with_capacity(dataset.row_count());
    for index in 0..dataset.row_count() {
        let mut record = serde_json::Map::new();
        for column in dataset.columns() {
            record.insert(column.name.clone(), cell_to_json(&column.values[index]));
        }
        records.push(Value::Object(record));
    }
    serde_json::to_string_pretty(&Value::Array(records)).context("serialize records")
}

fn cell_to_json(value: &CellValue) -> Value {
    match value {
        CellValue::Int(int) => Value::from(*int),
        CellValue::Float(float) => Value::from(*float),
        CellValue::Bool(flag) => Value::from(*flag),
        CellValue::Text(text) => Value::from(text.clone()),
        CellValue::Timestamp(_) => Value::from(value.display_string()),
        CellValue::Null => Value::Null,
    }
}

/// Render a plain-text summary: row and column counts, per-type column
/// counts, missing cells, and the memory estimate.
pub fn render_summary(dataset: &Dataset) -> String {
    let summary = summarize(dataset);
    let mut type_counts: BTreeMap<ColumnType, usize> = BTreeMap::new();
    for column in dataset.columns() {
        *type_counts.entry(column.column_type).or_insert(0) += 1;
    }
    let mut out = String::new();
    let _ = writeln!(out, "Data Summary:");
    let _ = writeln!(out);
    let _ = writeln!(out, "Rows: {}", summary.rows);
    let _ = writeln!(out, "Columns: {}", summary.columns);
    let types: Vec<String> = type_counts
        .iter()
        .map(|(column_type, count)| format!("{column_type}={count}"))
        .collect();
    let _ = writeln!(out, "Column types: {}", types.join(", "));
    let _ = writeln!(out, "Missing values: {}", summary.missing_cells);
    let _ = writeln!(
        out,
        "Memory usage: {:.1} KB",
        summary.approx_bytes as f64 / 1024.0
    );
    out
}
