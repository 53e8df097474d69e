use chrono::{NaiveDate, NaiveDateTime};
use insight_model::{CellValue, ColumnType};

/// Boolean tokens recognized during column type inference.
const BOOL_TOKENS: [&str; 4] = ["true", "false", "yes", "no"];

/// Date/time shapes recognized during column type inference: ISO dates,
/// ISO datetimes with a space or `T` separator, and `M/D/YYYY`.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Parse one cell as a timestamp, trying datetime shapes before dates.
/// Date-only values land at midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    for format in DATETIME_FORMATS {
        if let Ok(value) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(value);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(value) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(value.and_hms_opt(0, 0, 0)?);
        }
    }
    None
}

fn is_bool_token(raw: &str) -> bool {
    BOOL_TOKENS
        .iter()
        .any(|token| raw.eq_ignore_ascii_case(token))
}

/// Infer the type of a column from its raw string cells.
///
/// Checked in order: integer, float, boolean, timestamp, text. A rule
/// applies only when every non-empty cell satisfies it; empty cells are
/// ignored here and become null during conversion. A column with no
/// non-empty cells is text.
pub fn infer_column_type(cells: &[String]) -> ColumnType {
    let non_empty: Vec<&str> = cells
        .iter()
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty())
        .collect();
    if non_empty.is_empty() {
        return ColumnType::Text;
    }
    if non_empty.iter().all(|cell| cell.parse::<i64>().is_ok()) {
        return ColumnType::Int;
    }
    if non_empty.iter().all(|cell| cell.parse::<f64>().is_ok()) {
        return ColumnType::Float;
    }
    if non_empty.iter().all(|cell| is_bool_token(cell)) {
        return ColumnType::Bool;
    }
    if non_empty.iter().all(|cell| parse_timestamp(cell).is_some()) {
        return ColumnType::Timestamp;
    }
    ColumnType::Text
}

/// Convert one raw cell according to the column's inferred type.
///
/// Empty cells become null regardless of the type. A cell that fails to
/// convert under the inferred type also becomes null; inference ran over
/// the same cells, so that only happens for values inference ignored.
pub fn typed_cell(raw: &str, column_type: ColumnType) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Null;
    }
    match column_type {
        ColumnType::Int => trimmed
            .parse::<i64>()
            .map_or(CellValue::Null, CellValue::Int),
        ColumnType::Float => trimmed
            .parse::<f64>()
            .map_or(CellValue::Null, CellValue::Float),
        ColumnType::Bool => match trimmed.to_ascii_lowercase().as_str() {
            "true" | "yes" => CellValue::Bool(true),
            "false" | "no" => CellValue::Bool(false),
            _ => CellValue::Null,
        },
        ColumnType::Timestamp => parse_timestamp(trimmed).map_or(CellValue::Null, CellValue::Timestamp),
        ColumnType::Text => CellValue::Text(trimmed.to_string()),
    }
}
