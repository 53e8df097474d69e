use insight_model::{CellValue, Column, ColumnType, Dataset, IngestError};
use serde_json::Value;
use tracing::debug;

/// Flatten arbitrary JSON into a tabular dataset.
///
/// Cases, in priority order:
/// 1. root array of objects: one row per object, columns are the union of
///    keys in first-seen order, missing keys are null
/// 2. root object with an array-of-objects member: recurse into the first
///    such member (insertion order); sibling keys are metadata and are
///    discarded
/// 3. any other root object: a two-column (Key, Value) dataset
/// 4. scalar root: a 1x1 dataset
///
/// A root array of non-objects is not covered by the cases above; it
/// becomes a single "Value" column, one row per element.
pub fn normalize_json(text: &str) -> Result<Dataset, IngestError> {
    let root: Value =
        serde_json::from_str(text).map_err(|error| IngestError::Parse(format!("invalid JSON: {error}")))?;
    match root {
        Value::Array(items) => array_dataset(&items),
        Value::Object(map) => {
            for (key, value) in &map {
                if let Value::Array(items) = value {
                    if !items.is_empty() && items.iter().all(Value::is_object) {
                        debug!(key = key.as_str(), rows = items.len(), "using nested record array");
                        return rows_from_objects(items);
                    }
                }
            }
            key_value_dataset(&map)
        }
        scalar => Ok(Dataset::new(vec![single_value_column(&scalar)])?),
    }
}

fn array_dataset(items: &[Value]) -> Result<Dataset, IngestError> {
    if items.iter().all(Value::is_object) {
        return rows_from_objects(items);
    }
    let cells: Vec<CellValue> = items.iter().map(value_to_cell).collect();
    let (column_type, values) = unify_column(cells);
    Ok(Dataset::new(vec![Column::new("Value", column_type, values)])?)
}

fn rows_from_objects(items: &[Value]) -> Result<Dataset, IngestError> {
    let mut names: Vec<String> = Vec::new();
    for item in items {
        if let Value::Object(map) = item {
            for key in map.keys() {
                if !names.iter().any(|name| name == key) {
                    names.push(key.clone());
                }
            }
        }
    }
    let mut columns = Vec::with_capacity(names.len());
    for name in &names {
        let cells: Vec<CellValue> = items
            .iter()
            .map(|item| match item {
                Value::Object(map) => map.get(name).map_or(CellValue::Null, value_to_cell),
                _ => CellValue::Null,
            })
            .collect();
        let (column_type, values) = unify_column(cells);
        columns.push(Column::new(name.clone(), column_type, values));
    }
    Ok(Dataset::new(columns)?)
}

/// Case 3: one row per top-level key, values stringified.
fn key_value_dataset(map: &serde_json::Map<String, Value>) -> Result<Dataset, IngestError> {
    let keys: Vec<CellValue> = map
        .keys()
        .map(|key| CellValue::Text(key.clone()))
        .collect();
    let values: Vec<CellValue> = map
        .values()
        .map(|value| CellValue::Text(stringify(value)))
        .collect();
    Ok(Dataset::new(vec![
        Column::new("Key", ColumnType::Text, keys),
        Column::new("Value", ColumnType::Text, values),
    ])?)
}

fn single_value_column(scalar: &Value) -> Column {
    let (column_type, values) = unify_column(vec![value_to_cell(scalar)]);
    Column::new("Value", column_type, values)
}

/// Map one JSON value onto a cell. Nested arrays and objects are opaque
/// here and are carried as compact JSON text.
fn value_to_cell(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Null,
        Value::Bool(flag) => CellValue::Bool(*flag),
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                CellValue::Int(int)
            } else {
                CellValue::Float(number.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(text) => CellValue::Text(text.clone()),
        nested => CellValue::Text(nested.to_string()),
    }
}

/// Stringified form for (Key, Value) rows: bare strings keep their text,
/// everything else renders as JSON.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Settle a column on one closed type. Int and Float mix as Float;
/// anything else mixed collapses to Text with cells stringified.
fn unify_column(cells: Vec<CellValue>) -> (ColumnType, Vec<CellValue>) {
    let mut has_int = false;
    let mut has_float = false;
    let mut has_bool = false;
    let mut has_text = false;
    for cell in &cells {
        match cell {
            CellValue::Int(_) => has_int = true,
            CellValue::Float(_) => has_float = true,
            CellValue::Bool(_) => has_bool = true,
            CellValue::Text(_) => has_text = true,
            CellValue::Timestamp(_) => has_text = true,
            CellValue::Null => {}
        }
    }
    let numeric = has_int || has_float;
    if has_text || (numeric && has_bool) {
        let values = cells
            .into_iter()
            .map(|cell| match cell {
                CellValue::Null => CellValue::Null,
                CellValue::Text(text) => CellValue::Text(text),
                other => CellValue::Text(other.display_string()),
            })
            .collect();
        return (ColumnType::Text, values);
    }
    if has_bool {
        return (ColumnType::Bool, cells);
    }
    if has_float {
        let values = cells
            .into_iter()
            .map(|cell| match cell {
                CellValue::Int(int) => CellValue::Float(int as f64),
                other => other,
            })
            .collect();
        return (ColumnType::Float, values);
    }
    if has_int {
        return (ColumnType::Int, cells);
    }
    (ColumnType::Text, cells)
}
