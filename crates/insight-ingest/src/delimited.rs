use csv::ReaderBuilder;
use insight_model::{Column, Dataset, IngestError};
use tracing::debug;

use crate::typing::{infer_column_type, typed_cell};

/// Candidate separators, tried in fixed priority order.
const SEPARATORS: [u8; 4] = [b',', b';', b'\t', b'|'];

#[derive(Debug)]
struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Make the header row usable as column names: blank headers get a
/// positional name, repeats get a numeric suffix.
fn unique_headers(raw: &[String]) -> Vec<String> {
    let mut headers: Vec<String> = Vec::with_capacity(raw.len());
    for (index, header) in raw.iter().enumerate() {
        let base = if header.is_empty() {
            format!("column_{}", index + 1)
        } else {
            header.clone()
        };
        let mut name = base.clone();
        let mut suffix = 2;
        while headers.contains(&name) {
            name = format!("{base}_{suffix}");
            suffix += 1;
        }
        headers.push(name);
    }
    headers
}

/// Structural parse with one separator. The first line defines the column
/// count and names; ragged rows are padded with empty cells to the header
/// width, and cells beyond it are dropped. Fully empty lines are skipped.
fn read_table(text: &str, separator: u8) -> Result<RawTable, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(separator)
        .from_reader(text.as_bytes());
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| IngestError::Parse(error.to_string()))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(RawTable {
            headers: Vec::new(),
            rows: Vec::new(),
        });
    }
    let headers = unique_headers(&raw_rows[0]);
    let mut rows = Vec::with_capacity(raw_rows.len() - 1);
    for record in raw_rows.iter().skip(1) {
        let mut row = Vec::with_capacity(headers.len());
        for index in 0..headers.len() {
            let value = record.get(index).map(String::as_str).unwrap_or("");
            row.push(value.to_string());
        }
        rows.push(row);
    }
    Ok(RawTable { headers, rows })
}

fn build_dataset(table: RawTable) -> Result<Dataset, IngestError> {
    let mut columns = Vec::with_capacity(table.headers.len());
    for (index, header) in table.headers.iter().enumerate() {
        let raw_cells: Vec<String> = table
            .rows
            .iter()
            .map(|row| row[index].clone())
            .collect();
        let column_type = infer_column_type(&raw_cells);
        let values = raw_cells
            .iter()
            .map(|cell| typed_cell(cell, column_type))
            .collect();
        columns.push(Column::new(header.clone(), column_type, values));
    }
    Ok(Dataset::new(columns)?)
}

/// Parse delimited text, trying `, ; tab |` in order and accepting the
/// first separator that yields more than one column.
///
/// If no candidate yields more than one column the text is re-parsed as
/// comma-separated and the single-column result is surfaced anyway, so a
/// plain list of lines still loads instead of failing.
pub fn parse_delimited(text: &str) -> Result<Dataset, IngestError> {
    for separator in SEPARATORS {
        match read_table(text, separator) {
            Ok(table) if table.headers.len() > 1 => {
                let separator = separator as char;
                debug!(
                    %separator,
                    columns = table.headers.len(),
                    rows = table.rows.len(),
                    "separator accepted"
                );
                return build_dataset(table);
            }
            Ok(_) => {}
            // A candidate that fails structurally just means it was the
            // wrong separator; keep trying.
            Err(_) => {}
        }
    }
    let table = read_table(text, b',')?;
    build_dataset(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use insight_model::{CellValue, ColumnType};

    #[test]
    fn parses_comma_separated_with_types() {
        let dataset = parse_delimited("name,age,score\nalice,30,1.5\nbob,25,2.0\n")
            .expect("parse");
        assert_eq!(dataset.column_names(), vec!["name", "age", "score"]);
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.column("age").unwrap().column_type, ColumnType::Int);
        assert_eq!(
            dataset.column("score").unwrap().column_type,
            ColumnType::Float
        );
        assert_eq!(
            dataset.column("age").unwrap().values[0],
            CellValue::Int(30)
        );
    }

    #[test]
    fn semicolon_wins_when_comma_yields_one_column() {
        let dataset = parse_delimited("name;age\nalice;30\n").expect("parse");
        assert_eq!(dataset.column_names(), vec!["name", "age"]);
    }

    #[test]
    fn pipe_separated_parses() {
        let dataset = parse_delimited("a|b|c\n1|2|3\n").expect("parse");
        assert_eq!(dataset.column_count(), 3);
    }

    #[test]
    fn single_column_fallback_never_blocks() {
        let dataset = parse_delimited("lines\nfirst\nsecond\n").expect("parse");
        assert_eq!(dataset.column_count(), 1);
        assert_eq!(dataset.row_count(), 2);
    }

    #[test]
    fn ragged_rows_are_padded_with_null() {
        let dataset = parse_delimited("a,b,c\n1,2\n4,5,6\n").expect("parse");
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.column("c").unwrap().values[0], CellValue::Null);
        assert_eq!(dataset.column("c").unwrap().values[1], CellValue::Int(6));
    }

    #[test]
    fn empty_cells_become_null() {
        let dataset = parse_delimited("a,b\n1,\n2,x\n").expect("parse");
        assert_eq!(dataset.column("b").unwrap().values[0], CellValue::Null);
    }

    #[test]
    fn duplicate_headers_get_suffixes() {
        let dataset = parse_delimited("id,id,\n1,2,3\n").expect("parse");
        assert_eq!(dataset.column_names(), vec!["id", "id_2", "column_3"]);
    }

    #[test]
    fn quoted_fields_keep_separators() {
        let dataset = parse_delimited("a,b\n\"x, y\",2\n").expect("parse");
        assert_eq!(
            dataset.column("a").unwrap().values[0],
            CellValue::Text("x, y".to_string())
        );
    }

    #[test]
    fn bool_and_timestamp_columns_infer() {
        let dataset =
            parse_delimited("flag,when\ntrue,2024-01-01\nno,2024-02-15\n").expect("parse");
        assert_eq!(dataset.column("flag").unwrap().column_type, ColumnType::Bool);
        assert_eq!(
            dataset.column("when").unwrap().column_type,
            ColumnType::Timestamp
        );
    }
}
