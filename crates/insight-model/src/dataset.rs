use crate::error::ModelError;
use crate::value::{CellValue, ColumnType};

/// One named, typed column of equal-length cell values.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, column_type: ColumnType, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            column_type,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// An in-memory tabular dataset: ordered named columns of equal length.
///
/// Datasets are replaced wholesale when new input is ingested, never
/// mutated in place. The constructor enforces the two invariants (shared
/// column length, unique column names); everything downstream can rely
/// on them.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    pub fn new(columns: Vec<Column>) -> Result<Self, ModelError> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            for column in &columns {
                if column.len() != expected {
                    return Err(ModelError::LengthMismatch {
                        name: column.name.clone(),
                        actual: column.len(),
                        expected,
                    });
                }
            }
        }
        for (index, column) in columns.iter().enumerate() {
            if columns[..index].iter().any(|seen| seen.name == column.name) {
                return Err(ModelError::DuplicateColumn(column.name.clone()));
            }
        }
        Ok(Self { columns })
    }

    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// True when the dataset has zero rows or zero columns.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.column_count() == 0
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|column| column.name.as_str())
            .collect()
    }

    /// The cells of one row, in column order.
    pub fn row(&self, index: usize) -> Vec<&CellValue> {
        self.columns
            .iter()
            .map(|column| &column.values[index])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn rejects_length_mismatch() {
        let result = Dataset::new(vec![
            text_column("a", &["x", "y"]),
            text_column("b", &["x"]),
        ]);
        assert!(matches!(result, Err(ModelError::LengthMismatch { .. })));
    }

    #[test]
    fn rejects_duplicate_names() {
        let result = Dataset::new(vec![
            text_column("a", &["x"]),
            text_column("a", &["y"]),
        ]);
        assert!(matches!(result, Err(ModelError::DuplicateColumn(name)) if name == "a"));
    }

    #[test]
    fn empty_dataset_has_no_rows() {
        let dataset = Dataset::empty();
        assert_eq!(dataset.row_count(), 0);
        assert_eq!(dataset.column_count(), 0);
        assert!(dataset.is_empty());
    }

    #[test]
    fn row_access_follows_column_order() {
        let dataset = Dataset::new(vec![
            text_column("first", &["a", "b"]),
            text_column("second", &["c", "d"]),
        ])
        .expect("valid dataset");
        let row = dataset.row(1);
        assert_eq!(row[0], &CellValue::Text("b".to_string()));
        assert_eq!(row[1], &CellValue::Text("d".to_string()));
    }
}
