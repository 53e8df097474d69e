use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDateTime;

/// A single cell in a dataset column.
///
/// The variant set is closed: dynamic typing happens once, at ingestion,
/// and everything downstream matches on these variants instead of
/// re-coercing strings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Timestamp(NaiveDateTime),
    Null,
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Numeric view of the cell, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(value) => Some(*value as f64),
            CellValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Render the cell the way exports and filters see it.
    ///
    /// Null renders as the empty string. Timestamps at midnight render as
    /// a bare date so date-only inputs survive a serialize/parse cycle.
    pub fn display_string(&self) -> String {
        match self {
            CellValue::Int(value) => value.to_string(),
            CellValue::Float(value) => value.to_string(),
            CellValue::Bool(value) => value.to_string(),
            CellValue::Text(value) => value.clone(),
            CellValue::Timestamp(value) => {
                if value.time() == chrono::NaiveTime::MIN {
                    value.format("%Y-%m-%d").to_string()
                } else {
                    value.format("%Y-%m-%d %H:%M:%S").to_string()
                }
            }
            CellValue::Null => String::new(),
        }
    }

    /// Total order used by the sort engine: numeric ascending, timestamps
    /// chronological, text lexicographic, nulls last.
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => Ordering::Equal,
            (CellValue::Null, _) => Ordering::Greater,
            (_, CellValue::Null) => Ordering::Less,
            (CellValue::Timestamp(a), CellValue::Timestamp(b)) => a.cmp(b),
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                _ => self.display_string().cmp(&other.display_string()),
            },
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}

/// The inferred type of one dataset column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Int,
    Float,
    Bool,
    Text,
    Timestamp,
}

impl ColumnType {
    /// Categorical columns are the ones a membership filter or bar chart
    /// makes sense for.
    pub fn is_categorical(self) -> bool {
        matches!(self, ColumnType::Text | ColumnType::Bool)
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnType::Int | ColumnType::Float)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Int => "int",
            ColumnType::Float => "float",
            ColumnType::Bool => "bool",
            ColumnType::Text => "text",
            ColumnType::Timestamp => "timestamp",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn nulls_sort_last() {
        let mut values = vec![
            CellValue::Null,
            CellValue::Int(2),
            CellValue::Int(1),
            CellValue::Null,
        ];
        values.sort_by(|a, b| a.natural_cmp(b));
        assert_eq!(
            values,
            vec![
                CellValue::Int(1),
                CellValue::Int(2),
                CellValue::Null,
                CellValue::Null,
            ]
        );
    }

    #[test]
    fn int_and_float_compare_numerically() {
        assert_eq!(
            CellValue::Int(2).natural_cmp(&CellValue::Float(1.5)),
            Ordering::Greater
        );
        assert_eq!(
            CellValue::Float(2.0).natural_cmp(&CellValue::Int(2)),
            Ordering::Equal
        );
    }

    #[test]
    fn midnight_timestamp_renders_as_date() {
        let date = NaiveDate::from_ymd_opt(2024, 10, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(CellValue::Timestamp(date).display_string(), "2024-10-01");
        let with_time = NaiveDate::from_ymd_opt(2024, 10, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(
            CellValue::Timestamp(with_time).display_string(),
            "2024-10-01 09:30:00"
        );
    }
}
