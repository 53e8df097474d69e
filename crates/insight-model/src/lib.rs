pub mod dataset;
pub mod error;
pub mod format;
pub mod value;

pub use dataset::{Column, Dataset};
pub use error::{IngestError, ModelError};
pub use format::FormatTag;
pub use value::{CellValue, ColumnType};
