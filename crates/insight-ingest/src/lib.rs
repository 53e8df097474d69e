//! Ingestion of unlabeled text into tabular datasets.
//!
//! The entry points mirror the pipeline stages: [`decode_input`] turns raw
//! bytes into text, [`classify`] sniffs the format, and one of
//! [`parse_delimited`], [`normalize_json`], or [`extract_entities`] turns
//! the text into a [`insight_model::Dataset`].

pub mod decode;
pub mod delimited;
pub mod entities;
pub mod json;
pub mod sniff;
pub mod typing;

pub use decode::decode_input;
pub use delimited::parse_delimited;
pub use entities::extract_entities;
pub use json::normalize_json;
pub use sniff::classify;
pub use typing::{infer_column_type, parse_timestamp, typed_cell};
