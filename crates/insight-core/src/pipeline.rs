use insight_ingest::{classify, decode_input, extract_entities, normalize_json, parse_delimited};
use insight_model::{Dataset, FormatTag, IngestError};
use tracing::{info, warn};

/// The result of one ingestion: the detected format (reported back to the
/// user, mirroring the detection notice in the UI) and the dataset.
#[derive(Debug, Clone)]
pub struct IngestOutcome {
    pub format: FormatTag,
    pub dataset: Dataset,
}

/// Ingest a raw byte sequence: decode, sniff, parse.
pub fn ingest_bytes(bytes: &[u8]) -> Result<IngestOutcome, IngestError> {
    let text = decode_input(bytes)?;
    ingest_text(&text)
}

/// Ingest already-decoded text: sniff the format, dispatch to the
/// matching parser, and reject empty results.
///
/// The whole pipeline is one synchronous call; a slow parse simply
/// delays the response.
pub fn ingest_text(text: &str) -> Result<IngestOutcome, IngestError> {
    let format = classify(text);
    let dataset = match format {
        FormatTag::Delimited => parse_delimited(text)?,
        FormatTag::Json => normalize_json(text)?,
        FormatTag::Text => extract_entities(text),
    };
    if dataset.is_empty() {
        return Err(IngestError::EmptyResult);
    }
    if format == FormatTag::Delimited && dataset.column_count() == 1 {
        warn!("delimited input produced a single column; check the separator");
    }
    info!(
        %format,
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "ingestion complete"
    );
    Ok(IngestOutcome { format, dataset })
}
