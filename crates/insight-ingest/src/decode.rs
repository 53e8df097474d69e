use insight_model::IngestError;
use tracing::warn;

/// Inputs larger than this get a size advisory before parsing continues.
const SIZE_ADVISORY_BYTES: usize = 10 * 1024 * 1024;

/// Decode an uploaded or pasted byte sequence as UTF-8 text.
///
/// A decoding failure is a user-facing [`IngestError::Decode`], never a
/// crash. Oversized inputs are allowed through with a warning; the
/// pipeline is synchronous and a slow parse simply delays the response.
pub fn decode_input(bytes: &[u8]) -> Result<String, IngestError> {
    if bytes.len() > SIZE_ADVISORY_BYTES {
        warn!(
            size_mb = bytes.len() / (1024 * 1024),
            "large input; processing may be slow"
        );
    }
    let text = std::str::from_utf8(bytes)?;
    Ok(text.to_string())
}
