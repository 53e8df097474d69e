use insight_model::{Dataset, FormatTag, IngestError};
use tracing::info;

use crate::pipeline::{IngestOutcome, ingest_bytes, ingest_text};
use crate::samples::Sample;

/// Owner of the one live dataset.
///
/// Loading new input replaces the dataset wholesale, and only on
/// success: a failed ingestion leaves the previous dataset in place so
/// the caller stays usable. Sessions share nothing with each other.
#[derive(Debug, Default)]
pub struct Session {
    dataset: Option<Dataset>,
    format: Option<FormatTag>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The live dataset, if any input has loaded successfully.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// The format of the live dataset's input.
    pub fn format(&self) -> Option<FormatTag> {
        self.format
    }

    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<&Dataset, IngestError> {
        let outcome = ingest_bytes(bytes)?;
        Ok(self.install(outcome))
    }

    pub fn load_text(&mut self, text: &str) -> Result<&Dataset, IngestError> {
        let outcome = ingest_text(text)?;
        Ok(self.install(outcome))
    }

    pub fn load_sample(&mut self, sample: Sample) -> Result<&Dataset, IngestError> {
        info!(sample = sample.name(), "loading sample input");
        self.load_text(sample.raw())
    }

    /// Drop the live dataset.
    pub fn clear(&mut self) {
        self.dataset = None;
        self.format = None;
    }

    fn install(&mut self, outcome: IngestOutcome) -> &Dataset {
        self.format = Some(outcome.format);
        self.dataset.insert(outcome.dataset)
    }
}
