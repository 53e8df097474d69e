use insight_chart::ChartSpec;
use insight_model::{Dataset, FormatTag};
use insight_profile::{ColumnProfile, DatasetSummary};

/// Everything one ingest run produces for display.
pub struct IngestReport {
    /// File name or sample name.
    pub source: String,
    pub format: FormatTag,
    /// Profiles, aggregates, and chart suggestions describe the full
    /// dataset; `view` is what filters/sort/limit left for display.
    pub profiles: Vec<ColumnProfile>,
    pub summary: DatasetSummary,
    pub charts: Vec<ChartSpec>,
    pub view: Dataset,
    /// Row count of the full dataset, before the view was applied.
    pub total_rows: usize,
    /// Number of view rows to print.
    pub preview_rows: usize,
}
