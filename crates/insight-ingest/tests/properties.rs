//! Property tests for the sniffing and parsing entry points.

use insight_ingest::{classify, extract_entities, parse_delimited};
use insight_model::FormatTag;
use proptest::prelude::*;

proptest! {
    /// classify is total: any string maps to exactly one of the three tags.
    #[test]
    fn classify_is_total(input in ".*") {
        let tag = classify(&input);
        prop_assert!(matches!(
            tag,
            FormatTag::Delimited | FormatTag::Json | FormatTag::Text
        ));
    }

    /// The extractor never fails and never emits more than 10 rows per
    /// entity kind plus the other scans (5 kinds x 10), or 10 fallback rows.
    #[test]
    fn extract_entities_is_total(input in ".*") {
        let dataset = extract_entities(&input);
        prop_assert!(dataset.row_count() <= 50);
        prop_assert_eq!(dataset.column_count(), 3);
    }

    /// Delimited parsing of arbitrary line-ish text either errors cleanly
    /// or produces a structurally valid dataset (the constructor enforces
    /// the invariants, so success is enough).
    #[test]
    fn parse_delimited_never_panics(input in "[a-z0-9,;|\t\n\"]{0,200}") {
        let _ = parse_delimited(&input);
    }
}
