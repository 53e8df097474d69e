use std::collections::HashMap;
use std::sync::LazyLock;

use insight_model::{CellValue, Column, ColumnType, Dataset};
use regex::Regex;
use tracing::debug;

/// Per-kind cap on extracted matches.
const MATCH_CAP: usize = 10;

/// Rows emitted by the word-frequency fallback.
const FALLBACK_ROWS: usize = 10;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email pattern")
});
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\d{3}\)\s?\d{3}-\d{4}|\b\d{3}-\d{3}-\d{4}\b").expect("valid phone pattern")
});
static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{4}-\d{2}-\d{2}\b|\b\d{1,2}/\d{1,2}/\d{4}\b").expect("valid date pattern")
});
static MONEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\d[\d,]*(?:\.\d{2})?").expect("valid money pattern"));
static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]+ [A-Z][a-z]+\b").expect("valid name pattern"));
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]{3,}").expect("valid word pattern"));

#[derive(Debug, Clone, Copy)]
enum EntityKind {
    Email,
    Phone,
    Date,
    Money,
    Name,
}

impl EntityKind {
    fn label(self) -> &'static str {
        match self {
            EntityKind::Email => "Email",
            EntityKind::Phone => "Phone",
            EntityKind::Date => "Date",
            EntityKind::Money => "Money",
            EntityKind::Name => "Name",
        }
    }

    /// Fixed context tag per entity kind.
    fn context(self) -> &'static str {
        match self {
            EntityKind::Email | EntityKind::Phone => "Contact Information",
            EntityKind::Date => "Timeline",
            EntityKind::Money => "Financial",
            EntityKind::Name => "Person",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            EntityKind::Email => &EMAIL,
            EntityKind::Phone => &PHONE,
            EntityKind::Date => &DATE,
            EntityKind::Money => &MONEY,
            EntityKind::Name => &NAME,
        }
    }
}

/// Scan order is fixed; it determines row emission order.
const SCANS: [EntityKind; 5] = [
    EntityKind::Email,
    EntityKind::Phone,
    EntityKind::Date,
    EntityKind::Money,
    EntityKind::Name,
];

/// Pull structured records out of free text.
///
/// Five independent pattern scans over the full text, each capped to the
/// first ten matches, emitted in fixed order. When no scan matches
/// anything the result degrades to a word-frequency table; there is no
/// error path.
pub fn extract_entities(text: &str) -> Dataset {
    let mut types = Vec::new();
    let mut values = Vec::new();
    let mut contexts = Vec::new();
    for kind in SCANS {
        for found in kind.pattern().find_iter(text).take(MATCH_CAP) {
            types.push(CellValue::Text(kind.label().to_string()));
            values.push(CellValue::Text(found.as_str().to_string()));
            contexts.push(CellValue::Text(kind.context().to_string()));
        }
    }
    if types.is_empty() {
        debug!("no entities found; falling back to word frequencies");
        return word_frequency_table(text);
    }
    Dataset::new(vec![
        Column::new("Type", ColumnType::Text, types),
        Column::new("Value", ColumnType::Text, values),
        Column::new("Context", ColumnType::Text, contexts),
    ])
    .expect("entity columns share one length")
}

/// Top words by descending frequency, ties broken by first appearance.
/// Tokens are alphabetic runs of length three or more, lower-cased.
fn word_frequency_table(text: &str) -> Dataset {
    let lowered = text.to_lowercase();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for found in WORD.find_iter(&lowered) {
        let word = found.as_str();
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            first_seen.push(word);
        }
        *count += 1;
    }
    let mut ranked: Vec<(usize, &str)> = first_seen
        .iter()
        .enumerate()
        .map(|(order, word)| (order, *word))
        .collect();
    ranked.sort_by(|a, b| counts[b.1].cmp(&counts[a.1]).then(a.0.cmp(&b.0)));
    let mut words = Vec::new();
    let mut frequencies = Vec::new();
    let mut labels = Vec::new();
    for (_, word) in ranked.into_iter().take(FALLBACK_ROWS) {
        words.push(CellValue::Text(word.to_string()));
        frequencies.push(CellValue::Int(counts[word] as i64));
        labels.push(CellValue::Text("Word Analysis".to_string()));
    }
    Dataset::new(vec![
        Column::new("Word", ColumnType::Text, words),
        Column::new("Frequency", ColumnType::Int, frequencies),
        Column::new("Type", ColumnType::Text, labels),
    ])
    .expect("frequency columns share one length")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_values(dataset: &Dataset, name: &str) -> Vec<String> {
        dataset
            .column(name)
            .expect("column present")
            .values
            .iter()
            .map(CellValue::display_string)
            .collect()
    }

    #[test]
    fn one_email_one_date_yields_two_rows() {
        let dataset = extract_entities("reach me at jane@example.com by 2024-05-01");
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(column_values(&dataset, "Type"), vec!["Email", "Date"]);
        assert_eq!(
            column_values(&dataset, "Context"),
            vec!["Contact Information", "Timeline"]
        );
    }

    #[test]
    fn emission_order_is_fixed() {
        let text = "Alice Johnson paid $1,200.50 on 3/15/2024, call (555) 123-4567 or \
                    alice@example.com";
        let dataset = extract_entities(text);
        assert_eq!(
            column_values(&dataset, "Type"),
            vec!["Email", "Phone", "Date", "Money", "Name"]
        );
        assert_eq!(
            column_values(&dataset, "Value"),
            vec![
                "alice@example.com",
                "(555) 123-4567",
                "3/15/2024",
                "$1,200.50",
                "Alice Johnson",
            ]
        );
    }

    #[test]
    fn dashed_phone_shape_matches() {
        let dataset = extract_entities("fax: 555-123-4567");
        assert_eq!(column_values(&dataset, "Type"), vec!["Phone"]);
    }

    #[test]
    fn matches_are_capped_per_kind() {
        let mut text = String::new();
        for index in 0..15 {
            text.push_str(&format!("user{index}@example.com "));
        }
        let dataset = extract_entities(&text);
        assert_eq!(dataset.row_count(), 10);
    }

    #[test]
    fn no_entities_falls_back_to_word_frequencies() {
        let dataset = extract_entities("the quick brown fox jumps over the lazy dog the fox");
        assert_eq!(dataset.column_names(), vec!["Word", "Frequency", "Type"]);
        let words = column_values(&dataset, "Word");
        assert_eq!(words[0], "the");
        assert_eq!(
            dataset.column("Frequency").unwrap().values[0],
            CellValue::Int(3)
        );
        // "fox" (2) outranks every 1-count word; among those, first seen wins.
        assert_eq!(words[1], "fox");
        assert_eq!(words[2], "quick");
    }

    #[test]
    fn fallback_ignores_short_tokens() {
        let dataset = extract_entities("go on up at it is");
        assert_eq!(dataset.row_count(), 0);
    }

    #[test]
    fn empty_input_yields_empty_fallback() {
        let dataset = extract_entities("");
        assert_eq!(dataset.row_count(), 0);
        assert_eq!(dataset.column_count(), 3);
    }
}
