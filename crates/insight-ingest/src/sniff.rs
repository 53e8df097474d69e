use insight_model::FormatTag;

/// Classify raw text as delimited, JSON, or free text.
///
/// Total over all inputs; the rules are checked in order and the first
/// match wins:
/// 1. empty or whitespace-only input is text
/// 2. a trimmed leading `{` or `[` is JSON
/// 3. a comma plus a newline, with a multi-field first line, is delimited
/// 4. a tab plus a newline is delimited
/// 5. everything else is text
pub fn classify(text: &str) -> FormatTag {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return FormatTag::Text;
    }
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return FormatTag::Json;
    }
    if trimmed.contains(',') && trimmed.contains('\n') {
        let first_line = trimmed.lines().next().unwrap_or("");
        if first_line.split(',').count() > 1 {
            return FormatTag::Delimited;
        }
    }
    if trimmed.contains('\t') && trimmed.contains('\n') {
        return FormatTag::Delimited;
    }
    FormatTag::Text
}
