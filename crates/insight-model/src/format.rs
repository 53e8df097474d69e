use std::fmt;

/// The inferred shape of raw input, produced once per input by the sniffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatTag {
    Delimited,
    Json,
    Text,
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatTag::Delimited => "delimited",
            FormatTag::Json => "json",
            FormatTag::Text => "text",
        };
        f.write_str(name)
    }
}
