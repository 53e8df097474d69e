//! Bundled sample inputs.
//!
//! Samples are raw strings run through the normal ingestion pipeline,
//! exactly as pasted input would be; nothing here is pre-parsed.

use std::fmt;

/// A named sample input, one per supported format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// A small delimited sales table.
    Sales,
    /// A JSON API response with a record array plus metadata.
    ApiResponse,
    /// A free-text contact directory rich in extractable entities.
    ContactDirectory,
}

impl Sample {
    pub fn all() -> [Sample; 3] {
        [Sample::Sales, Sample::ApiResponse, Sample::ContactDirectory]
    }

    pub fn name(self) -> &'static str {
        match self {
            Sample::Sales => "sales",
            Sample::ApiResponse => "api-response",
            Sample::ContactDirectory => "contact-directory",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Sample::Sales => "Daily sales figures (delimited)",
            Sample::ApiResponse => "User listing from a JSON API (json)",
            Sample::ContactDirectory => "Team contact notes (free text)",
        }
    }

    pub fn from_name(name: &str) -> Option<Sample> {
        Sample::all()
            .into_iter()
            .find(|sample| sample.name() == name)
    }

    /// The raw input text for this sample.
    pub fn raw(self) -> &'static str {
        match self {
            Sample::Sales => SALES_CSV,
            Sample::ApiResponse => API_RESPONSE_JSON,
            Sample::ContactDirectory => CONTACT_DIRECTORY_TEXT,
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const SALES_CSV: &str = "\
date,product,region,units,price,returned
2024-03-01,Widget A,North,14,19.99,no
2024-03-01,Widget B,South,8,24.50,no
2024-03-02,Widget A,East,11,19.99,yes
2024-03-02,Widget C,North,5,31.00,no
2024-03-03,Widget B,West,9,24.50,no
2024-03-03,Widget A,South,17,18.75,no
2024-03-04,Widget C,East,6,31.00,yes
2024-03-04,Widget B,North,12,24.50,no
2024-03-05,Widget A,West,10,19.99,no
2024-03-05,Widget C,South,,31.00,no
2024-03-06,Widget B,East,7,23.25,no
2024-03-06,Widget A,North,15,18.75,yes
";

const API_RESPONSE_JSON: &str = r#"{
  "users": [
    {"id": 1, "name": "Mara Voss", "email": "mara@example.com", "posts": 23, "followers": 1200, "verified": true},
    {"id": 2, "name": "Tom Reiner", "email": "tom@example.com", "posts": 15, "followers": 890, "verified": false},
    {"id": 3, "name": "Ines Duarte", "email": "ines@example.com", "posts": 31, "followers": 2150, "verified": true},
    {"id": 4, "name": "Paul Okafor", "email": "paul@example.com", "posts": 8, "followers": 567, "verified": false},
    {"id": 5, "name": "Lena Brandt", "email": "lena@example.com", "posts": 42, "followers": 3200, "verified": true}
  ],
  "metadata": {
    "total_users": 5,
    "active_users": 4,
    "last_updated": "2024-09-29T10:30:00Z",
    "api_version": "v2.1"
  }
}"#;

const CONTACT_DIRECTORY_TEXT: &str = "\
Team contact directory:

Mara Voss - mara.voss@example.com - (555) 123-4567 - Project Manager
Tom Reiner - tom.reiner@example.com - (555) 234-5678 - Senior Developer
Ines Duarte - ines.duarte@example.com - (555) 345-6789 - UX Designer
Paul Okafor - paul.okafor@example.com - (555) 456-7890 - Data Scientist

Meeting schedule:
- Weekly standup: 2024-10-01 at 9:00 AM
- Sprint planning: 2024-10-03 at 2:00 PM
- Retrospective: 2024-10-15 at 3:30 PM

Budget notes:
Q1 budget: $75,000
Q2 budget: $82,000
Q3 budget: $78,500
";
