use std::fmt;

/// Topic a free-text query is matched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryCategory {
    Diabetes,
    Cardiac,
    Cancer,
    Default,
}

// Checked in order, first hit wins.
const KEYWORDS: [(QueryCategory, &[&str]); 3] = [
    (QueryCategory::Diabetes, &["diabetes"]),
    (QueryCategory::Cardiac, &["cardiac", "surgery"]),
    (QueryCategory::Cancer, &["cancer", "melanoma", "immunotherapy"]),
];

impl QueryCategory {
    pub const ALL: [QueryCategory; 4] = [
        QueryCategory::Diabetes,
        QueryCategory::Cardiac,
        QueryCategory::Cancer,
        QueryCategory::Default,
    ];

    /// Case-insensitive keyword match. Callers are expected to have rejected
    /// blank input already; blank text simply lands in `Default`.
    pub fn classify(query: &str) -> Self {
        let lowered = query.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|word| lowered.contains(word)))
            .map(|(category, _)| *category)
            .unwrap_or(QueryCategory::Default)
    }

    pub fn key(&self) -> &'static str {
        match self {
            QueryCategory::Diabetes => "diabetes",
            QueryCategory::Cardiac => "cardiac",
            QueryCategory::Cancer => "cancer",
            QueryCategory::Default => "default",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }
}

impl fmt::Display for QueryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
