use thiserror::Error;

use crate::query::QueryCategory;

#[derive(Error, Debug)]
pub enum LandingError {
    #[error("Failed to parse response table: {0}")]
    ResponseParse(#[source] serde_json::Error),
    #[error("Response table has no entry for category '{0}'")]
    MissingCategory(QueryCategory),
    #[error("Response table has unknown category '{0}'")]
    UnknownCategory(String),
    #[error("Category '{category}' must have {expected} insights, found {found}")]
    InsightCount {
        category: QueryCategory,
        expected: usize,
        found: usize,
    },
    #[error("Invalid landing configuration: {0}")]
    Config(#[source] serde_json::Error),
    #[error("Toast must enter ({enter_ms} ms) before it starts leaving ({visible_ms} ms)")]
    ToastTimings { enter_ms: u32, visible_ms: u32 },
}
