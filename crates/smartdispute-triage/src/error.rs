use smartdispute_core::{FormId, IssueCategory};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriageError {
    #[error("no form mapping for issue category {0:?}")]
    MissingFormMapping(IssueCategory),

    #[error("issue category {0:?} is mapped more than once")]
    DuplicateFormMapping(IssueCategory),

    #[error("rule set must end with an unconditional default rule")]
    MissingDefaultRule,

    #[error("rule {index} follows the default rule and can never match")]
    UnreachableRule { index: usize },

    #[error("rule {index} has an empty keyword")]
    EmptyKeyword { index: usize },

    #[error("invalid schema for {form}: {reason}")]
    InvalidSchema { form: FormId, reason: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
