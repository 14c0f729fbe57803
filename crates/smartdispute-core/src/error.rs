use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("unknown profile field: {0}")]
    UnknownField(String),

    #[error("invalid date {value:?}: expected YYYY-MM-DD")]
    InvalidDate { value: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown form code: {0}")]
pub struct ParseFormIdError(pub String);
