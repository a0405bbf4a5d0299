use thiserror::Error;

/// Reasons a field value is refused.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("student ID cannot be empty")]
    EmptyIdentifier,

    #[error("invalid student ID '{0}': use letters and digits only, with at least one of each")]
    InvalidIdentifier(String),

    #[error("age {0} is out of range (1-100)")]
    AgeOutOfRange(u32),

    #[error("GPA {0} is out of range (0.0 up to, but not including, 10.0)")]
    GpaOutOfRange(f64),

    #[error("stored GPA {0} is out of range (0.0-10.0)")]
    StoredGpaOutOfRange(f64),

    #[error("{0} cannot contain line breaks")]
    MultilineText(&'static str),
}
