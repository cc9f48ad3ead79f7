//! Error types for the parsing boundary.

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// A record table failed to parse. Parse errors fail fast and are surfaced
/// to the caller; they are never retried and never silently defaulted.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("missing column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: invalid timestamp '{value}'")]
    InvalidTimestamp { row: usize, value: String },

    #[error("row {row}: missing or invalid value in column '{column}'")]
    InvalidValue { row: usize, column: String },

    #[error("CSV error: {0}")]
    Csv(#[from] polars::error::PolarsError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
