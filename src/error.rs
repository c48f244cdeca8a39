use thiserror::Error;

/// Errors that can occur while building or displaying a recipe view
#[derive(Error, Debug)]
pub enum CompanionError {
    /// Filter selector string did not name a known filter
    #[error("Unknown filter: {0} (expected all, easy, medium, hard or quick)")]
    UnknownFilter(String),

    /// Sort selector string did not name a known sort order
    #[error("Unknown sort: {0} (expected none, name or time)")]
    UnknownSort(String),

    /// Page markup lacks an element the display needs
    #[error("Page is missing required element: {0}")]
    MissingElement(String),

    /// Failed to parse a recipe or product dataset
    #[error("Invalid dataset: {0}")]
    Dataset(#[from] serde_json::Error),

    /// A dataset record breaks a data model rule
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Failed to read input or write rendered output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, CompanionError>;
