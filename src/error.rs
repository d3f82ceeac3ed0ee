use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryError {
    /// Emphasis range out of bounds, inverted, or overlapping a previous one.
    #[error("Invalid emphasis range {start}..{end} for text of {len} chars")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("Unknown template key: {0}")]
    UnknownTemplate(String),

    #[error("Invalid type code: {0}")]
    InvalidTypeCode(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SummaryResult<T> = Result<T, SummaryError>;
