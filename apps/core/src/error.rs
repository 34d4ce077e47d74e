use thiserror::Error;

/// Failures the portfolio can run into while loading or rendering data.
///
/// None of these are fatal: callers log them and carry on with an empty or
/// unchanged view.
#[derive(Debug, Error)]
pub enum Error {
    #[error("fetch failed: {status}")]
    Fetch { status: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("missing display target: {0}")]
    MissingTarget(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
