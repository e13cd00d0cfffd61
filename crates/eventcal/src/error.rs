use std::io;

/// Errors from the fallible edges of the calendar core: parsing day
/// identifiers and loading event fixtures.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid day identifier '{0}', expected YYYY-MM-DD")]
    InvalidDayId(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("generic error: {0}")]
    Generic(String),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Generic(s)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
