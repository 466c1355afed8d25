use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq)]
pub enum TypeError {
    #[error("invalid bike id: {0:?}")]
    InvalidId(String),

    #[error("unknown spec key: {0}")]
    UnknownSpecKey(String),

    #[error("rating {0} is outside the range 0-5")]
    RatingOutOfRange(f64),
}
