use clutch_types::BikeId;
use thiserror::Error;

/// Reasons a comparison report cannot be built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompareError {
    /// Both sides name the same record.
    #[error("cannot compare {0} with itself")]
    SameRecord(BikeId),

    /// One side names a record that does not exist.
    #[error("bike not found: {0}")]
    NotFound(BikeId),
}

pub type CompareResult<T> = Result<T, CompareError>;
