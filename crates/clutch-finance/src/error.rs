use thiserror::Error;

/// Inputs the loan calculator refuses instead of producing NaN or infinity.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LoanError {
    #[error("loan term must be at least one month")]
    NonPositiveTerm,

    #[error("principal must be a non-negative finite amount, got {0}")]
    InvalidPrincipal(f64),

    #[error("interest rate must be a non-negative finite value, got {0}")]
    InvalidRate(f64),
}

pub type LoanResult<T> = Result<T, LoanError>;
