//! Loan arithmetic for BikeClutch.
//!
//! [`emi::calculate`] is the fixed-payment annuity formula with an explicit
//! zero-rate branch. [`LoanQuote`] wraps it with totals and an amortization
//! schedule for display.

pub mod emi;
pub mod error;
pub mod quote;

pub use emi::{calculate, monthly_rate};
pub use error::{LoanError, LoanResult};
pub use quote::{Installment, LoanQuote};
