use crate::error::{LoanError, LoanResult};

/// Periodic (monthly) rate as a fraction from an annual nominal percentage.
///
/// `monthly_rate(12.0) == 0.01`.
pub fn monthly_rate(annual_percent: f64) -> f64 {
    annual_percent / 12.0 / 100.0
}

/// Fixed periodic payment for a loan of `principal` over `months` periods
/// at periodic rate `rate` (a fraction, e.g. `0.01` for 1% per month).
///
/// A zero rate amortizes linearly. Otherwise the annuity formula
/// `P·r·(1+r)^n / ((1+r)^n − 1)` applies, evaluated as
/// `P·r / (1 − (1+r)^−n)` through `ln_1p`/`exp_m1` so that tiny rates and
/// long terms stay finite. The result is not rounded.
///
/// ```
/// use clutch_finance::calculate;
///
/// assert_eq!(calculate(100_000.0, 0.0, 10).unwrap(), 10_000.0);
/// assert!((calculate(100_000.0, 0.01, 12).unwrap() - 8884.88).abs() < 0.01);
/// assert!(calculate(100_000.0, 0.01, 0).is_err());
/// ```
pub fn calculate(principal: f64, rate: f64, months: u32) -> LoanResult<f64> {
    validate(principal, rate, months)?;
    let n = f64::from(months);
    if rate == 0.0 {
        return Ok(principal / n);
    }
    let repaid_fraction = -(-n * rate.ln_1p()).exp_m1();
    Ok(principal * (rate / repaid_fraction))
}

pub(crate) fn validate(principal: f64, rate: f64, months: u32) -> LoanResult<()> {
    if months == 0 {
        return Err(LoanError::NonPositiveTerm);
    }
    if !principal.is_finite() || principal < 0.0 {
        return Err(LoanError::InvalidPrincipal(principal));
    }
    if !rate.is_finite() || rate < 0.0 {
        return Err(LoanError::InvalidRate(rate));
    }
    Ok(())
}
