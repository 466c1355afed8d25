use serde::Serialize;
use tracing::debug;

use crate::emi::{calculate, monthly_rate};
use crate::error::LoanResult;

/// A priced loan: the monthly installment and what it adds up to.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoanQuote {
    pub principal: f64,
    /// Annual nominal rate in percent.
    pub annual_percent: f64,
    pub months: u32,
    pub emi: f64,
    pub total_payable: f64,
    pub total_interest: f64,
}

/// One month of an amortization schedule.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Installment {
    /// 1-based month number.
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    /// Outstanding balance after this payment.
    pub balance: f64,
}

impl LoanQuote {
    /// Quote `principal` over `months` at `annual_percent` nominal per year.
    pub fn new(principal: f64, annual_percent: f64, months: u32) -> LoanResult<Self> {
        let emi = calculate(principal, monthly_rate(annual_percent), months)?;
        let total_payable = emi * f64::from(months);
        debug!(principal, annual_percent, months, emi, "loan quoted");
        Ok(Self {
            principal,
            annual_percent,
            months,
            emi,
            total_payable,
            total_interest: total_payable - principal,
        })
    }

    /// Month-by-month split of each installment into interest and principal.
    ///
    /// The last balance is clamped to zero to absorb float drift.
    pub fn schedule(&self) -> Vec<Installment> {
        let rate = monthly_rate(self.annual_percent);
        let mut balance = self.principal;
        (1..=self.months)
            .map(|month| {
                let interest = balance * rate;
                let principal = self.emi - interest;
                balance -= principal;
                if month == self.months || balance.abs() < 1e-6 {
                    balance = 0.0;
                }
                Installment {
                    month,
                    payment: self.emi,
                    interest,
                    principal,
                    balance,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoanError;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn quote_totals() {
        let quote = LoanQuote::new(100_000.0, 12.0, 12).unwrap();
        assert!(close(quote.emi, 8884.88));
        assert!(close(quote.total_payable, quote.emi * 12.0));
        assert!(close(quote.total_interest, quote.total_payable - 100_000.0));
    }

    #[test]
    fn zero_rate_quote_has_no_interest() {
        let quote = LoanQuote::new(120_000.0, 0.0, 12).unwrap();
        assert_eq!(quote.emi, 10_000.0);
        assert_eq!(quote.total_interest, 0.0);
        assert!(quote.schedule().iter().all(|row| row.interest == 0.0));
    }

    #[test]
    fn schedule_amortizes_to_zero() {
        let quote = LoanQuote::new(185_000.0, 9.5, 36).unwrap();
        let schedule = quote.schedule();
        assert_eq!(schedule.len(), 36);
        assert_eq!(schedule[0].month, 1);
        assert_eq!(schedule.last().map(|row| row.balance), Some(0.0));

        let repaid: f64 = schedule.iter().map(|row| row.principal).sum();
        assert!(close(repaid, 185_000.0));
        let interest: f64 = schedule.iter().map(|row| row.interest).sum();
        assert!(close(interest, quote.total_interest));
    }

    #[test]
    fn first_month_interest_is_on_full_principal() {
        let quote = LoanQuote::new(100_000.0, 12.0, 12).unwrap();
        let first = &quote.schedule()[0];
        assert!(close(first.interest, 1_000.0));
        assert!(close(first.balance, 100_000.0 - (quote.emi - 1_000.0)));
    }

    #[test]
    fn invalid_term_propagates() {
        assert_eq!(
            LoanQuote::new(100_000.0, 12.0, 0),
            Err(LoanError::NonPositiveTerm)
        );
    }

    #[test]
    fn serializes_for_json_output() {
        let quote = LoanQuote::new(1_000.0, 0.0, 4).unwrap();
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["emi"], 250.0);
        assert_eq!(json["months"], 4);
    }
}
