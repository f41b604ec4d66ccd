//! Closed-form payoff estimate for a single debt
//!
//! Uses the standard amortization formula
//! `n = -ln(1 - r*P/M) / ln(1 + r)` where `r` is the monthly rate, `P` the
//! balance and `M` the monthly payment. Results agree with a single-debt
//! [`simulate`](crate::simulation::simulate) run to within the simulator's
//! per-month cent rounding.

use serde::{Deserialize, Serialize};

use crate::metrics::monthly_interest;
use crate::model::DebtEntry;

/// Months needed to pay `balance` at `monthly_payment`.
///
/// `None` when the debt never clears: no payment, no balance, or a payment
/// that does not cover the first month's interest.
#[must_use]
pub fn months_to_payoff(balance: f64, annual_rate: f64, monthly_payment: f64) -> Option<u32> {
    if monthly_payment <= 0.0 || balance <= 0.0 {
        return None;
    }

    let monthly_rate = annual_rate / 100.0 / 12.0;
    if monthly_rate == 0.0 {
        return Some((balance / monthly_payment).ceil() as u32);
    }

    if monthly_payment <= balance * monthly_rate {
        return None;
    }

    let months = -(1.0 - (monthly_rate * balance) / monthly_payment).ln() / monthly_rate.ln_1p();
    Some(months.ceil() as u32)
}

/// Interest paid over the life of the debt.
///
/// `Some(0.0)` when there is nothing to pay or no payment is made; `None` when
/// the debt never clears.
#[must_use]
pub fn total_interest_paid(balance: f64, annual_rate: f64, monthly_payment: f64) -> Option<f64> {
    if monthly_payment <= 0.0 || balance <= 0.0 {
        return Some(0.0);
    }
    let months = months_to_payoff(balance, annual_rate, monthly_payment)?;
    let total_paid = monthly_payment * f64::from(months);
    Some((total_paid - balance).max(0.0))
}

/// Per-debt figures shown next to each debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPayoffEstimate {
    pub id: String,
    pub name: String,
    pub monthly_payment: f64,
    pub monthly_interest: f64,
    /// Portion of this month's payment that reduces the balance
    pub principal_portion: f64,
    pub months: Option<u32>,
    pub total_interest: Option<f64>,
}

impl DebtPayoffEstimate {
    #[must_use]
    pub fn for_debt(debt: &DebtEntry) -> Self {
        let payment = debt.total_payment();
        let interest = monthly_interest(debt.balance, debt.interest_rate);
        Self {
            id: debt.id.clone(),
            name: debt.name.clone(),
            monthly_payment: payment,
            monthly_interest: interest,
            principal_portion: (payment - interest).max(0.0),
            months: months_to_payoff(debt.balance, debt.interest_rate, payment),
            total_interest: total_interest_paid(debt.balance, debt.interest_rate, payment),
        }
    }

    /// True when the payment does not even cover the interest
    #[must_use]
    pub fn is_underwater(&self) -> bool {
        self.monthly_payment <= self.monthly_interest && self.monthly_interest > 0.0
    }
}

#[must_use]
pub fn estimate_debts(debts: &[DebtEntry]) -> Vec<DebtPayoffEstimate> {
    let mut ordered: Vec<&DebtEntry> = debts.iter().collect();
    ordered.sort_by_key(|d| d.order);
    ordered.into_iter().map(DebtPayoffEstimate::for_debt).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_exact_division() {
        assert_eq!(months_to_payoff(1200.0, 0.0, 100.0), Some(12));
        assert_eq!(total_interest_paid(1200.0, 0.0, 100.0), Some(0.0));
        assert_eq!(months_to_payoff(1250.0, 0.0, 100.0), Some(13));
    }

    #[test]
    fn test_payment_below_interest_never_clears() {
        // 2% monthly on 1000 is 20 per month
        assert_eq!(months_to_payoff(1000.0, 24.0, 15.0), None);
        assert_eq!(months_to_payoff(1000.0, 24.0, 20.0), None);
        assert_eq!(total_interest_paid(1000.0, 24.0, 15.0), None);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(months_to_payoff(0.0, 10.0, 100.0), None);
        assert_eq!(months_to_payoff(1000.0, 10.0, 0.0), None);
        assert_eq!(total_interest_paid(0.0, 10.0, 100.0), Some(0.0));
        assert_eq!(total_interest_paid(1000.0, 10.0, 0.0), Some(0.0));
    }

    #[test]
    fn test_closed_form_known_values() {
        assert_eq!(months_to_payoff(1000.0, 20.0, 50.0), Some(25));
        assert_eq!(months_to_payoff(1000.0, 12.0, 100.0), Some(11));
        assert_eq!(months_to_payoff(5000.0, 19.99, 150.0), Some(50));
        assert_eq!(months_to_payoff(25_000.0, 5.8, 280.0), Some(118));

        let interest = total_interest_paid(1000.0, 12.0, 100.0).unwrap();
        assert!((interest - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_estimate_for_debt() {
        let debt = DebtEntry {
            id: "debt-1".into(),
            balance: 1200.0,
            interest_rate: 12.0,
            minimum_payment: 80.0,
            extra_payment: 20.0,
            ..Default::default()
        };
        let estimate = DebtPayoffEstimate::for_debt(&debt);
        assert!((estimate.monthly_interest - 12.0).abs() < 1e-9);
        assert!((estimate.principal_portion - 88.0).abs() < 1e-9);
        assert_eq!(estimate.months, Some(13));
        assert!(!estimate.is_underwater());
    }

    #[test]
    fn test_estimates_follow_priority_order() {
        let debt = |id: &str, order: u32| DebtEntry {
            id: id.into(),
            name: id.into(),
            order,
            ..Default::default()
        };
        let debts = vec![debt("b", 1), debt("a", 0), debt("c", 1)];

        let names: Vec<String> = estimate_debts(&debts).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
