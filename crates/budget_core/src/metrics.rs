//! Aggregate metrics over a scenario's records
//!
//! Every function here is a pure reduction over slices of entries. Degenerate
//! inputs (no income, no contribution) produce sentinel values instead of errors:
//! `0` for rates and `None` for durations that never finish.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::model::{DebtEntry, ExpenseCategory, ExpenseEntry, GoalEntry, IncomeEntry};
use crate::simulation::{SimulationConfig, simulate};

/// Number of months of expenses an emergency fund should cover
pub const DEFAULT_EMERGENCY_MONTHS: f64 = 3.0;

/// Expenses partitioned by `is_fixed`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSplit {
    pub fixed: f64,
    pub variable: f64,
}

#[must_use]
pub fn total_income(income: &[IncomeEntry]) -> f64 {
    income.iter().map(|i| i.amount).sum()
}

#[must_use]
pub fn total_expenses(expenses: &[ExpenseEntry]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

#[must_use]
pub fn expenses_by_type(expenses: &[ExpenseEntry]) -> ExpenseSplit {
    expenses
        .iter()
        .fold(ExpenseSplit::default(), |mut split, expense| {
            if expense.is_fixed {
                split.fixed += expense.amount;
            } else {
                split.variable += expense.amount;
            }
            split
        })
}

/// Sum of expenses per category. Unrecognised categories were already folded
/// into `Other` at deserialization time.
#[must_use]
pub fn expenses_by_category(expenses: &[ExpenseEntry]) -> FxHashMap<ExpenseCategory, f64> {
    let mut by_category = FxHashMap::default();
    for expense in expenses {
        *by_category.entry(expense.category).or_insert(0.0) += expense.amount;
    }
    by_category
}

/// Minimum plus extra payment across all debts
#[must_use]
pub fn total_debt_payments(debts: &[DebtEntry]) -> f64 {
    debts.iter().map(DebtEntry::total_payment).sum()
}

#[must_use]
pub fn total_debt_minimums(debts: &[DebtEntry]) -> f64 {
    debts.iter().map(|d| d.minimum_payment).sum()
}

#[must_use]
pub fn total_debt_extras(debts: &[DebtEntry]) -> f64 {
    debts.iter().map(|d| d.extra_payment).sum()
}

#[must_use]
pub fn total_debt_balance(debts: &[DebtEntry]) -> f64 {
    debts.iter().map(|d| d.balance).sum()
}

#[must_use]
pub fn total_goal_contributions(goals: &[GoalEntry]) -> f64 {
    goals.iter().map(|g| g.monthly_contribution).sum()
}

/// Money left each month after everything is paid. Negative means a deficit.
#[must_use]
pub fn net_surplus(income: f64, expenses: f64, debt_payments: f64, goal_contributions: f64) -> f64 {
    income - expenses - debt_payments - goal_contributions
}

/// Share of income not spent on expenses or debt payments, in percent.
///
/// Floored at 0 but not capped above.
#[must_use]
pub fn savings_rate(income: f64, expenses: f64, debt_payments: f64) -> f64 {
    if income <= 0.0 {
        return 0.0;
    }
    let savings = income - expenses - debt_payments;
    (savings / income * 100.0).max(0.0)
}

#[must_use]
pub fn emergency_fund_target(monthly_expenses: f64, months: f64) -> f64 {
    monthly_expenses * months
}

/// Months of saving until the emergency fund target is met
#[must_use]
pub fn months_to_emergency_fund(
    current_savings: f64,
    target: f64,
    monthly_contribution: f64,
) -> Option<u32> {
    if monthly_contribution <= 0.0 {
        return None;
    }
    let needed = target - current_savings;
    if needed <= 0.0 {
        return Some(0);
    }
    Some((needed / monthly_contribution).ceil() as u32)
}

/// Interest accrued on `balance` over one month at an annual percentage rate
#[must_use]
pub fn monthly_interest(balance: f64, annual_rate: f64) -> f64 {
    balance * (annual_rate / 100.0) / 12.0
}

/// Months until every debt reaches zero, or `None` if that never happens
/// within the configured horizon.
#[must_use]
pub fn months_to_debt_free(debts: &[DebtEntry], config: &SimulationConfig) -> Option<u32> {
    if debts.is_empty() {
        return Some(0);
    }
    simulate(debts, config).months_to_debt_free()
}

/// Total interest paid over the simulated schedule
#[must_use]
pub fn total_interest_to_pay(debts: &[DebtEntry], config: &SimulationConfig) -> f64 {
    simulate(debts, config).total_interest()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(category: ExpenseCategory, amount: f64, is_fixed: bool) -> ExpenseEntry {
        ExpenseEntry {
            id: format!("exp-{amount}"),
            category,
            amount,
            is_fixed,
            ..Default::default()
        }
    }

    #[test]
    fn test_expense_partitions() {
        let expenses = vec![
            expense(ExpenseCategory::Housing, 1500.0, true),
            expense(ExpenseCategory::Food, 400.0, false),
            expense(ExpenseCategory::Transport, 350.0, true),
            expense(ExpenseCategory::Transport, 120.0, false),
        ];

        assert!((total_expenses(&expenses) - 2370.0).abs() < 1e-9);

        let split = expenses_by_type(&expenses);
        assert!((split.fixed - 1850.0).abs() < 1e-9);
        assert!((split.variable - 520.0).abs() < 1e-9);

        let by_category = expenses_by_category(&expenses);
        assert_eq!(by_category.len(), 3);
        assert!((by_category[&ExpenseCategory::Transport] - 470.0).abs() < 1e-9);
    }

    #[test]
    fn test_savings_rate_floor_and_zero_income() {
        assert_eq!(savings_rate(0.0, 100.0, 0.0), 0.0);
        assert_eq!(savings_rate(-50.0, 0.0, 0.0), 0.0);
        assert_eq!(savings_rate(1000.0, 900.0, 300.0), 0.0);
        assert!((savings_rate(5000.0, 2920.0, 430.0) - 33.0).abs() < 1e-9);
    }

    #[test]
    fn test_net_surplus_can_be_negative() {
        assert!((net_surplus(3000.0, 2500.0, 600.0, 100.0) + 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_emergency_fund() {
        assert!((emergency_fund_target(2920.0, DEFAULT_EMERGENCY_MONTHS) - 8760.0).abs() < 1e-9);
        assert_eq!(months_to_emergency_fund(3000.0, 8760.0, 200.0), Some(29));
        assert_eq!(months_to_emergency_fund(9000.0, 8760.0, 200.0), Some(0));
        assert_eq!(months_to_emergency_fund(0.0, 8760.0, 0.0), None);
    }

    #[test]
    fn test_monthly_interest() {
        assert!((monthly_interest(1200.0, 12.0) - 12.0).abs() < 1e-9);
        assert_eq!(monthly_interest(1200.0, 0.0), 0.0);
    }

    #[test]
    fn test_months_to_debt_free_no_debts() {
        assert_eq!(months_to_debt_free(&[], &SimulationConfig::default()), Some(0));
    }

    #[test]
    fn test_total_interest_to_pay() {
        use crate::model::ScenarioPair;
        use crate::simulation::PayoffPolicy;

        let debts = ScenarioPair::sample().plan.debts;
        let independent = SimulationConfig::new(360, PayoffPolicy::Independent);
        let cascade = SimulationConfig::new(360, PayoffPolicy::Cascade);

        assert!((total_interest_to_pay(&debts, &independent) - 8932.98).abs() < 0.005);
        assert!((total_interest_to_pay(&debts, &cascade) - 6229.19).abs() < 0.005);
        assert_eq!(total_interest_to_pay(&[], &cascade), 0.0);
    }
}
