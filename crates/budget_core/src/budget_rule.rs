//! 50/30/20 budget rule
//!
//! Classifies monthly spending into needs (fixed expenses and debt minimums),
//! wants (variable expenses) and savings (goal contributions and extra debt
//! payments), each as a percentage of income with a status tier.

use serde::{Deserialize, Serialize};

use crate::metrics::{
    expenses_by_type, total_debt_extras, total_debt_minimums, total_goal_contributions,
    total_income,
};
use crate::model::Scenario;

pub const NEEDS_TARGET: f64 = 50.0;
pub const WANTS_TARGET: f64 = 30.0;
pub const SAVINGS_TARGET: f64 = 20.0;

/// How a category compares with its target share
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocationStatus {
    Good,
    Warning,
    /// Spending category above its upper tier
    Over,
    /// Savings category below its lower tier
    Under,
}

impl AllocationStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AllocationStatus::Good => "good",
            AllocationStatus::Warning => "warning",
            AllocationStatus::Over => "over",
            AllocationStatus::Under => "under",
        }
    }

    fn for_spending(percent: f64, target: f64) -> Self {
        if percent <= target {
            AllocationStatus::Good
        } else if percent <= target + 10.0 {
            AllocationStatus::Warning
        } else {
            AllocationStatus::Over
        }
    }

    fn for_savings(percent: f64) -> Self {
        if percent >= SAVINGS_TARGET {
            AllocationStatus::Good
        } else if percent >= SAVINGS_TARGET - 10.0 {
            AllocationStatus::Warning
        } else {
            AllocationStatus::Under
        }
    }
}

/// Monthly amounts feeding the rule
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BudgetRuleInputs {
    pub fixed_expenses: f64,
    pub variable_expenses: f64,
    pub debt_minimums: f64,
    pub debt_extras: f64,
    pub goal_contributions: f64,
    pub income: f64,
}

impl BudgetRuleInputs {
    #[must_use]
    pub fn from_scenario(scenario: &Scenario) -> Self {
        let split = expenses_by_type(&scenario.expenses);
        Self {
            fixed_expenses: split.fixed,
            variable_expenses: split.variable,
            debt_minimums: total_debt_minimums(&scenario.debts),
            debt_extras: total_debt_extras(&scenario.debts),
            goal_contributions: total_goal_contributions(&scenario.goals),
            income: total_income(&scenario.income),
        }
    }
}

/// One of the three rule categories
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleBucket {
    pub amount: f64,
    pub percent: f64,
    pub status: AllocationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub needs: RuleBucket,
    pub wants: RuleBucket,
    pub savings: RuleBucket,
    /// Income not claimed by any category; negative when overspent
    pub unallocated_percent: f64,
}

impl BudgetAllocation {
    #[must_use]
    pub fn from_scenario(scenario: &Scenario) -> Self {
        allocate(BudgetRuleInputs::from_scenario(scenario))
    }
}

/// Apply the 50/30/20 rule. With no income every percentage is 0.
#[must_use]
pub fn allocate(inputs: BudgetRuleInputs) -> BudgetAllocation {
    let needs_amount = inputs.fixed_expenses + inputs.debt_minimums;
    let wants_amount = inputs.variable_expenses;
    let savings_amount = inputs.goal_contributions + inputs.debt_extras;

    let percent_of_income = |amount: f64| {
        if inputs.income > 0.0 {
            amount / inputs.income * 100.0
        } else {
            0.0
        }
    };

    let needs = percent_of_income(needs_amount);
    let wants = percent_of_income(wants_amount);
    let savings = percent_of_income(savings_amount);
    let unallocated = if inputs.income > 0.0 {
        100.0 - needs - wants - savings
    } else {
        0.0
    };

    BudgetAllocation {
        needs: RuleBucket {
            amount: needs_amount,
            percent: needs,
            status: AllocationStatus::for_spending(needs, NEEDS_TARGET),
        },
        wants: RuleBucket {
            amount: wants_amount,
            percent: wants,
            status: AllocationStatus::for_spending(wants, WANTS_TARGET),
        },
        savings: RuleBucket {
            amount: savings_amount,
            percent: savings,
            status: AllocationStatus::for_savings(savings),
        },
        unallocated_percent: unallocated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScenarioPair;

    #[test]
    fn test_sample_plan_allocation() {
        let allocation = BudgetAllocation::from_scenario(&ScenarioPair::sample().plan);

        // needs: fixed 2230 + minimums 430 = 2660 of 5000
        assert!((allocation.needs.percent - 53.2).abs() < 1e-9);
        assert_eq!(allocation.needs.status, AllocationStatus::Warning);
        // wants: 550 of 5000
        assert!((allocation.wants.percent - 11.0).abs() < 1e-9);
        // savings: goals 550 + extra 100 = 650 of 5000
        assert!((allocation.savings.percent - 13.0).abs() < 1e-9);
        assert_eq!(allocation.savings.status, AllocationStatus::Warning);
        assert!((allocation.unallocated_percent - 22.8).abs() < 1e-9);
    }

    #[test]
    fn test_status_tiers() {
        let tiers = |needs: f64, wants: f64, savings: f64| {
            let a = allocate(BudgetRuleInputs {
                fixed_expenses: needs,
                variable_expenses: wants,
                goal_contributions: savings,
                income: 100.0,
                ..Default::default()
            });
            (a.needs.status, a.wants.status, a.savings.status)
        };

        use AllocationStatus::*;
        assert_eq!(tiers(50.0, 30.0, 20.0), (Good, Good, Good));
        assert_eq!(tiers(60.0, 40.0, 10.0), (Warning, Warning, Warning));
        assert_eq!(tiers(61.0, 41.0, 9.0), (Over, Over, Under));
    }

    #[test]
    fn test_zero_income_allocation() {
        let a = allocate(BudgetRuleInputs {
            fixed_expenses: 500.0,
            ..Default::default()
        });
        assert_eq!(a.needs.percent, 0.0);
        assert_eq!(a.wants.percent, 0.0);
        assert_eq!(a.savings.percent, 0.0);
        assert_eq!(a.unallocated_percent, 0.0);
        assert_eq!(a.savings.status, AllocationStatus::Under);
    }

    #[test]
    fn test_overspent_unallocated_is_negative() {
        let a = allocate(BudgetRuleInputs {
            fixed_expenses: 900.0,
            variable_expenses: 300.0,
            income: 1000.0,
            ..Default::default()
        });
        assert!((a.unallocated_percent + 20.0).abs() < 1e-9);
        let sum = a.needs.percent + a.wants.percent + a.savings.percent + a.unallocated_percent;
        assert!((sum - 100.0).abs() < 1e-9);
    }
}
