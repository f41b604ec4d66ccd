use serde::{Deserialize, Serialize};

use crate::budget_rule::BudgetAllocation;
use crate::goals::{GoalProjection, goal_progress, months_to_goal, project_goals};
use crate::metrics::{
    DEFAULT_EMERGENCY_MONTHS, ExpenseSplit, emergency_fund_target, expenses_by_category,
    expenses_by_type, net_surplus, savings_rate, total_debt_balance, total_debt_payments,
    total_expenses, total_goal_contributions, total_income,
};
use crate::model::{ExpenseCategory, GoalType, Scenario};
use crate::payoff::{DebtPayoffEstimate, estimate_debts};
use crate::simulation::{SimulationConfig, simulate};

/// Emergency fund progress measured against three months of expenses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmergencyFundStatus {
    pub target: f64,
    pub current: f64,
    pub progress: f64,
    pub months_to_target: Option<u32>,
    /// Whether the scenario has an emergency-type goal at all
    pub has_goal: bool,
}

impl EmergencyFundStatus {
    #[must_use]
    pub fn for_scenario(scenario: &Scenario, monthly_expenses: f64) -> Self {
        let target = emergency_fund_target(monthly_expenses, DEFAULT_EMERGENCY_MONTHS);
        match scenario.goals.iter().find(|g| g.kind == GoalType::Emergency) {
            Some(goal) => Self {
                target,
                current: goal.current_amount,
                progress: goal_progress(goal.current_amount, target),
                months_to_target: months_to_goal(
                    target,
                    goal.current_amount,
                    goal.monthly_contribution,
                ),
                has_goal: true,
            },
            None => Self {
                target,
                current: 0.0,
                progress: 0.0,
                months_to_target: None,
                has_goal: false,
            },
        }
    }
}

/// Every dashboard figure for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub name: String,
    pub total_income: f64,
    pub total_expenses: f64,
    pub expense_split: ExpenseSplit,
    /// Largest category first
    pub expenses_by_category: Vec<(ExpenseCategory, f64)>,
    pub total_debt_payments: f64,
    pub total_debt_balance: f64,
    pub total_goal_contributions: f64,
    pub net_surplus: f64,
    pub savings_rate: f64,
    pub months_to_debt_free: Option<u32>,
    pub total_interest: f64,
    pub emergency_fund: EmergencyFundStatus,
    pub allocation: BudgetAllocation,
    pub debts: Vec<DebtPayoffEstimate>,
    pub goals: Vec<GoalProjection>,
}

impl ScenarioSummary {
    #[must_use]
    pub fn compute(scenario: &Scenario, config: &SimulationConfig) -> Self {
        let income = total_income(&scenario.income);
        let expenses = total_expenses(&scenario.expenses);
        let debt_payments = total_debt_payments(&scenario.debts);
        let goal_contributions = total_goal_contributions(&scenario.goals);

        let mut by_category: Vec<(ExpenseCategory, f64)> =
            expenses_by_category(&scenario.expenses).into_iter().collect();
        by_category.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        let schedule = simulate(&scenario.debts, config);

        Self {
            name: scenario.name.clone(),
            total_income: income,
            total_expenses: expenses,
            expense_split: expenses_by_type(&scenario.expenses),
            expenses_by_category: by_category,
            total_debt_payments: debt_payments,
            total_debt_balance: total_debt_balance(&scenario.debts),
            total_goal_contributions: goal_contributions,
            net_surplus: net_surplus(income, expenses, debt_payments, goal_contributions),
            savings_rate: savings_rate(income, expenses, debt_payments),
            months_to_debt_free: schedule.months_to_debt_free(),
            total_interest: schedule.total_interest(),
            emergency_fund: EmergencyFundStatus::for_scenario(scenario, expenses),
            allocation: BudgetAllocation::from_scenario(scenario),
            debts: estimate_debts(&scenario.debts),
            goals: project_goals(&scenario.goals),
        }
    }

    #[must_use]
    pub fn is_deficit(&self) -> bool {
        self.net_surplus < 0.0
    }
}

/// Differences of one scenario relative to another (`this - other`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub income_delta: f64,
    pub expenses_delta: f64,
    pub net_surplus_delta: f64,
    pub savings_rate_delta: f64,
    pub debt_balance_delta: f64,
    /// Positive when this scenario clears its debts later. `None` if either never clears.
    pub debt_free_months_delta: Option<i64>,
    /// Expense change relative to the other scenario, in percent
    pub expenses_trend: f64,
}

impl ScenarioComparison {
    #[must_use]
    pub fn between(this: &ScenarioSummary, other: &ScenarioSummary) -> Self {
        let debt_free_months_delta = match (this.months_to_debt_free, other.months_to_debt_free) {
            (Some(a), Some(b)) => Some(i64::from(a) - i64::from(b)),
            _ => None,
        };
        let expenses_trend = if other.total_expenses > 0.0 {
            (this.total_expenses - other.total_expenses) / other.total_expenses * 100.0
        } else {
            0.0
        };

        Self {
            income_delta: this.total_income - other.total_income,
            expenses_delta: this.total_expenses - other.total_expenses,
            net_surplus_delta: this.net_surplus - other.net_surplus,
            savings_rate_delta: this.savings_rate - other.savings_rate,
            debt_balance_delta: this.total_debt_balance - other.total_debt_balance,
            debt_free_months_delta,
            expenses_trend,
        }
    }
}
