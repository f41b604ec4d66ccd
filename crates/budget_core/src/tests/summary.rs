//! Dashboard summaries over the sample current and plan scenarios

use crate::analysis::{ScenarioComparison, ScenarioSummary, compare_policies};
use crate::budget_rule::AllocationStatus;
use crate::model::{ExpenseCategory, GoalType, Scenario, ScenarioPair};
use crate::simulation::{PayoffPolicy, SimulationConfig};

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 0.01,
        "{what}: expected {expected}, got {actual}"
    );
}

#[test]
fn test_plan_summary_totals() {
    let pair = ScenarioPair::sample();
    let summary = ScenarioSummary::compute(&pair.plan, &SimulationConfig::default());

    assert_eq!(summary.name, "Plan Budget");
    assert_close(summary.total_income, 5000.0, "income");
    assert_close(summary.total_expenses, 2780.0, "expenses");
    assert_close(summary.expense_split.fixed, 2230.0, "fixed");
    assert_close(summary.expense_split.variable, 550.0, "variable");
    assert_close(summary.total_debt_payments, 530.0, "debt payments");
    assert_close(summary.total_debt_balance, 30_000.0, "debt balance");
    assert_close(summary.total_goal_contributions, 550.0, "goal contributions");
    assert_close(summary.net_surplus, 1140.0, "net surplus");
    assert_close(summary.savings_rate, 33.8, "savings rate");
    assert_eq!(summary.months_to_debt_free, Some(118));
    assert!(!summary.is_deficit());
}

#[test]
fn test_categories_largest_first() {
    let pair = ScenarioPair::sample();
    let summary = ScenarioSummary::compute(&pair.plan, &SimulationConfig::default());

    let categories: Vec<ExpenseCategory> =
        summary.expenses_by_category.iter().map(|(c, _)| *c).collect();
    assert_eq!(
        categories,
        vec![
            ExpenseCategory::Housing,
            ExpenseCategory::Transport,
            ExpenseCategory::Food,
            ExpenseCategory::Insurance,
            ExpenseCategory::Utilities,
            ExpenseCategory::Entertainment,
            ExpenseCategory::Subscriptions,
        ]
    );
    assert_close(summary.expenses_by_category[1].1, 450.0, "transport");
}

#[test]
fn test_emergency_fund_from_goal() {
    let pair = ScenarioPair::sample();

    let plan = ScenarioSummary::compute(&pair.plan, &SimulationConfig::default());
    assert!(plan.emergency_fund.has_goal);
    assert_close(plan.emergency_fund.target, 8340.0, "plan target");
    assert_close(plan.emergency_fund.progress, 3000.0 / 8340.0 * 100.0, "plan progress");
    assert_eq!(plan.emergency_fund.months_to_target, Some(14));

    let current = ScenarioSummary::compute(&pair.current, &SimulationConfig::default());
    assert_close(current.emergency_fund.target, 8760.0, "current target");
    assert_eq!(current.emergency_fund.months_to_target, Some(29));
}

#[test]
fn test_emergency_fund_without_goal() {
    let mut scenario = ScenarioPair::sample().plan;
    scenario.goals.retain(|g| g.kind != GoalType::Emergency);

    let summary = ScenarioSummary::compute(&scenario, &SimulationConfig::default());
    assert!(!summary.emergency_fund.has_goal);
    assert_eq!(summary.emergency_fund.progress, 0.0);
    assert_eq!(summary.emergency_fund.months_to_target, None);
    assert_eq!(summary.goals.len(), 1);
}

#[test]
fn test_plan_allocation() {
    let pair = ScenarioPair::sample();
    let summary = ScenarioSummary::compute(&pair.plan, &SimulationConfig::default());

    assert_close(summary.allocation.needs.percent, 53.2, "needs");
    assert_eq!(summary.allocation.needs.status, AllocationStatus::Warning);
    assert_close(summary.allocation.wants.percent, 11.0, "wants");
    assert_eq!(summary.allocation.wants.status, AllocationStatus::Good);
}

#[test]
fn test_empty_scenario_summary() {
    let summary = ScenarioSummary::compute(&Scenario::empty("Blank"), &SimulationConfig::default());

    assert_eq!(summary.total_income, 0.0);
    assert_eq!(summary.savings_rate, 0.0);
    assert_eq!(summary.months_to_debt_free, Some(0));
    assert!(summary.expenses_by_category.is_empty());
    assert!(summary.debts.is_empty());
    assert_eq!(summary.allocation.unallocated_percent, 0.0);
}

#[test]
fn test_deficit_scenario() {
    let mut scenario = ScenarioPair::sample().current;
    for income in &mut scenario.income {
        income.amount = 2000.0;
    }

    let summary = ScenarioSummary::compute(&scenario, &SimulationConfig::default());
    assert!(summary.is_deficit());
    assert_eq!(summary.savings_rate, 0.0);
}

#[test]
fn test_plan_versus_current() {
    let pair = ScenarioPair::sample();
    let config = SimulationConfig::default().with_policy(PayoffPolicy::Cascade);
    let current = ScenarioSummary::compute(&pair.current, &config);
    let plan = ScenarioSummary::compute(&pair.plan, &config);

    let cmp = ScenarioComparison::between(&plan, &current);
    assert_close(cmp.income_delta, 0.0, "income");
    assert_close(cmp.expenses_delta, -140.0, "expenses");
    assert_close(cmp.net_surplus_delta, -210.0, "net surplus");
    assert_close(cmp.savings_rate_delta, 0.8, "savings rate");
    assert_close(cmp.expenses_trend, -140.0 / 2920.0 * 100.0, "trend");
    assert_eq!(cmp.debt_free_months_delta, Some(-23));
}

#[test]
fn test_compare_policies_on_plan() {
    let pair = ScenarioPair::sample();
    let comparison = compare_policies(&pair.plan.debts, 360);

    assert_eq!(comparison.independent.policy, PayoffPolicy::Independent);
    assert_eq!(comparison.cascade.policy, PayoffPolicy::Cascade);
    assert_eq!(comparison.independent.months_to_debt_free, Some(118));
    assert_eq!(comparison.cascade.months_to_debt_free, Some(69));
    assert_eq!(comparison.months_saved, Some(49));
    assert_close(comparison.interest_saved, 8932.98 - 6229.19, "interest saved");
}

#[test]
fn test_compare_policies_when_never_paid() {
    let mut debts = ScenarioPair::sample().current.debts;
    for debt in &mut debts {
        debt.minimum_payment = 1.0;
    }

    let comparison = compare_policies(&debts, 120);
    assert_eq!(comparison.independent.months_to_debt_free, None);
    assert_eq!(comparison.months_saved, None);
}
