//! Sample data shown to new users and restored on reset

use super::entries::{DebtEntry, ExpenseEntry, GoalEntry, IncomeEntry};
use super::kinds::{DebtType, ExpenseCategory, GoalType, IncomeType};
use super::scenario::{Scenario, ScenarioPair};

fn income(id: &str, name: &str, kind: IncomeType, amount: f64) -> IncomeEntry {
    IncomeEntry {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        amount,
    }
}

fn expense(
    id: &str,
    name: &str,
    category: ExpenseCategory,
    amount: f64,
    is_fixed: bool,
) -> ExpenseEntry {
    ExpenseEntry {
        id: id.to_string(),
        name: name.to_string(),
        category,
        amount,
        is_fixed,
    }
}

/// A debt at its type's typical rate with nothing paid beyond the minimum
fn debt(id: &str, name: &str, kind: DebtType, balance: f64, minimum: f64) -> DebtEntry {
    DebtEntry {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        balance,
        interest_rate: kind.typical_rate(),
        minimum_payment: minimum,
        extra_payment: 0.0,
        order: 0,
    }
}

fn goal(
    id: &str,
    name: &str,
    kind: GoalType,
    target: f64,
    current: f64,
    contribution: f64,
) -> GoalEntry {
    GoalEntry {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        target_amount: target,
        current_amount: current,
        monthly_contribution: contribution,
        order: 0,
    }
}

/// Priority follows list position
fn prioritized_debts(debts: impl IntoIterator<Item = DebtEntry>) -> Vec<DebtEntry> {
    (0..)
        .zip(debts)
        .map(|(order, debt)| DebtEntry { order, ..debt })
        .collect()
}

fn prioritized_goals(goals: impl IntoIterator<Item = GoalEntry>) -> Vec<GoalEntry> {
    (0..)
        .zip(goals)
        .map(|(order, goal)| GoalEntry { order, ..goal })
        .collect()
}

impl ScenarioPair {
    /// A salaried household with a credit card and a student loan.
    /// The plan trims discretionary spending and puts an extra $100 on the card.
    #[must_use]
    pub fn sample() -> Self {
        use ExpenseCategory as C;

        let card = debt("debt-1", "Credit Card", DebtType::CreditCard, 5000.0, 150.0);
        let student_loan = debt("debt-2", "Student Loan", DebtType::StudentLoan, 25000.0, 280.0);

        let current = Scenario {
            name: "Current Reality".to_string(),
            income: vec![income("inc-1", "Primary Salary", IncomeType::Salary, 5000.0)],
            expenses: vec![
                expense("exp-1", "Rent/Mortgage", C::Housing, 1500.0, true),
                expense("exp-2", "Groceries", C::Food, 400.0, false),
                expense("exp-3", "Utilities", C::Utilities, 150.0, true),
                expense("exp-4", "Car Payment", C::Transport, 350.0, true),
                expense("exp-5", "Gas", C::Transport, 120.0, false),
                expense("exp-6", "Insurance", C::Insurance, 200.0, true),
                expense("exp-7", "Entertainment", C::Entertainment, 150.0, false),
                expense("exp-8", "Subscriptions", C::Subscriptions, 50.0, true),
            ],
            debts: prioritized_debts([card.clone(), student_loan.clone()]),
            goals: prioritized_goals([
                goal("goal-1", "Emergency Fund", GoalType::Emergency, 15000.0, 3000.0, 200.0),
                goal("goal-2", "Vacation Fund", GoalType::Vacation, 5000.0, 500.0, 100.0),
            ]),
        };

        let plan = Scenario {
            name: "Plan Budget".to_string(),
            income: vec![income("inc-1", "Primary Salary", IncomeType::Salary, 5000.0)],
            expenses: vec![
                expense("exp-1", "Rent/Mortgage", C::Housing, 1500.0, true),
                expense("exp-2", "Groceries", C::Food, 350.0, false),
                expense("exp-3", "Utilities", C::Utilities, 150.0, true),
                expense("exp-4", "Car Payment", C::Transport, 350.0, true),
                expense("exp-5", "Gas", C::Transport, 100.0, false),
                expense("exp-6", "Insurance", C::Insurance, 200.0, true),
                expense("exp-7", "Entertainment", C::Entertainment, 100.0, false),
                expense("exp-8", "Subscriptions", C::Subscriptions, 30.0, true),
            ],
            debts: prioritized_debts([
                DebtEntry {
                    extra_payment: 100.0,
                    ..card
                },
                student_loan,
            ]),
            goals: prioritized_goals([
                goal("goal-1", "Emergency Fund", GoalType::Emergency, 15000.0, 3000.0, 400.0),
                goal("goal-2", "Vacation Fund", GoalType::Vacation, 5000.0, 500.0, 150.0),
            ]),
        };

        Self { current, plan }
    }
}
