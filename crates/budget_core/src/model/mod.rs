mod entries;
mod ids;
mod kinds;
mod sample;
mod scenario;

pub use entries::{DebtEntry, ExpenseEntry, GoalEntry, IncomeEntry};
pub use ids::{
    DEBT_PREFIX, EXPENSE_PREFIX, GOAL_PREFIX, INCOME_PREFIX, generate_id, generate_id_with,
};
pub use kinds::{DebtType, ExpenseCategory, GoalType, IncomeType};
pub use scenario::{Scenario, ScenarioKey, ScenarioPair};
