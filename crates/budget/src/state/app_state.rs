//! Budget state and the actions that transform it
//!
//! [`BudgetState::apply`] is the only way state changes: it consumes the old
//! state and an [`Action`] and returns the new state. Every record action
//! targets the active scenario.

use budget_core::model::{
    DEBT_PREFIX, DebtEntry, EXPENSE_PREFIX, ExpenseEntry, GOAL_PREFIX, GoalEntry, INCOME_PREFIX,
    IncomeEntry, Scenario, ScenarioKey, generate_id,
};

use crate::data::BudgetData;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetActiveScenario(ScenarioKey),
    AddIncome(IncomeEntry),
    UpdateIncome(IncomeEntry),
    DeleteIncome(String),
    AddExpense(ExpenseEntry),
    UpdateExpense(ExpenseEntry),
    DeleteExpense(String),
    AddDebt(DebtEntry),
    UpdateDebt(DebtEntry),
    DeleteDebt(String),
    /// Debt ids in their new priority order
    ReorderDebts(Vec<String>),
    AddGoal(GoalEntry),
    UpdateGoal(GoalEntry),
    DeleteGoal(String),
    ReorderGoals(Vec<String>),
    ToggleTheme,
    /// Replace scenarios and version. Theme and active scenario are kept.
    Import(BudgetData),
    /// Restore the sample data set
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetState {
    pub data: BudgetData,
    pub active_scenario: ScenarioKey,
}

impl BudgetState {
    pub fn new(data: BudgetData, active_scenario: ScenarioKey) -> Self {
        Self {
            data,
            active_scenario,
        }
    }

    pub fn active(&self) -> &Scenario {
        self.data.scenarios.get(self.active_scenario)
    }

    fn active_mut(&mut self) -> &mut Scenario {
        self.data.scenarios.get_mut(self.active_scenario)
    }

    #[must_use]
    pub fn apply(mut self, action: Action) -> Self {
        tracing::debug!(scenario = %self.active_scenario, action = action.name(), "apply");

        match action {
            Action::SetActiveScenario(key) => self.active_scenario = key,

            Action::AddIncome(entry) => add(&mut self.active_mut().income, entry, INCOME_PREFIX),
            Action::UpdateIncome(entry) => update(&mut self.active_mut().income, entry),
            Action::DeleteIncome(id) => delete(&mut self.active_mut().income, &id),

            Action::AddExpense(entry) => {
                add(&mut self.active_mut().expenses, entry, EXPENSE_PREFIX)
            }
            Action::UpdateExpense(entry) => update(&mut self.active_mut().expenses, entry),
            Action::DeleteExpense(id) => delete(&mut self.active_mut().expenses, &id),

            Action::AddDebt(mut entry) => {
                let debts = &mut self.active_mut().debts;
                entry.order = rank(debts.len());
                add(debts, entry, DEBT_PREFIX);
            }
            Action::UpdateDebt(entry) => update(&mut self.active_mut().debts, entry),
            Action::DeleteDebt(id) => {
                let debts = &mut self.active_mut().debts;
                delete(debts, &id);
                densify(debts);
            }
            Action::ReorderDebts(ids) => reorder(&mut self.active_mut().debts, &ids),

            Action::AddGoal(mut entry) => {
                let goals = &mut self.active_mut().goals;
                entry.order = rank(goals.len());
                add(goals, entry, GOAL_PREFIX);
            }
            Action::UpdateGoal(entry) => update(&mut self.active_mut().goals, entry),
            Action::DeleteGoal(id) => {
                let goals = &mut self.active_mut().goals;
                delete(goals, &id);
                densify(goals);
            }
            Action::ReorderGoals(ids) => reorder(&mut self.active_mut().goals, &ids),

            Action::ToggleTheme => self.data.theme = self.data.theme.toggled(),

            Action::Import(imported) => {
                self.data.scenarios = imported.scenarios;
                self.data.version = imported.version;
            }

            Action::Reset => {
                self.data = BudgetData::default();
                self.active_scenario = ScenarioKey::Current;
            }
        }

        self
    }
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Action::SetActiveScenario(_) => "set_active_scenario",
            Action::AddIncome(_) => "add_income",
            Action::UpdateIncome(_) => "update_income",
            Action::DeleteIncome(_) => "delete_income",
            Action::AddExpense(_) => "add_expense",
            Action::UpdateExpense(_) => "update_expense",
            Action::DeleteExpense(_) => "delete_expense",
            Action::AddDebt(_) => "add_debt",
            Action::UpdateDebt(_) => "update_debt",
            Action::DeleteDebt(_) => "delete_debt",
            Action::ReorderDebts(_) => "reorder_debts",
            Action::AddGoal(_) => "add_goal",
            Action::UpdateGoal(_) => "update_goal",
            Action::DeleteGoal(_) => "delete_goal",
            Action::ReorderGoals(_) => "reorder_goals",
            Action::ToggleTheme => "toggle_theme",
            Action::Import(_) => "import",
            Action::Reset => "reset",
        }
    }
}

// ============================================================================
// Record helpers
// ============================================================================

/// A record addressed by id
trait Record {
    fn id(&self) -> &str;
    fn id_mut(&mut self) -> &mut String;
}

/// A record with a priority rank
trait Ranked: Record {
    fn order(&self) -> u32;
    fn set_order(&mut self, order: u32);
}

macro_rules! impl_record {
    ($($ty:ty),*) => {
        $(impl Record for $ty {
            fn id(&self) -> &str {
                &self.id
            }

            fn id_mut(&mut self) -> &mut String {
                &mut self.id
            }
        })*
    };
}

impl_record!(IncomeEntry, ExpenseEntry, DebtEntry, GoalEntry);

macro_rules! impl_ranked {
    ($($ty:ty),*) => {
        $(impl Ranked for $ty {
            fn order(&self) -> u32 {
                self.order
            }

            fn set_order(&mut self, order: u32) {
                self.order = order;
            }
        })*
    };
}

impl_ranked!(DebtEntry, GoalEntry);

fn rank(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}

/// Append, generating an id when the record has none
fn add<T: Record>(items: &mut Vec<T>, mut item: T, prefix: &str) {
    if item.id().is_empty() {
        *item.id_mut() = generate_id(prefix);
    }
    items.push(item);
}

/// Replace the record with the same id. Unknown ids are ignored.
fn update<T: Record>(items: &mut [T], item: T) {
    match items.iter_mut().find(|existing| existing.id() == item.id()) {
        Some(existing) => *existing = item,
        None => tracing::warn!(id = item.id(), "update for unknown record ignored"),
    }
}

fn delete<T: Record>(items: &mut Vec<T>, id: &str) {
    items.retain(|item| item.id() != id);
}

/// Renumber `order` to `0..N-1`, preserving relative priority
fn densify<T: Ranked>(items: &mut [T]) {
    let mut by_priority: Vec<usize> = (0..items.len()).collect();
    by_priority.sort_by_key(|&i| items[i].order());
    for (rank_index, item_index) in by_priority.into_iter().enumerate() {
        items[item_index].set_order(rank(rank_index));
    }
}

/// Put the listed ids first in the given order, then the rest by their
/// existing priority. The vector is rearranged to match.
fn reorder<T: Ranked>(items: &mut Vec<T>, ids: &[String]) {
    let mut remaining: Vec<T> = std::mem::take(items);
    remaining.sort_by_key(|item| item.order());

    for id in ids {
        if let Some(pos) = remaining.iter().position(|item| item.id() == id) {
            items.push(remaining.remove(pos));
        }
    }
    items.append(&mut remaining);

    for (index, item) in items.iter_mut().enumerate() {
        item.set_order(rank(index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Theme;
    use budget_core::model::{DebtType, ScenarioPair};

    fn sample_state() -> BudgetState {
        BudgetState::default()
    }

    fn debt_ids(state: &BudgetState) -> Vec<(String, u32)> {
        state
            .active()
            .debts
            .iter()
            .map(|d| (d.id.clone(), d.order))
            .collect()
    }

    fn three_debts() -> BudgetState {
        sample_state().apply(Action::AddDebt(DebtEntry {
            id: "debt-3".into(),
            name: "Car".into(),
            kind: DebtType::AutoLoan,
            balance: 9000.0,
            ..Default::default()
        }))
    }

    #[test]
    fn test_add_targets_active_scenario() {
        let state = sample_state()
            .apply(Action::SetActiveScenario(ScenarioKey::Plan))
            .apply(Action::AddIncome(IncomeEntry {
                name: "Side gig".into(),
                amount: 400.0,
                ..Default::default()
            }));

        assert_eq!(state.data.scenarios.plan.income.len(), 2);
        assert_eq!(state.data.scenarios.current.income.len(), 1);
        let added = &state.data.scenarios.plan.income[1];
        assert!(added.id.starts_with("inc-"), "generated id {}", added.id);
    }

    #[test]
    fn test_add_debt_appends_with_next_order() {
        let state = three_debts();
        assert_eq!(
            debt_ids(&state),
            vec![
                ("debt-1".to_string(), 0),
                ("debt-2".to_string(), 1),
                ("debt-3".to_string(), 2)
            ]
        );
    }

    #[test]
    fn test_update_replaces_by_id() {
        let mut goal = sample_state().active().goals[1].clone();
        goal.current_amount = 1200.0;

        let state = sample_state().apply(Action::UpdateGoal(goal.clone()));
        assert_eq!(state.active().goals[1], goal);

        let missing = GoalEntry {
            id: "goal-missing".into(),
            ..Default::default()
        };
        let unchanged = sample_state().apply(Action::UpdateGoal(missing));
        assert_eq!(unchanged, sample_state());
    }

    #[test]
    fn test_delete_redensifies_order() {
        let state = three_debts().apply(Action::DeleteDebt("debt-1".into()));
        assert_eq!(
            debt_ids(&state),
            vec![("debt-2".to_string(), 0), ("debt-3".to_string(), 1)]
        );

        let state = sample_state().apply(Action::DeleteExpense("exp-2".into()));
        assert_eq!(state.active().expenses.len(), 7);
        assert!(state.active().expenses.iter().all(|e| e.id != "exp-2"));
    }

    #[test]
    fn test_reorder_debts() {
        let state = three_debts().apply(Action::ReorderDebts(vec![
            "debt-3".into(),
            "debt-1".into(),
            "debt-2".into(),
        ]));
        assert_eq!(
            debt_ids(&state),
            vec![
                ("debt-3".to_string(), 0),
                ("debt-1".to_string(), 1),
                ("debt-2".to_string(), 2)
            ]
        );
    }

    #[test]
    fn test_reorder_partial_and_unknown_ids() {
        let state = three_debts().apply(Action::ReorderDebts(vec![
            "debt-2".into(),
            "nope".into(),
        ]));
        assert_eq!(
            debt_ids(&state),
            vec![
                ("debt-2".to_string(), 0),
                ("debt-1".to_string(), 1),
                ("debt-3".to_string(), 2)
            ]
        );
    }

    #[test]
    fn test_reorder_goals_changes_priority() {
        let state = sample_state().apply(Action::ReorderGoals(vec!["goal-2".into()]));
        let orders: Vec<(&str, u32)> = state
            .active()
            .goals
            .iter()
            .map(|g| (g.id.as_str(), g.order))
            .collect();
        assert_eq!(orders, vec![("goal-2", 0), ("goal-1", 1)]);
    }

    #[test]
    fn test_toggle_theme() {
        let state = sample_state().apply(Action::ToggleTheme);
        assert_eq!(state.data.theme, Theme::Light);
        assert_eq!(state.apply(Action::ToggleTheme).data.theme, Theme::Dark);
    }

    #[test]
    fn test_import_keeps_theme_and_active_scenario() {
        let before = sample_state()
            .apply(Action::ToggleTheme)
            .apply(Action::SetActiveScenario(ScenarioKey::Plan));

        let imported = BudgetData {
            scenarios: ScenarioPair::default(),
            version: 2,
            theme: Theme::Dark,
        };
        let after = before.apply(Action::Import(imported));

        assert_eq!(after.data.scenarios, ScenarioPair::default());
        assert_eq!(after.data.version, 2);
        assert_eq!(after.data.theme, Theme::Light);
        assert_eq!(after.active_scenario, ScenarioKey::Plan);
    }

    #[test]
    fn test_reset_restores_sample() {
        let state = sample_state()
            .apply(Action::SetActiveScenario(ScenarioKey::Plan))
            .apply(Action::DeleteDebt("debt-1".into()))
            .apply(Action::Reset);

        assert_eq!(state, BudgetState::default());
    }
}
