//! Scenarios and the current/plan pair

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entries::{DebtEntry, ExpenseEntry, GoalEntry, IncomeEntry};
use crate::error::ParseError;

/// A complete set of income, expense, debt and goal records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub income: Vec<IncomeEntry>,
    #[serde(default)]
    pub expenses: Vec<ExpenseEntry>,
    #[serde(default)]
    pub debts: Vec<DebtEntry>,
    #[serde(default)]
    pub goals: Vec<GoalEntry>,
}

impl Scenario {
    /// An empty scenario with the given display name
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Which of the two scenarios an operation refers to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKey {
    #[default]
    Current,
    Plan,
}

impl ScenarioKey {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            ScenarioKey::Current => ScenarioKey::Plan,
            ScenarioKey::Plan => ScenarioKey::Current,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioKey::Current => "current",
            ScenarioKey::Plan => "plan",
        }
    }
}

impl fmt::Display for ScenarioKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "current" => Ok(ScenarioKey::Current),
            "plan" => Ok(ScenarioKey::Plan),
            _ => Err(ParseError::UnknownScenario(s.to_string())),
        }
    }
}

/// The "Current Reality" and "Plan Budget" scenarios side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPair {
    pub current: Scenario,
    pub plan: Scenario,
}

impl Default for ScenarioPair {
    fn default() -> Self {
        Self {
            current: Scenario::empty("Current Reality"),
            plan: Scenario::empty("Plan Budget"),
        }
    }
}

impl ScenarioPair {
    #[must_use]
    pub fn get(&self, key: ScenarioKey) -> &Scenario {
        match key {
            ScenarioKey::Current => &self.current,
            ScenarioKey::Plan => &self.plan,
        }
    }

    pub fn get_mut(&mut self, key: ScenarioKey) -> &mut Scenario {
        match key {
            ScenarioKey::Current => &mut self.current,
            ScenarioKey::Plan => &mut self.plan,
        }
    }
}
