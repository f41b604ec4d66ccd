//! Scenario entry records
//!
//! Entries are plain values. Field names serialize in camelCase to match the
//! exported scenario document, and missing numeric fields default to zero.

use serde::{Deserialize, Serialize};

use super::kinds::{DebtType, ExpenseCategory, GoalType, IncomeType};

/// One monthly income source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeEntry {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: IncomeType,
    #[serde(default)]
    pub amount: f64,
}

/// One monthly expense
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseEntry {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: ExpenseCategory,
    #[serde(default)]
    pub amount: f64,
    /// Recurring (needs-like) rather than discretionary (wants-like)
    #[serde(default)]
    pub is_fixed: bool,
}

/// An outstanding debt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtEntry {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: DebtType,
    #[serde(default)]
    pub balance: f64,
    /// Annual percentage rate, e.g. 19.99
    #[serde(default)]
    pub interest_rate: f64,
    #[serde(default)]
    pub minimum_payment: f64,
    #[serde(default)]
    pub extra_payment: f64,
    /// Payoff priority (0 is paid first under the cascade policy)
    #[serde(default)]
    pub order: u32,
}

impl DebtEntry {
    /// Everything committed to this debt each month.
    #[must_use]
    pub fn total_payment(&self) -> f64 {
        self.minimum_payment + self.extra_payment
    }

    #[must_use]
    pub fn monthly_rate(&self) -> f64 {
        self.interest_rate / 100.0 / 12.0
    }
}

/// A savings goal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalEntry {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: GoalType,
    #[serde(default)]
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    #[serde(default)]
    pub monthly_contribution: f64,
    #[serde(default)]
    pub order: u32,
}
