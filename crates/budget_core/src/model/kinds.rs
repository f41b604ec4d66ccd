//! Classification enums for scenario entries
//!
//! Each enum serializes as a snake_case string. Values the engine does not
//! recognise deserialize to `Other`, so older or hand-edited documents still load.

use serde::{Deserialize, Serialize};

/// Source of a monthly income entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeType {
    Salary,
    Freelance,
    Investments,
    Rental,
    Business,
    #[default]
    #[serde(other)]
    Other,
}

impl IncomeType {
    pub const ALL: [IncomeType; 6] = [
        IncomeType::Salary,
        IncomeType::Freelance,
        IncomeType::Investments,
        IncomeType::Rental,
        IncomeType::Business,
        IncomeType::Other,
    ];

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            IncomeType::Salary => "Salary",
            IncomeType::Freelance => "Freelance",
            IncomeType::Investments => "Investments",
            IncomeType::Rental => "Rental Income",
            IncomeType::Business => "Business",
            IncomeType::Other => "Other",
        }
    }
}

/// Spending category of an expense entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Housing,
    Utilities,
    Food,
    Transport,
    Insurance,
    Healthcare,
    Entertainment,
    Shopping,
    Personal,
    Education,
    Subscriptions,
    #[default]
    #[serde(other)]
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 12] = [
        ExpenseCategory::Housing,
        ExpenseCategory::Utilities,
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Insurance,
        ExpenseCategory::Healthcare,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Shopping,
        ExpenseCategory::Personal,
        ExpenseCategory::Education,
        ExpenseCategory::Subscriptions,
        ExpenseCategory::Other,
    ];

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            ExpenseCategory::Housing => "Housing",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Food => "Food & Groceries",
            ExpenseCategory::Transport => "Transportation",
            ExpenseCategory::Insurance => "Insurance",
            ExpenseCategory::Healthcare => "Healthcare",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Personal => "Personal Care",
            ExpenseCategory::Education => "Education",
            ExpenseCategory::Subscriptions => "Subscriptions",
            ExpenseCategory::Other => "Other",
        }
    }
}

/// Kind of debt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtType {
    CreditCard,
    PersonalLoan,
    StudentLoan,
    AutoLoan,
    Mortgage,
    Medical,
    #[default]
    #[serde(other)]
    Other,
}

impl DebtType {
    pub const ALL: [DebtType; 7] = [
        DebtType::CreditCard,
        DebtType::PersonalLoan,
        DebtType::StudentLoan,
        DebtType::AutoLoan,
        DebtType::Mortgage,
        DebtType::Medical,
        DebtType::Other,
    ];

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            DebtType::CreditCard => "Credit Card",
            DebtType::PersonalLoan => "Personal Loan",
            DebtType::StudentLoan => "Student Loan",
            DebtType::AutoLoan => "Auto Loan",
            DebtType::Mortgage => "Mortgage",
            DebtType::Medical => "Medical Debt",
            DebtType::Other => "Other",
        }
    }

    /// Typical annual rate (percent) used to prefill a new debt.
    /// Never consulted by the calculators.
    #[must_use]
    pub fn typical_rate(self) -> f64 {
        match self {
            DebtType::CreditCard => 19.99,
            DebtType::PersonalLoan => 10.5,
            DebtType::StudentLoan => 5.8,
            DebtType::AutoLoan => 6.5,
            DebtType::Mortgage => 7.0,
            DebtType::Medical => 0.0,
            DebtType::Other => 8.0,
        }
    }
}

/// Kind of savings goal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    Emergency,
    DebtFree,
    Vacation,
    House,
    Car,
    Retirement,
    Education,
    Investment,
    #[default]
    #[serde(other)]
    Other,
}

impl GoalType {
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            GoalType::Emergency => "Emergency Fund",
            GoalType::DebtFree => "Debt Free",
            GoalType::Vacation => "Vacation",
            GoalType::House => "House Down Payment",
            GoalType::Car => "New Car",
            GoalType::Retirement => "Retirement",
            GoalType::Education => "Education",
            GoalType::Investment => "Investment",
            GoalType::Other => "Other",
        }
    }
}
