//! Personal budgeting projection library
//!
//! This crate turns raw scenario records (income, expenses, debts, goals) into
//! forward-looking projections:
//! - Aggregate metrics (totals, net surplus, savings rate, emergency fund)
//! - Month-by-month multi-debt amortization with independent or cascade payoff
//! - Closed-form single-debt payoff estimates
//! - Goal progress and time-to-goal projections
//! - 50/30/20 budget rule allocation
//! - Display formatting for currency, percentages and durations
//!
//! Every calculator is a pure function over plain data. Nothing here performs I/O.
//!
//! ```ignore
//! use budget_core::model::ScenarioPair;
//! use budget_core::simulation::{PayoffPolicy, SimulationConfig, simulate};
//!
//! let pair = ScenarioPair::sample();
//! let config = SimulationConfig::default().with_policy(PayoffPolicy::Cascade);
//! let schedule = simulate(&pair.plan.debts, &config);
//! println!("debt free in {:?} months", schedule.months_to_debt_free());
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod budget_rule;
pub mod error;
pub mod goals;
pub mod metrics;
pub mod payoff;
pub mod simulation;

// ============================================================================
// Type definition and presentation modules
// ============================================================================

pub mod chart;
pub mod format;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{PolicyComparison, ScenarioComparison, ScenarioSummary, compare_policies};
pub use error::ParseError;
pub use model::{
    DebtEntry, ExpenseEntry, GoalEntry, IncomeEntry, Scenario, ScenarioKey, ScenarioPair,
};
pub use simulation::{PayoffPolicy, PayoffSchedule, SimulationConfig, simulate};
