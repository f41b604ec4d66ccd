//! Scenario-level analysis built on the calculators.
//!
//! - [`ScenarioSummary`] gathers every dashboard figure for one scenario.
//! - [`ScenarioComparison`] contrasts the current and plan scenarios.
//! - [`compare_policies`] runs independent and cascade payoff side by side.
//!
//! ```ignore
//! use budget_core::analysis::{ScenarioSummary, compare_policies};
//! use budget_core::model::ScenarioPair;
//! use budget_core::simulation::SimulationConfig;
//!
//! let pair = ScenarioPair::sample();
//! let summary = ScenarioSummary::compute(&pair.plan, &SimulationConfig::default());
//! let comparison = compare_policies(&pair.plan.debts, 360);
//! ```

mod policy;
mod summary;

pub use policy::*;
pub use summary::*;
