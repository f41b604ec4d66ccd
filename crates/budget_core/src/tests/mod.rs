//! Cross-module tests for the projection engine
//!
//! Tests are organized by topic:
//! - `simulation` - Multi-debt schedules under both payoff policies
//! - `consistency` - Closed-form payoff against the simulator
//! - `properties` - Purity, bounds and sum invariants across calculators
//! - `summary` - Dashboard summaries over the sample scenarios

mod consistency;
mod summary;
