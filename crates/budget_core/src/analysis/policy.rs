use serde::{Deserialize, Serialize};

use crate::model::DebtEntry;
use crate::simulation::{PayoffPolicy, PayoffSchedule, SimulationConfig, simulate};

/// Headline numbers from one policy's schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyOutcome {
    pub policy: PayoffPolicy,
    pub months_to_debt_free: Option<u32>,
    pub total_interest: f64,
}

impl PolicyOutcome {
    #[must_use]
    pub fn from_schedule(schedule: &PayoffSchedule) -> Self {
        Self {
            policy: schedule.policy,
            months_to_debt_free: schedule.months_to_debt_free(),
            total_interest: schedule.total_interest(),
        }
    }
}

/// Independent and cascade payoff of the same debts side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyComparison {
    pub independent: PolicyOutcome,
    pub cascade: PolicyOutcome,
    /// Months sooner the debts clear under cascade. `None` when either policy never clears.
    pub months_saved: Option<u32>,
    /// Interest avoided by switching to cascade
    pub interest_saved: f64,
}

/// Run both policies over the same horizon and compare them.
///
/// The two simulations share no state, so with the `parallel` feature they run
/// on the rayon pool concurrently.
#[must_use]
pub fn compare_policies(debts: &[DebtEntry], horizon_months: u32) -> PolicyComparison {
    let run = |policy: PayoffPolicy| {
        let schedule = simulate(debts, &SimulationConfig::new(horizon_months, policy));
        PolicyOutcome::from_schedule(&schedule)
    };

    #[cfg(feature = "parallel")]
    let (independent, cascade) = rayon::join(
        || run(PayoffPolicy::Independent),
        || run(PayoffPolicy::Cascade),
    );
    #[cfg(not(feature = "parallel"))]
    let (independent, cascade) = (run(PayoffPolicy::Independent), run(PayoffPolicy::Cascade));

    let months_saved = match (independent.months_to_debt_free, cascade.months_to_debt_free) {
        (Some(ind), Some(cas)) => Some(ind.saturating_sub(cas)),
        _ => None,
    };

    tracing::debug!(
        independent = ?independent.months_to_debt_free,
        cascade = ?cascade.months_to_debt_free,
        "compared payoff policies"
    );

    PolicyComparison {
        independent,
        cascade,
        months_saved,
        interest_saved: independent.total_interest - cascade.total_interest,
    }
}
