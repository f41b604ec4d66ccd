//! Month-by-month multi-debt amortization
//!
//! [`simulate`] is a pure function of `(debts, config)`. It accrues monthly
//! interest on every open debt, applies that month's payment (capped at the
//! balance) and records a [`ScheduleEntry`] per month until every balance is
//! zero or the horizon runs out.
//!
//! Two allocation policies are supported:
//! - [`PayoffPolicy::Independent`]: each debt receives exactly its own minimum
//!   plus extra payment.
//! - [`PayoffPolicy::Cascade`]: once a debt is closed, its whole committed
//!   payment rolls forward to the highest-priority (lowest `order`) debt still
//!   open, starting the following month.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::model::DebtEntry;

/// Horizon used when the caller does not pick one (30 years)
pub const DEFAULT_HORIZON_MONTHS: u32 = 360;
/// Hard upper bound on the simulated horizon
pub const MAX_HORIZON_MONTHS: u32 = 1200;
/// Balances at or below this are treated as paid off
pub const PAID_OFF_THRESHOLD: f64 = 0.01;

/// How payments are allocated across debts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoffPolicy {
    #[default]
    Independent,
    Cascade,
}

impl PayoffPolicy {
    pub const ALL: [PayoffPolicy; 2] = [PayoffPolicy::Independent, PayoffPolicy::Cascade];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PayoffPolicy::Independent => "independent",
            PayoffPolicy::Cascade => "cascade",
        }
    }
}

impl fmt::Display for PayoffPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoffPolicy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "independent" => Ok(PayoffPolicy::Independent),
            "cascade" | "snowball" | "avalanche" => Ok(PayoffPolicy::Cascade),
            _ => Err(ParseError::UnknownPolicy(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub horizon_months: u32,
    pub policy: PayoffPolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            horizon_months: DEFAULT_HORIZON_MONTHS,
            policy: PayoffPolicy::Independent,
        }
    }
}

impl SimulationConfig {
    #[must_use]
    pub fn new(horizon_months: u32, policy: PayoffPolicy) -> Self {
        Self {
            horizon_months,
            policy,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: PayoffPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The horizon actually simulated
    #[must_use]
    pub fn effective_horizon(&self) -> u32 {
        self.horizon_months.min(MAX_HORIZON_MONTHS)
    }
}

/// Balance of one debt at the end of a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtBalance {
    pub id: String,
    pub balance: f64,
}

/// Snapshot of all debts at the end of one simulated month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 0 is the opening position before any payment
    pub month: u32,
    pub total_balance: f64,
    /// Interest accrued across all debts this month
    pub interest: f64,
    /// Payments applied across all debts this month
    pub principal: f64,
    /// Per-debt balances in priority order
    pub balances: Vec<DebtBalance>,
}

impl ScheduleEntry {
    #[must_use]
    pub fn balance_of(&self, id: &str) -> Option<f64> {
        self.balances.iter().find(|b| b.id == id).map(|b| b.balance)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffSchedule {
    pub policy: PayoffPolicy,
    pub horizon_months: u32,
    pub entries: Vec<ScheduleEntry>,
}

impl PayoffSchedule {
    /// Month index at which every debt is paid, or `None` if the horizon ran out first.
    #[must_use]
    pub fn months_to_debt_free(&self) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.total_balance <= 0.0)
            .map(|e| e.month)
    }

    /// Interest accrued over the whole schedule
    #[must_use]
    pub fn total_interest(&self) -> f64 {
        round_cents(self.entries.iter().map(|e| e.interest).sum())
    }

    #[must_use]
    pub fn total_paid(&self) -> f64 {
        round_cents(self.entries.iter().map(|e| e.principal).sum())
    }

    /// Month in which the debt with `id` first reaches zero
    #[must_use]
    pub fn payoff_month(&self, id: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.balance_of(id).is_some_and(|b| b <= 0.0))
            .map(|e| e.month)
    }

    #[must_use]
    pub fn last(&self) -> Option<&ScheduleEntry> {
        self.entries.last()
    }
}

/// Round a currency amount to whole cents
#[inline]
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Working state for one debt during a simulation run
struct OpenDebt<'a> {
    debt: &'a DebtEntry,
    balance: f64,
}

impl OpenDebt<'_> {
    fn is_open(&self) -> bool {
        self.balance > 0.0
    }
}

/// Simulate every debt month by month under `config.policy`.
///
/// Debts are processed in ascending `order`; ties keep input order. Debts that
/// start at zero are left out of the schedule entirely.
#[must_use]
pub fn simulate(debts: &[DebtEntry], config: &SimulationConfig) -> PayoffSchedule {
    let horizon = config.effective_horizon();

    let mut ordered: Vec<&DebtEntry> = debts.iter().filter(|d| d.balance > 0.0).collect();
    ordered.sort_by_key(|d| d.order);

    let mut open: Vec<OpenDebt> = ordered
        .into_iter()
        .map(|debt| OpenDebt {
            debt,
            balance: round_cents(debt.balance),
        })
        .collect();

    let mut entries = Vec::with_capacity(horizon as usize + 1);
    entries.push(snapshot(0, &open, 0.0, 0.0));

    // Committed payments of debts closed in earlier months (cascade only)
    let mut rollover = 0.0;

    for month in 1..=horizon {
        if entries.last().is_some_and(|e| e.total_balance <= 0.0) {
            break;
        }

        let target = open.iter().position(OpenDebt::is_open);
        let mut month_interest = 0.0;
        let mut month_principal = 0.0;
        let mut freed = 0.0;

        for (idx, state) in open.iter_mut().enumerate() {
            if !state.is_open() {
                continue;
            }

            let interest = round_cents(state.balance * state.debt.monthly_rate());
            state.balance = round_cents(state.balance + interest);
            month_interest += interest;

            let mut payment = state.debt.total_payment();
            if config.policy == PayoffPolicy::Cascade && Some(idx) == target {
                payment += rollover;
            }

            let applied = payment.min(state.balance).max(0.0);
            state.balance = round_cents(state.balance - applied);
            month_principal += applied;

            if state.balance <= PAID_OFF_THRESHOLD {
                state.balance = 0.0;
                freed += state.debt.total_payment();
                tracing::trace!(debt = %state.debt.id, month, "debt paid off");
            }
        }

        rollover += freed;
        entries.push(snapshot(month, &open, month_interest, month_principal));
    }

    if entries.last().is_some_and(|e| e.total_balance > 0.0) {
        tracing::debug!(
            policy = %config.policy,
            horizon,
            "debts not paid off within horizon"
        );
    }

    PayoffSchedule {
        policy: config.policy,
        horizon_months: horizon,
        entries,
    }
}

fn snapshot(month: u32, open: &[OpenDebt], interest: f64, principal: f64) -> ScheduleEntry {
    let balances: Vec<DebtBalance> = open
        .iter()
        .map(|s| DebtBalance {
            id: s.debt.id.clone(),
            balance: s.balance,
        })
        .collect();

    ScheduleEntry {
        month,
        total_balance: round_cents(balances.iter().map(|b| b.balance).sum()),
        interest: round_cents(interest),
        principal: round_cents(principal),
        balances,
    }
}
