use serde::{Deserialize, Serialize};

use budget_core::model::ScenarioKey;
use budget_core::simulation::{DEFAULT_HORIZON_MONTHS, PayoffPolicy, SimulationConfig};

/// Preferences stored in config.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Scenario the CLI reads and edits when none is given
    #[serde(default)]
    pub active_scenario: ScenarioKey,
    #[serde(default)]
    pub policy: PayoffPolicy,
    #[serde(default = "default_horizon")]
    pub horizon_months: u32,
    #[serde(default)]
    pub show_cents: bool,
}

fn default_horizon() -> u32 {
    DEFAULT_HORIZON_MONTHS
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            active_scenario: ScenarioKey::default(),
            policy: PayoffPolicy::default(),
            horizon_months: DEFAULT_HORIZON_MONTHS,
            show_cents: false,
        }
    }
}

impl DataConfig {
    #[must_use]
    pub fn simulation(&self) -> SimulationConfig {
        SimulationConfig::new(self.horizon_months, self.policy)
    }
}
