use serde::{Deserialize, Serialize};

use budget_core::model::ScenarioPair;

/// Current document format version
pub const DATA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Everything persisted in `budget.yaml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetData {
    pub scenarios: ScenarioPair,
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub theme: Theme,
}

fn default_version() -> u32 {
    DATA_VERSION
}

impl Default for BudgetData {
    /// The sample data set, used on first launch and after a reset
    fn default() -> Self {
        Self {
            scenarios: ScenarioPair::sample(),
            version: DATA_VERSION,
            theme: Theme::default(),
        }
    }
}

impl BudgetData {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Save to YAML string
    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }
}
