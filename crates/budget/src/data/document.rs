//! JSON import/export of the scenario pair
//!
//! The exchange document looks like:
//! ```json
//! {
//!   "scenarios": { "current": { ... }, "plan": { ... } },
//!   "version": 1,
//!   "exportedAt": "2026-01-31T18:04:11Z"
//! }
//! ```

use std::fs;
use std::path::Path;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use budget_core::model::{ScenarioKey, ScenarioPair};

use super::app_data::{BudgetData, DATA_VERSION, Theme};
use crate::state::{BudgetFile, ImportError, SaveError};
use crate::util::atomic_write;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDocument {
    pub scenarios: ScenarioPair,
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<Timestamp>,
}

fn default_version() -> u32 {
    DATA_VERSION
}

impl ScenarioDocument {
    /// Snapshot `data` for export, stamped with `now`
    pub fn export(data: &BudgetData, now: Timestamp) -> Self {
        Self {
            scenarios: data.scenarios.clone(),
            version: data.version,
            exported_at: Some(now),
        }
    }

    pub fn to_json(&self) -> Result<String, SaveError> {
        serde_json::to_string_pretty(self).map_err(|e| SaveError::Encode {
            file: BudgetFile::Export,
            reason: e.to_string(),
        })
    }

    /// Parse an exchange document.
    ///
    /// Both `scenarios.current` and `scenarios.plan` must be present and non-null.
    /// A missing or null `version` is read as 1.
    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| ImportError::InvalidFormat(e.to_string()))?;

        let scenarios = value
            .get("scenarios")
            .filter(|s| s.is_object())
            .ok_or_else(|| ImportError::InvalidFormat("missing scenarios".to_string()))?;
        for key in [ScenarioKey::Current, ScenarioKey::Plan] {
            if scenarios.get(key.as_str()).is_none_or(serde_json::Value::is_null) {
                return Err(ImportError::MissingScenario(key));
            }
        }

        let version = value
            .get("version")
            .and_then(serde_json::Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
            .filter(|v| *v > 0)
            .unwrap_or(DATA_VERSION);
        let pair: ScenarioPair = serde_json::from_value(scenarios.clone())
            .map_err(|e| ImportError::InvalidFormat(e.to_string()))?;
        let exported_at = value
            .get("exportedAt")
            .and_then(serde_json::Value::as_str)
            .and_then(|s| s.parse::<Timestamp>().ok());

        Ok(Self {
            scenarios: pair,
            version,
            exported_at,
        })
    }

    /// Read and parse a document from disk
    pub fn read(path: &Path) -> Result<Self, ImportError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ImportError::Read(format!("{}: {e}", path.display())))?;
        Self::from_json(&content)
    }

    pub fn write(&self, path: &Path) -> Result<(), SaveError> {
        let json = self.to_json()?;
        atomic_write(path, &json).map_err(|e| SaveError::Write {
            file: BudgetFile::Export,
            reason: format!("{}: {e}", path.display()),
        })
    }

    /// Convert into persistable data. The theme is a local preference and is not
    /// part of the document.
    pub fn into_budget_data(self) -> BudgetData {
        BudgetData {
            scenarios: self.scenarios,
            version: self.version,
            theme: Theme::default(),
        }
    }
}

/// Download name for an export taken at `now`, e.g. `budget-2026-01-31.json`
pub fn suggested_filename(now: Timestamp) -> String {
    format!("budget-{}.json", now.strftime("%Y-%m-%d"))
}
