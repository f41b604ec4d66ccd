use std::path::{Path, PathBuf};

use jiff::Timestamp;
use serde::de::DeserializeOwned;

use budget_core::analysis::{ScenarioComparison, ScenarioSummary, compare_policies};
use budget_core::goals::project_goals;
use budget_core::model::ScenarioKey;
use budget_core::payoff::estimate_debts;
use budget_core::simulation::{SimulationConfig, simulate};

use crate::data::{DataConfig, DataDirectory, LoadResult, ScenarioDocument, suggested_filename};
use crate::report::Report;
use crate::state::{Action, BudgetState, LoadError, SaveError};

/// Loaded budget plus the directory it persists to
pub struct App {
    storage: DataDirectory,
    config: DataConfig,
    state: BudgetState,
}

impl App {
    pub fn with_data_dir(data_dir: PathBuf) -> Result<Self, LoadError> {
        let storage = DataDirectory::new(data_dir);
        let LoadResult {
            data,
            config,
            from_sample,
        } = storage.load()?;

        tracing::info!(
            root = %storage.root().display(),
            active = %config.active_scenario,
            from_sample,
            "Loaded budget"
        );

        Ok(Self {
            state: BudgetState::new(data, config.active_scenario),
            config,
            storage,
        })
    }

    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    pub fn config(&self) -> &DataConfig {
        &self.config
    }

    fn report(&self) -> Report {
        Report::new(self.config.show_cents)
    }

    /// Apply `action` and persist the result
    pub fn dispatch(&mut self, action: Action) -> Result<(), SaveError> {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(action);
        self.storage.save_data(&self.state.data)
    }

    /// Make `key` the scenario later commands read and edit
    pub fn use_scenario(&mut self, key: ScenarioKey) -> Result<(), SaveError> {
        self.state = std::mem::take(&mut self.state).apply(Action::SetActiveScenario(key));
        self.config.active_scenario = key;
        self.storage.save_config(&self.config)
    }

    pub fn reset(&mut self) -> Result<(), SaveError> {
        self.dispatch(Action::Reset)?;
        self.config.active_scenario = self.state.active_scenario;
        self.storage.save_config(&self.config)
    }

    fn scenario_key(&self, key: Option<ScenarioKey>) -> ScenarioKey {
        key.unwrap_or(self.state.active_scenario)
    }

    pub fn summary(&self, key: Option<ScenarioKey>) -> String {
        let key = self.scenario_key(key);
        let config = self.config.simulation();
        let scenarios = &self.state.data.scenarios;

        let this = ScenarioSummary::compute(scenarios.get(key), &config);
        let other = ScenarioSummary::compute(scenarios.get(key.other()), &config);
        let comparison = ScenarioComparison::between(&this, &other);

        self.report().summary(&this, Some(&comparison))
    }

    /// Debt estimates, the payoff schedule and the policy comparison
    pub fn debts(&self, key: Option<ScenarioKey>, config: Option<SimulationConfig>) -> String {
        let key = self.scenario_key(key);
        let config = config.unwrap_or_else(|| self.config.simulation());
        let debts = &self.state.data.scenarios.get(key).debts;
        let report = self.report();

        if debts.is_empty() {
            return report.debts(&[]);
        }

        let schedule = simulate(debts, &config);
        let comparison = compare_policies(debts, config.effective_horizon());
        [
            report.debts(&estimate_debts(debts)),
            report.schedule(&schedule),
            report.policies(&comparison),
        ]
        .join("\n\n")
    }

    pub fn goals(&self, key: Option<ScenarioKey>) -> String {
        let key = self.scenario_key(key);
        self.report()
            .goals(&project_goals(&self.state.data.scenarios.get(key).goals))
    }

    /// Write an export document. Without `out` it goes to the current directory
    /// under the dated default name.
    pub fn export(&self, out: Option<PathBuf>, now: Timestamp) -> Result<PathBuf, SaveError> {
        let path = out.unwrap_or_else(|| PathBuf::from(suggested_filename(now)));
        ScenarioDocument::export(&self.state.data, now).write(&path)?;
        tracing::info!(path = %path.display(), "Exported budget");
        Ok(path)
    }

    /// Replace both scenarios with the document at `path`. Nothing changes if the
    /// document is rejected.
    pub fn import(&mut self, path: &Path) -> color_eyre::Result<()> {
        let document = ScenarioDocument::read(path)?;
        self.dispatch(Action::Import(document.into_budget_data()))?;
        tracing::info!(path = %path.display(), "Imported budget");
        Ok(())
    }
}

/// Parse a record kind by its wire name. Unknown names become the kind's default.
pub fn parse_kind<T: DeserializeOwned + Default>(name: &str) -> T {
    let normalized = name.trim().to_ascii_lowercase().replace(['-', ' '], "_");
    serde_json::from_value(serde_json::Value::String(normalized)).unwrap_or_default()
}
