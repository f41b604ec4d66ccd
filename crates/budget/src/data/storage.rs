//! Local file storage
//!
//! Directory structure:
//! ~/.budget/
//!   config.yaml          # Active scenario, payoff policy, display preferences
//!   budget.yaml          # Both scenarios, document version, theme
//!   budget.log           # Application log

use std::fs;
use std::path::{Path, PathBuf};

use super::app_data::BudgetData;
use super::config::DataConfig;
use crate::state::{BudgetFile, LoadError, SaveError};
use crate::util::atomic_write;

/// Result of loading the data directory
#[derive(Debug)]
pub struct LoadResult {
    pub data: BudgetData,
    pub config: DataConfig,
    /// True when no budget file existed and the sample data was substituted
    pub from_sample: bool,
}

/// Manages the data directory
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.budget/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".budget")
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    fn data_path(&self) -> PathBuf {
        self.root.join("budget.yaml")
    }

    pub fn exists(&self) -> bool {
        self.root.exists()
    }

    pub fn init(&self) -> Result<(), SaveError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| SaveError::CreateDir(e.to_string()))
    }

    /// Load config.yaml, falling back to defaults when absent
    pub fn load_config(&self) -> Result<DataConfig, LoadError> {
        let config_path = self.config_path();
        if !config_path.exists() {
            return Ok(DataConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| read_error(BudgetFile::Config, e))?;

        serde_saphyr::from_str(&content)
            .map_err(|e| corrupt(BudgetFile::Config, e))
    }

    pub fn save_config(&self, config: &DataConfig) -> Result<(), SaveError> {
        if !self.exists() {
            self.init()?;
        }

        let yaml = serde_saphyr::to_string(config)
            .map_err(|e| encode_error(BudgetFile::Config, e))?;

        atomic_write(&self.config_path(), &yaml)
            .map_err(|e| write_error(BudgetFile::Config, e))
    }

    /// Load budget.yaml. `None` if it has never been saved.
    pub fn load_data(&self) -> Result<Option<BudgetData>, LoadError> {
        let data_path = self.data_path();
        if !data_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&data_path)
            .map_err(|e| read_error(BudgetFile::Budget, e))?;

        BudgetData::from_yaml(&content)
            .map(Some)
            .map_err(|e| corrupt(BudgetFile::Budget, e))
    }

    pub fn save_data(&self, data: &BudgetData) -> Result<(), SaveError> {
        if !self.exists() {
            self.init()?;
        }

        let yaml = data
            .to_yaml()
            .map_err(|e| encode_error(BudgetFile::Budget, e))?;

        atomic_write(&self.data_path(), &yaml)
            .map_err(|e| write_error(BudgetFile::Budget, e))?;

        tracing::debug!(path = %self.data_path().display(), "Saved budget data");
        Ok(())
    }

    /// Load both files
    pub fn load(&self) -> Result<LoadResult, LoadError> {
        let config = self.load_config()?;
        let (data, from_sample) = match self.load_data()? {
            Some(data) => (data, false),
            None => {
                tracing::info!("No budget file found, using sample data");
                (BudgetData::default(), true)
            }
        };

        Ok(LoadResult {
            data,
            config,
            from_sample,
        })
    }

    /// Get the root path of the data directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn read_error(file: BudgetFile, e: impl std::fmt::Display) -> LoadError {
    LoadError::Read {
        file,
        reason: e.to_string(),
    }
}

fn corrupt(file: BudgetFile, e: impl std::fmt::Display) -> LoadError {
    LoadError::Corrupt {
        file,
        reason: e.to_string(),
    }
}

fn write_error(file: BudgetFile, e: impl std::fmt::Display) -> SaveError {
    SaveError::Write {
        file,
        reason: e.to_string(),
    }
}

fn encode_error(file: BudgetFile, e: impl std::fmt::Display) -> SaveError {
    SaveError::Encode {
        file,
        reason: e.to_string(),
    }
}
