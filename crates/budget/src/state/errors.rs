use std::fmt;

use budget_core::model::ScenarioKey;

/// The files a budget directory reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetFile {
    Config,
    Budget,
    /// A JSON export chosen by the user
    Export,
}

impl fmt::Display for BudgetFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BudgetFile::Config => "config.yaml",
            BudgetFile::Budget => "budget.yaml",
            BudgetFile::Export => "export",
        })
    }
}

#[derive(Debug)]
pub enum LoadError {
    Read { file: BudgetFile, reason: String },
    Corrupt { file: BudgetFile, reason: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Read { file, reason } => write!(f, "Cannot read {file}: {reason}"),
            LoadError::Corrupt { file, reason } => write!(f, "{file} is corrupt: {reason}"),
        }
    }
}

impl std::error::Error for LoadError {}

#[derive(Debug)]
pub enum SaveError {
    CreateDir(String),
    Write { file: BudgetFile, reason: String },
    Encode { file: BudgetFile, reason: String },
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::CreateDir(reason) => write!(f, "Cannot create data directory: {reason}"),
            SaveError::Write { file, reason } => write!(f, "Cannot write {file}: {reason}"),
            SaveError::Encode { file, reason } => write!(f, "Cannot encode {file}: {reason}"),
        }
    }
}

impl std::error::Error for SaveError {}

/// Rejections of an imported scenario-pair document
#[derive(Debug)]
pub enum ImportError {
    Read(String),
    /// Not valid JSON, or a field has the wrong shape
    InvalidFormat(String),
    /// `scenarios.current` or `scenarios.plan` is absent
    MissingScenario(ScenarioKey),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::Read(reason) => write!(f, "Cannot read {}: {reason}", BudgetFile::Export),
            ImportError::InvalidFormat(reason) => write!(f, "Invalid file format: {reason}"),
            ImportError::MissingScenario(key) => {
                write!(f, "Invalid file format: missing scenarios.{key}")
            }
        }
    }
}

impl std::error::Error for ImportError {}
