pub mod app_data;
pub mod config;
pub mod document;
pub mod storage;

pub use app_data::{BudgetData, DATA_VERSION, Theme};
pub use config::DataConfig;
pub use document::{ScenarioDocument, suggested_filename};
pub use storage::{DataDirectory, LoadResult};
