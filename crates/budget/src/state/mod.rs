mod app_state;
mod errors;

// Re-export all types from submodules
pub use app_state::*;
pub use errors::*;
