//! Personal budget dashboard
//!
//! Keeps a "Current Reality" and a "Plan Budget" scenario on disk, edits them
//! through an explicit `(state, action) -> state` reducer and renders dashboard
//! views computed by `budget_core`.

pub mod app;
pub mod data;
pub mod logging;
pub mod report;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
