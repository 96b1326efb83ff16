pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{SystemBrowser, TokioPauser};
pub use config::script::ShowcaseScript;
pub use core::runner::ShowcaseRunner;
pub use domain::model::{DashboardOutcome, ShowcaseReport};
pub use utils::error::{DemoError, Result};
