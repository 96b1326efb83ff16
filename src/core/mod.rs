pub mod runner;

pub use crate::domain::model::{DashboardOutcome, ShowcaseReport};
pub use crate::domain::ports::{BrowserLauncher, Pauser};
pub use crate::utils::error::Result;
