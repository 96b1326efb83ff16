// Adapters layer: concrete implementations of the domain ports.

pub mod browser;
pub mod pause;

pub use browser::{dashboard_url, SystemBrowser};
pub use pause::TokioPauser;
