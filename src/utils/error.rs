use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to open {url} in browser: {source}")]
    BrowserLaunchError {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Dashboard path cannot be turned into a file URL: {path}")]
    InvalidDashboardPath { path: String },

    #[error("Showcase script error: {message}")]
    ScriptParseError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DemoError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) => format!("Could not write to the console: {}", e),
            DemoError::BrowserLaunchError { url, .. } => {
                format!("Could not open the dashboard ({}) in your browser", url)
            }
            DemoError::InvalidDashboardPath { path } => {
                format!("The dashboard path '{}' is not usable", path)
            }
            DemoError::ScriptParseError { .. } | DemoError::InvalidConfigValueError { .. } => {
                format!("The built-in showcase script is broken: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::IoError(_) => "Check that stdout is still open (e.g. the pipe was not closed)",
            DemoError::BrowserLaunchError { .. } => {
                "Make sure a default web browser is configured, or open the dashboard manually"
            }
            DemoError::InvalidDashboardPath { .. } => {
                "Run the demo from a directory next to the generative-hub checkout"
            }
            DemoError::ScriptParseError { .. } | DemoError::InvalidConfigValueError { .. } => {
                "Rebuild the binary from a clean checkout"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
