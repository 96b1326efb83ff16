use crate::domain::model::{Banner, Step};
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const EMBEDDED_SCRIPT: &str = include_str!("showcase.toml");

/// 單一步驟允許的最長停頓（秒）
const MAX_PAUSE_SECONDS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseScript {
    pub dashboard_path: PathBuf,
    pub opening: Banner,
    pub closing: Banner,
    pub steps: Vec<Step>,
}

impl ShowcaseScript {
    /// 載入編進執行檔的旁白腳本
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_SCRIPT)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DemoError::ScriptParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn with_dashboard_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.dashboard_path = path.as_ref().to_path_buf();
        self
    }

    pub fn validate_script(&self) -> Result<()> {
        validation::validate_path(
            "dashboard_path",
            &self.dashboard_path.to_string_lossy(),
        )?;

        for (field, banner) in [("opening", &self.opening), ("closing", &self.closing)] {
            validation::validate_positive_number(&format!("{}.width", field), banner.width, 1)?;
            validation::validate_non_empty_string(&format!("{}.title", field), &banner.title)?;
        }

        validation::validate_positive_number("steps", self.steps.len(), 1)?;

        // 步驟編號必須從 1 開始連續
        for (index, step) in self.steps.iter().enumerate() {
            let expected = index + 1;
            if usize::from(step.number) != expected {
                return Err(DemoError::InvalidConfigValueError {
                    field: format!("steps[{}].number", index),
                    value: step.number.to_string(),
                    reason: format!("Expected step number {}", expected),
                });
            }
            validation::validate_non_empty_string(&format!("steps[{}].title", index), &step.title)?;
            validation::validate_range(
                &format!("steps[{}].pause_seconds", index),
                step.pause_seconds,
                0,
                MAX_PAUSE_SECONDS,
            )?;
        }

        let dashboard_steps = self.steps.iter().filter(|s| s.opens_dashboard()).count();
        if dashboard_steps > 1 {
            return Err(DemoError::InvalidConfigValueError {
                field: "steps.action".to_string(),
                value: dashboard_steps.to_string(),
                reason: "At most one step may open the dashboard".to_string(),
            });
        }

        Ok(())
    }
}

impl Validate for ShowcaseScript {
    fn validate(&self) -> Result<()> {
        self.validate_script()
    }
}
