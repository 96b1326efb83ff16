use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// 橫幅：一條分隔線、標題、再一條分隔線
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub fill: char,
    pub width: usize,
    pub title: String,
    #[serde(default)]
    pub trailing_blank: bool,
}

impl Banner {
    pub fn rule(&self) -> String {
        self.fill.to_string().repeat(self.width)
    }

    pub fn lines(&self) -> Vec<String> {
        let rule = self.rule();
        let mut lines = vec![rule.clone(), self.title.clone(), rule];
        if self.trailing_blank {
            lines.push(String::new());
        }
        lines
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepAction {
    #[default]
    None,
    OpenDashboard,
}

/// 一個旁白區塊
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub number: u8,
    pub title: String,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub action: StepAction,
    #[serde(default)]
    pub pause_seconds: u64,
}

impl Step {
    pub fn header(&self) -> String {
        format!("STEP {}: {}", self.number, self.title)
    }

    /// Header plus detail line, without anything produced by the action.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.header()];
        if let Some(detail) = &self.detail {
            lines.push(detail.clone());
        }
        lines
    }

    pub fn pause(&self) -> Duration {
        Duration::from_secs(self.pause_seconds)
    }

    pub fn opens_dashboard(&self) -> bool {
        self.action == StepAction::OpenDashboard
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardOutcome {
    /// 沒有任何步驟要求開啟 dashboard
    NotRequested,
    Missing(PathBuf),
    Opened(Url),
}

#[derive(Debug, Clone)]
pub struct ShowcaseReport {
    pub dashboard: DashboardOutcome,
    pub steps_run: usize,
    pub total_pause: Duration,
    pub elapsed: Duration,
}
