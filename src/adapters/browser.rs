use crate::domain::ports::BrowserLauncher;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::validate_file_url;
use std::path::Path;
use url::Url;

/// 透過作業系統預設瀏覽器開啟
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &Url) -> Result<()> {
        tracing::debug!("Launching default browser for {}", url);
        webbrowser::open(url.as_str()).map_err(|source| DemoError::BrowserLaunchError {
            url: url.to_string(),
            source,
        })
    }
}

/// 以絕對路徑組出 `file://` URL（不解析 symlink）
pub fn dashboard_url(path: &Path) -> Result<Url> {
    let absolute = std::path::absolute(path)?;
    let url = Url::from_file_path(&absolute).map_err(|_| DemoError::InvalidDashboardPath {
        path: absolute.display().to_string(),
    })?;

    validate_file_url("dashboard_path", url.as_str())?;
    Ok(url)
}
