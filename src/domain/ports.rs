use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// 開啟瀏覽器；不等待瀏覽器行程結束
pub trait BrowserLauncher: Send + Sync {
    fn open(&self, url: &Url) -> Result<()>;
}

#[async_trait]
pub trait Pauser: Send + Sync {
    async fn pause(&self, duration: Duration);
}
