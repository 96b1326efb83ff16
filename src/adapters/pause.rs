use crate::domain::ports::Pauser;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPauser;

#[async_trait]
impl Pauser for TokioPauser {
    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
