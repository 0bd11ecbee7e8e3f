use async_trait::async_trait;
use crate::record::ResultRecord;

/// Durable slot holding the whole history list, newest first.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn load(&self) -> anyhow::Result<Vec<ResultRecord>>;

    async fn save(&self, entries: &[ResultRecord]) -> anyhow::Result<()>;
}
