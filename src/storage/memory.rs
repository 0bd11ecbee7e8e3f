use std::sync::Mutex;
use crate::record::ResultRecord;
use crate::storage::HistoryStore;

#[derive(Default)]
pub struct MemoryHistoryStore {
    entries: Mutex<Vec<ResultRecord>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<ResultRecord>) -> Self {
        Self { entries: Mutex::new(entries) }
    }
}

#[async_trait::async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn load(&self) -> anyhow::Result<Vec<ResultRecord>> {
        let entries = self.entries.lock()
            .map_err(|_| anyhow::anyhow!("history store lock poisoned"))?;
        Ok(entries.clone())
    }

    async fn save(&self, new_entries: &[ResultRecord]) -> anyhow::Result<()> {
        let mut entries = self.entries.lock()
            .map_err(|_| anyhow::anyhow!("history store lock poisoned"))?;
        *entries = new_entries.to_vec();
        Ok(())
    }
}
