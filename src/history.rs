use tracing::info;
use anyhow::Result;

use crate::record::ResultRecord;
use crate::storage::HistoryStore;

/// Past results, newest first, saved through `S` on every change.
pub struct History<S: HistoryStore> {
    store: S,
    entries: Vec<ResultRecord>,
    /// Zero means unbounded.
    max_entries: usize,
}

impl<S: HistoryStore> History<S> {
    pub async fn load(store: S, max_entries: usize) -> Result<Self> {
        let mut entries = store.load().await?;
        if max_entries > 0 {
            entries.truncate(max_entries);
        }
        info!("Loaded {} history entries", entries.len());
        Ok(Self { store, entries, max_entries })
    }

    pub fn entries(&self) -> &[ResultRecord] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&ResultRecord> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert `result` at the head and persist.
    pub async fn record(&mut self, result: ResultRecord) -> Result<()> {
        self.entries.insert(0, result);
        if self.max_entries > 0 && self.entries.len() > self.max_entries {
            self.entries.truncate(self.max_entries);
        }
        self.store.save(&self.entries).await
    }

    pub async fn clear(&mut self) -> Result<()> {
        let removed = self.entries.len();
        self.entries.clear();
        self.store.save(&self.entries).await?;
        info!("Cleared {} history entries", removed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{compute_sync, EngineConfig};
    use crate::storage::{FileHistoryStore, MemoryHistoryStore};

    fn record(text: &str) -> ResultRecord {
        compute_sync(text, &EngineConfig::default())
    }

    #[tokio::test]
    async fn test_newest_first() {
        let mut history = History::load(MemoryHistoryStore::new(), 0).await.unwrap();
        history.record(record("one")).await.unwrap();
        history.record(record("two")).await.unwrap();

        let texts: Vec<&str> = history.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["two", "one"]);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let mut history = History::load(MemoryHistoryStore::new(), 0).await.unwrap();
        let result = record("lookup");
        let id = result.id.clone();
        history.record(result).await.unwrap();

        assert_eq!(history.get(&id).map(|e| e.text.as_str()), Some("lookup"));
        assert!(history.get("missing").is_none());
    }

    #[tokio::test]
    async fn test_cap_drops_oldest() {
        let mut history = History::load(MemoryHistoryStore::new(), 2).await.unwrap();
        for text in ["a", "b", "c"] {
            history.record(record(text)).await.unwrap();
        }
        let texts: Vec<&str> = history.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["c", "b"]);
    }

    #[tokio::test]
    async fn test_clear_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut history = History::load(FileHistoryStore::new(&path), 0).await.unwrap();
        history.record(record("kept")).await.unwrap();
        drop(history);

        let mut history = History::load(FileHistoryStore::new(&path), 0).await.unwrap();
        assert_eq!(history.len(), 1);
        history.clear().await.unwrap();
        assert!(history.is_empty());
        drop(history);

        let history = History::load(FileHistoryStore::new(&path), 0).await.unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_load_applies_cap() {
        let store = MemoryHistoryStore::with_entries(vec![record("x"), record("y"), record("z")]);
        let history = History::load(store, 1).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.entries()[0].text, "x");
    }
}
