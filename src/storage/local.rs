use tokio::fs;
use std::path::PathBuf;
use tracing::{debug, warn};
use crate::record::ResultRecord;
use crate::storage::HistoryStore;

/// History kept as a JSON array in a single file.
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl HistoryStore for FileHistoryStore {
    async fn load(&self) -> anyhow::Result<Vec<ResultRecord>> {
        let data = match fs::read(&self.path).await {
            Ok(d) => d,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No history file at {:?}", self.path);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        // An unreadable list is treated as no history at all.
        match serde_json::from_slice(&data) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!("Discarding unreadable history file {:?}: {}", self.path, e);
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, entries: &[ResultRecord]) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        // Write beside the target, then rename over it.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?).await?;
        fs::rename(&tmp, &self.path).await?;
        debug!("Saved {} history entries to {:?}", entries.len(), self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str) -> ResultRecord {
        crate::engine::compute_sync(text, &crate::engine::EngineConfig::default())
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHistoryStore::new(dir.path().join("history.json"));
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHistoryStore::new(dir.path().join("nested/history.json"));
        let entries = vec![record("second"), record("first")];

        store.save(&entries).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].text, "second");
        assert_eq!(loaded[1].id, entries[1].id);
        assert_eq!(loaded[1].counts, entries[1].counts);
        assert!(!dir.path().join("nested/history.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, b"{not json").unwrap();

        let store = FileHistoryStore::new(&path);
        assert!(store.load().await.unwrap().is_empty());
    }
}
