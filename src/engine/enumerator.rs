use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;

use crate::engine::config::EngineConfig;
use crate::engine::error::ComputeError;
use crate::engine::suffix::{suffix_offsets, SuffixRecord};

/// Enumerate every suffix of `word`, lowercased, timing each one against a
/// single instant taken when enumeration of this word starts.
///
/// Under `EnumerationStrategy::PerSuffix` each offset gets its own task;
/// otherwise (or for words over `max_fanout_word_len`) a loop is used.
pub async fn enumerate_suffixes(
    word: &str,
    config: &EngineConfig,
) -> Result<Vec<SuffixRecord>, ComputeError> {
    let start = Instant::now();
    let lowered: Arc<str> = Arc::from(word.to_lowercase());
    let offsets = suffix_offsets(&lowered);

    if !config.fans_out(offsets.len()) {
        return Ok(collect_sequential(&lowered, &offsets, start));
    }

    let mut tasks = JoinSet::new();
    for &offset in &offsets {
        let word = Arc::clone(&lowered);
        tasks.spawn(async move { SuffixRecord::new(&word[offset..], start.elapsed()) });
    }

    let mut records = Vec::with_capacity(offsets.len());
    while let Some(joined) = tasks.join_next().await {
        records.push(joined.map_err(|e| {
            ComputeError::from_join(e, format!("suffix task for {:?}", &*lowered))
        })?);
    }

    Ok(records)
}

/// Same output as [`enumerate_suffixes`] without touching the runtime.
pub fn enumerate_suffixes_sync(word: &str) -> Vec<SuffixRecord> {
    let start = Instant::now();
    let lowered = word.to_lowercase();
    let offsets = suffix_offsets(&lowered);
    collect_sequential(&lowered, &offsets, start)
}

fn collect_sequential(word: &str, offsets: &[usize], start: Instant) -> Vec<SuffixRecord> {
    offsets
        .iter()
        .map(|&offset| SuffixRecord::new(&word[offset..], start.elapsed()))
        .collect()
}
