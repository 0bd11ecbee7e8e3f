use std::time::Instant;
use tokio::task::JoinSet;
use tracing::debug;

use crate::engine::aggregator::aggregate;
use crate::engine::config::EngineConfig;
use crate::engine::enumerator::{enumerate_suffixes, enumerate_suffixes_sync};
use crate::engine::error::ComputeError;
use crate::engine::suffix::SuffixRecord;
use crate::engine::summary::summarize;
use crate::engine::tokenizer::tokenize;
use crate::record::ResultRecord;
use crate::utils::id::fresh_id;

type WordTasks = JoinSet<Result<Vec<SuffixRecord>, ComputeError>>;

/// Holds the engine configuration and runs computations with it.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub async fn compute(&self, text: &str) -> Result<ResultRecord, ComputeError> {
        compute(text, &self.config).await
    }

    pub fn compute_sync(&self, text: &str) -> ResultRecord {
        compute_sync(text, &self.config)
    }
}

/// Tokenize, enumerate every word on its own task, then fold and summarize.
///
/// Either every task completes and a record is returned, or the first
/// failure is returned and the remaining tasks are aborted.
pub async fn compute(text: &str, config: &EngineConfig) -> Result<ResultRecord, ComputeError> {
    let started = Instant::now();
    let words = tokenize(text);
    debug!("Computing suffixes for {} words", words.len());

    let mut tasks = WordTasks::new();
    for word in words {
        let config = config.clone();
        tasks.spawn(async move { enumerate_suffixes(&word, &config).await });
    }

    let records = collect_records(tasks).await?;
    let record = build_record(text, records, config);
    debug!(
        "Computed {} distinct suffixes ({} occurrences) in {:?}",
        record.suffixes.len(),
        record.total_occurrences(),
        started.elapsed()
    );
    Ok(record)
}

/// Single-threaded variant of [`compute`]; no runtime required.
pub fn compute_sync(text: &str, config: &EngineConfig) -> ResultRecord {
    let records: Vec<SuffixRecord> = tokenize(text)
        .iter()
        .flat_map(|word| enumerate_suffixes_sync(word))
        .collect();
    build_record(text, records, config)
}

async fn collect_records(mut tasks: WordTasks) -> Result<Vec<SuffixRecord>, ComputeError> {
    let mut all = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        let records = joined.map_err(|e| ComputeError::from_join(e, "word task"))??;
        all.extend(records);
    }
    Ok(all)
}

fn build_record(text: &str, records: Vec<SuffixRecord>, config: &EngineConfig) -> ResultRecord {
    let tally = aggregate(records);
    let summary = summarize(&tally, config);

    ResultRecord {
        id: fresh_id(text),
        text: text.to_string(),
        suffixes: summary.sorted_suffixes,
        counts: tally.counts(),
        top_triads: summary.top_triads,
        search_times: tally.min_times(),
    }
}
