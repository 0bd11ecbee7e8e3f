use serde::{Deserialize, Serialize};

pub const DEFAULT_TOP_K: usize = 10;
pub const DEFAULT_TRIAD_LEN: usize = 3;
pub const DEFAULT_MAX_FANOUT_WORD_LEN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumerationStrategy {
    /// One task per suffix offset inside each word task.
    PerSuffix,
    /// A plain loop inside each word task.
    Sequential,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep the order in which suffixes first reached the aggregator.
    Arrival,
    Lexicographic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub strategy: EnumerationStrategy,
    /// Words longer than this are enumerated sequentially even under
    /// `PerSuffix`.
    pub max_fanout_word_len: usize,
    pub top_k: usize,
    pub triad_len: usize,
    pub tie_break: TieBreak,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: EnumerationStrategy::PerSuffix,
            max_fanout_word_len: DEFAULT_MAX_FANOUT_WORD_LEN,
            top_k: DEFAULT_TOP_K,
            triad_len: DEFAULT_TRIAD_LEN,
            tie_break: TieBreak::Arrival,
        }
    }
}

impl EngineConfig {
    pub fn sequential() -> Self {
        Self {
            strategy: EnumerationStrategy::Sequential,
            ..Self::default()
        }
    }

    pub fn fans_out(&self, word_len: usize) -> bool {
        self.strategy == EnumerationStrategy::PerSuffix && word_len <= self.max_fanout_word_len
    }
}
