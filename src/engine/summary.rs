use crate::engine::aggregator::SuffixTally;
use crate::engine::config::{EngineConfig, TieBreak};
use crate::engine::suffix::char_len;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub sorted_suffixes: Vec<String>,
    pub top_triads: Vec<String>,
}

pub fn summarize(tally: &SuffixTally, config: &EngineConfig) -> Summary {
    let mut sorted_suffixes: Vec<String> = tally.iter().map(|(s, _)| s.to_string()).collect();
    sorted_suffixes.sort();

    let mut triads: Vec<(&str, u64)> = tally
        .iter()
        .filter(|(s, _)| char_len(s) == config.triad_len)
        .map(|(s, stats)| (s, stats.count))
        .collect();

    if config.tie_break == TieBreak::Lexicographic {
        triads.sort_by(|a, b| a.0.cmp(b.0));
    }
    // Stable: equal counts keep the tally order (or the lexicographic one).
    triads.sort_by(|a, b| b.1.cmp(&a.1));

    let top_triads = triads
        .into_iter()
        .take(config.top_k)
        .map(|(s, _)| s.to_string())
        .collect();

    Summary {
        sorted_suffixes,
        top_triads,
    }
}
