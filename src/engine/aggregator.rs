use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use crate::engine::suffix::SuffixRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixStats {
    pub count: u64,
    /// Earliest elapsed time observed for this suffix.
    pub min_elapsed: Duration,
}

/// Frequency table and min-time table over the same key set.
///
/// Entries keep the order in which each suffix first arrived; this is the
/// table's natural ordering used for tie-breaks in the summary.
#[derive(Debug, Clone, Default)]
pub struct SuffixTally {
    entries: Vec<(String, SuffixStats)>,
    index: HashMap<String, usize>,
    total: u64,
}

impl SuffixTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: SuffixRecord) {
        self.total += 1;
        match self.index.get(&record.suffix) {
            Some(&slot) => {
                let stats = &mut self.entries[slot].1;
                stats.count += 1;
                stats.min_elapsed = stats.min_elapsed.min(record.elapsed);
            }
            None => {
                self.index.insert(record.suffix.clone(), self.entries.len());
                self.entries.push((
                    record.suffix,
                    SuffixStats {
                        count: 1,
                        min_elapsed: record.elapsed,
                    },
                ));
            }
        }
    }

    pub fn get(&self, suffix: &str) -> Option<SuffixStats> {
        self.index.get(suffix).map(|&slot| self.entries[slot].1)
    }

    /// Entries in first-arrival order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, SuffixStats)> {
        self.entries.iter().map(|(suffix, stats)| (suffix.as_str(), *stats))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of records folded in; equals the sum of all counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn counts(&self) -> BTreeMap<String, u64> {
        self.iter().map(|(s, stats)| (s.to_string(), stats.count)).collect()
    }

    pub fn min_times(&self) -> BTreeMap<String, Duration> {
        self.iter().map(|(s, stats)| (s.to_string(), stats.min_elapsed)).collect()
    }
}

pub fn aggregate(records: impl IntoIterator<Item = SuffixRecord>) -> SuffixTally {
    let mut tally = SuffixTally::new();
    for record in records {
        tally.add(record);
    }
    tally
}
