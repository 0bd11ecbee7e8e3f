use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRecord {
    pub suffix: String,
    /// Time since enumeration of the owning word began.
    pub elapsed: Duration,
}

impl SuffixRecord {
    pub fn new(suffix: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            suffix: suffix.into(),
            elapsed,
        }
    }
}

/// Byte offsets at which each suffix of `word` starts, one per grapheme
/// cluster, so the full word comes first and the last grapheme last.
pub fn suffix_offsets(word: &str) -> Vec<usize> {
    word.grapheme_indices(true).map(|(offset, _)| offset).collect()
}

/// Length in user-perceived characters.
pub fn char_len(s: &str) -> usize {
    s.graphemes(true).count()
}
