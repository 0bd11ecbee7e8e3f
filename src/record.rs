use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// The outcome of one computation. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub id: String,
    pub text: String,
    pub suffixes: Vec<String>,
    pub counts: BTreeMap<String, u64>,
    pub top_triads: Vec<String>,
    #[serde(with = "secs_map")]
    pub search_times: BTreeMap<String, Duration>,
}

impl ResultRecord {
    /// Placeholder shown before anything has been computed.
    pub fn empty() -> Self {
        Self {
            id: String::new(),
            text: String::new(),
            suffixes: Vec::new(),
            counts: BTreeMap::new(),
            top_triads: Vec::new(),
            search_times: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total_occurrences(&self) -> u64 {
        self.counts.values().sum()
    }
}

/// Durations as fractional seconds, the way the history file stores them.
mod secs_map {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(
        times: &BTreeMap<String, Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(times.iter().map(|(k, v)| (k, v.as_secs_f64())))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<String, Duration>, D::Error> {
        let raw = BTreeMap::<String, f64>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(k, secs)| {
                Duration::try_from_secs_f64(secs)
                    .map(|d| (k, d))
                    .map_err(D::Error::custom)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResultRecord {
        ResultRecord {
            id: "abc123".to_string(),
            text: "aaa".to_string(),
            suffixes: vec!["a".into(), "aa".into(), "aaa".into()],
            counts: [("a", 1), ("aa", 1), ("aaa", 1)]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            top_triads: vec!["aaa".into()],
            search_times: [("a", 500), ("aa", 250), ("aaa", 0)]
                .into_iter()
                .map(|(k, ms)| (k.to_string(), Duration::from_millis(ms)))
                .collect(),
        }
    }

    #[test]
    fn test_json_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        for key in ["id", "text", "suffixes", "counts", "topTriads", "searchTimes"] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(value["searchTimes"]["a"], serde_json::json!(0.5));
    }

    #[test]
    fn test_reads_back_what_it_writes() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let back: ResultRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_negative_time_rejected() {
        let json = r#"{"id":"x","text":"","suffixes":[],"counts":{},"topTriads":[],"searchTimes":{"a":-1.0}}"#;
        assert!(serde_json::from_str::<ResultRecord>(json).is_err());
    }

    #[test]
    fn test_empty_record() {
        let record = ResultRecord::empty();
        assert!(record.is_empty());
        assert_eq!(record.total_occurrences(), 0);
    }
}
