use content_sdk::{RecordStatus, StoredRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Totals over a set of stored records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContentStats {
    pub total_items: usize,
    /// Records without a word count contribute zero.
    pub total_words: u64,
    /// Zero when there are no records.
    pub average_words: f64,
    pub drafts: usize,
    pub by_type: BTreeMap<String, usize>,
    pub by_provider: BTreeMap<String, usize>,
}

impl ContentStats {
    #[must_use]
    pub fn from_records(records: &[StoredRecord]) -> Self {
        let mut stats = Self {
            total_items: records.len(),
            ..Self::default()
        };

        for record in records {
            stats.total_words += record.word_count.unwrap_or(0);
            if record.status == RecordStatus::Draft.as_str() {
                stats.drafts += 1;
            }
            *stats.by_type.entry(record.content_type.clone()).or_default() += 1;
            *stats.by_provider.entry(record.provider.clone()).or_default() += 1;
        }

        if stats.total_items > 0 {
            #[allow(clippy::cast_precision_loss)]
            let average = stats.total_words as f64 / stats.total_items as f64;
            stats.average_words = average;
        }
        stats
    }
}
