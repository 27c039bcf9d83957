//! Shard merging — one record per test case.

use std::collections::HashMap;

use super::types::FailureRecord;

/// Merge failures of the same test case reported by different shards.
///
/// Records keep first-seen order. Later duplicates only contribute their
/// assertions, appended after the ones already collected; their tags are
/// dropped.
pub fn deduplicate(failures: Vec<FailureRecord>) -> Vec<FailureRecord> {
    let mut merged: Vec<FailureRecord> = Vec::new();
    let mut index_by_test: HashMap<String, usize> = HashMap::new();

    for failure in failures {
        match index_by_test.get(&failure.test) {
            Some(&idx) => merged[idx].assertions.extend(failure.assertions),
            None => {
                index_by_test.insert(failure.test.clone(), merged.len());
                merged.push(failure);
            }
        }
    }

    merged
}
