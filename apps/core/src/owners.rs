use std::cmp::Ordering;
use std::collections::BTreeSet;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::record::PropertyRecord;

/// Label used for records with a blank or missing owner.
pub const UNKNOWN_OWNER: &str = "Unknown";

/// Trims an owner name, falling back to [`UNKNOWN_OWNER`] when nothing is left.
pub fn normalize_owner(owner: Option<&str>) -> String {
    match owner.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => UNKNOWN_OWNER.to_string(),
    }
}

/// Decomposes, drops combining marks and lowercases, so "Émile" collates as "emile".
fn collation_key(label: &str) -> String {
    label
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Accent- and case-insensitive ordering with the raw label as tie-breaker, so
/// "acme" and "Acme" sit together but always in the same order.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Distinct owner labels of a record set, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerIndex {
    labels: Vec<String>,
}

impl OwnerIndex {
    pub fn from_records(records: &[PropertyRecord]) -> Self {
        let distinct: BTreeSet<String> = records.iter().map(PropertyRecord::owner_label).collect();
        let mut labels: Vec<String> = distinct.into_iter().collect();
        labels.sort_by(|a, b| compare_labels(a, b));
        Self { labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|known| known == label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
