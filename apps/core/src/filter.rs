use std::collections::BTreeSet;

use crate::record::PropertyRecord;

/// Owner labels the user has checked. Empty means no filter, not "show nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    selected: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirrors a checkbox: checked adds the label, unchecked removes it.
    pub fn set(&mut self, label: &str, checked: bool) {
        if checked {
            self.selected.insert(label.to_string());
        } else {
            self.selected.remove(label);
        }
    }

    /// Returns the new checked state.
    pub fn toggle(&mut self, label: &str) -> bool {
        let checked = !self.contains(label);
        self.set(label, checked);
        checked
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, label: &str) -> bool {
        self.selected.contains(label)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for FilterSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().map(|label| label.as_ref().to_string()).collect(),
        }
    }
}

/// Records whose owner label is selected, in input order. An empty selection
/// keeps every record.
pub fn apply_filter<'a>(
    records: &'a [PropertyRecord],
    selection: &FilterSelection,
) -> Vec<&'a PropertyRecord> {
    if selection.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| selection.contains(&record.owner_label()))
        .collect()
}
