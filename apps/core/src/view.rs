//! Presentation-neutral models for the filter panel and marker popups.

use serde::Serialize;

use crate::filter::FilterSelection;
use crate::owners::OwnerIndex;
use crate::record::PropertyRecord;

/// Shown in a popup when a record has no owner at all.
pub const MISSING_OWNER_PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerToggle {
    pub label: String,
    pub checked: bool,
}

/// One toggle per owner in index order, plus the clear action the surface provides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterPanel {
    pub toggles: Vec<OwnerToggle>,
}

impl FilterPanel {
    pub fn build(owners: &OwnerIndex, selection: &FilterSelection) -> Self {
        let toggles = owners
            .labels()
            .iter()
            .map(|label| OwnerToggle {
                label: label.clone(),
                checked: selection.contains(label),
            })
            .collect();
        Self { toggles }
    }

    pub fn selected_count(&self) -> usize {
        self.toggles.iter().filter(|toggle| toggle.checked).count()
    }

    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty()
    }
}

/// Display fields of one record, already defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupContent {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
    pub owner: String,
    pub compliance: String,
}

impl PopupContent {
    pub fn from_record(record: &PropertyRecord) -> Self {
        let text = |field: &Option<String>| field.clone().unwrap_or_default();
        Self {
            name: text(&record.name),
            address: text(&record.address),
            city: text(&record.city),
            state: text(&record.state),
            zip: text(&record.zip),
            phone: text(&record.office_phone),
            email: text(&record.manager_email),
            owner: record
                .owner
                .clone()
                .unwrap_or_else(|| MISSING_OWNER_PLACEHOLDER.to_string()),
            compliance: text(&record.compliance),
        }
    }

    /// "City, ST 12345"
    pub fn locality(&self) -> String {
        format!("{}, {} {}", self.city, self.state, self.zip)
    }

    /// Plain text, blank lines separating the address, contact and ownership blocks.
    pub fn lines(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.address.clone(),
            self.locality(),
            String::new(),
            format!("Phone: {}", self.phone),
            format!("Email: {}", self.email),
            String::new(),
            format!("Owner: {}", self.owner),
            format!("Compliance: {}", self.compliance),
        ]
    }

    pub fn to_html(&self) -> String {
        format!(
            "<b>{}</b><br>{}<br>{}<br><br>Phone: {}<br>Email: {}<br><br>Owner: {}<br>Compliance: {}<br>",
            escape_html(&self.name),
            escape_html(&self.address),
            escape_html(&self.locality()),
            escape_html(&self.phone),
            escape_html(&self.email),
            escape_html(&self.owner),
            escape_html(&self.compliance),
        )
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
