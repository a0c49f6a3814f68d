//! Collected validation findings.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::FieldIssue;

/// The outcome of one validation pass. Empty means the candidate may be
/// saved; anything else blocks the save and is rendered inline by the UI
/// collaborator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    issues: Vec<FieldIssue>,
}

/// Flattened finding, for JSON output and snapshots.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub field: &'static str,
    pub kind: &'static str,
    pub message: String,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: FieldIssue) {
        self.issues.push(issue);
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = FieldIssue>) {
        self.issues.extend(issues);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Field-to-message map; the first finding per field wins, so the most
    /// fundamental problem (checks run in declaration order) is shown.
    pub fn field_errors(&self) -> BTreeMap<&'static str, String> {
        let mut map = BTreeMap::new();
        for issue in &self.issues {
            map.entry(issue.field()).or_insert_with(|| issue.message());
        }
        map
    }

    /// The message reported for one field, if any.
    pub fn message_for(&self, field: &str) -> Option<String> {
        self.issues
            .iter()
            .find(|issue| issue.field() == field)
            .map(FieldIssue::message)
    }

    pub fn entries(&self) -> Vec<ReportEntry> {
        self.issues
            .iter()
            .map(|issue| ReportEntry {
                field: issue.field(),
                kind: issue.kind(),
                message: issue.message(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_finding_per_field_wins() {
        let mut report = ValidationReport::new();
        report.push(FieldIssue::Required { field: "price" });
        report.push(FieldIssue::InvalidDecimal { field: "price" });
        let errors = report.field_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["price"], "price is required");
        assert_eq!(report.len(), 2);
    }
}
