use serde::{Deserialize, Serialize};

use crate::ContactInfo;

/// The wire-ready form of a completed survey session.
///
/// Entries are (prompt, rendered value) pairs in resolved-sequence order.
/// The structured form is what the durable local log stores and what the
/// JSON-body transport sends; [`SubmissionPayload::query_pairs`] is the one
/// canonical flattening shared by every key/value transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    /// The respondent's contact details.
    pub contact: ContactInfo,

    /// The resolved track label.
    pub track: String,

    /// One entry per answered question, in resolved-sequence order.
    pub entries: Vec<PayloadEntry>,
}

/// A single answered question in a submission payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadEntry {
    /// The question prompt, used as the wire key.
    pub prompt: String,

    /// The rendered answer value (selection sets joined with `", "`).
    pub value: String,
}

impl PayloadEntry {
    /// Create a new payload entry.
    pub fn new(prompt: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            value: value.into(),
        }
    }
}

impl SubmissionPayload {
    /// Flatten this payload into ordered key/value pairs.
    ///
    /// Contact fields and the track come first, then one pair per entry
    /// keyed by prompt. This is the form a query-string transport encodes.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("full_name".to_string(), self.contact.full_name.clone()),
            ("email".to_string(), self.contact.email.clone()),
            ("phone".to_string(), self.contact.phone.clone()),
            ("track".to_string(), self.track.clone()),
        ];
        pairs.extend(
            self.entries
                .iter()
                .map(|entry| (entry.prompt.clone(), entry.value.clone())),
        );
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_preserve_entry_order() {
        let payload = SubmissionPayload {
            contact: ContactInfo::new("Alice", "alice@example.com", "555-0100"),
            track: "Selling".to_string(),
            entries: vec![
                PayloadEntry::new("Buying or selling?", "Selling"),
                PayloadEntry::new("Why are you selling?", "Relocating"),
            ],
        };

        let pairs = payload.query_pairs();
        assert_eq!(pairs[0], ("full_name".to_string(), "Alice".to_string()));
        assert_eq!(pairs[3], ("track".to_string(), "Selling".to_string()));
        assert_eq!(
            pairs[5],
            (
                "Why are you selling?".to_string(),
                "Relocating".to_string()
            )
        );
    }
}
