//! Combo Export Core Library
//!
//! Core functionality for the combo export tools.
//! Provides the Dgraph session, the `Combo` node query, and the CSV/JSON export pipeline.

pub mod export;
pub mod graph;

use serde::{Deserialize, Serialize};

/// Dgraph type selected by every export query
pub const COMBO_TYPE: &str = "Combo";

/// A `Combo` node as returned by Dgraph
///
/// Every field is optional. Absent fields stay absent when re-encoded,
/// and an empty `A`, `B` or `ComboResult` stays an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboRecord {
    /// Store-assigned node identifier, never written when empty
    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub uid: Option<String>,
    #[serde(rename = "A", default, skip_serializing_if = "Option::is_none")]
    pub a: Option<String>,
    #[serde(rename = "B", default, skip_serializing_if = "Option::is_none")]
    pub b: Option<String>,
    /// Output stored for the `A`/`B` pair
    #[serde(rename = "ComboResult", default, skip_serializing_if = "Option::is_none")]
    pub combo_result: Option<String>,
}

impl ComboRecord {
    /// Create a record without a uid
    pub fn new(a: impl Into<String>, b: impl Into<String>, combo_result: impl Into<String>) -> Self {
        Self {
            uid: None,
            a: Some(a.into()),
            b: Some(b.into()),
            combo_result: Some(combo_result.into()),
        }
    }

    /// Cells written to the delimited output, in column order
    pub fn csv_row(&self) -> [&str; 3] {
        [
            self.a.as_deref().unwrap_or_default(),
            self.b.as_deref().unwrap_or_default(),
            self.combo_result.as_deref().unwrap_or_default(),
        ]
    }
}

fn is_none_or_empty(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

/// Window of nodes requested by a single paginated query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of nodes (`first`)
    pub first: usize,
    /// Number of nodes to skip
    pub offset: usize,
}

impl PageRequest {
    pub fn new(first: usize, offset: usize) -> Self {
        Self { first, offset }
    }

    /// The request for the page after this one
    pub fn next(&self) -> Self {
        Self {
            first: self.first,
            offset: self.offset + self.first,
        }
    }
}

impl std::fmt::Display for PageRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "first={} offset={}", self.first, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty_fields_survive_reencoding() {
        let payload = r#"{"uid":"0x2a","A":"","ComboResult":"r"}"#;
        let record: ComboRecord = serde_json::from_str(payload).unwrap();

        assert_eq!(record.uid.as_deref(), Some("0x2a"));
        assert_eq!(record.a.as_deref(), Some(""));
        assert_eq!(record.b, None);
        assert_eq!(record.combo_result.as_deref(), Some("r"));

        assert_eq!(serde_json::to_string(&record).unwrap(), payload);
    }

    #[test]
    fn test_csv_row_uses_empty_cells_for_missing_fields() {
        let record = ComboRecord {
            b: Some("only b".to_string()),
            ..Default::default()
        };
        assert_eq!(record.csv_row(), ["", "only b", ""]);
    }

    #[test]
    fn test_page_request_advances_by_page_size() {
        let page = PageRequest::new(1000, 0);
        assert_eq!(page.next(), PageRequest::new(1000, 1000));
        assert_eq!(page.next().next().offset, 2000);
        assert_eq!(page.to_string(), "first=1000 offset=0");
    }
}
