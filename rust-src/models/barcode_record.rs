//! Barcode history record as persisted in `barcodes.json`.

use serde::{Deserialize, Serialize};


/// A single generated barcode.
///
/// Field names on disk are `barcode`, `label` and `imageData`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeRecord {
    /// The 11 digits the user entered.
    #[serde(rename = "barcode")]
    pub code: String,
    pub label: String,
    /// Opaque rendered image, normally a `data:image/png;base64,` URI.
    #[serde(rename = "imageData")]
    pub image: String,
}


impl BarcodeRecord {
    pub fn new(code: impl Into<String>, label: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            image: image.into(),
        }
    }

    /// Check whether this record collides with a code or a label.
    ///
    /// Either match is enough.
    pub fn conflicts_with(&self, code: &str, label: &str) -> bool {
        self.code == code || self.label == label
    }

    /// Check whether this record matches a history search term.
    ///
    /// The label is matched case-insensitively, the code literally.
    pub fn matches(&self, term: &str) -> bool {
        self.label.to_lowercase().contains(&term.to_lowercase()) || self.code.contains(term)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let record = BarcodeRecord::new("12345678901", "first", "data:image/png;base64,AA==");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["barcode"], "12345678901");
        assert_eq!(value["label"], "first");
        assert_eq!(value["imageData"], "data:image/png;base64,AA==");
    }

    #[test]
    fn test_conflicts_on_code_or_label() {
        let record = BarcodeRecord::new("12345678901", "first", "img");

        assert!(record.conflicts_with("12345678901", "other"));
        assert!(record.conflicts_with("98765432109", "first"));
        assert!(!record.conflicts_with("98765432109", "second"));
    }

    #[test]
    fn test_matches() {
        let record = BarcodeRecord::new("12345678901", "Coffee Beans", "img");

        assert!(record.matches(""));
        assert!(record.matches("coffee"));
        assert!(record.matches("BEANS"));
        assert!(record.matches("4567"));
        assert!(!record.matches("tea"));
        assert!(!record.matches("999"));
    }
}
