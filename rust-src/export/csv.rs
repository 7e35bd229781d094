//! CSV serialization of history rows.
//!
//! Fields are joined with commas and never quoted, so a label containing a
//! comma produces an extra column. Image payloads are written as-is and are
//! usually very long.

use std::path::Path;

use anyhow::{Context, Result};

use crate::storage::ExportRow;


pub const CSV_HEADER: [&str; 3] = ["Barcode", "Name", "Image Data"];


/// Render rows as CSV text: header line then one line per row.
pub fn history_to_csv(rows: &[ExportRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(CSV_HEADER.join(","));

    for row in rows {
        lines.push([row.code.as_str(), row.label.as_str(), row.image.as_str()].join(","));
    }

    lines.join("\n")
}


/// Write rows as CSV to a file.
pub fn write_history_csv(rows: &[ExportRow], output_path: &Path) -> Result<()> {
    std::fs::write(output_path, history_to_csv(rows))
        .with_context(|| format!("Failed to write CSV to {}", output_path.display()))?;

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn row(code: &str, label: &str, image: &str) -> ExportRow {
        ExportRow {
            code: code.to_string(),
            label: label.to_string(),
            image: image.to_string(),
        }
    }

    #[test]
    fn test_empty_history_is_header_only() {
        assert_eq!(history_to_csv(&[]), "Barcode,Name,Image Data");
    }

    #[test]
    fn test_rows() {
        let csv = history_to_csv(&[
            row("12345678901", "first", "data:image/png;base64,AA=="),
            row("98765432109", "second", "data:image/png;base64,BB=="),
        ]);

        assert_eq!(
            csv,
            "Barcode,Name,Image Data\n\
             12345678901,first,data:image/png;base64,AA==\n\
             98765432109,second,data:image/png;base64,BB=="
        );
    }

    #[test]
    fn test_commas_are_not_escaped() {
        let csv = history_to_csv(&[row("12345678901", "a,b", "img")]);
        assert_eq!(csv.lines().nth(1).unwrap(), "12345678901,a,b,img");
    }

    #[test]
    fn test_write_history_csv() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join("barcode_history.csv");

        write_history_csv(&[row("12345678901", "first", "img")], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Barcode,Name,Image Data\n"));
    }
}
