//! Download command - write a stored barcode image back to disk.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::commands::default_image_path;
use crate::models::BarcodeRecord;
use crate::render::decode_data_uri;
use crate::storage::{HistoryQuery, HistoryStore};


/// Run the download command.
///
/// `selector` is a 1-based position in the (optionally filtered) history
/// listing, a barcode number or a name.
pub fn run(
    store: &HistoryStore,
    selector: &str,
    search: Option<&str>,
    output: Option<PathBuf>,
) -> Result<PathBuf> {
    let results = store.query(search.unwrap_or(""));

    let record = select(&results, selector)
        .with_context(|| format!("No barcode in history matches '{}'", selector))?;

    let png = decode_data_uri(&record.image)
        .with_context(|| format!("Stored image for '{}' is not readable", record.label))?;

    let output_path = output.unwrap_or_else(|| default_image_path(&record.label));
    std::fs::write(&output_path, png)
        .with_context(|| format!("Failed to write image to {}", output_path.display()))?;

    println!("\x1b[32m+ Downloaded '{}' to: {}\x1b[0m", record.label, output_path.display());

    Ok(output_path)
}


/// Pick a record by listing position, then by number, then by name.
fn select<'a>(results: &'a HistoryQuery, selector: &str) -> Option<&'a BarcodeRecord> {
    let selector = selector.trim();

    if let Ok(position) = selector.parse::<usize>() {
        if let Some(record) = position.checked_sub(1).and_then(|i| results.get(i)) {
            return Some(record);
        }
    }

    results
        .iter()
        .find(|r| r.code == selector)
        .or_else(|| results.iter().find(|r| r.label == selector))
}
