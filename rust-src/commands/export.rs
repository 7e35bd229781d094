//! Export command - write the barcode history as CSV.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::CSV_EXPORT_FILE_NAME;
use crate::export::write_history_csv;
use crate::storage::HistoryStore;


/// Run the export command.
pub fn run(store: &HistoryStore, output: Option<PathBuf>) -> Result<PathBuf> {
    let rows = store.export_all();
    let output_path = output.unwrap_or_else(|| PathBuf::from(CSV_EXPORT_FILE_NAME));

    println!("Exporting {} barcodes...", rows.len());
    write_history_csv(&rows, &output_path)?;

    println!("\x1b[32m+ Exported to: {}\x1b[0m", output_path.display());

    Ok(output_path)
}
