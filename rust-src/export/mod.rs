//! Export of the barcode history to CSV.

mod csv;

pub use csv::{history_to_csv, write_history_csv, CSV_HEADER};
