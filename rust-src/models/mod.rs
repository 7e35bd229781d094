//! Data models for barcode history entries.

mod barcode_record;
mod upc_code;

pub use barcode_record::BarcodeRecord;
pub use upc_code::{CodeError, UpcCode};
