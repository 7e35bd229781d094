//! Storage layer for the barcode history.

mod history;

pub use history::{
    ExportRow,
    HistoryQuery,
    HistoryStore,
    InsertOutcome,
    StoreError,
};
