//! UPC barcode generation with a bounded, searchable history.
//!
//! The [`storage::HistoryStore`] owns `barcodes.json`; the [`commands`] turn
//! user actions into store calls.

pub mod cli;
pub mod commands;
pub mod config;
pub mod export;
pub mod models;
pub mod notify;
pub mod render;
pub mod storage;
