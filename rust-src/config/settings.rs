//! Application settings and path constants.

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};


/// Maximum number of barcodes kept in the history file.
pub const MAX_HISTORY_ENTRIES: usize = 50;

/// File name of the history inside the data directory.
pub const HISTORY_FILE_NAME: &str = "barcodes.json";

/// Default file name for CSV exports.
pub const CSV_EXPORT_FILE_NAME: &str = "barcode_history.csv";

/// Seconds an alert stays visible before it is dismissed.
pub const NOTICE_DISMISS_SECS: u64 = 5;

/// Number of digits the user enters (the check digit is computed).
pub const UPC_INPUT_DIGITS: usize = 11;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "UPCB_DATA_DIR";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "UPCB_LOG";

const APP_DIR_NAME: &str = "upc-barcode-generator";


/// Get the per-user application data directory.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}


/// Get the history file path inside a data directory.
pub fn history_path(data_dir: &Path) -> PathBuf {
    data_dir.join(HISTORY_FILE_NAME)
}


/// Build the label used when the user does not name a barcode.
///
/// The ISO-8601 timestamp has `:`, `.` and `-` replaced so the label is
/// usable as a file name.
pub fn default_label(now: DateTime<Utc>) -> String {
    let stamp = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.', '-'], "_");
    format!("barcode_{stamp}")
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_constants() {
        assert_eq!(MAX_HISTORY_ENTRIES, 50);
        assert_eq!(HISTORY_FILE_NAME, "barcodes.json");
        assert_eq!(NOTICE_DISMISS_SECS, 5);
        assert_eq!(UPC_INPUT_DIGITS, 11);
    }

    #[test]
    fn test_default_data_dir() {
        let dir = default_data_dir();
        assert!(dir.to_string_lossy().contains(APP_DIR_NAME));
    }

    #[test]
    fn test_history_path() {
        let path = history_path(Path::new("/tmp/upcb"));
        assert_eq!(path, PathBuf::from("/tmp/upcb/barcodes.json"));
    }

    #[test]
    fn test_default_label() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(default_label(now), "barcode_2024_03_09T14_05_07_000Z");
    }
}
