//! CLI command implementations.

pub mod clear;
pub mod download;
pub mod export;
pub mod generate;
pub mod history;

use std::path::{Path, PathBuf};

use crate::config::history_path;
use crate::notify::TerminalNotifier;
use crate::storage::HistoryStore;


/// Open the history store inside a data directory, alerting on the terminal.
pub fn open_store(data_dir: &Path) -> HistoryStore {
    HistoryStore::open(history_path(data_dir), Box::new(TerminalNotifier))
}


/// Default image path for a label: `<label>.png` in the working directory.
///
/// Path separators and other characters not allowed in file names become `_`.
pub fn default_image_path(label: &str) -> PathBuf {
    let stem: String = label
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let stem = match stem.trim() {
        "" | "." | ".." => "barcode",
        trimmed => trimmed,
    };

    PathBuf::from(format!("{stem}.png"))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_image_path_plain_label() {
        assert_eq!(default_image_path("coffee beans"), PathBuf::from("coffee beans.png"));
    }

    #[test]
    fn test_default_image_path_replaces_separators() {
        assert_eq!(default_image_path("Shelf A/B"), PathBuf::from("Shelf A_B.png"));
        assert_eq!(default_image_path(r"a\b:c*d?e"), PathBuf::from("a_b_c_d_e.png"));
        assert_eq!(default_image_path("<x>|\"y\""), PathBuf::from("_x___y_.png"));
        assert_eq!(default_image_path("line\nbreak"), PathBuf::from("line_break.png"));
    }

    #[test]
    fn test_default_image_path_never_escapes_working_dir() {
        assert_eq!(default_image_path("../../etc"), PathBuf::from(".._.._etc.png"));
        assert_eq!(default_image_path(".."), PathBuf::from("barcode.png"));
        assert_eq!(default_image_path("  "), PathBuf::from("barcode.png"));
    }
}
