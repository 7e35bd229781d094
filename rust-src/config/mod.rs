//! Configuration and settings for the barcode generator.

mod settings;

pub use settings::{
    default_data_dir,
    default_label,
    history_path,
    CSV_EXPORT_FILE_NAME,
    DATA_DIR_ENV,
    HISTORY_FILE_NAME,
    LOG_ENV,
    MAX_HISTORY_ENTRIES,
    NOTICE_DISMISS_SECS,
    UPC_INPUT_DIGITS,
};
