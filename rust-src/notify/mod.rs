//! User-facing alerts raised by the history store and commands.

mod notifier;

pub use notifier::{
    Notice,
    NoticeBoard,
    Notifier,
    TerminalNotifier,
    MSG_CLEAR_FAILED,
    MSG_CLEARED,
    MSG_DUPLICATE,
    MSG_INVALID_CODE,
    MSG_SAVE_FAILED,
};
