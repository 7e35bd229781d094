//! Notification surface: a message shown to the user for a short time.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::config::NOTICE_DISMISS_SECS;


pub const MSG_DUPLICATE: &str = "Barcode exists! Please check your history.";
pub const MSG_SAVE_FAILED: &str = "Failed to save barcode";
pub const MSG_CLEARED: &str = "Barcode history cleared successfully.";
pub const MSG_CLEAR_FAILED: &str = "Failed to clear barcode history.";
pub const MSG_INVALID_CODE: &str = "Please enter a valid 11-digit number.";


/// Receives alerts. Implementations decide how and where to show them.
pub trait Notifier {
    fn notify(&self, message: &str);
}


/// Prints alerts to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        eprintln!("\x1b[1m\x1b[33m! {message}\x1b[0m");
    }
}


/// A single alert with the moment it was raised.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub raised_at: Instant,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            raised_at: Instant::now(),
        }
    }

    /// Whether the alert has been visible long enough to be dismissed.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) >= Duration::from_secs(NOTICE_DISMISS_SECS)
    }
}


/// Holds at most one live alert; a new alert replaces the previous one.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    current: Mutex<Option<Notice>>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The alert that should be on screen right now, if any.
    pub fn current(&self) -> Option<Notice> {
        self.current_at(Instant::now())
    }

    pub fn current_at(&self, now: Instant) -> Option<Notice> {
        let mut slot = self.current.lock().unwrap_or_else(|e| e.into_inner());
        if slot.as_ref().is_some_and(|n| n.is_expired_at(now)) {
            *slot = None;
        }
        slot.clone()
    }

    pub fn dismiss(&self) {
        *self.current.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

impl Notifier for NoticeBoard {
    fn notify(&self, message: &str) {
        *self.current.lock().unwrap_or_else(|e| e.into_inner()) = Some(Notice::new(message));
    }
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn notify(&self, message: &str) {
        (**self).notify(message);
    }
}
