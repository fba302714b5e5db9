use chrono::NaiveDate;

use crate::message::{NoticeKind, Page};

/// Delivers user-facing notifications (toasts, log lines, ...).
///
/// Fire-and-forget: implementations must not block the caller.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, title: &str, message: &str);
}

/// Presents a page after the shell routes to it.
pub trait Navigator: Send + Sync {
    fn navigate(&self, page: Page);
}

/// Source of "today" for the date picker rules.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock frozen on one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
