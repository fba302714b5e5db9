use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Info,
    /// Advisory problem the user can fix (e.g. a missing field).
    Error,
}

/// A non-blocking notification delivered through a `Notifier`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Logical pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Landing page with the service list.
    Services,
    /// Booking form for the selected service.
    Booking,
    Confirmation,
    About,
    Contact,
}

impl Page {
    /// Route path, as linked from the navigation bar.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Services => "/",
            Self::Booking => "/book",
            Self::Confirmation => "/book/confirmed",
            Self::About => "/about",
            Self::Contact => "/contact",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
