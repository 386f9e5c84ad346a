//! Popup notification contract.
//!
//! The form core only knows `Notifier::notify(kind, title, message)`. How the
//! notice is shown (terminal popup, log line, test recorder) is up to the
//! implementation.

use std::fmt;

/// Visual style of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Warning,
    Success,
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NoticeKind::Error => "error",
            NoticeKind::Warning => "warning",
            NoticeKind::Success => "success",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
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

    /// Greeting shown after a successful submit.
    pub fn welcome(name: &str) -> Self {
        Self::new(
            NoticeKind::Success,
            "Signup Successful!",
            format!("Welcome {}!", name),
        )
    }
}

/// Fire-and-forget sink for user-facing notices.
pub trait Notifier {
    fn notify(&mut self, kind: NoticeKind, title: &str, message: &str);

    fn notify_notice(&mut self, notice: &Notice) {
        self.notify(notice.kind, &notice.title, &notice.message);
    }
}
