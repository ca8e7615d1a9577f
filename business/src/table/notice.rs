#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A blocking notification the user has to dismiss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Records waiting for the user's confirmation before a bulk delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub ids: Vec<i64>,
    /// One line of key fields per selected record.
    pub lines: Vec<String>,
}

impl PendingDelete {
    pub fn prompt(&self, noun: &str) -> String {
        format!("Delete the following {} {noun}?", self.lines.len())
    }
}
