use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Recoverable,
    Fatal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn recoverable(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Recoverable,
            message: message.into(),
        }
    }

    pub fn fatal(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Fatal,
            message: message.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Notices {
    pending: Vec<Notice>,
    fatal: Option<Notice>,
}

impl Notices {
    pub fn push(&mut self, notice: Notice) {
        match notice.severity {
            Severity::Recoverable => self.pending.push(notice),
            Severity::Fatal => self.fatal = Some(notice),
        }
    }

    pub fn clear_fatal(&mut self) {
        self.fatal = None;
    }

    pub fn is_blocked(&self) -> bool {
        self.fatal.is_some()
    }

    /// Everything to show right now, fatal first.
    pub fn visible(&self) -> Vec<Notice> {
        self.fatal.iter().chain(&self.pending).cloned().collect()
    }

    /// Like [`Notices::visible`], but recoverable notices are consumed.
    pub fn take(&mut self) -> Vec<Notice> {
        let shown = self.visible();
        self.pending.clear();
        shown
    }
}
