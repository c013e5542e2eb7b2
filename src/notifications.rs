//! User-visible notices.
//!
//! The editor never renders anything itself; it queues notices and the host
//! drains and displays them. Blocking notices must be acknowledged by the
//! user before the host continues (an alert dialog in a browser).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Assigned by the manager on push; 0 until then.
    pub id: u64,
    pub message: String,
    pub level: NoticeLevel,
    pub blocking: bool,
}

impl Notice {
    fn new(message: impl Into<String>, level: NoticeLevel) -> Self {
        Self {
            id: 0,
            message: message.into(),
            level,
            blocking: false,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NoticeLevel::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NoticeLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NoticeLevel::Error)
    }

    pub fn blocking(mut self) -> Self {
        self.blocking = true;
        self
    }
}

#[derive(Debug, Default)]
pub struct NoticeManager {
    notices: Vec<Notice>,
    last_id: u64,
}

impl NoticeManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notice and return the id it was given.
    pub fn push(&mut self, mut notice: Notice) -> u64 {
        self.last_id += 1;
        notice.id = self.last_id;
        self.notices.push(notice);
        self.last_id
    }

    pub fn count(&self) -> usize {
        self.notices.len()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn remove(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }

    /// Hand all queued notices to the host.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn has_blocking(&self) -> bool {
        self.notices.iter().any(|n| n.blocking)
    }
}
