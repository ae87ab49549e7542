// web_app/model/notice.rs - User-visible notices
//
// The root component owns one NoticeQueue inside a signal; pages push
// success/error messages into it after loads, deletes and submits.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of notices kept on screen
pub const MAX_NOTICES: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub id: Uuid,
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeQueue {
    notices: Vec<Notice>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notice, dropping the oldest ones past MAX_NOTICES
    pub fn push(&mut self, notice: Notice) -> Uuid {
        let id = notice.id;
        self.notices.push(notice);
        if self.notices.len() > MAX_NOTICES {
            let overflow = self.notices.len() - MAX_NOTICES;
            self.notices.drain(..overflow);
        }
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> Uuid {
        self.push(Notice::new(NoticeLevel::Success, message))
    }

    pub fn error(&mut self, message: impl Into<String>) -> Uuid {
        self.push(Notice::new(NoticeLevel::Error, message))
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = NoticeQueue::new();
        let first = queue.success("Customer saved");
        let second = queue.error("Could not delete the invoice");
        assert_eq!(queue.notices().len(), 2);

        queue.dismiss(first);
        assert_eq!(queue.notices().len(), 1);
        assert_eq!(queue.notices()[0].id, second);
        assert_eq!(queue.notices()[0].level, NoticeLevel::Error);
    }

    #[test]
    fn test_queue_keeps_most_recent() {
        let mut queue = NoticeQueue::new();
        for i in 0..(MAX_NOTICES + 3) {
            queue.success(format!("notice {}", i));
        }
        assert_eq!(queue.notices().len(), MAX_NOTICES);
        assert_eq!(queue.notices()[0].message, "notice 3");
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let mut queue = NoticeQueue::new();
        queue.success("kept");
        queue.dismiss(Uuid::new_v4());
        assert!(!queue.is_empty());
    }
}
