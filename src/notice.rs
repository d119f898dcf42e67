use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Most notices kept on screen at once; older ones are dropped first.
pub const MAX_NOTICES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
    pub created_at: Instant,
}

/// Best-effort toast queue. Nothing is persisted or acknowledged.
#[derive(Debug)]
pub struct NoticeBoard {
    notices: VecDeque<Notice>,
    ttl: Duration,
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self {
            notices: VecDeque::new(),
            ttl,
        }
    }

    pub fn info(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(NoticeKind::Info, title.into(), description.into());
    }

    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(NoticeKind::Error, title.into(), description.into());
    }

    fn push(&mut self, kind: NoticeKind, title: String, description: String) {
        log::debug!("Notice: {title} - {description}");
        self.notices.push_back(Notice {
            title,
            description,
            kind,
            created_at: Instant::now(),
        });
        while self.notices.len() > MAX_NOTICES {
            self.notices.pop_front();
        }
    }

    /// Drops expired notices and returns the rest, oldest first.
    pub fn visible(&mut self, now: Instant) -> impl Iterator<Item = &Notice> {
        let ttl = self.ttl;
        self.notices
            .retain(|notice| now.saturating_duration_since(notice.created_at) < ttl);
        self.notices.iter()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.back()
    }
}
