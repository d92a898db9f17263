//! # Notification View State
//!
//! Three related surfaces:
//!
//! - the persisted notification inbox fetched from the server
//! - the capped recent feed fed by push events (the bell dropdown)
//! - transient dismissible notices (toasts)
//!
//! The push channel gives no deduplication guarantee beyond the
//! transport's own, so every merge here is idempotent by id.

use crate::cache::QueryStatus;
use chrono::{DateTime, Utc};
use taskflow_types::Notification;

/// Maximum entries kept in the recent push feed.
pub const FEED_CAP: usize = 10;

/// Severity of a transient notice, which determines its visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A dismissible transient notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// One entry of the recent push feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    /// Content-derived key; duplicate deliveries collapse onto it.
    pub id: String,
    pub text: String,
    pub at: DateTime<Utc>,
}

/// The notification inbox plus the recent push feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationsState {
    pub status: QueryStatus,
    /// Persisted notifications, newest first (server order).
    pub items: Vec<Notification>,
    /// Push-derived recent entries, newest first, capped at [`FEED_CAP`].
    pub feed: Vec<FeedEntry>,
}

impl NotificationsState {
    /// Number of unread persisted notifications.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Flip the read flag of exactly one notification. Unknown ids are
    /// ignored (the inbox may have been refetched in between).
    pub(crate) fn mark_read(&mut self, id: &str) {
        if let Some(notification) = self.items.iter_mut().find(|n| n.id == id) {
            notification.read = true;
        }
    }

    pub(crate) fn mark_all_read(&mut self) {
        for notification in &mut self.items {
            notification.read = true;
        }
    }

    /// Idempotent prepend of a pushed notification.
    pub(crate) fn merge_new(&mut self, notification: Notification) {
        if self.items.iter().any(|n| n.id == notification.id) {
            return;
        }
        self.items.insert(0, notification);
    }

    /// Idempotent prepend into the capped feed.
    pub(crate) fn push_feed(&mut self, entry: FeedEntry) {
        if self.feed.iter().any(|existing| existing.id == entry.id) {
            return;
        }
        self.feed.insert(0, entry);
        self.feed.truncate(FEED_CAP);
    }

    pub(crate) fn clear_feed(&mut self) {
        self.feed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use taskflow_types::NotificationKind;

    fn notification(id: &str, read: bool) -> Notification {
        Notification {
            id: id.into(),
            text: format!("notification {id}"),
            kind: NotificationKind::System,
            read,
            created_at: Utc
                .with_ymd_and_hms(2024, 5, 1, 10, 0, 0)
                .single()
                .expect("valid timestamp"),
        }
    }

    fn entry(id: &str) -> FeedEntry {
        FeedEntry {
            id: id.into(),
            text: format!("feed {id}"),
            at: Utc
                .with_ymd_and_hms(2024, 5, 1, 10, 0, 0)
                .single()
                .expect("valid timestamp"),
        }
    }

    #[test]
    fn mark_read_touches_exactly_one() {
        let mut state = NotificationsState {
            status: QueryStatus::Loaded,
            items: vec![notification("n1", false), notification("n2", false)],
            feed: Vec::new(),
        };
        assert_eq!(state.unread_count(), 2);
        state.mark_read("n1");
        assert_eq!(state.unread_count(), 1);
        assert!(state.items[0].read);
        assert!(!state.items[1].read);
    }

    #[test]
    fn mark_all_read_zeroes_unread() {
        let mut state = NotificationsState {
            status: QueryStatus::Loaded,
            items: vec![notification("n1", false), notification("n2", true)],
            feed: Vec::new(),
        };
        state.mark_all_read();
        assert_eq!(state.unread_count(), 0);
    }

    #[test]
    fn merge_new_is_idempotent() {
        let mut state = NotificationsState::default();
        state.merge_new(notification("n1", false));
        state.merge_new(notification("n1", false));
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn feed_dedupes_and_caps() {
        let mut state = NotificationsState::default();
        for i in 0..(FEED_CAP + 3) {
            state.push_feed(entry(&format!("e{i}")));
        }
        state.push_feed(entry(&format!("e{}", FEED_CAP + 2)));
        assert_eq!(state.feed.len(), FEED_CAP);
        assert_eq!(state.feed[0].id, format!("e{}", FEED_CAP + 2));
    }
}
