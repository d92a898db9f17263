//! # Updates
//!
//! Every way the view state can change. Workflows emit these; the frontend
//! dispatches them into [`super::reduce`]. Nothing else mutates
//! [`crate::ViewState`].

use crate::views::NoticeLevel;
use taskflow_types::{Notification, ProfilePatch, PushEvent, Task, User};

#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    // =========================================================================
    // Session
    // =========================================================================
    /// Bootstrap probe resolved: `Some` adopts the user, `None` settles on
    /// unauthenticated.
    SessionResolved(Option<User>),
    /// Login or registration succeeded.
    SessionEstablished(User),
    /// Logout: unconditionally drops the session, cached queries, and the
    /// push feed, regardless of whether the server call succeeded.
    SessionCleared,
    /// Local-only merge of profile edits into the session user.
    ProfileMerged(ProfilePatch),
    /// Server-confirmed replacement of the session user.
    SessionReplaced(User),

    // =========================================================================
    // Task query
    // =========================================================================
    TasksLoading,
    TasksLoaded(Vec<Task>),
    TasksFailed(String),

    // =========================================================================
    // Notification query
    // =========================================================================
    NotificationsLoading,
    NotificationsLoaded(Vec<Notification>),
    NotificationsFailed(String),
    /// Direct cache write: one read flag flips.
    NotificationRead(String),
    /// Direct cache write: every read flag flips.
    AllNotificationsRead,

    // =========================================================================
    // Real-time
    // =========================================================================
    /// A push event arrived on the channel.
    Push(PushEvent),
    /// The user cleared the recent feed from the dropdown.
    FeedCleared,

    // =========================================================================
    // Notices
    // =========================================================================
    Notice {
        level: NoticeLevel,
        message: String,
    },
    NoticeDismissed(u64),
}

impl Update {
    /// Convenience constructor for transient notices.
    pub fn notice(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self::Notice {
            level,
            message: message.into(),
        }
    }
}
