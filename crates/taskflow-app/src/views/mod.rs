//! # View State
//!
//! The state every view renders from. There is exactly one `ViewState`
//! per running app, held behind a reactive signal by the frontend and
//! mutated only through [`crate::core::reduce`].

pub mod notifications;
pub mod session;
pub mod tasks;

pub use notifications::{FeedEntry, Notice, NoticeLevel, NotificationsState, FEED_CAP};
pub use session::SessionState;
pub use tasks::{ActivityFeedEntry, StatusFilter, TaskStats, TasksState};

/// Aggregate application state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub session: SessionState,
    pub tasks: TasksState,
    pub notifications: NotificationsState,
    /// Dismissible transient notices (toasts), newest last.
    pub notices: Vec<Notice>,
    /// Monotonic id source for notices.
    pub(crate) next_notice_id: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything scoped to a session: who is logged in, cached
    /// queries, and the real-time feed. Notices survive so "Logged out"
    /// style messages remain visible.
    pub(crate) fn clear_session_scope(&mut self) {
        self.session = SessionState::Unauthenticated;
        self.tasks = TasksState::default();
        self.notifications = NotificationsState::default();
    }

    pub(crate) fn push_notice(&mut self, level: NoticeLevel, message: String) {
        let id = self.next_notice_id;
        self.next_notice_id += 1;
        self.notices.push(Notice { id, level, message });
    }
}
