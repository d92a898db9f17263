//! # View Reducer
//!
//! The single place view state changes. Frontends hold `ViewState` behind
//! one reactive signal and call [`reduce`] inside its update closure, so
//! every view observes the same task list and notification feed instead of
//! keeping partial copies.
//!
//! Push events land here too. Delivery order is applied as-is; duplicates
//! and re-deliveries collapse through the id-keyed merges in the view
//! state, so a flaky transport degrades gracefully instead of growing the
//! feed.

use crate::cache::QueryStatus;
use crate::core::Update;
use crate::views::{FeedEntry, SessionState, ViewState};
use taskflow_types::PushEvent;

/// Apply one update to the view state.
pub fn reduce(state: &mut ViewState, update: Update) {
    match update {
        // Session
        Update::SessionResolved(Some(user)) => {
            state.session = SessionState::Authenticated(user);
        }
        Update::SessionResolved(None) => {
            state.session = SessionState::Unauthenticated;
        }
        Update::SessionEstablished(user) => {
            state.session = SessionState::Authenticated(user);
        }
        Update::SessionCleared => {
            state.clear_session_scope();
        }
        Update::ProfileMerged(patch) => {
            if let SessionState::Authenticated(user) = &mut state.session {
                user.apply_patch(&patch);
            }
        }
        Update::SessionReplaced(user) => {
            if state.session.is_authenticated() {
                state.session = SessionState::Authenticated(user);
            }
        }

        // Task query
        Update::TasksLoading => {
            state.tasks.status = QueryStatus::Loading;
        }
        Update::TasksLoaded(tasks) => {
            state.tasks.status = QueryStatus::Loaded;
            state.tasks.items = tasks;
        }
        Update::TasksFailed(message) => {
            state.tasks.status = QueryStatus::Failed(message);
        }

        // Notification query
        Update::NotificationsLoading => {
            state.notifications.status = QueryStatus::Loading;
        }
        Update::NotificationsLoaded(notifications) => {
            state.notifications.status = QueryStatus::Loaded;
            state.notifications.items = notifications;
        }
        Update::NotificationsFailed(message) => {
            state.notifications.status = QueryStatus::Failed(message);
        }
        Update::NotificationRead(id) => {
            state.notifications.mark_read(&id);
        }
        Update::AllNotificationsRead => {
            state.notifications.mark_all_read();
        }

        // Real-time
        Update::Push(event) => apply_push(state, event),
        Update::FeedCleared => state.notifications.clear_feed(),

        // Notices
        Update::Notice { level, message } => {
            state.push_notice(level, message);
        }
        Update::NoticeDismissed(id) => {
            state.notices.retain(|notice| notice.id != id);
        }
    }
}

/// Fold a push event into the task cache, the inbox, and the recent feed.
fn apply_push(state: &mut ViewState, event: PushEvent) {
    match event {
        PushEvent::TaskCreated { task, received_at } => {
            state.notifications.push_feed(FeedEntry {
                id: format!("task-created:{}", task.id),
                text: format!("New task: \"{}\"", task.title),
                at: received_at,
            });
            state.tasks.upsert(task);
        }
        PushEvent::TaskUpdated { task, received_at } => {
            // Activity is append-only, so its length fingerprints the
            // revision: a re-delivered update collapses, a genuinely new
            // one gets its own feed entry.
            state.notifications.push_feed(FeedEntry {
                id: format!("task-updated:{}:{}", task.id, task.activity.len()),
                text: format!("Task \"{}\" was updated", task.title),
                at: received_at,
            });
            state.tasks.upsert(task);
        }
        PushEvent::NotificationCreated {
            notification,
            received_at,
        } => {
            state.notifications.push_feed(FeedEntry {
                id: format!("notification:{}", notification.id),
                text: notification.text.clone(),
                at: received_at,
            });
            state.notifications.merge_new(notification);
        }
    }
}
