//! # Task View State
//!
//! The cached task list plus every derivation the views render: search and
//! status filtering, dashboard statistics, the urgent preview, and the
//! flattened recent-activity feed. Filtering is purely client-side; the
//! server returns the full list.

use crate::cache::QueryStatus;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use taskflow_types::{Task, TaskStatus};

/// How many tasks the dashboard's urgent preview shows.
const URGENT_PREVIEW_LEN: usize = 3;
/// How many entries the dashboard's recent-activity feed shows.
const RECENT_ACTIVITY_LEN: usize = 5;

/// Status filter of the task list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TaskStatus),
}

impl StatusFilter {
    /// Every filter choice in the order the dropdown renders.
    #[must_use]
    pub fn choices() -> Vec<StatusFilter> {
        let mut choices = vec![Self::All];
        choices.extend(TaskStatus::ALL.into_iter().map(Self::Only));
        choices
    }

    #[must_use]
    pub fn matches(&self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All Status"),
            Self::Only(status) => write!(f, "{status}"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" || s == "All Status" {
            return Ok(Self::All);
        }
        s.parse::<TaskStatus>().map(Self::Only)
    }
}

/// Dashboard headline numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    /// Tasks in any status other than Completed.
    pub open: usize,
    pub completed: usize,
}

impl TaskStats {
    /// Completed share as a whole percentage; 0 when there are no tasks.
    #[must_use]
    pub fn completion_rate(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
    }
}

/// One row of the dashboard's cross-task activity feed.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityFeedEntry {
    pub task_id: String,
    pub task_title: String,
    pub details: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// The cached `GET /tasks` query and its derivations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TasksState {
    pub status: QueryStatus,
    pub items: Vec<Task>,
}

impl TasksState {
    /// Apply the text search and status filter.
    ///
    /// The search matches case-insensitively against title and
    /// description; an empty query matches everything.
    #[must_use]
    pub fn filtered(&self, query: &str, filter: StatusFilter) -> Vec<&Task> {
        let needle = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|task| {
                let matches_search = needle.is_empty()
                    || task.title.to_lowercase().contains(&needle)
                    || task
                        .description
                        .as_ref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle));
                matches_search && filter.matches(task.status)
            })
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> TaskStats {
        let total = self.items.len();
        let completed = self
            .items
            .iter()
            .filter(|task| task.status == TaskStatus::Completed)
            .count();
        TaskStats {
            total,
            open: total - completed,
            completed,
        }
    }

    /// High/Urgent tasks that are not completed, first three in list order.
    #[must_use]
    pub fn urgent_preview(&self) -> Vec<&Task> {
        self.items
            .iter()
            .filter(|task| task.priority.needs_attention() && task.status.is_open())
            .take(URGENT_PREVIEW_LEN)
            .collect()
    }

    /// Activity entries across all tasks, newest first, capped for the
    /// dashboard feed.
    #[must_use]
    pub fn recent_activity(&self) -> Vec<ActivityFeedEntry> {
        let mut entries: Vec<ActivityFeedEntry> = self
            .items
            .iter()
            .flat_map(|task| {
                task.activity.iter().map(|entry| ActivityFeedEntry {
                    task_id: task.id.clone(),
                    task_title: task.title.clone(),
                    details: entry.details.clone(),
                    author: entry.author.username.clone(),
                    created_at: entry.created_at,
                })
            })
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries.truncate(RECENT_ACTIVITY_LEN);
        entries
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.items.iter().find(|task| task.id == task_id)
    }

    /// Idempotent merge of a pushed task: replaces an existing entry with
    /// the same id, otherwise prepends. A no-op while the query has never
    /// loaded, so a stale push cannot fake a loaded list.
    pub(crate) fn upsert(&mut self, task: Task) {
        if !self.status.is_loaded() {
            return;
        }
        match self.items.iter_mut().find(|existing| existing.id == task.id) {
            Some(existing) => *existing = task,
            None => self.items.insert(0, task),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use taskflow_types::TaskPriority;

    fn task(id: &str, title: &str, status: TaskStatus, priority: TaskPriority) -> Task {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "title": title,
            "description": format!("about {title}"),
            "status": status.as_str(),
            "priority": priority.as_str(),
            "createdAt": "2024-05-01T10:00:00Z"
        }))
        .expect("task should build")
    }

    fn loaded(items: Vec<Task>) -> TasksState {
        TasksState {
            status: QueryStatus::Loaded,
            items,
        }
    }

    #[test]
    fn empty_query_yields_full_set() {
        let state = loaded(vec![
            task("t1", "Write docs", TaskStatus::ToDo, TaskPriority::Low),
            task("t2", "Fix login", TaskStatus::Review, TaskPriority::High),
        ]);
        assert_eq!(state.filtered("", StatusFilter::All).len(), 2);
    }

    #[test]
    fn unmatched_query_yields_empty_set() {
        let state = loaded(vec![task(
            "t1",
            "Write docs",
            TaskStatus::ToDo,
            TaskPriority::Low,
        )]);
        assert!(state.filtered("zeppelin", StatusFilter::All).is_empty());
    }

    #[test]
    fn search_matches_description_case_insensitively() {
        let state = loaded(vec![
            task("t1", "Write docs", TaskStatus::ToDo, TaskPriority::Low),
            task("t2", "Fix login", TaskStatus::Review, TaskPriority::High),
        ]);
        let hits = state.filtered("ABOUT FIX", StatusFilter::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "t2");
    }

    #[test]
    fn status_filter_is_exact_match() {
        let state = loaded(vec![
            task("t1", "Write docs", TaskStatus::ToDo, TaskPriority::Low),
            task("t2", "Fix login", TaskStatus::Review, TaskPriority::High),
        ]);
        let hits = state.filtered("", StatusFilter::Only(TaskStatus::Review));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "t2");
    }

    #[test]
    fn stats_count_open_and_completed() {
        let state = loaded(vec![
            task("t1", "a", TaskStatus::ToDo, TaskPriority::Low),
            task("t2", "b", TaskStatus::Completed, TaskPriority::Low),
            task("t3", "c", TaskStatus::InProgress, TaskPriority::Low),
            task("t4", "d", TaskStatus::Completed, TaskPriority::Low),
        ]);
        let stats = state.stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.open, 2);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.completion_rate(), 50);
    }

    #[test]
    fn completion_rate_handles_empty_list() {
        assert_eq!(TasksState::default().stats().completion_rate(), 0);
    }

    #[test]
    fn urgent_preview_excludes_completed_and_caps_at_three() {
        let state = loaded(vec![
            task("t1", "a", TaskStatus::ToDo, TaskPriority::Urgent),
            task("t2", "b", TaskStatus::Completed, TaskPriority::Urgent),
            task("t3", "c", TaskStatus::ToDo, TaskPriority::High),
            task("t4", "d", TaskStatus::Review, TaskPriority::High),
            task("t5", "e", TaskStatus::ToDo, TaskPriority::Urgent),
            task("t6", "f", TaskStatus::ToDo, TaskPriority::Medium),
        ]);
        let urgent: Vec<&str> = state
            .urgent_preview()
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(urgent, vec!["t1", "t3", "t4"]);
    }

    #[test]
    fn recent_activity_is_sorted_newest_first_and_capped() {
        let mut a = task("t1", "Alpha", TaskStatus::ToDo, TaskPriority::Low);
        let mut b = task("t2", "Beta", TaskStatus::ToDo, TaskPriority::Low);
        for (task_ref, hours) in [(&mut a, [1u32, 3, 5]), (&mut b, [2, 4, 6])] {
            for h in hours {
                task_ref.activity.push(
                    serde_json::from_value(serde_json::json!({
                        "type": "status",
                        "details": format!("moved at {h}"),
                        "userId": {"_id": "u1", "username": "ada"},
                        "createdAt": Utc.with_ymd_and_hms(2024, 5, 1, h, 0, 0)
                            .single()
                            .expect("valid")
                            .to_rfc3339()
                    }))
                    .expect("activity should build"),
                );
            }
        }
        let state = loaded(vec![a, b]);
        let feed = state.recent_activity();
        assert_eq!(feed.len(), 5);
        assert_eq!(feed[0].details, "moved at 6");
        assert_eq!(feed[0].task_title, "Beta");
        assert!(feed.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn upsert_replaces_by_id_and_prepends_new() {
        let mut state = loaded(vec![task("t1", "a", TaskStatus::ToDo, TaskPriority::Low)]);
        let mut updated = task("t1", "a2", TaskStatus::Review, TaskPriority::Low);
        updated.description = None;
        state.upsert(updated);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].title, "a2");

        state.upsert(task("t9", "new", TaskStatus::ToDo, TaskPriority::Low));
        assert_eq!(state.items[0].id, "t9");
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn upsert_is_a_noop_before_first_load() {
        let mut state = TasksState::default();
        state.upsert(task("t1", "a", TaskStatus::ToDo, TaskPriority::Low));
        assert!(state.items.is_empty());
    }
}
