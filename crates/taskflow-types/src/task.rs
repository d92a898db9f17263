//! # Task Types
//!
//! The task aggregate as served by `GET /tasks`: the task itself plus its
//! ordered comment list and append-only activity log. Status and priority
//! are closed enumerations; anything else on the wire is a decode error.

use crate::user::UserSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Status
// ============================================================================

/// Workflow column a task sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    Review,
    Completed,
}

impl TaskStatus {
    /// All statuses in board order; also the order transition buttons render.
    pub const ALL: [TaskStatus; 4] = [
        Self::ToDo,
        Self::InProgress,
        Self::Review,
        Self::Completed,
    ];

    /// Wire representation, which doubles as the display label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Completed => "Completed",
        }
    }

    /// Whether the task still counts toward the pending/active total.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Completed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown task status: {s}"))
    }
}

// ============================================================================
// Priority
// ============================================================================

/// Urgency of a task. Ordering is semantic: `Low < Medium < High < Urgent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }

    /// High and Urgent tasks surface in the dashboard's attention list.
    #[must_use]
    pub fn needs_attention(&self) -> bool {
        matches!(self, Self::High | Self::Urgent)
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| format!("unknown task priority: {s}"))
    }
}

// ============================================================================
// Task aggregate
// ============================================================================

/// A comment on a task. Created through the comment form, never edited or
/// deleted from the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "userId")]
    pub author: UserSummary,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// One entry of a task's append-only activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    /// Server-assigned activity kind (e.g. "status", "comment")
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable description of what happened
    pub details: String,
    #[serde(rename = "userId")]
    pub author: UserSummary,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(rename = "assignedToId", default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<UserSummary>,
    #[serde(rename = "creatorId", default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<UserSummary>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub activity: Vec<ActivityEntry>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Client-side authorization affordance: may `user_id` move this task
    /// between statuses? The server remains the authority; this only gates
    /// whether the transition buttons render.
    #[must_use]
    pub fn can_transition(&self, user_id: &str) -> bool {
        let is_assignee = self
            .assignee
            .as_ref()
            .is_some_and(|summary| summary.id == user_id);
        let is_creator = self
            .creator
            .as_ref()
            .is_some_and(|summary| summary.id == user_id);
        is_assignee || is_creator
    }
}

/// `data` payload of `GET /tasks`.
#[derive(Debug, Clone, Deserialize)]
pub struct TasksData {
    pub tasks: Vec<Task>,
}

/// `data` payload of endpoints returning a single task.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskData {
    pub task: Task,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task_json() -> &'static str {
        r#"{
            "_id": "t1",
            "title": "Ship the release",
            "description": "Cut and tag",
            "status": "In Progress",
            "priority": "Urgent",
            "assignedToId": {"_id": "u2", "username": "grace", "email": "grace@example.com"},
            "creatorId": {"_id": "u1", "username": "ada"},
            "tags": ["release"],
            "comments": [],
            "activity": [],
            "createdAt": "2024-05-01T10:00:00Z"
        }"#
    }

    #[test]
    fn status_round_trips_wire_strings() {
        for status in TaskStatus::ALL {
            let encoded = serde_json::to_string(&status).expect("status should encode");
            let decoded: TaskStatus =
                serde_json::from_str(&encoded).expect("status should decode");
            assert_eq!(decoded, status);
            assert_eq!(status.as_str().parse::<TaskStatus>(), Ok(status));
        }
        assert_eq!(
            serde_json::to_string(&TaskStatus::ToDo).expect("encode"),
            "\"To Do\""
        );
    }

    #[test]
    fn unknown_status_is_a_decode_error() {
        assert!(serde_json::from_str::<TaskStatus>("\"Archived\"").is_err());
    }

    #[test]
    fn priority_ordering_is_semantic() {
        assert!(TaskPriority::Urgent > TaskPriority::High);
        assert!(TaskPriority::High > TaskPriority::Medium);
        assert!(TaskPriority::Urgent.needs_attention());
        assert!(!TaskPriority::Medium.needs_attention());
    }

    #[test]
    fn task_deserializes_server_shape() {
        let task: Task = serde_json::from_str(sample_task_json()).expect("task should parse");
        assert_eq!(task.id, "t1");
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, TaskPriority::Urgent);
        assert_eq!(task.assignee.as_ref().map(|a| a.id.as_str()), Some("u2"));
    }

    #[test]
    fn transition_gate_covers_assignee_and_creator_only() {
        let task: Task = serde_json::from_str(sample_task_json()).expect("task should parse");
        assert!(task.can_transition("u1"));
        assert!(task.can_transition("u2"));
        assert!(!task.can_transition("u3"));
    }
}
