//! # Notification Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned notification category.
///
/// The set is open on the server side; unknown tags fall back to `Other`
/// instead of failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    TaskAssigned,
    TaskUpdated,
    CommentAdded,
    Mention,
    System,
    #[serde(other)]
    Other,
}

impl NotificationKind {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::TaskAssigned => "Task assigned",
            Self::TaskUpdated => "Task updated",
            Self::CommentAdded => "New comment",
            Self::Mention => "Mention",
            Self::System => "System",
            Self::Other => "Notification",
        }
    }
}

/// A persisted notification, delivered either through the initial fetch or
/// as a `notification:new` push event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(alias = "_id")]
    pub id: String,
    pub text: String,
    #[serde(rename = "type", default = "NotificationKind::default_kind")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl NotificationKind {
    fn default_kind() -> Self {
        Self::Other
    }
}

/// `data` payload of `GET /notifications`.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsData {
    pub notifications: Vec<Notification>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_degrades_to_other() {
        let json = r#"{
            "_id": "n1",
            "text": "Something happened",
            "type": "galactic_event",
            "read": false,
            "createdAt": "2024-05-01T10:00:00Z"
        }"#;
        let notification: Notification =
            serde_json::from_str(json).expect("notification should parse");
        assert_eq!(notification.kind, NotificationKind::Other);
        assert!(!notification.read);
    }

    #[test]
    fn known_kind_parses() {
        let json = r#"{
            "id": "n2",
            "text": "You were assigned",
            "type": "task_assigned",
            "read": true,
            "createdAt": "2024-05-01T10:00:00Z"
        }"#;
        let notification: Notification =
            serde_json::from_str(json).expect("notification should parse");
        assert_eq!(notification.kind, NotificationKind::TaskAssigned);
        assert_eq!(notification.kind.label(), "Task assigned");
    }
}
