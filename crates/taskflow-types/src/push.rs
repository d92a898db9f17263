//! # Push Channel Frames
//!
//! The push channel is receive-only. Each frame is a JSON object
//! `{ "event": <name>, "data": <payload> }`; the payload shape depends on
//! the event name. Unknown event names are not an error: the server may
//! grow new events before the client learns about them, so `parse`
//! returns `Ok(None)` for those and the caller logs and moves on.

use crate::notification::Notification;
use crate::task::Task;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

/// Event name for a freshly created task.
pub const TASK_CREATED: &str = "task:created";
/// Event name for any update to an existing task.
pub const TASK_UPDATED: &str = "task:updated";
/// Event name for a new persisted notification.
pub const NOTIFICATION_NEW: &str = "notification:new";

#[derive(Debug, Deserialize)]
struct PushFrame {
    event: String,
    #[serde(default)]
    data: serde_json::Value,
}

/// A typed push event, stamped with the client-side arrival time.
#[derive(Debug, Clone, PartialEq)]
pub enum PushEvent {
    TaskCreated {
        task: Task,
        received_at: DateTime<Utc>,
    },
    TaskUpdated {
        task: Task,
        received_at: DateTime<Utc>,
    },
    NotificationCreated {
        notification: Notification,
        received_at: DateTime<Utc>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PushParseError {
    #[error("malformed push frame: {0}")]
    MalformedFrame(String),

    #[error("bad payload for '{event}': {reason}")]
    BadPayload { event: String, reason: String },
}

impl PushEvent {
    /// Parse a raw text frame.
    ///
    /// `Ok(None)` means a well-formed frame for an event this client does
    /// not consume.
    pub fn parse(
        text: &str,
        received_at: DateTime<Utc>,
    ) -> Result<Option<Self>, PushParseError> {
        let frame: PushFrame = serde_json::from_str(text)
            .map_err(|e| PushParseError::MalformedFrame(e.to_string()))?;

        let bad_payload = |event: &str, e: serde_json::Error| PushParseError::BadPayload {
            event: event.to_string(),
            reason: e.to_string(),
        };

        match frame.event.as_str() {
            TASK_CREATED => {
                let task: Task = serde_json::from_value(frame.data)
                    .map_err(|e| bad_payload(TASK_CREATED, e))?;
                Ok(Some(Self::TaskCreated { task, received_at }))
            }
            TASK_UPDATED => {
                let task: Task = serde_json::from_value(frame.data)
                    .map_err(|e| bad_payload(TASK_UPDATED, e))?;
                Ok(Some(Self::TaskUpdated { task, received_at }))
            }
            NOTIFICATION_NEW => {
                let notification: Notification = serde_json::from_value(frame.data)
                    .map_err(|e| bad_payload(NOTIFICATION_NEW, e))?;
                Ok(Some(Self::NotificationCreated {
                    notification,
                    received_at,
                }))
            }
            _ => Ok(None),
        }
    }

    /// Client-side arrival time of the frame.
    #[must_use]
    pub fn received_at(&self) -> DateTime<Utc> {
        match self {
            Self::TaskCreated { received_at, .. }
            | Self::TaskUpdated { received_at, .. }
            | Self::NotificationCreated { received_at, .. } => *received_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().expect("valid timestamp")
    }

    #[test]
    fn parses_task_created_frame() {
        let frame = r#"{
            "event": "task:created",
            "data": {
                "_id": "t9",
                "title": "New thing",
                "status": "To Do",
                "priority": "Low",
                "createdAt": "2024-05-01T10:00:00Z"
            }
        }"#;
        let event = PushEvent::parse(frame, at())
            .expect("frame should parse")
            .expect("event should be consumed");
        match event {
            PushEvent::TaskCreated { task, received_at } => {
                assert_eq!(task.title, "New thing");
                assert_eq!(received_at, at());
            }
            other => panic!("expected TaskCreated, got {other:?}"),
        }
    }

    #[test]
    fn unknown_event_is_skipped_not_fatal() {
        let frame = r#"{"event": "presence:join", "data": {"userId": "u1"}}"#;
        assert_eq!(PushEvent::parse(frame, at()).expect("should parse"), None);
    }

    #[test]
    fn garbage_frame_is_an_error() {
        assert!(matches!(
            PushEvent::parse("not json", at()),
            Err(PushParseError::MalformedFrame(_))
        ));
    }

    #[test]
    fn bad_payload_names_the_event() {
        let frame = r#"{"event": "notification:new", "data": {"nope": true}}"#;
        match PushEvent::parse(frame, at()) {
            Err(PushParseError::BadPayload { event, .. }) => {
                assert_eq!(event, NOTIFICATION_NEW);
            }
            other => panic!("expected BadPayload, got {other:?}"),
        }
    }
}
