//! # Request Bodies
//!
//! Everything the client PUTs on the wire. Validation happens before these
//! are constructed (see `taskflow-app::forms`); by the time a request body
//! exists it is shaped correctly.

use crate::task::TaskPriority;
use serde::Serialize;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/reset-password`.
#[derive(Debug, Clone, Serialize)]
pub struct PasswordReset {
    pub token: String,
    pub password: String,
}

/// Body of `POST /tasks`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: TaskPriority,
    #[serde(rename = "assignedToId", skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

/// Body of `PATCH /users/me`. Also the local-merge patch applied to the
/// session user without a round-trip.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
