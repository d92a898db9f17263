//! # User Types

use serde::{Deserialize, Serialize};

/// The authenticated user as returned by the auth endpoints.
///
/// The API historically exposed Mongo-style `_id` fields; the alias keeps
/// both spellings deserializable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable user identifier
    #[serde(alias = "_id")]
    pub id: String,
    /// Display name, unique per account
    pub username: String,
    /// Account email address
    pub email: String,
    /// Avatar image URL, if one has been chosen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Free-form profile text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl User {
    /// Merge a profile patch into this user in place.
    ///
    /// Only the fields present in the patch change; this is the local side
    /// of an optimistic profile update.
    pub fn apply_patch(&mut self, patch: &crate::request::ProfilePatch) {
        if let Some(bio) = &patch.bio {
            self.bio = Some(bio.clone());
        }
        if let Some(avatar) = &patch.avatar {
            self.avatar = Some(avatar.clone());
        }
    }
}

/// A shallow user reference embedded in tasks, comments, and activity
/// entries (assignee, creator, author).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// `data` payload of endpoints returning a single user.
#[derive(Debug, Clone, Deserialize)]
pub struct UserData {
    pub user: User,
}

/// `data` payload of the user search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UsersData {
    pub users: Vec<UserSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ProfilePatch;

    #[test]
    fn deserializes_mongo_style_id() {
        let json = r#"{"_id":"u1","username":"ada","email":"ada@example.com"}"#;
        let user: User = serde_json::from_str(json).expect("user should parse");
        assert_eq!(user.id, "u1");
        assert_eq!(user.avatar, None);
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut user = User {
            id: "u1".into(),
            username: "ada".into(),
            email: "ada@example.com".into(),
            avatar: Some("/avatars/1.png".into()),
            bio: None,
        };
        user.apply_patch(&ProfilePatch {
            bio: Some("hello".into()),
            avatar: None,
        });
        assert_eq!(user.bio.as_deref(), Some("hello"));
        assert_eq!(user.avatar.as_deref(), Some("/avatars/1.png"));
    }
}
