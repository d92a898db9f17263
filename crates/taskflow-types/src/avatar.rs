//! # Avatar Library Types

use serde::{Deserialize, Serialize};

/// One selectable entry of the server's avatar library. Read-only
/// reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarOption {
    #[serde(alias = "_id")]
    pub id: String,
    pub url: String,
    pub category: String,
    pub name: String,
}

/// `data` payload of `GET /users/avatar/library`.
#[derive(Debug, Clone, Deserialize)]
pub struct AvatarsData {
    pub avatars: Vec<AvatarOption>,
}
