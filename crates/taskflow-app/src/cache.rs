//! # Query Cache Bookkeeping
//!
//! Which cached queries exist, and which mutation invalidates what. The
//! mutation → invalidation relationship lives in one table here so it is
//! statically visible instead of scattered across call sites. Mutations
//! not listed against a query apply a direct cache write through the
//! reducer instead (notification read flags, local profile merges).

use std::fmt;

/// Lifecycle of a cached per-view query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryStatus {
    /// Never fetched
    #[default]
    Idle,
    /// Fetch in flight
    Loading,
    /// Data present (possibly about to be replaced by a refetch)
    Loaded,
    /// Last fetch failed; message is user-facing
    Failed(String),
}

impl QueryStatus {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }
}

/// The cached queries the client maintains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Tasks,
    Notifications,
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tasks => write!(f, "tasks"),
            Self::Notifications => write!(f, "notifications"),
        }
    }
}

/// Every mutation the client can issue against cached data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    CreateTask,
    PatchTaskStatus,
    AddComment,
    MarkNotificationRead,
    MarkAllNotificationsRead,
    UpdateProfile,
    SelectAvatar,
    UploadAvatar,
}

/// The queries a mutation invalidates (and the workflows refetch).
///
/// An empty slice means the mutation's effect is applied as a direct
/// cache write instead of a refetch.
#[must_use]
pub fn invalidated_by(mutation: MutationKind) -> &'static [QueryKey] {
    match mutation {
        MutationKind::CreateTask
        | MutationKind::PatchTaskStatus
        | MutationKind::AddComment => &[QueryKey::Tasks],

        MutationKind::MarkNotificationRead
        | MutationKind::MarkAllNotificationsRead => &[],

        MutationKind::UpdateProfile
        | MutationKind::SelectAvatar
        | MutationKind::UploadAvatar => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_mutations_invalidate_the_task_list() {
        for mutation in [
            MutationKind::CreateTask,
            MutationKind::PatchTaskStatus,
            MutationKind::AddComment,
        ] {
            assert_eq!(invalidated_by(mutation), &[QueryKey::Tasks]);
        }
    }

    #[test]
    fn direct_write_mutations_invalidate_nothing() {
        for mutation in [
            MutationKind::MarkNotificationRead,
            MutationKind::MarkAllNotificationsRead,
            MutationKind::UpdateProfile,
            MutationKind::SelectAvatar,
            MutationKind::UploadAvatar,
        ] {
            assert!(invalidated_by(mutation).is_empty());
        }
    }
}
