//! # Workflows
//!
//! Async operations against the injected [`Backend`]. Each workflow emits
//! [`Update`]s through the provided sink (the frontend's dispatcher) and
//! returns a `Result` only where the calling form needs to reflect the
//! failure itself.
//!
//! Mutations never touch caches directly: they consult the invalidation
//! table in [`crate::cache`] and refetch whatever it names.

pub mod auth;
pub mod notifications;
pub mod tasks;
pub mod users;

use crate::api::Backend;
use crate::cache::{invalidated_by, MutationKind, QueryKey};
use crate::core::Update;

/// Refetch every query the mutation declares stale.
pub(crate) async fn refetch_invalidated<B: Backend>(
    backend: &B,
    mutation: MutationKind,
    emit: &impl Fn(Update),
) {
    for key in invalidated_by(mutation) {
        match key {
            QueryKey::Tasks => tasks::load_tasks(backend, emit).await,
            QueryKey::Notifications => notifications::load_notifications(backend, emit).await,
        }
    }
}
