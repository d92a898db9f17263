//! # Notification Workflows

use crate::api::Backend;
use crate::core::Update;
use taskflow_types::ApiError;

/// Fetch the persisted notification inbox.
pub async fn load_notifications<B: Backend>(backend: &B, emit: &impl Fn(Update)) {
    emit(Update::NotificationsLoading);
    match backend.notifications().await {
        Ok(notifications) => emit(Update::NotificationsLoaded(notifications)),
        Err(err) => {
            tracing::warn!(error = %err, "notification fetch failed");
            emit(Update::NotificationsFailed(err.user_message()));
        }
    }
}

/// Mark one notification read. The cache write is direct: only the
/// named notification's flag flips.
pub async fn mark_read<B: Backend>(
    backend: &B,
    id: &str,
    emit: &impl Fn(Update),
) -> Result<(), ApiError> {
    backend.mark_notification_read(id).await?;
    emit(Update::NotificationRead(id.to_string()));
    Ok(())
}

/// Mark everything read; zeroes the unread count.
pub async fn mark_all_read<B: Backend>(
    backend: &B,
    emit: &impl Fn(Update),
) -> Result<(), ApiError> {
    backend.mark_all_notifications_read().await?;
    emit(Update::AllNotificationsRead);
    Ok(())
}
