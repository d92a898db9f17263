//! # Task Workflows
//!
//! Task fetching and the three task mutations. Mutations are
//! fire-and-refetch: no optimistic rendering, the refreshed list comes
//! back through the reducer after the invalidation table is honored.

use crate::api::Backend;
use crate::cache::MutationKind;
use crate::core::Update;
use crate::views::NoticeLevel;
use crate::workflows::refetch_invalidated;
use taskflow_types::{ApiError, NewTask, TaskStatus};

/// Fetch the task list into the cache.
pub async fn load_tasks<B: Backend>(backend: &B, emit: &impl Fn(Update)) {
    emit(Update::TasksLoading);
    match backend.tasks().await {
        Ok(tasks) => emit(Update::TasksLoaded(tasks)),
        Err(err) => {
            tracing::warn!(error = %err, "task fetch failed");
            emit(Update::TasksFailed(err.user_message()));
        }
    }
}

/// Create a task, then refetch what the mutation invalidates.
pub async fn create_task<B: Backend>(
    backend: &B,
    new_task: &NewTask,
    emit: &impl Fn(Update),
) -> Result<(), ApiError> {
    backend.create_task(new_task).await?;
    emit(Update::notice(NoticeLevel::Success, "Task created"));
    refetch_invalidated(backend, MutationKind::CreateTask, emit).await;
    Ok(())
}

/// Move a task to a new status.
pub async fn set_status<B: Backend>(
    backend: &B,
    task_id: &str,
    status: TaskStatus,
    emit: &impl Fn(Update),
) -> Result<(), ApiError> {
    backend.set_task_status(task_id, status).await?;
    emit(Update::notice(
        NoticeLevel::Success,
        format!("Task moved to {status}"),
    ));
    refetch_invalidated(backend, MutationKind::PatchTaskStatus, emit).await;
    Ok(())
}

/// Attach a comment to a task. The caller has already rejected blank
/// text via [`crate::forms::validate_comment`].
pub async fn add_comment<B: Backend>(
    backend: &B,
    task_id: &str,
    text: &str,
    emit: &impl Fn(Update),
) -> Result<(), ApiError> {
    backend.add_comment(task_id, text).await?;
    emit(Update::notice(NoticeLevel::Success, "Comment added"));
    refetch_invalidated(backend, MutationKind::AddComment, emit).await;
    Ok(())
}
