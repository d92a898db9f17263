//! # User & Profile Workflows
//!
//! Assignee search plus the profile/avatar mutations. Profile edits are
//! the one place the app is optimistic: the session user is patched
//! locally so the header updates immediately, without a refetch.

use crate::api::Backend;
use crate::config::ClientConfig;
use crate::core::Update;
use crate::views::NoticeLevel;
use taskflow_types::{ApiError, AvatarOption, ProfilePatch, UserSummary};

/// Queries shorter than this never reach the network.
pub const MIN_SEARCH_LEN: usize = 2;

/// Search users for the assignee picker.
///
/// Below the minimum length the result is empty without a request. The
/// requesting user is excluded client-side so you cannot assign a task to
/// yourself through the picker.
pub async fn search_users<B: Backend>(
    backend: &B,
    query: &str,
    exclude_id: Option<&str>,
) -> Result<Vec<UserSummary>, ApiError> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_SEARCH_LEN {
        return Ok(Vec::new());
    }
    let mut users = backend.search_users(trimmed).await?;
    if let Some(excluded) = exclude_id {
        users.retain(|user| user.id != excluded);
    }
    Ok(users)
}

/// Persist bio/avatar edits, then adopt the server's canonical user.
pub async fn update_profile<B: Backend>(
    backend: &B,
    patch: &ProfilePatch,
    emit: &impl Fn(Update),
) -> Result<(), ApiError> {
    let user = backend.update_profile(patch).await?;
    emit(Update::SessionReplaced(user));
    emit(Update::notice(
        NoticeLevel::Success,
        "Profile updated successfully",
    ));
    Ok(())
}

/// Fetch the read-only avatar library.
pub async fn avatar_library<B: Backend>(backend: &B) -> Result<Vec<AvatarOption>, ApiError> {
    backend.avatar_library().await
}

/// Choose a library avatar and mirror the choice into the session user.
pub async fn select_library_avatar<B: Backend>(
    backend: &B,
    option: &AvatarOption,
    emit: &impl Fn(Update),
) -> Result<(), ApiError> {
    backend.select_avatar(&option.id).await?;
    emit(Update::ProfileMerged(ProfilePatch {
        bio: None,
        avatar: Some(option.url.clone()),
    }));
    emit(Update::notice(NoticeLevel::Success, "Avatar updated!"));
    Ok(())
}

/// Upload a custom avatar. The server answers with a server-relative
/// path; the returned URL is already resolved against the API origin.
///
/// The caller has validated the file via
/// [`crate::forms::validate_avatar_file`] before reading it.
pub async fn upload_avatar<B: Backend>(
    backend: &B,
    config: &ClientConfig,
    bytes: Vec<u8>,
    mime: &str,
    filename: &str,
    emit: &impl Fn(Update),
) -> Result<String, ApiError> {
    let user = backend.upload_avatar(bytes, mime, filename).await?;
    let avatar_url = user
        .avatar
        .as_deref()
        .map(|path| config.absolute_url(path))
        .ok_or_else(|| ApiError::Decode("upload response missing avatar".to_string()))?;
    emit(Update::ProfileMerged(ProfilePatch {
        bio: None,
        avatar: Some(avatar_url.clone()),
    }));
    emit(Update::notice(
        NoticeLevel::Success,
        "Avatar uploaded successfully!",
    ));
    Ok(avatar_url)
}
