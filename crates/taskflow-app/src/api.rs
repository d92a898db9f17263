//! # Backend Trait
//!
//! The seam between the application core and whatever actually talks to
//! the server. The browser build implements this over `fetch`
//! (`taskflow-wasm::HttpBackend`); tests implement it with scripted
//! responses.
//!
//! Futures are `?Send` because browser futures are not `Send`; native test
//! executors run them on the current thread.

use async_trait::async_trait;
use taskflow_types::{
    ApiError, AvatarOption, Credentials, NewAccount, NewTask, Notification, PasswordReset,
    ProfilePatch, Task, TaskStatus, User, UserSummary,
};

/// Every REST operation the client performs.
///
/// All methods carry session credentials; of the auth group only
/// `current_user` and `logout` require an existing session.
#[async_trait(?Send)]
pub trait Backend {
    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    /// `POST /auth/login`
    async fn login(&self, credentials: &Credentials) -> Result<User, ApiError>;

    /// `POST /auth/register`
    async fn register(&self, account: &NewAccount) -> Result<User, ApiError>;

    /// `POST /auth/logout`
    async fn logout(&self) -> Result<(), ApiError>;

    /// `GET /auth/me`, the session probe.
    async fn current_user(&self) -> Result<User, ApiError>;

    /// `POST /auth/forgot-password`
    async fn forgot_password(&self, email: &str) -> Result<(), ApiError>;

    /// `POST /auth/reset-password`
    async fn reset_password(&self, reset: &PasswordReset) -> Result<(), ApiError>;

    /// `POST /auth/verify-email`
    async fn verify_email(&self, token: &str) -> Result<(), ApiError>;

    // ------------------------------------------------------------------
    // Tasks
    // ------------------------------------------------------------------

    /// `GET /tasks`
    async fn tasks(&self) -> Result<Vec<Task>, ApiError>;

    /// `POST /tasks`
    async fn create_task(&self, new_task: &NewTask) -> Result<Task, ApiError>;

    /// `PATCH /tasks/{id}` with a status body.
    async fn set_task_status(&self, task_id: &str, status: TaskStatus)
        -> Result<Task, ApiError>;

    /// `POST /tasks/{id}/comments`
    async fn add_comment(&self, task_id: &str, text: &str) -> Result<Task, ApiError>;

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    /// `GET /users/search?query=`
    async fn search_users(&self, query: &str) -> Result<Vec<UserSummary>, ApiError>;

    /// `PATCH /users/me`
    async fn update_profile(&self, patch: &ProfilePatch) -> Result<User, ApiError>;

    /// `GET /users/avatar/library`
    async fn avatar_library(&self) -> Result<Vec<AvatarOption>, ApiError>;

    /// `POST /users/avatar/library`
    async fn select_avatar(&self, avatar_id: &str) -> Result<User, ApiError>;

    /// `POST /users/avatar/upload` (multipart)
    async fn upload_avatar(
        &self,
        bytes: Vec<u8>,
        mime: &str,
        filename: &str,
    ) -> Result<User, ApiError>;

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    /// `GET /notifications`
    async fn notifications(&self) -> Result<Vec<Notification>, ApiError>;

    /// `PATCH /notifications/{id}/read`
    async fn mark_notification_read(&self, id: &str) -> Result<(), ApiError>;

    /// `PATCH /notifications/read-all`
    async fn mark_all_notifications_read(&self) -> Result<(), ApiError>;
}
