//! # Auth Workflows
//!
//! Session lifecycle operations. Bootstrap is deliberately silent on
//! failure: an expired cookie and an unreachable server both mean "no
//! session", never an error surface. Logout is best-effort on the wire
//! and unconditional locally.

use crate::api::Backend;
use crate::core::Update;
use crate::views::NoticeLevel;
use taskflow_types::{ApiError, Credentials, NewAccount, PasswordReset, User};

/// Probe `GET /auth/me` once on startup.
pub async fn bootstrap<B: Backend>(backend: &B, emit: &impl Fn(Update)) {
    match backend.current_user().await {
        Ok(user) => emit(Update::SessionResolved(Some(user))),
        Err(err) => {
            tracing::debug!(error = %err, "session probe resolved to unauthenticated");
            emit(Update::SessionResolved(None));
        }
    }
}

/// Submit credentials. On success the session is established and the
/// caller navigates to the dashboard (exactly once); on failure session
/// state is untouched and the error is returned for the form.
pub async fn login<B: Backend>(
    backend: &B,
    credentials: &Credentials,
    emit: &impl Fn(Update),
) -> Result<User, ApiError> {
    let user = backend.login(credentials).await?;
    emit(Update::SessionEstablished(user.clone()));
    emit(Update::notice(NoticeLevel::Success, "Welcome back!"));
    Ok(user)
}

/// Same contract as [`login`], targeting account creation.
pub async fn register<B: Backend>(
    backend: &B,
    account: &NewAccount,
    emit: &impl Fn(Update),
) -> Result<User, ApiError> {
    let user = backend.register(account).await?;
    emit(Update::SessionEstablished(user.clone()));
    emit(Update::notice(NoticeLevel::Success, "Account created!"));
    Ok(user)
}

/// Terminate the session. Local state clears even when the server call
/// fails; the caller navigates to login unconditionally.
pub async fn logout<B: Backend>(backend: &B, emit: &impl Fn(Update)) {
    if let Err(err) = backend.logout().await {
        tracing::warn!(error = %err, "server logout failed; clearing local session anyway");
    }
    emit(Update::SessionCleared);
    emit(Update::notice(NoticeLevel::Success, "Logged out"));
}

/// Request a password-reset email.
pub async fn forgot_password<B: Backend>(backend: &B, email: &str) -> Result<(), ApiError> {
    backend.forgot_password(email).await
}

/// Redeem a reset token with a new password.
pub async fn reset_password<B: Backend>(
    backend: &B,
    reset: &PasswordReset,
) -> Result<(), ApiError> {
    backend.reset_password(reset).await
}

/// Redeem an email-verification token.
pub async fn verify_email<B: Backend>(backend: &B, token: &str) -> Result<(), ApiError> {
    backend.verify_email(token).await
}
