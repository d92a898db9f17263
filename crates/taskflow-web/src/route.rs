//! # Routes
//!
//! The navigation surface as an enum parsed from `window.location`, with
//! `History.pushState` navigation. Token-bearing routes read their token
//! from the query string at parse time; a missing token is carried as
//! `None` so the target screen can render its terminal invalid state
//! without ever issuing a request.

use leptos::prelude::window;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    ForgotPassword,
    ResetPassword { token: Option<String> },
    VerifyEmail { token: Option<String> },
    Dashboard,
    Tasks,
}

impl Route {
    /// Parse a path + query string into a route. Unknown paths fall back
    /// to the landing page.
    pub fn parse(path: &str, search: &str) -> Self {
        let token = query_param(search, "token");
        match path.trim_end_matches('/') {
            "" => Self::Home,
            "/auth/login" => Self::Login,
            "/auth/register" => Self::Register,
            "/auth/forgot-password" => Self::ForgotPassword,
            "/auth/reset-password" => Self::ResetPassword { token },
            "/auth/verify-email" => Self::VerifyEmail { token },
            "/dashboard" => Self::Dashboard,
            "/dashboard/tasks" => Self::Tasks,
            _ => Self::Home,
        }
    }

    /// The URL this route lives at.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/auth/login".to_string(),
            Self::Register => "/auth/register".to_string(),
            Self::ForgotPassword => "/auth/forgot-password".to_string(),
            Self::ResetPassword { token } => with_token("/auth/reset-password", token),
            Self::VerifyEmail { token } => with_token("/auth/verify-email", token),
            Self::Dashboard => "/dashboard".to_string(),
            Self::Tasks => "/dashboard/tasks".to_string(),
        }
    }

    /// Routes that require a confirmed session.
    #[must_use]
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Tasks)
    }

    /// Read the current route from the browser location.
    pub fn from_location() -> Self {
        let location = window().location();
        let path = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        Self::parse(&path, &search)
    }

    /// Push this route onto the history stack.
    pub fn push_state(&self) {
        if let Ok(history) = window().history() {
            if let Err(err) =
                history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&self.path()))
            {
                log::warn!("pushState failed: {err:?}");
            }
        }
    }
}

fn with_token(path: &str, token: &Option<String>) -> String {
    match token {
        Some(token) => format!("{path}?token={token}"),
        None => path.to_string(),
    }
}

fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .strip_prefix('?')
        .unwrap_or(search)
        .split('&')
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name && !value.is_empty()).then(|| value.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/", ""), Route::Home);
        assert_eq!(Route::parse("/dashboard", ""), Route::Dashboard);
        assert_eq!(Route::parse("/dashboard/tasks/", ""), Route::Tasks);
        assert_eq!(Route::parse("/somewhere/else", ""), Route::Home);
    }

    #[test]
    fn token_is_extracted_and_absence_is_carried() {
        assert_eq!(
            Route::parse("/auth/reset-password", "?token=abc123"),
            Route::ResetPassword {
                token: Some("abc123".into())
            }
        );
        assert_eq!(
            Route::parse("/auth/verify-email", "?other=1"),
            Route::VerifyEmail { token: None }
        );
        assert_eq!(
            Route::ResetPassword {
                token: Some("abc123".into())
            }
            .path(),
            "/auth/reset-password?token=abc123"
        );
    }

    #[test]
    fn protected_routes_are_exactly_the_dashboard_pair() {
        assert!(Route::Dashboard.is_protected());
        assert!(Route::Tasks.is_protected());
        assert!(!Route::Login.is_protected());
        assert!(!Route::ResetPassword { token: None }.is_protected());
    }
}
