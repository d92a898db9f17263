//! # Form Validation
//!
//! Local input validation for every form in the app. Failures are
//! field-scoped and block submission: a form that fails validation never
//! produces a request body, so nothing reaches the network.
//!
//! Rules follow the server's account policy: email shape, password at
//! least [`MIN_PASSWORD_LEN`], username at least [`MIN_USERNAME_LEN`],
//! confirmation equality on password reset.

use taskflow_types::{Credentials, NewAccount, NewTask, PasswordReset, TaskPriority};

/// Minimum password length accepted at registration and reset.
pub const MIN_PASSWORD_LEN: usize = 6;
/// Minimum username length accepted at registration.
pub const MIN_USERNAME_LEN: usize = 3;
/// Maximum avatar upload size.
pub const MAX_AVATAR_BYTES: usize = 2 * 1024 * 1024;

/// Field-scoped validation errors, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    /// The error for a given field, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Submission lifecycle shared by every form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Server-side failure; the message is user-facing.
    Failed(String),
}

impl SubmitState {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Syntactic email check: one `@`, a non-empty local part, and a domain
/// with an interior dot. Deliberately shallow; the server owns the rest.
fn email_is_well_formed(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.split_once('.') {
        Some((host, rest)) => !host.is_empty() && !rest.is_empty() && !rest.ends_with('.'),
        None => false,
    }
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if !email_is_well_formed(email) {
        errors.push("email", "Invalid email address");
    }
}

// ============================================================================
// Forms
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, FieldErrors> {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, self.email.trim());
        if self.password.is_empty() {
            errors.push("password", "Password is required");
        }
        errors.into_result(Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<NewAccount, FieldErrors> {
        let mut errors = FieldErrors::new();
        let username = self.username.trim();
        if username.chars().count() < MIN_USERNAME_LEN {
            errors.push(
                "username",
                format!("Username must be at least {MIN_USERNAME_LEN} characters"),
            );
        }
        check_email(&mut errors, self.email.trim());
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
            );
        }
        errors.into_result(NewAccount {
            username: username.to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> Result<String, FieldErrors> {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, self.email.trim());
        errors.into_result(self.email.trim().to_string())
    }
}

/// Password + confirmation pair of the reset screen. The token comes from
/// the navigation context; a missing token is a terminal invalid-link
/// state handled before this form is ever validated.
#[derive(Debug, Clone, Default)]
pub struct ResetPasswordForm {
    pub password: String,
    pub confirm: String,
}

impl ResetPasswordForm {
    pub fn validate(&self, token: &str) -> Result<PasswordReset, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
            );
        }
        if self.confirm != self.password {
            errors.push("confirm", "Passwords don't match");
        }
        errors.into_result(PasswordReset {
            token: token.to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub assigned_to: Option<String>,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: TaskPriority::Medium,
            assigned_to: None,
        }
    }
}

impl TaskForm {
    pub fn validate(&self) -> Result<NewTask, FieldErrors> {
        let mut errors = FieldErrors::new();
        let title = self.title.trim();
        if title.is_empty() {
            errors.push("title", "Title is required");
        }
        let description = self.description.trim();
        errors.into_result(NewTask {
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            priority: self.priority,
            assigned_to: self.assigned_to.clone(),
        })
    }
}

/// Comment text is the only field of its form; `None` means "do not
/// submit".
#[must_use]
pub fn validate_comment(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Client-side gate on avatar uploads: image MIME type, bounded size.
pub fn validate_avatar_file(mime: &str, len: usize) -> Result<(), String> {
    if !mime.starts_with("image/") {
        return Err("Please select an image file".to_string());
    }
    if len > MAX_AVATAR_BYTES {
        return Err("Image must be less than 2MB".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_emails_pass() {
        for email in ["a@b.co", "name.tag@sub.example.com", "x_y@z.io"] {
            assert!(email_is_well_formed(email), "{email} should pass");
        }
    }

    #[test]
    fn malformed_emails_fail() {
        for email in ["", "plain", "@b.co", "a@b", "a @b.co", "a@b.", "a@@b.co"] {
            assert!(!email_is_well_formed(email), "{email} should fail");
        }
    }

    #[test]
    fn login_flags_both_fields() {
        let form = LoginForm {
            email: "nope".into(),
            password: String::new(),
        };
        let errors = form.validate().expect_err("should fail");
        assert_eq!(errors.get("email"), Some("Invalid email address"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn login_trims_email() {
        let form = LoginForm {
            email: "  ada@example.com ".into(),
            password: "secret".into(),
        };
        let credentials = form.validate().expect("should pass");
        assert_eq!(credentials.email, "ada@example.com");
    }

    #[test]
    fn register_enforces_lengths() {
        let form = RegisterForm {
            username: "ab".into(),
            email: "ada@example.com".into(),
            password: "12345".into(),
        };
        let errors = form.validate().expect_err("should fail");
        assert!(errors.get("username").is_some());
        assert!(errors.get("password").is_some());
        assert!(errors.get("email").is_none());
    }

    #[test]
    fn reset_mismatch_lands_on_confirmation_field() {
        let form = ResetPasswordForm {
            password: "123456".into(),
            confirm: "123457".into(),
        };
        let errors = form.validate("tok").expect_err("should fail");
        assert!(errors.get("password").is_none());
        assert_eq!(errors.get("confirm"), Some("Passwords don't match"));
    }

    #[test]
    fn reset_passes_token_through() {
        let form = ResetPasswordForm {
            password: "123456".into(),
            confirm: "123456".into(),
        };
        let reset = form.validate("tok-9").expect("should pass");
        assert_eq!(reset.token, "tok-9");
    }

    #[test]
    fn task_form_requires_title_and_drops_empty_description() {
        let form = TaskForm {
            title: "   ".into(),
            ..TaskForm::default()
        };
        assert!(form.validate().is_err());

        let form = TaskForm {
            title: "Ship it".into(),
            description: "  ".into(),
            ..TaskForm::default()
        };
        let new_task = form.validate().expect("should pass");
        assert_eq!(new_task.description, None);
    }

    #[test]
    fn blank_comments_are_not_submitted() {
        assert_eq!(validate_comment("   "), None);
        assert_eq!(validate_comment(" hi "), Some("hi".to_string()));
    }

    #[test]
    fn avatar_gate_checks_mime_and_size() {
        assert!(validate_avatar_file("image/png", 1024).is_ok());
        assert!(validate_avatar_file("text/plain", 1024).is_err());
        assert!(validate_avatar_file("image/png", MAX_AVATAR_BYTES + 1).is_err());
    }
}
