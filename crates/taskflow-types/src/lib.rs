//! # TaskFlow wire types
//!
//! Types shared between the application core, the browser I/O layer, and
//! the Leptos frontend. Everything here mirrors what the TaskFlow REST API
//! and push channel actually put on the wire:
//!
//! - Domain DTOs (users, tasks, notifications, avatar library)
//! - The `{status, data, message}` response envelope
//! - The client-side error taxonomy
//! - Push-channel frames and their typed event model

pub mod avatar;
pub mod envelope;
pub mod error;
pub mod notification;
pub mod push;
pub mod request;
pub mod task;
pub mod user;

pub use avatar::AvatarOption;
pub use envelope::{Envelope, ResponseStatus};
pub use error::{ApiError, ErrorCategory};
pub use notification::{Notification, NotificationKind};
pub use push::{PushEvent, PushParseError};
pub use request::{Credentials, NewAccount, NewTask, PasswordReset, ProfilePatch};
pub use task::{ActivityEntry, Comment, Task, TaskPriority, TaskStatus};
pub use user::{User, UserSummary};
