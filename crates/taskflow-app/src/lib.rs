//! # TaskFlow Application Core
//!
//! Portable, headless client logic for the TaskFlow task-management app.
//! The crate owns four concerns:
//!
//! - **Session**: the three-state session machine
//!   (`Unknown → Authenticated | Unauthenticated`)
//! - **View state**: cached task/notification queries, the capped
//!   real-time feed, and dismissible notices
//! - **Reduction**: every state change, including push events, flows
//!   through the single [`core::reduce`] entry point
//! - **Workflows**: async operations against an injected [`api::Backend`]
//!   that emit [`core::Update`]s
//!
//! No browser APIs appear here; the `taskflow-wasm` crate supplies the
//! `Backend` implementation and the push transport, and `taskflow-web`
//! wires both to Leptos signals.

pub mod api;
pub mod cache;
pub mod config;
pub mod core;
pub mod forms;
pub mod views;
pub mod workflows;

pub use crate::api::Backend;
pub use crate::config::ClientConfig;
pub use crate::core::{reduce, Update};
pub use crate::views::ViewState;
