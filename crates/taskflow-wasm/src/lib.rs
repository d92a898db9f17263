//! # TaskFlow browser infrastructure
//!
//! Everything that actually touches the browser: the `fetch`-backed
//! [`HttpBackend`] implementing `taskflow_app::Backend`, the [`PushChannel`]
//! wrapping a `web-sys` WebSocket, console logging macros, and JS interop
//! errors. The application core stays free of any of this.

pub mod error;
pub mod http;
pub mod logging;
pub mod socket;

pub use error::{WasmError, WasmResult};
pub use http::HttpBackend;
pub use socket::{PushChannel, PushHandler};
