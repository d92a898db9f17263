//! # Push Channel
//!
//! A receive-only WebSocket scoped to the authenticated user. The session
//! owner (the root component) opens at most one channel when a session
//! exists and closes it when the session disappears; consumers never hold
//! the socket, only the reducer output.
//!
//! Reconnection and backoff are the transport's business, not ours.

use crate::console_log;
use crate::error::{WasmError, WasmResult};
use chrono::Utc;
use std::cell::RefCell;
use std::rc::Rc;
use taskflow_types::PushEvent;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, ErrorEvent, MessageEvent, WebSocket};

/// Mode-specific handling of channel lifecycle and events.
pub trait PushHandler {
    /// A typed push event arrived.
    fn handle_event(&mut self, event: PushEvent);

    /// The channel connected.
    fn handle_connected(&mut self) {}

    /// The channel closed.
    fn handle_disconnected(&mut self, _code: u16, _reason: &str) {}

    /// The channel errored.
    fn handle_error(&mut self, _error: &str) {}
}

/// The single live push connection.
pub struct PushChannel {
    websocket: Option<WebSocket>,
    url: String,
}

impl PushChannel {
    /// Open a channel for `user_id` and wire the handler to its events.
    pub fn connect(
        socket_url: &str,
        user_id: &str,
        handler: Rc<RefCell<dyn PushHandler>>,
    ) -> WasmResult<Self> {
        let url = format!("{socket_url}?userId={user_id}");
        console_log!("Connecting push channel: {}", url);

        let websocket = WebSocket::new(&url)
            .map_err(|e| WasmError::WebSocket(format!("Failed to create WebSocket: {e:?}")))?;
        websocket.set_binary_type(web_sys::BinaryType::Arraybuffer);

        // onopen
        {
            let handler = handler.clone();
            let onopen: Closure<dyn Fn()> = Closure::new(move || {
                handler.borrow_mut().handle_connected();
            });
            websocket.set_onopen(Some(onopen.as_ref().unchecked_ref()));
            onopen.forget();
        }

        // onmessage: parse, stamp, dispatch
        {
            let handler = handler.clone();
            let onmessage: Closure<dyn Fn(MessageEvent)> =
                Closure::new(move |event: MessageEvent| {
                    let Ok(text) = event.data().dyn_into::<js_sys::JsString>() else {
                        return;
                    };
                    let frame = String::from(text);
                    match PushEvent::parse(&frame, Utc::now()) {
                        Ok(Some(push_event)) => {
                            handler.borrow_mut().handle_event(push_event);
                        }
                        Ok(None) => {
                            console_log!("Ignoring unconsumed push frame: {}", frame);
                        }
                        Err(err) => {
                            console_log!("ERROR: bad push frame: {}", err);
                        }
                    }
                });
            websocket.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
            onmessage.forget();
        }

        // onclose
        {
            let handler = handler.clone();
            let onclose: Closure<dyn Fn(CloseEvent)> = Closure::new(move |event: CloseEvent| {
                handler
                    .borrow_mut()
                    .handle_disconnected(event.code(), &event.reason());
            });
            websocket.set_onclose(Some(onclose.as_ref().unchecked_ref()));
            onclose.forget();
        }

        // onerror
        {
            let onerror: Closure<dyn Fn(ErrorEvent)> = Closure::new(move |event: ErrorEvent| {
                handler.borrow_mut().handle_error(&event.message());
            });
            websocket.set_onerror(Some(onerror.as_ref().unchecked_ref()));
            onerror.forget();
        }

        Ok(Self {
            websocket: Some(websocket),
            url,
        })
    }

    /// Close the channel. Idempotent.
    pub fn close(&mut self) {
        if let Some(websocket) = self.websocket.take() {
            if let Err(err) = websocket.close() {
                console_log!("WARN: WebSocket close failed: {:?}", err);
            }
        }
    }

    /// Whether the underlying socket is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.websocket
            .as_ref()
            .map(|ws| ws.ready_state() == WebSocket::OPEN)
            .unwrap_or(false)
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for PushChannel {
    fn drop(&mut self) {
        self.close();
    }
}
