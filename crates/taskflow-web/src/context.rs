//! # App Context
//!
//! The dependency-injected bundle every component works against: the
//! client configuration, the HTTP backend, the one `ViewState` signal,
//! and the current route. Components never mutate state directly; they
//! dispatch updates through [`AppContext::dispatch`], which funnels into
//! the core reducer.

use leptos::prelude::*;
use taskflow_app::core::{reduce, Update};
use taskflow_app::views::ViewState;
use taskflow_app::ClientConfig;
use taskflow_wasm::HttpBackend;

use crate::route::Route;

#[derive(Clone)]
pub struct AppContext {
    pub config: ClientConfig,
    pub backend: HttpBackend,
    pub state: RwSignal<ViewState>,
    pub route: RwSignal<Route>,
}

impl AppContext {
    pub fn new() -> Self {
        let config = config_from_window();
        let backend = HttpBackend::new(config.clone());
        Self {
            config,
            backend,
            state: RwSignal::new(ViewState::new()),
            route: RwSignal::new(Route::from_location()),
        }
    }

    /// Apply one update through the reducer.
    pub fn dispatch(&self, update: Update) {
        self.state.update(|state| reduce(state, update));
    }

    /// An update sink workflows can emit into.
    pub fn emitter(&self) -> impl Fn(Update) + Clone {
        let state = self.state;
        move |update| state.update(|s| reduce(s, update))
    }

    /// Client-side navigation: push the URL and switch the view.
    pub fn navigate(&self, route: Route) {
        route.push_state();
        self.route.set(route);
    }

    /// Id of the authenticated user, if any. Reactive.
    pub fn session_user_id(&self) -> Option<String> {
        self.state
            .with(|s| s.session.user().map(|user| user.id.clone()))
    }
}

/// Read the context provided at the app root.
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

/// Build the configuration, honoring `window.APP_API_URL` /
/// `window.APP_SOCKET_URL` globals when the deployment sets them.
fn config_from_window() -> ClientConfig {
    let mut builder = ClientConfig::builder();
    if let Some(api_url) = window_global("APP_API_URL") {
        builder = builder.api_url(api_url);
    }
    if let Some(socket_url) = window_global("APP_SOCKET_URL") {
        builder = builder.socket_url(socket_url);
    }
    builder.build()
}

fn window_global(name: &str) -> Option<String> {
    js_sys::Reflect::get(&window(), &wasm_bindgen::JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_string())
        .filter(|value| !value.is_empty())
}
