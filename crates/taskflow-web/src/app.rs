//! # App Root
//!
//! Provides the [`AppContext`], probes the session once, owns the push
//! channel for the lifetime of the session, and switches views on the
//! current route.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use taskflow_app::core::{reduce, Update};
use taskflow_app::views::ViewState;
use taskflow_app::workflows::auth;
use taskflow_types::PushEvent;
use taskflow_wasm::{PushChannel, PushHandler};

use crate::components::auth::{
    ForgotPasswordPage, LoginPage, RegisterPage, ResetPasswordPage, VerifyEmailPage,
};
use crate::components::dashboard::DashboardPage;
use crate::components::home::HomePage;
use crate::components::layout::DashboardLayout;
use crate::components::task_list::TasksPage;
use crate::components::ui::NoticeStack;
use crate::context::AppContext;
use crate::route::Route;

/// Push events go straight into the reducer, so every widget sees the
/// same list instead of keeping its own copy.
struct DispatchHandler {
    state: RwSignal<ViewState>,
}

impl PushHandler for DispatchHandler {
    fn handle_event(&mut self, event: PushEvent) {
        self.state.update(|state| reduce(state, Update::Push(event)));
    }

    fn handle_connected(&mut self) {
        log::info!("push channel connected");
    }

    fn handle_disconnected(&mut self, code: u16, reason: &str) {
        log::info!("push channel closed: code={code} reason={reason}");
    }

    fn handle_error(&mut self, error: &str) {
        log::warn!("push channel error: {error}");
    }
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx.clone());

    // Keep the route signal in sync with browser back/forward.
    {
        let route = ctx.route;
        let on_popstate: Closure<dyn Fn(web_sys::Event)> = Closure::new(move |_| {
            route.set(Route::from_location());
        });
        if let Err(err) = window()
            .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref())
        {
            log::warn!("could not attach popstate listener: {err:?}");
        }
        on_popstate.forget();
    }

    // Session probe, exactly once at startup.
    {
        let ctx = ctx.clone();
        spawn_local(async move {
            auth::bootstrap(&ctx.backend, &ctx.emitter()).await;
        });
    }

    // The push channel is owned here, scoped to the session: opened when a
    // session exists and none is open, torn down when the session goes away.
    {
        let ctx_for_channel = ctx.clone();
        let channel: Rc<RefCell<Option<PushChannel>>> = Rc::new(RefCell::new(None));
        Effect::new(move |_| {
            let user_id = ctx_for_channel.session_user_id();
            match user_id {
                Some(user_id) => {
                    if channel.borrow().is_none() {
                        let handler: Rc<RefCell<dyn PushHandler>> =
                            Rc::new(RefCell::new(DispatchHandler {
                                state: ctx_for_channel.state,
                            }));
                        match PushChannel::connect(
                            &ctx_for_channel.config.socket_url,
                            &user_id,
                            handler,
                        ) {
                            Ok(open_channel) => {
                                *channel.borrow_mut() = Some(open_channel);
                            }
                            Err(err) => log::warn!("push channel connect failed: {err}"),
                        }
                    }
                }
                None => {
                    if let Some(mut open_channel) = channel.borrow_mut().take() {
                        open_channel.close();
                    }
                }
            }
        });
    }

    let route = ctx.route;
    view! {
        <NoticeStack />
        {move || match route.get() {
            Route::Home => view! { <HomePage /> }.into_any(),
            Route::Login => view! { <LoginPage /> }.into_any(),
            Route::Register => view! { <RegisterPage /> }.into_any(),
            Route::ForgotPassword => view! { <ForgotPasswordPage /> }.into_any(),
            Route::ResetPassword { token } => {
                view! { <ResetPasswordPage token=token /> }.into_any()
            }
            Route::VerifyEmail { token } => {
                view! { <VerifyEmailPage token=token /> }.into_any()
            }
            Route::Dashboard => view! {
                <DashboardLayout>
                    <DashboardPage />
                </DashboardLayout>
            }
            .into_any(),
            Route::Tasks => view! {
                <DashboardLayout>
                    <TasksPage />
                </DashboardLayout>
            }
            .into_any(),
        }}
    }
}
