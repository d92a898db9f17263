//! # Dashboard Shell
//!
//! Sidebar navigation plus the protected-route gate. While the session is
//! `Unknown` the shell renders only a spinner; it redirects to login only
//! once `Unauthenticated` is confirmed, so bootstrap never flashes a
//! redirect. Once a session exists, the shell kicks off the session-scoped
//! queries that are still idle.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use taskflow_app::cache::QueryStatus;
use taskflow_app::views::SessionState;
use taskflow_app::workflows::{auth, notifications as notification_flows, tasks as task_flows};

use crate::components::ui::{RouteLink, Spinner};
use crate::context::use_app;
use crate::route::Route;

#[component]
pub fn DashboardLayout(children: ChildrenFn) -> impl IntoView {
    let ctx = use_app();

    // Redirect only once unauthenticated is confirmed.
    {
        let ctx = ctx.clone();
        Effect::new(move |_| {
            let confirmed_unauthenticated = ctx
                .state
                .with(|s| s.session.is_known() && !s.session.is_authenticated());
            if confirmed_unauthenticated {
                ctx.navigate(Route::Login);
            }
        });
    }

    // Fetch idle session-scoped queries as soon as a session exists.
    {
        let ctx = ctx.clone();
        Effect::new(move |_| {
            if !ctx.state.with(|s| s.session.is_authenticated()) {
                return;
            }
            if ctx.state.with(|s| s.tasks.status == QueryStatus::Idle) {
                let ctx = ctx.clone();
                spawn_local(async move {
                    task_flows::load_tasks(&ctx.backend, &ctx.emitter()).await;
                });
            }
            if ctx
                .state
                .with(|s| s.notifications.status == QueryStatus::Idle)
            {
                let ctx = ctx.clone();
                spawn_local(async move {
                    notification_flows::load_notifications(&ctx.backend, &ctx.emitter()).await;
                });
            }
        });
    }

    let session = {
        let ctx = ctx.clone();
        move || ctx.state.with(|s| s.session.clone())
    };

    view! {
        {move || match session() {
            SessionState::Unknown => view! {
                <div class="fullscreen-center">
                    <Spinner />
                </div>
            }
            .into_any(),
            SessionState::Unauthenticated => ().into_any(),
            SessionState::Authenticated(user) => {
                let username = user.username.clone();
                let email = user.email.clone();
                view! {
                    <div class="shell">
                        <aside class="sidebar">
                            <div class="sidebar-brand">
                                <h1>"TaskFlow"</h1>
                            </div>
                            <nav class="sidebar-nav">
                                <NavItem to=Route::Dashboard label="Dashboard" />
                                <NavItem to=Route::Tasks label="My Tasks" />
                            </nav>
                            <div class="sidebar-footer">
                                <div class="sidebar-user">
                                    <p class="sidebar-username">{username}</p>
                                    <p class="sidebar-email">{email}</p>
                                </div>
                                <LogoutButton />
                            </div>
                        </aside>
                        <main class="content">{children()}</main>
                    </div>
                }
                .into_any()
            }
        }}
    }
}

#[component]
fn NavItem(to: Route, label: &'static str) -> impl IntoView {
    let ctx = use_app();
    let target = to.clone();
    let active = move || ctx.route.with(|route| *route == target);
    view! {
        <RouteLink to=to class="sidebar-link">
            <span class:active=active>{label}</span>
        </RouteLink>
    }
}

#[component]
fn LogoutButton() -> impl IntoView {
    let ctx = use_app();
    let on_logout = move |_| {
        let ctx = ctx.clone();
        spawn_local(async move {
            auth::logout(&ctx.backend, &ctx.emitter()).await;
            ctx.navigate(Route::Login);
        });
    };
    view! {
        <button class="button button-outline sidebar-logout" on:click=on_logout>
            "Logout"
        </button>
    }
}
