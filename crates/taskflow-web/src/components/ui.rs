//! Shared UI bits: modal, route-aware links, field errors, notices.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use taskflow_app::core::Update;
use taskflow_app::forms::FieldErrors;

use crate::context::use_app;
use crate::route::Route;

/// A centered overlay dialog. Visibility is the parent's business; when
/// rendered, the close affordances call `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>{title}</h3>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}

/// An anchor that navigates client-side.
#[component]
pub fn RouteLink(
    to: Route,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_app();
    let href = to.path();
    view! {
        <a
            href=href
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                ctx.navigate(to.clone());
            }
        >
            {children()}
        </a>
    }
}

/// The validation message for one form field, if any.
#[component]
pub fn FieldError(errors: RwSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    view! {
        <Show when=move || errors.with(|e| e.get(field).is_some()) fallback=|| ()>
            <p class="field-error">
                {move || errors.with(|e| e.get(field).unwrap_or_default().to_string())}
            </p>
        </Show>
    }
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! { <div class="spinner" aria-label="Loading"></div> }
}

/// Dashed-border placeholder for empty collections.
#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="empty-state">{message}</div> }
}

/// How long a notice stays up before it dismisses itself.
const NOTICE_TTL_MS: u32 = 4_000;

/// The stack of transient notices. Each entry self-dismisses after a few
/// seconds or on click.
#[component]
pub fn NoticeStack() -> impl IntoView {
    let ctx = use_app();
    let notices = {
        let ctx = ctx.clone();
        move || ctx.state.with(|s| s.notices.clone())
    };
    let ctx_entries = ctx.clone();
    view! {
        <div class="notice-stack">
            <For
                each=notices
                key=|notice| notice.id
                children=move |notice| {
                    let ctx = ctx_entries.clone();
                    let id = notice.id;
                    {
                        let ctx = ctx.clone();
                        spawn_local(async move {
                            gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
                            ctx.dispatch(Update::NoticeDismissed(id));
                        });
                    }
                    view! {
                        <div
                            class=format!("notice notice-{}", notice.level.label())
                            on:click=move |_| ctx.dispatch(Update::NoticeDismissed(id))
                        >
                            {notice.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
