//! The bell dropdown: recent push feed on top, persisted inbox below,
//! with per-item and bulk mark-read.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use taskflow_app::core::Update;
use taskflow_app::workflows::notifications as notification_flows;

use crate::components::ui::EmptyState;
use crate::context::use_app;
use crate::format::relative_time;

#[component]
pub fn NotificationsDropdown() -> impl IntoView {
    let ctx = use_app();
    let is_open = RwSignal::new(false);

    let has_unread = {
        let ctx = ctx.clone();
        move || ctx.state.with(|s| s.notifications.unread_count() > 0)
    };
    let feed = {
        let ctx = ctx.clone();
        move || ctx.state.with(|s| s.notifications.feed.clone())
    };
    let inbox = {
        let ctx = ctx.clone();
        move || ctx.state.with(|s| s.notifications.items.clone())
    };
    let is_empty = {
        let feed = feed.clone();
        let inbox = inbox.clone();
        move || feed().is_empty() && inbox().is_empty()
    };
    let feed_nonempty = {
        let feed = feed.clone();
        move || !feed().is_empty()
    };
    let inbox_nonempty = {
        let inbox = inbox.clone();
        move || !inbox().is_empty()
    };

    let on_mark_all = {
        let ctx = ctx.clone();
        move |_| {
            let ctx = ctx.clone();
            spawn_local(async move {
                if let Err(err) =
                    notification_flows::mark_all_read(&ctx.backend, &ctx.emitter()).await
                {
                    log::warn!("mark-all-read failed: {err}");
                }
            });
        }
    };

    let on_clear_feed = {
        let ctx = ctx.clone();
        move |_| ctx.dispatch(Update::FeedCleared)
    };

    let ctx_items = ctx.clone();
    view! {
        <div class="notifications">
            <button class="bell" on:click=move |_| is_open.update(|open| *open = !*open)>
                "🔔"
                <Show when=has_unread.clone() fallback=|| ()>
                    <span class="bell-dot"></span>
                </Show>
            </button>

            <Show when=move || is_open.get() fallback=|| ()>
                <div class="notifications-dropdown">
                    <div class="notifications-header">
                        <h3>"Notifications"</h3>
                        <button class="link link-subtle" on:click=on_mark_all.clone()>
                            "Mark all read"
                        </button>
                    </div>

                    <Show when=is_empty.clone() fallback=|| ()>
                        <EmptyState message="No new notifications" />
                    </Show>

                    <Show when=feed_nonempty.clone() fallback=|| ()>
                        <div class="notifications-section">
                            <h4>"Recent"</h4>
                            <For
                                each=feed.clone()
                                key=|entry| entry.id.clone()
                                children=|entry| {
                                    view! {
                                        <div class="notification-row">
                                            <p>{entry.text.clone()}</p>
                                            <span class="notification-time">
                                                {relative_time(entry.at)}
                                            </span>
                                        </div>
                                    }
                                }
                            />
                            <button class="link link-subtle" on:click=on_clear_feed.clone()>
                                "Clear all"
                            </button>
                        </div>
                    </Show>

                    <Show when=inbox_nonempty.clone() fallback=|| ()>
                        <div class="notifications-section">
                            <h4>"Inbox"</h4>
                            <For
                                each=inbox.clone()
                                key=|notification| {
                                    (notification.id.clone(), notification.read)
                                }
                                children=move |notification| {
                                    let ctx = ctx_items.clone();
                                    let id = notification.id.clone();
                                    let on_read = move |_| {
                                        let ctx = ctx.clone();
                                        let id = id.clone();
                                        spawn_local(async move {
                                            if let Err(err) = notification_flows::mark_read(
                                                &ctx.backend,
                                                &id,
                                                &ctx.emitter(),
                                            )
                                            .await
                                            {
                                                log::warn!("mark-read failed: {err}");
                                            }
                                        });
                                    };
                                    view! {
                                        <div
                                            class="notification-row"
                                            class:unread=!notification.read
                                        >
                                            <p>{notification.text.clone()}</p>
                                            <span class="notification-time">
                                                {relative_time(notification.created_at)}
                                            </span>
                                            <Show when=move || !notification.read fallback=|| ()>
                                                <button
                                                    class="link link-subtle"
                                                    on:click=on_read.clone()
                                                >
                                                    "Mark read"
                                                </button>
                                            </Show>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
