//! Debounced search-as-you-type assignee picker.
//!
//! Each keystroke bumps a generation counter; the spawned search sleeps
//! through the debounce window and bails if it has been superseded, so a
//! late response is a safe no-op.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use taskflow_app::workflows::users as user_flows;
use taskflow_types::UserSummary;

use crate::context::use_app;

const DEBOUNCE_MS: u32 = 300;

#[component]
pub fn UserSearchSelect(
    #[prop(into)] on_select: Callback<UserSummary>,
    #[prop(optional)] exclude_id: Option<String>,
) -> impl IntoView {
    let ctx = use_app();

    let query = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<UserSummary>::new());
    let is_open = RwSignal::new(false);
    let is_searching = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let generation = RwSignal::new(0u64);

    let run_search = {
        let ctx = ctx.clone();
        move |text: String| {
            let my_generation = generation.get_untracked() + 1;
            generation.set(my_generation);
            let ctx = ctx.clone();
            let exclude = exclude_id.clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(DEBOUNCE_MS).await;
                if generation.get_untracked() != my_generation {
                    return;
                }
                is_searching.set(true);
                match user_flows::search_users(&ctx.backend, &text, exclude.as_deref()).await {
                    Ok(users) => {
                        if generation.get_untracked() == my_generation {
                            results.set(users);
                            error.set(None);
                        }
                    }
                    Err(err) => {
                        if generation.get_untracked() == my_generation {
                            results.set(Vec::new());
                            error.set(Some(err.user_message()));
                        }
                    }
                }
                is_searching.set(false);
            });
        }
    };

    view! {
        <div class="user-search">
            <input
                placeholder="Search users..."
                prop:value=move || query.get()
                on:focus=move |_| is_open.set(true)
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    query.set(text.clone());
                    is_open.set(true);
                    run_search(text);
                }
            />
            <Show
                when=move || {
                    is_open.get()
                        && (is_searching.get() || error.get().is_some()
                            || !results.with(|r| r.is_empty()))
                }
                fallback=|| ()
            >
                <div class="user-search-dropdown">
                    {move || {
                        if is_searching.get() {
                            view! { <p class="user-search-hint">"Searching..."</p> }.into_any()
                        } else if let Some(message) = error.get() {
                            view! { <p class="user-search-error">{message}</p> }.into_any()
                        } else {
                            view! {
                                <For
                                    each=move || results.get()
                                    key=|user| user.id.clone()
                                    children=move |user| {
                                        let label = user.username.clone();
                                        let email = user.email.clone().unwrap_or_default();
                                        let choice = user.clone();
                                        view! {
                                            <button
                                                type="button"
                                                class="user-search-item"
                                                on:click=move |_| {
                                                    on_select.run(choice.clone());
                                                    query.set(choice.username.clone());
                                                    is_open.set(false);
                                                }
                                            >
                                                <span class="user-search-name">{label}</span>
                                                <span class="user-search-email">{email}</span>
                                            </button>
                                        }
                                    }
                                />
                            }
                            .into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
