//! Task detail: status transitions, comments, activity log.
//!
//! The view reads the task live from the cache by id, so a push-driven
//! update refreshes an open modal instead of yanking it shut.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use taskflow_app::forms::validate_comment;
use taskflow_app::workflows::tasks as task_flows;
use taskflow_types::{Task, TaskStatus};

use crate::components::ui::EmptyState;
use crate::context::use_app;
use crate::format::relative_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailTab {
    Comments,
    Activity,
}

#[component]
pub fn TaskDetailView(task_id: String) -> impl IntoView {
    let ctx = use_app();

    let comment = RwSignal::new(String::new());
    let in_flight = RwSignal::new(false);
    let tab = RwSignal::new(DetailTab::Comments);

    let task = {
        let ctx = ctx.clone();
        let task_id = task_id.clone();
        move || ctx.state.with(|s| s.tasks.get(&task_id).cloned())
    };

    let may_transition = {
        let ctx = ctx.clone();
        let task = task.clone();
        move || {
            let user_id = ctx.session_user_id();
            match (task(), user_id) {
                (Some(task), Some(user_id)) => task.can_transition(&user_id),
                _ => false,
            }
        }
    };

    let on_status = {
        let ctx = ctx.clone();
        let task_id = task_id.clone();
        move |status: TaskStatus| {
            let ctx = ctx.clone();
            let task_id = task_id.clone();
            in_flight.set(true);
            spawn_local(async move {
                if let Err(err) =
                    task_flows::set_status(&ctx.backend, &task_id, status, &ctx.emitter()).await
                {
                    log::warn!("status transition failed: {err}");
                }
                in_flight.set(false);
            });
        }
    };

    let on_comment = {
        let ctx = ctx.clone();
        let task_id = task_id.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(text) = validate_comment(&comment.get_untracked()) else {
                return;
            };
            let ctx = ctx.clone();
            let task_id = task_id.clone();
            in_flight.set(true);
            spawn_local(async move {
                match task_flows::add_comment(&ctx.backend, &task_id, &text, &ctx.emitter()).await
                {
                    Ok(()) => comment.set(String::new()),
                    Err(err) => log::warn!("comment failed: {err}"),
                }
                in_flight.set(false);
            });
        }
    };

    view! {
        {move || match task() {
            None => view! { <EmptyState message="This task is no longer available." /> }
                .into_any(),
            Some(task) => {
                let on_status = on_status.clone();
                let on_comment = on_comment.clone();
                let may_transition = may_transition.clone();
                view! {
                    <div class="task-detail">
                        <div class="task-detail-header">
                            <h2>{task.title.clone()}</h2>
                            <span class="badge badge-status">{task.status.as_str()}</span>
                        </div>
                        <p class="task-detail-description">
                            {task.description.clone().unwrap_or_default()}
                        </p>

                        <Show when=may_transition.clone() fallback=|| ()>
                            <StatusButtons
                                current=task.status
                                in_flight=in_flight
                                on_status=on_status.clone()
                            />
                        </Show>

                        <div class="tabs">
                            <button
                                class:active=move || tab.get() == DetailTab::Comments
                                on:click=move |_| tab.set(DetailTab::Comments)
                            >
                                {format!("Comments ({})", task.comments.len())}
                            </button>
                            <button
                                class:active=move || tab.get() == DetailTab::Activity
                                on:click=move |_| tab.set(DetailTab::Activity)
                            >
                                {format!("Activity Log ({})", task.activity.len())}
                            </button>
                        </div>

                        {
                            let task = task.clone();
                            move || match tab.get() {
                                DetailTab::Comments => view! {
                                    <CommentsTab
                                        task=task.clone()
                                        comment=comment
                                        in_flight=in_flight
                                        on_comment=on_comment.clone()
                                    />
                                }
                                .into_any(),
                                DetailTab::Activity => view! { <ActivityTab task=task.clone() /> }
                                    .into_any(),
                            }
                        }
                    </div>
                }
                .into_any()
            }
        }}
    }
}

#[component]
fn StatusButtons<F>(current: TaskStatus, in_flight: RwSignal<bool>, on_status: F) -> impl IntoView
where
    F: Fn(TaskStatus) + Clone + 'static,
{
    view! {
        <div class="status-buttons">
            <h4>"Update Status"</h4>
            <div class="status-button-row">
                {TaskStatus::ALL
                    .into_iter()
                    .map(|status| {
                        let on_status = on_status.clone();
                        let is_current = status == current;
                        view! {
                            <button
                                class="button button-small"
                                class:current=is_current
                                disabled=move || in_flight.get() || is_current
                                on:click=move |_| on_status(status)
                            >
                                {status.as_str()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn CommentsTab<F>(
    task: Task,
    comment: RwSignal<String>,
    in_flight: RwSignal<bool>,
    on_comment: F,
) -> impl IntoView
where
    F: Fn(leptos::ev::SubmitEvent) + 'static,
{
    let comments = task.comments.clone();
    view! {
        <div class="comments">
            {if comments.is_empty() {
                view! {
                    <EmptyState message="No comments yet. Be the first to start the conversation!" />
                }
                .into_any()
            } else {
                comments
                    .iter()
                    .map(|comment| {
                        view! {
                            <div class="comment">
                                <div class="comment-meta">
                                    <span class="comment-author">
                                        {comment.author.username.clone()}
                                    </span>
                                    <span class="comment-time">
                                        {relative_time(comment.created_at)}
                                    </span>
                                </div>
                                <p>{comment.text.clone()}</p>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}

            <form class="comment-form" on:submit=on_comment>
                <input
                    placeholder="Add a comment..."
                    prop:value=move || comment.get()
                    on:input=move |ev| comment.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="button button-primary"
                    disabled=move || {
                        in_flight.get() || comment.with(|text| text.trim().is_empty())
                    }
                >
                    "Send"
                </button>
            </form>
        </div>
    }
}

#[component]
fn ActivityTab(task: Task) -> impl IntoView {
    let entries = task.activity.clone();
    view! {
        <div class="activity-log">
            {if entries.is_empty() {
                view! { <EmptyState message="No activity recorded yet." /> }.into_any()
            } else {
                entries
                    .iter()
                    .map(|entry| {
                        view! {
                            <div class="activity-entry">
                                <span class="activity-author">
                                    {entry.author.username.clone()}
                                </span>
                                <span class="activity-details">{entry.details.clone()}</span>
                                <span class="activity-time">
                                    {relative_time(entry.created_at)}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
