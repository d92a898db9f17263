//! Task list with client-side search and status filtering, plus the
//! standalone tasks page that hosts it.

use leptos::prelude::*;

use taskflow_app::views::StatusFilter;
use taskflow_types::Task;

use crate::components::task_detail::TaskDetailView;
use crate::components::ui::{EmptyState, Modal, Spinner};
use crate::context::use_app;
use crate::format::due_date;

#[component]
pub fn TasksPage() -> impl IntoView {
    let selected_task = RwSignal::new(None::<String>);

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"My Tasks"</h1>
                <p>"Manage and track all project tasks in one place."</p>
            </header>

            <TaskList on_task_click=move |task: Task| selected_task.set(Some(task.id)) />

            <Show when=move || selected_task.with(|id| id.is_some()) fallback=|| ()>
                <Modal title="Task Details" on_close=move |_| selected_task.set(None)>
                    {move || {
                        selected_task
                            .get()
                            .map(|task_id| view! { <TaskDetailView task_id=task_id /> })
                    }}
                </Modal>
            </Show>
        </div>
    }
}

#[component]
pub fn TaskList(#[prop(into)] on_task_click: Callback<Task>) -> impl IntoView {
    let ctx = use_app();

    let search = RwSignal::new(String::new());
    let filter = RwSignal::new(StatusFilter::All);

    let is_loading = {
        let ctx = ctx.clone();
        move || ctx.state.with(|s| s.tasks.status.is_loading())
    };
    let filtered = {
        let ctx = ctx.clone();
        move || {
            ctx.state.with(|s| {
                s.tasks
                    .filtered(&search.get(), filter.get())
                    .into_iter()
                    .cloned()
                    .collect::<Vec<Task>>()
            })
        }
    };

    view! {
        <div class="task-list">
            <div class="task-list-controls">
                <input
                    class="task-search"
                    placeholder="Search tasks..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    if let Ok(parsed) = event_target_value(&ev).parse::<StatusFilter>() {
                        filter.set(parsed);
                    }
                }>
                    {StatusFilter::choices()
                        .into_iter()
                        .map(|choice| {
                            let label = choice.to_string();
                            let value = match choice {
                                StatusFilter::All => "All".to_string(),
                                StatusFilter::Only(status) => status.as_str().to_string(),
                            };
                            view! {
                                <option value=value selected=move || filter.get() == choice>
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            {move || {
                if is_loading() {
                    view! { <Spinner /> }.into_any()
                } else {
                    let tasks = filtered();
                    if tasks.is_empty() {
                        view! {
                            <EmptyState message="No tasks found matching your filters." />
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="task-grid">
                                <For
                                    each=move || tasks.clone()
                                    key=|task| {
                                        (task.id.clone(), task.status, task.priority,
                                            task.title.clone())
                                    }
                                    children=move |task| {
                                        let clicked = task.clone();
                                        view! {
                                            <div
                                                class="task-card-wrapper"
                                                on:click=move |_| on_task_click.run(clicked.clone())
                                            >
                                                <TaskCard task=task.clone() />
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        }
                        .into_any()
                    }
                }
            }}
        </div>
    }
}

#[component]
fn TaskCard(task: Task) -> impl IntoView {
    let creator = task
        .creator
        .as_ref()
        .map(|summary| summary.username.clone())
        .unwrap_or_else(|| "Unknown".to_string());
    let description = task
        .description
        .clone()
        .unwrap_or_else(|| "No description provided.".to_string());
    let title = task.title.clone();
    let priority_class = format!("badge priority-{}", task.priority.as_str().to_lowercase());
    let priority_label = task.priority.as_str();
    let status_label = task.status.as_str();
    let due = due_date(task.due_date);
    let tag_badges = (!task.tags.is_empty()).then(|| {
        task.tags
            .iter()
            .map(|tag| view! { <span class="badge badge-tag">{tag.clone()}</span> })
            .collect_view()
    });

    view! {
        <div class="task-card">
            <div class="task-card-header">
                <h3>{title}</h3>
                <span class=priority_class>{priority_label}</span>
            </div>
            <p class="task-card-creator">"Created by " {creator}</p>
            <p class="task-card-description">{description}</p>
            <div class="task-card-tags">{tag_badges}</div>
            <div class="task-card-footer">
                <span class="task-card-due">{due}</span>
                <span class="badge badge-status">{status_label}</span>
            </div>
        </div>
    }
}
