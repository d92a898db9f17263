//! Dashboard: headline stats, urgent preview, cross-task activity feed,
//! and the quick-task / profile / task-detail modals.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use taskflow_app::forms::{FieldErrors, SubmitState, TaskForm};
use taskflow_app::views::ActivityFeedEntry;
use taskflow_app::workflows::tasks as task_flows;
use taskflow_types::{Task, TaskPriority, UserSummary};

use crate::components::notifications::NotificationsDropdown;
use crate::components::profile::ProfilePanel;
use crate::components::task_detail::TaskDetailView;
use crate::components::ui::{EmptyState, FieldError, Modal, RouteLink, Spinner};
use crate::components::user_search::UserSearchSelect;
use crate::context::use_app;
use crate::format::relative_time;
use crate::route::Route;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app();

    let is_new_task_open = RwSignal::new(false);
    let is_profile_open = RwSignal::new(false);
    let selected_task = RwSignal::new(None::<String>);

    let username = {
        let ctx = ctx.clone();
        move || {
            ctx.state.with(|s| {
                s.session
                    .user()
                    .map(|user| user.username.clone())
                    .unwrap_or_else(|| "there".to_string())
            })
        }
    };
    let stats = {
        let ctx = ctx.clone();
        Memo::new(move |_| ctx.state.with(|s| s.tasks.stats()))
    };
    let is_loading = {
        let ctx = ctx.clone();
        move || ctx.state.with(|s| s.tasks.status.is_loading())
    };
    let urgent = {
        let ctx = ctx.clone();
        move || {
            ctx.state.with(|s| {
                s.tasks
                    .urgent_preview()
                    .into_iter()
                    .cloned()
                    .collect::<Vec<Task>>()
            })
        }
    };
    let activity = {
        let ctx = ctx.clone();
        move || ctx.state.with(|s| s.tasks.recent_activity())
    };

    let urgent_for_list = urgent.clone();
    view! {
        <div class="page">
            <header class="page-header page-header-row">
                <div>
                    <h1>"Welcome back, " {username}</h1>
                    <p>"Here is what's happening with your projects today."</p>
                </div>
                <div class="page-header-actions">
                    <NotificationsDropdown />
                    <button
                        class="button button-ghost"
                        on:click=move |_| is_profile_open.set(true)
                    >
                        "Profile"
                    </button>
                    <button
                        class="button button-primary"
                        on:click=move |_| is_new_task_open.set(true)
                    >
                        "+ Quick Task"
                    </button>
                </div>
            </header>

            <div class="stat-grid">
                <RouteLink to=Route::Tasks class="stat-card-link">
                    <div class="stat-card">
                        <h3>"Active Tasks"</h3>
                        <p class="stat-value">{move || stats.get().open}</p>
                        <p class="stat-hint">
                            {move || format!("Out of {} total tasks", stats.get().total)}
                        </p>
                    </div>
                </RouteLink>
                <RouteLink to=Route::Tasks class="stat-card-link">
                    <div class="stat-card stat-card-urgent">
                        <h3>"Urgent"</h3>
                        <p class="stat-value">{move || urgent_for_list().len()}</p>
                        <p class="stat-hint">"Require immediate attention"</p>
                    </div>
                </RouteLink>
                <RouteLink to=Route::Tasks class="stat-card-link">
                    <div class="stat-card stat-card-done">
                        <h3>"Completed"</h3>
                        <p class="stat-value">{move || stats.get().completed}</p>
                        <p class="stat-hint">
                            {move || format!("Success rate: {}%", stats.get().completion_rate())}
                        </p>
                    </div>
                </RouteLink>
            </div>

            <div class="dashboard-columns">
                <section class="panel">
                    <div class="panel-header">
                        <h2>"Urgent Attention"</h2>
                        <RouteLink to=Route::Tasks class="link link-subtle">"View All"</RouteLink>
                    </div>
                    {
                        let urgent = urgent.clone();
                        let is_loading = is_loading.clone();
                        move || {
                            if is_loading() {
                                return view! { <Spinner /> }.into_any();
                            }
                            let tasks = urgent();
                            if tasks.is_empty() {
                                view! {
                                    <EmptyState message="No urgent tasks at the moment. Good job!" />
                                }
                                .into_any()
                            } else {
                                view! {
                                    <For
                                        each=move || tasks.clone()
                                        key=|task| (task.id.clone(), task.status, task.priority)
                                        children=move |task| {
                                            let task_id = task.id.clone();
                                            let description =
                                                task.description.clone().unwrap_or_default();
                                            view! {
                                                <div
                                                    class="urgent-row"
                                                    on:click=move |_| {
                                                        selected_task.set(Some(task_id.clone()))
                                                    }
                                                >
                                                    <span class=format!(
                                                        "badge priority-{}",
                                                        task.priority.as_str().to_lowercase()
                                                    )>{task.priority.as_str()}</span>
                                                    <div class="urgent-row-text">
                                                        <p class="urgent-title">{task.title.clone()}</p>
                                                        <p class="urgent-description">{description}</p>
                                                    </div>
                                                    <span class="badge badge-status">
                                                        {task.status.as_str()}
                                                    </span>
                                                </div>
                                            }
                                        }
                                    />
                                }
                                .into_any()
                            }
                        }
                    }
                </section>

                <section class="panel">
                    <div class="panel-header">
                        <h2>"Recent Activity"</h2>
                    </div>
                    {
                        let activity = activity.clone();
                        let is_loading = is_loading.clone();
                        move || {
                            if is_loading() {
                                return view! { <Spinner /> }.into_any();
                            }
                            let entries = activity();
                            if entries.is_empty() {
                                view! { <EmptyState message="No recent activity reported." /> }
                                    .into_any()
                            } else {
                                view! {
                                    <For
                                        each=move || entries.clone()
                                        key=|entry: &ActivityFeedEntry| {
                                            (entry.task_id.clone(), entry.created_at,
                                                entry.details.clone())
                                        }
                                        children=|entry| {
                                            view! {
                                                <div class="activity-row">
                                                    <p>
                                                        <span class="activity-author">
                                                            {entry.author.clone()}
                                                        </span>
                                                        " " {entry.details.clone()} " in "
                                                        <span class="activity-task">
                                                            {entry.task_title.clone()}
                                                        </span>
                                                    </p>
                                                    <span class="activity-time">
                                                        {relative_time(entry.created_at)}
                                                    </span>
                                                </div>
                                            }
                                        }
                                    />
                                }
                                .into_any()
                            }
                        }
                    }
                </section>
            </div>

            <Show when=move || is_new_task_open.get() fallback=|| ()>
                <Modal title="Create New Task" on_close=move |_| is_new_task_open.set(false)>
                    <CreateTaskForm on_created=move |_| is_new_task_open.set(false) />
                </Modal>
            </Show>

            <Show when=move || is_profile_open.get() fallback=|| ()>
                <Modal title="My Profile" on_close=move |_| is_profile_open.set(false)>
                    <ProfilePanel />
                </Modal>
            </Show>

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
fn CreateTaskForm(#[prop(into)] on_created: Callback<()>) -> impl IntoView {
    let ctx = use_app();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let priority = RwSignal::new(TaskPriority::Medium);
    let assigned_to = RwSignal::new(None::<String>);
    let errors = RwSignal::new(FieldErrors::new());
    let submit = RwSignal::new(SubmitState::Idle);

    let exclude_id = ctx.session_user_id();

    let on_submit = {
        let ctx = ctx.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let form = TaskForm {
                title: title.get_untracked(),
                description: description.get_untracked(),
                priority: priority.get_untracked(),
                assigned_to: assigned_to.get_untracked(),
            };
            match form.validate() {
                Err(field_errors) => errors.set(field_errors),
                Ok(new_task) => {
                    errors.set(FieldErrors::new());
                    submit.set(SubmitState::Submitting);
                    let ctx = ctx.clone();
                    spawn_local(async move {
                        match task_flows::create_task(&ctx.backend, &new_task, &ctx.emitter())
                            .await
                        {
                            Ok(()) => {
                                submit.set(SubmitState::Succeeded);
                                on_created.run(());
                            }
                            Err(err) => submit.set(SubmitState::Failed(err.user_message())),
                        }
                    });
                }
            }
        }
    };

    view! {
        <form class="task-form" on:submit=on_submit>
            <Show when=move || submit.with(|s| s.failure().is_some()) fallback=|| ()>
                <div class="form-banner form-banner-error">
                    {move || submit.with(|s| s.failure().unwrap_or_default().to_string())}
                </div>
            </Show>

            <label for="title">"Title"</label>
            <input
                id="title"
                placeholder="Task title"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <FieldError errors=errors field="title" />

            <label for="description">"Description"</label>
            <input
                id="description"
                placeholder="Details..."
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            />

            <label for="priority">"Priority"</label>
            <select
                id="priority"
                on:change=move |ev| {
                    if let Ok(parsed) = event_target_value(&ev).parse::<TaskPriority>() {
                        priority.set(parsed);
                    }
                }
            >
                {TaskPriority::ALL
                    .into_iter()
                    .map(|choice| {
                        view! {
                            <option
                                value=choice.as_str()
                                selected=move || priority.get() == choice
                            >
                                {choice.as_str()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            <label>"Assign To"</label>
            <UserSearchSelect
                on_select=move |user: UserSummary| assigned_to.set(Some(user.id))
                exclude_id=exclude_id
            />

            <button
                type="submit"
                class="button button-primary button-block"
                disabled=move || submit.with(|s| s.is_submitting())
            >
                {move || {
                    if submit.with(|s| s.is_submitting()) { "Creating..." } else { "Create Task" }
                }}
            </button>
        </form>
    }
}
