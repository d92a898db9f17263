//! End-to-end behavior of the session machine, the query caches, and the
//! mutation/invalidation contract, driven against a scripted backend.

use std::cell::RefCell;

use async_trait::async_trait;
use taskflow_app::api::Backend;
use taskflow_app::core::{reduce, Update};
use taskflow_app::forms::{LoginForm, ResetPasswordForm};
use taskflow_app::views::{SessionState, ViewState};
use taskflow_app::workflows::{auth, notifications as notification_flows, tasks as task_flows, users as user_flows};
use taskflow_types::{
    ApiError, AvatarOption, Credentials, NewAccount, NewTask, Notification, PasswordReset,
    ProfilePatch, Task, TaskStatus, User, UserSummary,
};

// ============================================================================
// Scripted backend
// ============================================================================

struct MockBackend {
    calls: RefCell<Vec<&'static str>>,
    current_user: Result<User, ApiError>,
    login: Result<User, ApiError>,
    logout: Result<(), ApiError>,
    tasks: Result<Vec<Task>, ApiError>,
    create_task: Result<Task, ApiError>,
    set_status: Result<Task, ApiError>,
    add_comment: Result<Task, ApiError>,
    search_users: Result<Vec<UserSummary>, ApiError>,
    notifications: Result<Vec<Notification>, ApiError>,
    mark_read: Result<(), ApiError>,
    mark_all_read: Result<(), ApiError>,
}

fn unscripted<T>() -> Result<T, ApiError> {
    Err(ApiError::Decode("unscripted call".to_string()))
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            current_user: unscripted(),
            login: unscripted(),
            logout: Ok(()),
            tasks: Ok(Vec::new()),
            create_task: unscripted(),
            set_status: unscripted(),
            add_comment: unscripted(),
            search_users: Ok(Vec::new()),
            notifications: Ok(Vec::new()),
            mark_read: Ok(()),
            mark_all_read: Ok(()),
        }
    }
}

impl MockBackend {
    fn record(&self, name: &'static str) {
        self.calls.borrow_mut().push(name);
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Backend for MockBackend {
    async fn login(&self, _credentials: &Credentials) -> Result<User, ApiError> {
        self.record("login");
        self.login.clone()
    }

    async fn register(&self, _account: &NewAccount) -> Result<User, ApiError> {
        self.record("register");
        self.login.clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record("logout");
        self.logout.clone()
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.record("current_user");
        self.current_user.clone()
    }

    async fn forgot_password(&self, _email: &str) -> Result<(), ApiError> {
        self.record("forgot_password");
        Ok(())
    }

    async fn reset_password(&self, _reset: &PasswordReset) -> Result<(), ApiError> {
        self.record("reset_password");
        Ok(())
    }

    async fn verify_email(&self, _token: &str) -> Result<(), ApiError> {
        self.record("verify_email");
        Ok(())
    }

    async fn tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.record("tasks");
        self.tasks.clone()
    }

    async fn create_task(&self, _new_task: &NewTask) -> Result<Task, ApiError> {
        self.record("create_task");
        self.create_task.clone()
    }

    async fn set_task_status(
        &self,
        _task_id: &str,
        _status: TaskStatus,
    ) -> Result<Task, ApiError> {
        self.record("set_task_status");
        self.set_status.clone()
    }

    async fn add_comment(&self, _task_id: &str, _text: &str) -> Result<Task, ApiError> {
        self.record("add_comment");
        self.add_comment.clone()
    }

    async fn search_users(&self, _query: &str) -> Result<Vec<UserSummary>, ApiError> {
        self.record("search_users");
        self.search_users.clone()
    }

    async fn update_profile(&self, _patch: &ProfilePatch) -> Result<User, ApiError> {
        self.record("update_profile");
        unscripted()
    }

    async fn avatar_library(&self) -> Result<Vec<AvatarOption>, ApiError> {
        self.record("avatar_library");
        Ok(Vec::new())
    }

    async fn select_avatar(&self, _avatar_id: &str) -> Result<User, ApiError> {
        self.record("select_avatar");
        unscripted()
    }

    async fn upload_avatar(
        &self,
        _bytes: Vec<u8>,
        _mime: &str,
        _filename: &str,
    ) -> Result<User, ApiError> {
        self.record("upload_avatar");
        unscripted()
    }

    async fn notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.record("notifications");
        self.notifications.clone()
    }

    async fn mark_notification_read(&self, _id: &str) -> Result<(), ApiError> {
        self.record("mark_notification_read");
        self.mark_read.clone()
    }

    async fn mark_all_notifications_read(&self) -> Result<(), ApiError> {
        self.record("mark_all_notifications_read");
        self.mark_all_read.clone()
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn user(id: &str) -> User {
    User {
        id: id.into(),
        username: "ada".into(),
        email: "ada@example.com".into(),
        avatar: None,
        bio: None,
    }
}

fn summary(id: &str, username: &str) -> UserSummary {
    UserSummary {
        id: id.into(),
        username: username.into(),
        email: None,
        avatar: None,
    }
}

fn task(id: &str, title: &str) -> Task {
    serde_json::from_value(serde_json::json!({
        "_id": id,
        "title": title,
        "status": "To Do",
        "priority": "Medium",
        "createdAt": "2024-05-01T10:00:00Z"
    }))
    .expect("task should build")
}

fn notification(id: &str, read: bool) -> Notification {
    serde_json::from_value(serde_json::json!({
        "_id": id,
        "text": format!("notification {id}"),
        "type": "system",
        "read": read,
        "createdAt": "2024-05-01T09:00:00Z"
    }))
    .expect("notification should build")
}

/// Drive a workflow the way a component does: a shared `ViewState` behind
/// a RefCell, with the reducer as the only writer.
struct Harness {
    state: RefCell<ViewState>,
}

impl Harness {
    fn new() -> Self {
        Self {
            state: RefCell::new(ViewState::new()),
        }
    }

    fn emit(&self) -> impl Fn(Update) + '_ {
        |update| reduce(&mut self.state.borrow_mut(), update)
    }

    fn session(&self) -> SessionState {
        self.state.borrow().session.clone()
    }
}

// ============================================================================
// Session and cache behavior
// ============================================================================

#[tokio::test]
async fn syntactically_invalid_email_never_reaches_the_network() {
    let backend = MockBackend::default();
    let harness = Harness::new();

    let form = LoginForm {
        email: "not-an-email".into(),
        password: "secret".into(),
    };

    // Component contract: submit only a validated form.
    let mut navigations = 0;
    if let Ok(credentials) = form.validate() {
        if auth::login(&backend, &credentials, &harness.emit()).await.is_ok() {
            navigations += 1;
        }
    }

    assert!(backend.calls().is_empty());
    assert_eq!(navigations, 0);
    assert_eq!(harness.session(), SessionState::Unknown);
}

#[tokio::test]
async fn successful_login_authenticates_and_redirects_exactly_once() {
    let backend = MockBackend {
        login: Ok(user("u1")),
        ..MockBackend::default()
    };
    let harness = Harness::new();

    let form = LoginForm {
        email: "ada@example.com".into(),
        password: "secret".into(),
    };
    let credentials = form.validate().expect("form should validate");

    let mut navigations = 0;
    if auth::login(&backend, &credentials, &harness.emit()).await.is_ok() {
        navigations += 1;
    }

    assert_eq!(navigations, 1);
    assert!(harness.session().is_authenticated());
    let notices: Vec<String> = harness
        .state
        .borrow()
        .notices
        .iter()
        .map(|n| n.message.clone())
        .collect();
    assert!(notices.contains(&"Welcome back!".to_string()));
}

#[tokio::test]
async fn failed_login_surfaces_message_without_touching_session() {
    let backend = MockBackend {
        login: Err(ApiError::Api {
            status: 401,
            message: "Invalid credentials".into(),
        }),
        ..MockBackend::default()
    };
    let harness = Harness::new();

    let credentials = Credentials {
        email: "ada@example.com".into(),
        password: "wrong".into(),
    };
    let err = auth::login(&backend, &credentials, &harness.emit())
        .await
        .expect_err("login should fail");

    assert_eq!(err.user_message(), "Invalid credentials");
    assert_eq!(harness.session(), SessionState::Unknown);
}

#[tokio::test]
async fn failed_bootstrap_probe_settles_on_unauthenticated() {
    let backend = MockBackend {
        current_user: Err(ApiError::Api {
            status: 401,
            message: "no session".into(),
        }),
        ..MockBackend::default()
    };
    let harness = Harness::new();

    assert!(!harness.session().is_known());
    auth::bootstrap(&backend, &harness.emit()).await;

    assert_eq!(harness.session(), SessionState::Unauthenticated);
    assert_eq!(backend.calls(), vec!["current_user"]);
}

#[tokio::test]
async fn network_failure_during_bootstrap_is_also_silent() {
    let backend = MockBackend {
        current_user: Err(ApiError::Network("offline".into())),
        ..MockBackend::default()
    };
    let harness = Harness::new();

    auth::bootstrap(&backend, &harness.emit()).await;
    assert_eq!(harness.session(), SessionState::Unauthenticated);
    // Silent: no error notice for a failed probe.
    assert!(harness.state.borrow().notices.is_empty());
}

#[tokio::test]
async fn logout_clears_local_state_even_when_the_server_call_fails() {
    let backend = MockBackend {
        logout: Err(ApiError::Network("connection reset".into())),
        ..MockBackend::default()
    };
    let harness = Harness::new();
    let emit = harness.emit();

    emit(Update::SessionEstablished(user("u1")));
    emit(Update::TasksLoaded(vec![task("t1", "a")]));
    emit(Update::NotificationsLoaded(vec![notification("n1", false)]));

    auth::logout(&backend, &emit).await;

    let state = harness.state.borrow();
    assert_eq!(state.session, SessionState::Unauthenticated);
    assert!(state.tasks.items.is_empty());
    assert!(state.notifications.items.is_empty());
    assert!(state.notifications.feed.is_empty());
    assert_eq!(backend.calls(), vec!["logout"]);
}

#[tokio::test]
async fn marking_one_notification_read_decrements_unread_by_one() {
    let backend = MockBackend::default();
    let harness = Harness::new();
    let emit = harness.emit();

    emit(Update::NotificationsLoaded(vec![
        notification("n1", false),
        notification("n2", false),
        notification("n3", true),
    ]));
    assert_eq!(harness.state.borrow().notifications.unread_count(), 2);

    notification_flows::mark_read(&backend, "n2", &emit)
        .await
        .expect("mark read should succeed");

    let state = harness.state.borrow();
    assert_eq!(state.notifications.unread_count(), 1);
    let n2 = state
        .notifications
        .items
        .iter()
        .find(|n| n.id == "n2")
        .expect("n2 present");
    assert!(n2.read);
    drop(state);

    notification_flows::mark_all_read(&backend, &emit)
        .await
        .expect("mark all should succeed");
    assert_eq!(harness.state.borrow().notifications.unread_count(), 0);
}

#[tokio::test]
async fn create_task_refetches_the_declared_queries() {
    let backend = MockBackend {
        create_task: Ok(task("t9", "fresh")),
        tasks: Ok(vec![task("t9", "fresh"), task("t1", "old")]),
        ..MockBackend::default()
    };
    let harness = Harness::new();

    let new_task = NewTask {
        title: "fresh".into(),
        description: None,
        priority: taskflow_types::TaskPriority::Medium,
        assigned_to: None,
    };
    task_flows::create_task(&backend, &new_task, &harness.emit())
        .await
        .expect("create should succeed");

    // Mutation first, then the invalidated query refetch.
    assert_eq!(backend.calls(), vec!["create_task", "tasks"]);
    let state = harness.state.borrow();
    assert_eq!(state.tasks.items.len(), 2);
    assert!(state
        .notices
        .iter()
        .any(|n| n.message == "Task created"));
}

#[tokio::test]
async fn status_transition_refetches_and_announces() {
    let backend = MockBackend {
        set_status: Ok(task("t1", "a")),
        tasks: Ok(vec![task("t1", "a")]),
        ..MockBackend::default()
    };
    let harness = Harness::new();

    task_flows::set_status(&backend, "t1", TaskStatus::Review, &harness.emit())
        .await
        .expect("transition should succeed");

    assert_eq!(backend.calls(), vec!["set_task_status", "tasks"]);
    assert!(harness
        .state
        .borrow()
        .notices
        .iter()
        .any(|n| n.message == "Task moved to Review"));
}

#[tokio::test]
async fn short_search_queries_skip_the_network_and_requester_is_excluded() {
    let backend = MockBackend {
        search_users: Ok(vec![summary("u1", "ada"), summary("u2", "grace")]),
        ..MockBackend::default()
    };

    let hits = user_flows::search_users(&backend, " a ", Some("u1"))
        .await
        .expect("short query should succeed");
    assert!(hits.is_empty());
    assert!(backend.calls().is_empty());

    let hits = user_flows::search_users(&backend, "gr", Some("u1"))
        .await
        .expect("search should succeed");
    assert_eq!(backend.calls(), vec!["search_users"]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].username, "grace");
}

#[tokio::test]
async fn reset_password_mismatch_fails_locally_without_a_request() {
    let backend = MockBackend::default();

    let form = ResetPasswordForm {
        password: "123456".into(),
        confirm: "654321".into(),
    };
    let errors = form.validate("tok").expect_err("mismatch should fail");
    assert!(errors.get("confirm").is_some());

    // The reset screen with a missing token never validates nor submits;
    // with a present token but failed validation it must not submit either.
    assert!(backend.calls().is_empty());
}
