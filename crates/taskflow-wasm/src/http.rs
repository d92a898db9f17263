//! # HTTP Backend
//!
//! `taskflow_app::Backend` implemented over the browser `fetch` API via
//! `gloo-net`. Every request carries credentials (the session cookie), and
//! every response funnels through the envelope decoder in
//! `taskflow-types`, so endpoint methods stay one-liners.

use gloo_net::http::{Request, RequestBuilder, Response};
use js_sys::{Array, Uint8Array};
use serde::de::DeserializeOwned;
use serde::Serialize;
use taskflow_app::api::Backend;
use taskflow_app::config::ClientConfig;
use taskflow_types::avatar::AvatarsData;
use taskflow_types::envelope::{Acknowledged, Envelope};
use taskflow_types::notification::NotificationsData;
use taskflow_types::task::{TaskData, TasksData};
use taskflow_types::user::{UserData, UsersData};
use taskflow_types::{
    ApiError, AvatarOption, Credentials, NewAccount, NewTask, Notification, PasswordReset,
    ProfilePatch, Task, TaskStatus, User, UserSummary,
};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData, RequestCredentials};

/// The `fetch`-backed API client.
#[derive(Clone)]
pub struct HttpBackend {
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url.trim_end_matches('/'), path)
    }

    fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
        builder.credentials(RequestCredentials::Include)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Self::with_credentials(Request::get(&self.endpoint(path)))
            .send()
            .await
            .map_err(network_error)?;
        decode_envelope(response).await
    }

    async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let builder = Request::get(&self.endpoint(path)).query(query.iter().copied());
        let response = Self::with_credentials(builder)
            .send()
            .await
            .map_err(network_error)?;
        decode_envelope(response).await
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        Self::with_credentials(Request::post(&self.endpoint(path)))
            .json(body)
            .map_err(|err| ApiError::Decode(err.to_string()))?
            .send()
            .await
            .map_err(network_error)
    }

    async fn patch_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        Self::with_credentials(Request::patch(&self.endpoint(path)))
            .json(body)
            .map_err(|err| ApiError::Decode(err.to_string()))?
            .send()
            .await
            .map_err(network_error)
    }

    async fn post_empty(&self, path: &str) -> Result<Response, ApiError> {
        Self::with_credentials(Request::post(&self.endpoint(path)))
            .send()
            .await
            .map_err(network_error)
    }

    async fn patch_empty(&self, path: &str) -> Result<Response, ApiError> {
        Self::with_credentials(Request::patch(&self.endpoint(path)))
            .send()
            .await
            .map_err(network_error)
    }
}

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Unwrap a `{status, data, message}` response into its payload.
async fn decode_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let envelope: Envelope<T> = response
        .json()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    envelope.into_result(status)
}

/// Accept any 2xx as success; otherwise surface the envelope message.
async fn expect_ack(response: Response) -> Result<(), ApiError> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let message = match response.json::<Envelope<Acknowledged>>().await {
        Ok(envelope) => envelope
            .message
            .unwrap_or_else(|| "request failed".to_string()),
        Err(_) => "request failed".to_string(),
    };
    Err(ApiError::Api { status, message })
}

fn multipart_with_file(
    field: &str,
    bytes: &[u8],
    mime: &str,
    filename: &str,
) -> Result<FormData, ApiError> {
    let js_error = |err: JsValue| {
        ApiError::Decode(format!(
            "could not build upload form: {}",
            err.as_string().unwrap_or_default()
        ))
    };
    let array = Uint8Array::from(bytes);
    let parts = Array::of1(&array);
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob =
        Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(field, &blob, filename)
        .map_err(js_error)?;
    Ok(form)
}

#[async_trait::async_trait(?Send)]
impl Backend for HttpBackend {
    async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        let response = self.post_json("/auth/login", credentials).await?;
        decode_envelope::<UserData>(response).await.map(|d| d.user)
    }

    async fn register(&self, account: &NewAccount) -> Result<User, ApiError> {
        let response = self.post_json("/auth/register", account).await?;
        decode_envelope::<UserData>(response).await.map(|d| d.user)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let response = self.post_empty("/auth/logout").await?;
        expect_ack(response).await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.get::<UserData>("/auth/me").await.map(|d| d.user)
    }

    async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        let response = self
            .post_json("/auth/forgot-password", &serde_json::json!({ "email": email }))
            .await?;
        expect_ack(response).await
    }

    async fn reset_password(&self, reset: &PasswordReset) -> Result<(), ApiError> {
        let response = self.post_json("/auth/reset-password", reset).await?;
        expect_ack(response).await
    }

    async fn verify_email(&self, token: &str) -> Result<(), ApiError> {
        let response = self
            .post_json("/auth/verify-email", &serde_json::json!({ "token": token }))
            .await?;
        expect_ack(response).await
    }

    async fn tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.get::<TasksData>("/tasks").await.map(|d| d.tasks)
    }

    async fn create_task(&self, new_task: &NewTask) -> Result<Task, ApiError> {
        let response = self.post_json("/tasks", new_task).await?;
        decode_envelope::<TaskData>(response).await.map(|d| d.task)
    }

    async fn set_task_status(
        &self,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<Task, ApiError> {
        let response = self
            .patch_json(
                &format!("/tasks/{task_id}"),
                &serde_json::json!({ "status": status }),
            )
            .await?;
        decode_envelope::<TaskData>(response).await.map(|d| d.task)
    }

    async fn add_comment(&self, task_id: &str, text: &str) -> Result<Task, ApiError> {
        let response = self
            .post_json(
                &format!("/tasks/{task_id}/comments"),
                &serde_json::json!({ "text": text }),
            )
            .await?;
        decode_envelope::<TaskData>(response).await.map(|d| d.task)
    }

    async fn search_users(&self, query: &str) -> Result<Vec<UserSummary>, ApiError> {
        self.get_with_query::<UsersData>("/users/search", &[("query", query)])
            .await
            .map(|d| d.users)
    }

    async fn update_profile(&self, patch: &ProfilePatch) -> Result<User, ApiError> {
        let response = self.patch_json("/users/me", patch).await?;
        decode_envelope::<UserData>(response).await.map(|d| d.user)
    }

    async fn avatar_library(&self) -> Result<Vec<AvatarOption>, ApiError> {
        self.get::<AvatarsData>("/users/avatar/library")
            .await
            .map(|d| d.avatars)
    }

    async fn select_avatar(&self, avatar_id: &str) -> Result<User, ApiError> {
        let response = self
            .post_json(
                "/users/avatar/library",
                &serde_json::json!({ "avatarId": avatar_id }),
            )
            .await?;
        decode_envelope::<UserData>(response).await.map(|d| d.user)
    }

    async fn upload_avatar(
        &self,
        bytes: Vec<u8>,
        mime: &str,
        filename: &str,
    ) -> Result<User, ApiError> {
        let form = multipart_with_file("avatar", &bytes, mime, filename)?;
        let response = Self::with_credentials(Request::post(
            &self.endpoint("/users/avatar/upload"),
        ))
        .body(form)
        .map_err(|err| ApiError::Decode(err.to_string()))?
        .send()
        .await
        .map_err(network_error)?;
        decode_envelope::<UserData>(response).await.map(|d| d.user)
    }

    async fn notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get::<NotificationsData>("/notifications")
            .await
            .map(|d| d.notifications)
    }

    async fn mark_notification_read(&self, id: &str) -> Result<(), ApiError> {
        let response = self.patch_empty(&format!("/notifications/{id}/read")).await?;
        expect_ack(response).await
    }

    async fn mark_all_notifications_read(&self) -> Result<(), ApiError> {
        let response = self.patch_empty("/notifications/read-all").await?;
        expect_ack(response).await
    }
}
