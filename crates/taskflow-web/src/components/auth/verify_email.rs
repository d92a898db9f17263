//! Email-verification screen. The token is redeemed automatically on
//! mount; a missing token is terminal and skips the network entirely.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use taskflow_app::workflows::auth;

use crate::components::ui::{RouteLink, Spinner};
use crate::context::use_app;
use crate::route::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
enum VerifyStatus {
    Verifying,
    Verified,
    Failed(String),
}

#[component]
pub fn VerifyEmailPage(token: Option<String>) -> impl IntoView {
    let ctx = use_app();

    let status = RwSignal::new(match token {
        Some(_) => VerifyStatus::Verifying,
        None => VerifyStatus::Failed("Missing verification token.".to_string()),
    });

    if let Some(token) = token {
        let ctx = ctx.clone();
        spawn_local(async move {
            match auth::verify_email(&ctx.backend, &token).await {
                Ok(()) => status.set(VerifyStatus::Verified),
                Err(err) => status.set(VerifyStatus::Failed(err.user_message())),
            }
        });
    }

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                {move || match status.get() {
                    VerifyStatus::Verifying => view! {
                        <div class="auth-confirmation">
                            <Spinner />
                            <h1>"Verifying Email..."</h1>
                            <p>"Please wait while we confirm your email address."</p>
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::Verified => view! {
                        <div class="auth-confirmation">
                            <h1>"Success!"</h1>
                            <p>
                                "Your email has been successfully verified. \
                                 You now have full access to TaskFlow."
                            </p>
                            <RouteLink to=Route::Dashboard class="button button-primary button-block">
                                "Continue to Dashboard"
                            </RouteLink>
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::Failed(message) => view! {
                        <div class="auth-confirmation auth-card-error">
                            <h1>"Verification Failed"</h1>
                            <p>{message}</p>
                            <RouteLink to=Route::Login class="button button-outline button-block">
                                "Back to Login"
                            </RouteLink>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
