//! Reset-password screen. A missing token is a terminal invalid-link
//! state: the form never renders and no request is ever issued.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use taskflow_app::core::Update;
use taskflow_app::forms::{FieldErrors, ResetPasswordForm, SubmitState};
use taskflow_app::views::NoticeLevel;
use taskflow_app::workflows::auth;

use crate::components::ui::{FieldError, RouteLink};
use crate::context::use_app;
use crate::route::Route;

/// How long the success card shows before redirecting to login.
const REDIRECT_DELAY_MS: u32 = 3_000;

#[component]
pub fn ResetPasswordPage(token: Option<String>) -> impl IntoView {
    match token {
        None => view! { <InvalidLinkCard /> }.into_any(),
        Some(token) => view! { <ResetForm token=token /> }.into_any(),
    }
}

#[component]
fn InvalidLinkCard() -> impl IntoView {
    view! {
        <div class="auth-screen">
            <div class="auth-card auth-card-error">
                <h1>"Invalid Link"</h1>
                <p>
                    "The password reset link is invalid or has expired. \
                     Please request a new one."
                </p>
                <RouteLink to=Route::ForgotPassword class="button button-outline button-block">
                    "Request New Link"
                </RouteLink>
            </div>
        </div>
    }
}

#[component]
fn ResetForm(token: String) -> impl IntoView {
    let ctx = use_app();

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let submit = RwSignal::new(SubmitState::Idle);
    let succeeded = RwSignal::new(false);

    let on_submit = {
        let ctx = ctx.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let form = ResetPasswordForm {
                password: password.get_untracked(),
                confirm: confirm.get_untracked(),
            };
            match form.validate(&token) {
                Err(field_errors) => errors.set(field_errors),
                Ok(reset) => {
                    errors.set(FieldErrors::new());
                    submit.set(SubmitState::Submitting);
                    let ctx = ctx.clone();
                    spawn_local(async move {
                        match auth::reset_password(&ctx.backend, &reset).await {
                            Ok(()) => {
                                submit.set(SubmitState::Succeeded);
                                succeeded.set(true);
                                ctx.dispatch(Update::notice(
                                    NoticeLevel::Success,
                                    "Password reset successfully!",
                                ));
                                gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                                ctx.navigate(Route::Login);
                            }
                            Err(err) => {
                                submit.set(SubmitState::Failed(err.user_message()));
                                ctx.dispatch(Update::notice(
                                    NoticeLevel::Error,
                                    err.user_message(),
                                ));
                            }
                        }
                    });
                }
            }
        }
    };

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                {move || {
                    if succeeded.get() {
                        view! {
                            <div class="auth-confirmation">
                                <h1>"Success!"</h1>
                                <p>
                                    "Your password has been reset successfully. \
                                     Redirecting you to login..."
                                </p>
                                <RouteLink to=Route::Login class="button button-primary button-block">
                                    "Go to Login Now"
                                </RouteLink>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div>
                                <h1>"Reset Password"</h1>
                                <p class="auth-subtitle">"Enter your new password below."</p>
                                <form on:submit=on_submit.clone()>
                                    <label for="password">"New Password"</label>
                                    <input
                                        id="password"
                                        type="password"
                                        prop:value=move || password.get()
                                        on:input=move |ev| password.set(event_target_value(&ev))
                                    />
                                    <FieldError errors=errors field="password" />

                                    <label for="confirm">"Confirm Password"</label>
                                    <input
                                        id="confirm"
                                        type="password"
                                        prop:value=move || confirm.get()
                                        on:input=move |ev| confirm.set(event_target_value(&ev))
                                    />
                                    <FieldError errors=errors field="confirm" />

                                    <button
                                        type="submit"
                                        class="button button-primary button-block"
                                        disabled=move || submit.with(|s| s.is_submitting())
                                    >
                                        {move || {
                                            if submit.with(|s| s.is_submitting()) {
                                                "Resetting..."
                                            } else {
                                                "Update Password"
                                            }
                                        }}
                                    </button>
                                </form>
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}
