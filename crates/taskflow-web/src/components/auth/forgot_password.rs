//! Forgot-password screen: request a reset link, then confirm where it
//! went.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use taskflow_app::core::Update;
use taskflow_app::forms::{FieldErrors, ForgotPasswordForm, SubmitState};
use taskflow_app::views::NoticeLevel;
use taskflow_app::workflows::auth;

use crate::components::ui::{FieldError, RouteLink};
use crate::context::use_app;
use crate::route::Route;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let ctx = use_app();

    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let submit = RwSignal::new(SubmitState::Idle);
    // Holds the address we confirmed a link was sent to.
    let sent_to = RwSignal::new(None::<String>);

    let on_submit = {
        let ctx = ctx.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let form = ForgotPasswordForm {
                email: email.get_untracked(),
            };
            match form.validate() {
                Err(field_errors) => errors.set(field_errors),
                Ok(address) => {
                    errors.set(FieldErrors::new());
                    submit.set(SubmitState::Submitting);
                    let ctx = ctx.clone();
                    spawn_local(async move {
                        match auth::forgot_password(&ctx.backend, &address).await {
                            Ok(()) => {
                                submit.set(SubmitState::Succeeded);
                                sent_to.set(Some(address));
                                ctx.dispatch(Update::notice(
                                    NoticeLevel::Success,
                                    "Reset link sent!",
                                ));
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
                <h1>"Forgot Password"</h1>
                <p class="auth-subtitle">
                    "Enter your email address and we'll send you a link to reset your password."
                </p>

                {move || match sent_to.get() {
                    None => view! {
                        <form on:submit=on_submit.clone()>
                            <label for="email">"Email"</label>
                            <input
                                id="email"
                                type="email"
                                placeholder="name@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                            <FieldError errors=errors field="email" />
                            <button
                                type="submit"
                                class="button button-primary button-block"
                                disabled=move || submit.with(|s| s.is_submitting())
                            >
                                {move || {
                                    if submit.with(|s| s.is_submitting()) {
                                        "Sending..."
                                    } else {
                                        "Send Reset Link"
                                    }
                                }}
                            </button>
                        </form>
                    }
                    .into_any(),
                    Some(address) => view! {
                        <div class="auth-confirmation">
                            <h2>"Check your email"</h2>
                            <p>
                                "We've sent a password reset link to "
                                <strong>{address}</strong>
                                "."
                            </p>
                            <button
                                class="button button-outline"
                                on:click=move |_| {
                                    sent_to.set(None);
                                    submit.set(SubmitState::Idle);
                                }
                            >
                                "Try a different email"
                            </button>
                        </div>
                    }
                    .into_any(),
                }}

                <RouteLink to=Route::Login class="link link-subtle auth-footer-link">
                    "Back to login"
                </RouteLink>
            </div>
        </div>
    }
}
