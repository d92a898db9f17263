//! Registration screen.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use taskflow_app::forms::{FieldErrors, RegisterForm, SubmitState};
use taskflow_app::workflows::auth;

use crate::components::ui::{FieldError, RouteLink};
use crate::context::use_app;
use crate::route::Route;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let submit = RwSignal::new(SubmitState::Idle);

    let on_submit = {
        let ctx = ctx.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let form = RegisterForm {
                username: username.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            match form.validate() {
                Err(field_errors) => errors.set(field_errors),
                Ok(account) => {
                    errors.set(FieldErrors::new());
                    submit.set(SubmitState::Submitting);
                    let ctx = ctx.clone();
                    spawn_local(async move {
                        match auth::register(&ctx.backend, &account, &ctx.emitter()).await {
                            Ok(_) => {
                                submit.set(SubmitState::Succeeded);
                                ctx.navigate(Route::Dashboard);
                            }
                            Err(err) => submit.set(SubmitState::Failed(err.user_message())),
                        }
                    });
                }
            }
        }
    };

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <p class="auth-subtitle">
                    "Already have an account? "
                    <RouteLink to=Route::Login class="link">"Sign in"</RouteLink>
                </p>

                <Show when=move || submit.with(|s| s.failure().is_some()) fallback=|| ()>
                    <div class="form-banner form-banner-error">
                        {move || submit.with(|s| s.failure().unwrap_or_default().to_string())}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        placeholder="johndoe"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <FieldError errors=errors field="username" />

                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="name@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <FieldError errors=errors field="email" />

                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <FieldError errors=errors field="password" />

                    <button
                        type="submit"
                        class="button button-primary button-block"
                        disabled=move || submit.with(|s| s.is_submitting())
                    >
                        {move || {
                            if submit.with(|s| s.is_submitting()) {
                                "Creating account..."
                            } else {
                                "Create Account"
                            }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
