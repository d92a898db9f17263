//! Profile editor: bio and avatar, with the avatar selector modal.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use taskflow_app::forms::SubmitState;
use taskflow_app::workflows::users as user_flows;
use taskflow_types::ProfilePatch;

use crate::components::avatar_selector::AvatarSelector;
use crate::components::ui::Modal;
use crate::context::use_app;

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let ctx = use_app();

    let (initial_bio, initial_avatar, username, email) = ctx.state.with_untracked(|s| {
        let user = s.session.user();
        (
            user.and_then(|u| u.bio.clone()).unwrap_or_default(),
            user.and_then(|u| u.avatar.clone()).unwrap_or_default(),
            user.map(|u| u.username.clone()).unwrap_or_default(),
            user.map(|u| u.email.clone()).unwrap_or_default(),
        )
    });

    let bio = RwSignal::new(initial_bio);
    let avatar = RwSignal::new(initial_avatar);
    let submit = RwSignal::new(SubmitState::Idle);
    let is_avatar_open = RwSignal::new(false);

    let on_save = {
        let ctx = ctx.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let patch = ProfilePatch {
                bio: Some(bio.get_untracked()),
                avatar: Some(avatar.get_untracked()),
            };
            submit.set(SubmitState::Submitting);
            let ctx = ctx.clone();
            spawn_local(async move {
                match user_flows::update_profile(&ctx.backend, &patch, &ctx.emitter()).await {
                    Ok(()) => submit.set(SubmitState::Succeeded),
                    Err(err) => submit.set(SubmitState::Failed(err.user_message())),
                }
            });
        }
    };

    view! {
        <div class="profile-panel">
            <div class="profile-identity">
                <div class="profile-avatar">
                    {move || {
                        let url = avatar.get();
                        if url.is_empty() {
                            view! { <div class="profile-avatar-placeholder"></div> }.into_any()
                        } else {
                            view! { <img src=url alt="Avatar" /> }.into_any()
                        }
                    }}
                    <button
                        class="profile-avatar-edit"
                        on:click=move |_| is_avatar_open.set(true)
                    >
                        "Change"
                    </button>
                </div>
                <div>
                    <h3>{username}</h3>
                    <p class="profile-email">{email}</p>
                </div>
            </div>

            <form on:submit=on_save>
                <Show when=move || submit.with(|s| s.failure().is_some()) fallback=|| ()>
                    <div class="form-banner form-banner-error">
                        {move || submit.with(|s| s.failure().unwrap_or_default().to_string())}
                    </div>
                </Show>

                <label for="bio">"Bio"</label>
                <textarea
                    id="bio"
                    placeholder="Tell us about yourself..."
                    prop:value=move || bio.get()
                    on:input=move |ev| bio.set(event_target_value(&ev))
                ></textarea>

                <label for="avatar-url">"Avatar URL"</label>
                <input
                    id="avatar-url"
                    placeholder="https://..."
                    prop:value=move || avatar.get()
                    on:input=move |ev| avatar.set(event_target_value(&ev))
                />

                <button
                    type="submit"
                    class="button button-primary button-block"
                    disabled=move || submit.with(|s| s.is_submitting())
                >
                    {move || {
                        if submit.with(|s| s.is_submitting()) {
                            "Updating..."
                        } else {
                            "Save Changes"
                        }
                    }}
                </button>
            </form>

            <Show when=move || is_avatar_open.get() fallback=|| ()>
                <Modal title="Choose Your Avatar" on_close=move |_| is_avatar_open.set(false)>
                    <AvatarSelector
                        current=avatar.get_untracked()
                        on_change=move |url: String| {
                            avatar.set(url);
                            is_avatar_open.set(false);
                        }
                    />
                </Modal>
            </Show>
        </div>
    }
}
