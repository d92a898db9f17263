//! Avatar picker: the server's library on one tab, a validated custom
//! upload on the other.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use taskflow_app::core::Update;
use taskflow_app::forms::validate_avatar_file;
use taskflow_app::views::NoticeLevel;
use taskflow_app::workflows::users as user_flows;
use taskflow_types::AvatarOption;

use crate::components::ui::{EmptyState, Spinner};
use crate::context::use_app;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectorTab {
    Library,
    Upload,
}

/// A file read into memory and already validated.
#[derive(Debug, Clone, PartialEq)]
struct PendingUpload {
    filename: String,
    mime: String,
    bytes: Vec<u8>,
}

#[component]
pub fn AvatarSelector(
    #[prop(optional, into)] current: String,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let ctx = use_app();

    let tab = RwSignal::new(SelectorTab::Library);
    let library = RwSignal::new(Vec::<AvatarOption>::new());
    let is_loading_library = RwSignal::new(true);
    let pending = RwSignal::new(None::<PendingUpload>);
    let is_uploading = RwSignal::new(false);

    // Fetch the library once on mount.
    {
        let ctx = ctx.clone();
        spawn_local(async move {
            match user_flows::avatar_library(&ctx.backend).await {
                Ok(avatars) => library.set(avatars),
                Err(err) => log::warn!("avatar library fetch failed: {err}"),
            }
            is_loading_library.set(false);
        });
    }

    let on_pick_library = {
        let ctx = ctx.clone();
        move |option: AvatarOption| {
            let ctx = ctx.clone();
            spawn_local(async move {
                match user_flows::select_library_avatar(&ctx.backend, &option, &ctx.emitter())
                    .await
                {
                    Ok(()) => on_change.run(option.url.clone()),
                    Err(err) => {
                        ctx.dispatch(Update::notice(NoticeLevel::Error, err.user_message()));
                    }
                }
            });
        }
    };

    let on_file_chosen = {
        let ctx = ctx.clone();
        move |ev: leptos::ev::Event| {
            let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let mime = file.type_();
            let size = file.size() as usize;
            if let Err(message) = validate_avatar_file(&mime, size) {
                ctx.dispatch(Update::notice(NoticeLevel::Error, message));
                return;
            }
            let filename = file.name();
            spawn_local(async move {
                match JsFuture::from(file.array_buffer()).await {
                    Ok(buffer) => {
                        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
                        pending.set(Some(PendingUpload {
                            filename,
                            mime,
                            bytes,
                        }));
                    }
                    Err(err) => log::warn!("could not read avatar file: {err:?}"),
                }
            });
        }
    };

    let on_upload = {
        let ctx = ctx.clone();
        move |_| {
            let Some(upload) = pending.get_untracked() else {
                return;
            };
            is_uploading.set(true);
            let ctx = ctx.clone();
            spawn_local(async move {
                match user_flows::upload_avatar(
                    &ctx.backend,
                    &ctx.config,
                    upload.bytes,
                    &upload.mime,
                    &upload.filename,
                    &ctx.emitter(),
                )
                .await
                {
                    Ok(url) => {
                        pending.set(None);
                        on_change.run(url);
                    }
                    Err(err) => {
                        ctx.dispatch(Update::notice(NoticeLevel::Error, err.user_message()));
                    }
                }
                is_uploading.set(false);
            });
        }
    };

    let current_for_grid = current.clone();
    view! {
        <div class="avatar-selector">
            <div class="tabs">
                <button
                    class:active=move || tab.get() == SelectorTab::Library
                    on:click=move |_| tab.set(SelectorTab::Library)
                >
                    "Avatar Library"
                </button>
                <button
                    class:active=move || tab.get() == SelectorTab::Upload
                    on:click=move |_| tab.set(SelectorTab::Upload)
                >
                    "Upload Custom"
                </button>
            </div>

            <Show when=move || tab.get() == SelectorTab::Library fallback=|| ()>
                {
                    let on_pick_library = on_pick_library.clone();
                    let current = current_for_grid.clone();
                    move || {
                        if is_loading_library.get() {
                            return view! { <Spinner /> }.into_any();
                        }
                        let avatars = library.get();
                        if avatars.is_empty() {
                            return view! {
                                <EmptyState message="The avatar library is empty." />
                            }
                            .into_any();
                        }
                        let on_pick_library = on_pick_library.clone();
                        let current = current.clone();
                        view! {
                            <div class="avatar-grid">
                                {avatars
                                    .into_iter()
                                    .map(|option| {
                                        let on_pick = on_pick_library.clone();
                                        let is_current = option.url == current;
                                        let picked = option.clone();
                                        view! {
                                            <button
                                                class="avatar-option"
                                                class:selected=is_current
                                                on:click=move |_| on_pick(picked.clone())
                                            >
                                                <img src=option.url.clone() alt=option.name.clone() />
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }
            </Show>

            <Show when=move || tab.get() == SelectorTab::Upload fallback=|| ()>
                <div class="avatar-upload">
                    {
                        let on_upload = on_upload.clone();
                        move || match pending.get() {
                            None => view! {
                                <label class="avatar-dropzone">
                                    <p>"Click to upload image"</p>
                                    <p class="avatar-hint">"PNG, JPG, WebP (max 2MB)"</p>
                                    <input
                                        type="file"
                                        accept="image/*"
                                        class="hidden-input"
                                        on:change=on_file_chosen.clone()
                                    />
                                </label>
                            }
                            .into_any(),
                            Some(upload) => {
                                let on_upload = on_upload.clone();
                                view! {
                                    <div class="avatar-upload-ready">
                                        <p>{upload.filename.clone()}</p>
                                        <div class="avatar-upload-actions">
                                            <button
                                                class="button button-outline"
                                                on:click=move |_| pending.set(None)
                                            >
                                                "Remove"
                                            </button>
                                            <button
                                                class="button button-primary"
                                                disabled=move || is_uploading.get()
                                                on:click=on_upload.clone()
                                            >
                                                {move || {
                                                    if is_uploading.get() {
                                                        "Uploading..."
                                                    } else {
                                                        "Upload Avatar"
                                                    }
                                                }}
                                            </button>
                                        </div>
                                    </div>
                                }
                                .into_any()
                            }
                        }
                    }
                </div>
            </Show>
        </div>
    }
}
