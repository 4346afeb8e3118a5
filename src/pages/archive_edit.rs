//! Archive editor page: display-name editing, project add/edit/delete with
//! live preview, and archive deletion.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page fetches the archive and its projects as JSON on mount and keeps
//! them in [`ArchiveState`], the authoritative copy. Edit forms prefill
//! from these records rather than reading rendered styles back out of the
//! DOM. Successful mutations reload the page so the server-rendered state is
//! re-fetched fresh.

#[cfg(test)]
#[path = "archive_edit_test.rs"]
mod archive_edit_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::preview_card::PreviewCard;
use crate::components::swatch_strip::SwatchStrip;
use crate::net::types::ProjectRecord;
use crate::state::archive::{ArchiveState, confirm_archive_username};
use crate::state::project_form::ProjectFormModel;
use crate::util::layout::LayoutSettings;

/// Serialize the parsed palette as the JSON array string the multipart
/// `palette` field carries.
fn palette_json_field(model: &ProjectFormModel) -> String {
    serde_json::to_string(&model.palette()).unwrap_or_else(|_| "[]".to_owned())
}

/// Layout settings a persisted record renders with.
fn record_layout(record: &ProjectRecord) -> LayoutSettings {
    LayoutSettings {
        width: record.img_width,
        height: record.img_height,
        radius: record.img_radius,
        gap: record.img_gap,
        fit: record.img_fit.clone(),
    }
}

#[cfg(feature = "hydrate")]
fn object_urls(files: &web_sys::FileList) -> Vec<String> {
    // Object URLs stay alive until page unload; the preview keeps reusing
    // them so they are not revoked here.
    let mut urls = Vec::new();
    for i in 0..files.length() {
        if let Some(file) = files.item(i) {
            if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                urls.push(url);
            }
        }
    }
    urls
}

#[cfg(feature = "hydrate")]
fn build_project_form_data(
    model: &ProjectFormModel,
    files: Option<web_sys::FileList>,
) -> Option<web_sys::FormData> {
    let form = web_sys::FormData::new().ok()?;
    let _ = form.append_with_str("title", &model.title);
    let _ = form.append_with_str("palette", &palette_json_field(model));
    let _ = form.append_with_str("img_width", &model.width);
    let _ = form.append_with_str("img_height", &model.height);
    let _ = form.append_with_str("img_fit", &model.fit);
    let _ = form.append_with_str("img_radius", &model.radius);
    let _ = form.append_with_str("img_gap", &model.gap);
    if let Some(files) = files {
        for i in 0..files.length() {
            if let Some(file) = files.item(i) {
                let _ = form.append_with_blob("images", &file);
            }
        }
    }
    Some(form)
}

#[cfg(feature = "hydrate")]
fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

#[cfg(feature = "hydrate")]
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn ArchiveEditPage() -> impl IntoView {
    let params = use_params_map();
    let username = Memo::new(move |_| params.read().get("username").unwrap_or_default());

    let archive = RwSignal::new(ArchiveState {
        loading: true,
        ..ArchiveState::default()
    });
    let add_form = RwSignal::new(ProjectFormModel::default());
    let edit_form = RwSignal::new(ProjectFormModel::default());
    let edit_project_id = RwSignal::new(None::<i64>);
    let add_files = NodeRef::<leptos::html::Input>::new();
    let edit_files = NodeRef::<leptos::html::Input>::new();

    // Fetch the authoritative archive record on mount.
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let name = username.get();
            if name.is_empty() {
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_archive(&name).await {
                    Ok(detail) => archive.update(|state| {
                        state.archive = Some(detail.archive);
                        state.projects = detail.projects;
                        state.loading = false;
                        state.error = None;
                    }),
                    Err(message) => archive.update(|state| {
                        state.loading = false;
                        state.error = Some(message);
                    }),
                }
            });
        });
    }

    let submit_add = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let name = username.get_untracked();
            let files = add_files.get_untracked().and_then(|input| input.files());
            let Some(form) = build_project_form_data(&add_form.get_untracked(), files) else {
                return;
            };
            let url = crate::net::api::project_create_endpoint(&name);
            leptos::task::spawn_local(async move {
                match crate::net::api::submit_project_form(&url, &form).await {
                    Ok(()) => reload_page(),
                    Err(message) => alert(&format!("Error: {message}")),
                }
            });
        }
    });

    let submit_edit = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let Some(project_id) = edit_project_id.get_untracked() else {
                return;
            };
            let name = username.get_untracked();
            let files = edit_files.get_untracked().and_then(|input| input.files());
            let Some(form) = build_project_form_data(&edit_form.get_untracked(), files) else {
                return;
            };
            let url = crate::net::api::project_update_endpoint(&name, project_id);
            leptos::task::spawn_local(async move {
                match crate::net::api::submit_project_form(&url, &form).await {
                    Ok(()) => reload_page(),
                    Err(message) => alert(&format!("Error: {message}")),
                }
            });
        }
    });

    let start_edit = Callback::new(move |project_id: i64| {
        let state = archive.get_untracked();
        if let Some(record) = state.project(project_id) {
            edit_form.set(ProjectFormModel::from_record(record));
            edit_project_id.set(Some(project_id));
        }
    });

    let delete_project = Callback::new(move |project_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            if !window
                .confirm_with_message("Are you sure you want to delete this project?")
                .unwrap_or(false)
            {
                return;
            }
            let name = username.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_project(&name, project_id).await {
                    Ok(()) => reload_page(),
                    Err(message) => alert(&format!("Error: {message}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = project_id;
        }
    });

    let delete_image = Callback::new(move |(project_id, image_id): (i64, i64)| {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            if !window
                .confirm_with_message("Delete this image?")
                .unwrap_or(false)
            {
                return;
            }
            let name = username.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_image(&name, project_id, image_id).await {
                    Ok(()) => reload_page(),
                    Err(message) => alert(&format!("Error: {message}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (project_id, image_id);
        }
    });

    let delete_archive = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let name = username.get_untracked();
            let prompt = format!("Type the username \"{name}\" to confirm archive deletion:");
            let Ok(Some(typed)) = window.prompt_with_message(&prompt) else {
                return;
            };
            let confirmed = match confirm_archive_username(&typed, &name) {
                Ok(confirmed) => confirmed,
                Err(message) => {
                    alert(message);
                    return;
                }
            };
            if !window
                .confirm_with_message(
                    "Are you sure you want to delete this archive? This action cannot be undone.",
                )
                .unwrap_or(false)
            {
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_archive(&name, &confirmed).await {
                    Ok(()) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/archives?deleted=1");
                        }
                    }
                    Err(message) => alert(&format!("Error: {message}")),
                }
            });
        }
    };

    view! {
        <div class="archive-edit-page">
            <Show
                when=move || !archive.get().loading
                fallback=|| view! { <p>"Loading archive..."</p> }
            >
                <Show when=move || archive.get().error.is_some()>
                    <p class="archive-error">{move || archive.get().error.unwrap_or_default()}</p>
                </Show>

                <DisplayNameEditor archive=archive username=username/>

                <section class="add-project">
                    <h2>"Add Project"</h2>
                    <ProjectForm
                        model=add_form
                        files=add_files
                        submit_label="Add Project"
                        on_submit=submit_add
                    />
                </section>

                <section class="projects">
                    <h2>"Projects"</h2>
                    {move || {
                        archive
                            .get()
                            .projects
                            .into_iter()
                            .map(|record| {
                                view! {
                                    <ProjectCard
                                        record=record
                                        on_edit=start_edit
                                        on_delete=delete_project
                                        on_delete_image=delete_image
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </section>

                <Show when=move || edit_project_id.get().is_some()>
                    <div class="modal" id="edit-project-modal">
                        <div class="modal__content">
                            <h2>"Edit Project"</h2>
                            <ProjectForm
                                model=edit_form
                                files=edit_files
                                submit_label="Save Changes"
                                on_submit=submit_edit
                            />
                            <button
                                class="btn"
                                id="cancel-edit"
                                on:click=move |_| edit_project_id.set(None)
                            >
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </Show>

                <section class="danger-zone">
                    <button class="btn btn--danger" id="delete-archive-btn" on:click=delete_archive>
                        "Delete Archive"
                    </button>
                </section>
            </Show>
        </div>
    }
}

/// In-place display-name editing: the heading becomes contenteditable while
/// editing, and saving posts the trimmed text then always exits edit mode.
#[component]
fn DisplayNameEditor(archive: RwSignal<ArchiveState>, username: Memo<String>) -> impl IntoView {
    let editing = RwSignal::new(false);
    let name_ref = NodeRef::<leptos::html::Span>::new();

    let display_name = move || {
        archive
            .get()
            .archive
            .map_or_else(|| username.get(), |record| record.display_name)
    };

    let on_edit = move |_| {
        editing.set(true);
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = name_ref.get_untracked() {
                let _ = el.focus();
            }
        }
    };

    let on_save = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let trimmed = name_ref
                .get_untracked()
                .and_then(|el| el.text_content())
                .unwrap_or_default()
                .trim()
                .to_owned();
            let name = username.get_untracked();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::update_display_name(&name, &trimmed).await {
                    log::error!("display name update failed: {e}");
                }
                // Edit mode ends regardless of outcome.
                editing.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        editing.set(false);
    };

    view! {
        <header class="archive-header">
            <h1>
                <span
                    id="archive-display-name"
                    node_ref=name_ref
                    contenteditable=move || if editing.get() { "true" } else { "false" }
                >
                    {display_name}
                </span>
            </h1>
            <Show
                when=move || editing.get()
                fallback=move || {
                    view! {
                        <button class="btn" id="edit-name-btn" on:click=on_edit>
                            "Edit Name"
                        </button>
                    }
                }
            >
                <button class="btn btn--primary" id="save-name-btn" on:click=on_save>
                    "Save"
                </button>
            </Show>
        </header>
    }
}

/// Shared add/edit project form with a live preview recomputed from the
/// bound model on every input/change event.
#[component]
fn ProjectForm(
    model: RwSignal<ProjectFormModel>,
    files: NodeRef<leptos::html::Input>,
    submit_label: &'static str,
    on_submit: Callback<()>,
) -> impl IntoView {
    let on_files_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let urls = files
                .get_untracked()
                .and_then(|input| input.files())
                .map(|list| object_urls(&list))
                .unwrap_or_default();
            model.update(|m| m.local_images = urls);
        }
    };

    view! {
        <form
            class="project-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <label class="tool-form__label">
                "Title"
                <input
                    type="text"
                    prop:value=move || model.get().title
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        model.update(|m| m.title = value);
                    }
                />
            </label>
            <label class="tool-form__label">
                "Palette (hex colors)"
                <textarea
                    placeholder="#FF0000, #00FF00"
                    prop:value=move || model.get().palette_text
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        model.update(|m| m.palette_text = value);
                    }
                ></textarea>
            </label>
            <label class="tool-form__label">
                "Images"
                <input type="file" accept="image/*" multiple node_ref=files on:change=on_files_change/>
            </label>

            <div class="layout-fields">
                <label>
                    "Width"
                    <input
                        type="number"
                        placeholder="260"
                        prop:value=move || model.get().width
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            model.update(|m| m.width = value);
                        }
                    />
                </label>
                <label>
                    "Height"
                    <input
                        type="number"
                        placeholder="200"
                        prop:value=move || model.get().height
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            model.update(|m| m.height = value);
                        }
                    />
                </label>
                <label>
                    "Fit"
                    <select
                        prop:value=move || model.get().fit
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            model.update(|m| m.fit = value);
                        }
                    >
                        <option value="cover">"cover"</option>
                        <option value="contain">"contain"</option>
                        <option value="fill">"fill"</option>
                        <option value="none">"none"</option>
                        <option value="scale-down">"scale-down"</option>
                    </select>
                </label>
                <label>
                    "Radius"
                    <input
                        type="number"
                        placeholder="8"
                        prop:value=move || model.get().radius
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            model.update(|m| m.radius = value);
                        }
                    />
                </label>
                <label>
                    "Gap"
                    <input
                        type="number"
                        placeholder="16"
                        prop:value=move || model.get().gap
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            model.update(|m| m.gap = value);
                        }
                    />
                </label>
            </div>

            <button class="btn btn--primary" type="submit">
                {submit_label}
            </button>

            <div class="project-preview">
                {move || {
                    let m = model.get();
                    view! {
                        <PreviewCard
                            title=m.trimmed_title()
                            palette=m.palette()
                            images=m.images()
                            layout=m.layout()
                        />
                    }
                }}
            </div>
        </form>
    }
}

/// One persisted project with its palette, image gallery, and actions.
#[component]
fn ProjectCard(
    record: ProjectRecord,
    on_edit: Callback<i64>,
    on_delete: Callback<i64>,
    on_delete_image: Callback<(i64, i64)>,
) -> impl IntoView {
    let project_id = record.id;
    let layout = record_layout(&record);
    let gallery = crate::components::preview_card::gallery_style(&layout);
    let tile = crate::components::preview_card::tile_style(&layout);
    let image = crate::components::preview_card::image_style(&layout);

    view! {
        <article class="project-card-full">
            <h3>{record.title.clone()}</h3>
            <Show when={
                let has_palette = !record.palette.is_empty();
                move || has_palette
            }>
                <SwatchStrip colors=record.palette.clone()/>
            </Show>
            <div class="graphics-gallery" style=gallery>
                {record
                    .images
                    .iter()
                    .map(|img| {
                        let image_id = img.id;
                        view! {
                            <div class="graphic-item" style=tile.clone()>
                                <img src=img.url() style=image.clone()/>
                                <button
                                    class="btn-delete-image"
                                    title="Delete image"
                                    on:click=move |_| on_delete_image.run((project_id, image_id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="project-card-actions">
                <button class="btn btn-edit-project" on:click=move |_| on_edit.run(project_id)>
                    "Edit"
                </button>
                <button
                    class="btn btn--danger btn-delete-project"
                    on:click=move |_| on_delete.run(project_id)
                >
                    "Delete"
                </button>
            </div>
        </article>
    }
}
