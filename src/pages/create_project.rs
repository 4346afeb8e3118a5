//! Create-project form for standalone design projects.
//!
//! Collects a title, description, palettes as raw JSON, and three
//! one-URL-per-line asset lists, then posts the whole record as JSON and
//! links to the created project page.

#[cfg(test)]
#[path = "create_project_test.rs"]
mod create_project_test;

use leptos::prelude::*;

use crate::components::error_panel::ErrorPanel;
use crate::net::types::CreateProjectRequest;

/// Split a textarea into trimmed non-empty lines.
fn parse_url_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Build the request body from raw field values.
///
/// The palettes textarea must be empty or valid JSON; the title must be
/// non-empty after trimming.
fn build_create_request(
    title: &str,
    description: &str,
    palettes_text: &str,
    logos_text: &str,
    favicons_text: &str,
    graphics_text: &str,
) -> Result<CreateProjectRequest, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Project title is required");
    }
    let palettes = if palettes_text.trim().is_empty() {
        serde_json::Value::Array(Vec::new())
    } else {
        serde_json::from_str(palettes_text.trim())
            .map_err(|_| "Invalid JSON format for palettes")?
    };
    Ok(CreateProjectRequest {
        title: title.to_owned(),
        description: description.trim().to_owned(),
        palettes,
        logos: parse_url_lines(logos_text),
        favicons: parse_url_lines(favicons_text),
        graphics: parse_url_lines(graphics_text),
    })
}

#[component]
pub fn CreateProjectPage() -> impl IntoView {
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let palettes_text = RwSignal::new(String::new());
    let logos_text = RwSignal::new(String::new());
    let favicons_text = RwSignal::new(String::new());
    let graphics_text = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let created_url = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        created_url.set(None);
        error.set(None);

        let request = build_create_request(
            &title.get_untracked(),
            &description.get_untracked(),
            &palettes_text.get_untracked(),
            &logos_text.get_untracked(),
            &favicons_text.get_untracked(),
            &graphics_text.get_untracked(),
        );
        let request = match request {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };

        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_project(&request).await {
                Ok(url) => created_url.set(Some(url)),
                Err(message) => error.set(Some(message)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <div class="create-project-page">
            <h1>"Create Project"</h1>

            <form class="tool-form" on:submit=on_submit>
                <label class="tool-form__label">
                    "Title"
                    <input
                        id="project-title"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="tool-form__label">
                    "Description"
                    <textarea
                        id="project-description"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="tool-form__label">
                    "Palettes (JSON)"
                    <textarea
                        id="project-palettes"
                        placeholder=r##"[["#FF0000", "#00FF00"]]"##
                        prop:value=move || palettes_text.get()
                        on:input=move |ev| palettes_text.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="tool-form__label">
                    "Logo URLs (one per line)"
                    <textarea
                        id="project-logos"
                        prop:value=move || logos_text.get()
                        on:input=move |ev| logos_text.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="tool-form__label">
                    "Favicon URLs (one per line)"
                    <textarea
                        id="project-favicons"
                        prop:value=move || favicons_text.get()
                        on:input=move |ev| favicons_text.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="tool-form__label">
                    "Graphic URLs (one per line)"
                    <textarea
                        id="project-graphics"
                        prop:value=move || graphics_text.get()
                        on:input=move |ev| graphics_text.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating..." } else { "Create Project" }}
                </button>
            </form>

            <ErrorPanel message=error/>
            <Show when=move || created_url.get().is_some()>
                <div class="result-section">
                    <p>"Project created."</p>
                    <a id="project-link" href=move || created_url.get().unwrap_or_default()>
                        "View project"
                    </a>
                </div>
            </Show>
        </div>
    }
}
