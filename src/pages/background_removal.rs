//! Background removal form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds a color picker and a hex text field bidirectionally, mirrors the
//! tolerance slider into a label, and submits file + color + tolerance as
//! multipart data. A successful response is a binary image saved via a
//! client-side download.

#[cfg(test)]
#[path = "background_removal_test.rs"]
mod background_removal_test;

use leptos::prelude::*;

use crate::components::error_panel::ErrorPanel;
use crate::util::color::is_valid_hex;

/// Validate the submission inputs. Both a file and a valid hex color are
/// required; either failure blocks the request.
fn validate_submission(has_file: bool, color: &str) -> Result<String, &'static str> {
    if !has_file {
        return Err("Please select a file");
    }
    let trimmed = color.trim();
    if !is_valid_hex(trimmed) {
        return Err("Please enter a valid hex color (e.g., #FFFFFF)");
    }
    Ok(trimmed.to_ascii_uppercase())
}

/// Download name for the processed file, derived from the source name.
fn processed_filename(source_name: &str) -> String {
    match source_name.rsplit_once('.') {
        Some((base, _)) if !base.is_empty() => format!("{base}_no_bg.png"),
        _ => "image-no-bg.png".to_owned(),
    }
}

#[component]
pub fn BackgroundRemovalPage() -> impl IntoView {
    let color_text = RwSignal::new("#FFFFFF".to_owned());
    let picker_value = RwSignal::new("#ffffff".to_owned());
    let tolerance = RwSignal::new("30".to_owned());
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let file_ref = NodeRef::<leptos::html::Input>::new();

    // Picker edits propagate into the text field, uppercased.
    let on_picker_input = move |ev| {
        let value = event_target_value(&ev);
        color_text.set(value.to_ascii_uppercase());
        picker_value.set(value);
    };

    // Valid text-field edits propagate back into the picker.
    let on_text_input = move |ev| {
        let value = event_target_value(&ev);
        if is_valid_hex(value.trim()) {
            picker_value.set(value.trim().to_ascii_lowercase());
        }
        color_text.set(value);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        done.set(false);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let Some(input) = file_ref.get_untracked() else {
                return;
            };
            let file = input.files().and_then(|files| files.item(0));
            let color = match validate_submission(file.is_some(), &color_text.get_untracked()) {
                Ok(color) => color,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
            let Some(file) = file else {
                return;
            };
            let Ok(form) = web_sys::FormData::new() else {
                return;
            };
            let _ = form.append_with_blob("file", &file);
            let _ = form.append_with_str("background_color", &color);
            let _ = form.append_with_str("tolerance", &tolerance.get_untracked());

            busy.set(true);
            let source_name = file.name();
            leptos::task::spawn_local(async move {
                match crate::net::api::post_multipart_download(
                    "/background/remove",
                    &form,
                    "Processing failed",
                )
                .await
                {
                    Ok(bytes) => {
                        crate::util::download::save_bytes(&bytes, &processed_filename(&source_name));
                        done.set(true);
                    }
                    Err(message) => error.set(Some(message)),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="background-removal-page">
            <h1>"Background Removal"</h1>
            <p class="page-subtitle">"Strip a background color from an image."</p>

            <form class="tool-form" on:submit=on_submit>
                <label class="tool-form__label">
                    "Image file"
                    <input id="image-file" type="file" accept="image/*" node_ref=file_ref/>
                </label>
                <label class="tool-form__label">
                    "Background color"
                    <span class="color-field">
                        <input
                            id="bg-color-picker"
                            type="color"
                            prop:value=move || picker_value.get()
                            on:input=on_picker_input
                        />
                        <input
                            id="bg-color"
                            type="text"
                            placeholder="#FFFFFF"
                            prop:value=move || color_text.get()
                            on:input=on_text_input
                        />
                    </span>
                </label>
                <label class="tool-form__label">
                    "Tolerance"
                    <input
                        id="tolerance"
                        type="range"
                        min="0"
                        max="255"
                        prop:value=move || tolerance.get()
                        on:input=move |ev| tolerance.set(event_target_value(&ev))
                    />
                    <span class="tolerance-value">{move || tolerance.get()}</span>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Processing..." } else { "Remove Background" }}
                </button>
            </form>

            <ErrorPanel message=error/>
            <Show when=move || done.get()>
                <div class="result-section">
                    <p>"Background removed. Your download has started."</p>
                </div>
            </Show>
        </div>
    }
}
