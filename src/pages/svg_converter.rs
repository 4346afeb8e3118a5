//! SVG-to-raster conversion form.
//!
//! Submits the chosen SVG as multipart data; a successful response is a
//! binary image saved via a client-side download, a non-OK response carries
//! a JSON error message. The submit button is disabled with a progress
//! label for the request's duration and restored in every branch.

#[cfg(test)]
#[path = "svg_converter_test.rs"]
mod svg_converter_test;

use leptos::prelude::*;

use crate::components::error_panel::ErrorPanel;

/// Output formats accepted by the converter backend.
const OUTPUT_FORMATS: [&str; 3] = ["png", "jpeg", "tiff"];

/// Require a selected file before submitting.
fn validate_file_selected(has_file: bool) -> Result<(), &'static str> {
    if has_file {
        Ok(())
    } else {
        Err("Please select a file")
    }
}

/// Download name for the converted file, derived from the source name.
/// A blank source falls back to the plain `converted-image` name.
fn converted_filename(source_name: &str, format: &str) -> String {
    let base = source_name
        .rsplit_once('.')
        .map_or(source_name, |(base, _)| base);
    if base.is_empty() {
        "converted-image".to_owned()
    } else {
        format!("{base}.{format}")
    }
}

#[component]
pub fn SvgConverterPage() -> impl IntoView {
    let format = RwSignal::new("png".to_owned());
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let file_ref = NodeRef::<leptos::html::Input>::new();

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
            if let Err(message) = validate_file_selected(file.is_some()) {
                error.set(Some(message.to_owned()));
                return;
            }
            let Some(file) = file else {
                return;
            };
            let Ok(form) = web_sys::FormData::new() else {
                return;
            };
            let output_format = format.get_untracked();
            let _ = form.append_with_blob("file", &file);
            let _ = form.append_with_str("format", &output_format);

            busy.set(true);
            let source_name = file.name();
            leptos::task::spawn_local(async move {
                match crate::net::api::post_multipart_download(
                    "/svg/convert",
                    &form,
                    "Conversion failed",
                )
                .await
                {
                    Ok(bytes) => {
                        let filename = converted_filename(&source_name, &output_format);
                        crate::util::download::save_bytes(&bytes, &filename);
                        done.set(true);
                    }
                    Err(message) => error.set(Some(message)),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="svg-converter-page">
            <h1>"SVG Converter"</h1>
            <p class="page-subtitle">"Convert SVG files to raster images."</p>

            <form class="tool-form" on:submit=on_submit>
                <label class="tool-form__label">
                    "SVG file"
                    <input id="svg-file" type="file" accept=".svg" node_ref=file_ref/>
                </label>
                <label class="tool-form__label">
                    "Output format"
                    <select
                        prop:value=move || format.get()
                        on:change=move |ev| format.set(event_target_value(&ev))
                    >
                        {OUTPUT_FORMATS
                            .into_iter()
                            .map(|f| view! { <option value=f>{f}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Converting..." } else { "Convert" }}
                </button>
            </form>

            <ErrorPanel message=error/>
            <Show when=move || done.get()>
                <div class="result-section">
                    <p>"Conversion complete. Your download has started."</p>
                </div>
            </Show>
        </div>
    }
}
