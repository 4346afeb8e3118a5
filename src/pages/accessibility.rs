//! Color-blindness simulator page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Parses a user-entered palette and fires one simulation request per
//! deficiency type. The three requests are independent request/render
//! pairs: each fills its own swatch group and a failure leaves only that
//! group empty.

#[cfg(test)]
#[path = "accessibility_test.rs"]
mod accessibility_test;

use leptos::prelude::*;

use crate::components::error_panel::ErrorPanel;
use crate::components::swatch_strip::SwatchStrip;
use crate::net::types::Deficiency;
use crate::util::color::parse_palette;

/// Parse the free-form palette input, rejecting empty or all-invalid text.
fn validate_palette_input(input: &str) -> Result<Vec<String>, &'static str> {
    if input.trim().is_empty() {
        return Err("Please enter at least one color");
    }
    let colors = parse_palette(input);
    if colors.is_empty() {
        return Err("No valid hex colors found. Please enter colors in format #RRGGBB");
    }
    Ok(colors)
}

#[component]
pub fn AccessibilityPage() -> impl IntoView {
    let input = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let original = RwSignal::new(Vec::<String>::new());
    let protanopia = RwSignal::new(Vec::<String>::new());
    let deuteranopia = RwSignal::new(Vec::<String>::new());
    let tritanopia = RwSignal::new(Vec::<String>::new());

    let slot_for = move |deficiency: Deficiency| match deficiency {
        Deficiency::Protanopia => protanopia,
        Deficiency::Deuteranopia => deuteranopia,
        Deficiency::Tritanopia => tritanopia,
    };

    let load_palette = move || {
        let colors = match validate_palette_input(&input.get_untracked()) {
            Ok(colors) => colors,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        original.set(colors.clone());

        // Three isolated requests; one failing does not block the others.
        for deficiency in Deficiency::ALL {
            let slot = slot_for(deficiency);
            slot.set(Vec::new());
            #[cfg(feature = "hydrate")]
            {
                let palette = colors.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::simulate_deficiency(&palette, deficiency).await {
                        Ok(simulated) => slot.set(simulated),
                        Err(e) => log::error!("{} simulation failed: {e}", deficiency.as_str()),
                    }
                });
            }
        }
    };

    view! {
        <div class="accessibility-page">
            <h1>"Color Accessibility"</h1>
            <p class="page-subtitle">
                "Preview how a palette appears under common color-vision deficiencies."
            </p>

            <div class="palette-loader">
                <input
                    id="palette-input"
                    class="palette-input"
                    type="text"
                    placeholder="#FF0000, #00FF00, #0000FF"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            load_palette();
                        }
                    }
                />
                <button class="btn btn--primary" on:click=move |_| load_palette()>
                    "Load Palette"
                </button>
            </div>

            <ErrorPanel message=error/>

            <Show when=move || !original.get().is_empty()>
                <div class="simulation-grid">
                    <section class="simulation-column">
                        <h2>"Original"</h2>
                        {move || view! { <SwatchStrip colors=original.get()/> }}
                    </section>
                    {Deficiency::ALL
                        .into_iter()
                        .map(|deficiency| {
                            let slot = slot_for(deficiency);
                            view! {
                                <section class="simulation-column">
                                    <h2>{deficiency.label()}</h2>
                                    <Show
                                        when=move || !slot.get().is_empty()
                                        fallback=|| view! { <p class="empty-palette">"No colors"</p> }
                                    >
                                        {move || view! { <SwatchStrip colors=slot.get()/> }}
                                    </Show>
                                </section>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
}
