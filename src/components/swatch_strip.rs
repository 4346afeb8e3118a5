//! Horizontal strip of color swatches with hex overlays.

use leptos::prelude::*;

/// A row of color swatches. Each swatch shows its hex value as an overlay
/// label; the strip renders nothing special for an empty palette; callers
/// decide on empty-state messaging.
#[component]
pub fn SwatchStrip(colors: Vec<String>) -> impl IntoView {
    view! {
        <div class="palette-display-short">
            {colors
                .into_iter()
                .map(|color| {
                    let background = format!("background-color: {color};");
                    view! {
                        <div class="color-swatch-short" style=background title=color.clone()>
                            <span class="color-hex-overlay">{color.clone()}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
