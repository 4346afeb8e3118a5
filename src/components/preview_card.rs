//! Live project preview card.
//!
//! DESIGN
//! ======
//! A pure function of (title, palette, images, layout): no network I/O,
//! fully synchronous, and rebuilt from props on every call, so re-rendering
//! with identical inputs yields identical output with no accumulation.

#[cfg(test)]
#[path = "preview_card_test.rs"]
mod preview_card_test;

use leptos::prelude::*;

use crate::components::swatch_strip::SwatchStrip;
use crate::util::layout::LayoutSettings;

/// Whether the preview should show only the placeholder message.
pub fn preview_is_blank(title: &str, palette: &[String], images: &[String]) -> bool {
    title.is_empty() && palette.is_empty() && images.is_empty()
}

/// CSS for the responsive image grid: column template sized from the tile
/// width, fixed gap.
pub fn gallery_style(layout: &LayoutSettings) -> String {
    format!(
        "grid-template-columns: repeat(auto-fill, minmax({}px, 1fr)); gap: {}px;",
        layout.width, layout.gap
    )
}

/// CSS for one image tile: fixed size with rounded corners.
pub fn tile_style(layout: &LayoutSettings) -> String {
    format!(
        "width: {}px; height: {}px; border-radius: {}px;",
        layout.width, layout.height, layout.radius
    )
}

/// CSS for the image inside a tile: fills the tile per the fit setting.
pub fn image_style(layout: &LayoutSettings) -> String {
    format!(
        "object-fit: {}; width: 100%; height: 100%; border-radius: {}px;",
        layout.fit, layout.radius
    )
}

/// Live preview of a project built from current form inputs. Image sources
/// are opaque URL strings: temporary object URLs for local files or
/// persisted upload URLs.
#[component]
pub fn PreviewCard(
    title: String,
    palette: Vec<String>,
    images: Vec<String>,
    layout: LayoutSettings,
) -> impl IntoView {
    if preview_is_blank(&title, &palette, &images) {
        return view! {
            <div class="preview-placeholder">"Enter project details to see preview"</div>
        }
        .into_any();
    }

    let gallery = gallery_style(&layout);
    let tile = tile_style(&layout);
    let image = image_style(&layout);

    view! {
        <div class="project-card-full">
            <Show when={
                let title = title.clone();
                move || !title.is_empty()
            }>
                <h3>{title.clone()}</h3>
            </Show>
            <Show when={
                let palette = palette.clone();
                move || !palette.is_empty()
            }>
                <SwatchStrip colors=palette.clone()/>
            </Show>
            <Show when={
                let images = images.clone();
                move || !images.is_empty()
            }>
                <div class="graphics-gallery" style=gallery.clone()>
                    {images
                        .iter()
                        .map(|url| {
                            view! {
                                <div class="graphic-item" style=tile.clone()>
                                    <img src=url.clone() style=image.clone()/>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
    .into_any()
}
