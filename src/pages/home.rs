//! Landing page linking to the HueVault tools.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"HueVault"</h1>
            <p class="home-page__subtitle">"Design asset tools for graphic designers"</p>
            <nav class="home-page__tools">
                <a class="tool-card" href="/palette">"Palette Generator"</a>
                <a class="tool-card" href="/accessibility">"Color Accessibility"</a>
                <a class="tool-card" href="/background-removal">"Background Removal"</a>
                <a class="tool-card" href="/svg-converter">"SVG Converter"</a>
                <a class="tool-card" href="/projects/create">"Create Project"</a>
            </nav>
        </div>
    }
}
