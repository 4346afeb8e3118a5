//! Inline error/result panels shared by the tool form pages.

use leptos::prelude::*;

/// Inline error panel shown when `message` holds a value.
#[component]
pub fn ErrorPanel(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="error-section">
                <p class="error-message">{move || message.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
