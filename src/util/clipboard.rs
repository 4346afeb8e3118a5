//! Clipboard helpers for copying hex codes.
//!
//! Copy is fire-and-forget: the browser clipboard API is promise-based but
//! callers only need the optimistic "copied" feedback, so failures are
//! ignored. Requires a browser environment; SSR paths safely no-op.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Join a palette into the comma-separated copy-all payload.
pub fn copy_all_text(palette: &[String]) -> String {
    palette.join(", ")
}

/// Write `text` to the system clipboard.
pub fn copy_text(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(text);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
    }
}
