//! Client-side file downloads from binary HTTP responses.
//!
//! Wraps response bytes in a temporary object URL and clicks a synthetic
//! anchor so the browser saves the file. The object URL is revoked once the
//! click has started the download. Requires a browser environment; SSR paths
//! safely no-op.

/// Save `bytes` as a file named `filename` via a synthetic anchor click.
pub fn save_bytes(bytes: &[u8], filename: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let array = js_sys::Array::new();
        array.push(&js_sys::Uint8Array::from(bytes));
        let Ok(blob) = web_sys::Blob::new_with_u8_array_sequence(&array) else {
            log::error!("download: failed to build blob for {filename}");
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            log::error!("download: failed to create object URL for {filename}");
            return;
        };
        let anchor = document
            .create_element("a")
            .ok()
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok());
        if let Some(anchor) = anchor {
            anchor.set_href(&url);
            anchor.set_download(filename);
            if let Some(body) = document.body() {
                let _ = body.append_child(&anchor);
                anchor.click();
                anchor.remove();
            }
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bytes, filename);
    }
}
