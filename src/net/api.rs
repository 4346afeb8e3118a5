//! HTTP helpers for the HueVault backend endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<T, String>`, the ok value or a
//! user-presentable message (the server's `error` field when present, else a
//! fallback). Callers surface the message and restore their controls; there
//! are no retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    ArchiveDetail, CreateProjectRequest, Deficiency, ExpandRequest, GenerateRequest,
    RegenerateRequest,
};
#[cfg(any(test, feature = "hydrate"))]
use super::types::{ActionResponse, PaletteResponse};
#[cfg(feature = "hydrate")]
use super::types::{CreateProjectResponse, SimulateRequest};

#[cfg(any(test, feature = "hydrate"))]
fn archive_data_endpoint(username: &str) -> String {
    format!("/archives/{username}/data")
}

#[cfg(any(test, feature = "hydrate"))]
fn archive_update_endpoint(username: &str) -> String {
    format!("/archives/{username}/update")
}

#[cfg(any(test, feature = "hydrate"))]
fn archive_delete_endpoint(username: &str) -> String {
    format!("/archives/{username}/delete")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn project_create_endpoint(username: &str) -> String {
    format!("/archives/{username}/project")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn project_update_endpoint(username: &str, project_id: i64) -> String {
    format!("/archives/{username}/projects/{project_id}/update")
}

#[cfg(any(test, feature = "hydrate"))]
fn project_delete_endpoint(username: &str, project_id: i64) -> String {
    format!("/archives/{username}/projects/{project_id}/delete")
}

#[cfg(any(test, feature = "hydrate"))]
fn image_delete_endpoint(username: &str, project_id: i64, image_id: i64) -> String {
    format!("/archives/{username}/projects/{project_id}/images/{image_id}/delete")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Unwrap a `{success, palette}` body into the palette or its error message.
#[cfg(any(test, feature = "hydrate"))]
fn palette_or_error(resp: PaletteResponse, fallback: &str) -> Result<Vec<String>, String> {
    if resp.success {
        Ok(resp.palette)
    } else {
        Err(resp.error.unwrap_or_else(|| fallback.to_owned()))
    }
}

/// Unwrap a `{success, error?}` body, mapping failure to its message.
#[cfg(any(test, feature = "hydrate"))]
fn action_or_error(resp: ActionResponse, fallback: &str) -> Result<(), String> {
    if resp.success {
        Ok(())
    } else {
        Err(resp.error.unwrap_or_else(|| fallback.to_owned()))
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, String>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    // Error bodies still carry the JSON shape at 4xx/5xx; fall back to the
    // status code only when the body is unparseable.
    let status = resp.status();
    resp.json::<T>()
        .await
        .map_err(|_| request_failed_message(status))
}

/// Request a brand-new palette via `POST /palette/generate`.
///
/// # Errors
///
/// Returns the server's error message, or a transport error string.
pub async fn generate_palette(req: &GenerateRequest) -> Result<Vec<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp: PaletteResponse = post_json("/palette/generate", req).await?;
        palette_or_error(resp, "Failed to generate palette")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err("not available on server".to_owned())
    }
}

/// Resample unlocked positions via `POST /palette/regenerate`.
///
/// The server contract keeps locked positions unchanged; the client applies
/// the response verbatim.
///
/// # Errors
///
/// Returns the server's error message, or a transport error string.
pub async fn regenerate_palette(req: &RegenerateRequest) -> Result<Vec<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp: PaletteResponse = post_json("/palette/regenerate", req).await?;
        palette_or_error(resp, "Failed to regenerate palette")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err("not available on server".to_owned())
    }
}

/// Grow the palette by one color via `POST /palette/expand`.
///
/// # Errors
///
/// Returns the server's error message, or a transport error string.
pub async fn expand_palette(req: &ExpandRequest) -> Result<Vec<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp: PaletteResponse = post_json("/palette/expand", req).await?;
        palette_or_error(resp, "Failed to expand palette")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err("not available on server".to_owned())
    }
}

/// Simulate one color-vision deficiency via `POST /accessibility/simulate`.
///
/// # Errors
///
/// Returns the server's error message, or a transport error string.
pub async fn simulate_deficiency(
    palette: &[String],
    deficiency: Deficiency,
) -> Result<Vec<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let req = SimulateRequest {
            palette: palette.to_vec(),
            deficiency_type: deficiency.as_str().to_owned(),
        };
        let resp: PaletteResponse = post_json("/accessibility/simulate", &req).await?;
        palette_or_error(resp, "Failed to simulate palette")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (palette, deficiency);
        Err("not available on server".to_owned())
    }
}

/// Create a standalone project via `POST /projects/create`, returning its URL.
///
/// # Errors
///
/// Returns the server's error message, or a transport error string.
pub async fn create_project(req: &CreateProjectRequest) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp: CreateProjectResponse = post_json("/projects/create", req).await?;
        if resp.success {
            resp.url.ok_or_else(|| "Failed to create project".to_owned())
        } else {
            Err(resp.error.unwrap_or_else(|| "Failed to create project".to_owned()))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err("not available on server".to_owned())
    }
}

/// Fetch the archive record and its projects for the editor page.
///
/// # Errors
///
/// Returns an error string if the request fails or the archive is missing.
pub async fn fetch_archive(username: &str) -> Result<ArchiveDetail, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = archive_data_endpoint(username);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<ArchiveDetail>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        Err("not available on server".to_owned())
    }
}

/// Save an edited archive display name.
///
/// # Errors
///
/// Returns the server's error message, or a transport error string.
pub async fn update_display_name(username: &str, display_name: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = archive_update_endpoint(username);
        let payload = serde_json::json!({ "display_name": display_name });
        let resp: ActionResponse = post_json(&url, &payload).await?;
        action_or_error(resp, "Failed to update archive")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, display_name);
        Err("not available on server".to_owned())
    }
}

/// Delete a project. The caller is responsible for user confirmation.
///
/// # Errors
///
/// Returns the server's error message, or a transport error string.
pub async fn delete_project(username: &str, project_id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = project_delete_endpoint(username, project_id);
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        let body: ActionResponse = resp
            .json()
            .await
            .map_err(|_| request_failed_message(status))?;
        action_or_error(body, "Failed to delete project")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, project_id);
        Err("not available on server".to_owned())
    }
}

/// Delete one uploaded image from a project.
///
/// # Errors
///
/// Returns the server's error message, or a transport error string.
pub async fn delete_image(username: &str, project_id: i64, image_id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = image_delete_endpoint(username, project_id, image_id);
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        let body: ActionResponse = resp
            .json()
            .await
            .map_err(|_| request_failed_message(status))?;
        action_or_error(body, "Failed to delete image")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, project_id, image_id);
        Err("not available on server".to_owned())
    }
}

/// Delete an entire archive, sending the user-confirmed username.
///
/// # Errors
///
/// Returns the server's error message, or a transport error string.
pub async fn delete_archive(username: &str, confirmed_username: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = archive_delete_endpoint(username);
        let payload = serde_json::json!({ "username": confirmed_username });
        let resp: ActionResponse = post_json(&url, &payload).await?;
        action_or_error(resp, "Failed to delete archive")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, confirmed_username);
        Err("not available on server".to_owned())
    }
}

/// Submit a multipart project add/update form.
///
/// # Errors
///
/// Returns the server's error message, or a transport error string.
#[cfg(feature = "hydrate")]
pub async fn submit_project_form(url: &str, form: &web_sys::FormData) -> Result<(), String> {
    let resp = gloo_net::http::Request::post(url)
        .body(form.clone())
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let status = resp.status();
    let body: super::types::ProjectResponse = resp
        .json()
        .await
        .map_err(|_| request_failed_message(status))?;
    if body.success {
        Ok(())
    } else {
        Err(body.error.unwrap_or_else(|| "Failed to save project".to_owned()))
    }
}

/// Submit a multipart form whose success response is a binary file.
///
/// Non-OK responses are decoded as `{error}` JSON when possible.
///
/// # Errors
///
/// Returns the server's error message, or a transport error string.
#[cfg(feature = "hydrate")]
pub async fn post_multipart_download(
    url: &str,
    form: &web_sys::FormData,
    fallback_error: &str,
) -> Result<Vec<u8>, String> {
    let resp = gloo_net::http::Request::post(url)
        .body(form.clone())
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        let status = resp.status();
        let message = resp
            .json::<ActionResponse>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| fallback_error.to_owned());
        log::error!("{url} failed with status {status}: {message}");
        return Err(message);
    }
    resp.binary().await.map_err(|e| e.to_string())
}
