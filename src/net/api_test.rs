use super::*;

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn archive_endpoints_embed_username() {
    assert_eq!(archive_data_endpoint("acme"), "/archives/acme/data");
    assert_eq!(archive_update_endpoint("acme"), "/archives/acme/update");
    assert_eq!(archive_delete_endpoint("acme"), "/archives/acme/delete");
}

#[test]
fn project_endpoints_embed_username_and_id() {
    assert_eq!(project_create_endpoint("acme"), "/archives/acme/project");
    assert_eq!(
        project_update_endpoint("acme", 7),
        "/archives/acme/projects/7/update"
    );
    assert_eq!(
        project_delete_endpoint("acme", 7),
        "/archives/acme/projects/7/delete"
    );
}

#[test]
fn image_delete_endpoint_embeds_all_ids() {
    assert_eq!(
        image_delete_endpoint("acme", 7, 12),
        "/archives/acme/projects/7/images/12/delete"
    );
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(502), "request failed: 502");
}

// =============================================================
// Response unwrapping
// =============================================================

#[test]
fn palette_or_error_returns_palette_on_success() {
    let resp = PaletteResponse {
        success: true,
        palette: vec!["#112233".to_owned()],
        error: None,
    };
    assert_eq!(palette_or_error(resp, "fallback"), Ok(vec!["#112233".to_owned()]));
}

#[test]
fn palette_or_error_prefers_server_message() {
    let resp = PaletteResponse {
        success: false,
        palette: vec![],
        error: Some("seed out of range".to_owned()),
    };
    assert_eq!(
        palette_or_error(resp, "fallback"),
        Err("seed out of range".to_owned())
    );
}

#[test]
fn palette_or_error_uses_fallback_without_message() {
    let resp = PaletteResponse {
        success: false,
        palette: vec![],
        error: None,
    };
    assert_eq!(
        palette_or_error(resp, "Failed to generate palette"),
        Err("Failed to generate palette".to_owned())
    );
}

#[test]
fn action_or_error_maps_failure_to_message() {
    let ok = ActionResponse { success: true, error: None };
    assert_eq!(action_or_error(ok, "fallback"), Ok(()));

    let failed = ActionResponse {
        success: false,
        error: Some("Archive not found".to_owned()),
    };
    assert_eq!(
        action_or_error(failed, "fallback"),
        Err("Archive not found".to_owned())
    );

    let silent = ActionResponse { success: false, error: None };
    assert_eq!(
        action_or_error(silent, "Failed to delete project"),
        Err("Failed to delete project".to_owned())
    );
}
