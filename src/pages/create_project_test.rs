use super::*;

// =============================================================
// parse_url_lines
// =============================================================

#[test]
fn parse_url_lines_trims_and_drops_blanks() {
    assert_eq!(
        parse_url_lines("https://a.example/logo.png\n\n  https://b.example/x.svg  \n"),
        vec!["https://a.example/logo.png", "https://b.example/x.svg"]
    );
}

#[test]
fn parse_url_lines_empty_text_is_empty() {
    assert!(parse_url_lines("").is_empty());
    assert!(parse_url_lines("\n \n").is_empty());
}

// =============================================================
// build_create_request
// =============================================================

#[test]
fn build_create_request_requires_title() {
    assert_eq!(
        build_create_request("   ", "", "", "", "", ""),
        Err("Project title is required")
    );
}

#[test]
fn build_create_request_rejects_bad_palette_json() {
    assert_eq!(
        build_create_request("T", "", "not json", "", "", ""),
        Err("Invalid JSON format for palettes")
    );
}

#[test]
fn build_create_request_defaults_empty_palettes_to_array() {
    let req = build_create_request("T", " desc ", "  ", "", "", "").unwrap();
    assert_eq!(req.palettes, serde_json::json!([]));
    assert_eq!(req.description, "desc");
}

#[test]
fn build_create_request_collects_all_fields() {
    let req = build_create_request(
        " Brand ",
        "A refresh",
        r##"[["#FF0000"]]"##,
        "https://a/logo.png",
        "https://a/favicon.ico",
        "https://a/hero.png\nhttps://a/footer.png",
    )
    .unwrap();
    assert_eq!(req.title, "Brand");
    assert_eq!(req.palettes, serde_json::json!([["#FF0000"]]));
    assert_eq!(req.logos, vec!["https://a/logo.png"]);
    assert_eq!(req.favicons, vec!["https://a/favicon.ico"]);
    assert_eq!(req.graphics.len(), 2);
}
