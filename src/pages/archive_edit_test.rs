use super::{palette_json_field, record_layout};
use crate::net::types::ProjectRecord;
use crate::state::project_form::ProjectFormModel;

fn record() -> ProjectRecord {
    ProjectRecord {
        id: 7,
        title: "Sunset".to_owned(),
        palette: vec!["#FF0000".to_owned(), "#00FF00".to_owned()],
        img_width: 320,
        img_height: 240,
        img_fit: "contain".to_owned(),
        img_radius: 4,
        img_gap: 12,
        created_at: None,
        images: Vec::new(),
    }
}

// ============================================================================
// Multipart palette field
// ============================================================================

#[test]
fn palette_field_serializes_parsed_colors_as_json_array() {
    let model = ProjectFormModel {
        palette_text: "#ff0000, #00ff00".to_owned(),
        ..ProjectFormModel::default()
    };
    assert_eq!(palette_json_field(&model), r##"["#FF0000","#00FF00"]"##);
}

#[test]
fn palette_field_is_empty_array_for_blank_input() {
    let model = ProjectFormModel::default();
    assert_eq!(palette_json_field(&model), "[]");
}

#[test]
fn palette_field_drops_invalid_tokens() {
    let model = ProjectFormModel {
        palette_text: "#FF0000 nonsense #GGGGGG #0000ff".to_owned(),
        ..ProjectFormModel::default()
    };
    assert_eq!(palette_json_field(&model), r##"["#FF0000","#0000FF"]"##);
}

// ============================================================================
// Persisted record layout
// ============================================================================

#[test]
fn record_layout_copies_stored_dimensions() {
    let layout = record_layout(&record());
    assert_eq!(layout.width, 320);
    assert_eq!(layout.height, 240);
    assert_eq!(layout.fit, "contain");
    assert_eq!(layout.radius, 4);
    assert_eq!(layout.gap, 12);
}
