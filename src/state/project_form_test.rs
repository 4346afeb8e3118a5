use super::*;
use crate::net::types::ProjectImage;

fn model() -> ProjectFormModel {
    ProjectFormModel {
        title: "  Poster set  ".to_owned(),
        palette_text: "#ff0000, nope #00FF00".to_owned(),
        width: "300".to_owned(),
        height: "".to_owned(),
        fit: "contain".to_owned(),
        radius: "abc".to_owned(),
        gap: "4".to_owned(),
        local_images: vec!["blob:a".to_owned()],
        existing_images: vec!["/archives/uploads/acme/1/a.png".to_owned()],
    }
}

#[test]
fn palette_parses_and_normalizes_text_field() {
    assert_eq!(model().palette(), vec!["#FF0000", "#00FF00"]);
}

#[test]
fn layout_applies_defaults_per_field() {
    let layout = model().layout();
    assert_eq!(layout.width, 300);
    assert_eq!(layout.height, 200);
    assert_eq!(layout.fit, "contain");
    assert_eq!(layout.radius, 8);
    assert_eq!(layout.gap, 4);
}

#[test]
fn images_lists_local_before_existing() {
    assert_eq!(
        model().images(),
        vec!["blob:a".to_owned(), "/archives/uploads/acme/1/a.png".to_owned()]
    );
}

#[test]
fn trimmed_title_strips_whitespace() {
    assert_eq!(model().trimmed_title(), "Poster set");
}

#[test]
fn from_record_prefills_all_fields() {
    let record = ProjectRecord {
        id: 5,
        title: "Brand".to_owned(),
        palette: vec!["#102030".to_owned(), "#405060".to_owned()],
        img_width: 320,
        img_height: 180,
        img_fit: "fill".to_owned(),
        img_radius: 12,
        img_gap: 20,
        created_at: None,
        images: vec![ProjectImage {
            id: 1,
            filename: "a.png".to_owned(),
            filepath: "acme/5/a.png".to_owned(),
        }],
    };
    let form = ProjectFormModel::from_record(&record);
    assert_eq!(form.title, "Brand");
    assert_eq!(form.palette_text, "#102030, #405060");
    assert_eq!(form.width, "320");
    assert_eq!(form.height, "180");
    assert_eq!(form.fit, "fill");
    assert_eq!(form.radius, "12");
    assert_eq!(form.gap, "20");
    assert!(form.local_images.is_empty());
    assert_eq!(form.existing_images, vec!["/archives/uploads/acme/5/a.png"]);
}

#[test]
fn default_model_previews_as_blank() {
    let form = ProjectFormModel::default();
    assert!(form.trimmed_title().is_empty());
    assert!(form.palette().is_empty());
    assert!(form.images().is_empty());
}
