//! Bound-field model shared by the add-project and edit-project forms.
//!
//! Field values stay raw strings exactly as typed; parsing into validated
//! palettes and layout settings happens on read, so the live preview and the
//! multipart submit always agree on the same interpretation.

#[cfg(test)]
#[path = "project_form_test.rs"]
mod project_form_test;

use crate::net::types::ProjectRecord;
use crate::util::color::parse_palette;
use crate::util::layout::LayoutSettings;

/// Raw form fields plus image references for one project form instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectFormModel {
    pub title: String,
    pub palette_text: String,
    pub width: String,
    pub height: String,
    pub fit: String,
    pub radius: String,
    pub gap: String,
    /// Temporary object URLs for freshly chosen local files.
    pub local_images: Vec<String>,
    /// URLs of already-persisted images (edit form only).
    pub existing_images: Vec<String>,
}

impl ProjectFormModel {
    /// Prefill the edit form from a retained project record.
    pub fn from_record(record: &ProjectRecord) -> Self {
        Self {
            title: record.title.clone(),
            palette_text: record.palette.join(", "),
            width: record.img_width.to_string(),
            height: record.img_height.to_string(),
            fit: record.img_fit.clone(),
            radius: record.img_radius.to_string(),
            gap: record.img_gap.to_string(),
            local_images: Vec::new(),
            existing_images: record.images.iter().map(|img| img.url()).collect(),
        }
    }

    /// Validated palette parsed from the free-form text field.
    pub fn palette(&self) -> Vec<String> {
        parse_palette(&self.palette_text)
    }

    /// Layout settings with defaults applied to blank or garbage fields.
    pub fn layout(&self) -> LayoutSettings {
        LayoutSettings::from_fields(&self.width, &self.height, &self.fit, &self.radius, &self.gap)
    }

    /// Preview image URLs: local object URLs first, then persisted ones.
    pub fn images(&self) -> Vec<String> {
        self.local_images
            .iter()
            .chain(self.existing_images.iter())
            .cloned()
            .collect()
    }

    /// Trimmed title as submitted and previewed.
    pub fn trimmed_title(&self) -> String {
        self.title.trim().to_owned()
    }
}
