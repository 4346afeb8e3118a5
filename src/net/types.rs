//! Shared wire-protocol DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads field-for-field so serde
//! round-trips stay lossless. Hex colors on the wire are always uppercase
//! `#RRGGBB` strings, validated client-side before send.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A simulated color-vision deficiency applied server-side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deficiency {
    Protanopia,
    Deuteranopia,
    Tritanopia,
}

impl Deficiency {
    /// All deficiency types, in display order.
    pub const ALL: [Self; 3] = [Self::Protanopia, Self::Deuteranopia, Self::Tritanopia];

    /// Wire name sent as `deficiency_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Protanopia => "protanopia",
            Self::Deuteranopia => "deuteranopia",
            Self::Tritanopia => "tritanopia",
        }
    }

    /// Human-readable heading for the simulated swatch group.
    pub fn label(self) -> &'static str {
        match self {
            Self::Protanopia => "Protanopia",
            Self::Deuteranopia => "Deuteranopia",
            Self::Tritanopia => "Tritanopia",
        }
    }
}

/// Request body for `POST /accessibility/simulate`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulateRequest {
    pub palette: Vec<String>,
    pub deficiency_type: String,
}

/// Request body for `POST /palette/generate`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub num_colors: u32,
    pub formal_playful: f64,
    pub modern_classic: f64,
    pub adjectives: Vec<String>,
    pub manual_colors: Vec<String>,
    pub seed: u32,
}

/// Request body for `POST /palette/regenerate`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegenerateRequest {
    pub palette: Vec<String>,
    pub locked_indices: Vec<usize>,
    pub formal_playful: f64,
    pub modern_classic: f64,
    pub adjectives: Vec<String>,
    pub seed: u32,
}

/// Request body for `POST /palette/expand`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExpandRequest {
    pub palette: Vec<String>,
    pub new_size: usize,
    pub formal_playful: f64,
    pub modern_classic: f64,
    pub adjectives: Vec<String>,
    pub seed: u32,
}

/// `{success, palette}` shape shared by the palette and simulation endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PaletteResponse {
    pub success: bool,
    #[serde(default)]
    pub palette: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `{success, error?}` shape returned by update/delete actions.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Request body for `POST /projects/create`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: String,
    pub palettes: serde_json::Value,
    pub logos: Vec<String>,
    pub favicons: Vec<String>,
    pub graphics: Vec<String>,
}

/// Response for `POST /projects/create`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CreateProjectResponse {
    pub success: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// An archive record as returned by the archive data endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArchiveRecord {
    pub id: i64,
    /// Lowercase unique handle, also used in endpoint paths.
    pub username: String,
    /// Editable display title shown on the archive page.
    pub display_name: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A persisted project within an archive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub palette: Vec<String>,
    pub img_width: u32,
    pub img_height: u32,
    pub img_fit: String,
    pub img_radius: u32,
    pub img_gap: u32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub images: Vec<ProjectImage>,
}

/// An uploaded image attached to a project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectImage {
    pub id: i64,
    pub filename: String,
    /// Path relative to the archive uploads root.
    pub filepath: String,
}

impl ProjectImage {
    /// Public URL the backend serves this image from.
    pub fn url(&self) -> String {
        format!("/archives/uploads/{}", self.filepath)
    }
}

/// Archive plus projects, fetched once on archive-editor mount.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ArchiveDetail {
    pub archive: ArchiveRecord,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

/// `{success, project}` shape returned by project create/update.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProjectResponse {
    pub success: bool,
    #[serde(default)]
    pub project: Option<ProjectRecord>,
    #[serde(default)]
    pub error: Option<String>,
}
