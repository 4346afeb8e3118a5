//! Image tile layout settings for project previews and galleries.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Default tile width in pixels.
pub const DEFAULT_WIDTH: u32 = 260;
/// Default tile height in pixels.
pub const DEFAULT_HEIGHT: u32 = 200;
/// Default corner radius in pixels.
pub const DEFAULT_RADIUS: u32 = 8;
/// Default grid gap in pixels.
pub const DEFAULT_GAP: u32 = 16;
/// Default CSS `object-fit` value.
pub const DEFAULT_FIT: &str = "cover";

/// Accepted CSS `object-fit` values for the fit field.
pub const FIT_VALUES: [&str; 5] = ["fill", "contain", "cover", "none", "scale-down"];

/// Numeric and enumerated parameters controlling image tile rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutSettings {
    pub width: u32,
    pub height: u32,
    pub radius: u32,
    pub gap: u32,
    pub fit: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            radius: DEFAULT_RADIUS,
            gap: DEFAULT_GAP,
            fit: DEFAULT_FIT.to_owned(),
        }
    }
}

impl LayoutSettings {
    /// Build settings from raw form field strings, applying defaults for
    /// empty or non-numeric dimension fields and unknown fit values.
    pub fn from_fields(width: &str, height: &str, fit: &str, radius: &str, gap: &str) -> Self {
        Self {
            width: parse_dimension(width, DEFAULT_WIDTH),
            height: parse_dimension(height, DEFAULT_HEIGHT),
            radius: parse_dimension(radius, DEFAULT_RADIUS),
            gap: parse_dimension(gap, DEFAULT_GAP),
            fit: normalize_fit(fit),
        }
    }
}

/// Parse a positive integer pixel field, falling back on empty, garbage, or
/// zero input.
pub fn parse_dimension(raw: &str, fallback: u32) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => fallback,
    }
}

/// Clamp a fit field to one of the accepted CSS `object-fit` values.
pub fn normalize_fit(raw: &str) -> String {
    let trimmed = raw.trim();
    if FIT_VALUES.contains(&trimmed) {
        trimmed.to_owned()
    } else {
        DEFAULT_FIT.to_owned()
    }
}
