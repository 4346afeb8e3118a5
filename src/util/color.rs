//! Hex color validation and palette text parsing.
//!
//! DESIGN
//! ======
//! Every surface that accepts colors (palette generator, simulator input,
//! project palette textareas, background-removal color field) validates
//! against the same `#RRGGBB` pattern and normalizes to uppercase, so the
//! wire format stays uniform across all backend endpoints.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Whether `value` is a 6-digit hex color of the form `#RRGGBB`
/// (case-insensitive).
pub fn is_valid_hex(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Normalize a validated hex color to canonical uppercase `#RRGGBB`.
///
/// Returns `None` when the value does not match the pattern.
pub fn normalize_hex(value: &str) -> Option<String> {
    let trimmed = value.trim();
    is_valid_hex(trimmed).then(|| trimmed.to_ascii_uppercase())
}

/// Parse free-form palette text into validated hex colors.
///
/// Splits on commas and whitespace (including newlines), drops tokens that
/// are not `#RRGGBB`, and uppercases the survivors. Duplicates are kept and
/// order is preserved.
pub fn parse_palette(input: &str) -> Vec<String> {
    input
        .split([',', ' ', '\t', '\n', '\r'])
        .filter_map(normalize_hex)
        .collect()
}
