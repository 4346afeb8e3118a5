use super::*;

#[test]
fn validate_palette_input_rejects_empty_text() {
    assert_eq!(
        validate_palette_input("   "),
        Err("Please enter at least one color")
    );
}

#[test]
fn validate_palette_input_rejects_all_invalid_tokens() {
    assert_eq!(
        validate_palette_input("red, green, #12"),
        Err("No valid hex colors found. Please enter colors in format #RRGGBB")
    );
}

#[test]
fn validate_palette_input_keeps_valid_uppercased_colors() {
    assert_eq!(
        validate_palette_input("#abc123 junk #FF00FF"),
        Ok(vec!["#ABC123".to_owned(), "#FF00FF".to_owned()])
    );
}
