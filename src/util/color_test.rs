use super::*;

// =============================================================
// is_valid_hex
// =============================================================

#[test]
fn is_valid_hex_accepts_six_digit_forms() {
    assert!(is_valid_hex("#FFFFFF"));
    assert!(is_valid_hex("#abc123"));
    assert!(is_valid_hex("#A1b2C3"));
}

#[test]
fn is_valid_hex_rejects_other_forms() {
    assert!(!is_valid_hex("FFFFFF"));
    assert!(!is_valid_hex("#FFF"));
    assert!(!is_valid_hex("#FFFFFFF"));
    assert!(!is_valid_hex("#12GG34"));
    assert!(!is_valid_hex("red"));
    assert!(!is_valid_hex(""));
}

// =============================================================
// normalize_hex
// =============================================================

#[test]
fn normalize_hex_uppercases_and_trims() {
    assert_eq!(normalize_hex("#abc123"), Some("#ABC123".to_owned()));
    assert_eq!(normalize_hex("  #ff00ff "), Some("#FF00FF".to_owned()));
}

#[test]
fn normalize_hex_rejects_invalid_input() {
    assert_eq!(normalize_hex("blue"), None);
    assert_eq!(normalize_hex("#ABC"), None);
}

// =============================================================
// parse_palette
// =============================================================

#[test]
fn parse_palette_filters_and_uppercases() {
    assert_eq!(
        parse_palette("#abc123, red, #FF00FF"),
        vec!["#ABC123".to_owned(), "#FF00FF".to_owned()]
    );
}

#[test]
fn parse_palette_splits_on_whitespace_and_newlines() {
    assert_eq!(
        parse_palette("#111111 #222222\n#333333\t#444444"),
        vec!["#111111", "#222222", "#333333", "#444444"]
    );
}

#[test]
fn parse_palette_keeps_duplicates_and_order() {
    assert_eq!(
        parse_palette("#FF0000, #00ff00, #FF0000"),
        vec!["#FF0000", "#00FF00", "#FF0000"]
    );
}

#[test]
fn parse_palette_empty_when_no_valid_colors() {
    assert!(parse_palette("").is_empty());
    assert!(parse_palette("red green blue").is_empty());
}
