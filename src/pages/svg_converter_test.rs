use super::*;

#[test]
fn validate_file_selected_blocks_missing_file() {
    assert_eq!(validate_file_selected(false), Err("Please select a file"));
    assert_eq!(validate_file_selected(true), Ok(()));
}

#[test]
fn converted_filename_swaps_extension() {
    assert_eq!(converted_filename("logo.svg", "png"), "logo.png");
    assert_eq!(converted_filename("art.final.svg", "tiff"), "art.final.tiff");
}

#[test]
fn converted_filename_handles_missing_extension() {
    assert_eq!(converted_filename("logo", "jpeg"), "logo.jpeg");
}

#[test]
fn converted_filename_blank_source_uses_plain_fallback() {
    assert_eq!(converted_filename("", "png"), "converted-image");
    assert_eq!(converted_filename(".svg", "tiff"), "converted-image");
}

#[test]
fn output_formats_default_first_to_png() {
    assert_eq!(OUTPUT_FORMATS[0], "png");
}
