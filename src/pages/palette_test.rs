use super::*;
use std::collections::BTreeSet;

fn style() -> StyleParams {
    StyleParams {
        formal_playful: 0.25,
        modern_classic: 0.75,
        adjectives: vec!["warm".to_owned()],
    }
}

fn state_with(colors: &[&str], locked: &[usize], seed: u32) -> PaletteState {
    PaletteState {
        colors: colors.iter().map(|c| (*c).to_owned()).collect(),
        locked: locked.iter().copied().collect::<BTreeSet<_>>(),
        seed,
        request_seq: 1,
    }
}

// =============================================================
// Field parsing
// =============================================================

#[test]
fn format_slider_renders_two_decimals() {
    assert_eq!(format_slider("0.5"), "0.50");
    assert_eq!(format_slider("0"), "0.00");
    assert_eq!(format_slider("1"), "1.00");
}

#[test]
fn parse_slider_defaults_midpoint_on_garbage() {
    assert_eq!(parse_slider("abc"), 0.5);
    assert_eq!(parse_slider(""), 0.5);
    assert_eq!(parse_slider("0.33"), 0.33);
}

#[test]
fn parse_num_colors_defaults_to_five() {
    assert_eq!(parse_num_colors("8"), 8);
    assert_eq!(parse_num_colors(""), 5);
    assert_eq!(parse_num_colors("0"), 5);
    assert_eq!(parse_num_colors("lots"), 5);
}

#[test]
fn collect_manual_colors_skips_invalid_entries() {
    let inputs = vec![
        "#aa00bb".to_owned(),
        String::new(),
        "red".to_owned(),
        "#123456".to_owned(),
    ];
    assert_eq!(collect_manual_colors(&inputs), vec!["#AA00BB", "#123456"]);
}

// =============================================================
// Request construction
// =============================================================

#[test]
fn build_generate_request_carries_all_parameters() {
    let req = build_generate_request(5, &style(), vec!["#FF0000".to_owned()], 42);
    assert_eq!(req.num_colors, 5);
    assert_eq!(req.formal_playful, 0.25);
    assert_eq!(req.modern_classic, 0.75);
    assert_eq!(req.adjectives, vec!["warm"]);
    assert_eq!(req.manual_colors, vec!["#FF0000"]);
    assert_eq!(req.seed, 42);
}

#[test]
fn build_regenerate_request_sends_palette_and_locks() {
    let state = state_with(&["#111111", "#222222", "#333333"], &[2, 0], 9);
    let req = build_regenerate_request(&state, &style());
    assert_eq!(req.palette, state.colors);
    assert_eq!(req.locked_indices, vec![0, 2]);
    assert_eq!(req.seed, 9);
}

#[test]
fn build_expand_request_asks_for_one_more_color() {
    let state = state_with(&["#111111", "#222222"], &[], 3);
    let req = build_expand_request(&state, &style());
    assert_eq!(req.new_size, 3);
    assert_eq!(req.palette, state.colors);
}

// =============================================================
// Generate flow against a stubbed backend response
// =============================================================

#[test]
fn five_color_response_yields_five_unlocked_swatches_and_copy_all() {
    let mut state = state_with(&["#0A0A0A"], &[0], 1);
    let token = state.begin_request();

    // Stubbed backend: five colors back for num_colors=5.
    let response: Vec<String> = (1..=5).map(|i| format!("#{i}{i}{i}{i}{i}{i}")).collect();
    assert!(state.is_current(token));
    state.apply_generated(response);

    assert_eq!(state.colors.len(), 5);
    assert!(state.locked.is_empty(), "new generation must clear locks");
    let copy_all_enabled = !state.is_empty();
    assert!(copy_all_enabled);
}

#[test]
fn stale_generate_response_is_dropped() {
    let mut state = state_with(&["#0A0A0A"], &[], 1);
    let mut error = None;
    let stale = state.begin_request();
    let _fresh = state.begin_request();

    apply_outcome(&mut state, &mut error, stale, Ok(vec!["#FFFFFF".to_owned()]), false);
    assert_eq!(state.colors, vec!["#0A0A0A"], "stale response must not apply");
}

#[test]
fn stale_error_response_is_dropped() {
    let mut state = state_with(&["#0A0A0A"], &[], 1);
    let mut error = None;
    let stale = state.begin_request();
    let fresh = state.begin_request();

    apply_outcome(&mut state, &mut error, fresh, Ok(vec!["#FFFFFF".to_owned()]), false);
    apply_outcome(
        &mut state,
        &mut error,
        stale,
        Err("Failed to generate palette".to_owned()),
        false,
    );

    assert_eq!(state.colors, vec!["#FFFFFF"]);
    assert_eq!(error, None, "superseded failure must not surface an error");
}

#[test]
fn current_outcome_applies_palette_or_error() {
    let mut state = state_with(&["#0A0A0A"], &[0], 1);
    let mut error = None;

    let token = state.begin_request();
    apply_outcome(
        &mut state,
        &mut error,
        token,
        Ok(vec!["#111111".to_owned(), "#222222".to_owned()]),
        true,
    );
    assert_eq!(state.colors, vec!["#111111", "#222222"]);
    assert!(state.locked.contains(&0), "resample keeps locks");

    let token = state.begin_request();
    apply_outcome(&mut state, &mut error, token, Err("backend down".to_owned()), true);
    assert_eq!(error.as_deref(), Some("backend down"));
    assert_eq!(state.colors, vec!["#111111", "#222222"], "failure leaves palette alone");
}
