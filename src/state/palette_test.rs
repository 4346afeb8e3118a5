use super::*;

fn palette(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|c| (*c).to_owned()).collect()
}

// =============================================================
// Lock toggling
// =============================================================

#[test]
fn toggle_lock_adds_then_removes() {
    let mut state = PaletteState::default();
    state.apply_generated(palette(&["#111111", "#222222"]));

    state.toggle_lock(1);
    assert_eq!(state.locked_indices(), vec![1]);

    state.toggle_lock(1);
    assert!(state.locked_indices().is_empty());
}

#[test]
fn toggle_lock_is_involutive_with_other_locks_held() {
    let mut state = PaletteState::default();
    state.apply_generated(palette(&["#111111", "#222222", "#333333"]));
    state.toggle_lock(0);
    state.toggle_lock(2);
    let before = state.locked.clone();

    state.toggle_lock(1);
    state.toggle_lock(1);
    assert_eq!(state.locked, before);
}

#[test]
fn locked_indices_are_sorted_ascending() {
    let mut state = PaletteState::default();
    state.toggle_lock(4);
    state.toggle_lock(0);
    state.toggle_lock(2);
    assert_eq!(state.locked_indices(), vec![0, 2, 4]);
}

// =============================================================
// Palette replacement
// =============================================================

#[test]
fn apply_generated_replaces_colors_and_clears_locks() {
    let mut state = PaletteState::default();
    state.apply_generated(palette(&["#111111", "#222222"]));
    state.toggle_lock(0);
    state.toggle_lock(1);

    state.apply_generated(palette(&["#AAAAAA", "#BBBBBB", "#CCCCCC"]));
    assert_eq!(state.colors, palette(&["#AAAAAA", "#BBBBBB", "#CCCCCC"]));
    assert!(state.locked.is_empty());
}

#[test]
fn apply_resampled_preserves_locks() {
    let mut state = PaletteState::default();
    state.apply_generated(palette(&["#111111", "#222222"]));
    state.toggle_lock(0);

    state.apply_resampled(palette(&["#111111", "#999999"]));
    assert_eq!(state.colors, palette(&["#111111", "#999999"]));
    assert_eq!(state.locked_indices(), vec![0]);
}

#[test]
fn default_state_is_empty() {
    let state = PaletteState::default();
    assert!(state.is_empty());
    assert!(state.locked.is_empty());
    assert_eq!(state.request_seq, 0);
}

// =============================================================
// Request generation tokens
// =============================================================

#[test]
fn begin_request_bumps_generation_counter() {
    let mut state = PaletteState::default();
    let first = state.begin_request();
    let second = state.begin_request();
    assert_eq!(first + 1, second);
    assert_eq!(state.request_seq, second);
}

#[test]
fn stale_token_is_not_current() {
    let mut state = PaletteState::default();
    let stale = state.begin_request();
    let fresh = state.begin_request();
    assert!(!state.is_current(stale));
    assert!(state.is_current(fresh));
}
