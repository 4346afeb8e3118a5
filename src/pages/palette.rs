//! Palette generator page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives the working palette: generate replaces it wholesale and clears
//! locks, regenerate resamples unlocked positions, expand grows it by one.
//! Overlapping requests resolve by generation token; only the response for
//! the most recently issued request is applied.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use leptos::prelude::*;

use crate::components::error_panel::ErrorPanel;
use crate::net::types::{ExpandRequest, GenerateRequest, RegenerateRequest};
use crate::state::palette::PaletteState;
use crate::util::clipboard;
use crate::util::color::normalize_hex;

/// Style adjectives offered as checkboxes.
const ADJECTIVES: [&str; 8] = [
    "bold", "calm", "earthy", "energetic", "minimal", "natural", "vibrant", "warm",
];

/// Format a 0..1 slider value for its adjacent label.
fn format_slider(raw: &str) -> String {
    format!("{:.2}", parse_slider(raw))
}

/// Parse a slider value, defaulting to the midpoint on garbage.
fn parse_slider(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.5)
}

/// Parse the number-of-colors field, clamping to at least one color.
fn parse_num_colors(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => 5,
    }
}

/// Collect valid manual color entries, uppercased; invalid ones are skipped.
fn collect_manual_colors(inputs: &[String]) -> Vec<String> {
    inputs.iter().filter_map(|value| normalize_hex(value)).collect()
}

/// Style parameters shared by all three palette requests.
#[derive(Clone, Debug, PartialEq)]
struct StyleParams {
    formal_playful: f64,
    modern_classic: f64,
    adjectives: Vec<String>,
}

fn build_generate_request(
    num_colors: u32,
    style: &StyleParams,
    manual_colors: Vec<String>,
    seed: u32,
) -> GenerateRequest {
    GenerateRequest {
        num_colors,
        formal_playful: style.formal_playful,
        modern_classic: style.modern_classic,
        adjectives: style.adjectives.clone(),
        manual_colors,
        seed,
    }
}

fn build_regenerate_request(state: &PaletteState, style: &StyleParams) -> RegenerateRequest {
    RegenerateRequest {
        palette: state.colors.clone(),
        locked_indices: state.locked_indices(),
        formal_playful: style.formal_playful,
        modern_classic: style.modern_classic,
        adjectives: style.adjectives.clone(),
        seed: state.seed,
    }
}

fn build_expand_request(state: &PaletteState, style: &StyleParams) -> ExpandRequest {
    ExpandRequest {
        palette: state.colors.clone(),
        new_size: state.colors.len() + 1,
        formal_playful: style.formal_playful,
        modern_classic: style.modern_classic,
        adjectives: style.adjectives.clone(),
        seed: state.seed,
    }
}

/// Apply a finished palette request to the page state.
///
/// Outcomes whose request has been superseded are ignored entirely; a stale
/// failure must not surface an error next to a fresher palette. Locks
/// survive resampling outcomes only.
fn apply_outcome(
    state: &mut PaletteState,
    error: &mut Option<String>,
    token: u64,
    outcome: Result<Vec<String>, String>,
    keep_locks: bool,
) {
    if !state.is_current(token) {
        return;
    }
    match outcome {
        Ok(palette) if keep_locks => state.apply_resampled(palette),
        Ok(palette) => state.apply_generated(palette),
        // Prior palette and locks stay untouched on failure.
        Err(message) => *error = Some(message),
    }
}

#[component]
pub fn PaletteGeneratorPage() -> impl IntoView {
    let state = RwSignal::new(PaletteState::default());
    let num_colors = RwSignal::new("5".to_owned());
    let formal_playful = RwSignal::new("0.5".to_owned());
    let modern_classic = RwSignal::new("0.5".to_owned());
    let adjectives = RwSignal::new(Vec::<String>::new());
    let manual_inputs = RwSignal::new(Vec::<String>::new());
    let error = RwSignal::new(None::<String>);

    let style_params = move || StyleParams {
        formal_playful: parse_slider(&formal_playful.get_untracked()),
        modern_classic: parse_slider(&modern_classic.get_untracked()),
        adjectives: adjectives.get_untracked(),
    };

    let on_generate = move |_| {
        error.set(None);
        let mut token = 0;
        let mut seed = 0;
        state.update(|s| {
            token = s.begin_request();
            seed = s.seed;
        });
        let request = build_generate_request(
            parse_num_colors(&num_colors.get_untracked()),
            &style_params(),
            collect_manual_colors(&manual_inputs.get_untracked()),
            seed,
        );
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::generate_palette(&request).await;
            state.update(|s| error.update(|e| apply_outcome(s, e, token, outcome, false)));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, token);
        }
    };

    let on_regenerate = move |_| {
        if state.get_untracked().is_empty() {
            return;
        }
        error.set(None);
        let mut token = 0;
        state.update(|s| token = s.begin_request());
        let request = build_regenerate_request(&state.get_untracked(), &style_params());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::regenerate_palette(&request).await;
            state.update(|s| error.update(|e| apply_outcome(s, e, token, outcome, true)));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, token);
        }
    };

    let on_expand = move |_| {
        if state.get_untracked().is_empty() {
            return;
        }
        error.set(None);
        let mut token = 0;
        state.update(|s| token = s.begin_request());
        let request = build_expand_request(&state.get_untracked(), &style_params());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::expand_palette(&request).await;
            state.update(|s| error.update(|e| apply_outcome(s, e, token, outcome, true)));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, token);
        }
    };

    let on_copy_all = move |_| {
        let palette = state.get_untracked().colors;
        if palette.is_empty() {
            return;
        }
        clipboard::copy_text(&clipboard::copy_all_text(&palette));
    };

    let toggle_adjective = move |adjective: &'static str| {
        adjectives.update(|list| {
            if let Some(pos) = list.iter().position(|a| a == adjective) {
                list.remove(pos);
            } else {
                list.push(adjective.to_owned());
            }
        });
    };

    view! {
        <div class="palette-page">
            <h1>"Palette Generator"</h1>

            <div class="palette-controls">
                <label class="tool-form__label">
                    "Number of colors"
                    <input
                        id="num-colors"
                        type="number"
                        min="1"
                        max="12"
                        prop:value=move || num_colors.get()
                        on:input=move |ev| num_colors.set(event_target_value(&ev))
                    />
                </label>

                <label class="tool-form__label">
                    "Formal ↔ Playful"
                    <input
                        id="formal-playful"
                        type="range"
                        min="0"
                        max="1"
                        step="0.01"
                        prop:value=move || formal_playful.get()
                        on:input=move |ev| formal_playful.set(event_target_value(&ev))
                    />
                    <span class="slider-value">{move || format_slider(&formal_playful.get())}</span>
                </label>

                <label class="tool-form__label">
                    "Modern ↔ Classic"
                    <input
                        id="modern-classic"
                        type="range"
                        min="0"
                        max="1"
                        step="0.01"
                        prop:value=move || modern_classic.get()
                        on:input=move |ev| modern_classic.set(event_target_value(&ev))
                    />
                    <span class="slider-value">{move || format_slider(&modern_classic.get())}</span>
                </label>

                <fieldset class="adjective-checkboxes">
                    <legend>"Adjectives"</legend>
                    {ADJECTIVES
                        .into_iter()
                        .map(|adjective| {
                            view! {
                                <label class="adjective-option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            adjectives.get().iter().any(|a| a == adjective)
                                        }
                                        on:change=move |_| toggle_adjective(adjective)
                                    />
                                    {adjective}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </fieldset>

                <div class="manual-colors">
                    <span>"Starting colors"</span>
                    {move || {
                        manual_inputs
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(i, value)| {
                                view! {
                                    <input
                                        class="color-input"
                                        type="text"
                                        placeholder="#FFFFFF"
                                        prop:value=value
                                        on:input=move |ev| {
                                            let entered = event_target_value(&ev);
                                            manual_inputs.update(|inputs| {
                                                if let Some(slot) = inputs.get_mut(i) {
                                                    *slot = entered;
                                                }
                                            });
                                        }
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    <button
                        class="btn"
                        on:click=move |_| manual_inputs.update(|inputs| inputs.push(String::new()))
                    >
                        "+ Add color"
                    </button>
                </div>

                <div class="palette-actions">
                    <button class="btn btn--primary" on:click=on_generate>
                        "Generate"
                    </button>
                    <button
                        class="btn"
                        disabled=move || state.get().is_empty()
                        on:click=on_regenerate
                    >
                        "Regenerate Unlocked"
                    </button>
                    <button class="btn" disabled=move || state.get().is_empty() on:click=on_expand>
                        "Expand"
                    </button>
                    <button
                        class="btn"
                        disabled=move || state.get().is_empty()
                        on:click=on_copy_all
                        title="Copy all hex codes"
                    >
                        "Copy All"
                    </button>
                </div>
            </div>

            <ErrorPanel message=error/>

            <div class="palette-colors">
                {move || {
                    let current = state.get();
                    current
                        .colors
                        .iter()
                        .enumerate()
                        .map(|(index, color)| {
                            let color = color.clone();
                            let locked = current.locked.contains(&index);
                            let swatch_style = format!("background-color: {color};");
                            let copy_color = color.clone();
                            view! {
                                <div class="color-item">
                                    <div class="color-swatch" style=swatch_style></div>
                                    <div class="color-info">
                                        <span class="color-hex">{color.clone()}</span>
                                        <div class="color-actions">
                                            <button
                                                class="lock-btn"
                                                class:locked=locked
                                                title=if locked { "Unlock" } else { "Lock" }
                                                on:click=move |_| {
                                                    state.update(|s| s.toggle_lock(index));
                                                }
                                            >
                                                {if locked { "🔒" } else { "🔓" }}
                                            </button>
                                            <button
                                                class="copy-btn"
                                                title="Copy hex"
                                                on:click=move |_| clipboard::copy_text(&copy_color)
                                            >
                                                "📋"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
