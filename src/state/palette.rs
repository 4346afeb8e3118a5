//! Working palette state for the generator page.
//!
//! DESIGN
//! ======
//! One struct owns the palette, the locked-index set, the current seed, and
//! a request generation counter. Generate/regenerate/expand bump the counter
//! before sending, and a response is applied only if its token is still
//! current; overlapping requests resolve as explicit last-issued-wins
//! instead of whichever response happens to land last.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use std::collections::BTreeSet;

/// Working palette, lock set, seed, and in-flight request token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaletteState {
    /// Ordered validated hex colors; order is display order.
    pub colors: Vec<String>,
    /// Indices excluded from resampling, relative to `colors`.
    pub locked: BTreeSet<usize>,
    /// Seed sent with the most recent request; re-rolled before every send.
    pub seed: u32,
    /// Generation counter for dropping stale responses.
    pub request_seq: u64,
}

impl PaletteState {
    /// Start a new backend request: re-roll the seed and bump the generation
    /// counter, returning the token the response must present.
    pub fn begin_request(&mut self) -> u64 {
        self.seed = roll_seed();
        self.request_seq += 1;
        self.request_seq
    }

    /// Whether a response with `token` is still the most recently issued
    /// request.
    pub fn is_current(&self, token: u64) -> bool {
        self.request_seq == token
    }

    /// Replace the palette with a brand-new generation, invalidating locks.
    pub fn apply_generated(&mut self, palette: Vec<String>) {
        self.colors = palette;
        self.locked.clear();
    }

    /// Replace the palette after regenerate/expand, preserving locks.
    ///
    /// The unchanged-locked-values invariant is a server contract; the
    /// response is applied verbatim.
    pub fn apply_resampled(&mut self, palette: Vec<String>) {
        self.colors = palette;
    }

    /// Flip lock membership for a palette position.
    pub fn toggle_lock(&mut self, index: usize) {
        if !self.locked.remove(&index) {
            self.locked.insert(index);
        }
    }

    /// Locked indices in ascending order, as sent on the wire.
    pub fn locked_indices(&self) -> Vec<usize> {
        self.locked.iter().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Roll a fresh random seed in `0..1_000_000`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn roll_seed() -> u32 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Math::random() * 1_000_000.0) as u32
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
