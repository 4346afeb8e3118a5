//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render swatch strips, project previews, and shared form
//! chrome; pages own the signals and pass plain props down.

pub mod error_panel;
pub mod preview_card;
pub mod swatch_strip;
