//! Page-scoped application state.
//!
//! DESIGN
//! ======
//! Page state lives in explicit structs held in page-level signals rather
//! than module globals or values re-read from the rendered DOM, so handlers
//! take it as a parameter and tests can drive it directly.

pub mod archive;
pub mod palette;
pub mod project_form;
