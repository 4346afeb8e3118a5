//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped signals and orchestration and delegates
//! rendering details to `components`; pages do not depend on one another.

pub mod accessibility;
pub mod archive_edit;
pub mod background_removal;
pub mod create_project;
pub mod home;
pub mod palette;
pub mod svg_converter;
