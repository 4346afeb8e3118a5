//! Networking modules for the HueVault HTTP backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the JSON and multipart calls, `types` defines the shared
//! wire schema. All computation (color science, image processing,
//! persistence) lives behind these endpoints.

pub mod api;
pub mod types;
