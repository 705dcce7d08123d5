//! # routemap-core
//!
//! Foundation types for routemap. This crate has no knowledge of routes
//! themselves and is shared by every other crate in the workspace.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Library settings
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`logging`] - Tracing-based logging integration
//! - [`checks`] - Diagnostic check messages
//! - [`deprecation`] - Non-fatal deprecation notices

pub mod checks;
pub mod deprecation;
pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{RouteMapError, RouteMapResult};
pub use settings::Settings;
