//! Settings for routemap.
//!
//! This module provides the [`Settings`] struct, which holds the knobs that
//! influence how route tables are built and how the library logs. Settings are
//! usually loaded through [`settings_loader`](crate::settings_loader).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The complete set of routemap settings.
///
/// # Examples
///
/// ```
/// use routemap_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert!(!settings.enable_loading_substates);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled. Selects pretty log output.
    pub debug: bool,

    // ── Route building ───────────────────────────────────────────────

    /// Whether every declared route also gets `<name>_loading` and
    /// `<name>_error` siblings.
    pub enable_loading_substates: bool,

    // ── Logging ──────────────────────────────────────────────────────

    /// The log level or filter directive (e.g. "info", "routemap=debug").
    pub log_level: String,

    // ── Escape hatch ─────────────────────────────────────────────────

    /// Custom settings that don't fit into the above categories.
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            enable_loading_substates: false,
            log_level: "info".to_string(),
            extra: HashMap::new(),
        }
    }
}
