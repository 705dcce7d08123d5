//! Core error types for routemap.
//!
//! This module provides the error enum [`RouteMapError`]. Route declarations
//! only ever fail with [`RouteMapError::InvalidRouteName`]; the remaining
//! variants cover settings loading and route map serialization.

use thiserror::Error;

/// The primary error type for routemap.
///
/// Deprecation notices are not errors and never appear here; see
/// [`crate::deprecation`] for that channel.
#[derive(Error, Debug)]
pub enum RouteMapError {
    // ── Declaration ──────────────────────────────────────────────────

    /// A reserved identifier was used as a route name without an override.
    #[error("'{0}' cannot be used as a route name.")]
    InvalidRouteName(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RouteMapError {
    /// Returns a short, stable identifier for the error category.
    ///
    /// - `InvalidRouteName` -> `"invalid_route_name"`
    /// - `ConfigurationError` -> `"configuration"`
    /// - `SerializationError` -> `"serialization"`
    /// - `IoError` -> `"io"`
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRouteName(_) => "invalid_route_name",
            Self::ConfigurationError(_) => "configuration",
            Self::SerializationError(_) => "serialization",
            Self::IoError(_) => "io",
        }
    }
}

impl From<serde_json::Error> for RouteMapError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// A convenience type alias for `Result<T, RouteMapError>`.
pub type RouteMapResult<T> = Result<T, RouteMapError>;
