//! Deprecation notices.
//!
//! Deprecations are informational and never fail an operation. Each notice
//! carries a stable `id` and the version it is slated for removal in
//! (`until`), so tooling can filter or escalate them. Notices are always
//! logged as `tracing` warnings on the `routemap::deprecation` target and are
//! additionally handed to an optional [`DeprecationHandler`].

use std::fmt;
use std::sync::Arc;

use crate::checks::CheckMessage;

/// A callback that observes deprecation notices.
pub type DeprecationHandler = Arc<dyn Fn(&Deprecation) + Send + Sync>;

/// A single deprecation notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deprecation {
    /// Stable identifier, e.g. `routemap.dsl.resource`.
    pub id: String,
    /// The version in which the deprecated API is removed.
    pub until: String,
    /// Human-readable explanation, usually naming the replacement.
    pub message: String,
}

impl Deprecation {
    /// Creates a new deprecation notice.
    pub fn new(id: impl Into<String>, until: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            until: until.into(),
            message: message.into(),
        }
    }

    /// Converts the notice into a warning-level [`CheckMessage`].
    pub fn to_check_message(&self) -> CheckMessage {
        let hint = format!("This API will be removed in {}.", self.until);
        CheckMessage::warning(self.message.clone(), Some(hint.as_str()), None, Some(self.id.as_str()))
    }
}

impl fmt::Display for Deprecation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DEPRECATION: {} [deprecation id: {}] (until {})", self.message, self.id, self.until)
    }
}

/// Logs `deprecation` and forwards it to `handler`, if any.
pub fn report(deprecation: &Deprecation, handler: Option<&DeprecationHandler>) {
    tracing::warn!(
        target: "routemap::deprecation",
        id = %deprecation.id,
        until = %deprecation.until,
        "{}",
        deprecation.message
    );

    if let Some(handler) = handler {
        handler(deprecation);
    }
}
