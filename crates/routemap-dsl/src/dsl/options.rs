//! Per-declaration route options.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

/// A route serializer hook: turns a model plus the route's dynamic segment
/// names into URL params.
///
/// The builder never calls it; it only hands it to the router through the
/// configured [`SerializerRegistrar`](super::SerializerRegistrar).
pub type SerializeFn = Arc<dyn Fn(&Value, &[String]) -> Map<String, Value> + Send + Sync>;

/// Options accepted by [`RouteDsl::route`](super::RouteDsl::route) and friends.
///
/// `RouteOptions::default()` is the "no options" case: path derived from the
/// name, namespace inherited, reserved-name check on.
///
/// ```
/// use routemap_dsl::RouteOptions;
///
/// let opts = RouteOptions::new().path("/:post_id").reset_namespace(true);
/// assert_eq!(opts.path.as_deref(), Some("/:post_id"));
/// assert!(opts.reset_namespace);
/// ```
#[derive(Clone, Default)]
pub struct RouteOptions {
    /// Explicit URL path. Defaults to `/<name>`.
    pub path: Option<String>,
    /// Detach the route's name from the enclosing namespace.
    pub reset_namespace: bool,
    /// Allow a reserved identifier as the route name.
    pub override_name_assertion: bool,
    /// Serializer hook forwarded to the router.
    pub serialize: Option<SerializeFn>,
}

impl RouteOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the URL path.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets `reset_namespace`.
    #[must_use]
    pub const fn reset_namespace(mut self, reset: bool) -> Self {
        self.reset_namespace = reset;
        self
    }

    /// Sets `override_name_assertion`.
    #[must_use]
    pub const fn override_name_assertion(mut self, allow: bool) -> Self {
        self.override_name_assertion = allow;
        self
    }

    /// Attaches a serializer hook.
    #[must_use]
    pub fn serialize(mut self, serialize: SerializeFn) -> Self {
        self.serialize = Some(serialize);
        self
    }
}

impl fmt::Debug for RouteOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteOptions")
            .field("path", &self.path)
            .field("reset_namespace", &self.reset_namespace)
            .field("override_name_assertion", &self.override_name_assertion)
            .field("serialize", &self.serialize.is_some())
            .finish()
    }
}
