//! Builder configuration shared by every scope of one route tree.
//!
//! A [`DslConfig`] is cloned unchanged from a scope into each child scope. Its
//! optional fields statically switch features on: with no registrar, route
//! serializers are simply never forwarded.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use routemap_core::deprecation::DeprecationHandler;
use routemap_core::Settings;

use super::options::SerializeFn;

/// Callback through which a router receives `(route name, serializer)` pairs.
pub type SerializerRegistrar = Arc<dyn Fn(&str, SerializeFn) + Send + Sync>;

/// Configuration for a [`RouteDsl`](super::RouteDsl) tree.
#[derive(Clone, Default)]
pub struct DslConfig {
    /// Auto-declare `<name>_loading` and `<name>_error` for every route.
    pub enable_loading_substates: bool,
    /// Receives serializer hooks from route options.
    pub serializer_registrar: Option<SerializerRegistrar>,
    /// Observes deprecation notices in addition to the tracing warning.
    pub on_deprecation: Option<DeprecationHandler>,
}

impl DslConfig {
    /// Creates the default configuration: no substates, no hooks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from loaded [`Settings`].
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            enable_loading_substates: settings.enable_loading_substates,
            ..Self::default()
        }
    }

    /// Turns loading/error substate injection on or off.
    #[must_use]
    pub const fn with_loading_substates(mut self, enabled: bool) -> Self {
        self.enable_loading_substates = enabled;
        self
    }

    /// Sets the serializer registrar.
    #[must_use]
    pub fn with_serializer_registrar(mut self, registrar: SerializerRegistrar) -> Self {
        self.serializer_registrar = Some(registrar);
        self
    }

    /// Sets the deprecation handler.
    #[must_use]
    pub fn with_deprecation_handler(mut self, handler: DeprecationHandler) -> Self {
        self.on_deprecation = Some(handler);
        self
    }
}

impl fmt::Debug for DslConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DslConfig")
            .field("enable_loading_substates", &self.enable_loading_substates)
            .field("serializer_registrar", &self.serializer_registrar.is_some())
            .field("on_deprecation", &self.on_deprecation.is_some())
            .finish()
    }
}

/// A ready-made `route name -> serializer` table for routers that just want
/// to look serializers up later.
///
/// ```
/// use std::sync::Arc;
/// use routemap_dsl::{DslConfig, RouteDsl, RouteOptions, SerializerTable};
///
/// let table = SerializerTable::new();
/// let config = DslConfig::new().with_serializer_registrar(table.registrar());
///
/// RouteDsl::map(config, |d| {
///     d.route(
///         "post",
///         RouteOptions::new().serialize(Arc::new(|_model: &serde_json::Value, _params: &[String]| serde_json::Map::new())),
///     )
/// })
/// .unwrap();
///
/// assert!(table.contains("post"));
/// ```
#[derive(Clone, Default)]
pub struct SerializerTable {
    methods: Arc<RwLock<HashMap<String, SerializeFn>>>,
}

impl SerializerTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a registrar that writes into this table.
    ///
    /// A later registration for the same name replaces the earlier one.
    pub fn registrar(&self) -> SerializerRegistrar {
        let methods = Arc::clone(&self.methods);
        Arc::new(move |name: &str, serialize: SerializeFn| {
            methods
                .write()
                .expect("serializer table lock poisoned")
                .insert(name.to_string(), serialize);
        })
    }

    /// Returns the serializer registered for `name`.
    pub fn get(&self, name: &str) -> Option<SerializeFn> {
        self.methods
            .read()
            .expect("serializer table lock poisoned")
            .get(name)
            .cloned()
    }

    /// Returns `true` if a serializer is registered for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.methods
            .read()
            .expect("serializer table lock poisoned")
            .contains_key(name)
    }

    /// Returns the registered route names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .methods
            .read()
            .expect("serializer table lock poisoned")
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Returns the number of registered serializers.
    pub fn len(&self) -> usize {
        self.methods.read().expect("serializer table lock poisoned").len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for SerializerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializerTable")
            .field("names", &self.names())
            .finish()
    }
}
