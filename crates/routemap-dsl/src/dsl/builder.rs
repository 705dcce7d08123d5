//! The route-table builder.
//!
//! A [`RouteDsl`] is one namespace scope. Routes declared on it are appended
//! to its record list in order; a route declared with a closure gets its own
//! child scope, whose finalized [`RouteMap`] becomes that route's children.
//!
//! Name qualification is the one rule every declaration goes through: inside a
//! scope whose parent is `posts`, a route `new` is named `posts.new` unless it
//! asks for `reset_namespace`. The root scope, and any scope directly under a
//! route literally named `application`, never prefixes.

use routemap_core::deprecation::{self, Deprecation};
use routemap_core::logging::scope_span;
use routemap_core::{RouteMapError, RouteMapResult};

use super::config::DslConfig;
use super::options::RouteOptions;
use super::record::{RouteMap, RoutePath, RouteRecord};

/// Names that cannot be used for routes without `override_name_assertion`.
pub const RESERVED_ROUTE_NAMES: [&str; 4] = ["array", "basic", "object", "application"];

/// Parent name whose scope does not prefix child names.
const ROOT_NAMESPACE: &str = "application";

/// Deprecation id reported by the `resource*` family.
pub const RESOURCE_DEPRECATION_ID: &str = "routemap.dsl.resource";

const RESOURCE_DEPRECATION_UNTIL: &str = "3.0.0";

/// One namespace scope of a route tree under construction.
///
/// # Examples
///
/// ```
/// use routemap_dsl::{RouteDsl, RouteOptions, RoutePath};
///
/// let map = RouteDsl::map_default(|d| {
///     d.nest("posts", |d| {
///         d.route("new", RouteOptions::default())?;
///         d.route("post", RouteOptions::new().path("/:post_id"))
///     })
/// })
/// .unwrap()
/// .generate()
/// .unwrap();
///
/// let posts = map.find("posts").unwrap();
/// assert_eq!(posts.path, RoutePath::url("/posts"));
/// assert_eq!(
///     posts.children.as_ref().unwrap().names(),
///     vec!["posts.loading", "posts.error", "posts.new", "posts.post", "posts.index"]
/// );
/// ```
#[derive(Debug)]
pub struct RouteDsl {
    parent: Option<String>,
    config: DslConfig,
    matches: Vec<RouteRecord>,
    explicit_index: bool,
}

impl RouteDsl {
    /// Creates an empty scope under `parent`.
    pub fn new(parent: Option<&str>, config: DslConfig) -> Self {
        Self {
            parent: parent.map(String::from),
            config,
            matches: Vec::new(),
            explicit_index: false,
        }
    }

    /// Creates the root scope and lets `f` declare routes on it.
    ///
    /// The returned scope still has to be [`generate`](Self::generate)d.
    pub fn map<F>(config: DslConfig, f: F) -> RouteMapResult<Self>
    where
        F: FnOnce(&mut Self) -> RouteMapResult<()>,
    {
        let mut dsl = Self::new(None, config);
        f(&mut dsl)?;
        Ok(dsl)
    }

    /// [`map`](Self::map) with the default configuration.
    pub fn map_default<F>(f: F) -> RouteMapResult<Self>
    where
        F: FnOnce(&mut Self) -> RouteMapResult<()>,
    {
        Self::map(DslConfig::default(), f)
    }

    /// The namespace prefix of this scope, `None` at the root.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// The configuration shared with child scopes.
    pub const fn config(&self) -> &DslConfig {
        &self.config
    }

    /// Records pushed so far, in order.
    pub fn matches(&self) -> &[RouteRecord] {
        &self.matches
    }

    /// Whether an index-like route has been pushed.
    pub const fn has_explicit_index(&self) -> bool {
        self.explicit_index
    }

    /// Whether names declared here get the parent as prefix.
    pub fn can_nest(&self) -> bool {
        self.parent
            .as_deref()
            .is_some_and(|parent| parent != ROOT_NAMESPACE)
    }

    /// Computes the fully-qualified name of `local` in this scope.
    pub fn qualify(&self, local: &str, reset_namespace: bool) -> String {
        match self.parent.as_deref() {
            Some(parent) if self.can_nest() && !reset_namespace => format!("{parent}.{local}"),
            _ => local.to_string(),
        }
    }

    /// Declares a route without children.
    pub fn route(&mut self, name: &str, options: RouteOptions) -> RouteMapResult<()> {
        self.declare(name, options, None::<fn(&mut Self) -> RouteMapResult<()>>)
    }

    /// Declares a route whose children are declared by `f` on a child scope.
    pub fn route_with<F>(&mut self, name: &str, options: RouteOptions, f: F) -> RouteMapResult<()>
    where
        F: FnOnce(&mut Self) -> RouteMapResult<()>,
    {
        self.declare(name, options, Some(f))
    }

    /// [`route_with`](Self::route_with) with default options.
    pub fn nest<F>(&mut self, name: &str, f: F) -> RouteMapResult<()>
    where
        F: FnOnce(&mut Self) -> RouteMapResult<()>,
    {
        self.route_with(name, RouteOptions::default(), f)
    }

    /// Deprecated form of [`route`](Self::route) that always resets the namespace.
    pub fn resource(&mut self, name: &str, options: RouteOptions) -> RouteMapResult<()> {
        let options = self.deprecate_resource(options);
        self.route(name, options)
    }

    /// Deprecated form of [`route_with`](Self::route_with) that always resets
    /// the namespace.
    pub fn resource_with<F>(&mut self, name: &str, options: RouteOptions, f: F) -> RouteMapResult<()>
    where
        F: FnOnce(&mut Self) -> RouteMapResult<()>,
    {
        let options = self.deprecate_resource(options);
        self.route_with(name, options, f)
    }

    /// Deprecated form of [`nest`](Self::nest) that always resets the namespace.
    pub fn resource_nest<F>(&mut self, name: &str, f: F) -> RouteMapResult<()>
    where
        F: FnOnce(&mut Self) -> RouteMapResult<()>,
    {
        self.resource_with(name, RouteOptions::default(), f)
    }

    /// Appends a record as-is.
    ///
    /// A record with path `""` or `"/"`, or whose last dotted name segment is
    /// `index`, counts as this scope's explicit index.
    pub fn push(&mut self, path: RoutePath, name: impl Into<String>, children: Option<RouteMap>) {
        let name = name.into();
        if path.is_index() || name.rsplit('.').next() == Some("index") {
            self.explicit_index = true;
        }
        self.matches.push(RouteRecord {
            path,
            name,
            children,
        });
    }

    /// Finalizes the scope.
    ///
    /// Without an explicit index, an `index` route with path `/` is declared
    /// first, with the same substate treatment as any other route.
    pub fn generate(mut self) -> RouteMapResult<RouteMap> {
        if !self.explicit_index {
            tracing::debug!(
                namespace = self.parent.as_deref().unwrap_or(""),
                "adding implicit index route"
            );
            self.route("index", RouteOptions::new().path("/"))?;
        }
        Ok(RouteMap::from_records(self.matches))
    }

    fn declare<F>(&mut self, name: &str, mut options: RouteOptions, nested: Option<F>) -> RouteMapResult<()>
    where
        F: FnOnce(&mut Self) -> RouteMapResult<()>,
    {
        if !options.override_name_assertion && RESERVED_ROUTE_NAMES.contains(&name) {
            return Err(RouteMapError::InvalidRouteName(name.to_string()));
        }

        tracing::trace!(
            route = name,
            namespace = self.parent.as_deref().unwrap_or(""),
            nested = nested.is_some(),
            "declaring route"
        );

        if self.config.enable_loading_substates {
            self.create_route(&format!("{name}_loading"), None, options.reset_namespace, None);
            self.create_route(
                &format!("{name}_error"),
                Some(RoutePath::error_sentinel(name)),
                false,
                None,
            );
        }

        if let (Some(registrar), Some(serialize)) =
            (&self.config.serializer_registrar, options.serialize.take())
        {
            registrar(name, serialize);
        }

        let path = options.path.take().map(RoutePath::Url);
        let children = match nested {
            Some(f) => Some(self.build_child(name, options.reset_namespace, f)?),
            None => None,
        };

        self.create_route(name, path, options.reset_namespace, children);
        Ok(())
    }

    fn build_child<F>(&self, name: &str, reset_namespace: bool, f: F) -> RouteMapResult<RouteMap>
    where
        F: FnOnce(&mut Self) -> RouteMapResult<()>,
    {
        let full_name = self.qualify(name, reset_namespace);
        let span = scope_span(&full_name);
        let _guard = span.enter();

        let mut child = Self::new(Some(&full_name), self.config.clone());
        child.create_route("loading", None, false, None);
        child.create_route("error", Some(RoutePath::error_sentinel(name)), false, None);

        f(&mut child)?;
        child.generate()
    }

    fn create_route(
        &mut self,
        name: &str,
        path: Option<RoutePath>,
        reset_namespace: bool,
        children: Option<RouteMap>,
    ) {
        let full_name = self.qualify(name, reset_namespace);
        let path = path.unwrap_or_else(|| RoutePath::Url(format!("/{name}")));
        self.push(path, full_name, children);
    }

    fn deprecate_resource(&self, options: RouteOptions) -> RouteOptions {
        let notice = Deprecation::new(
            RESOURCE_DEPRECATION_ID,
            RESOURCE_DEPRECATION_UNTIL,
            "resource() is deprecated. Use route(name, RouteOptions::new().reset_namespace(true)) \
             or route_with(..) instead.",
        );
        deprecation::report(&notice, self.config.on_deprecation.as_ref());
        options.reset_namespace(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::{Map, Value};

    use super::*;
    use crate::dsl::SerializerTable;

    fn names(records: &[RouteRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    fn noop_serializer() -> crate::dsl::SerializeFn {
        Arc::new(|_model: &Value, _params: &[String]| Map::new())
    }

    // ── Qualification ───────────────────────────────────────────────

    #[test]
    fn test_qualify_at_root() {
        let dsl = RouteDsl::new(None, DslConfig::default());
        assert!(!dsl.can_nest());
        assert_eq!(dsl.qualify("posts", false), "posts");
        assert_eq!(dsl.qualify("posts", true), "posts");
    }

    #[test]
    fn test_qualify_nested() {
        let dsl = RouteDsl::new(Some("posts.comments"), DslConfig::default());
        assert!(dsl.can_nest());
        assert_eq!(dsl.qualify("new", false), "posts.comments.new");
        assert_eq!(dsl.qualify("new", true), "new");
    }

    #[test]
    fn test_qualify_under_application() {
        let dsl = RouteDsl::new(Some("application"), DslConfig::default());
        assert!(!dsl.can_nest());
        assert_eq!(dsl.qualify("about", false), "about");
    }

    // ── push / explicit index ───────────────────────────────────────

    #[test]
    fn test_push_tracks_explicit_index() {
        let mut dsl = RouteDsl::new(None, DslConfig::default());
        dsl.push(RoutePath::url("/about"), "about", None);
        assert!(!dsl.has_explicit_index());

        dsl.push(RoutePath::url(""), "home", None);
        assert!(dsl.has_explicit_index());
    }

    #[test]
    fn test_push_index_by_name() {
        let mut dsl = RouteDsl::new(Some("posts"), DslConfig::default());
        dsl.push(RoutePath::url("/list"), "posts.index", None);
        assert!(dsl.has_explicit_index());
    }

    #[test]
    fn test_push_sentinel_is_not_index() {
        let mut dsl = RouteDsl::new(None, DslConfig::default());
        dsl.push(RoutePath::error_sentinel(""), "oops", None);
        dsl.push(RoutePath::url("/reindex"), "reindex", None);
        assert!(!dsl.has_explicit_index());
    }

    // ── route ───────────────────────────────────────────────────────

    #[test]
    fn test_route_default_path() {
        let mut dsl = RouteDsl::new(None, DslConfig::default());
        dsl.route("about", RouteOptions::default()).unwrap();

        assert_eq!(dsl.matches().len(), 1);
        let record = &dsl.matches()[0];
        assert_eq!(record.path, RoutePath::url("/about"));
        assert_eq!(record.name, "about");
        assert!(record.children.is_none());
    }

    #[test]
    fn test_route_explicit_path() {
        let mut dsl = RouteDsl::new(Some("posts"), DslConfig::default());
        dsl.route("post", RouteOptions::new().path("/:post_id")).unwrap();
        assert_eq!(dsl.matches()[0].path, RoutePath::url("/:post_id"));
        assert_eq!(dsl.matches()[0].name, "posts.post");
    }

    #[test]
    fn test_route_reserved_names_rejected() {
        for reserved in RESERVED_ROUTE_NAMES {
            let mut dsl = RouteDsl::new(None, DslConfig::default());
            let err = dsl.route(reserved, RouteOptions::default()).unwrap_err();
            assert!(matches!(err, RouteMapError::InvalidRouteName(ref n) if n == reserved));
            assert!(dsl.matches().is_empty());
        }
    }

    #[test]
    fn test_route_reserved_name_override() {
        let mut dsl = RouteDsl::new(None, DslConfig::default());
        dsl.route("application", RouteOptions::new().override_name_assertion(true))
            .unwrap();
        assert_eq!(dsl.matches()[0].name, "application");
    }

    #[test]
    fn test_reserved_check_is_exact() {
        let mut dsl = RouteDsl::new(None, DslConfig::default());
        dsl.route("applications", RouteOptions::default()).unwrap();
        dsl.route("Object", RouteOptions::default()).unwrap();
        assert_eq!(names(dsl.matches()), vec!["applications", "Object"]);
    }

    // ── Substates ───────────────────────────────────────────────────

    #[test]
    fn test_substates_order() {
        let config = DslConfig::new().with_loading_substates(true);
        let mut dsl = RouteDsl::new(None, config);
        dsl.route("a", RouteOptions::default()).unwrap();

        assert_eq!(names(dsl.matches()), vec!["a_loading", "a_error", "a"]);
        assert_eq!(dsl.matches()[0].path, RoutePath::url("/a_loading"));
        assert_eq!(dsl.matches()[1].path, RoutePath::error_sentinel("a"));
    }

    #[test]
    fn test_substates_reset_namespace() {
        let config = DslConfig::new().with_loading_substates(true);
        let mut dsl = RouteDsl::new(Some("posts"), config);
        dsl.route("b", RouteOptions::new().reset_namespace(true)).unwrap();

        // `_loading` follows the route, `_error` stays namespaced.
        assert_eq!(names(dsl.matches()), vec!["b_loading", "posts.b_error", "b"]);
    }

    #[test]
    fn test_substates_skip_reserved_check_on_siblings() {
        let config = DslConfig::new().with_loading_substates(true);
        let mut dsl = RouteDsl::new(None, config);
        let err = dsl.route("object", RouteOptions::default()).unwrap_err();
        assert_eq!(err.kind(), "invalid_route_name");
        assert!(dsl.matches().is_empty());
    }

    // ── Nesting ─────────────────────────────────────────────────────

    #[test]
    fn test_nested_children() {
        let mut dsl = RouteDsl::new(None, DslConfig::default());
        dsl.nest("a", |d| d.route("b", RouteOptions::default())).unwrap();

        let record = &dsl.matches()[0];
        assert_eq!(record.name, "a");
        assert_eq!(record.path, RoutePath::url("/a"));

        let children = record.children.as_ref().unwrap();
        assert_eq!(
            children.names(),
            vec!["a.loading", "a.error", "a.b", "a.index"]
        );
        assert_eq!(children.get(0).unwrap().path, RoutePath::url("/loading"));
        assert_eq!(children.get(1).unwrap().path, RoutePath::error_sentinel("a"));
        assert_eq!(children.get(2).unwrap().path, RoutePath::url("/b"));
        assert_eq!(children.get(3).unwrap().path, RoutePath::url("/"));
    }

    #[test]
    fn test_nested_reset_namespace_child() {
        let mut dsl = RouteDsl::new(None, DslConfig::default());
        dsl.nest("a", |d| d.route("b", RouteOptions::new().reset_namespace(true)))
            .unwrap();

        let children = dsl.matches()[0].children.as_ref().unwrap();
        assert!(children.names().contains(&"b"));
        assert!(!children.names().contains(&"a.b"));
    }

    #[test]
    fn test_nested_reset_namespace_parent() {
        let mut dsl = RouteDsl::new(Some("admin"), DslConfig::default());
        dsl.route_with("users", RouteOptions::new().reset_namespace(true), |d| {
            d.route("edit", RouteOptions::default())
        })
        .unwrap();

        let record = &dsl.matches()[0];
        assert_eq!(record.name, "users");
        let children = record.children.as_ref().unwrap();
        assert_eq!(
            children.names(),
            vec!["users.loading", "users.error", "users.edit", "users.index"]
        );
    }

    #[test]
    fn test_nested_under_application_does_not_prefix() {
        let mut dsl = RouteDsl::new(None, DslConfig::default());
        dsl.route_with(
            "application",
            RouteOptions::new().override_name_assertion(true),
            |d| d.route("about", RouteOptions::default()),
        )
        .unwrap();

        let children = dsl.matches()[0].children.as_ref().unwrap();
        assert_eq!(children.names(), vec!["loading", "error", "about", "index"]);
    }

    #[test]
    fn test_nested_error_propagates() {
        let mut dsl = RouteDsl::new(None, DslConfig::default());
        let err = dsl
            .nest("a", |d| {
                d.route("fine", RouteOptions::default())?;
                d.route("basic", RouteOptions::default())
            })
            .unwrap_err();
        assert!(matches!(err, RouteMapError::InvalidRouteName(ref n) if n == "basic"));
        assert!(dsl.matches().is_empty());
    }

    #[test]
    fn test_nested_explicit_index_suppresses_synthetic() {
        let mut dsl = RouteDsl::new(None, DslConfig::default());
        dsl.nest("posts", |d| d.route("list", RouteOptions::new().path("/")))
            .unwrap();

        let children = dsl.matches()[0].children.as_ref().unwrap();
        assert_eq!(
            children.names(),
            vec!["posts.loading", "posts.error", "posts.list"]
        );
    }

    // ── generate ────────────────────────────────────────────────────

    #[test]
    fn test_generate_adds_index_at_root() {
        let mut dsl = RouteDsl::new(None, DslConfig::default());
        dsl.route("about", RouteOptions::default()).unwrap();
        let map = dsl.generate().unwrap();

        assert_eq!(map.names(), vec!["about", "index"]);
        assert_eq!(map.get(1).unwrap().path, RoutePath::url("/"));
    }

    #[test]
    fn test_generate_empty_scope() {
        let map = RouteDsl::new(None, DslConfig::default()).generate().unwrap();
        assert_eq!(map.names(), vec!["index"]);
    }

    #[test]
    fn test_generate_respects_explicit_index_name() {
        let mut dsl = RouteDsl::new(None, DslConfig::default());
        dsl.route("index", RouteOptions::new().path("/home")).unwrap();
        let map = dsl.generate().unwrap();
        assert_eq!(map.names(), vec!["index"]);
    }

    #[test]
    fn test_generate_index_with_substates() {
        let config = DslConfig::new().with_loading_substates(true);
        let map = RouteDsl::new(None, config).generate().unwrap();
        assert_eq!(map.names(), vec!["index_loading", "index_error", "index"]);
    }

    // ── Serializer hook ─────────────────────────────────────────────

    #[test]
    fn test_serializer_registered_under_local_name() {
        let table = SerializerTable::new();
        let config = DslConfig::new().with_serializer_registrar(table.registrar());
        let mut dsl = RouteDsl::new(Some("posts"), config);

        dsl.route("post", RouteOptions::new().serialize(noop_serializer()))
            .unwrap();

        assert!(table.contains("post"));
        assert!(!table.contains("posts.post"));
        assert_eq!(dsl.matches()[0].name, "posts.post");
    }

    #[test]
    fn test_serializer_ignored_without_registrar() {
        let mut dsl = RouteDsl::new(None, DslConfig::default());
        dsl.route("post", RouteOptions::new().serialize(noop_serializer()))
            .unwrap();
        assert_eq!(names(dsl.matches()), vec!["post"]);
    }

    // ── resource ────────────────────────────────────────────────────

    #[test]
    fn test_resource_resets_namespace_and_reports() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        let config = DslConfig::new().with_deprecation_handler(Arc::new(move |d: &Deprecation| {
            seen_clone.lock().unwrap().push((d.id.clone(), d.until.clone()));
        }));

        let mut dsl = RouteDsl::new(Some("posts"), config);
        dsl.resource("comments", RouteOptions::default()).unwrap();

        assert_eq!(dsl.matches()[0].name, "comments");
        assert_eq!(
            *seen.lock().unwrap(),
            vec![(RESOURCE_DEPRECATION_ID.to_string(), "3.0.0".to_string())]
        );
    }

    #[test]
    fn test_resource_nest() {
        let mut dsl = RouteDsl::new(Some("posts"), DslConfig::default());
        dsl.resource_nest("comments", |d| d.route("new", RouteOptions::default()))
            .unwrap();

        let record = &dsl.matches()[0];
        assert_eq!(record.name, "comments");
        assert!(record
            .children
            .as_ref()
            .unwrap()
            .names()
            .contains(&"comments.new"));
    }

    #[test]
    fn test_resource_still_checks_reserved_names() {
        let mut dsl = RouteDsl::new(None, DslConfig::default());
        assert!(dsl.resource("array", RouteOptions::default()).is_err());
    }
}
