//! Route records and finalized route maps.
//!
//! A [`RouteMap`] is what [`RouteDsl::generate`](super::RouteDsl::generate)
//! produces: an ordered, inspectable sequence of [`RouteRecord`]s. Order is
//! registration order; a router consuming the map must register records in
//! the order they are yielded.

use std::fmt;

use serde::{Deserialize, Serialize};

use routemap_core::RouteMapResult;

/// The path half of a route record.
///
/// Error substates get a dedicated [`RoutePath::ErrorSentinel`] marker rather
/// than a real URL so that no request can ever match them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RoutePath {
    /// A real URL path segment such as `/posts` or `/:post_id`.
    Url(String),
    /// Marker for the unreachable error substate of the named route.
    ErrorSentinel(String),
}

impl RoutePath {
    /// Creates a URL path.
    pub fn url(path: impl Into<String>) -> Self {
        Self::Url(path.into())
    }

    /// Creates the error sentinel for the route with the given local name.
    pub fn error_sentinel(route: impl Into<String>) -> Self {
        Self::ErrorSentinel(route.into())
    }

    /// Returns `true` for `""` and `"/"`.
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Url(p) if p.is_empty() || p == "/")
    }

    /// Returns `true` unless this is an error sentinel.
    pub const fn is_reachable(&self) -> bool {
        matches!(self, Self::Url(_))
    }

    /// Returns the URL, or `None` for an error sentinel.
    pub fn as_url(&self) -> Option<&str> {
        match self {
            Self::Url(p) => Some(p),
            Self::ErrorSentinel(_) => None,
        }
    }
}

impl fmt::Display for RoutePath {
    /// Sentinels render in the dummy-path form understood by string-based
    /// routers: `/_unused_dummy_error_path_route_<name>/:error`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(p) => f.write_str(p),
            Self::ErrorSentinel(route) => {
                write!(f, "/_unused_dummy_error_path_route_{route}/:error")
            }
        }
    }
}

/// One entry of a route map: `(path, fully-qualified name, children)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Path relative to the enclosing route.
    pub path: RoutePath,
    /// The fully-qualified dotted route name.
    pub name: String,
    /// The finalized route map of the nested scope, if the route had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<RouteMap>,
}

/// A route flattened to its absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRoute {
    /// The absolute URL, made of every ancestor's path.
    pub url: String,
    /// The fully-qualified dotted route name.
    pub name: String,
}

/// The registration side of a router.
///
/// [`RouteMap::replay`] calls [`add`](RouteRecognizer::add) once per record,
/// in order. This is the only thing a router has to implement to consume a
/// route map. Closures with the matching signature implement it too.
pub trait RouteRecognizer {
    /// Registers one route.
    fn add(&mut self, path: &RoutePath, name: &str, children: Option<&RouteMap>);
}

impl<F> RouteRecognizer for F
where
    F: FnMut(&RoutePath, &str, Option<&RouteMap>),
{
    fn add(&mut self, path: &RoutePath, name: &str, children: Option<&RouteMap>) {
        self(path, name, children);
    }
}

/// A finalized, ordered list of route records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteMap {
    records: Vec<RouteRecord>,
}

impl RouteMap {
    /// Wraps an already ordered list of records.
    pub const fn from_records(records: Vec<RouteRecord>) -> Self {
        Self { records }
    }

    /// Returns the number of records at this level.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are no records at this level.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at `index`.
    pub fn get(&self, index: usize) -> Option<&RouteRecord> {
        self.records.get(index)
    }

    /// Iterates over the records at this level, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, RouteRecord> {
        self.records.iter()
    }

    /// Returns the records at this level.
    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    /// Returns the names at this level, in order.
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    /// Hands every record at this level to `recognizer`, in order.
    ///
    /// Nested maps are passed along as `children`; recursing into them is up
    /// to the recognizer.
    pub fn replay<R: RouteRecognizer + ?Sized>(&self, recognizer: &mut R) {
        for record in &self.records {
            recognizer.add(&record.path, &record.name, record.children.as_ref());
        }
    }

    /// Returns every record in the tree, depth first, each parent before its
    /// children.
    pub fn descendants(&self) -> Vec<&RouteRecord> {
        let mut out = Vec::new();
        self.collect_descendants(&mut out);
        out
    }

    fn collect_descendants<'a>(&'a self, out: &mut Vec<&'a RouteRecord>) {
        for record in &self.records {
            out.push(record);
            if let Some(children) = &record.children {
                children.collect_descendants(out);
            }
        }
    }

    /// Finds the first record anywhere in the tree with the given qualified name.
    pub fn find(&self, name: &str) -> Option<&RouteRecord> {
        self.descendants().into_iter().find(|r| r.name == name)
    }

    /// Flattens the tree into absolute URLs.
    ///
    /// Error sentinels, and anything nested under them, are skipped.
    ///
    /// ```
    /// use routemap_dsl::{RouteDsl, RouteOptions};
    ///
    /// let map = RouteDsl::map_default(|d| {
    ///     d.nest("posts", |d| d.route("new", RouteOptions::default()))
    /// })
    /// .unwrap()
    /// .generate()
    /// .unwrap();
    ///
    /// let flat = map.flatten();
    /// let new = flat.iter().find(|r| r.name == "posts.new").unwrap();
    /// assert_eq!(new.url, "/posts/new");
    /// ```
    pub fn flatten(&self) -> Vec<FlatRoute> {
        let mut out = Vec::new();
        self.flatten_into("", &mut out);
        out
    }

    fn flatten_into(&self, prefix: &str, out: &mut Vec<FlatRoute>) {
        for record in &self.records {
            let Some(path) = record.path.as_url() else {
                continue;
            };
            let url = join_url(prefix, path);
            out.push(FlatRoute {
                url: url.clone(),
                name: record.name.clone(),
            });
            if let Some(children) = &record.children {
                children.flatten_into(&url, out);
            }
        }
    }

    /// Serializes the map to JSON.
    pub fn to_json(&self) -> RouteMapResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the map to indented JSON.
    pub fn to_json_pretty(&self) -> RouteMapResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a map previously produced by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> RouteMapResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<'a> IntoIterator for &'a RouteMap {
    type Item = &'a RouteRecord;
    type IntoIter = std::slice::Iter<'a, RouteRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for RouteMap {
    type Item = RouteRecord;
    type IntoIter = std::vec::IntoIter<RouteRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Joins a parent URL and a child path, collapsing index paths onto the parent.
fn join_url(prefix: &str, path: &str) -> String {
    let parent = prefix.trim_end_matches('/');
    let child = path.trim_start_matches('/');

    if child.is_empty() {
        if parent.is_empty() {
            "/".to_string()
        } else {
            parent.to_string()
        }
    } else {
        format!("{parent}/{child}")
    }
}
