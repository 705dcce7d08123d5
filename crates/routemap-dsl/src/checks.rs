//! Checks over finalized route maps.
//!
//! The builder accepts any name that is not reserved, so
//! some mistakes only show up once the whole tree is known. A
//! [`CheckRegistry`] runs check functions over a [`RouteMap`] and collects
//! [`CheckMessage`]s.
//!
//! Built-in checks:
//!
//! | Id | Level | Problem |
//! |---|---|---|
//! | `routes.W001` | Warning | a qualified name appears more than once |
//! | `routes.W002` | Warning | a URL path is neither empty nor starts with `/` |
//!
//! ```
//! use routemap_dsl::checks::CheckRegistry;
//! use routemap_dsl::{RouteDsl, RouteOptions};
//!
//! let map = RouteDsl::map_default(|d| {
//!     d.route("about", RouteOptions::default())?;
//!     d.route("about", RouteOptions::new().path("/about-us"))
//! })
//! .unwrap()
//! .generate()
//! .unwrap();
//!
//! let messages = CheckRegistry::with_builtins().run_checks(None, &map);
//! assert_eq!(messages[0].id.as_deref(), Some("routes.W001"));
//! ```

use std::collections::HashMap;

use routemap_core::checks::CheckMessage;

use crate::dsl::RouteMap;

/// A check function that inspects a route map.
pub type RouteCheckFn = fn(&RouteMap) -> Vec<CheckMessage>;

/// A registered check with associated tags.
struct RegisteredCheck {
    func: RouteCheckFn,
    tags: Vec<String>,
}

/// Registry for route map checks.
pub struct CheckRegistry {
    checks: Vec<RegisteredCheck>,
}

impl CheckRegistry {
    /// Creates a new empty check registry.
    pub const fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Creates a new check registry pre-loaded with built-in checks.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(check_duplicate_names, &["routes", "names"]);
        registry.register(check_path_format, &["routes", "paths"]);
        registry
    }

    /// Registers a check function with the given tags.
    pub fn register(&mut self, func: RouteCheckFn, tags: &[&str]) {
        self.checks.push(RegisteredCheck {
            func,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        });
    }

    /// Runs all registered checks (or only those matching one of `tags`)
    /// and collects the resulting messages in registration order.
    pub fn run_checks(&self, tags: Option<&[&str]>, map: &RouteMap) -> Vec<CheckMessage> {
        let mut messages = Vec::new();

        for check in &self.checks {
            let should_run = tags.map_or(true, |filter_tags| {
                filter_tags.iter().any(|t| check.tags.iter().any(|own| own == t))
            });

            if should_run {
                messages.extend((check.func)(map));
            }
        }

        messages
    }

    /// Returns the number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns `true` if no checks are registered.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================
// Built-in checks
// ============================================================

/// Reports every qualified name declared more than once. A router keeps only
/// one of them.
fn check_duplicate_names(map: &RouteMap) -> Vec<CheckMessage> {
    let records = map.descendants();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in &records {
        *counts.entry(record.name.as_str()).or_default() += 1;
    }

    let mut reported = Vec::new();
    let mut messages = Vec::new();
    for record in &records {
        let name = record.name.as_str();
        if counts[name] > 1 && !reported.contains(&name) {
            reported.push(name);
            messages.push(CheckMessage::warning(
                format!("Route name '{name}' is declared {} times.", counts[name]),
                Some("Rename one of the routes or use reset_namespace deliberately."),
                Some(name),
                Some("routes.W001"),
            ));
        }
    }

    messages
}

/// Reports URL paths that do not start with `/`.
fn check_path_format(map: &RouteMap) -> Vec<CheckMessage> {
    map.descendants()
        .into_iter()
        .filter_map(|record| {
            let path = record.path.as_url()?;
            (!path.is_empty() && !path.starts_with('/')).then(|| {
                CheckMessage::warning(
                    format!("Route '{}' has path '{path}' without a leading '/'.", record.name),
                    Some("Prefix the path with '/'."),
                    Some(record.name.as_str()),
                    Some("routes.W002"),
                )
            })
        })
        .collect()
}
