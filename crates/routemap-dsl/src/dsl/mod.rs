//! Route-table DSL.
//!
//! - [`builder`]: [`RouteDsl`], one namespace scope of a route tree
//! - [`options`]: per-declaration [`RouteOptions`]
//! - [`config`]: [`DslConfig`], shared by every scope of a tree
//! - [`record`]: [`RouteMap`] and [`RouteRecord`], the finalized output
//!
//! # Examples
//!
//! ```
//! use routemap_dsl::dsl::{RouteDsl, RouteOptions};
//!
//! let map = RouteDsl::map_default(|d| {
//!     d.route("about", RouteOptions::default())?;
//!     d.nest("posts", |d| d.route("new", RouteOptions::default()))
//! })
//! .unwrap()
//! .generate()
//! .unwrap();
//!
//! assert_eq!(map.names(), vec!["about", "posts", "index"]);
//! assert!(map.find("posts.new").is_some());
//! ```

pub mod builder;
pub mod config;
pub mod options;
pub mod record;

pub use builder::{RouteDsl, RESERVED_ROUTE_NAMES, RESOURCE_DEPRECATION_ID};
pub use config::{DslConfig, SerializerRegistrar, SerializerTable};
pub use options::{RouteOptions, SerializeFn};
pub use record::{FlatRoute, RouteMap, RoutePath, RouteRecognizer, RouteRecord};
