//! # routemap
//!
//! A declarative route-table builder.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient access.
//! You can depend on `routemap` to get everything, or depend on individual
//! crates for finer-grained control.
//!
//! ```
//! use routemap::dsl::{RouteDsl, RouteOptions};
//!
//! let map = RouteDsl::map_default(|d| {
//!     d.nest("posts", |d| d.route("new", RouteOptions::default()))
//! })
//! .unwrap()
//! .generate()
//! .unwrap();
//!
//! assert_eq!(map.names(), vec!["posts", "index"]);
//! ```

/// Error types, settings, logging, checks, and deprecations.
pub use routemap_core as core;

/// The route-table DSL and route map types.
#[cfg(feature = "dsl")]
pub use routemap_dsl as dsl;

// Third-party re-exports for user convenience
pub use serde;
pub use serde_json;
pub use tracing;
pub use tracing_subscriber;
