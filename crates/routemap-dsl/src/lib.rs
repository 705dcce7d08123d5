//! # routemap-dsl
//!
//! Declarative route tables. Routes are declared on nested [`RouteDsl`]
//! scopes and compiled into an ordered [`RouteMap`] with fully-qualified
//! dotted names, implicit index routes, and optional loading/error substates.
//! [`checks`] inspects a finished map for likely mistakes.

pub mod checks;
pub mod dsl;

pub use dsl::{
    DslConfig, FlatRoute, RouteDsl, RouteMap, RouteOptions, RoutePath, RouteRecognizer,
    RouteRecord, SerializeFn, SerializerRegistrar, SerializerTable,
};
