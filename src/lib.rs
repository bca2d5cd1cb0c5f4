//! # Annotated Router
//!
//! **Annotated Router** builds a router configuration tree from route annotations
//! declared on controller action methods, instead of hand-written routing tables.
//!
//! ## Overview
//!
//! Controller-style applications conventionally name things: `BlogController`
//! handles the `blog` dispatch key, `viewPostAction` handles the `view-post`
//! action. This crate leans on those conventions so a route annotation only has
//! to declare what deviates from them. Everything left out (route name, URL
//! path, matching strategy, controller key, action key) is autodetected from
//! the annotated method and its enclosing class, and the fully resolved routes
//! are rendered into the nested mapping shape the host router consumes.
//!
//! The crate never parses annotation syntax itself. An [`AnnotationSource`]
//! yields already-structured [`RouteAnnotation`] values for a method; the
//! bundled [`AnnotationTable`] is a declarative in-memory implementation, and
//! applications with their own metadata machinery (attribute macros, build
//! scripts, config files) implement the trait instead.
//!
//! ## Architecture
//!
//! - **[`annotation`]** - Route descriptor types: authored ([`RouteAnnotation`])
//!   and resolved ([`ResolvedRoute`])
//! - **[`naming`]** - Convention-based derivation of names and dispatch keys
//! - **[`parser`]** - Annotation extraction and autodetection of missing fields
//! - **[`config`]** - Accumulates resolved routes and renders the configuration tree
//! - **[`lint`]** - Advisory checks over resolved routes (duplicate names,
//!   orphan constraints, type mismatches)
//! - **[`bootstrap`]** - One-call assembly pipeline for application startup
//!
//! ## Quick Start
//!
//! ```
//! use annotated_router::{assemble, AnnotationTable, ControllerMeta, RouteAnnotation};
//!
//! # fn main() -> anyhow::Result<()> {
//! // Annotations are normally produced by the application's metadata layer;
//! // the table is the declarative way to register them directly.
//! let annotations = AnnotationTable::new()
//!     .annotate(
//!         "BlogController",
//!         "viewPostAction",
//!         RouteAnnotation::default().with_path("/blog/:id"),
//!     )
//!     .annotate("BlogController", "indexAction", RouteAnnotation::default());
//!
//! let controllers = vec![ControllerMeta::new("BlogController")
//!     .with_action("viewPostAction")
//!     .with_action("indexAction")];
//!
//! let config = assemble(&controllers, annotations)?;
//!
//! // `view-post` was derived from the method name, `blog` from the class name.
//! assert_eq!(config["view-post"]["type"], "segment");
//! assert_eq!(config["view-post"]["options"]["defaults"]["controller"], "blog");
//! assert_eq!(config["index"]["options"]["route"], "/index");
//! # Ok(())
//! # }
//! ```
//!
//! ## Scope
//!
//! The output of [`assemble`] (or a hand-driven [`RouteConfigBuilder`]) is meant
//! to be merged into a host framework's router configuration. Matching incoming
//! requests and dispatching them stay with that router; this crate is a pure,
//! synchronous transformation that runs once at startup.

pub mod annotation;
pub mod bootstrap;
pub mod config;
pub mod lint;
pub mod naming;
pub mod parser;

pub use annotation::{ResolvedRoute, RouteAnnotation, RouteType, DEFAULT_PRIORITY};
pub use bootstrap::assemble;
pub use config::{RouteConfigBuilder, RouteConfigError};
pub use parser::{
    autodetect, ActionRef, AnnotationParser, AnnotationSource, AnnotationTable, ControllerMeta,
    ParseError,
};
