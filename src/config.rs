//! Route configuration accumulation and rendering.
//!
//! One build pass owns one [`RouteConfigBuilder`]: resolved routes go in one
//! at a time, and [`RouteConfigBuilder::to_value`] renders the nested mapping
//! the host router's configuration format expects. Rendering is a pure read
//! of the accumulated state and can be repeated.

use crate::annotation::ResolvedRoute;
use serde_json::{json, Map, Value};
use std::fmt;
use tracing::debug;

/// Error raised when a route part cannot join the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteConfigError {
    /// The part carries no resolvable name, so it cannot key a config entry.
    ///
    /// Reaching this means autodetection ran against a degenerate method name
    /// (nothing left after suffix stripping) or the part was built by hand
    /// with an empty name.
    MissingName,
}

impl fmt::Display for RouteConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteConfigError::MissingName => {
                write!(
                    f,
                    "route part has no resolvable name; declare one or use a method name \
                    the naming convention can derive a name from"
                )
            }
        }
    }
}

impl std::error::Error for RouteConfigError {}

/// Accumulates resolved routes and renders the router configuration tree.
///
/// Parts are kept in insertion order. Duplicate names are not rejected: the
/// rendered tree is keyed by name, so a later part with the same name
/// overwrites the earlier entry (the lint pass flags this).
#[derive(Debug, Clone, Default)]
pub struct RouteConfigBuilder {
    parts: Vec<(String, ResolvedRoute)>,
}

impl RouteConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one resolved route to the configuration under assembly.
    ///
    /// # Errors
    ///
    /// [`RouteConfigError::MissingName`] if the route's name is empty.
    pub fn add_part(&mut self, route: ResolvedRoute) -> Result<(), RouteConfigError> {
        if route.name.is_empty() {
            return Err(RouteConfigError::MissingName);
        }
        debug!(route = %route.name, path = %route.path, "adding route part");
        self.parts.push((route.name.clone(), route));
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Render the accumulated parts into the router configuration mapping.
    ///
    /// Pure function of the current state: calling it repeatedly without
    /// intervening [`add_part`](Self::add_part) calls yields equal trees.
    /// Every entry has the shape
    ///
    /// ```json
    /// {
    ///     "type": "segment",
    ///     "options": {
    ///         "route": "/blog/:id",
    ///         "defaults": { "controller": "blog", "action": "view-post" },
    ///         "constraints": { "id": "\\d+" }
    ///     },
    ///     "may_terminate": true
    /// }
    /// ```
    ///
    /// with `constraints` rendered as `null` when the route declared none.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut config = Map::new();
        for (name, route) in &self.parts {
            let constraints = match &route.constraints {
                Some(map) => json!(map),
                None => Value::Null,
            };
            config.insert(
                name.clone(),
                json!({
                    "type": route.route_type.as_str(),
                    "options": {
                        "route": route.path,
                        "defaults": {
                            "controller": route.controller,
                            "action": route.action,
                        },
                        "constraints": constraints,
                    },
                    "may_terminate": route.may_terminate,
                }),
            );
        }
        Value::Object(config)
    }
}
