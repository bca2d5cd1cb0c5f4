use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Priority assigned to a route when the annotation declares none.
///
/// Priorities only order the assembled parts for the consuming router; they
/// never appear in the rendered configuration tree.
pub const DEFAULT_PRIORITY: i32 = 1000;

/// Matching strategy of a route path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    /// Path contains `:placeholder` tokens captured from the URL.
    Segment,
    /// Fixed path with no captured placeholders.
    Literal,
}

impl RouteType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteType::Segment => "segment",
            RouteType::Literal => "literal",
        }
    }
}

impl std::fmt::Display for RouteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Route metadata as authored on a controller action method.
///
/// Every field is optional: whatever the annotation leaves out is filled in by
/// [`autodetect`](crate::parser::autodetect) from the method and class names.
/// An entirely empty annotation is valid and means "route this action by
/// convention alone".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteAnnotation {
    /// Short route identifier; derived from the method name when absent.
    pub name: Option<String>,
    /// URL pattern, e.g. `/blog/:id`; derived as `/` + name when absent.
    pub path: Option<String>,
    /// Matching strategy; detected from the path's placeholders when absent.
    #[serde(rename = "type")]
    pub route_type: Option<RouteType>,
    /// Logical controller key the dispatcher resolves; derived from the class
    /// name when absent.
    pub controller: Option<String>,
    /// Logical action key; derived from the method name when absent.
    pub action: Option<String>,
    /// Ordering hint for the consuming router.
    pub priority: Option<i32>,
    /// Placeholder name to validation regex source.
    pub constraints: Option<BTreeMap<String, String>>,
    /// Whether the route may terminate matching; defaults to `true`.
    pub may_terminate: Option<bool>,
}

impl RouteAnnotation {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_type(mut self, route_type: RouteType) -> Self {
        self.route_type = Some(route_type);
        self
    }

    pub fn with_controller(mut self, controller: impl Into<String>) -> Self {
        self.controller = Some(controller.into());
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Add a placeholder constraint, creating the constraint map on first use.
    pub fn with_constraint(
        mut self,
        placeholder: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        self.constraints
            .get_or_insert_with(BTreeMap::new)
            .insert(placeholder.into(), pattern.into());
        self
    }

    pub fn with_may_terminate(mut self, may_terminate: bool) -> Self {
        self.may_terminate = Some(may_terminate);
        self
    }
}

/// Route metadata with every field resolved.
///
/// Produced by [`autodetect`](crate::parser::autodetect); only `constraints`
/// stays `None`, and only when the annotation declared no placeholder
/// validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRoute {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub route_type: RouteType,
    pub controller: String,
    pub action: String,
    pub priority: i32,
    pub constraints: Option<BTreeMap<String, String>>,
    pub may_terminate: bool,
}
