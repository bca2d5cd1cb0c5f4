//! Advisory checks over resolved routes.
//!
//! Linting runs after autodetection, before (or alongside) configuration
//! assembly, and never rejects a route: the fail-fast errors live in the
//! parser and builder. What it catches are declarations that assemble cleanly
//! but almost certainly do not mean what the author intended.
//!
//! ## Checks Performed
//!
//! 1. **Duplicate route names** - a later part silently shadows the earlier one
//! 2. **Orphan constraints** - a constraint key that names no placeholder in the path
//! 3. **Segment route without placeholders** - nothing for the router to capture
//! 4. **Literal route with placeholders** - placeholders matched as literal text

use crate::annotation::{ResolvedRoute, RouteType};
use crate::parser::path_placeholders;
use std::collections::{HashMap, HashSet};

#[cfg(test)]
mod tests;

/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Almost certainly a declaration mistake
    Error,
    /// Legal but surprising; worth a look
    Warning,
    /// Best practice suggestion
    Info,
}

impl std::fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LintSeverity::Error => "error",
            LintSeverity::Warning => "warning",
            LintSeverity::Info => "info",
        };
        write!(f, "{}", s)
    }
}

/// A lint issue found in a set of resolved routes
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// Where the issue occurred (e.g., "route:complete-definition")
    pub location: String,
    /// Severity of the issue
    pub severity: LintSeverity,
    /// Type of lint issue (e.g., "duplicate_name", "orphan_constraint")
    pub kind: String,
    /// Human-readable description of the problem
    pub message: String,
    /// Optional suggestion for how to fix it
    pub suggestion: Option<String>,
}

impl LintIssue {
    /// Create a new lint issue
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion for fixing the issue
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Lint a set of resolved routes.
///
/// Routes are checked in the order given, which is the order the builder
/// would accumulate them in.
#[must_use]
pub fn lint_routes(routes: &[ResolvedRoute]) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (index, route) in routes.iter().enumerate() {
        let location = format!("route:{}", route.name);
        let placeholders: HashSet<String> = path_placeholders(&route.path).into_iter().collect();

        if let Some(previous) = seen.insert(route.name.as_str(), index) {
            issues.push(
                LintIssue::new(
                    &location,
                    LintSeverity::Warning,
                    "duplicate_name",
                    format!(
                        "route name '{}' is declared again (part {} shadows part {})",
                        route.name, index, previous
                    ),
                )
                .with_suggestion("Declare a distinct name= on one of the annotations"),
            );
        }

        if let Some(constraints) = &route.constraints {
            for key in constraints.keys() {
                if !placeholders.contains(key) {
                    issues.push(
                        LintIssue::new(
                            &location,
                            LintSeverity::Error,
                            "orphan_constraint",
                            format!(
                                "constraint '{}' names no placeholder in path '{}'",
                                key, route.path
                            ),
                        )
                        .with_suggestion(format!("Add a ':{}' segment or drop the constraint", key)),
                    );
                }
            }
        }

        match route.route_type {
            RouteType::Segment if placeholders.is_empty() => {
                issues.push(
                    LintIssue::new(
                        &location,
                        LintSeverity::Warning,
                        "segment_without_placeholders",
                        format!("segment route '{}' captures nothing", route.path),
                    )
                    .with_suggestion("Use type=literal, or add a placeholder to the path"),
                );
            }
            RouteType::Literal if !placeholders.is_empty() => {
                issues.push(
                    LintIssue::new(
                        &location,
                        LintSeverity::Warning,
                        "literal_with_placeholders",
                        format!(
                            "literal route '{}' treats its placeholders as plain text",
                            route.path
                        ),
                    )
                    .with_suggestion("Use type=segment if the placeholders should capture"),
                );
            }
            _ => {}
        }
    }

    issues
}
