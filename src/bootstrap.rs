//! Application-startup assembly of the router configuration.
//!
//! This is the whole pipeline behind one call: walk the controllers, extract
//! and resolve their route annotations, and render the configuration tree the
//! host router merges in. It runs once at configuration time; any error
//! aborts the batch so a misdeclared route can never silently drop out of the
//! routing table.

use crate::config::RouteConfigBuilder;
use crate::lint::{lint_routes, LintSeverity};
use crate::parser::{AnnotationParser, AnnotationSource, ControllerMeta};
use anyhow::Context;
use serde_json::Value;
use std::cmp::Reverse;
use tracing::{debug, info, warn};

/// Assemble the router configuration for a set of controllers.
///
/// Routes are accumulated in descending priority order (stable, so routes of
/// equal priority keep controller/declaration order); the priority itself is
/// an ordering hint for the consuming router and does not appear in the
/// rendered tree. Lint findings are logged but do not fail the assembly.
///
/// # Errors
///
/// Fails fast on the first unreadable annotation ([`ParseError`]) or unnamed
/// part ([`RouteConfigError`]); no partial configuration is returned.
///
/// [`ParseError`]: crate::parser::ParseError
/// [`RouteConfigError`]: crate::config::RouteConfigError
pub fn assemble<S: AnnotationSource>(
    controllers: &[ControllerMeta],
    source: S,
) -> anyhow::Result<Value> {
    let parser = AnnotationParser::new(source);

    let mut routes = Vec::new();
    for controller in controllers {
        let mut found = parser
            .controller_routes(controller)
            .with_context(|| format!("collecting route annotations of {}", controller.class_name))?;
        debug!(
            controller = %controller.class_name,
            routes = found.len(),
            "collected route annotations"
        );
        routes.append(&mut found);
    }

    for issue in lint_routes(&routes) {
        match issue.severity {
            LintSeverity::Error | LintSeverity::Warning => warn!(
                location = %issue.location,
                kind = %issue.kind,
                "{}",
                issue.message
            ),
            LintSeverity::Info => debug!(
                location = %issue.location,
                kind = %issue.kind,
                "{}",
                issue.message
            ),
        }
    }

    routes.sort_by_key(|route| Reverse(route.priority));

    let mut builder = RouteConfigBuilder::new();
    for route in routes {
        let name = route.name.clone();
        builder
            .add_part(route)
            .with_context(|| format!("adding route part '{name}' to the configuration"))?;
    }

    info!(routes = builder.len(), "router configuration assembled");
    Ok(builder.to_value())
}
