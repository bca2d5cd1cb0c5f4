use super::{lint_routes, LintSeverity};
use crate::annotation::{ResolvedRoute, RouteType, DEFAULT_PRIORITY};

fn literal(name: &str, path: &str) -> ResolvedRoute {
    ResolvedRoute {
        name: name.to_string(),
        path: path.to_string(),
        route_type: RouteType::Literal,
        controller: "nobase".to_string(),
        action: name.to_string(),
        priority: DEFAULT_PRIORITY,
        constraints: None,
        may_terminate: true,
    }
}

fn segment(name: &str, path: &str) -> ResolvedRoute {
    ResolvedRoute {
        route_type: RouteType::Segment,
        ..literal(name, path)
    }
}

#[test]
fn test_clean_routes_yield_no_issues() {
    let routes = vec![
        literal("index", "/index"),
        segment("view", "/view/:id"),
    ];
    assert!(lint_routes(&routes).is_empty());
}

#[test]
fn test_duplicate_names_flagged() {
    let routes = vec![literal("dup", "/a"), literal("dup", "/b")];
    let issues = lint_routes(&routes);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, "duplicate_name");
    assert_eq!(issues[0].severity, LintSeverity::Warning);
    assert_eq!(issues[0].location, "route:dup");
}

#[test]
fn test_orphan_constraint_flagged() {
    let mut route = segment("view", "/view/:id");
    route.constraints = Some(
        [
            ("id".to_string(), r"\d+".to_string()),
            ("slug".to_string(), r"\w+".to_string()),
        ]
        .into_iter()
        .collect(),
    );

    let issues = lint_routes(&[route]);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, "orphan_constraint");
    assert_eq!(issues[0].severity, LintSeverity::Error);
    assert!(issues[0].message.contains("'slug'"));
    assert!(issues[0].suggestion.as_deref().is_some_and(|s| s.contains(":slug")));
}

#[test]
fn test_segment_without_placeholders_flagged() {
    let issues = lint_routes(&[segment("static", "/static")]);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, "segment_without_placeholders");
}

#[test]
fn test_literal_with_placeholders_flagged() {
    let issues = lint_routes(&[literal("odd", "/odd/:id")]);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, "literal_with_placeholders");
}

#[test]
fn test_constraint_matching_placeholder_is_clean() {
    let mut route = segment("view", "/view/:id");
    route.constraints = Some([("id".to_string(), r"\d+".to_string())].into_iter().collect());
    assert!(lint_routes(&[route]).is_empty());
}
