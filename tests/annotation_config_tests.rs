#![allow(clippy::unwrap_used, clippy::expect_used)]

use annotated_router::{
    ActionRef, AnnotationParser, AnnotationTable, RouteAnnotation, RouteConfigBuilder, RouteType,
};
use serde_json::json;

// Annotations for a `NoBaseController` with one fully declared action and a
// handful of partially declared ones, the way an application's metadata layer
// would hand them over.
fn no_base_annotations() -> AnnotationTable {
    AnnotationTable::new()
        .annotate(
            "NoBaseController",
            "completeDefinitionAction",
            RouteAnnotation::default()
                .with_name("complete-definition")
                .with_path("/complete-definition/:id/:method")
                .with_type(RouteType::Segment)
                .with_controller("nobase")
                .with_action("complete-definition-action")
                .with_priority(1000)
                .with_constraint("id", r"\d+")
                .with_constraint("method", r"\w+"),
        )
        .annotate(
            "NoBaseController",
            "noActionAction",
            RouteAnnotation::default(),
        )
        .annotate(
            "NoBaseController",
            "noRouteNameAction",
            RouteAnnotation::default(),
        )
}

fn action(method: &str) -> ActionRef {
    ActionRef::new("NoBaseController", method)
}

#[test]
fn test_all_params_set_and_accessible() {
    let parser = AnnotationParser::new(no_base_annotations());
    let annotations = parser
        .method_annotations(&action("completeDefinitionAction"))
        .unwrap();
    assert_eq!(annotations.len(), 1);

    let route = &annotations[0];
    assert_eq!(route.name.as_deref(), Some("complete-definition"));
    assert_eq!(route.path.as_deref(), Some("/complete-definition/:id/:method"));
    assert_eq!(route.route_type, Some(RouteType::Segment));
    assert_eq!(route.controller.as_deref(), Some("nobase"));
    assert_eq!(route.action.as_deref(), Some("complete-definition-action"));
    assert_eq!(route.priority, Some(1000));
}

#[test]
fn test_complete_route_renders_declared_values() {
    let parser = AnnotationParser::new(no_base_annotations());
    let method = action("completeDefinitionAction");
    let annotations = parser.method_annotations(&method).unwrap();

    // Fully declared: autodetection must leave every field unchanged.
    let resolved = annotated_router::autodetect(annotations[0].clone(), &method, None);

    let mut builder = RouteConfigBuilder::new();
    builder.add_part(resolved).unwrap();

    let expected = json!({
        "complete-definition": {
            "type": "segment",
            "options": {
                "route": "/complete-definition/:id/:method",
                "defaults": {
                    "controller": "nobase",
                    "action": "complete-definition-action",
                },
                "constraints": {
                    "id": r"\d+",
                    "method": r"\w+",
                },
            },
            "may_terminate": true,
        }
    });
    assert_eq!(builder.to_value(), expected);
}

#[test]
fn test_autodetect_fills_all_missing_fields() {
    let parser = AnnotationParser::new(no_base_annotations());
    let method = action("noActionAction");
    let annotations = parser.method_annotations(&method).unwrap();

    let resolved =
        annotated_router::autodetect(annotations[0].clone(), &method, Some("controllerkey"));

    let mut builder = RouteConfigBuilder::new();
    builder.add_part(resolved).unwrap();

    let expected = json!({
        "no-action": {
            "type": "literal",
            "options": {
                "route": "/no-action",
                "defaults": {
                    "controller": "controllerkey",
                    "action": "no-action",
                },
                "constraints": null,
            },
            "may_terminate": true,
        }
    });
    assert_eq!(builder.to_value(), expected);
}

#[test]
fn test_autodetect_route_name_from_method() {
    let parser = AnnotationParser::new(no_base_annotations());
    let method = action("noRouteNameAction");
    let annotations = parser.method_annotations(&method).unwrap();

    let resolved =
        annotated_router::autodetect(annotations[0].clone(), &method, Some("controllerkey"));

    assert_eq!(resolved.name, "no-route-name");
    assert_eq!(resolved.path, "/no-route-name");
    assert_eq!(resolved.route_type, RouteType::Literal);
}

#[test]
fn test_unannotated_method_yields_no_routes() {
    let parser = AnnotationParser::new(no_base_annotations());
    let annotations = parser.method_annotations(&action("plainAction")).unwrap();
    assert!(annotations.is_empty());
}

#[test]
fn test_two_parts_render_both_keys() {
    let parser = AnnotationParser::new(no_base_annotations());

    let mut builder = RouteConfigBuilder::new();
    for method_name in ["noActionAction", "noRouteNameAction"] {
        let method = action(method_name);
        let annotations = parser.method_annotations(&method).unwrap();
        let resolved = annotated_router::autodetect(annotations[0].clone(), &method, None);
        builder.add_part(resolved).unwrap();
    }

    let value = builder.to_value();
    let entries = value.as_object().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(value["no-action"]["options"]["route"], "/no-action");
    assert_eq!(value["no-route-name"]["options"]["route"], "/no-route-name");
    // Controller key fell back to the class-derived one for both.
    assert_eq!(value["no-action"]["options"]["defaults"]["controller"], "nobase");
}
