use super::source::{ActionRef, AnnotationSource, ControllerMeta, ParseError};
use crate::annotation::{ResolvedRoute, RouteAnnotation, RouteType, DEFAULT_PRIORITY};
use crate::naming;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

// Placeholder tokens are path segments introduced by `:`, e.g. `/blog/:id`.
#[allow(clippy::expect_used)]
static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").expect("placeholder pattern is valid")
});

/// List the placeholder names a route path captures, in order of appearance.
///
/// `/complete-definition/:id/:method` yields `["id", "method"]`; a literal
/// path yields an empty vector.
#[must_use]
pub fn path_placeholders(path: &str) -> Vec<String> {
    PLACEHOLDER_RE
        .captures_iter(path)
        .map(|c| c[1].to_string())
        .collect()
}

/// Fill in every field the annotation left unset, from naming conventions.
///
/// Pure transformation from the authored descriptor to a fully populated one;
/// declared fields pass through untouched. Derivations, in order:
///
/// 1. `name` from the method name, suffix-stripped and hyphenated
/// 2. `path` as `/` + the resolved name
/// 3. `type` from whether the resolved path contains a `:placeholder`
/// 4. `controller` from `default_controller_key`, falling back to the class name
/// 5. `action` from the method name, same derivation as `name`
///
/// `priority` defaults to [`DEFAULT_PRIORITY`] and `may_terminate` to `true`;
/// `constraints` stay exactly as declared.
#[must_use]
pub fn autodetect(
    route: RouteAnnotation,
    action: &ActionRef,
    default_controller_key: Option<&str>,
) -> ResolvedRoute {
    let name = route
        .name
        .unwrap_or_else(|| naming::route_name(&action.method));
    let path = route.path.unwrap_or_else(|| format!("/{name}"));
    let route_type = route.route_type.unwrap_or_else(|| {
        if PLACEHOLDER_RE.is_match(&path) {
            RouteType::Segment
        } else {
            RouteType::Literal
        }
    });
    let controller = route
        .controller
        .or_else(|| default_controller_key.map(str::to_owned))
        .unwrap_or_else(|| naming::controller_key(&action.controller));
    let action_key = route
        .action
        .unwrap_or_else(|| naming::action_key(&action.method));

    let resolved = ResolvedRoute {
        name,
        path,
        route_type,
        controller,
        action: action_key,
        priority: route.priority.unwrap_or(DEFAULT_PRIORITY),
        constraints: route.constraints,
        may_terminate: route.may_terminate.unwrap_or(true),
    };
    debug!(
        action = %action,
        route = %resolved.name,
        path = %resolved.path,
        route_type = %resolved.route_type,
        "resolved route annotation"
    );
    resolved
}

/// Extracts route annotations for controller actions and resolves their
/// missing fields.
///
/// Generic over the [`AnnotationSource`] so the metadata layer stays swappable.
#[derive(Debug, Clone)]
pub struct AnnotationParser<S> {
    source: S,
}

impl<S: AnnotationSource> AnnotationParser<S> {
    pub fn new(source: S) -> Self {
        AnnotationParser { source }
    }

    /// The route annotations attached to one action method, as authored.
    ///
    /// Side-effect-free delegation to the source. An unannotated method yields
    /// an empty vector; a source failure propagates as [`ParseError`].
    pub fn method_annotations(
        &self,
        action: &ActionRef,
    ) -> Result<Vec<RouteAnnotation>, ParseError> {
        self.source.method_annotations(action)
    }

    /// Extract and resolve every route annotation on a controller's actions.
    ///
    /// The controller's default dispatch key is derived from its class name
    /// and supplied to [`autodetect`] for annotations that do not declare one.
    /// A method carrying several annotations contributes one resolved route
    /// per annotation.
    pub fn controller_routes(
        &self,
        controller: &ControllerMeta,
    ) -> Result<Vec<ResolvedRoute>, ParseError> {
        let default_key = naming::controller_key(&controller.class_name);
        let mut routes = Vec::new();
        for method in &controller.actions {
            let action = ActionRef::new(controller.class_name.clone(), method.clone());
            for annotation in self.method_annotations(&action)? {
                routes.push(autodetect(annotation, &action, Some(&default_key)));
            }
        }
        Ok(routes)
    }
}
