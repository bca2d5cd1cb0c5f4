//! Naming conventions connecting class/method names to routing identifiers.
//!
//! All conversions are deterministic and total: single-word and
//! already-lower-case names come out well-formed, as do names with digits.
//! The suffix rules strip exactly one conventional suffix (`Action` on
//! methods, `Controller` on classes); a name that is nothing but its suffix
//! converts to the empty string, which downstream validation rejects.

/// Convert a camel-case name to hyphen-separated lower case.
///
/// `completeDefinition` becomes `complete-definition`; underscores and spaces
/// collapse into hyphens; an already-hyphenated lower-case name passes through
/// unchanged.
#[must_use]
pub fn hyphenate(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_uppercase() {
            if !result.is_empty() && !result.ends_with('-') {
                result.push('-');
            }
            result.extend(ch.to_lowercase());
        } else if ch == '-' || ch == '_' || ch == ' ' {
            if !result.is_empty() && !result.ends_with('-') {
                result.push('-');
            }
        } else {
            result.push(ch);
        }
    }
    result
}

/// Strip one trailing `Action` suffix from a method name, if present.
#[must_use]
pub fn strip_action_suffix(method: &str) -> &str {
    method.strip_suffix("Action").unwrap_or(method)
}

/// Strip one trailing `Controller` suffix from a class name, if present.
#[must_use]
pub fn strip_controller_suffix(class: &str) -> &str {
    class.strip_suffix("Controller").unwrap_or(class)
}

/// Derive a route name from an action method name.
///
/// `noRouteNameAction` derives `no-route-name`.
#[must_use]
pub fn route_name(method: &str) -> String {
    hyphenate(strip_action_suffix(method))
}

/// Derive the dispatch action key from an action method name.
///
/// Uses the same derivation as [`route_name`], so a route whose name and
/// action key are both autodetected from one method gets matching values.
#[must_use]
pub fn action_key(method: &str) -> String {
    hyphenate(strip_action_suffix(method))
}

/// Derive the dispatch controller key from a controller class name.
///
/// The suffix is stripped and the remainder lower-cased without word
/// separation: `NoBaseController` derives `nobase`, not `no-base`.
#[must_use]
pub fn controller_key(class: &str) -> String {
    strip_controller_suffix(class).to_lowercase()
}
