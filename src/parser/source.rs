use crate::annotation::RouteAnnotation;
use std::collections::HashMap;
use std::fmt;

/// Identity of a controller action method.
///
/// Stands in for a reflected method handle: the parser only ever needs the
/// enclosing class name and the method name, so the identity is a plain value
/// type that any metadata layer can produce.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionRef {
    /// Controller class name, e.g. `NoBaseController`.
    pub controller: String,
    /// Action method name, e.g. `completeDefinitionAction`.
    pub method: String,
}

impl ActionRef {
    pub fn new(controller: impl Into<String>, method: impl Into<String>) -> Self {
        ActionRef {
            controller: controller.into(),
            method: method.into(),
        }
    }
}

impl fmt::Display for ActionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.controller, self.method)
    }
}

/// A controller class and the action methods the bootstrap walks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerMeta {
    pub class_name: String,
    pub actions: Vec<String>,
}

impl ControllerMeta {
    pub fn new(class_name: impl Into<String>) -> Self {
        ControllerMeta {
            class_name: class_name.into(),
            actions: Vec::new(),
        }
    }

    pub fn with_action(mut self, method: impl Into<String>) -> Self {
        self.actions.push(method.into());
        self
    }
}

/// Error raised while reading annotation metadata for a method.
///
/// Indicates an authoring mistake (malformed annotation metadata) that has to
/// be fixed before the application can start; it is propagated, never
/// recovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The annotation source failed to produce annotations for a method.
    Reader {
        /// The method whose metadata was unreadable, e.g. `BlogController::indexAction`.
        location: String,
        message: String,
    },
}

impl ParseError {
    pub fn reader(location: impl Into<String>, message: impl Into<String>) -> Self {
        ParseError::Reader {
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Reader { location, message } => {
                write!(f, "route annotation on {location} could not be read: {message}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// External capability yielding structured route annotations for a method.
///
/// Implementations own the "how": an in-memory table, generated registration
/// code, whatever the application's metadata layer provides. This crate only
/// consumes the structured output. An unannotated method yields an empty
/// vector, not an error.
pub trait AnnotationSource {
    fn method_annotations(&self, action: &ActionRef) -> Result<Vec<RouteAnnotation>, ParseError>;
}

impl<S: AnnotationSource + ?Sized> AnnotationSource for &S {
    fn method_annotations(&self, action: &ActionRef) -> Result<Vec<RouteAnnotation>, ParseError> {
        (**self).method_annotations(action)
    }
}

/// Declarative registration table implementing [`AnnotationSource`].
///
/// The in-process replacement for runtime metadata reflection: applications
/// register each annotated action explicitly.
///
/// ```
/// use annotated_router::{AnnotationTable, RouteAnnotation};
///
/// let table = AnnotationTable::new()
///     .annotate("ShopController", "checkoutAction", RouteAnnotation::default());
/// assert!(!table.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnnotationTable {
    entries: HashMap<(String, String), Vec<RouteAnnotation>>,
}

impl AnnotationTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an annotation for a controller action method.
    ///
    /// Calling this repeatedly for the same method appends further annotations
    /// in registration order.
    #[must_use]
    pub fn annotate(
        mut self,
        controller: impl Into<String>,
        method: impl Into<String>,
        annotation: RouteAnnotation,
    ) -> Self {
        self.entries
            .entry((controller.into(), method.into()))
            .or_default()
            .push(annotation);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AnnotationSource for AnnotationTable {
    fn method_annotations(&self, action: &ActionRef) -> Result<Vec<RouteAnnotation>, ParseError> {
        Ok(self
            .entries
            .get(&(action.controller.clone(), action.method.clone()))
            .cloned()
            .unwrap_or_default())
    }
}
