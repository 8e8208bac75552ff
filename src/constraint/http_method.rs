use http::Method;

use super::{RequestContext, RouteConstraint, RouteDirection};
use crate::errors::RoutingError;
use crate::route::{RouteDescriptor, RouteValues};

/// Restricts a route to a set of HTTP methods
///
/// On the incoming-request direction the request method must be one of the
/// allowed methods (compared ASCII-case-insensitively). On the URL-generation
/// direction the constraint always passes: the method is not a URL-shape
/// concern.
///
/// # Example
///
/// ```rust,ignore
/// use fluentroute::HttpMethodConstraint;
/// use http::Method;
///
/// let get_only = HttpMethodConstraint::new([Method::GET]);
/// let from_strings = HttpMethodConstraint::from_names(["GET"]);
/// assert_eq!(get_only.allowed_methods(), from_strings.allowed_methods());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpMethodConstraint {
    allowed_methods: Vec<String>,
}

impl HttpMethodConstraint {
    /// Create a constraint from `http::Method` values, preserving order
    #[must_use]
    pub fn new(allowed_methods: impl IntoIterator<Item = Method>) -> Self {
        Self {
            allowed_methods: allowed_methods
                .into_iter()
                .map(|m| m.as_str().to_string())
                .collect(),
        }
    }

    /// Create a constraint from raw method names, preserving order
    ///
    /// Produces the same sequence as [`HttpMethodConstraint::new`] given the
    /// equivalent methods.
    #[must_use]
    pub fn from_names<S: Into<String>>(allowed_methods: impl IntoIterator<Item = S>) -> Self {
        Self {
            allowed_methods: allowed_methods.into_iter().map(Into::into).collect(),
        }
    }

    /// The allowed method names, in construction order
    #[must_use]
    pub fn allowed_methods(&self) -> &[String] {
        &self.allowed_methods
    }
}

impl RouteConstraint for HttpMethodConstraint {
    fn matches(
        &self,
        request: &RequestContext,
        _route: &RouteDescriptor,
        _parameter_name: &str,
        _values: &RouteValues,
        direction: RouteDirection,
    ) -> Result<bool, RoutingError> {
        match direction {
            RouteDirection::IncomingRequest => Ok(self
                .allowed_methods
                .iter()
                .any(|m| m.eq_ignore_ascii_case(request.method.as_str()))),
            RouteDirection::UrlGeneration => Ok(true),
        }
    }
}
