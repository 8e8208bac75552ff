use serde_json::Value;

use super::{RequestContext, RouteConstraint, RouteDirection};
use crate::errors::RoutingError;
use crate::route::{RouteDescriptor, RouteValues};

/// Restricts a route to a set of HTTP host header values
///
/// On the incoming-request direction the request host must equal one of the
/// allowed hosts (compared ASCII-case-insensitively); an empty list matches
/// nothing.
///
/// On the URL-generation direction the constraint is advisory. Consider two
/// routes with the same template constrained to `domain-a.com` and
/// `domain-b.com` respectively: a caller generating a URL for `domain-b.com`
/// can pass `host = "domain-b.com"` in the generation values to steer
/// generation to the second route, consistent with what an incoming request
/// would match. When the caller supplies no host value, generation is
/// unconditionally permitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConstraint {
    allowed_hosts: Vec<String>,
}

impl HostConstraint {
    /// Create a constraint from allowed host names, preserving order
    #[must_use]
    pub fn new<S: Into<String>>(allowed_hosts: impl IntoIterator<Item = S>) -> Self {
        Self {
            allowed_hosts: allowed_hosts.into_iter().map(Into::into).collect(),
        }
    }

    /// The allowed host names, in construction order
    #[must_use]
    pub fn allowed_hosts(&self) -> &[String] {
        &self.allowed_hosts
    }

    fn allows(&self, host: &str) -> bool {
        self.allowed_hosts.iter().any(|h| h.eq_ignore_ascii_case(host))
    }
}

impl RouteConstraint for HostConstraint {
    fn matches(
        &self,
        request: &RequestContext,
        route: &RouteDescriptor,
        parameter_name: &str,
        values: &RouteValues,
        direction: RouteDirection,
    ) -> Result<bool, RoutingError> {
        match direction {
            RouteDirection::IncomingRequest => Ok(self.allows(&request.host)),
            RouteDirection::UrlGeneration => match values.get(parameter_name) {
                // No host supplied: the caller did not pin generation to a
                // particular host, so the constraint does not object.
                None => Ok(true),
                Some(Value::String(host)) => Ok(self.allows(host)),
                Some(_) => Err(RoutingError::InvalidOperation {
                    parameter: parameter_name.to_string(),
                    template: route.template().to_string(),
                }),
            },
        }
    }
}
