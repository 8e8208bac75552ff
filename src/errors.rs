use std::fmt;

/// Route configuration error
///
/// Returned by the fluent builder surface and by built-in constraints when a
/// route cannot be turned into a valid descriptor. All variants are produced
/// synchronously at the call that received the bad input; nothing is deferred
/// to request time except [`RoutingError::InvalidOperation`], which a
/// constraint raises while evaluating URL-generation values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// A required input was empty
    ///
    /// Raised immediately by the call that received the value, e.g. an empty
    /// route name or action name.
    InvalidArgument {
        /// Description of the offending input
        what: &'static str,
    },
    /// A route template begins with a forward slash
    ///
    /// Templates are relative to the table root; a leading `/` is rejected at
    /// construction time with the action and handler attached for diagnosis.
    InvalidTemplate {
        /// The offending template
        template: String,
        /// Action name the template was being mapped to
        action: String,
        /// Handler type name the template was being mapped to
        handler: String,
    },
    /// A handler call could not be resolved to a single handler/action pair
    ///
    /// Raised when the named method is not declared on the handler spec, when
    /// more arguments are supplied than the method declares, or when a group
    /// has no handler spec bound.
    InvalidReference {
        /// Handler type name (unstripped)
        handler: String,
        /// Method name as supplied by the caller
        method: String,
        /// Why resolution failed
        reason: String,
    },
    /// A constraint received an incompatible value type
    ///
    /// Raised at match time when a URL-generation value under the constrained
    /// parameter name is present but not a string.
    InvalidOperation {
        /// The constrained parameter name
        parameter: String,
        /// Template of the route the constraint is attached to
        template: String,
    },
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingError::InvalidArgument { what } => {
                write!(f, "Value cannot be empty: {}.", what)
            }
            RoutingError::InvalidTemplate {
                template,
                action,
                handler,
            } => {
                write!(
                    f,
                    "The route template '{}' on the action named '{}' on the handler named '{}' \
                    cannot begin with a forward slash.",
                    template, action, handler
                )
            }
            RoutingError::InvalidReference {
                handler,
                method,
                reason,
            } => {
                write!(
                    f,
                    "Cannot resolve '{}' on '{}' to a single handler action: {}.",
                    method, handler, reason
                )
            }
            RoutingError::InvalidOperation {
                parameter,
                template,
            } => {
                write!(
                    f,
                    "The constraint for route parameter '{}' on the route with template '{}' \
                    must have a string value.",
                    parameter, template
                )
            }
        }
    }
}

impl std::error::Error for RoutingError {}
