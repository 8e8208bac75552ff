//! # Handler Module
//!
//! The handler reference resolver. A route is mapped to a handler method by
//! describing the method explicitly — its declaring type, its name, its
//! declared parameters and their defaults — and then "calling" it with the
//! argument values the route should carry. Resolution derives a stable
//! handler/action identity and a defaults set containing only the arguments
//! that differ from their declared defaults, so the route configuration
//! cannot drift from the handler signature without the spec being updated.

use serde_json::Value;

use crate::errors::RoutingError;
use crate::route::RouteValues;

/// Conventional suffix stripped from handler type names.
const HANDLER_SUFFIX: &str = "Controller";
/// Conventional suffix stripped from method names.
const ACTION_SUFFIX: &str = "Async";

/// One declared parameter of a handler method
///
/// The declared default is the parameter's explicit default where it has one,
/// otherwise the zero value of its type (`Value::Null` for reference-like
/// parameters).
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    name: String,
    default: Value,
}

impl ParameterSpec {
    /// Describe a declared parameter
    #[must_use]
    pub fn new(name: impl Into<String>, default: Value) -> Self {
        Self {
            name: name.into(),
            default,
        }
    }

    /// Parameter name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared default value
    #[must_use]
    pub fn default_value(&self) -> &Value {
        &self.default
    }
}

/// One declared method of a handler type
///
/// # Example
///
/// ```rust,ignore
/// use fluentroute::MethodSpec;
/// use serde_json::json;
///
/// // fn inline_constraint_test(id: i64 = 0)
/// let method = MethodSpec::new("InlineConstraintTest").parameter("id", json!(0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSpec {
    name: String,
    parameters: Vec<ParameterSpec>,
}

impl MethodSpec {
    /// Describe a method by name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Append a declared parameter; call order is declaration order
    #[must_use]
    pub fn parameter(mut self, name: impl Into<String>, default: Value) -> Self {
        self.parameters.push(ParameterSpec::new(name, default));
        self
    }

    /// Method name as declared
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameters in order
    #[must_use]
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }
}

/// Describes a handler type and its routable methods
///
/// A route targets a handler method through this declaration: instead of
/// deriving the target by runtime reflection, callers declare the type and
/// its routable methods once and resolve calls against that declaration.
///
/// # Example
///
/// ```rust,ignore
/// use fluentroute::{HandlerSpec, MethodSpec};
/// use serde_json::json;
///
/// let home = HandlerSpec::new("HomeController")
///     .method(MethodSpec::new("IndexAsync"))
///     .method(MethodSpec::new("Find").parameter("id", json!(0)));
///
/// let call = home.call("Find", [json!(7)])?;
/// assert_eq!(call.handler_name(), "Home");
/// assert_eq!(call.action_name(), "Find");
/// # Ok::<(), fluentroute::RoutingError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerSpec {
    type_name: String,
    methods: Vec<MethodSpec>,
}

impl HandlerSpec {
    /// Describe a handler type by name, e.g. `"HomeController"`
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            methods: Vec::new(),
        }
    }

    /// Declare a routable method
    #[must_use]
    pub fn method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method);
        self
    }

    /// Handler type name as declared
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Type name with a trailing `Controller` stripped case-insensitively
    #[must_use]
    pub fn handler_name(&self) -> String {
        strip_suffix_ci(&self.type_name, HANDLER_SUFFIX)
    }

    /// Resolve a call to one of the declared methods
    ///
    /// Arguments are positional and pair up with the declared parameters.
    /// Trailing arguments may be omitted and count as equal to their declared
    /// defaults. Each argument that differs from its parameter's declared
    /// default lands in the call's defaults under the parameter name, in
    /// declaration order.
    ///
    /// # Errors
    ///
    /// `InvalidReference` if `method` is not declared on this spec or more
    /// arguments are supplied than the method declares.
    pub fn call(
        &self,
        method: &str,
        args: impl IntoIterator<Item = Value>,
    ) -> Result<HandlerCall, RoutingError> {
        let spec = self.methods.iter().find(|m| m.name == method).ok_or_else(|| {
            RoutingError::InvalidReference {
                handler: self.type_name.clone(),
                method: method.to_string(),
                reason: "the method is not declared on the handler spec".to_string(),
            }
        })?;

        let args: Vec<Value> = args.into_iter().collect();
        if args.len() > spec.parameters.len() {
            return Err(RoutingError::InvalidReference {
                handler: self.type_name.clone(),
                method: method.to_string(),
                reason: format!(
                    "{} arguments supplied for {} declared parameters",
                    args.len(),
                    spec.parameters.len()
                ),
            });
        }

        let mut defaults = RouteValues::new();
        for (parameter, arg) in spec.parameters.iter().zip(args) {
            if arg != parameter.default {
                defaults.insert(parameter.name.clone(), arg);
            }
        }

        Ok(HandlerCall {
            handler_type: self.type_name.clone(),
            handler_name: self.handler_name(),
            action_name: strip_suffix_ci(&spec.name, ACTION_SUFFIX),
            defaults,
        })
    }
}

/// A resolved handler call: the target of one route
///
/// Produced by [`HandlerSpec::call`] and consumed by the template builder's
/// `to` operation. Carries the derived handler/action names and the defaults
/// diffed against declared parameter defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerCall {
    handler_type: String,
    handler_name: String,
    action_name: String,
    defaults: RouteValues,
}

impl HandlerCall {
    /// Unstripped handler type name, kept for diagnostics
    #[must_use]
    pub fn handler_type(&self) -> &str {
        &self.handler_type
    }

    /// Handler name with the conventional suffix stripped
    #[must_use]
    pub fn handler_name(&self) -> &str {
        &self.handler_name
    }

    /// Action name with the conventional suffix stripped
    #[must_use]
    pub fn action_name(&self) -> &str {
        &self.action_name
    }

    /// Call-site values that differ from their declared defaults
    #[must_use]
    pub fn defaults(&self) -> &RouteValues {
        &self.defaults
    }
}

fn strip_suffix_ci(name: &str, suffix: &str) -> String {
    if name.len() >= suffix.len() && name.is_char_boundary(name.len() - suffix.len()) {
        let (head, tail) = name.split_at(name.len() - suffix.len());
        if tail.eq_ignore_ascii_case(suffix) {
            return head.to_string();
        }
    }
    name.to_string()
}
