use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::constraint::{ConstraintSet, InlineConstraintResolver};
use crate::errors::RoutingError;
use crate::handler::HandlerCall;
use crate::route::RouteValues;

/// One routable endpoint: template, name, handler identity, defaults, and
/// constraints
///
/// Produced by the fluent builder and handed to the route table at
/// registration. Template and handler/action identity are fixed at
/// construction; the name, defaults, and constraints stay mutable until the
/// descriptor is registered, after which it is owned by the routing engine.
#[derive(Clone)]
pub struct RouteDescriptor {
    name: Option<String>,
    template: String,
    handler_name: String,
    action_name: String,
    defaults: RouteValues,
    constraints: ConstraintSet,
    inline_resolver: Option<Arc<dyn InlineConstraintResolver>>,
}

impl RouteDescriptor {
    /// Build a descriptor for a template bound to a resolved handler call
    ///
    /// Seeds the defaults with `controller` and `action` entries derived from
    /// the call, then merges the call's parameter defaults without
    /// overwriting — a call-site parameter that happens to be named `action`
    /// or `controller` never displaces the derived identity.
    ///
    /// # Errors
    ///
    /// `InvalidTemplate` if the template begins with a forward slash. The
    /// error carries the template together with the action and handler names
    /// for diagnosis.
    pub fn new(template: impl Into<String>, call: &HandlerCall) -> Result<Self, RoutingError> {
        let template = template.into();
        if template.starts_with('/') {
            return Err(RoutingError::InvalidTemplate {
                template,
                action: call.action_name().to_string(),
                handler: call.handler_type().to_string(),
            });
        }

        let mut defaults = RouteValues::new();
        defaults.insert("controller", Value::String(call.handler_name().to_string()));
        defaults.insert("action", Value::String(call.action_name().to_string()));
        defaults.merge_missing(call.defaults());

        Ok(Self {
            name: None,
            template,
            handler_name: call.handler_name().to_string(),
            action_name: call.action_name().to_string(),
            defaults,
            constraints: ConstraintSet::new(),
            inline_resolver: None,
        })
    }

    /// Registration name, if one was set
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set or clear the registration name
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// The route template, uninterpreted
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Derived handler name (conventional suffix stripped)
    #[must_use]
    pub fn handler_name(&self) -> &str {
        &self.handler_name
    }

    /// Derived action name (conventional suffix stripped)
    #[must_use]
    pub fn action_name(&self) -> &str {
        &self.action_name
    }

    /// Default route values, `controller` and `action` included
    #[must_use]
    pub fn defaults(&self) -> &RouteValues {
        &self.defaults
    }

    /// Mutable access to the defaults
    pub fn defaults_mut(&mut self) -> &mut RouteValues {
        &mut self.defaults
    }

    /// The route's constraints
    #[must_use]
    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Mutable access to the constraints
    pub fn constraints_mut(&mut self) -> &mut ConstraintSet {
        &mut self.constraints
    }

    /// Resolver the engine should use for inline constraints in the template
    #[must_use]
    pub fn inline_resolver(&self) -> Option<&Arc<dyn InlineConstraintResolver>> {
        self.inline_resolver.as_ref()
    }

    /// Attach an inline constraint resolver for the engine
    pub fn set_inline_resolver(&mut self, resolver: Option<Arc<dyn InlineConstraintResolver>>) {
        self.inline_resolver = resolver;
    }
}

impl fmt::Debug for RouteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDescriptor")
            .field("name", &self.name)
            .field("template", &self.template)
            .field("handler_name", &self.handler_name)
            .field("action_name", &self.action_name)
            .field("defaults", &self.defaults)
            .field("constraints", &self.constraints)
            .finish()
    }
}
