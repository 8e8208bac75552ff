use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::constraint::InlineConstraintResolver;
use crate::errors::RoutingError;
use crate::handler::HandlerCall;
use crate::route::RouteDescriptor;

use super::{GroupBuilder, RouteBuilder};

/// Stage between `create_route(template)` and handler resolution
///
/// Holds the template and any pre-resolution settings (name, inline
/// constraint resolver). Consumed by [`TemplateBuilder::to`] or
/// [`TemplateBuilder::to_method`], which validate the template, build the
/// descriptor, and append it to the owning group.
pub struct TemplateBuilder<'g> {
    group: &'g mut GroupBuilder,
    template: String,
    name: Option<String>,
    resolver: Option<Arc<dyn InlineConstraintResolver>>,
}

impl<'g> TemplateBuilder<'g> {
    pub(crate) fn new(group: &'g mut GroupBuilder, template: String) -> Self {
        Self {
            group,
            template,
            name: None,
            resolver: None,
        }
    }

    /// Name the route; the name is attached when the route is registered
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the name is empty.
    pub fn with_name(mut self, name: impl Into<String>) -> Result<Self, RoutingError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RoutingError::InvalidArgument { what: "route name" });
        }
        self.name = Some(name);
        Ok(self)
    }

    /// Override the group's inline constraint resolver for this route
    #[must_use]
    pub fn with_inline_constraint_resolver(
        mut self,
        resolver: Arc<dyn InlineConstraintResolver>,
    ) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Bind the template to a resolved handler call
    ///
    /// Validates the template, builds the descriptor (defaults seeded with
    /// `controller` and `action`, then the call's parameter diffs merged
    /// without overwriting), and appends it to the group.
    ///
    /// # Errors
    ///
    /// `InvalidTemplate` if the template begins with a forward slash.
    pub fn to(self, call: HandlerCall) -> Result<RouteBuilder<'g>, RoutingError> {
        let mut route = RouteDescriptor::new(self.template, &call)?;
        route.set_name(self.name);
        let resolver = self.resolver.or_else(|| self.group.resolver().cloned());
        route.set_inline_resolver(resolver);

        debug!(
            template = %route.template(),
            handler = %route.handler_name(),
            action = %route.action_name(),
            defaults = route.defaults().len(),
            "Route created"
        );

        let index = self.group.group_mut().push(route);
        Ok(RouteBuilder::new(self.group, index))
    }

    /// Bind the template to a method of the group's bound handler
    ///
    /// Resolves `method` and `args` against the handler spec the group was
    /// created for and delegates to [`TemplateBuilder::to`].
    ///
    /// # Errors
    ///
    /// `InvalidReference` if the group has no bound handler or the call does
    /// not resolve; `InvalidTemplate` as for [`TemplateBuilder::to`].
    pub fn to_method(
        self,
        method: &str,
        args: impl IntoIterator<Item = Value>,
    ) -> Result<RouteBuilder<'g>, RoutingError> {
        let handler = self
            .group
            .handler()
            .ok_or_else(|| RoutingError::InvalidReference {
                handler: String::new(),
                method: method.to_string(),
                reason: "no handler spec is bound to this group".to_string(),
            })?;
        let call = handler.call(method, args)?;
        self.to(call)
    }
}
