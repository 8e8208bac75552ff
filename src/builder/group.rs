use std::sync::Arc;

use crate::constraint::InlineConstraintResolver;
use crate::handler::HandlerSpec;
use crate::route::{RouteDescriptor, RouteGroup};

use super::{GroupConstraints, TemplateBuilder};

/// Builds an ordered group of routes destined for one route table
///
/// Obtained through [`FluentRoutingExt::for_handler`],
/// [`FluentRoutingExt::for_group`], or internally by the map builder. Routes
/// created through this builder accumulate in the group; when the
/// configurator returns, the group is registered into the table in call
/// order.
///
/// [`FluentRoutingExt::for_handler`]: crate::table::FluentRoutingExt::for_handler
/// [`FluentRoutingExt::for_group`]: crate::table::FluentRoutingExt::for_group
pub struct GroupBuilder {
    group: RouteGroup,
    handler: Option<HandlerSpec>,
    resolver: Option<Arc<dyn InlineConstraintResolver>>,
}

impl GroupBuilder {
    pub(crate) fn new(handler: Option<HandlerSpec>) -> Self {
        Self {
            group: RouteGroup::new(),
            handler,
            resolver: None,
        }
    }

    /// Start a route for `template`
    ///
    /// Returns the template stage; the route joins the group once the stage's
    /// `to` or `to_method` resolves a handler call.
    pub fn create_route(&mut self, template: impl Into<String>) -> TemplateBuilder<'_> {
        TemplateBuilder::new(self, template.into())
    }

    /// Apply constraints across the group's current membership
    ///
    /// Group constraints never overwrite a constraint a route already carries
    /// under the same name, so apply route-level constraints first.
    pub fn with_group_constraints(&mut self) -> GroupConstraints<'_> {
        GroupConstraints::new(self)
    }

    /// Set the group-wide inline constraint resolver
    ///
    /// Threaded through to every descriptor created afterwards unless a route
    /// overrides it at the template stage.
    pub fn with_inline_constraint_resolver(
        &mut self,
        resolver: Arc<dyn InlineConstraintResolver>,
    ) -> &mut Self {
        self.resolver = Some(resolver);
        self
    }

    /// The group's current membership, in call order
    #[must_use]
    pub fn routes(&self) -> &[RouteDescriptor] {
        self.group.routes()
    }

    pub(crate) fn handler(&self) -> Option<&HandlerSpec> {
        self.handler.as_ref()
    }

    pub(crate) fn resolver(&self) -> Option<&Arc<dyn InlineConstraintResolver>> {
        self.resolver.as_ref()
    }

    pub(crate) fn group_mut(&mut self) -> &mut RouteGroup {
        &mut self.group
    }

    pub(crate) fn into_group(self) -> RouteGroup {
        self.group
    }
}
