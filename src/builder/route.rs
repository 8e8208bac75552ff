use serde_json::Value;

use crate::errors::RoutingError;
use crate::route::RouteDescriptor;

use super::{GroupBuilder, GroupConstraints, RouteConstraints, TemplateBuilder};

/// Stage bound to the route most recently added to the group
///
/// Continues the fluent chain: start the next route in the same group, adjust
/// the current route's name or action, or move to a constraint stage.
pub struct RouteBuilder<'g> {
    group: &'g mut GroupBuilder,
    index: usize,
}

impl<'g> RouteBuilder<'g> {
    pub(crate) fn new(group: &'g mut GroupBuilder, index: usize) -> Self {
        Self { group, index }
    }

    /// Start the next route in the same group
    pub fn create_route(self, template: impl Into<String>) -> TemplateBuilder<'g> {
        self.group.create_route(template)
    }

    /// Set the route's registration name
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the name is empty.
    pub fn with_name(mut self, name: impl Into<String>) -> Result<Self, RoutingError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RoutingError::InvalidArgument { what: "route name" });
        }
        self.route_mut().set_name(Some(name));
        Ok(self)
    }

    /// Override the action this route dispatches to
    ///
    /// Writes `defaults["action"]` directly with overwrite semantics, so an
    /// explicit action name always wins over the resolver-derived one,
    /// wherever it appears in the chain.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the name is empty.
    pub fn with_action_name(mut self, action_name: impl Into<String>) -> Result<Self, RoutingError> {
        let action_name = action_name.into();
        if action_name.is_empty() {
            return Err(RoutingError::InvalidArgument {
                what: "action name",
            });
        }
        self.route_mut()
            .defaults_mut()
            .insert("action", Value::String(action_name));
        Ok(self)
    }

    /// Apply constraints to this route
    ///
    /// Route-scoped constraints always overwrite an existing entry under the
    /// same name.
    pub fn with_constraints(self) -> RouteConstraints<'g> {
        RouteConstraints::new(self.group, self.index)
    }

    /// Apply constraints across the group's current membership
    pub fn with_group_constraints(self) -> GroupConstraints<'g> {
        GroupConstraints::new(self.group)
    }

    /// The route being configured
    #[must_use]
    pub fn route(&self) -> &RouteDescriptor {
        &self.group.routes()[self.index]
    }

    fn route_mut(&mut self) -> &mut RouteDescriptor {
        // The index was handed out by the group when this route was pushed.
        self.group
            .group_mut()
            .route_mut(self.index)
            .expect("route index handed out by the owning group")
    }
}
