use std::sync::Arc;

use http::Method;
use tracing::debug;

use crate::constraint::{HostConstraint, HttpMethodConstraint, RouteConstraint};

use super::{GroupBuilder, TemplateBuilder};

/// Well-known constraint name used by the HTTP method helpers.
pub const HTTP_METHOD_CONSTRAINT: &str = "httpMethod";
/// Well-known constraint name used by the host helpers.
pub const HOST_CONSTRAINT: &str = "host";

/// Common surface of the route- and group-scoped constraint stages
///
/// `add_constraint` carries the scope's merge policy (overwrite for a route,
/// add-if-absent for a group); the provided helpers attach the built-in
/// constraints under their well-known names and keep the chain going.
///
/// # Example
///
/// ```rust,ignore
/// use fluentroute::{ConstraintBuilder, FluentRoutingExt, RouteCollection};
/// use http::Method;
///
/// let mut table = RouteCollection::new();
/// table.for_handler(&contact, |group| {
///     group.create_route("contact").to_method("Index", [])?
///         .create_route("contact").to_method("Post", [])?
///             .with_constraints().http_method(Method::POST)
///         .with_group_constraints().http_method(Method::GET);
///     Ok(())
/// })?;
/// ```
pub trait ConstraintBuilder: Sized {
    /// Add a constraint under `name`, following the scope's merge policy
    fn add_constraint(&mut self, name: &str, constraint: Arc<dyn RouteConstraint>);

    /// Allow a single HTTP method
    fn http_method(self, method: Method) -> Self {
        self.http_methods(&[method])
    }

    /// Allow a set of HTTP methods, in the given order
    fn http_methods(mut self, methods: &[Method]) -> Self {
        self.add_constraint(
            HTTP_METHOD_CONSTRAINT,
            Arc::new(HttpMethodConstraint::new(methods.iter().cloned())),
        );
        self
    }

    /// Allow a set of HTTP methods given as raw names
    fn http_method_names(mut self, methods: &[&str]) -> Self {
        self.add_constraint(
            HTTP_METHOD_CONSTRAINT,
            Arc::new(HttpMethodConstraint::from_names(methods.iter().copied())),
        );
        self
    }

    /// Allow a single host
    fn host(self, host: &str) -> Self {
        self.hosts(&[host])
    }

    /// Allow a set of hosts, in the given order
    fn hosts(mut self, hosts: &[&str]) -> Self {
        self.add_constraint(
            HOST_CONSTRAINT,
            Arc::new(HostConstraint::new(hosts.iter().copied())),
        );
        self
    }

    /// Attach a caller-supplied constraint under `name`
    fn custom(mut self, name: &str, constraint: Arc<dyn RouteConstraint>) -> Self {
        self.add_constraint(name, constraint);
        self
    }
}

/// Route-scoped constraint stage
///
/// Bound to one descriptor in the group; `add_constraint` always sets or
/// overwrites the entry under the given name. Chain continuations return to
/// the group to create further routes or apply group constraints.
pub struct RouteConstraints<'g> {
    group: &'g mut GroupBuilder,
    index: usize,
}

impl<'g> RouteConstraints<'g> {
    pub(crate) fn new(group: &'g mut GroupBuilder, index: usize) -> Self {
        Self { group, index }
    }

    /// Start the next route in the same group
    pub fn create_route(self, template: impl Into<String>) -> TemplateBuilder<'g> {
        self.group.create_route(template)
    }

    /// Apply constraints across the group's current membership
    pub fn with_group_constraints(self) -> GroupConstraints<'g> {
        GroupConstraints::new(self.group)
    }
}

impl ConstraintBuilder for RouteConstraints<'_> {
    fn add_constraint(&mut self, name: &str, constraint: Arc<dyn RouteConstraint>) {
        let route = self
            .group
            .group_mut()
            .route_mut(self.index)
            .expect("route index handed out by the owning group");
        route.constraints_mut().set(name, constraint);
    }
}

/// Group-scoped constraint stage
///
/// Applies a constraint to every route currently in the group, skipping
/// routes that already carry a constraint under the same name — per-route
/// constraints win. Routes added to the group afterwards are unaffected;
/// group constraint application is a point-in-time operation.
pub struct GroupConstraints<'g> {
    group: &'g mut GroupBuilder,
}

impl<'g> GroupConstraints<'g> {
    pub(crate) fn new(group: &'g mut GroupBuilder) -> Self {
        Self { group }
    }

    /// Add a constraint built per route by `factory`
    ///
    /// The factory runs once for each route lacking an entry under `name`,
    /// for constraint types that must not share instances across routes. A
    /// ready-made `Arc` via [`ConstraintBuilder::add_constraint`] is the
    /// shared-instance alternative, safe for stateless constraints.
    pub fn add_constraint_with<F>(&mut self, name: &str, factory: F)
    where
        F: Fn() -> Arc<dyn RouteConstraint>,
    {
        let mut applied = 0usize;
        for route in self.group.group_mut().routes_mut() {
            if route.constraints().contains(name) {
                continue;
            }
            route.constraints_mut().set(name, factory());
            applied += 1;
        }
        debug!(constraint = name, applied, "Group constraint applied");
    }
}

impl ConstraintBuilder for GroupConstraints<'_> {
    fn add_constraint(&mut self, name: &str, constraint: Arc<dyn RouteConstraint>) {
        let mut applied = 0usize;
        for route in self.group.group_mut().routes_mut() {
            if route
                .constraints_mut()
                .add_if_absent(name, Arc::clone(&constraint))
            {
                applied += 1;
            }
        }
        debug!(constraint = name, applied, "Group constraint applied");
    }
}
