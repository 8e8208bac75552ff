use std::fmt;
use std::sync::Arc;

use http::Method;
use smallvec::SmallVec;

use crate::errors::RoutingError;
use crate::route::{RouteDescriptor, RouteValues};

/// Direction a constraint is evaluated in
///
/// Constraints behave differently when the engine is matching an incoming
/// request versus generating an outgoing URL from route values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDirection {
    /// The engine is matching an incoming HTTP request against the route
    IncomingRequest,
    /// The engine is generating a URL from caller-supplied values
    UrlGeneration,
}

/// Minimal snapshot of the incoming request a constraint may inspect
///
/// The routing engine owns the real request type; constraints only need the
/// method and the host header value.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// HTTP method of the request
    pub method: Method,
    /// Host header value, without port
    pub host: String,
}

impl RequestContext {
    /// Create a request snapshot
    #[must_use]
    pub fn new(method: Method, host: impl Into<String>) -> Self {
        Self {
            method,
            host: host.into(),
        }
    }
}

/// Predicate attached to a route under a constraint name
///
/// Implemented by the built-in [`HttpMethodConstraint`] and
/// [`HostConstraint`] and open to arbitrary caller types. The engine calls
/// [`RouteConstraint::matches`] once per attached constraint in both
/// directions; a `false` result rejects the route, an error aborts the
/// operation.
///
/// [`HttpMethodConstraint`]: crate::constraint::HttpMethodConstraint
/// [`HostConstraint`]: crate::constraint::HostConstraint
pub trait RouteConstraint: Send + Sync {
    /// Evaluate the constraint
    ///
    /// # Arguments
    ///
    /// * `request` - Snapshot of the incoming request
    /// * `route` - The route the constraint is attached to
    /// * `parameter_name` - The constraint's name in the route's constraint set
    /// * `values` - Route values for the operation (generation parameters on
    ///   the URL-generation direction)
    /// * `direction` - Whether the engine is matching a request or generating
    ///   a URL
    fn matches(
        &self,
        request: &RequestContext,
        route: &RouteDescriptor,
        parameter_name: &str,
        values: &RouteValues,
        direction: RouteDirection,
    ) -> Result<bool, RoutingError>;
}

/// Resolves inline constraint syntax found in route templates
///
/// Templates may carry inline constraints (`{id:range(0,100)}`). Parsing and
/// resolving that syntax is the host engine's concern; this crate only
/// threads a resolver through to the finished descriptor so the engine can
/// apply it. A route-level resolver set via the template builder overrides
/// the group-wide one.
pub trait InlineConstraintResolver: Send + Sync {
    /// Resolve one inline constraint reference to a constraint object
    ///
    /// Returns `None` if the constraint name is unknown to this resolver.
    fn resolve(
        &self,
        constraint_name: &str,
        argument: Option<&str>,
    ) -> Option<Arc<dyn RouteConstraint>>;
}

/// Inline storage size for a route's constraints. Routes rarely carry more
/// than a method and a host constraint.
const MAX_INLINE_CONSTRAINTS: usize = 2;

/// Ordered mapping of constraint name to constraint object for one route
///
/// A name maps to at most one constraint. [`ConstraintSet::set`] always
/// overwrites (route-scoped policy); [`ConstraintSet::add_if_absent`] keeps
/// existing entries (group-scoped policy, so per-route constraints win over
/// blanket group constraints).
#[derive(Clone, Default)]
pub struct ConstraintSet {
    entries: SmallVec<[(String, Arc<dyn RouteConstraint>); MAX_INLINE_CONSTRAINTS]>,
}

impl ConstraintSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `constraint`, replacing any existing entry
    pub fn set(&mut self, name: impl Into<String>, constraint: Arc<dyn RouteConstraint>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, c)) => *c = constraint,
            None => self.entries.push((name, constraint)),
        }
    }

    /// Add `constraint` under `name` only if the name is absent
    ///
    /// Returns `true` if the constraint was added.
    pub fn add_if_absent(
        &mut self,
        name: impl Into<String>,
        constraint: Arc<dyn RouteConstraint>,
    ) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.entries.push((name, constraint));
        true
    }

    /// Look up a constraint by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn RouteConstraint>> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, c)| c)
    }

    /// Whether a constraint exists under `name`
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == name)
    }

    /// Iterate `(name, constraint)` entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn RouteConstraint>)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), c))
    }

    /// Constraint names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of constraints
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Constraint objects are opaque trait objects; list the names only.
        f.debug_list().entries(self.names()).finish()
    }
}
