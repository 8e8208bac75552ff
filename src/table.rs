//! # Table Module
//!
//! The boundary to the external routing engine and the fluent entry points.
//! [`RouteRegistry`] is the narrow interface a route table must expose;
//! [`RouteCollection`] is the in-memory implementation used in tests and by
//! hosts without a registry of their own. [`FluentRoutingExt`] is implemented
//! for every registry and provides `for_handler`, `for_group`, and `map`.

use tracing::info;

use crate::builder::{GroupBuilder, MapBuilder};
use crate::errors::RoutingError;
use crate::handler::{HandlerCall, HandlerSpec};
use crate::route::{RouteDescriptor, RouteGroup};

/// Destination registry for finished route descriptors
///
/// Implemented by the external routing engine's table. Registration is
/// append-mostly and sequential; name uniqueness is the implementation's
/// concern. An absent name is an anonymous registration.
pub trait RouteRegistry {
    /// Register a descriptor, optionally under a name
    fn add(&mut self, name: Option<String>, route: RouteDescriptor);
}

/// In-memory route table preserving registration order
#[derive(Debug, Default)]
pub struct RouteCollection {
    routes: Vec<(Option<String>, RouteDescriptor)>,
}

impl RouteCollection {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered routes
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterate descriptors in registration order
    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter().map(|(_, route)| route)
    }

    /// Look up the first route registered under `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes
            .iter()
            .find(|(n, _)| n.as_deref() == Some(name))
            .map(|(_, route)| route)
    }

    /// Print all registered routes to stdout
    ///
    /// Useful for verifying a configuration pass during development.
    pub fn dump_routes(&self) {
        println!("[routes] count={}", self.routes.len());
        for (name, route) in &self.routes {
            println!(
                "[route] {} '{}' -> {}::{}",
                name.as_deref().unwrap_or("<unnamed>"),
                route.template(),
                route.handler_name(),
                route.action_name()
            );
        }
    }
}

impl RouteRegistry for RouteCollection {
    fn add(&mut self, name: Option<String>, route: RouteDescriptor) {
        info!(
            name = name.as_deref().unwrap_or("<unnamed>"),
            template = %route.template(),
            handler = %route.handler_name(),
            action = %route.action_name(),
            constraints = route.constraints().len(),
            "Route registered"
        );
        self.routes.push((name, route));
    }
}

/// Fluent configuration entry points, available on every [`RouteRegistry`]
///
/// Each entry point runs a configurator against a fresh group and, when it
/// returns successfully, registers the group's descriptors into the table in
/// declaration order. Configuration is fail-fast: the first error aborts the
/// pass before anything from the failing group is registered.
///
/// # Example
///
/// ```rust,ignore
/// use fluentroute::{ConstraintBuilder, FluentRoutingExt, HandlerSpec, MethodSpec, RouteCollection};
/// use http::Method;
/// use serde_json::json;
///
/// let home = HandlerSpec::new("HomeController")
///     .method(MethodSpec::new("Index"))
///     .method(MethodSpec::new("Find").parameter("id", json!(0)));
///
/// let mut table = RouteCollection::new();
/// table.for_handler(&home, |group| {
///     group.create_route("").with_name("home")?.to_method("Index", [])?
///         .create_route("find/{id}").to_method("Find", [json!(0)])?
///         .with_group_constraints().http_method(Method::GET);
///     Ok(())
/// })?;
/// # Ok::<(), fluentroute::RoutingError>(())
/// ```
pub trait FluentRoutingExt: RouteRegistry {
    /// Configure a group of routes bound to one handler spec
    ///
    /// Routes in the group may target the handler's methods by name through
    /// `to_method`.
    ///
    /// # Errors
    ///
    /// Whatever the configurator returns; nothing is registered on error.
    fn for_handler<F>(&mut self, handler: &HandlerSpec, configure: F) -> Result<&mut Self, RoutingError>
    where
        F: FnOnce(&mut GroupBuilder) -> Result<(), RoutingError>,
        Self: Sized,
    {
        let mut builder = GroupBuilder::new(Some(handler.clone()));
        configure(&mut builder)?;
        register_group(self, builder.into_group());
        Ok(self)
    }

    /// Configure a group of routes with no bound handler
    ///
    /// Routes target handlers through pre-resolved calls passed to `to`.
    ///
    /// # Errors
    ///
    /// Whatever the configurator returns; nothing is registered on error.
    fn for_group<F>(&mut self, configure: F) -> Result<&mut Self, RoutingError>
    where
        F: FnOnce(&mut GroupBuilder) -> Result<(), RoutingError>,
        Self: Sized,
    {
        let mut builder = GroupBuilder::new(None);
        configure(&mut builder)?;
        register_group(self, builder.into_group());
        Ok(self)
    }

    /// Map one resolved handler call under one or more templates
    ///
    /// # Errors
    ///
    /// Whatever the configurator returns; nothing is registered on error.
    fn map<F>(&mut self, call: &HandlerCall, configure: F) -> Result<&mut Self, RoutingError>
    where
        F: FnOnce(&mut MapBuilder) -> Result<(), RoutingError>,
        Self: Sized,
    {
        let mut builder = MapBuilder::new(call.clone());
        configure(&mut builder)?;
        register_group(self, builder.into_group());
        Ok(self)
    }
}

impl<T: RouteRegistry> FluentRoutingExt for T {}

fn register_group<T: RouteRegistry + ?Sized>(table: &mut T, group: RouteGroup) {
    let routes_count = group.len();
    for route in group {
        let name = route.name().map(str::to_string);
        table.add(name, route);
    }
    info!(routes_count, "Route group registered");
}
