use crate::errors::RoutingError;
use crate::handler::HandlerCall;
use crate::route::RouteGroup;

use super::{GroupBuilder, RouteBuilder};

/// Maps one resolved handler call to one or more route templates
///
/// Obtained through [`FluentRoutingExt::map`]. Each `to_route` call validates
/// the template against the bound call and adds a descriptor to the group;
/// the group registers when the configurator returns.
///
/// # Example
///
/// ```rust,ignore
/// use fluentroute::{FluentRoutingExt, RouteCollection};
///
/// let mut table = RouteCollection::new();
/// table.map(&home.call("Index", [])?, |map| {
///     map.to_route("home")?
///        .to_route_with("start", |route| {
///            route.with_name("start")?;
///            Ok(())
///        })?;
///     Ok(())
/// })?;
/// ```
///
/// [`FluentRoutingExt::map`]: crate::table::FluentRoutingExt::map
pub struct MapBuilder {
    group: GroupBuilder,
    call: HandlerCall,
}

impl MapBuilder {
    pub(crate) fn new(call: HandlerCall) -> Self {
        Self {
            group: GroupBuilder::new(None),
            call,
        }
    }

    /// Map the bound call under another template
    ///
    /// # Errors
    ///
    /// `InvalidTemplate` if the template begins with a forward slash.
    pub fn to_route(&mut self, template: impl Into<String>) -> Result<&mut Self, RoutingError> {
        let call = self.call.clone();
        self.group.create_route(template).to(call)?;
        Ok(self)
    }

    /// Map the bound call under another template, with per-route configuration
    ///
    /// The configurator receives the route stage for the descriptor just
    /// created and may rename it, override its action, or attach constraints.
    ///
    /// # Errors
    ///
    /// `InvalidTemplate` as for [`MapBuilder::to_route`], plus whatever the
    /// configurator returns.
    pub fn to_route_with<F>(
        &mut self,
        template: impl Into<String>,
        configure: F,
    ) -> Result<&mut Self, RoutingError>
    where
        F: FnOnce(RouteBuilder<'_>) -> Result<(), RoutingError>,
    {
        let call = self.call.clone();
        let route = self.group.create_route(template).to(call)?;
        configure(route)?;
        Ok(self)
    }

    pub(crate) fn into_group(self) -> RouteGroup {
        self.group.into_group()
    }
}
