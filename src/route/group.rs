use super::RouteDescriptor;

/// An ordered collection of routes configured together
///
/// Built by one group builder; descriptors appear in call order. Group-wide
/// constraint application iterates the membership at the moment it is
/// invoked — routes added afterwards are unaffected. When the group's
/// configurator returns, the group is drained into the destination route
/// table in the same order.
#[derive(Debug, Default)]
pub struct RouteGroup {
    routes: Vec<RouteDescriptor>,
}

impl RouteGroup {
    /// Create an empty group
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a descriptor, returning its index in the group
    pub fn push(&mut self, route: RouteDescriptor) -> usize {
        self.routes.push(route);
        self.routes.len() - 1
    }

    /// The current membership, in call order
    #[must_use]
    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Mutable access to one member
    pub fn route_mut(&mut self, index: usize) -> Option<&mut RouteDescriptor> {
        self.routes.get_mut(index)
    }

    /// Iterate the membership mutably, in call order
    pub fn routes_mut(&mut self) -> impl Iterator<Item = &mut RouteDescriptor> {
        self.routes.iter_mut()
    }

    /// Number of routes in the group
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the group has no routes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl IntoIterator for RouteGroup {
    type Item = RouteDescriptor;
    type IntoIter = std::vec::IntoIter<RouteDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.into_iter()
    }
}
