//! # Route Module
//!
//! The data side of the builder: [`RouteValues`] (ordered name/value map used
//! for route defaults and generation parameters), [`RouteDescriptor`] (one
//! routable endpoint), and [`RouteGroup`] (an ordered collection of
//! descriptors configured together).

mod descriptor;
mod group;
mod values;

pub use descriptor::RouteDescriptor;
pub use group::RouteGroup;
pub use values::RouteValues;
