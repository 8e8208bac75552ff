//! # Constraint Module
//!
//! Constraints are predicates attached to a route under a name, evaluated by
//! the routing engine in two directions: matching an incoming request and
//! generating an outgoing URL. This module provides the [`RouteConstraint`]
//! capability, the per-route [`ConstraintSet`], the two built-in constraints
//! ([`HttpMethodConstraint`], [`HostConstraint`]), and the
//! [`InlineConstraintResolver`] boundary through which inline template
//! syntax (`{id:range(0,100)}`) is delegated to the host engine.
//!
//! Two merge policies exist, depending on scope:
//!
//! - route-scoped constraint builders always overwrite an existing entry
//!   under the same name;
//! - group-scoped constraint builders add only where the name is absent, so
//!   a route opts out of a blanket group policy by declaring its own
//!   constraint under that name first.

mod core;
mod host;
mod http_method;

pub use self::core::{
    ConstraintSet, InlineConstraintResolver, RequestContext, RouteConstraint, RouteDirection,
};
pub use host::HostConstraint;
pub use http_method::HttpMethodConstraint;
