//! # Builder Module
//!
//! The fluent chain that turns templates and handler calls into route
//! descriptors. Each stage owns a mutable borrow of the group being built and
//! hands it to the next stage, so the chain reads like the configuration it
//! describes while ownership stays explicit:
//!
//! ```text
//! GroupBuilder ── create_route ──▶ TemplateBuilder ── to / to_method ──▶ RouteBuilder
//!      ▲                                                    │
//!      └───────────── create_route / constraint stages ─────┘
//! ```
//!
//! Constraint stages come in two scopes with different merge policies:
//! [`RouteConstraints`] overwrites, [`GroupConstraints`] fills in only where
//! a route has no constraint under the name. Apply route constraints before
//! group constraints; the group stage never displaces what a route already
//! declared.

mod constraints;
mod group;
mod map;
mod route;
mod template;

pub use constraints::{
    ConstraintBuilder, GroupConstraints, RouteConstraints, HOST_CONSTRAINT,
    HTTP_METHOD_CONSTRAINT,
};
pub use group::GroupBuilder;
pub use map::MapBuilder;
pub use route::RouteBuilder;
pub use template::TemplateBuilder;
