//! # FluentRoute
//!
//! **FluentRoute** is a fluent, build-time route table builder for Rust. It
//! produces route descriptors — template, name, handler/action identity,
//! default values, and a constraint set — and registers them into a
//! caller-supplied route table. The hard parts of routing (URL matching,
//! dispatch, inline-constraint parsing, URL generation) stay with the host
//! routing engine behind narrow traits; this crate is the configuration
//! surface in front of it.
//!
//! ## Architecture
//!
//! The library is organized into five modules:
//!
//! - **[`handler`]** - Explicit handler/method descriptors and call
//!   resolution (suffix stripping, default diffing)
//! - **[`route`]** - Route descriptors, ordered default values, route groups
//! - **[`constraint`]** - The constraint capability, the built-in HTTP method
//!   and host constraints, and the inline-resolver boundary
//! - **[`builder`]** - The fluent chain: group, template, route, and
//!   constraint stages
//! - **[`table`]** - The `RouteRegistry` boundary, an in-memory
//!   `RouteCollection`, and the `for_handler` / `for_group` / `map` entry
//!   points
//!
//! ## Quick Start
//!
//! ```no_run
//! use fluentroute::{
//!     ConstraintBuilder, FluentRoutingExt, HandlerSpec, MethodSpec, RouteCollection,
//! };
//! use http::Method;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), fluentroute::RoutingError> {
//! let home = HandlerSpec::new("HomeController")
//!     .method(MethodSpec::new("Index"))
//!     .method(MethodSpec::new("Find").parameter("id", json!(0)));
//!
//! let mut table = RouteCollection::new();
//! table.for_handler(&home, |group| {
//!     group
//!         .create_route("")
//!         .with_name("home")?
//!         .to_method("Index", [])?
//!         .create_route("find/{id}")
//!         .to_method("Find", [json!(0)])?
//!         .with_group_constraints()
//!         .http_method(Method::GET);
//!     Ok(())
//! })?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Key Behaviors
//!
//! - **Typed references instead of strings**: a route targets a handler
//!   method through a declared [`HandlerSpec`], so handler name, action name,
//!   and parameter defaults are derived from one declaration instead of
//!   drifting across string literals.
//! - **Default diffing**: only call-site arguments that differ from the
//!   declared parameter defaults land in a route's defaults, in declaration
//!   order.
//! - **First-wins group constraints**: a group-wide constraint never
//!   overwrites a constraint a route already declared under the same name,
//!   so individual routes opt out of blanket policies by declaring first.
//! - **Fail-fast configuration**: every error (leading-slash template,
//!   unresolvable handler call, empty name) surfaces at the configuring call;
//!   a group either registers whole or not at all.
//!
//! ## What this crate does not do
//!
//! No URL matching, no dispatch, no inline-constraint syntax parsing, no
//! I/O. Descriptors are handed to the engine through [`RouteRegistry`]; the
//! engine evaluates constraints through [`RouteConstraint`] in both routing
//! directions.

pub mod builder;
pub mod constraint;
pub mod errors;
pub mod handler;
pub mod route;
pub mod table;

pub use builder::{
    ConstraintBuilder, GroupBuilder, GroupConstraints, MapBuilder, RouteBuilder, RouteConstraints,
    TemplateBuilder, HOST_CONSTRAINT, HTTP_METHOD_CONSTRAINT,
};
pub use constraint::{
    ConstraintSet, HostConstraint, HttpMethodConstraint, InlineConstraintResolver, RequestContext,
    RouteConstraint, RouteDirection,
};
pub use errors::RoutingError;
pub use handler::{HandlerCall, HandlerSpec, MethodSpec, ParameterSpec};
pub use route::{RouteDescriptor, RouteGroup, RouteValues};
pub use table::{FluentRoutingExt, RouteCollection, RouteRegistry};
