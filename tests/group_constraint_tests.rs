use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use fluentroute::{
    ConstraintBuilder, FluentRoutingExt, HandlerSpec, HostConstraint, HttpMethodConstraint,
    MethodSpec, RequestContext, RouteCollection, RouteConstraint, RouteDescriptor, RouteDirection,
    RouteValues, RoutingError, HTTP_METHOD_CONSTRAINT,
};
use http::Method;

use tracing_util::init_tracing;

fn contact_handler() -> HandlerSpec {
    HandlerSpec::new("ContactController")
        .method(MethodSpec::new("Index"))
        .method(MethodSpec::new("Post").parameter("message", serde_json::Value::Null))
}

fn allowed_methods(route: &RouteDescriptor) -> Vec<String> {
    let constraint = route
        .constraints()
        .get(HTTP_METHOD_CONSTRAINT)
        .expect("method constraint attached");
    // Exercise the constraint through its capability: probe each verb.
    let values = RouteValues::new();
    [Method::GET, Method::POST, Method::PUT, Method::DELETE]
        .into_iter()
        .filter(|m| {
            constraint
                .matches(
                    &RequestContext::new(m.clone(), "localhost"),
                    route,
                    HTTP_METHOD_CONSTRAINT,
                    &values,
                    RouteDirection::IncomingRequest,
                )
                .unwrap()
        })
        .map(|m| m.as_str().to_string())
        .collect()
}

#[test]
fn test_group_constraint_applies_to_all_unconstrained_routes() {
    init_tracing();
    let mut table = RouteCollection::new();
    let contact = contact_handler();
    table
        .for_handler(&contact, |group| {
            group
                .create_route("contact")
                .to_method("Index", [])?
                .create_route("contact")
                .to_method("Post", [])?
                .with_group_constraints()
                .http_method(Method::GET);
            Ok(())
        })
        .unwrap();

    for route in table.iter() {
        assert_eq!(allowed_methods(route), vec!["GET"]);
    }
}

#[test]
fn test_route_constraint_wins_over_group_constraint() {
    // The demo chain from the contact configuration: the POST route declares
    // its own method constraint before the blanket GET policy is applied.
    let mut table = RouteCollection::new();
    let contact = contact_handler();
    table
        .for_handler(&contact, |group| {
            group
                .create_route("contact")
                .to_method("Index", [])?
                .create_route("contact")
                .to_method("Post", [])?
                .with_constraints()
                .http_method(Method::POST)
                .with_group_constraints()
                .http_method(Method::GET);
            Ok(())
        })
        .unwrap();

    let routes: Vec<&RouteDescriptor> = table.iter().collect();
    assert_eq!(allowed_methods(routes[0]), vec!["GET"]);
    assert_eq!(allowed_methods(routes[1]), vec!["POST"]);
}

#[test]
fn test_group_constraint_application_is_point_in_time() {
    let mut table = RouteCollection::new();
    let contact = contact_handler();
    table
        .for_handler(&contact, |group| {
            group
                .create_route("a")
                .to_method("Index", [])?
                .with_group_constraints()
                .http_method(Method::GET);
            group.create_route("b").to_method("Post", [])?;
            Ok(())
        })
        .unwrap();

    let routes: Vec<&RouteDescriptor> = table.iter().collect();
    assert!(routes[0].constraints().contains(HTTP_METHOD_CONSTRAINT));
    // The route added after the group constraint ran is untouched.
    assert!(routes[1].constraints().is_empty());
}

#[test]
fn test_group_constraint_is_idempotent_for_present_names() {
    let mut table = RouteCollection::new();
    let contact = contact_handler();
    table
        .for_handler(&contact, |group| {
            group
                .create_route("a")
                .to_method("Index", [])?
                .with_constraints()
                .hosts(&["localhost"])
                .with_group_constraints()
                .hosts(&["remotehost"]);
            Ok(())
        })
        .unwrap();

    let route = table.iter().next().unwrap();
    let values = RouteValues::new();
    let constraint = route.constraints().get("host").unwrap();
    // Still the route-level constraint: localhost matches, remotehost not.
    assert!(constraint
        .matches(
            &RequestContext::new(Method::GET, "localhost"),
            route,
            "host",
            &values,
            RouteDirection::IncomingRequest,
        )
        .unwrap());
    assert!(!constraint
        .matches(
            &RequestContext::new(Method::GET, "remotehost"),
            route,
            "host",
            &values,
            RouteDirection::IncomingRequest,
        )
        .unwrap());
}

#[test]
fn test_constraint_factory_runs_once_per_lacking_route() {
    let mut table = RouteCollection::new();
    let contact = contact_handler();
    let invocations = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&invocations);

    table
        .for_handler(&contact, |group| {
            group
                .create_route("a")
                .to_method("Index", [])?
                .create_route("b")
                .to_method("Post", [])?
                .create_route("c")
                .to_method("Index", [])?
                .with_constraints()
                .hosts(&["localhost"]);

            group.with_group_constraints().add_constraint_with("host", || {
                counter.fetch_add(1, Ordering::SeqCst);
                Arc::new(HostConstraint::new(["remotehost"]))
            });
            Ok(())
        })
        .unwrap();

    // Two routes lacked a host constraint; the third kept its own.
    assert_eq!(invocations.load(Ordering::SeqCst), 2);
}

#[test]
fn test_custom_constraint_attaches_under_caller_name() {
    struct AlwaysFalse;

    impl RouteConstraint for AlwaysFalse {
        fn matches(
            &self,
            _request: &RequestContext,
            _route: &RouteDescriptor,
            _parameter_name: &str,
            _values: &RouteValues,
            _direction: RouteDirection,
        ) -> Result<bool, RoutingError> {
            Ok(false)
        }
    }

    let mut table = RouteCollection::new();
    let contact = contact_handler();
    table
        .for_handler(&contact, |group| {
            group
                .create_route("a")
                .to_method("Index", [])?
                .with_constraints()
                .custom("maintenance", Arc::new(AlwaysFalse));
            Ok(())
        })
        .unwrap();

    let route = table.iter().next().unwrap();
    assert!(route.constraints().contains("maintenance"));
}

#[test]
fn test_route_scoped_add_overwrites_existing_name() {
    let mut table = RouteCollection::new();
    let contact = contact_handler();
    table
        .for_handler(&contact, |group| {
            // Route-scoped sets under the same name replace each other.
            group
                .create_route("a")
                .to_method("Index", [])?
                .with_constraints()
                .http_method(Method::GET)
                .custom(
                    HTTP_METHOD_CONSTRAINT,
                    Arc::new(HttpMethodConstraint::new([Method::POST])),
                );
            Ok(())
        })
        .unwrap();

    let route = table.iter().next().unwrap();
    assert_eq!(allowed_methods(route), vec!["POST"]);
}
