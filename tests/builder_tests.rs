use std::sync::Arc;

use fluentroute::{
    FluentRoutingExt, HandlerSpec, InlineConstraintResolver, MethodSpec, RouteCollection,
    RouteConstraint, RoutingError,
};
use serde_json::{json, Value};

use tracing_util::init_tracing;

fn home_handler() -> HandlerSpec {
    HandlerSpec::new("HomeController")
        .method(MethodSpec::new("Index"))
        .method(MethodSpec::new("Find").parameter("id", json!(0)))
}

fn contact_handler() -> HandlerSpec {
    HandlerSpec::new("ContactController")
        .method(MethodSpec::new("Index"))
        .method(MethodSpec::new("PostAsync").parameter("message", Value::Null))
}

#[test]
fn test_two_routes_register_in_declaration_order() {
    init_tracing();
    let mut table = RouteCollection::new();
    let home = home_handler();
    table
        .for_handler(&home, |group| {
            group
                .create_route("a")
                .to_method("Index", [])?
                .create_route("b")
                .to_method("Find", [json!(1)])?;
            Ok(())
        })
        .unwrap();

    assert_eq!(table.len(), 2);
    let templates: Vec<&str> = table.iter().map(|r| r.template()).collect();
    assert_eq!(templates, vec!["a", "b"]);
}

#[test]
fn test_leading_slash_template_is_rejected() {
    let mut table = RouteCollection::new();
    let home = home_handler();
    let err = table
        .for_handler(&home, |group| {
            group.create_route("/home").to_method("Index", [])?;
            Ok(())
        })
        .unwrap_err();

    match err {
        RoutingError::InvalidTemplate {
            template,
            action,
            handler,
        } => {
            assert_eq!(template, "/home");
            assert_eq!(action, "Index");
            assert_eq!(handler, "HomeController");
        }
        other => panic!("expected InvalidTemplate, got {other:?}"),
    }
    // Fail-fast: nothing from the failing group lands in the table.
    assert!(table.is_empty());
}

#[test]
fn test_empty_template_is_allowed() {
    let mut table = RouteCollection::new();
    let home = home_handler();
    table
        .for_handler(&home, |group| {
            group.create_route("").to_method("Index", [])?;
            Ok(())
        })
        .unwrap();
    assert_eq!(table.len(), 1);
}

#[test]
fn test_route_name_attaches_at_registration() {
    let mut table = RouteCollection::new();
    let home = home_handler();
    table
        .for_handler(&home, |group| {
            group
                .create_route("")
                .with_name("home")?
                .to_method("Index", [])?;
            Ok(())
        })
        .unwrap();

    let route = table.get("home").expect("named route registered");
    assert_eq!(route.template(), "");
    assert_eq!(route.handler_name(), "Home");
}

#[test]
fn test_template_stage_rejects_empty_route_name() {
    let mut table = RouteCollection::new();
    let home = home_handler();
    let err = table
        .for_handler(&home, |group| {
            group.create_route("").with_name("")?.to_method("Index", [])?;
            Ok(())
        })
        .unwrap_err();
    assert!(matches!(
        err,
        RoutingError::InvalidArgument { what: "route name" }
    ));
    assert!(table.is_empty());
}

#[test]
fn test_unnamed_route_registers_anonymously() {
    let mut table = RouteCollection::new();
    let home = home_handler();
    table
        .for_handler(&home, |group| {
            group.create_route("a").to_method("Index", [])?;
            Ok(())
        })
        .unwrap();
    assert_eq!(table.iter().next().unwrap().name(), None);
}

#[test]
fn test_defaults_seeded_with_controller_and_action() {
    let mut table = RouteCollection::new();
    let contact = contact_handler();
    table
        .for_handler(&contact, |group| {
            group
                .create_route("contact")
                .to_method("PostAsync", [json!("hello")])?;
            Ok(())
        })
        .unwrap();

    let route = table.iter().next().unwrap();
    assert_eq!(route.handler_name(), "Contact");
    assert_eq!(route.action_name(), "Post");
    assert_eq!(route.defaults().get("controller"), Some(&json!("Contact")));
    assert_eq!(route.defaults().get("action"), Some(&json!("Post")));
    assert_eq!(route.defaults().get("message"), Some(&json!("hello")));
}

#[test]
fn test_argument_equal_to_declared_default_is_omitted() {
    let mut table = RouteCollection::new();
    let home = home_handler();
    table
        .for_handler(&home, |group| {
            group.create_route("find").to_method("Find", [json!(0)])?;
            Ok(())
        })
        .unwrap();

    let route = table.iter().next().unwrap();
    assert!(route.defaults().get("id").is_none());
}

#[test]
fn test_with_action_name_overrides_resolved_action() {
    let mut table = RouteCollection::new();
    let home = home_handler();
    table
        .for_handler(&home, |group| {
            group
                .create_route("")
                .to_method("Index", [])?
                .with_action_name("testAction")?;
            Ok(())
        })
        .unwrap();

    let route = table.iter().next().unwrap();
    assert_eq!(route.defaults().get("action"), Some(&json!("testAction")));
}

#[test]
fn test_with_action_name_rejects_empty() {
    let mut table = RouteCollection::new();
    let home = home_handler();
    let err = table
        .for_handler(&home, |group| {
            group
                .create_route("")
                .to_method("Index", [])?
                .with_action_name("")?;
            Ok(())
        })
        .unwrap_err();
    assert!(matches!(
        err,
        RoutingError::InvalidArgument { what: "action name" }
    ));
}

#[test]
fn test_unbound_group_rejects_to_method() {
    let mut table = RouteCollection::new();
    let err = table
        .for_group(|group| {
            group.create_route("a").to_method("Index", [])?;
            Ok(())
        })
        .unwrap_err();
    assert!(matches!(err, RoutingError::InvalidReference { .. }));
}

#[test]
fn test_for_group_accepts_resolved_calls_across_handlers() {
    let mut table = RouteCollection::new();
    let home = home_handler();
    let contact = contact_handler();
    table
        .for_group(|group| {
            group
                .create_route("")
                .to(home.call("Index", [])?)?
                .create_route("contact")
                .to(contact.call("Index", [])?)?;
            Ok(())
        })
        .unwrap();

    let handlers: Vec<&str> = table.iter().map(|r| r.handler_name()).collect();
    assert_eq!(handlers, vec!["Home", "Contact"]);
}

#[test]
fn test_inline_resolver_threads_group_wide_with_route_override() {
    struct StubResolver;

    impl InlineConstraintResolver for StubResolver {
        fn resolve(
            &self,
            _constraint_name: &str,
            _argument: Option<&str>,
        ) -> Option<Arc<dyn RouteConstraint>> {
            None
        }
    }

    let group_resolver: Arc<dyn InlineConstraintResolver> = Arc::new(StubResolver);
    let route_resolver: Arc<dyn InlineConstraintResolver> = Arc::new(StubResolver);

    let mut table = RouteCollection::new();
    let home = home_handler();
    table
        .for_handler(&home, |group| {
            group.with_inline_constraint_resolver(Arc::clone(&group_resolver));
            group
                .create_route("a")
                .to_method("Index", [])?
                .create_route("b")
                .with_inline_constraint_resolver(Arc::clone(&route_resolver))
                .to_method("Find", [json!(1)])?;
            Ok(())
        })
        .unwrap();

    let routes: Vec<_> = table.iter().collect();
    let on_a = routes[0].inline_resolver().expect("group resolver threaded");
    assert!(Arc::ptr_eq(on_a, &group_resolver));
    let on_b = routes[1].inline_resolver().expect("route resolver attached");
    assert!(Arc::ptr_eq(on_b, &route_resolver));
}

#[test]
fn test_routes_without_resolver_carry_none() {
    let mut table = RouteCollection::new();
    let home = home_handler();
    table
        .for_handler(&home, |group| {
            group.create_route("a").to_method("Index", [])?;
            Ok(())
        })
        .unwrap();
    assert!(table.iter().next().unwrap().inline_resolver().is_none());
}

#[test]
fn test_map_registers_one_call_under_multiple_templates() {
    let mut table = RouteCollection::new();
    let home = home_handler();
    let call = home.call("Index", []).unwrap();
    table
        .map(&call, |map| {
            map.to_route("home")?
                .to_route_with("start", |route| {
                    route.with_name("start")?;
                    Ok(())
                })?;
            Ok(())
        })
        .unwrap();

    assert_eq!(table.len(), 2);
    let templates: Vec<&str> = table.iter().map(|r| r.template()).collect();
    assert_eq!(templates, vec!["home", "start"]);
    assert!(table.get("start").is_some());
}

#[test]
fn test_map_rejects_leading_slash_template() {
    let mut table = RouteCollection::new();
    let home = home_handler();
    let call = home.call("Index", []).unwrap();
    let err = table
        .map(&call, |map| {
            map.to_route("/home")?;
            Ok(())
        })
        .unwrap_err();
    assert!(matches!(err, RoutingError::InvalidTemplate { .. }));
    assert!(table.is_empty());
}

#[test]
fn test_groups_register_independently() {
    let mut table = RouteCollection::new();
    let home = home_handler();
    let contact = contact_handler();
    table
        .for_handler(&home, |group| {
            group.create_route("").to_method("Index", [])?;
            Ok(())
        })
        .unwrap()
        .for_handler(&contact, |group| {
            group.create_route("contact").to_method("Index", [])?;
            Ok(())
        })
        .unwrap();

    assert_eq!(table.len(), 2);
}
