// src/tests/router_tests/home_tests.rs
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{
    body_string, get, htmx, post_form, redirect_target, session_cookie, test_app, Visitor,
};

#[test]
fn first_visit_groups_by_region_and_issues_cookie() {
    let app = test_app();
    let resp = handle(get("/"), &app).unwrap();

    assert_eq!(resp.status(), 200);
    let set_cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("stayease_session="));
    assert!(set_cookie.contains("HttpOnly"));

    let body = body_string(resp);
    assert!(body.contains("Stays in Colorado"));
    assert!(body.contains("Stays in Japan"));
    assert!(body.contains("Stays in California"));
    // Colorado is the first listing, so its section comes first.
    let colorado = body.find("Stays in Colorado").unwrap();
    let california = body.find("Stays in California").unwrap();
    assert!(colorado < california);
}

#[test]
fn returning_visitor_keeps_session_without_new_cookie() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);

    let resp = visitor.send(get("/")).unwrap();
    assert!(session_cookie(&resp).is_none());
    assert_eq!(app.sessions.len(), 1);
}

#[test]
fn category_filter_shows_flat_matches_only() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);

    let resp = visitor.post("/filters/category", "category=Cabins");
    assert_eq!(resp.status(), 303);
    assert_eq!(redirect_target(&resp), "/");

    let body = visitor.page("/");
    assert!(body.contains("Alpine A-Frame Retreat"));
    assert!(body.contains("Lakeside Log Cabin"));
    assert!(!body.contains("Oceanfront Glass House"));
    assert!(!body.contains("Stays in"));
}

#[test]
fn all_category_and_reset_go_back_to_grouped_view() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);

    visitor.post("/filters/category", "category=Amazing+pools");
    assert!(!visitor.page("/").contains("Stays in"));

    visitor.post("/filters/category", "category=All");
    assert!(visitor.page("/").contains("Stays in Texas"));

    visitor.post("/filters/category", "category=Desert");
    visitor.post("/reset", "");
    assert!(visitor.page("/").contains("Stays in Texas"));
}

#[test]
fn unknown_category_is_bad_request() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);

    let err = visitor
        .send(post_form("/filters/category", "category=Igloos"))
        .unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn htmx_posts_redirect_with_header() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);

    let resp = visitor.send(htmx(post_form("/filters/clear", ""))).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("HX-Redirect").and_then(|v| v.to_str().ok()),
        Some("/")
    );
}

#[test]
fn unknown_deep_link_renders_home() {
    let app = test_app();
    let body = body_string(handle(get("/?propertyId=404"), &app).unwrap());
    assert!(body.contains("Stays in Colorado"));
}

#[test]
fn unknown_route_is_not_found() {
    let app = test_app();
    assert!(matches!(
        handle(get("/nope"), &app),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        handle(get("/dialogs/nope"), &app),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn stylesheet_is_served_as_css() {
    let app = test_app();
    let resp = handle(get("/static/main.css"), &app).unwrap();

    assert_eq!(resp.status(), 200);
    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/css"));
    assert!(body_string(resp).contains(".category-bar"));
}
