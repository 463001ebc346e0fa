// src/tests/router_tests/details_tests.rs
use crate::domain::gallery::STOCK_INTERIORS;
use crate::errors::ServerError;
use crate::tests::utils::{post_form, redirect_target, test_app, Visitor};

/// Attribute values come back HTML-escaped.
fn escaped(url: &str) -> String {
    url.replace('&', "&amp;")
}

#[test]
fn deep_link_renders_details_with_quote() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);
    let body = visitor.page("/?propertyId=1");

    assert!(body.contains("Alpine A-Frame Retreat"));
    assert!(body.contains("hosted by"));
    assert!(body.contains("11/14/2024"));
    assert!(body.contains("11/19/2024"));
    // 420 x 5 nights + 60 cleaning + 80 service
    assert!(body.contains("$2100"));
    assert!(body.contains("$2240"));
    assert!(!body.contains("Stays in"));
}

#[test]
fn details_gallery_uses_id_derived_stock_images() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);
    let body = visitor.page("/?propertyId=1");

    // "1" hashes to 49, so the run starts at index 9 and wraps.
    assert!(body.contains(&escaped(STOCK_INTERIORS[9])));
    assert!(body.contains(&escaped(STOCK_INTERIORS[0])));
    assert!(body.contains(&escaped(STOCK_INTERIORS[2])));
    assert!(!body.contains(&escaped(STOCK_INTERIORS[3])));
}

#[test]
fn reserving_marks_listing_reserved_for_this_visitor() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);
    assert!(!visitor.page("/?propertyId=4").contains("Reserved!"));

    let resp = visitor.post("/listings/reserve", "propertyId=4");
    assert_eq!(resp.status(), 303);
    assert_eq!(redirect_target(&resp), "/?propertyId=4");
    assert!(visitor.page("/?propertyId=4").contains("Reserved!"));

    let stranger = Visitor::arrive(&app);
    assert!(!stranger.page("/?propertyId=4").contains("Reserved!"));
}

#[test]
fn reserving_unknown_listing_is_not_found() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);

    let err = visitor
        .send(post_form("/listings/reserve", "propertyId=999"))
        .unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let err = visitor
        .send(post_form("/listings/reserve", ""))
        .unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn saving_requires_login_then_saves() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);

    // Logged out: the auth dialog comes back instead.
    let resp = visitor.post("/listings/save", "propertyId=3");
    assert_eq!(resp.status(), 200);
    let dialog = crate::tests::utils::body_string(resp);
    assert!(dialog.contains("/auth/login"));
    assert!(dialog.contains(r#"name="propertyId" value="3""#));
    assert!(!visitor.page("/?propertyId=3").contains("Saved to your list"));

    let resp = visitor.post("/auth/login", "country_code=%2B81&phone=5550100&propertyId=3");
    assert_eq!(redirect_target(&resp), "/?propertyId=3");
    assert!(visitor.page("/?propertyId=3").contains("Saved to your list"));

    // Saving again un-saves.
    visitor.post("/listings/save", "propertyId=3");
    assert!(!visitor.page("/?propertyId=3").contains("Saved to your list"));

    // Logged in now, so saving works directly.
    let resp = visitor.post("/listings/save", "propertyId=3");
    assert_eq!(resp.status(), 303);
    assert!(visitor.page("/?propertyId=3").contains("Saved to your list"));
}

#[test]
fn login_needs_a_phone_number() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);

    let err = visitor
        .send(post_form("/auth/login", "country_code=%2B1&phone=+"))
        .unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn language_switch_returns_to_listing() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);

    let resp = visitor.post("/language", "language=fr&propertyId=1");
    assert_eq!(redirect_target(&resp), "/?propertyId=1");

    let body = visitor.page("/?propertyId=1");
    assert!(body.contains(r#"lang="fr""#));
    assert!(body.contains("Réserver"));
    assert!(body.contains("FR"));

    let resp = visitor.post("/language", "language=ja");
    assert_eq!(redirect_target(&resp), "/");
    assert!(visitor.page("/").contains("どこでも"));
}

#[test]
fn unsupported_language_is_bad_request() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);

    let err = visitor
        .send(post_form("/language", "language=de"))
        .unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}
