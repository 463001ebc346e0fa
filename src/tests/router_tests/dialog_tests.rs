// src/tests/router_tests/dialog_tests.rs
use crate::ai::gateway::stubs::StubProvider;
use crate::ai::UNAVAILABLE_SUMMARY;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{app_with_ai, body_string, get, post_form, test_app, Visitor};

#[test]
fn search_dialog_opens_on_genius_tab() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);
    let body = visitor.page("/dialogs/search");

    assert!(body.contains("Genius Search"));
    assert!(body.contains(r#"hx-post="/search/ai""#));
    assert!(body.contains("hx-disabled-elt"));
    assert!(body.contains(UNAVAILABLE_SUMMARY));
    assert!(!body.contains("<html"));
}

#[test]
fn search_dialog_hides_notice_when_ai_is_configured() {
    let app = app_with_ai(StubProvider::answering("{}"));
    let visitor = Visitor::arrive(&app);

    assert!(!visitor.page("/dialogs/search").contains(UNAVAILABLE_SUMMARY));
}

#[test]
fn classic_tab_offers_regions_and_counters() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);
    let body = visitor.page("/dialogs/search?tab=classic");

    assert!(body.contains("Search by region"));
    assert!(body.contains("flexible"));
    assert!(body.contains(r#"name="region" value="Brazil""#));
    assert!(body.contains(r#"name="adults" min="1""#));
    assert!(body.contains(r#"name="pets""#));
}

#[test]
fn share_dialog_links_back_to_listing() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);
    let body = visitor.page("/dialogs/share?propertyId=7");

    assert!(body.contains("Share this place"));
    assert!(body.contains(r#"value="http://stays.test/?propertyId=7""#));
    assert!(body.contains("https://wa.me/?text="));
    assert!(body.contains("facebook.com/sharer"));
}

#[test]
fn share_and_gallery_need_a_known_listing() {
    let app = test_app();

    assert!(matches!(
        handle(get("/dialogs/share"), &app),
        Err(ServerError::BadRequest(_))
    ));
    assert!(matches!(
        handle(get("/dialogs/gallery?propertyId=nope"), &app),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn gallery_dialog_shows_five_images() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);
    let body = visitor.page("/dialogs/gallery?propertyId=9");

    assert_eq!(body.matches("<img").count(), 5);
    assert!(body.contains("stayease-9"));
}

#[test]
fn auth_dialog_carries_listing_to_save() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);

    let body = visitor.page("/dialogs/auth?propertyId=2");
    assert!(body.contains(r#"name="propertyId" value="2""#));
    assert!(body.contains("+91"));

    let body = visitor.page("/dialogs/auth");
    assert!(!body.contains(r#"name="propertyId""#));
}

#[test]
fn language_dialog_marks_current_language() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);
    let body = visitor.page("/dialogs/language");

    assert!(body.contains("日本語"));
    let button_for = |code: &str| {
        let at = body.find(&format!(r#"value="{code}""#)).unwrap();
        let start = body[..at].rfind("<button").unwrap();
        let end = at + body[at..].find('>').unwrap();
        body[start..end].to_string()
    };
    assert!(button_for("en").contains("active"));
    assert!(!button_for("ja").contains("active"));
}

#[test]
fn help_request_is_acknowledged() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);

    assert!(visitor.page("/dialogs/help").contains("Full Name"));

    let resp = visitor.post("/help", "name=Ana&phone=555&unit=104&message=No+hot+water");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Request Received!"));

    let err = visitor
        .send(post_form("/help", "name=Ana&phone=555"))
        .unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn close_returns_empty_fragment() {
    let app = test_app();
    let resp = handle(get("/dialogs/close"), &app).unwrap();

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).is_empty());
}
