// src/tests/router_tests/search_tests.rs
use crate::ai::gateway::stubs::StubProvider;
use crate::ai::{FAILURE_SUMMARY, UNAVAILABLE_SUMMARY};
use crate::errors::ServerError;
use crate::session::token;
use crate::tests::utils::{app_with_ai, post_form, redirect_target, test_app, Visitor};
use std::sync::atomic::Ordering;

#[test]
fn classic_search_for_austin_finds_the_pool_villa() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);

    let resp = visitor.post("/search/classic", "location=austin&adults=2&children=0&pets=0");
    assert_eq!(resp.status(), 303);
    assert_eq!(redirect_target(&resp), "/");

    let body = visitor.page("/");
    assert!(body.contains("Hill Country Pool Villa"));
    assert!(body.contains("Searching for"));
    assert!(body.contains("austin"));
    assert!(body.contains("2 guests"));
    assert!(!body.contains("Alpine A-Frame Retreat"));
}

#[test]
fn guest_floor_applies_and_pets_do_not_count() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);

    visitor.post("/search/classic", "location=&adults=7&children=0&pets=3");
    let body = visitor.page("/");

    assert!(body.contains("Oceanfront Glass House"));
    assert!(body.contains("Hill Country Pool Villa"));
    assert!(body.contains("Lakeside Log Cabin"));
    assert!(!body.contains("Alpine A-Frame Retreat"));
}

#[test]
fn flexible_region_searches_everywhere() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);

    // The region button wins over whatever was typed.
    visitor.post("/search/classic", "location=kyoto&region=&adults=9");
    let body = visitor.page("/");

    assert!(body.contains("Hill Country Pool Villa"));
    assert!(!body.contains("Machiya Townhouse"));
}

#[test]
fn region_shortcut_matches_location_text() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);

    visitor.post("/search/classic", "region=Japan&adults=1");
    let body = visitor.page("/");

    assert!(body.contains("Machiya Townhouse with Private Onsen"));
    assert!(!body.contains("Left Bank Artist Loft"));
}

#[test]
fn classic_search_without_matches_shows_empty_state() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);

    visitor.post("/search/classic", "location=Atlantis&adults=1");
    let body = visitor.page("/");

    assert!(body.contains("No exact matches found"));
    assert!(body.contains("Clear all filters"));
}

#[test]
fn non_numeric_guest_count_is_rejected() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);

    let err = visitor
        .send(post_form("/search/classic", "location=Paris&adults=lots"))
        .unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn ai_search_without_key_degrades_to_empty_result() {
    let app = test_app();
    let visitor = Visitor::arrive(&app);

    visitor.post("/search/ai", "query=a+cabin+with+a+pool");
    let body = visitor.page("/");

    assert!(body.contains(UNAVAILABLE_SUMMARY));
    assert!(body.contains("No exact matches found"));
}

#[test]
fn ai_picks_are_shown_in_catalog_order() {
    let provider = StubProvider::answering(
        r#"{"recommendedPropertyIds":["12","99","5"],"summary":"Two stays with great pools"}"#,
    );
    let calls = provider.calls.clone();
    let app = app_with_ai(provider);
    let visitor = Visitor::arrive(&app);

    visitor.post("/search/ai", "query=somewhere+with+a+pool");
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let body = visitor.page("/");
    assert!(body.contains("StayEase Genius Found Matches"));
    assert!(body.contains("Two stays with great pools"));
    let austin = body.find("Hill Country Pool Villa").unwrap();
    let rio = body.find("Copacabana Rooftop Penthouse").unwrap();
    assert!(austin < rio);
    assert!(!body.contains("Alpine A-Frame Retreat"));
}

#[test]
fn ai_failure_shows_apology() {
    let app = app_with_ai(StubProvider::failing("connection reset"));
    let visitor = Visitor::arrive(&app);

    visitor.post("/search/ai", "query=beach");
    let body = visitor.page("/");

    assert!(FAILURE_SUMMARY.contains("genius brain"));
    assert!(body.contains("genius brain"));
    assert!(body.contains("No exact matches found"));
}

#[test]
fn blank_ai_query_never_reaches_provider() {
    let provider = StubProvider::answering(r#"{"recommendedPropertyIds":[],"summary":""}"#);
    let calls = provider.calls.clone();
    let app = app_with_ai(provider);
    let visitor = Visitor::arrive(&app);

    let resp = visitor.post("/search/ai", "query=+++");
    assert_eq!(redirect_target(&resp), "/");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(visitor.page("/").contains("Stays in Colorado"));
}

#[test]
fn oversized_ai_query_is_rejected_before_the_provider() {
    let provider = StubProvider::answering(r#"{"recommendedPropertyIds":["1"],"summary":"ok"}"#);
    let calls = provider.calls.clone();
    let app = app_with_ai(provider);
    let visitor = Visitor::arrive(&app);

    let body = format!("query={}", "pool+".repeat(4_000));
    let err = visitor.send(post_form("/search/ai", &body)).unwrap_err();

    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn second_ai_search_while_one_runs_is_conflict() {
    let app = app_with_ai(StubProvider::answering(
        r#"{"recommendedPropertyIds":["1"],"summary":"ok"}"#,
    ));
    let visitor = Visitor::arrive(&app);

    let token = visitor.cookie.trim_start_matches(&format!("{}=", token::COOKIE_NAME));
    let (key, _) = app.sessions.resolve(Some(token)).unwrap();
    let _running = app.sessions.begin_ai_search(key).unwrap();

    let err = visitor
        .send(post_form("/search/ai", "query=cabins"))
        .unwrap_err();
    assert!(matches!(err, ServerError::Conflict(_)));
}

#[test]
fn filter_chosen_during_ai_search_wins() {
    let app = app_with_ai(StubProvider::answering(
        r#"{"recommendedPropertyIds":["2"],"summary":"Beach pick"}"#,
    ));
    let visitor = Visitor::arrive(&app);

    let token = visitor.cookie.trim_start_matches(&format!("{}=", token::COOKIE_NAME));
    let (key, _) = app.sessions.resolve(Some(token)).unwrap();
    let ticket = app.sessions.begin_ai_search(key).unwrap();

    visitor.post("/filters/category", "category=Arctic");
    let matches = app.gateway.search("beach", app.catalog.listings());
    assert!(!app.sessions.finish_ai_search(key, ticket, matches).unwrap());

    let body = visitor.page("/");
    assert!(body.contains("Aurora Glass Igloo"));
    assert!(!body.contains("Beach pick"));
}
