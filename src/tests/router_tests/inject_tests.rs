// src/tests/router_tests/inject_tests.rs

use crate::router::handle;
use crate::store::{ListingBackend, OrderKey};
use crate::submission::{BAD_VOLUME, INSERT_FAILED, MISSING_FIELDS};
use crate::tests::utils::{
    body_string, get, location, memory_app, post_form, sqlite_app, MemoryBackend,
};
use std::sync::Arc;

const ALUMINUM: &str =
    "material=Other&custom_material=Recycled+Aluminum&volume=7.5&price=9000&photo=lot.jpg&certified=on";

#[test]
fn inject_form_lists_classifications() {
    let app = memory_app(Arc::new(MemoryBackend::default()));

    let body = body_string(handle(get("/inject"), &app).unwrap());
    for material in [
        "High-Grade Copper Wire",
        "Industrial Cotton Offcuts",
        "PET Plastic Scrap",
        "Machined Steel Shavings",
        "Other",
    ] {
        assert!(body.contains(&format!(r#"value="{material}""#)), "{material}");
    }
    assert!(body.contains(r#"name="certified""#));
}

#[test]
fn custom_material_field_follows_the_select() {
    let app = memory_app(Arc::new(MemoryBackend::default()));

    let body = body_string(handle(get("/inject"), &app).unwrap());
    assert!(body.contains(r#"<div id="other-field" class="other-field hidden">"#));
    assert!(body.contains(
        r#"onchange="document.getElementById('other-field').classList.toggle('hidden', this.value != 'Other')""#
    ));

    // A re-rendered "Other" submission keeps the field open.
    let form = ALUMINUM.replace("&certified=on", "");
    let body = body_string(handle(post_form("/inject", &form), &app).unwrap());
    assert!(body.contains(r#"<div id="other-field" class="other-field">"#));
}

#[test]
fn submit_button_shows_pending_text_without_htmx() {
    let app = memory_app(Arc::new(MemoryBackend::default()));

    let body = body_string(handle(get("/inject"), &app).unwrap());
    assert!(body.contains(r#"onsubmit="this.querySelector('button[type=submit]').disabled = true""#));
    assert!(!body.contains("hx-disabled-elt"));
    assert!(body.contains("Calculating Haulage..."));
}

#[test]
fn successful_injection_redirects_and_persists() {
    let (_dir, app, backend) = sqlite_app();

    let resp = handle(post_form("/inject", ALUMINUM), &app).expect("Inject handler failed");
    assert_eq!(resp.status().as_u16(), 303);
    assert_eq!(location(&resp), "/");

    let rows = backend.select_all(OrderKey::Id, false).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].material, "Recycled Aluminum");
    assert_eq!(rows[0].raw_volume, 7.5);
    assert_eq!(rows[0].routing, "Ambattur Node → Match Engine");
    assert!(rows[0].distance.ends_with(" km"));

    // The new row is what the dashboard now shows.
    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains("Recycled Aluminum"));
    assert!(body.contains(r#"data-source="live""#));
}

#[test]
fn uncertified_injection_is_rejected_without_insert() {
    let backend = Arc::new(MemoryBackend::default());
    let app = memory_app(backend.clone());

    let form = ALUMINUM.replace("&certified=on", "");
    let resp = handle(post_form("/inject", &form), &app).unwrap();
    assert_eq!(resp.status().as_u16(), 400);

    let body = body_string(resp);
    assert!(body.contains(MISSING_FIELDS));
    assert!(backend.inserted().is_empty());
}

#[test]
fn non_numeric_volume_is_rejected() {
    let backend = Arc::new(MemoryBackend::default());
    let app = memory_app(backend.clone());

    let form = ALUMINUM.replace("volume=7.5", "volume=lots");
    let resp = handle(post_form("/inject", &form), &app).unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    assert!(body_string(resp).contains(BAD_VOLUME));
    assert!(backend.inserted().is_empty());
}

#[test]
fn insert_failure_keeps_entered_values() {
    let backend = Arc::new(MemoryBackend::read_only(Vec::new()));
    let app = memory_app(backend.clone());

    let resp = handle(post_form("/inject", ALUMINUM), &app).unwrap();
    assert_eq!(resp.status().as_u16(), 502);

    let body = body_string(resp);
    assert!(body.contains(INSERT_FAILED));
    assert!(body.contains(r#"value="Recycled Aluminum""#));
    assert!(body.contains(r#"value="7.5""#));
    assert!(body.contains(r#"value="9000""#));
    assert!(body.contains(r#"<option value="Other" selected>"#));
    assert!(backend.inserted().is_empty());
}

#[test]
fn non_form_body_is_bad_request() {
    let app = memory_app(Arc::new(MemoryBackend::default()));

    let req = http::Request::builder()
        .method(http::Method::POST)
        .uri("/inject")
        .header("Content-Type", "application/json")
        .body(astra::Body::from(r#"{"material":"Other"}"#))
        .unwrap();

    let result = handle(req, &app);
    assert!(matches!(result, Err(crate::errors::ServerError::BadRequest(_))));
}
