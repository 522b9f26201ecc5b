// src/tests/router_tests/settings_tests.rs

use crate::router::handle;
use crate::templates::pages::settings::SETTINGS_SAVED;
use crate::tests::utils::{body_string, get, memory_app, post_form, MemoryBackend};
use std::sync::Arc;

#[test]
fn buyer_view_is_default() {
    let app = memory_app(Arc::new(MemoryBackend::default()));

    let body = body_string(handle(get("/settings"), &app).unwrap());
    assert!(body.contains("Logistics Constraints"));
    assert!(body.contains("Alert me for Copper Wire"));
    assert!(!body.contains("Instant Bid Acceptance"));
    assert!(!body.contains(SETTINGS_SAVED));
    assert!(body.contains(r#"onsubmit="this.querySelector('button[type=submit]').disabled = true""#));
    assert!(!body.contains("hx-disabled-elt"));
}

#[test]
fn seller_view_shows_verification() {
    let app = memory_app(Arc::new(MemoryBackend::default()));

    let body = body_string(handle(get("/settings?role=seller"), &app).unwrap());
    assert!(body.contains("Upload Phase-1 Chemical Safety Certificate"));
    assert!(body.contains("Instant Bid Acceptance"));
    assert!(!body.contains("Logistics Constraints"));
    assert!(body.contains("sk_live_51M..."));
}

#[test]
fn saving_confirms_and_keeps_role() {
    let app = memory_app(Arc::new(MemoryBackend::default()));

    let resp = handle(
        post_form("/settings?role=seller", "company=Acme&instant_accept=on"),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let body = body_string(resp);
    assert!(body.contains(SETTINGS_SAVED));
    assert!(body.contains("Instant Bid Acceptance"));
}
