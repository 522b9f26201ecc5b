// src/tests/router_tests/login_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, location, memory_app, post_form, MemoryBackend};
use std::sync::Arc;

#[test]
fn login_defaults_to_buyer() {
    let app = memory_app(Arc::new(MemoryBackend::default()));

    let resp = handle(get("/login"), &app).expect("Login handler failed");
    assert_eq!(resp.status().as_u16(), 200);

    let body = body_string(resp);
    assert!(body.contains("Sign In to Buy"));
    assert!(body.contains(r#"name="user_type" value="buyer""#));
    // Bare layout, no sidebar navigation.
    assert!(!body.contains("Inject Material"));
}

#[test]
fn seller_toggle_changes_call_to_action() {
    let app = memory_app(Arc::new(MemoryBackend::default()));

    let body = body_string(handle(get("/login?as=seller"), &app).unwrap());
    assert!(body.contains("Sign In to Sell"));
    assert!(body.contains(r#"value="seller""#));
}

#[test]
fn blank_credentials_are_rejected() {
    let app = memory_app(Arc::new(MemoryBackend::default()));

    let resp = handle(post_form("/login", "user_type=seller&username=ravi&password="), &app).unwrap();
    assert_eq!(resp.status().as_u16(), 400);

    let body = body_string(resp);
    assert!(body.contains("Username and password are required"));
    assert!(body.contains(r#"value="ravi""#));
    assert!(body.contains("Sign In to Sell"));
}

#[test]
fn any_filled_credentials_reach_dashboard() {
    let app = memory_app(Arc::new(MemoryBackend::default()));

    let resp = handle(
        post_form("/login", "user_type=buyer&username=ops&password=anything"),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status().as_u16(), 303);
    assert_eq!(location(&resp), "/");
}
