// src/tests/router_tests/explorer_tests.rs

use crate::domain::Listing;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, memory_app, MemoryBackend};
use crate::templates::pages::explorer::CONTRACT_INITIATED;
use astra::Body;
use http::{Method, Request};
use std::sync::Arc;

fn listing(id: i64, material: &str, price: Option<f64>) -> Listing {
    Listing {
        id,
        material: material.into(),
        custom_material: None,
        routing: "Ambattur".into(),
        distance: "3.0 km".into(),
        raw_volume: 2.0,
        price_inr: price,
        photo_url: None,
        status: None,
        created_at: "2025-05-01T09:00:00Z".into(),
    }
}

fn position(body: &str, id: i64) -> usize {
    body.find(&format!(r#"data-id="{id}""#))
        .unwrap_or_else(|| panic!("listing {id} not rendered"))
}

fn contract_request(id: &str, htmx: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(format!("/data/contract/{id}"));
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    builder.body(Body::empty()).unwrap()
}

#[test]
fn explorer_sorts_by_price() {
    let app = memory_app(Arc::new(MemoryBackend::with_rows(vec![
        listing(1, "Copper Wire Coils", Some(9000.0)),
        listing(2, "Steel Offcuts", Some(3000.0)),
        listing(3, "Cotton Bales", Some(12000.0)),
    ])));

    let body = body_string(handle(get("/data?sort=price_asc"), &app).unwrap());
    assert!(position(&body, 2) < position(&body, 1));
    assert!(position(&body, 1) < position(&body, 3));

    let body = body_string(handle(get("/data?sort=price_desc"), &app).unwrap());
    assert!(position(&body, 3) < position(&body, 1));
    assert!(position(&body, 1) < position(&body, 2));
    assert!(body.contains("₹12,000"));
}

#[test]
fn default_sort_is_cheapest_first() {
    let app = memory_app(Arc::new(MemoryBackend::with_rows(vec![
        listing(1, "Copper Wire Coils", Some(9000.0)),
        listing(2, "Steel Offcuts", Some(3000.0)),
    ])));

    let body = body_string(handle(get("/data"), &app).unwrap());
    assert!(position(&body, 2) < position(&body, 1));
    assert!(body.contains(r#"<option value="price_asc" selected>"#));
}

#[test]
fn search_is_case_insensitive_substring() {
    let app = memory_app(Arc::new(MemoryBackend::with_rows(vec![
        listing(1, "Copper Wire Coils", Some(9000.0)),
        listing(2, "Steel Offcuts", Some(3000.0)),
    ])));

    let body = body_string(handle(get("/data?q=cOPPer"), &app).unwrap());
    assert!(body.contains(r#"data-id="1""#));
    assert!(!body.contains(r#"data-id="2""#));
    assert!(body.contains(r#"value="cOPPer""#));

    let body = body_string(handle(get("/data?q=titanium"), &app).unwrap());
    assert!(body.contains("No materials match your search."));
}

#[test]
fn live_rows_get_default_status_and_price() {
    let app = memory_app(Arc::new(MemoryBackend::with_rows(vec![listing(
        7,
        "Machined Steel Shavings",
        None,
    )])));

    let body = body_string(handle(get("/data"), &app).unwrap());
    assert!(body.contains("Available"));
    assert!(!body.contains(">₹0<"));
    assert!(body.contains("3.0 km away"));
}

#[test]
fn unreachable_store_shows_demo_catalogue() {
    let app = memory_app(Arc::new(MemoryBackend::failing()));

    let body = body_string(handle(get("/data"), &app).expect("Explorer handler failed"));
    for id in [101, 102, 103] {
        position(&body, id);
    }
    // Cheapest first: Plastic Pellets (4200) then Steel Scraps (8500) then Copper Wire.
    assert!(position(&body, 103) < position(&body, 102));
    assert!(position(&body, 102) < position(&body, 101));
    assert!(body.contains("₹12,500"));
}

#[test]
fn contract_over_htmx_returns_fragment() {
    let app = memory_app(Arc::new(MemoryBackend::failing()));

    let resp = handle(contract_request("101", true), &app).expect("Contract handler failed");
    assert_eq!(resp.status().as_u16(), 200);

    let body = body_string(resp);
    assert!(body.contains(CONTRACT_INITIATED));
    assert!(!body.contains("<html"));
}

#[test]
fn contract_without_htmx_renders_page_with_flash() {
    let app = memory_app(Arc::new(MemoryBackend::failing()));

    let body = body_string(handle(contract_request("102", false), &app).unwrap());
    assert!(body.contains("<html"));
    assert!(body.contains(CONTRACT_INITIATED));
    assert!(body.contains("Marketplace Explorer"));
}

#[test]
fn contract_with_bad_id_is_rejected() {
    let app = memory_app(Arc::new(MemoryBackend::default()));

    let result = handle(contract_request("abc", true), &app);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn unknown_sort_is_shown_as_unsorted() {
    let app = memory_app(Arc::new(MemoryBackend::with_rows(vec![
        listing(1, "Copper Wire Coils", Some(9000.0)),
        listing(2, "Steel Offcuts", Some(3000.0)),
    ])));

    let body = body_string(handle(get("/data?sort=newest"), &app).unwrap());
    // Store order is kept and the select says so.
    assert!(position(&body, 1) < position(&body, 2));
    assert!(body.contains(r#"<option value="" selected>Unsorted</option>"#));
    assert!(!body.contains(r#"<option value="price_asc" selected>"#));

    let body = body_string(handle(get("/data"), &app).unwrap());
    assert!(!body.contains("Unsorted"));
}
