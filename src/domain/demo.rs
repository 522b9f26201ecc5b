// src/domain/demo.rs
//
// Hardcoded listings shown when the live collection is empty or unreachable.
// The dashboard and the explorer each carry their own set.

use crate::domain::listing::Listing;
use chrono::Utc;

pub const HUB_ROUTING: &str = "Ambattur Node → Match Engine";

pub fn dashboard_listings() -> Vec<Listing> {
    let now = Utc::now().to_rfc3339();
    [
        (1, "High-Grade Copper Wire", "3.2 km", 15.5),
        (2, "Industrial Cotton Offcuts", "5.8 km", 22.3),
        (3, "PET Plastic Scrap", "2.1 km", 18.7),
    ]
    .into_iter()
    .map(|(id, material, distance, raw_volume)| Listing {
        id,
        material: material.to_string(),
        custom_material: None,
        routing: HUB_ROUTING.to_string(),
        distance: distance.to_string(),
        raw_volume,
        price_inr: None,
        photo_url: None,
        status: None,
        created_at: now.clone(),
    })
    .collect()
}

pub fn explorer_listings() -> Vec<Listing> {
    [
        (101, "Copper Wire", "Chennai", "4.2 km", 5.5, 12500.0),
        (102, "Steel Scraps", "Ambattur", "2.1 km", 12.0, 8500.0),
        (103, "Plastic Pellets", "Guindy", "8.5 km", 3.2, 4200.0),
    ]
    .into_iter()
    .map(|(id, material, routing, distance, raw_volume, price)| Listing {
        id,
        material: material.to_string(),
        custom_material: None,
        routing: routing.to_string(),
        distance: distance.to_string(),
        raw_volume,
        price_inr: Some(price),
        photo_url: None,
        status: Some("Available".to_string()),
        created_at: String::new(),
    })
    .collect()
}
