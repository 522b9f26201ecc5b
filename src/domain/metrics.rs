// src/domain/metrics.rs

use crate::domain::listing::Listing;
use rand::Rng;

/// Figure shown on the dashboard while it is rendering demo data.
pub const DEMO_TONNES_DIVERTED: f64 = 104.2;

/// Ambattur Industrial Estate, Chennai.
pub const HUB_POSITION: (f64, f64) = (13.0983, 80.1622);

/// Half-width, in degrees, of the box listing markers are scattered in.
const MARKER_SPREAD: f64 = 0.02;

/// CO2-e mitigation per week, in kg.
pub const CO2_WEEKLY: [(&str, u32); 4] = [
    ("Week 1", 1200),
    ("Week 2", 1900),
    ("Week 3", 1500),
    ("This Week", 2200),
];

/// Sum of `rawVolume`, rounded to one decimal.
pub fn total_diverted(listings: &[Listing]) -> f64 {
    let total: f64 = listings.iter().map(|l| l.raw_volume).sum();
    (total * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub lat: f64,
    pub lon: f64,
    pub title: String,
    pub lines: Vec<String>,
}

/// One marker per listing, scattered around the hub. Positions are cosmetic
/// and change on every render.
pub fn listing_markers<R: Rng>(rng: &mut R, listings: &[Listing]) -> Vec<MapMarker> {
    let (lat, lon) = HUB_POSITION;
    listings
        .iter()
        .map(|l| MapMarker {
            lat: lat + rng.gen_range(-MARKER_SPREAD..MARKER_SPREAD),
            lon: lon + rng.gen_range(-MARKER_SPREAD..MARKER_SPREAD),
            title: l.display_name().to_string(),
            lines: vec![
                format!("{} Tonnes", crate::domain::listing::format_quantity(l.raw_volume)),
                l.routing.clone(),
            ],
        })
        .collect()
}

pub fn hub_marker() -> MapMarker {
    MapMarker {
        lat: HUB_POSITION.0,
        lon: HUB_POSITION.1,
        title: "Ambattur Industrial Estate".into(),
        lines: vec!["Central Hub".into()],
    }
}
