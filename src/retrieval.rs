// src/retrieval.rs
//
// Shared fetch-with-fallback used by every page that lists byproducts.

use crate::domain::{demo, Listing};
use crate::store::{ListingBackend, OrderKey};
use rand::Rng;

/// Defaults filled into live rows that predate the price/status columns.
#[derive(Debug, Clone, Copy)]
pub struct RowDefaults {
    pub status: &'static str,
    /// Half-open range the demo price is drawn from.
    pub price_range: (u32, u32),
}

/// How one page reads the collection.
#[derive(Debug, Clone, Copy)]
pub struct RetrievalProfile {
    pub name: &'static str,
    pub order: OrderKey,
    pub demo: fn() -> Vec<Listing>,
    pub defaults: Option<RowDefaults>,
}

impl RetrievalProfile {
    pub const DASHBOARD: RetrievalProfile = RetrievalProfile {
        name: "dashboard",
        order: OrderKey::Id,
        demo: demo::dashboard_listings,
        defaults: None,
    };

    pub const EXPLORER: RetrievalProfile = RetrievalProfile {
        name: "explorer",
        order: OrderKey::CreatedAt,
        demo: demo::explorer_listings,
        defaults: Some(RowDefaults {
            status: "Available",
            price_range: (5000, 15000),
        }),
    };
}

/// Result of one fetch. Callers that only render can ignore the variant;
/// the distinction is kept so real data can be told apart from demo data.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Live(Vec<Listing>),
    EmptyFallback(Vec<Listing>),
    ErrorFallback { listings: Vec<Listing>, error: String },
}

impl FetchOutcome {
    pub fn listings(&self) -> &[Listing] {
        match self {
            FetchOutcome::Live(l) | FetchOutcome::EmptyFallback(l) => l,
            FetchOutcome::ErrorFallback { listings, .. } => listings,
        }
    }

    pub fn into_listings(self) -> Vec<Listing> {
        match self {
            FetchOutcome::Live(l) | FetchOutcome::EmptyFallback(l) => l,
            FetchOutcome::ErrorFallback { listings, .. } => listings,
        }
    }

    pub fn is_demo(&self) -> bool {
        !matches!(self, FetchOutcome::Live(_))
    }
}

/// Read every listing, newest first. One attempt; any failure or an empty
/// result degrades to the profile's demo set.
pub fn fetch_all<R: Rng>(
    backend: &dyn ListingBackend,
    profile: &RetrievalProfile,
    rng: &mut R,
) -> FetchOutcome {
    match backend.select_all(profile.order, false) {
        Err(e) => {
            tracing::warn!(page = profile.name, error = %e, "listing fetch failed, using demo data");
            FetchOutcome::ErrorFallback {
                listings: (profile.demo)(),
                error: e.to_string(),
            }
        }
        Ok(rows) if rows.is_empty() => {
            tracing::debug!(page = profile.name, "no listings stored, using demo data");
            FetchOutcome::EmptyFallback((profile.demo)())
        }
        Ok(mut rows) => {
            if let Some(defaults) = &profile.defaults {
                for row in &mut rows {
                    apply_defaults(row, defaults, rng);
                }
            }
            tracing::debug!(page = profile.name, count = rows.len(), "listings fetched");
            FetchOutcome::Live(rows)
        }
    }
}

/// Zero prices and blank statuses count as missing.
fn apply_defaults<R: Rng>(row: &mut Listing, defaults: &RowDefaults, rng: &mut R) {
    if row.price_inr.map_or(true, |p| p == 0.0) {
        let (lo, hi) = defaults.price_range;
        row.price_inr = Some(f64::from(rng.gen_range(lo..hi)));
    }
    if row.status.as_deref().map_or(true, str::is_empty) {
        row.status = Some(defaults.status.to_string());
    }
}
