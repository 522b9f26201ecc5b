// src/domain/view.rs

use crate::domain::listing::Listing;
use std::cmp::Ordering;

/// Ordering modes offered by the explorer's sort select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    PriceAsc,
    PriceDesc,
    /// Distance labels are free text ("4.2 km") and are not parsed, so this
    /// mode compares every pair as equal and leaves the order untouched.
    Distance,
    Unsorted,
}

impl SortKey {
    /// Parse the `sort` query value. Anything unrecognised is `Unsorted`.
    pub fn from_param(raw: &str) -> Self {
        match raw.trim() {
            "price_asc" => SortKey::PriceAsc,
            "price_desc" => SortKey::PriceDesc,
            "distance" => SortKey::Distance,
            _ => SortKey::Unsorted,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::Distance => "distance",
            SortKey::Unsorted => "",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Distance => "Distance: Nearest",
            SortKey::Unsorted => "Unsorted",
        }
    }

    /// Options rendered in the select, in display order.
    pub const OPTIONS: [SortKey; 3] = [SortKey::PriceAsc, SortKey::PriceDesc, SortKey::Distance];

    fn compare(&self, a: &Listing, b: &Listing) -> Ordering {
        match self {
            SortKey::PriceAsc => a.price_or_zero().total_cmp(&b.price_or_zero()),
            SortKey::PriceDesc => b.price_or_zero().total_cmp(&a.price_or_zero()),
            SortKey::Distance | SortKey::Unsorted => Ordering::Equal,
        }
    }
}

/// True when `needle` occurs in the material or the custom material,
/// ignoring case. An empty needle matches everything.
pub fn matches_filter(listing: &Listing, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    listing.material.to_lowercase().contains(&needle)
        || listing
            .custom_material
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(&needle)
}

/// Filter then stable-sort a listing set for display.
pub fn derive(records: &[Listing], filter_text: &str, sort: SortKey) -> Vec<Listing> {
    let mut out: Vec<Listing> = records
        .iter()
        .filter(|l| matches_filter(l, filter_text))
        .cloned()
        .collect();

    out.sort_by(|a, b| sort.compare(a, b));
    out
}
