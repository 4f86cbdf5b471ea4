//! The results pipeline: a stable price/amenity filter over the catalog
//! followed by a stable sort.
//!
//! Both stages are pure; every user interaction recomputes the view from the
//! current state rather than patching a previous result.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::criteria::PriceRange;
use crate::listing::RoomListing;

/// Result ordering selected in the sort dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog insertion order; no ranking is computed.
    #[default]
    Recommended,
    PriceLow,
    PriceHigh,
    Rating,
}

impl SortKey {
    /// Parse a sort key from its dropdown value.
    ///
    /// Unrecognized values fall back to `Recommended`, so a stale or mistyped
    /// key degrades to identity order instead of failing.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "rating" => SortKey::Rating,
            _ => SortKey::Recommended,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Recommended => "recommended",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Narrow `listings` to those whose nightly rate falls inside `price_range`
/// (inclusive bounds) and that carry at least one selected amenity.
///
/// An empty `selected_amenities` set matches everything; a non-empty set uses
/// OR semantics. Relative order is preserved, and an empty result is a valid
/// outcome the caller renders as a distinct "no results" state.
#[must_use]
pub fn filter_listings(
    listings: &[RoomListing],
    price_range: PriceRange,
    selected_amenities: &BTreeSet<String>,
) -> Vec<RoomListing> {
    listings
        .iter()
        .filter(|room| {
            let in_price_range = price_range.contains(room.price);
            let has_selected_amenity = selected_amenities.is_empty()
                || selected_amenities
                    .iter()
                    .any(|tag| room.has_amenity(&tag.to_lowercase()));
            in_price_range && has_selected_amenity
        })
        .cloned()
        .collect()
}

/// Return a new sequence ordered by `key`; the input is not mutated.
///
/// All orderings are stable so ties keep their prior relative order,
/// re-sorting with the same key is idempotent, and `Recommended` is an exact
/// pass-through.
#[must_use]
pub fn sort_listings(listings: &[RoomListing], key: SortKey) -> Vec<RoomListing> {
    let mut sorted = listings.to_vec();
    match key {
        SortKey::Recommended => {}
        SortKey::PriceLow => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHigh => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Rating => sorted.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(Ordering::Equal)
        }),
    }
    sorted
}
