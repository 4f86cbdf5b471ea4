//! Transient, user-supplied search input: what the visitor typed into the
//! search form and which filters they have toggled on the results view.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Upper bound on guests accepted by the search form.
pub const MAX_GUESTS: u32 = 10;
/// Upper bound on rooms accepted by the search form.
pub const MAX_ROOMS: u32 = 5;
/// Default ceiling of the nightly-rate filter.
pub const DEFAULT_MAX_NIGHTLY_RATE: u32 = 1000;

/// What the visitor asked for in the search form.
///
/// `location` is autocomplete/display input only; the catalog is a single
/// property, so it never narrows the result set. No ordering between
/// `check_in` and `check_out` is enforced at capture time — the pricing
/// calculator tolerates either order, and the booking flow is where an
/// ordered pair becomes mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub location: String,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: u32,
    pub rooms: u32,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            location: String::new(),
            check_in: None,
            check_out: None,
            guests: 2,
            rooms: 1,
        }
    }
}

impl SearchCriteria {
    /// Clamp guests and rooms into the bounds the search form accepts.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.guests = self.guests.clamp(1, MAX_GUESTS);
        self.rooms = self.rooms.clamp(1, MAX_ROOMS);
        self
    }
}

/// Closed nightly-rate interval; both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    /// Build a range from two bounds. Inverted bounds are reordered, matching
    /// how a two-thumb slider behaves when the thumbs cross mid-drag.
    #[must_use]
    pub fn new(min: Decimal, max: Decimal) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: Decimal::ZERO,
            max: Decimal::from(DEFAULT_MAX_NIGHTLY_RATE),
        }
    }
}

/// Filter controls on the results view.
///
/// An empty amenity set means "no amenity filter"; a non-empty set matches
/// listings carrying at least one of the selected tags (OR, not AND).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub price_range: PriceRange,
    pub selected_amenities: BTreeSet<String>,
}

impl FilterState {
    /// Toggle an amenity checkbox. Tags are lowercased on the way in so
    /// display labels like `"WiFi"` match the catalog's `"wifi"`.
    pub fn toggle_amenity(&mut self, tag: &str) {
        let tag = tag.to_lowercase();
        if !self.selected_amenities.remove(&tag) {
            self.selected_amenities.insert(tag);
        }
    }

    /// Restore the defaults (the "Reset Filters" control).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
