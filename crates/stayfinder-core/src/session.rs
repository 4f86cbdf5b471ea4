//! Single-writer session state for the search view.
//!
//! The presentation layer owns one [`SearchSession`] and re-renders from
//! [`SearchSession::results`] after every change. Each recomputation is a
//! pure function of the current criteria and filter state — there are no
//! incremental updates to get out of sync.

use crate::catalog::Catalog;
use crate::criteria::{FilterState, PriceRange, SearchCriteria};
use crate::listing::RoomListing;
use crate::search::{filter_listings, sort_listings, SortKey};

/// The mutable "current state" cell behind the results view.
#[derive(Debug, Clone)]
pub struct SearchSession {
    catalog: Catalog,
    criteria: SearchCriteria,
    filter: FilterState,
    sort_key: SortKey,
}

impl SearchSession {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            criteria: SearchCriteria::default(),
            filter: FilterState::default(),
            sort_key: SortKey::Recommended,
        }
    }

    /// Replace the search criteria, clamping guests/rooms into form bounds.
    pub fn set_criteria(&mut self, criteria: SearchCriteria) {
        self.criteria = criteria.clamped();
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        self.filter.price_range = range;
    }

    pub fn toggle_amenity(&mut self, tag: &str) {
        self.filter.toggle_amenity(tag);
    }

    /// Restore the filter defaults (the "Reset Filters" control).
    pub fn reset_filters(&mut self) {
        self.filter.reset();
    }

    #[must_use]
    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Recompute the filtered, sorted result set from the current state.
    #[must_use]
    pub fn results(&self) -> Vec<RoomListing> {
        let filtered = filter_listings(
            self.catalog.rooms(),
            self.filter.price_range,
            &self.filter.selected_amenities,
        );
        sort_listings(&filtered, self.sort_key)
    }
}
