use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// One bookable room record in the catalog.
///
/// Listings are immutable once loaded; the search pipeline clones them into
/// result sets rather than mutating the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomListing {
    /// Unique catalog identifier, e.g. `"1"`.
    pub id: String,
    pub name: String,
    /// Current nightly rate in whole currency units.
    pub price: Decimal,
    /// Pre-discount nightly rate; when present it is `>= price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    /// Guest rating in `[0, 5]`.
    pub rating: f64,
    pub review_count: u32,
    /// Maximum number of guests the room sleeps.
    pub capacity: u32,
    /// Lowercase amenity tags used for filtering, e.g. `"wifi"`.
    pub amenities: Vec<String>,
    /// Display bed description, e.g. `"King Bed"`.
    pub bed_type: String,
    /// Display size, e.g. `"450 sq ft"`.
    pub size: String,
    /// Display view, e.g. `"City"`.
    pub view: String,
    #[serde(default)]
    pub is_refundable: bool,
    #[serde(default)]
    pub is_popular: bool,
    /// Long-form copy for the detail view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Facility callouts for the detail view.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub facilities: Vec<Facility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policies: Option<Policies>,
}

impl RoomListing {
    /// Returns `true` if the listing carries the given lowercase amenity tag.
    #[must_use]
    pub fn has_amenity(&self, tag: &str) -> bool {
        self.amenities.iter().any(|a| a == tag)
    }

    /// Percentage knocked off the pre-discount rate, rounded to the nearest
    /// whole percent. Zero when no original price is set.
    #[must_use]
    pub fn discount_percentage(&self) -> u32 {
        match self.original_price {
            Some(original) if original > Decimal::ZERO => {
                let pct = (Decimal::ONE - self.price / original) * Decimal::ONE_HUNDRED;
                pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                    .to_u32()
                    .unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// Returns `true` if the room can host `guests` people.
    #[must_use]
    pub fn sleeps(&self, guests: u32) -> bool {
        guests >= 1 && guests <= self.capacity
    }
}

/// A named facility shown on the detail view, e.g. `"Valet Parking"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
    pub name: String,
    pub description: String,
}

/// Stay policies shown on the detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policies {
    /// Earliest check-in time, e.g. `"3:00 PM"`.
    pub check_in_time: String,
    /// Latest check-out time, e.g. `"11:00 AM"`.
    pub check_out_time: String,
    pub cancellation: String,
    pub smoking: String,
    pub pets: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_listing(price: u32, original_price: Option<u32>) -> RoomListing {
        RoomListing {
            id: "1".to_string(),
            name: "Executive Suite with City View".to_string(),
            price: Decimal::from(price),
            original_price: original_price.map(Decimal::from),
            rating: 4.8,
            review_count: 124,
            capacity: 4,
            amenities: vec![
                "wifi".to_string(),
                "parking".to_string(),
                "breakfast".to_string(),
                "pool".to_string(),
            ],
            bed_type: "King Bed".to_string(),
            size: "450 sq ft".to_string(),
            view: "City".to_string(),
            is_refundable: true,
            is_popular: true,
            description: None,
            facilities: vec![],
            policies: None,
        }
    }

    #[test]
    fn has_amenity_matches_exact_tag() {
        let listing = make_listing(299, None);
        assert!(listing.has_amenity("wifi"));
        assert!(!listing.has_amenity("spa"));
    }

    #[test]
    fn has_amenity_is_case_sensitive_over_lowercase_tags() {
        // Callers normalize to lowercase before matching; the listing itself
        // only ever stores lowercase tags.
        let listing = make_listing(299, None);
        assert!(!listing.has_amenity("WiFi"));
    }

    #[test]
    fn discount_percentage_zero_without_original_price() {
        let listing = make_listing(299, None);
        assert_eq!(listing.discount_percentage(), 0);
    }

    #[test]
    fn discount_percentage_rounds_to_nearest_percent() {
        // 1 - 299/399 = 0.2506... -> 25%
        let listing = make_listing(299, Some(399));
        assert_eq!(listing.discount_percentage(), 25);

        // 1 - 189/229 = 0.1746... -> 17%
        let listing = make_listing(189, Some(229));
        assert_eq!(listing.discount_percentage(), 17);
    }

    #[test]
    fn sleeps_respects_capacity_bounds() {
        let listing = make_listing(299, None);
        assert!(!listing.sleeps(0));
        assert!(listing.sleeps(1));
        assert!(listing.sleeps(4));
        assert!(!listing.sleeps(5));
    }

    #[test]
    fn serde_roundtrip_listing() {
        let listing = make_listing(299, Some(399));
        let json = serde_json::to_string(&listing).expect("serialization failed");
        let decoded: RoomListing = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(decoded.id, listing.id);
        assert_eq!(decoded.price, listing.price);
        assert_eq!(decoded.original_price, listing.original_price);
        assert_eq!(decoded.amenities, listing.amenities);
    }

    #[test]
    fn optional_detail_fields_default_when_absent() {
        let yaml = r#"
id: "9"
name: Bare Room
price: 120
rating: 4.0
review_count: 10
capacity: 2
amenities: [wifi]
bed_type: Double Bed
size: 300 sq ft
view: Courtyard
"#;
        let listing: RoomListing = serde_yaml::from_str(yaml).expect("deserialization failed");
        assert!(!listing.is_refundable);
        assert!(!listing.is_popular);
        assert!(listing.original_price.is_none());
        assert!(listing.facilities.is_empty());
        assert!(listing.policies.is_none());
    }
}
