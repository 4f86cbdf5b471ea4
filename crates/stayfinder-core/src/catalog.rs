//! The room catalog: a fixed, ordered set of listings loaded once per session.

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::CatalogError;
use crate::listing::{Facility, Policies, RoomListing};

/// Top-level shape of a catalog YAML file.
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub rooms: Vec<RoomListing>,
}

/// Ordered, immutable collection of room listings.
///
/// Catalog order is meaningful: it is the `recommended` sort order and the
/// baseline the stable filter preserves.
#[derive(Debug, Clone)]
pub struct Catalog {
    rooms: Vec<RoomListing>,
}

impl Catalog {
    /// Build a catalog from listings, enforcing the record invariants.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Validation` if any listing violates an
    /// invariant (empty or duplicate id, non-positive rate, pre-discount
    /// rate below the current rate, rating outside `[0, 5]`, zero capacity,
    /// or a non-lowercase amenity tag).
    pub fn new(rooms: Vec<RoomListing>) -> Result<Self, CatalogError> {
        validate_rooms(&rooms)?;
        Ok(Self { rooms })
    }

    /// Load and validate a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read, parsed, or fails
    /// validation.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::FileIo {
            path: path.display().to_string(),
            source: e,
        })?;

        let file: CatalogFile = serde_yaml::from_str(&content)?;
        let catalog = Self::new(file.rooms)?;
        tracing::debug!(rooms = catalog.len(), path = %path.display(), "catalog loaded");
        Ok(catalog)
    }

    /// The embedded default catalog. The data is static and known-valid;
    /// a test asserts it passes the same validation as loaded files.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            rooms: builtin_rooms(),
        }
    }

    /// Look up a listing by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RoomListing> {
        self.rooms.iter().find(|room| room.id == id)
    }

    /// All listings in catalog order.
    #[must_use]
    pub fn rooms(&self) -> &[RoomListing] {
        &self.rooms
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

fn validate_rooms(rooms: &[RoomListing]) -> Result<(), CatalogError> {
    let mut seen_ids = HashSet::new();

    for room in rooms {
        if room.id.trim().is_empty() {
            return Err(CatalogError::Validation(
                "room id must be non-empty".to_string(),
            ));
        }

        if !seen_ids.insert(room.id.clone()) {
            return Err(CatalogError::Validation(format!(
                "duplicate room id: '{}'",
                room.id
            )));
        }

        if room.name.trim().is_empty() {
            return Err(CatalogError::Validation(format!(
                "room '{}' must have a non-empty name",
                room.id
            )));
        }

        if room.price <= Decimal::ZERO {
            return Err(CatalogError::Validation(format!(
                "room '{}' has non-positive nightly rate {}",
                room.id, room.price
            )));
        }

        if let Some(original) = room.original_price {
            if original < room.price {
                return Err(CatalogError::Validation(format!(
                    "room '{}' has original rate {} below current rate {}",
                    room.id, original, room.price
                )));
            }
        }

        if !(0.0..=5.0).contains(&room.rating) {
            return Err(CatalogError::Validation(format!(
                "room '{}' has rating {} outside [0, 5]",
                room.id, room.rating
            )));
        }

        if room.capacity == 0 {
            return Err(CatalogError::Validation(format!(
                "room '{}' must sleep at least one guest",
                room.id
            )));
        }

        for tag in &room.amenities {
            if tag.is_empty() || tag.chars().any(char::is_uppercase) {
                return Err(CatalogError::Validation(format!(
                    "room '{}' has invalid amenity tag '{tag}'; tags must be non-empty lowercase",
                    room.id
                )));
            }
        }
    }

    Ok(())
}

fn builtin_rooms() -> Vec<RoomListing> {
    vec![
        RoomListing {
            id: "1".to_string(),
            name: "Executive Suite with City View".to_string(),
            price: Decimal::from(299),
            original_price: Some(Decimal::from(399)),
            rating: 4.8,
            review_count: 124,
            capacity: 4,
            amenities: tags(&["wifi", "parking", "breakfast", "pool"]),
            bed_type: "King Bed".to_string(),
            size: "450 sq ft".to_string(),
            view: "City".to_string(),
            is_refundable: true,
            is_popular: true,
            description: Some(
                "Experience luxury in our spacious Executive Suite featuring \
                 floor-to-ceiling windows with breathtaking city views. This \
                 elegantly appointed suite combines modern amenities with \
                 sophisticated design elements for the discerning traveler."
                    .to_string(),
            ),
            facilities: vec![
                facility("High-Speed WiFi", "Complimentary fiber internet"),
                facility("Valet Parking", "Secure underground parking"),
                facility("Premium Coffee", "Nespresso machine & selection"),
                facility("Fitness Center", "24/7 state-of-the-art gym"),
                facility("Pool & Spa", "Rooftop infinity pool"),
                facility("Room Service", "24-hour gourmet dining"),
                facility("65\" Smart TV", "4K with streaming services"),
                facility("Climate Control", "Individual temperature control"),
                facility("Safe & Secure", "Digital safe & key card access"),
            ],
            policies: Some(Policies {
                check_in_time: "3:00 PM".to_string(),
                check_out_time: "11:00 AM".to_string(),
                cancellation: "Free cancellation until 24 hours before arrival".to_string(),
                smoking: "Non-smoking room".to_string(),
                pets: "Pet-friendly (additional fee applies)".to_string(),
            }),
        },
        RoomListing {
            id: "2".to_string(),
            name: "Deluxe Ocean View Room".to_string(),
            price: Decimal::from(249),
            original_price: None,
            rating: 4.9,
            review_count: 89,
            capacity: 2,
            amenities: tags(&["wifi", "breakfast", "pool", "spa"]),
            bed_type: "Queen Bed".to_string(),
            size: "380 sq ft".to_string(),
            view: "Ocean".to_string(),
            is_refundable: true,
            is_popular: false,
            description: None,
            facilities: vec![],
            policies: None,
        },
        RoomListing {
            id: "3".to_string(),
            name: "Standard City Room".to_string(),
            price: Decimal::from(189),
            original_price: Some(Decimal::from(229)),
            rating: 4.6,
            review_count: 203,
            capacity: 2,
            amenities: tags(&["wifi", "parking"]),
            bed_type: "Double Bed".to_string(),
            size: "320 sq ft".to_string(),
            view: "City".to_string(),
            is_refundable: false,
            is_popular: false,
            description: None,
            facilities: vec![],
            policies: None,
        },
        RoomListing {
            id: "4".to_string(),
            name: "Presidential Suite".to_string(),
            price: Decimal::from(599),
            original_price: None,
            rating: 5.0,
            review_count: 45,
            capacity: 6,
            amenities: tags(&["wifi", "parking", "breakfast", "pool", "spa", "gym"]),
            bed_type: "King Bed + Sofa".to_string(),
            size: "800 sq ft".to_string(),
            view: "Panoramic".to_string(),
            is_refundable: true,
            is_popular: true,
            description: None,
            facilities: vec![],
            policies: None,
        },
    ]
}

fn tags(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| (*t).to_string()).collect()
}

fn facility(name: &str, description: &str) -> Facility {
    Facility {
        name: name.to_string(),
        description: description.to_string(),
    }
}
