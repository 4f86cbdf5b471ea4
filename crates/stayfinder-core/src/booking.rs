//! Mock booking flow: validates a request against a listing and produces a
//! confirmation. No inventory is held and nothing is persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::BookingError;
use crate::listing::RoomListing;
use crate::pricing::{compute_pricing, PricingBreakdown};

/// A visitor's request to reserve a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub room_id: String,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: u32,
}

/// A confirmed (mock) reservation, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub room_id: String,
    pub room_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub pricing: PricingBreakdown,
}

/// Validate `request` against `listing` and produce a confirmation.
///
/// Unlike the live price preview, booking is the point of commitment: both
/// dates are required, check-out must be strictly after check-in, and the
/// party has to fit the room.
///
/// # Errors
///
/// Returns the matching [`BookingError`] when a date is missing, the dates
/// are not strictly ordered, no guests are given, or the party exceeds the
/// room's capacity.
pub fn book_listing(
    listing: &RoomListing,
    request: &BookingRequest,
) -> Result<BookingConfirmation, BookingError> {
    let (Some(check_in), Some(check_out)) = (request.check_in, request.check_out) else {
        return Err(BookingError::MissingDates);
    };

    if check_out <= check_in {
        return Err(BookingError::InvalidDateRange {
            check_in,
            check_out,
        });
    }

    if request.guests == 0 {
        return Err(BookingError::NoGuests);
    }

    if request.guests > listing.capacity {
        return Err(BookingError::OverCapacity {
            requested: request.guests,
            capacity: listing.capacity,
        });
    }

    let pricing = compute_pricing(
        listing.price,
        listing.original_price,
        Some(check_in),
        Some(check_out),
    );

    tracing::info!(
        room_id = %listing.id,
        nights = pricing.nights,
        total = %pricing.total,
        "booking confirmed"
    );

    Ok(BookingConfirmation {
        room_id: listing.id.clone(),
        room_name: listing.name.clone(),
        check_in,
        check_out,
        guests: request.guests,
        pricing,
    })
}

/// Look up `request.room_id` in `catalog` and book it.
///
/// # Errors
///
/// Returns [`BookingError::UnknownRoom`] when the id is not in the catalog,
/// otherwise whatever [`book_listing`] returns.
pub fn book(catalog: &Catalog, request: &BookingRequest) -> Result<BookingConfirmation, BookingError> {
    let listing = catalog
        .get(&request.room_id)
        .ok_or_else(|| BookingError::UnknownRoom(request.room_id.clone()))?;
    book_listing(listing, request)
}
