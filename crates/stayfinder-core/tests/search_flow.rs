//! End-to-end walk through the visitor journey: autocomplete a destination,
//! narrow and sort the results, price a stay, book it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use stayfinder_core::{
    book, compute_pricing, suggest, BookingRequest, Catalog, PriceRange, SearchCriteria,
    SearchSession, SortKey,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn search_to_booking_journey() {
    // Visitor types "new" into the destination field.
    let suggestions = suggest("new");
    assert_eq!(suggestions, vec!["New York City, NY"]);

    // Search form submitted.
    let mut session = SearchSession::new(Catalog::builtin());
    session.set_criteria(SearchCriteria {
        location: suggestions[0].to_string(),
        check_in: Some(date(2024, 3, 15)),
        check_out: Some(date(2024, 3, 18)),
        guests: 2,
        rooms: 1,
    });

    // Results view: cap the nightly rate at 300 and sort cheapest-first.
    session.set_price_range(PriceRange::new(Decimal::ZERO, Decimal::from(300)));
    session.set_sort_key(SortKey::PriceLow);

    let results = session.results();
    let prices: Vec<Decimal> = results.iter().map(|r| r.price).collect();
    assert_eq!(
        prices,
        vec![Decimal::from(189), Decimal::from(249), Decimal::from(299)]
    );

    // Detail view of the most expensive survivor: live price preview.
    let room = &results[2];
    assert_eq!(room.id, "1");
    let preview = compute_pricing(
        room.price,
        room.original_price,
        session.criteria().check_in,
        session.criteria().check_out,
    );
    assert_eq!(preview.nights, 3);
    assert_eq!(preview.subtotal, Decimal::from(897));
    assert_eq!(preview.discount, Decimal::from(300));
    assert_eq!(preview.taxes_and_fees, Decimal::from(135));
    assert_eq!(preview.total, Decimal::from(1032));

    // Reserve.
    let confirmation = book(
        session.catalog(),
        &BookingRequest {
            room_id: room.id.clone(),
            check_in: session.criteria().check_in,
            check_out: session.criteria().check_out,
            guests: session.criteria().guests,
        },
    )
    .expect("booking should succeed");

    assert_eq!(confirmation.room_name, "Executive Suite with City View");
    assert_eq!(confirmation.pricing, preview);
}

#[test]
fn tightening_filters_to_nothing_is_a_valid_state() {
    let mut session = SearchSession::new(Catalog::builtin());
    session.set_price_range(PriceRange::new(Decimal::from(700), Decimal::from(900)));
    assert!(session.results().is_empty());

    // The "Reset Filters" control recovers the full catalog.
    session.reset_filters();
    assert_eq!(session.results().len(), 4);
}
