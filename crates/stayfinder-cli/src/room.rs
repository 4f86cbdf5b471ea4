//! `show`, `quote`, and `book` command handlers for a single room.

use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use stayfinder_core::{
    book_listing, compute_pricing, AppConfig, BookingRequest, Catalog, RoomListing,
};

use crate::render;

#[derive(Debug, Args)]
pub(crate) struct QuoteArgs {
    /// Room id from the search results
    pub room_id: String,
    /// Check-in date (YYYY-MM-DD); omit both dates for a one-night baseline
    #[arg(long)]
    pub check_in: Option<NaiveDate>,
    /// Check-out date (YYYY-MM-DD)
    #[arg(long)]
    pub check_out: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub(crate) struct BookArgs {
    /// Room id from the search results
    pub room_id: String,
    /// Check-in date (YYYY-MM-DD)
    #[arg(long)]
    pub check_in: NaiveDate,
    /// Check-out date (YYYY-MM-DD)
    #[arg(long)]
    pub check_out: NaiveDate,
    #[arg(long, default_value_t = 2)]
    pub guests: u32,
}

fn find_room<'a>(catalog: &'a Catalog, room_id: &str) -> anyhow::Result<&'a RoomListing> {
    catalog.get(room_id).ok_or_else(|| {
        anyhow::anyhow!("room '{room_id}' not found; run `stayfinder search` to list rooms")
    })
}

pub(crate) fn run_show(catalog: &Catalog, config: &AppConfig, room_id: &str) -> anyhow::Result<()> {
    let room = find_room(catalog, room_id)?;

    println!("{} (room {})", room.name, room.id);
    println!("Rating: {:.1} ({} reviews)", room.rating, room.review_count);
    println!(
        "Sleeps {} \u{2022} {} \u{2022} {} \u{2022} {} view",
        room.capacity, room.bed_type, room.size, room.view
    );

    let rate = render::fmt_money(&config.currency, room.price);
    match room.original_price {
        Some(original) => println!(
            "Rate: {rate}/night (was {}, save {}%)",
            render::fmt_money(&config.currency, original),
            room.discount_percentage()
        ),
        None => println!("Rate: {rate}/night"),
    }

    let refundable = if room.is_refundable { "yes" } else { "no" };
    let popular = if room.is_popular { "yes" } else { "no" };
    println!("Refundable: {refundable} \u{2022} Popular: {popular}");
    println!("Amenities: {}", room.amenities.join(", "));

    if let Some(description) = &room.description {
        println!();
        println!("{description}");
    }

    if !room.facilities.is_empty() {
        println!();
        println!("{:<18}DETAIL", "FACILITY");
        for facility in &room.facilities {
            println!("{:<18}{}", facility.name, facility.description);
        }
    }

    if let Some(policies) = &room.policies {
        println!();
        println!(
            "Check-in {} \u{2022} Check-out {}",
            policies.check_in_time, policies.check_out_time
        );
        println!("{}", policies.cancellation);
        println!("\u{2022} {}", policies.smoking);
        println!("\u{2022} {}", policies.pets);
    }

    Ok(())
}

pub(crate) fn run_quote(
    catalog: &Catalog,
    config: &AppConfig,
    args: &QuoteArgs,
) -> anyhow::Result<()> {
    let room = find_room(catalog, &args.room_id)?;
    let pricing = compute_pricing(
        room.price,
        room.original_price,
        args.check_in,
        args.check_out,
    );

    if args.check_in.is_none() || args.check_out.is_none() {
        println!("no date pair given; quoting a single night");
    }

    let currency = &config.currency;
    let night_suffix = if pricing.nights == 1 { "" } else { "s" };
    println!(
        "{} \u{2014} {} night{night_suffix}",
        room.name, pricing.nights
    );
    println!(
        "{:<24}{:>10}",
        format!(
            "{} x {} night{night_suffix}",
            render::fmt_money(currency, room.price),
            pricing.nights
        ),
        render::fmt_money(currency, pricing.subtotal)
    );
    if pricing.discount > Decimal::ZERO {
        println!(
            "{:<24}{:>10}",
            "Discount",
            format!("-{}", render::fmt_money(currency, pricing.discount))
        );
    }
    println!(
        "{:<24}{:>10}",
        "Taxes & fees",
        render::fmt_money(currency, pricing.taxes_and_fees)
    );
    println!(
        "{:<24}{:>10}",
        "Total",
        render::fmt_money(currency, pricing.total)
    );

    Ok(())
}

pub(crate) fn run_book(
    catalog: &Catalog,
    config: &AppConfig,
    args: &BookArgs,
) -> anyhow::Result<()> {
    let room = find_room(catalog, &args.room_id)?;
    let confirmation = book_listing(
        room,
        &BookingRequest {
            room_id: args.room_id.clone(),
            check_in: Some(args.check_in),
            check_out: Some(args.check_out),
            guests: args.guests,
        },
    )?;

    println!("Booking confirmed!");
    println!(
        "Your reservation for {} has been confirmed.",
        confirmation.room_name
    );
    println!();
    println!("  Check-in:   {}", render::fmt_date(confirmation.check_in));
    println!("  Check-out:  {}", render::fmt_date(confirmation.check_out));
    println!("  Guests:     {}", confirmation.guests);
    println!(
        "  Total:      {}",
        render::fmt_money(&config.currency, confirmation.pricing.total)
    );

    Ok(())
}
