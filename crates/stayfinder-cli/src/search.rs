//! `search` and `locations` command handlers.

use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use stayfinder_core::{
    suggest, AppConfig, Catalog, PriceRange, SearchCriteria, SearchSession, SortKey,
};

use crate::render;

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    /// Destination text; narrows the location suggestions, not the catalog
    #[arg(long)]
    pub location: Option<String>,
    /// Check-in date (YYYY-MM-DD)
    #[arg(long)]
    pub check_in: Option<NaiveDate>,
    /// Check-out date (YYYY-MM-DD)
    #[arg(long)]
    pub check_out: Option<NaiveDate>,
    #[arg(long, default_value_t = 2)]
    pub guests: u32,
    #[arg(long, default_value_t = 1)]
    pub rooms: u32,
    /// Lowest nightly rate to include
    #[arg(long, default_value_t = 0)]
    pub min_price: u32,
    /// Highest nightly rate to include; defaults to the configured ceiling
    #[arg(long)]
    pub max_price: Option<u32>,
    /// Amenity tag to filter by; repeat for OR matching (e.g. --amenity wifi --amenity spa)
    #[arg(long = "amenity")]
    pub amenities: Vec<String>,
    /// Result order: recommended, price-low, price-high, or rating
    #[arg(long, default_value = "recommended")]
    pub sort: String,
    /// Emit the result set as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub(crate) fn run_search(
    catalog: &Catalog,
    config: &AppConfig,
    args: &SearchArgs,
) -> anyhow::Result<()> {
    let mut session = SearchSession::new(catalog.clone());
    session.set_criteria(SearchCriteria {
        location: args.location.clone().unwrap_or_default(),
        check_in: args.check_in,
        check_out: args.check_out,
        guests: args.guests,
        rooms: args.rooms,
    });

    let max_price = args.max_price.unwrap_or(config.max_nightly_rate);
    session.set_price_range(PriceRange::new(
        Decimal::from(args.min_price),
        Decimal::from(max_price),
    ));
    for tag in &args.amenities {
        session.toggle_amenity(tag);
    }
    session.set_sort_key(SortKey::parse(&args.sort));

    let results = session.results();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("{}", render::criteria_line(session.criteria()));
    if results.is_empty() {
        println!("no rooms match the current filters; widen the price range or clear amenities");
        return Ok(());
    }

    println!("{} rooms found", results.len());
    println!();
    let header = format!(
        "{:<5}{:<40}{:>9}  {:<12}{:<8}AMENITIES",
        "ID", "NAME", "RATE", "RATING", "SLEEPS"
    );
    println!("{header}");
    for room in &results {
        let rating = format!("{:.1} ({})", room.rating, room.review_count);
        println!(
            "{:<5}{:<40}{:>9}  {:<12}{:<8}{}",
            room.id,
            render::truncate(&room.name, 36),
            render::fmt_money(&config.currency, room.price),
            rating,
            room.capacity,
            room.amenities.join(", ")
        );
    }

    Ok(())
}

pub(crate) fn run_locations(query: &str) {
    let matches = suggest(query);
    if matches.is_empty() {
        println!("no destinations match '{query}'");
        return;
    }
    for location in matches {
        println!("{location}");
    }
}
