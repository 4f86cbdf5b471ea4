//! Shared terminal formatting helpers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use stayfinder_core::SearchCriteria;

/// Format a monetary amount with the configured currency symbol, trailing
/// zeros stripped (whole-unit rates print as `$299`, not `$299.00`).
pub(crate) fn fmt_money(currency: &str, amount: Decimal) -> String {
    format!("{currency}{}", amount.normalize())
}

/// Format a calendar date the way the booking views do, e.g. `Mar 15, 2024`.
pub(crate) fn fmt_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Truncate display text to `max` characters with a trailing ellipsis.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}

/// The one-line search summary above the results: destination, dates, party.
pub(crate) fn criteria_line(criteria: &SearchCriteria) -> String {
    let location = if criteria.location.is_empty() {
        "any destination"
    } else {
        &criteria.location
    };
    let dates = match (criteria.check_in, criteria.check_out) {
        (Some(check_in), Some(check_out)) => format!("{check_in} - {check_out}"),
        _ => "dates not set".to_string(),
    };
    let room_suffix = if criteria.rooms == 1 { "" } else { "s" };
    format!(
        "{location} \u{2022} {dates} \u{2022} {} guests, {} room{room_suffix}",
        criteria.guests, criteria.rooms
    )
}
