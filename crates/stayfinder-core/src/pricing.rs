//! Stay pricing: night count, subtotal, display discount, taxes, total.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Flat taxes-and-fees rate applied to the subtotal.
pub const TAX_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Price breakdown for a stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    /// Whole nights charged, always at least 1.
    pub nights: u32,
    /// Nightly rate times nights.
    pub subtotal: Decimal,
    /// Savings versus the pre-discount rate over the stay. Informational:
    /// shown to the guest but not subtracted from `total`.
    pub discount: Decimal,
    /// 15% of the subtotal, rounded half-up to whole currency units.
    pub taxes_and_fees: Decimal,
    /// Subtotal plus taxes and fees.
    pub total: Decimal,
}

/// Number of nights between two optional calendar dates.
///
/// The span is the absolute whole-day difference, clamped to at least one
/// night; equal dates count as a single night. A missing date yields the
/// one-night baseline shown before both dates are picked.
#[must_use]
pub fn nights_between(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> u32 {
    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => {
            let days = (check_out - check_in).num_days().unsigned_abs().max(1);
            u32::try_from(days).unwrap_or(u32::MAX)
        }
        _ => 1,
    }
}

/// Compute the full price breakdown for a stay.
///
/// `discount` is reported only when `original_nightly_rate` exceeds the
/// charged rate, and it never reduces `total`; that mirrors how the booking
/// sidebar presents savings. Dates may be given in either order or not at
/// all — see [`nights_between`].
#[must_use]
pub fn compute_pricing(
    nightly_rate: Decimal,
    original_nightly_rate: Option<Decimal>,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
) -> PricingBreakdown {
    let nights = nights_between(check_in, check_out);
    let night_count = Decimal::from(nights);

    let subtotal = nightly_rate * night_count;
    let discount = match original_nightly_rate {
        Some(original) if original > nightly_rate => (original - nightly_rate) * night_count,
        _ => Decimal::ZERO,
    };
    let taxes_and_fees =
        (subtotal * TAX_RATE).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let total = subtotal + taxes_and_fees;

    PricingBreakdown {
        nights,
        subtotal,
        discount,
        taxes_and_fees,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dec(n: u32) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn tax_rate_is_fifteen_percent() {
        assert_eq!(TAX_RATE, Decimal::new(15, 2));
    }

    #[test]
    fn nights_counts_whole_day_span() {
        assert_eq!(
            nights_between(Some(date(2024, 3, 15)), Some(date(2024, 3, 18))),
            3
        );
    }

    #[test]
    fn nights_defaults_to_one_without_dates() {
        assert_eq!(nights_between(None, None), 1);
        assert_eq!(nights_between(Some(date(2024, 3, 15)), None), 1);
        assert_eq!(nights_between(None, Some(date(2024, 3, 18))), 1);
    }

    #[test]
    fn nights_takes_absolute_span_for_inverted_dates() {
        assert_eq!(
            nights_between(Some(date(2024, 3, 18)), Some(date(2024, 3, 15))),
            3
        );
    }

    #[test]
    fn nights_clamps_equal_dates_to_one() {
        assert_eq!(
            nights_between(Some(date(2024, 3, 15)), Some(date(2024, 3, 15))),
            1
        );
    }

    #[test]
    fn three_night_discounted_stay_breakdown() {
        // 299/night, was 399, 3 nights: subtotal 897, discount 300,
        // taxes round(897 * 0.15) = 135, total 1032.
        let pricing = compute_pricing(
            dec(299),
            Some(dec(399)),
            Some(date(2024, 3, 15)),
            Some(date(2024, 3, 18)),
        );
        assert_eq!(pricing.nights, 3);
        assert_eq!(pricing.subtotal, dec(897));
        assert_eq!(pricing.discount, dec(300));
        assert_eq!(pricing.taxes_and_fees, dec(135));
        assert_eq!(pricing.total, dec(1032));
    }

    #[test]
    fn discount_is_not_subtracted_from_total() {
        let pricing = compute_pricing(
            dec(299),
            Some(dec(399)),
            Some(date(2024, 3, 15)),
            Some(date(2024, 3, 18)),
        );
        assert_eq!(pricing.total, pricing.subtotal + pricing.taxes_and_fees);
    }

    #[test]
    fn no_dates_quotes_single_night_baseline() {
        let pricing = compute_pricing(dec(249), None, None, None);
        assert_eq!(pricing.nights, 1);
        assert_eq!(pricing.subtotal, dec(249));
        // round(249 * 0.15) = round(37.35) = 37
        assert_eq!(pricing.taxes_and_fees, dec(37));
        assert_eq!(pricing.total, dec(286));
    }

    #[test]
    fn no_discount_when_original_rate_missing_or_not_higher() {
        let pricing = compute_pricing(dec(249), None, None, None);
        assert_eq!(pricing.discount, Decimal::ZERO);

        let pricing = compute_pricing(dec(249), Some(dec(249)), None, None);
        assert_eq!(pricing.discount, Decimal::ZERO);
    }

    #[test]
    fn taxes_round_half_up() {
        // subtotal 10: taxes 1.5 -> 2
        let pricing = compute_pricing(dec(10), None, None, None);
        assert_eq!(pricing.taxes_and_fees, dec(2));
        assert_eq!(pricing.total, dec(12));

        // subtotal 9: taxes 1.35 -> 1
        let pricing = compute_pricing(dec(9), None, None, None);
        assert_eq!(pricing.taxes_and_fees, dec(1));
    }

    #[test]
    fn inverted_dates_price_like_ordered_dates() {
        let ordered = compute_pricing(
            dec(299),
            Some(dec(399)),
            Some(date(2024, 3, 15)),
            Some(date(2024, 3, 18)),
        );
        let inverted = compute_pricing(
            dec(299),
            Some(dec(399)),
            Some(date(2024, 3, 18)),
            Some(date(2024, 3, 15)),
        );
        assert_eq!(ordered, inverted);
    }
}
