//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no validation. Untrusted input
//! goes through the checks in `services` first.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::models::{FlightQuote, LineItem, MarkupConfig, VatRule};

/// VAT percent used when a caller does not supply one
pub const DEFAULT_VAT_PERCENT: Decimal = dec!(15);

/// Round to specified decimal places, halves away from zero.
///
/// This is the rounding used when money is displayed; totals are never
/// rounded before that point.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use proposal_engine::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(-2.5), 0), dec!(-3));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Sub-total, VAT and grand total of one or more priced lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub sub_total: Decimal,
    pub vat_amount: Decimal,
    pub grand_total: Decimal,
}

impl Add for PriceBreakdown {
    type Output = PriceBreakdown;

    fn add(self, rhs: PriceBreakdown) -> PriceBreakdown {
        PriceBreakdown {
            sub_total: self.sub_total + rhs.sub_total,
            vat_amount: self.vat_amount + rhs.vat_amount,
            grand_total: self.grand_total + rhs.grand_total,
        }
    }
}

impl AddAssign for PriceBreakdown {
    fn add_assign(&mut self, rhs: PriceBreakdown) {
        *self = *self + rhs;
    }
}

impl PriceBreakdown {
    /// Component-wise sum, `None` on overflow
    pub fn checked_add(self, rhs: PriceBreakdown) -> Option<PriceBreakdown> {
        Some(PriceBreakdown {
            sub_total: self.sub_total.checked_add(rhs.sub_total)?,
            vat_amount: self.vat_amount.checked_add(rhs.vat_amount)?,
            grand_total: self.grand_total.checked_add(rhs.grand_total)?,
        })
    }
}

impl Sum for PriceBreakdown {
    fn sum<I: Iterator<Item = PriceBreakdown>>(iter: I) -> Self {
        iter.fold(PriceBreakdown::default(), Add::add)
    }
}

impl<'a> Sum<&'a PriceBreakdown> for PriceBreakdown {
    fn sum<I: Iterator<Item = &'a PriceBreakdown>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Price one line: net × quantity × duration, plus markup, plus VAT.
///
/// Domestic lines pay VAT on the full marked-up base; international lines pay
/// VAT on the markup alone. Fixed markups are charged per unit per day.
///
/// # Arguments
/// * `net` - Net unit price
/// * `markup` - Markup policy for the line's category
/// * `vat_rule` - Domestic or international
/// * `vat_percent` - VAT as a percentage, e.g. `15`
/// * `quantity` - Units (rooms, guests, seats, vehicles)
/// * `duration` - Nights or days, `1` when not applicable
///
/// # Panics
/// If an intermediate amount leaves the `Decimal` range. Untrusted amounts go
/// through [`try_price_breakdown`] first.
pub fn calculate_price_breakdown(
    net: Decimal,
    markup: &MarkupConfig,
    vat_rule: VatRule,
    vat_percent: Decimal,
    quantity: u32,
    duration: u32,
) -> PriceBreakdown {
    let units = Decimal::from(quantity) * Decimal::from(duration);
    let total_net = net * units;
    let markup_amount = markup.amount_for(total_net, units);

    let sub_total = total_net + markup_amount;
    let vat_base = match vat_rule {
        VatRule::Domestic => sub_total,
        VatRule::International => markup_amount,
    };
    let vat_amount = vat_base * vat_percent / Decimal::ONE_HUNDRED;

    PriceBreakdown {
        sub_total,
        vat_amount,
        grand_total: sub_total + vat_amount,
    }
}

/// Checked [`calculate_price_breakdown`]: same arithmetic in the same order,
/// `None` when any step overflows.
pub fn try_price_breakdown(
    net: Decimal,
    markup: &MarkupConfig,
    vat_rule: VatRule,
    vat_percent: Decimal,
    quantity: u32,
    duration: u32,
) -> Option<PriceBreakdown> {
    let units = Decimal::from(quantity).checked_mul(Decimal::from(duration))?;
    let total_net = net.checked_mul(units)?;
    let markup_amount = markup.checked_amount_for(total_net, units)?;

    let sub_total = total_net.checked_add(markup_amount)?;
    let vat_base = match vat_rule {
        VatRule::Domestic => sub_total,
        VatRule::International => markup_amount,
    };
    let vat_amount = vat_base
        .checked_mul(vat_percent)?
        .checked_div(Decimal::ONE_HUNDRED)?;

    Some(PriceBreakdown {
        sub_total,
        vat_amount,
        grand_total: sub_total.checked_add(vat_amount)?,
    })
}

/// Price any [`LineItem`] with its own quantity and duration.
pub fn price_line<I: LineItem + ?Sized>(
    item: &I,
    markup: &MarkupConfig,
    vat_rule: VatRule,
    vat_percent: Decimal,
) -> PriceBreakdown {
    calculate_price_breakdown(
        item.net_price(),
        markup,
        vat_rule,
        vat_percent,
        item.quantity(),
        item.duration(),
    )
}

pub fn try_price_line<I: LineItem + ?Sized>(
    item: &I,
    markup: &MarkupConfig,
    vat_rule: VatRule,
    vat_percent: Decimal,
) -> Option<PriceBreakdown> {
    try_price_breakdown(
        item.net_price(),
        markup,
        vat_rule,
        vat_percent,
        item.quantity(),
        item.duration(),
    )
}

/// Total of all seat-class quotes on one flight option.
///
/// Each quote is priced with its seat count as quantity and a duration of 1.
pub fn calculate_flight_total(
    quotes: &[FlightQuote],
    markup: &MarkupConfig,
    vat_rule: VatRule,
    vat_percent: Decimal,
) -> PriceBreakdown {
    quotes
        .iter()
        .map(|quote| price_line(quote, markup, vat_rule, vat_percent))
        .sum()
}

/// Checked [`calculate_flight_total`], `None` on overflow.
pub fn try_flight_total(
    quotes: &[FlightQuote],
    markup: &MarkupConfig,
    vat_rule: VatRule,
    vat_percent: Decimal,
) -> Option<PriceBreakdown> {
    quotes.iter().try_fold(PriceBreakdown::default(), |total, quote| {
        total.checked_add(try_price_line(quote, markup, vat_rule, vat_percent)?)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(class: &str, price: Decimal, quantity: u32) -> FlightQuote {
        FlightQuote {
            class: class.to_string(),
            price,
            quantity,
        }
    }

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_halves_away_from_zero() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(3));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
        assert_eq!(round_money(dec!(2.345), 2), dec!(2.35));
        assert_eq!(round_money(dec!(-2.345), 2), dec!(-2.35));
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
        assert_eq!(round_money(dec!(999999.995), 2), dec!(1000000.00));
    }

    // ==================== calculate_price_breakdown tests ====================

    #[test]
    fn test_fixed_markup_domestic() {
        let result = calculate_price_breakdown(
            dec!(100),
            &MarkupConfig::fixed(dec!(10)),
            VatRule::Domestic,
            dec!(15),
            2,
            3,
        );

        // total net 600, markup 10 * 2 * 3 = 60
        assert_eq!(result.sub_total, dec!(660));
        assert_eq!(result.vat_amount, dec!(99));
        assert_eq!(result.grand_total, dec!(759));
    }

    #[test]
    fn test_fixed_markup_international_taxes_markup_only() {
        let result = calculate_price_breakdown(
            dec!(100),
            &MarkupConfig::fixed(dec!(10)),
            VatRule::International,
            dec!(15),
            2,
            3,
        );

        assert_eq!(result.sub_total, dec!(660));
        assert_eq!(result.vat_amount, dec!(9));
        assert_eq!(result.grand_total, dec!(669));
    }

    #[test]
    fn test_percent_markup_domestic() {
        let result = calculate_price_breakdown(
            dec!(50),
            &MarkupConfig::percent(dec!(20)),
            VatRule::Domestic,
            dec!(15),
            1,
            1,
        );

        assert_eq!(result.sub_total, dec!(60));
        assert_eq!(result.vat_amount, dec!(9));
        assert_eq!(result.grand_total, dec!(69));
    }

    #[test]
    fn test_zero_percent_markup_domestic_is_net_plus_vat() {
        let cases = [
            (dec!(0), 0, 0),
            (dec!(12.34), 3, 2),
            (dec!(999.99), 7, 14),
            (dec!(0.01), 1, 1),
        ];
        for (net, quantity, duration) in cases {
            let total_net = net * Decimal::from(quantity) * Decimal::from(duration);
            let result = calculate_price_breakdown(
                net,
                &MarkupConfig::percent(dec!(0)),
                VatRule::Domestic,
                dec!(15),
                quantity,
                duration,
            );
            assert_eq!(result.grand_total, total_net * dec!(1.15));
        }
    }

    #[test]
    fn test_international_without_markup_has_no_vat() {
        for markup in [MarkupConfig::percent(dec!(0)), MarkupConfig::fixed(dec!(0))] {
            let result = calculate_price_breakdown(
                dec!(250),
                &markup,
                VatRule::International,
                dec!(15),
                4,
                2,
            );
            assert_eq!(result.vat_amount, dec!(0));
            assert_eq!(result.grand_total, dec!(2000));
        }
    }

    #[test]
    fn test_breakdown_is_idempotent() {
        let markup = MarkupConfig::percent(dec!(7.5));
        let first = calculate_price_breakdown(dec!(33.33), &markup, VatRule::Domestic, dec!(5), 3, 2);
        let second = calculate_price_breakdown(dec!(33.33), &markup, VatRule::Domestic, dec!(5), 3, 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_quantity_prices_nothing() {
        let result = calculate_price_breakdown(
            dec!(100),
            &MarkupConfig::fixed(dec!(10)),
            VatRule::Domestic,
            dec!(15),
            0,
            3,
        );
        assert_eq!(result, PriceBreakdown::default());
    }

    #[test]
    fn test_negative_net_propagates() {
        let result = calculate_price_breakdown(
            dec!(-10),
            &MarkupConfig::percent(dec!(0)),
            VatRule::Domestic,
            dec!(10),
            1,
            1,
        );
        assert_eq!(result.grand_total, dec!(-11));
    }

    // ==================== calculate_flight_total tests ====================

    #[test]
    fn test_flight_total_sums_quotes() {
        let quotes = vec![
            quote("Economy", dec!(400), 10),
            quote("Business", dec!(1500), 2),
            quote("First", dec!(4200.50), 1),
        ];
        let markup = MarkupConfig::percent(dec!(8));

        let total = calculate_flight_total(&quotes, &markup, VatRule::International, dec!(15));
        let expected: PriceBreakdown = quotes
            .iter()
            .map(|q| {
                calculate_price_breakdown(
                    q.price,
                    &markup,
                    VatRule::International,
                    dec!(15),
                    q.quantity,
                    1,
                )
            })
            .sum();

        assert_eq!(total, expected);
        assert_eq!(total.sub_total, dec!(12096.54));
    }

    #[test]
    fn test_flight_total_order_independent() {
        let mut quotes = vec![quote("Economy", dec!(199.99), 3), quote("Business", dec!(899), 2)];
        let markup = MarkupConfig::fixed(dec!(25));

        let forward = calculate_flight_total(&quotes, &markup, VatRule::Domestic, dec!(15));
        quotes.reverse();
        let reversed = calculate_flight_total(&quotes, &markup, VatRule::Domestic, dec!(15));

        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_flight_total_empty() {
        let total = calculate_flight_total(&[], &MarkupConfig::default(), VatRule::Domestic, dec!(15));
        assert_eq!(total, PriceBreakdown::default());
    }

    #[test]
    fn test_breakdown_add_assign() {
        let mut total = PriceBreakdown::default();
        total += PriceBreakdown {
            sub_total: dec!(10),
            vat_amount: dec!(1.5),
            grand_total: dec!(11.5),
        };
        total += PriceBreakdown {
            sub_total: dec!(20),
            vat_amount: dec!(0),
            grand_total: dec!(20),
        };
        assert_eq!(total.sub_total, dec!(30));
        assert_eq!(total.vat_amount, dec!(1.5));
        assert_eq!(total.grand_total, dec!(31.5));
    }

    // ==================== checked pricing tests ====================

    #[test]
    fn test_try_price_breakdown_matches_unchecked() {
        let cases = [
            (dec!(100), MarkupConfig::fixed(dec!(10)), VatRule::Domestic, 2, 3),
            (dec!(100), MarkupConfig::fixed(dec!(10)), VatRule::International, 2, 3),
            (dec!(50), MarkupConfig::percent(dec!(20)), VatRule::Domestic, 1, 1),
            (dec!(33.33), MarkupConfig::percent(dec!(12.5)), VatRule::International, 7, 2),
        ];
        for (net, markup, rule, quantity, duration) in cases {
            assert_eq!(
                try_price_breakdown(net, &markup, rule, dec!(15), quantity, duration),
                Some(calculate_price_breakdown(net, &markup, rule, dec!(15), quantity, duration))
            );
        }
    }

    #[test]
    fn test_try_price_breakdown_overflow_is_none() {
        let result = try_price_breakdown(
            Decimal::MAX,
            &MarkupConfig::percent(dec!(0)),
            VatRule::Domestic,
            dec!(15),
            2,
            1,
        );
        assert_eq!(result, None);
    }

    #[test]
    fn test_try_price_breakdown_overflow_in_vat_is_none() {
        // net fits, but sub_total + VAT does not
        let result = try_price_breakdown(
            Decimal::MAX,
            &MarkupConfig::percent(dec!(0)),
            VatRule::Domestic,
            dec!(15),
            1,
            1,
        );
        assert_eq!(result, None);
    }

    #[test]
    fn test_try_flight_total() {
        let markup = MarkupConfig::percent(dec!(8));
        let quotes = vec![quote("Economy", dec!(900), 4), quote("Business", dec!(3000), 1)];
        assert_eq!(
            try_flight_total(&quotes, &markup, VatRule::International, dec!(15)),
            Some(calculate_flight_total(&quotes, &markup, VatRule::International, dec!(15)))
        );

        let huge = vec![quote("First", Decimal::MAX, 1), quote("First", Decimal::MAX, 1)];
        assert_eq!(
            try_flight_total(&huge, &MarkupConfig::default(), VatRule::International, dec!(0)),
            None
        );
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = PriceBreakdown {
            sub_total: Decimal::MAX,
            vat_amount: dec!(0),
            grand_total: Decimal::MAX,
        };
        assert_eq!(max.checked_add(PriceBreakdown::default()), Some(max));
        assert_eq!(max.checked_add(max), None);
    }
}
