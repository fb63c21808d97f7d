use crate::types::{
    Pricing, CURRENCY_UNIT, GLOBAL_CAP_REFERENCE, INDIVIDUAL_CAP_REFERENCE, SCALE,
    UNIT_PRICE_DENOMINATOR, UNIT_PRICE_NUMERATOR,
};

/// Derive unit price and caps from an exchange rate
///
/// Formulas:
/// - unit_price = exchange_rate × SCALE / 0.40
/// - global_cap = CURRENCY_UNIT × 2,000,000 / exchange_rate
/// - individual_cap = CURRENCY_UNIT × 100,000 / exchange_rate
///
/// Example (exchange_rate = 400 $/unit):
/// - unit_price: 1,000 sale units per native unit
/// - global_cap: 5,000 native units
/// - individual_cap: 250 native units
///
/// Returns `None` for a non-positive rate, on overflow, or when a cap rounds to zero.
pub fn derive_pricing(exchange_rate: i128) -> Option<Pricing> {
    if exchange_rate <= 0 {
        return None;
    }

    let unit_price = exchange_rate
        .checked_mul(SCALE)?
        .checked_mul(UNIT_PRICE_DENOMINATOR)?
        .checked_div(UNIT_PRICE_NUMERATOR)?;

    let global_cap = CURRENCY_UNIT
        .checked_mul(GLOBAL_CAP_REFERENCE)?
        .checked_div(exchange_rate)?;
    let individual_cap = CURRENCY_UNIT
        .checked_mul(INDIVIDUAL_CAP_REFERENCE)?
        .checked_div(exchange_rate)?;

    if global_cap == 0 || individual_cap == 0 {
        return None;
    }

    Some(Pricing {
        exchange_rate,
        unit_price,
        global_cap,
        individual_cap,
    })
}

/// Portion of `value` that fits under both headrooms
///
/// Formula: accepted = min(value, individual_remaining, global_remaining)
pub fn calculate_accepted(value: i128, individual_remaining: i128, global_remaining: i128) -> i128 {
    value.min(individual_remaining).min(global_remaining)
}

/// Sale units bought by an accepted contribution, truncated toward zero
///
/// Formula: units = accepted × unit_price / SCALE
///
/// Example:
/// - accepted: 2 stroops, exchange_rate: 350
/// - unit_price: 875 × SCALE
/// - units: 2 × 875 = 1,750
pub fn calculate_units(accepted: i128, unit_price: i128) -> Option<i128> {
    accepted.checked_mul(unit_price)?.checked_div(SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_at_400() {
        let pricing = derive_pricing(400).unwrap();

        assert_eq!(pricing.exchange_rate, 400);
        assert_eq!(pricing.unit_price, 1_000 * SCALE);
        assert_eq!(pricing.global_cap, 5_000 * SCALE);
        assert_eq!(pricing.individual_cap, 250 * SCALE);
    }

    #[test]
    fn test_pricing_at_350() {
        let pricing = derive_pricing(350).unwrap();

        assert_eq!(pricing.unit_price, 875 * SCALE);
        // 2,000,000 / 350 = 5,714.2857142...
        assert_eq!(pricing.global_cap, 57_142_857_142);
        // 100,000 / 350 = 285.7142857...
        assert_eq!(pricing.individual_cap, 2_857_142_857);
    }

    #[test]
    fn test_rejects_non_positive_rate() {
        assert_eq!(derive_pricing(0), None);
        assert_eq!(derive_pricing(-350), None);
    }

    #[test]
    fn test_rejects_rate_that_empties_caps() {
        // individual_cap = 10^12 / rate, zero once rate exceeds 10^12
        assert!(derive_pricing(1_000_000_000_000).is_some());
        assert_eq!(derive_pricing(1_000_000_000_001), None);
    }

    #[test]
    fn test_rejects_overflowing_rate() {
        assert_eq!(derive_pricing(i128::MAX / 2), None);
    }

    #[test]
    fn test_accepted_is_smallest_headroom() {
        assert_eq!(calculate_accepted(100, 500, 1_000), 100);
        assert_eq!(calculate_accepted(700, 500, 1_000), 500);
        assert_eq!(calculate_accepted(700, 500, 300), 300);
    }

    #[test]
    fn test_units_scenario() {
        let pricing = derive_pricing(350).unwrap();
        assert_eq!(calculate_units(2, pricing.unit_price).unwrap(), 1_750);
    }

    #[test]
    fn test_units_truncate() {
        // unit_price of 2.5 sale units per native unit, 3 × 2.5 = 7.5
        let unit_price = 25 * SCALE / 10;
        assert_eq!(calculate_units(3, unit_price).unwrap(), 7);
    }
}
