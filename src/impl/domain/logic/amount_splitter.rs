use rust_decimal::{Decimal, RoundingStrategy};

use crate::entities::{Amount, SharingRule};

/// The two sides of one split expense amount, both carrying the currency of
/// the input.
///
/// Each side is rounded to the rule's quantize step independently, so
/// `kept + shared` may differ from the original quantity by up to one step.
/// That drift is accepted behavior, not corrected.
pub(crate) struct SplitUnits {
    pub(crate) kept: Amount,
    pub(crate) shared: Amount,
}

pub(crate) fn split_units(units: &Amount, rule: &SharingRule) -> SplitUnits {
    let kept = quantize(units.number * rule.fraction, rule.quantize);
    let shared = quantize(units.number * (Decimal::ONE - rule.fraction), rule.quantize);
    SplitUnits {
        kept: units.with_number(kept),
        shared: units.with_number(shared),
    }
}

/// Rounds `value` to the nearest multiple of `step`, half to even.
fn quantize(value: Decimal, step: Decimal) -> Decimal {
    (value / step).round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven) * step
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::NaiveDate;

    use super::*;
    use crate::entities::{Account, Meta};

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).expect("valid decimal")
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn rule(fraction: &str, quantize: &str) -> SharingRule {
        SharingRule {
            tag: "wife".to_string(),
            no_tag: "noshare".to_string(),
            open_date: date(2013, 1, 1),
            reroot: None,
            counterparty: Account::new("Assets:US:Share:Wife"),
            fraction: dec(fraction),
            meta: Meta::new(),
            quantize: dec(quantize),
            start_date: date(2013, 1, 1),
            end_date: date(2019, 1, 1),
        }
    }

    #[test]
    fn splits_and_quantizes_both_sides() {
        let split = split_units(&Amount::new(dec("100.00"), "USD"), &rule("0.65", "0.01"));
        assert_eq!(split.kept, Amount::new(dec("65.00"), "USD"));
        assert_eq!(split.shared, Amount::new(dec("35.00"), "USD"));
    }

    #[test]
    fn rounds_half_to_even() {
        // 0.125 * 0.5 = 0.0625; 6.25 steps of 0.01 rounds down to 6.
        let split = split_units(&Amount::new(dec("0.125"), "USD"), &rule("0.5", "0.01"));
        assert_eq!(split.kept.number, dec("0.06"));
        // 0.25 * 0.5 = 0.125; 12.5 steps is a midpoint and rounds to 12.
        let split = split_units(&Amount::new(dec("0.25"), "USD"), &rule("0.5", "0.01"));
        assert_eq!(split.kept.number, dec("0.12"));
        // 0.27 * 0.5 = 0.135; 13.5 steps is a midpoint and rounds to 14.
        let split = split_units(&Amount::new(dec("0.27"), "USD"), &rule("0.5", "0.01"));
        assert_eq!(split.kept.number, dec("0.14"));
    }

    #[test]
    fn independent_rounding_may_drift_one_step() {
        // Both sides of 100.01 at 0.5 round to 50.00; the sum drops a cent.
        let split = split_units(&Amount::new(dec("100.01"), "USD"), &rule("0.5", "0.01"));
        assert_eq!(split.kept.number, dec("50.00"));
        assert_eq!(split.shared.number, dec("50.00"));
        let drift = dec("100.01") - (split.kept.number + split.shared.number);
        assert!(drift.abs() <= dec("0.01"));
    }

    #[test]
    fn negative_quantities_split_symmetrically() {
        let split = split_units(&Amount::new(dec("-100.00"), "USD"), &rule("0.65", "0.01"));
        assert_eq!(split.kept.number, dec("-65.00"));
        assert_eq!(split.shared.number, dec("-35.00"));
    }

    #[test]
    fn coarser_quantize_steps_apply() {
        let split = split_units(&Amount::new(dec("100.00"), "USD"), &rule("0.80", "0.005"));
        assert_eq!(split.kept.number, dec("80.000"));
        assert_eq!(split.shared.number, dec("20.000"));
    }
}
