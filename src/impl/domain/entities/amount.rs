use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A signed quantity of some commodity, e.g. `100.00 USD`.
///
/// Currency codes are opaque case-sensitive strings; no ISO validation is
/// performed and no conversion between currencies ever happens.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Amount {
    pub number: Decimal,
    pub currency: String,
}

impl Amount {
    pub fn new(number: Decimal, currency: impl Into<String>) -> Self {
        Self {
            number,
            currency: currency.into(),
        }
    }

    /// Copy with the number overridden, currency kept.
    pub fn with_number(&self, number: Decimal) -> Self {
        Self {
            number,
            currency: self.currency.clone(),
        }
    }
}

/// Lot-identifying cost basis attached to a posting's amount. Preserved
/// verbatim through splitting and grouping.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Cost {
    pub number: Decimal,
    pub currency: String,
    pub date: Option<NaiveDate>,
    pub label: Option<String>,
}
