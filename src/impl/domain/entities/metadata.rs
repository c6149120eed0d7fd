use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_derive::Deserialize;

/// Entry/posting metadata mapping. Keys iterate in a stable order so that
/// transformed output is deterministic.
pub type Meta = BTreeMap<String, MetaValue>;

/// One metadata value.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
pub enum MetaValue {
    Text(String),
    Number(Decimal),
    Bool(bool),
    Date(NaiveDate),
}
