use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{account::Account, metadata::Meta};

/// One expense-sharing rule.
///
/// Rules are supplied as an ordered, immutable list; list order encodes
/// precedence and the first matching rule wins. At most one rule applies to
/// any given transaction.
///
/// Invariants (enforced when the rule list is loaded, see
/// `SharingRuleModel`): `0 <= fraction <= 1`, `quantize > 0`,
/// `start_date < end_date`.
#[derive(Debug, PartialEq, Clone)]
pub struct SharingRule {
    /// Tag that opts a transaction into this rule.
    pub tag: String,
    /// Tag that opts a transaction out, even when `tag` is present.
    pub no_tag: String,
    /// Date stamped onto account declarations introduced by rerooting.
    pub open_date: NaiveDate,
    /// When set, replaces the leading `Expenses` segment of split postings
    /// with this (possibly multi-segment) prefix.
    pub reroot: Option<String>,
    /// Account receiving the non-kept share of each split expense.
    pub counterparty: Account,
    /// Fraction kept by the payer; the counterparty receives `1 - fraction`.
    pub fraction: Decimal,
    /// Metadata overlaid onto counterparty postings (rule keys win).
    pub meta: Meta,
    /// Smallest currency increment split amounts are rounded to.
    pub quantize: Decimal,
    /// Validity interval, half-open: `start_date <= date < end_date`.
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
