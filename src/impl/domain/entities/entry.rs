use chrono::NaiveDate;

use super::{account::Account, amount::Amount, metadata::Meta, transaction::Transaction};

/// Position of an entry in its source ledger file.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SourceLocation {
    pub filename: String,
    pub line: u32,
}

impl SourceLocation {
    pub fn new(filename: impl Into<String>, line: u32) -> Self {
        Self {
            filename: filename.into(),
            line,
        }
    }

    /// Location stamp for entries synthesized by the transform itself.
    pub(crate) fn synthesized(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            line: 0,
        }
    }
}

/// Declares an account as open from a given date.
#[derive(Debug, PartialEq, Clone)]
pub struct Open {
    pub source: SourceLocation,
    pub date: NaiveDate,
    pub account: Account,
    /// Currency constraint; empty means unconstrained.
    pub currencies: Vec<String>,
    pub meta: Meta,
}

/// Declares an account as closed from a given date.
#[derive(Debug, PartialEq, Clone)]
pub struct Close {
    pub source: SourceLocation,
    pub date: NaiveDate,
    pub account: Account,
    pub meta: Meta,
}

/// Asserts an account balance on a given date.
#[derive(Debug, PartialEq, Clone)]
pub struct Balance {
    pub source: SourceLocation,
    pub date: NaiveDate,
    pub account: Account,
    pub amount: Amount,
    pub meta: Meta,
}

/// Free-form dated comment attached to an account.
#[derive(Debug, PartialEq, Clone)]
pub struct Note {
    pub source: SourceLocation,
    pub date: NaiveDate,
    pub account: Account,
    pub comment: String,
    pub meta: Meta,
}

/// One directive in the ledger's entry sequence. The transform only acts on
/// the `Transaction` variant; every other variant passes through unexamined
/// and unmodified.
#[derive(Debug, PartialEq, Clone)]
pub enum Entry {
    Transaction(Transaction),
    Open(Open),
    Close(Close),
    Balance(Balance),
    Note(Note),
}

impl Entry {
    pub fn source(&self) -> &SourceLocation {
        match self {
            Entry::Transaction(e) => &e.source,
            Entry::Open(e) => &e.source,
            Entry::Close(e) => &e.source,
            Entry::Balance(e) => &e.source,
            Entry::Note(e) => &e.source,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Entry::Transaction(e) => e.date,
            Entry::Open(e) => e.date,
            Entry::Close(e) => e.date,
            Entry::Balance(e) => e.date,
            Entry::Note(e) => e.date,
        }
    }
}
