use std::collections::HashSet;

use chrono::NaiveDate;

use super::{
    account::Account,
    amount::{Amount, Cost},
    entry::SourceLocation,
    metadata::Meta,
};

/// One line of a transaction: an amount moved into or out of one account.
/// Postings are owned by exactly one transaction, never shared.
#[derive(Debug, PartialEq, Clone)]
pub struct Posting {
    pub account: Account,
    pub units: Amount,
    pub cost: Option<Cost>,
    pub price: Option<Amount>,
    pub flag: Option<char>,
    pub meta: Meta,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Transaction {
    pub source: SourceLocation,
    pub date: NaiveDate,
    pub flag: char,
    pub payee: Option<String>,
    pub narration: String,
    /// Unordered, unique tags (without the leading `#`).
    pub tags: HashSet<String>,
    pub meta: Meta,
    pub postings: Vec<Posting>,
}

// --

impl Posting {
    pub fn new(account: Account, units: Amount) -> Self {
        Self {
            account,
            units,
            cost: None,
            price: None,
            flag: None,
            meta: Meta::new(),
        }
    }

    /// Copy with the account overridden.
    pub fn with_account(&self, account: Account) -> Self {
        Self {
            account,
            ..self.clone()
        }
    }

    /// Copy with the units overridden.
    pub fn with_units(&self, units: Amount) -> Self {
        Self {
            units,
            ..self.clone()
        }
    }
}

impl Transaction {
    /// Copy with the posting list overridden.
    pub fn with_postings(&self, postings: Vec<Posting>) -> Self {
        Self {
            postings,
            ..self.clone()
        }
    }
}
