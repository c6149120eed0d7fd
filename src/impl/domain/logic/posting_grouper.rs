use rust_decimal::Decimal;

use crate::entities::{Account, Amount, Cost, Posting};

/// Net quantity per distinct (currency, cost) pair, in first-seen order so
/// that grouped output is deterministic.
struct NetPositions {
    positions: Vec<((String, Option<Cost>), Decimal)>,
}

impl NetPositions {
    fn new() -> Self {
        Self {
            positions: Vec::new(),
        }
    }

    fn add(&mut self, posting: &Posting) {
        let key = (posting.units.currency.clone(), posting.cost.clone());
        match self.positions.iter_mut().find(|(k, _)| *k == key) {
            Some((_, number)) => *number += posting.units.number,
            None => self.positions.push((key, posting.units.number)),
        }
    }
}

/// Merges all postings addressed to `target` into one net posting per
/// (currency, cost) pair.
///
/// Non-target postings keep their relative order; the merged postings are
/// appended at the end, carrying the metadata of the first target posting
/// encountered. A sequence without any target posting is returned
/// unchanged.
pub(crate) fn group_postings(postings: Vec<Posting>, target: &Account) -> Vec<Posting> {
    let mut grouped = Vec::with_capacity(postings.len());
    let mut target_postings = Vec::new();
    let mut balance = NetPositions::new();

    for posting in postings {
        if posting.account == *target {
            balance.add(&posting);
            target_postings.push(posting);
        } else {
            grouped.push(posting);
        }
    }

    if let Some(first) = target_postings.first() {
        for ((currency, cost), number) in balance.positions {
            grouped.push(Posting {
                account: target.clone(),
                units: Amount::new(number, currency),
                cost,
                price: None,
                flag: None,
                meta: first.meta.clone(),
            });
        }
    }
    grouped
}
