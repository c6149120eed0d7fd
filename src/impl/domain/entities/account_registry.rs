use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::account::Account;

/// Accounts introduced by rerooting during one pipeline run.
///
/// Each account is mapped to the open date of the rule that first
/// introduced it. The registry only grows, is scoped to a single run, and
/// iterates in ascending account-name order.
#[derive(Debug, Default)]
pub struct AccountRegistry {
    accounts: BTreeMap<Account, NaiveDate>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self {
            accounts: BTreeMap::new(),
        }
    }

    /// Records an introduced account. The first introduction wins: a later
    /// rule with a different open date does not re-date the account.
    pub fn record(&mut self, account: Account, open_date: NaiveDate) {
        self.accounts.entry(account).or_insert(open_date);
    }

    /// Folds another registry into this one, keeping first-wins semantics.
    pub fn merge(&mut self, other: AccountRegistry) {
        for (account, open_date) in other.accounts {
            self.record(account, open_date);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Ascending by account name.
    pub fn iter(&self) -> impl Iterator<Item = (&Account, &NaiveDate)> {
        self.accounts.iter()
    }
}
