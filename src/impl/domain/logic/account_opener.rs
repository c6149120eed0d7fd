use crate::entities::{AccountRegistry, Entry, Meta, Open, SourceLocation};

/// Synthesizes one account-declaration entry per account introduced by
/// rerooting during a run.
///
/// Declarations come out sorted ascending by account name (the registry's
/// iteration order), each dated at the open date of the rule that
/// introduced the account and stamped with the run's source file.
pub(crate) fn open_entries(registry: &AccountRegistry, filename: &str) -> Vec<Entry> {
    registry
        .iter()
        .map(|(account, open_date)| {
            Entry::Open(Open {
                source: SourceLocation::synthesized(filename),
                date: *open_date,
                account: account.clone(),
                currencies: Vec::new(),
                meta: Meta::new(),
            })
        })
        .collect()
}
