use crate::entities::{SharingRule, Transaction};

/// Selects the sharing rule applicable to a transaction, if any.
///
/// Rules are walked in list order and the first match wins; a transaction
/// is never split by more than one rule. A rule matches iff its tag is
/// present on the transaction, its exclusion tag is absent, and the
/// transaction date falls within the rule's half-open validity interval.
///
/// Resolution has no side effects and is stable: the same transaction and
/// rule list always yield the same rule or none.
pub(crate) struct RuleResolver<'a> {
    rules: &'a [SharingRule],
}

impl<'a> RuleResolver<'a> {
    pub(crate) fn new(rules: &'a [SharingRule]) -> Self {
        Self { rules }
    }

    pub(crate) fn resolve(&self, tx: &Transaction) -> Option<&'a SharingRule> {
        self.rules.iter().find(|rule| {
            tx.tags.contains(&rule.tag)
                && !tx.tags.contains(&rule.no_tag)
                && rule.start_date <= tx.date
                && tx.date < rule.end_date
        })
    }
}
