use fractic_server_error::ServerError;

use crate::{
    entities::{Account, AccountRegistry, SharingRule},
    errors::MalformedAccountName,
};

/// Rewrites split expense accounts into a rule's reroot namespace,
/// recording every account it introduces.
///
/// Owns a registry local to one transaction; the caller folds it into the
/// run-scoped registry only after the whole transaction transformed
/// cleanly, so a failed entry never leaves stray introductions behind.
pub(crate) struct AccountRewriter {
    registry: AccountRegistry,
}

impl AccountRewriter {
    pub(crate) fn new() -> Self {
        Self {
            registry: AccountRegistry::new(),
        }
    }

    /// Replaces the leading segment of `account` with the rule's reroot
    /// prefix (itself possibly multi-segment). Returns the account
    /// unchanged when the rule has no reroot configured.
    ///
    /// Callers only pass expense-category accounts here; rewriting is
    /// purely segment-based, never substring-based.
    pub(crate) fn rewrite(
        &mut self,
        account: &Account,
        rule: &SharingRule,
    ) -> Result<Account, ServerError> {
        let Some(reroot) = &rule.reroot else {
            return Ok(account.clone());
        };
        let rerooted =
            Account::from_segments(reroot.split(':').chain(account.segments().skip(1)));
        if rerooted.segments().any(|segment| segment.is_empty()) {
            return Err(MalformedAccountName::new(rerooted.name()));
        }
        self.registry.record(rerooted.clone(), rule.open_date);
        Ok(rerooted)
    }

    pub(crate) fn into_registry(self) -> AccountRegistry {
        self.registry
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;
    use crate::entities::Meta;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn rule(reroot: Option<&str>) -> SharingRule {
        SharingRule {
            tag: "wife".to_string(),
            no_tag: "noshare".to_string(),
            open_date: date(2013, 1, 1),
            reroot: reroot.map(|r| r.to_string()),
            counterparty: Account::new("Assets:US:Share:Wife"),
            fraction: Decimal::from_str("0.65").expect("valid decimal"),
            meta: Meta::new(),
            quantize: Decimal::from_str("0.01").expect("valid decimal"),
            start_date: date(2013, 1, 1),
            end_date: date(2019, 1, 1),
        }
    }

    #[test]
    fn no_reroot_returns_account_unchanged() {
        let mut rewriter = AccountRewriter::new();
        let account = Account::new("Expenses:Food");
        let rewritten = rewriter
            .rewrite(&account, &rule(None))
            .expect("rewrite succeeds");
        assert_eq!(rewritten, account);
        assert!(rewriter.into_registry().is_empty());
    }

    #[test]
    fn reroot_replaces_leading_segment_and_records() {
        let mut rewriter = AccountRewriter::new();
        let rewritten = rewriter
            .rewrite(&Account::new("Expenses:Food"), &rule(Some("Expenses:Shared")))
            .expect("rewrite succeeds");
        assert_eq!(rewritten, Account::new("Expenses:Shared:Food"));

        let registry = rewriter.into_registry();
        assert_eq!(registry.len(), 1);
        let (account, open_date) = registry.iter().next().expect("one account");
        assert_eq!(*account, Account::new("Expenses:Shared:Food"));
        assert_eq!(*open_date, date(2013, 1, 1));
    }

    #[test]
    fn repeated_rewrites_record_once() {
        let mut rewriter = AccountRewriter::new();
        let rule = rule(Some("Expenses:Shared"));
        for _ in 0..3 {
            rewriter
                .rewrite(&Account::new("Expenses:Food"), &rule)
                .expect("rewrite succeeds");
        }
        assert_eq!(rewriter.into_registry().len(), 1);
    }

    #[test]
    fn empty_prefix_segment_is_rejected() {
        let mut rewriter = AccountRewriter::new();
        assert!(rewriter
            .rewrite(&Account::new("Expenses:Food"), &rule(Some("")))
            .is_err());
        assert!(rewriter
            .rewrite(&Account::new("Expenses:Food"), &rule(Some("Shared:")))
            .is_err());
    }
}
