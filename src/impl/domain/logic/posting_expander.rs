use fractic_server_error::ServerError;

use crate::entities::{Posting, SharingRule};

use super::{account_rewriter::AccountRewriter, amount_splitter::split_units};

/// Expands a matched transaction's posting list.
///
/// Every expense-category posting is replaced by two adjacent postings: the
/// kept share on the (possibly rerooted) expense account, followed by the
/// counterparty share. All other postings pass through unmodified, in their
/// original positions.
pub(crate) struct PostingExpander<'a> {
    rule: &'a SharingRule,
}

impl<'a> PostingExpander<'a> {
    pub(crate) fn new(rule: &'a SharingRule) -> Self {
        Self { rule }
    }

    pub(crate) fn expand(
        &self,
        postings: &[Posting],
        rewriter: &mut AccountRewriter,
    ) -> Result<Vec<Posting>, ServerError> {
        let mut expanded = Vec::with_capacity(postings.len());
        for posting in postings {
            if !posting.account.is_expense() {
                expanded.push(posting.clone());
                continue;
            }

            let split = split_units(&posting.units, self.rule);

            // Kept share: same posting with account and units overridden;
            // cost, price, flag, and metadata stay untouched.
            let kept_account = rewriter.rewrite(&posting.account, self.rule)?;
            expanded.push(posting.with_account(kept_account).with_units(split.kept));

            // Counterparty share: same cost and currency, no price, no
            // flag, original metadata overlaid with the rule's (rule keys
            // win on conflict).
            let mut meta = posting.meta.clone();
            meta.extend(self.rule.meta.clone());
            expanded.push(Posting {
                account: self.rule.counterparty.clone(),
                units: split.shared,
                cost: posting.cost.clone(),
                price: None,
                flag: None,
                meta,
            });
        }
        Ok(expanded)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;
    use crate::entities::{Account, Amount, Cost, Meta, MetaValue};

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).expect("valid decimal")
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn rule() -> SharingRule {
        SharingRule {
            tag: "wife".to_string(),
            no_tag: "noshare".to_string(),
            open_date: date(2013, 1, 1),
            reroot: None,
            counterparty: Account::new("Assets:US:Share:Wife"),
            fraction: dec("0.65"),
            meta: [("share".to_string(), MetaValue::Bool(true))]
                .into_iter()
                .collect(),
            quantize: dec("0.01"),
            start_date: date(2013, 1, 1),
            end_date: date(2019, 1, 1),
        }
    }

    fn expense(account: &str, number: &str) -> Posting {
        Posting::new(Account::new(account), Amount::new(dec(number), "USD"))
    }

    #[test]
    fn expense_posting_becomes_adjacent_pair() {
        let rule = rule();
        let mut rewriter = AccountRewriter::new();
        let expanded = PostingExpander::new(&rule)
            .expand(
                &[
                    expense("Expenses:Food", "100.00"),
                    Posting::new(
                        Account::new("Assets:US:Checking"),
                        Amount::new(dec("-100.00"), "USD"),
                    ),
                ],
                &mut rewriter,
            )
            .expect("expansion succeeds");

        assert_eq!(expanded.len(), 3);
        assert_eq!(expanded[0].account, Account::new("Expenses:Food"));
        assert_eq!(expanded[0].units, Amount::new(dec("65.00"), "USD"));
        assert_eq!(expanded[1].account, Account::new("Assets:US:Share:Wife"));
        assert_eq!(expanded[1].units, Amount::new(dec("35.00"), "USD"));
        assert_eq!(expanded[2].account, Account::new("Assets:US:Checking"));
        assert_eq!(expanded[2].units, Amount::new(dec("-100.00"), "USD"));
    }

    #[test]
    fn counterparty_meta_overlays_rule_keys_winning() {
        let rule = rule();
        let mut posting = expense("Expenses:Food", "100.00");
        posting.meta.insert(
            "share".to_string(),
            MetaValue::Text("original".to_string()),
        );
        posting.meta.insert(
            "receipt".to_string(),
            MetaValue::Text("r-42".to_string()),
        );

        let mut rewriter = AccountRewriter::new();
        let expanded = PostingExpander::new(&rule)
            .expand(&[posting], &mut rewriter)
            .expect("expansion succeeds");

        // Kept side keeps the original metadata untouched.
        assert_eq!(
            expanded[0].meta.get("share"),
            Some(&MetaValue::Text("original".to_string()))
        );
        // Counterparty side: rule key wins, unrelated keys survive.
        assert_eq!(expanded[1].meta.get("share"), Some(&MetaValue::Bool(true)));
        assert_eq!(
            expanded[1].meta.get("receipt"),
            Some(&MetaValue::Text("r-42".to_string()))
        );
    }

    #[test]
    fn cost_is_preserved_price_and_flag_are_not() {
        let rule = rule();
        let cost = Cost {
            number: dec("1.20"),
            currency: "EUR".to_string(),
            date: Some(date(2014, 3, 1)),
            label: None,
        };
        let mut posting = expense("Expenses:Food", "100.00");
        posting.cost = Some(cost.clone());
        posting.price = Some(Amount::new(dec("1.25"), "EUR"));
        posting.flag = Some('!');

        let mut rewriter = AccountRewriter::new();
        let expanded = PostingExpander::new(&rule)
            .expand(&[posting], &mut rewriter)
            .expect("expansion succeeds");

        // Kept side is a field-override copy.
        assert_eq!(expanded[0].cost, Some(cost.clone()));
        assert_eq!(expanded[0].price, Some(Amount::new(dec("1.25"), "EUR")));
        assert_eq!(expanded[0].flag, Some('!'));
        // Counterparty side carries the cost only.
        assert_eq!(expanded[1].cost, Some(cost));
        assert_eq!(expanded[1].price, None);
        assert_eq!(expanded[1].flag, None);
    }

    #[test]
    fn non_expense_postings_pass_through() {
        let rule = rule();
        let postings = vec![Posting::new(
            Account::new("Liabilities:CreditCard"),
            Amount::new(dec("-20.00"), "USD"),
        )];
        let mut rewriter = AccountRewriter::new();
        let expanded = PostingExpander::new(&rule)
            .expand(&postings, &mut rewriter)
            .expect("expansion succeeds");
        assert_eq!(expanded, postings);
    }
}
