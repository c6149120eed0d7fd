use fractic_server_error::ServerError;

use crate::entities::{
    AccountRegistry, Diagnostic, Entry, SharingRule, Transaction, TransformOutput,
};

use super::{
    account_opener, account_rewriter::AccountRewriter, posting_expander::PostingExpander,
    posting_grouper::group_postings, rule_resolver::RuleResolver,
};

/// Runs the share transform over a full entry sequence.
///
/// Each transaction is resolved against the rule list; on a match its
/// postings are expanded and the counterparty postings netted, and a
/// transformed copy replaces it in the output. Every other entry passes
/// through unexamined. Declarations for accounts introduced by rerooting
/// are appended after the last input entry.
///
/// The only state shared across entries is the run-scoped account
/// registry; a transaction that fails to transform is emitted unchanged
/// and reported as a diagnostic instead of aborting the run.
pub(crate) struct ShareProcessor {
    rules: Vec<SharingRule>,
}

impl ShareProcessor {
    pub(crate) fn new(rules: Vec<SharingRule>) -> Self {
        Self { rules }
    }

    pub(crate) fn process(self, entries: Vec<Entry>) -> TransformOutput {
        let resolver = RuleResolver::new(&self.rules);
        let mut registry = AccountRegistry::new();
        let mut diagnostics = Vec::new();

        // Synthesized declarations are stamped with the run's source file,
        // taken from the first entry.
        let run_filename = entries
            .first()
            .map(|entry| entry.source().filename.clone())
            .unwrap_or_default();

        let mut output = Vec::with_capacity(entries.len());
        for entry in entries {
            let transformed = match entry {
                Entry::Transaction(tx) => match resolver.resolve(&tx) {
                    Some(rule) => match Self::share_expenses(&tx, rule) {
                        Ok((shared, introduced)) => {
                            tracing::debug!(
                                date = %tx.date,
                                tag = %rule.tag,
                                introduced = introduced.len(),
                                "Split shared expenses"
                            );
                            registry.merge(introduced);
                            Entry::Transaction(shared)
                        }
                        Err(e) => {
                            tracing::warn!(
                                date = %tx.date,
                                source = %tx.source.filename,
                                line = tx.source.line,
                                error = %e,
                                "Skipping transaction that failed to transform"
                            );
                            diagnostics.push(Diagnostic {
                                source: tx.source.clone(),
                                message: e.to_string(),
                            });
                            Entry::Transaction(tx)
                        }
                    },
                    None => Entry::Transaction(tx),
                },
                // Every other directive passes through unexamined.
                other => other,
            };
            output.push(transformed);
        }

        output.extend(account_opener::open_entries(&registry, &run_filename));
        TransformOutput {
            entries: output,
            diagnostics,
        }
    }

    /// Transforms one matched transaction, returning the transformed copy
    /// plus the accounts its rerooting introduced.
    fn share_expenses(
        tx: &Transaction,
        rule: &SharingRule,
    ) -> Result<(Transaction, AccountRegistry), ServerError> {
        let mut rewriter = AccountRewriter::new();
        let expanded = PostingExpander::new(rule).expand(&tx.postings, &mut rewriter)?;
        let grouped = group_postings(expanded, &rule.counterparty);
        Ok((tx.with_postings(grouped), rewriter.into_registry()))
    }
}
