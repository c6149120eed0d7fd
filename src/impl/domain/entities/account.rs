use std::fmt;

/// Leading segment value that marks an account as a sharable expense.
pub(crate) const EXPENSE_ROOT: &str = "Expenses";

/// A hierarchical, colon-delimited account name
/// (e.g. `Expenses:Food:Dining`). Case-sensitive; no structural assumptions
/// are made beyond the segment delimiter.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Account(String);

impl Account {
    pub fn new(name: impl Into<String>) -> Self {
        Account(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// The colon-delimited path segments, in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(':')
    }

    /// Reassembles an account name from path segments.
    pub fn from_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
        Account(segments.into_iter().collect::<Vec<_>>().join(":"))
    }

    /// The leading path segment.
    pub fn root(&self) -> &str {
        self.0.split(':').next().unwrap_or("")
    }

    /// Whether the leading segment is the expense category. Matching is
    /// done on the whole segment, so `ExpensesFoo:Bar` does not qualify.
    pub(crate) fn is_expense(&self) -> bool {
        self.root() == EXPENSE_ROOT
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Account {
    fn from(name: &str) -> Self {
        Account(name.to_string())
    }
}
