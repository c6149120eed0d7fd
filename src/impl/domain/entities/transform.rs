use super::entry::{Entry, SourceLocation};

/// A processing problem attached to a single entry.
///
/// The pipeline never aborts on these: the offending entry is emitted
/// unchanged and the problem is reported here instead.
#[derive(Debug, PartialEq, Clone)]
pub struct Diagnostic {
    pub source: SourceLocation,
    pub message: String,
}

/// Result of one transform run: the transformed entry sequence (original
/// order preserved, synthesized declarations appended at the end) plus any
/// per-entry problems encountered along the way.
#[derive(Debug, PartialEq, Clone)]
pub struct TransformOutput {
    pub entries: Vec<Entry>,
    pub diagnostics: Vec<Diagnostic>,
}
