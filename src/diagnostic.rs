// Non-fatal conversion warnings.
//
// The block driver never aborts. When it meets a structural inconsistency it
// reports a Diagnostic to the sink injected at construction (if any), mirrors
// it to `tracing` when that feature is on, and carries on.

use crate::block::ListKind;

/// A structural inconsistency noticed during conversion.
///
/// `line` is the 1-based number of the input line being processed when the
/// problem surfaced (0 once the input is exhausted and the final flush runs
/// after an empty stream).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Diagnostic {
    /// A close was requested with only the document body left on the stack.
    #[error("line {line}: no open list to close")]
    UnbalancedClose { line: usize },
    /// A list level was closed before its opening tag was ever written.
    #[error("line {line}: closed {kind} list that never emitted an item")]
    EmptyList { line: usize, kind: ListKind },
}

/// Receiver for [`Diagnostic`]s.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
