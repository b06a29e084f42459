/// Errors that can occur while streaming a conversion through I/O.
///
/// The converter itself never fails: malformed markup degrades gracefully and
/// structural problems are reported as [`Diagnostic`](crate::Diagnostic)s.
/// Only reading the input or writing the output can go wrong.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Md2XhtmlError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
