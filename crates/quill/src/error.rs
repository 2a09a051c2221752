//! Error types for quill

use thiserror::Error;

/// Result type alias for quill operations
pub type QuillResult<T> = Result<T, QuillError>;

/// Error types for query assembly
#[derive(Debug, Error)]
pub enum QuillError {
    /// Placeholder count and bound-argument count diverged during assembly.
    ///
    /// This is an internal-consistency failure of the generator, not a
    /// recoverable input error: it means text and arguments were emitted out
    /// of step (or the caller smuggled a literal `?` into raw query text,
    /// which is unsupported).
    #[error(
        "an invalid number of arguments was generated - this is likely an internal error of the generator"
    )]
    GeneratorMismatch,
}
