//! Error types for the session shell.

use thiserror::Error;
use tg_core::FsError;

/// Result type for session operations.
pub type ShellResult<T> = Result<T, ShellError>;

/// Errors surfaced by session entry points.
///
/// Commands never fail; only export and import report errors to the caller.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The imported document was rejected; the previous filesystem is kept.
    #[error("failed to load filesystem: {0}")]
    Import(#[source] FsError),

    /// The filesystem could not be written out.
    #[error("failed to save filesystem: {0}")]
    Export(#[source] FsError),
}
