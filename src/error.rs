//! Failure taxonomy for the editor core
//!
//! Nothing here is fatal: every error has a designated recovery (fall back
//! to stored or empty content, run memory-only, leave the UI unchanged) and
//! the editor always ends up with a valid document and preferences.

use thiserror::Error;

/// Recoverable failures surfaced by the core and its ports
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Share token could not be decoded back into document text.
    /// Callers treat this the same as "no fragment present".
    #[error("invalid share token")]
    InvalidEncoding,

    /// Durable storage could not be read or written. The session keeps
    /// running in memory only; nothing persists until storage returns.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The clipboard collaborator rejected the write. The share action
    /// reports failure and changes no state.
    #[error("clipboard denied")]
    ClipboardDenied,
}
