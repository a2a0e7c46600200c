//! Shared error types for the services crate.

use thiserror::Error;

use drill_core::store::StoreError;
use sources::SourceError;

/// Errors emitted by `SessionEngine`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    /// An operation that requires an active session was called while idle or
    /// while a set load was still in flight.
    #[error("no active session")]
    NotActive,

    /// A load completion arrived for a superseded load; its payload was
    /// discarded and the engine state left untouched.
    #[error("stale set load discarded")]
    StaleLoad,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Load(#[from] SourceError),
}
