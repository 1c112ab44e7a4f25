// SPDX-License-Identifier: MIT
//! Store error taxonomy.

use thiserror::Error;

/// Failure while persisting the event document.
///
/// Only writes can fail. Reads never produce an error: missing or malformed
/// data fails open to an empty list (see [`crate::store::EventStore`]).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file I/O failed (permissions, disk full, quota).
    #[error("event store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The event list could not be serialised to JSON.
    #[error("serialise event list: {0}")]
    Serialize(#[from] serde_json::Error),
}
