//! Shared contract for record schemas held in an append-only store.

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::ModelError;

/// A record schema stored by `service::storage::ResourceStore`.
///
/// `Input` is the shape a client submits. `from_input` builds the stored record
/// from that input and the identifier the store allocated for it
/// (`count_before_insert + 1`). Kinds without an identifier ignore `next_id`
/// and store the input unchanged.
pub trait Resource: Clone + Send + Sync + Serialize + 'static {
    type Input: Validate + DeserializeOwned + Send + 'static;

    /// Label used in logs and metrics, e.g. `users`.
    const KIND: &'static str;

    fn from_input(input: Self::Input, next_id: u64) -> Self;

    /// Server-assigned identifier, `None` for kinds stored without one.
    fn id(&self) -> Option<u64> {
        None
    }
}

/// Boundary-side check, run before an input ever reaches a store.
///
/// Deserialization already enforces field presence and types; the default
/// accepts any well-typed input, empty strings included.
pub trait Validate {
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}
