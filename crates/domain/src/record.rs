//! Keyed record: a stored value together with the identifier the store assigned.

use serde::{Deserialize, Serialize};

/// A record paired with its identifier.
///
/// Serializes flat: `{ "id": ..., ...fields }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyed<I, T> {
    pub id: I,
    #[serde(flatten)]
    pub value: T,
}

impl<I, T> Keyed<I, T> {
    #[must_use]
    pub fn new(id: I, value: T) -> Self {
        Self { id, value }
    }
}
