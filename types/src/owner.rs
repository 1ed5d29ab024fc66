//! Owner tags for asset units.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque owner tag.
///
/// Owners derived from an Ed25519 public key carry the `fct_` prefix
/// (see `facet_crypto::derive_owner`); only those can authorize spends.
/// Arbitrary labels are accepted so that units can be parked under
/// non-spendable owners (genesis bootstrap, burns).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(String);

impl OwnerId {
    /// The prefix of key-derived owner tags.
    pub const PREFIX: &'static str = "fct_";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this tag has the shape of a key-derived owner.
    pub fn is_key_derived(&self) -> bool {
        self.0.starts_with(Self::PREFIX) && self.0.len() > Self::PREFIX.len()
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OwnerId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for OwnerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
