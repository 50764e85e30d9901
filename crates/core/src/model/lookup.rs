use serde::{Deserialize, Serialize};
use std::fmt;

/// Student name as typed into the search form.
///
/// The value is kept exactly as entered: no trimming, no case folding.
/// Lookups compare it byte-for-byte against dataset keys.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupKey(String);

impl LookupKey {
    /// Creates a new `LookupKey`
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the raw name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for LookupKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LookupKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LookupKey({:?})", self.0)
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
