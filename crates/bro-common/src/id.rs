use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier the engine assigns to a browser (one per tab).
///
/// Stable for the lifetime of the session. "No browser" is expressed as
/// `Option<BrowserId>`, never as a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrowserId(pub i32);

impl BrowserId {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for BrowserId {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for BrowserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
