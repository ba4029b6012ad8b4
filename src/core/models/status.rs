//! Status codes and declared outcomes
//!
//! A status code is stored exactly as declared so that out-of-range values can
//! be reported by validation instead of being rejected while loading.

use serde::{Deserialize, Serialize};

/// Lowest valid HTTP status code
pub const MIN_STATUS: u16 = 100;

/// Highest valid HTTP status code
pub const MAX_STATUS: u16 = 599;

/// An HTTP status code as declared by a definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCode(u16);

impl StatusCode {
    /// Wrap a raw code without range checking
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Whether the code lies in [100, 599]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 >= MIN_STATUS && self.0 <= MAX_STATUS
    }

    /// Whether the code is a 2xx success code
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A status code paired with the condition under which it is returned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCodeOutcome {
    /// The status code
    pub code: StatusCode,

    /// When this code is returned (e.g., "If the requested person is not found.")
    pub condition: String,
}

impl StatusCodeOutcome {
    /// Create a new outcome
    pub fn new(code: impl Into<StatusCode>, condition: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            condition: condition.into(),
        }
    }
}
