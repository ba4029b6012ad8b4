//! HTTP methods
//!
//! The verbs an operation can be declared for.

use serde::{Deserialize, Serialize};

/// HTTP method of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HttpMethod {
    /// Read header attributes
    Head,
    /// Read
    Get,
    /// Create or update
    Post,
    /// Replace
    Put,
    /// Delete
    Delete,
    /// Describe available operations
    Options,
    /// Partial update
    Patch,
}

impl HttpMethod {
    /// All methods in canonical order
    pub const ALL: [Self; 7] =
        [Self::Head, Self::Get, Self::Post, Self::Put, Self::Delete, Self::Options, Self::Patch];

    /// Get the method name as it appears on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Head => "HEAD",
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Patch => "PATCH",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("Invalid method: {s}. Use: HEAD, GET, POST, PUT, DELETE, OPTIONS, PATCH")
            })
    }
}

impl TryFrom<String> for HttpMethod {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HttpMethod> for String {
    fn from(method: HttpMethod) -> Self {
        method.as_str().to_string()
    }
}
