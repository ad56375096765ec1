//! Error types for search and bootstrap operations.

// =============================================================================
// SEARCH
// =============================================================================

/// Errors produced while configuring or calling the photo-search API.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The access key environment variable is not set.
    #[error("missing access key: env var {var} not set")]
    MissingAccessKey { var: String },

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request failed before a response arrived.
    #[error("search request failed: {0}")]
    Request(String),

    /// The search API returned a non-success HTTP status.
    #[error("search response error: status {status}")]
    Response { status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("search response parse failed: {0}")]
    Parse(String),
}

impl SearchError {
    /// Whether a later attempt could plausibly succeed. Reported in logs only.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Response { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// FIREBASE
// =============================================================================

/// Errors produced while bootstrapping the Firebase app handle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FirebaseError {
    /// A required configuration field is empty.
    #[error("firebase config field `{0}` is empty")]
    MissingField(&'static str),
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
