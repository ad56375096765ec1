//! Unsplash and Firebase configuration parsed from environment variables.

use crate::error::SearchError;

pub const DEFAULT_UNSPLASH_BASE_URL: &str = "https://api.unsplash.com";
pub const DEFAULT_PER_PAGE: u32 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

const ACCESS_KEY_VAR: &str = "UNSPLASH_ACCESS_KEY";

// =============================================================================
// UNSPLASH
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for SearchTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsplashConfig {
    pub access_key: String,
    pub base_url: String,
    pub per_page: u32,
    pub timeouts: SearchTimeouts,
}

impl UnsplashConfig {
    /// Config with default endpoint, page size and timeouts.
    #[must_use]
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            base_url: DEFAULT_UNSPLASH_BASE_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
            timeouts: SearchTimeouts::default(),
        }
    }

    /// Build typed Unsplash config from environment variables.
    ///
    /// Required:
    /// - `UNSPLASH_ACCESS_KEY`
    ///
    /// Optional:
    /// - `UNSPLASH_BASE_URL`: default `https://api.unsplash.com`
    /// - `UNSPLASH_PER_PAGE`: default 10
    /// - `UNSPLASH_REQUEST_TIMEOUT_SECS`: default 30
    /// - `UNSPLASH_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if the access key is missing or empty, or if
    /// `UNSPLASH_PER_PAGE` is not a positive integer.
    pub fn from_env() -> Result<Self, SearchError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading each `UNSPLASH_*` name through
    /// `lookup` so callers can layer their own sources over the environment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SearchError> {
        let access_key = lookup(ACCESS_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| SearchError::MissingAccessKey { var: ACCESS_KEY_VAR.into() })?;

        let base_url = normalize_base_url(lookup("UNSPLASH_BASE_URL").as_deref());
        let per_page = lookup("UNSPLASH_PER_PAGE").as_deref().map_or(Ok(DEFAULT_PER_PAGE), parse_per_page)?;
        let timeouts = SearchTimeouts {
            request_secs: parse_u64(lookup("UNSPLASH_REQUEST_TIMEOUT_SECS"), DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(lookup("UNSPLASH_CONNECT_TIMEOUT_SECS"), DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { access_key, base_url, per_page, timeouts })
    }
}

fn normalize_base_url(raw: Option<&str>) -> String {
    raw.unwrap_or(DEFAULT_UNSPLASH_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Page size must be a positive integer.
///
/// # Errors
///
/// Returns [`SearchError::ConfigParse`] for zero or non-numeric input.
pub fn parse_per_page(raw: &str) -> Result<u32, SearchError> {
    match raw.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(SearchError::ConfigParse(format!("invalid UNSPLASH_PER_PAGE: {raw}"))),
        Ok(n) => Ok(n),
    }
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.parse::<u64>().ok()).unwrap_or(default)
}

// =============================================================================
// FIREBASE
// =============================================================================

/// Static project credentials handed to [`crate::FirebaseApp::initialize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    pub measurement_id: String,
}

impl FirebaseConfig {
    /// Read `FIREBASE_*` variables; unset values become empty strings.
    ///
    /// Presence is checked when the app handle is initialized, not here.
    #[must_use]
    pub fn from_env() -> Self {
        let var = |key: &str| std::env::var(key).unwrap_or_default();
        Self {
            api_key: var("FIREBASE_API_KEY"),
            auth_domain: var("FIREBASE_AUTH_DOMAIN"),
            project_id: var("FIREBASE_PROJECT_ID"),
            storage_bucket: var("FIREBASE_STORAGE_BUCKET"),
            messaging_sender_id: var("FIREBASE_MESSAGING_SENDER_ID"),
            app_id: var("FIREBASE_APP_ID"),
            measurement_id: var("FIREBASE_MEASUREMENT_ID"),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
