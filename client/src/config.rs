//! Credentials baked into the browser bundle at compile time.
//!
//! The browser has no process environment, so the same variable names the
//! CLI reads at runtime are captured with `option_env!` when the bundle is
//! built.

use pins::{FirebaseConfig, UnsplashConfig};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Unsplash config, or `None` when the bundle was built without a key.
pub fn unsplash_config() -> Option<UnsplashConfig> {
    build_unsplash_config(option_env!("UNSPLASH_ACCESS_KEY"), option_env!("UNSPLASH_BASE_URL"))
}

/// Firebase project config; unset values are empty.
pub fn firebase_config() -> FirebaseConfig {
    let var = |value: Option<&str>| value.unwrap_or_default().to_owned();
    FirebaseConfig {
        api_key: var(option_env!("FIREBASE_API_KEY")),
        auth_domain: var(option_env!("FIREBASE_AUTH_DOMAIN")),
        project_id: var(option_env!("FIREBASE_PROJECT_ID")),
        storage_bucket: var(option_env!("FIREBASE_STORAGE_BUCKET")),
        messaging_sender_id: var(option_env!("FIREBASE_MESSAGING_SENDER_ID")),
        app_id: var(option_env!("FIREBASE_APP_ID")),
        measurement_id: var(option_env!("FIREBASE_MEASUREMENT_ID")),
    }
}

fn build_unsplash_config(access_key: Option<&str>, base_url: Option<&str>) -> Option<UnsplashConfig> {
    let access_key = access_key.map(str::trim).filter(|key| !key.is_empty())?;
    let mut config = UnsplashConfig::new(access_key);
    if let Some(base_url) = base_url {
        config.base_url = base_url.trim_end_matches('/').to_owned();
    }
    Some(config)
}
