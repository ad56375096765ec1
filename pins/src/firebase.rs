//! Firebase app handle.
//!
//! Built once by whoever owns the application context and passed down by
//! reference. Nothing on the rendering path reads it yet; it carries the
//! project coordinates that Firestore and Auth calls would need.

use crate::config::FirebaseConfig;
use crate::error::FirebaseError;

#[cfg(test)]
#[path = "firebase_test.rs"]
mod tests;

const FIRESTORE_API: &str = "https://firestore.googleapis.com/v1";
const GOOGLE_PROVIDER_ID: &str = "google.com";

/// An initialized Firebase project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FirebaseApp {
    config: FirebaseConfig,
}

/// Firestore handle scoped to the default database.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Firestore {
    pub project_id: String,
    pub documents_url: String,
}

/// Auth handle for the project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Auth {
    pub api_key: String,
    pub auth_domain: String,
}

/// Sign-in provider descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthProvider {
    pub provider_id: &'static str,
}

impl FirebaseApp {
    /// Validate the config and build the app handle.
    ///
    /// # Errors
    ///
    /// Returns [`FirebaseError::MissingField`] if `api_key` or `project_id`
    /// is empty.
    pub fn initialize(config: FirebaseConfig) -> Result<Self, FirebaseError> {
        if config.api_key.trim().is_empty() {
            return Err(FirebaseError::MissingField("api_key"));
        }
        if config.project_id.trim().is_empty() {
            return Err(FirebaseError::MissingField("project_id"));
        }
        tracing::info!(project_id = %config.project_id, "firebase app initialized");
        Ok(Self { config })
    }

    #[must_use]
    pub fn firestore(&self) -> Firestore {
        Firestore {
            project_id: self.config.project_id.clone(),
            documents_url: documents_url(&self.config.project_id),
        }
    }

    #[must_use]
    pub fn auth(&self) -> Auth {
        Auth { api_key: self.config.api_key.clone(), auth_domain: self.config.auth_domain.clone() }
    }

    #[must_use]
    pub fn google_provider(&self) -> AuthProvider {
        AuthProvider { provider_id: GOOGLE_PROVIDER_ID }
    }
}

fn documents_url(project_id: &str) -> String {
    format!("{FIRESTORE_API}/projects/{project_id}/databases/(default)/documents")
}
