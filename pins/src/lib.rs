//! Pin feed model, photo-search client, and board aggregation.
//!
//! This crate owns everything the board needs that is not rendering: the
//! [`Pin`] record decoded from Unsplash, the [`ImageSearch`] seam and its
//! `reqwest` implementation, the [`Feed`] that aggregates search results,
//! and the typed configuration for both Unsplash and Firebase. It is UI
//! agnostic so the Leptos `client` and the native CLI share it directly.

pub mod config;
pub mod error;
pub mod feed;
pub mod firebase;
pub mod pin;
pub mod search;
pub mod unsplash;

pub use config::{FirebaseConfig, UnsplashConfig};
pub use error::{FirebaseError, SearchError};
pub use feed::{DEFAULT_TERMS, Feed, Ticket};
pub use firebase::FirebaseApp;
pub use pin::{Pin, PinUrls};
pub use search::ImageSearch;
pub use unsplash::UnsplashClient;
