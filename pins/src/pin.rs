//! Pin records as returned by the photo-search API.
//!
//! DESIGN
//! ======
//! Every field is optional and unknown fields are ignored. The board shows
//! whatever the remote returns, so a record missing `urls` still decodes and
//! renders as an empty tile instead of failing the whole page.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "pin_test.rs"]
mod tests;

/// One photo on the board.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub urls: Option<PinUrls>,
    #[serde(default)]
    pub alt_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub user: Option<PinUser>,
    #[serde(default)]
    pub links: Option<PinLinks>,
}

/// Image renditions keyed by size.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinUrls {
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub full: Option<String>,
    #[serde(default)]
    pub regular: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
}

/// Photographer attribution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinUser {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinLinks {
    #[serde(default)]
    pub html: Option<String>,
}

impl Pin {
    /// Build a pin that only carries a `regular` image URL.
    #[must_use]
    pub fn with_regular(url: impl Into<String>) -> Self {
        Self { urls: Some(PinUrls { regular: Some(url.into()), ..PinUrls::default() }), ..Self::default() }
    }

    /// The URL a board tile displays, if the record has one.
    #[must_use]
    pub fn image_src(&self) -> Option<&str> {
        self.urls.as_ref().and_then(|urls| urls.regular.as_deref())
    }
}
