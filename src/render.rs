//! Text and JSON rendering of the board for stdout.

use std::fmt::Write as _;

use pins::{FirebaseApp, Pin};

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;

const MISSING_SRC: &str = "-";

/// One image URL per line, `-` for pins without one.
pub fn render_lines(pins: &[Pin]) -> String {
    let mut out = String::new();
    for pin in pins {
        let _ = writeln!(out, "{}", pin.image_src().unwrap_or(MISSING_SRC));
    }
    out
}

pub fn render_json(pins: &[Pin]) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(pins)?;
    out.push('\n');
    Ok(out)
}

pub fn render_firebase(app: &FirebaseApp) -> String {
    let firestore = app.firestore();
    let auth = app.auth();
    format!(
        "project: {}\nfirestore: {}\nauth domain: {}\nprovider: {}\n",
        firestore.project_id,
        firestore.documents_url,
        auth.auth_domain,
        app.google_provider().provider_id
    )
}
