//! Runs board searches on the browser event loop.
//!
//! ERROR HANDLING
//! ==============
//! A failed search is logged and the board keeps its current pins. There is
//! no error or loading UI; nothing retries.

use leptos::prelude::*;
use pins::feed::fetch_all;
use pins::{DEFAULT_TERMS, Feed, ImageSearch};

/// Fetch the canned terms concurrently and replace the board with them.
pub fn load_initial<S>(search: S, feed: RwSignal<Feed>)
where
    S: ImageSearch + 'static,
{
    let Some(ticket) = feed.try_update(Feed::begin) else {
        return;
    };
    leptos::task::spawn_local(async move {
        match fetch_all(&search, &DEFAULT_TERMS).await {
            Ok(pins) => {
                let count = pins.len();
                feed.update(|f| {
                    if f.replace(ticket, pins, &mut rand::rng()) {
                        log::debug!("initial board loaded with {count} pins");
                    }
                });
            }
            Err(err) => log::error!("initial board load failed: {err}"),
        }
    });
}

/// Search for `term` and put the results in front of the current pins.
pub fn search_and_prepend<S>(search: S, feed: RwSignal<Feed>, term: String)
where
    S: ImageSearch + 'static,
{
    let Some(ticket) = feed.try_update(Feed::begin) else {
        return;
    };
    leptos::task::spawn_local(async move {
        match search.search(&term).await {
            Ok(results) => {
                feed.update(|f| {
                    if !f.prepend(ticket, results, &mut rand::rng()) {
                        log::debug!("discarded stale results for {term:?}");
                    }
                });
            }
            Err(err) if err.retryable() => log::warn!("search for {term:?} failed, may succeed later: {err}"),
            Err(err) => log::error!("search for {term:?} failed: {err}"),
        }
    });
}
