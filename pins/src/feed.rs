//! Board feed: the pin list and the rules for updating it.
//!
//! DESIGN
//! ======
//! Every request takes a [`Ticket`] before it goes out. A response is applied
//! only if its ticket is not older than the newest one already applied, so a
//! slow earlier search can never overwrite a faster later one. Superseded
//! requests still run to completion; their results are dropped here.
//!
//! Shuffling is a uniform Fisher-Yates pass with a caller-supplied RNG.

use futures::future::try_join_all;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::SearchError;
use crate::pin::Pin;
use crate::search::ImageSearch;

#[cfg(test)]
#[path = "feed_test.rs"]
mod tests;

/// Canned queries issued when the board first loads.
pub const DEFAULT_TERMS: [&str; 4] = ["ocean", "Tokyo", "dogs", "cats"];

/// Generation number handed out by [`Feed::begin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Pins currently on the board plus request bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct Feed {
    pins: Vec<Pin>,
    issued: u64,
    applied: u64,
}

impl Feed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Reserve a ticket for a request that is about to be issued.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Replace the whole board with `pins`, shuffled.
    ///
    /// Returns `false` and leaves the board untouched if `ticket` is stale.
    pub fn replace<R: Rng + ?Sized>(&mut self, ticket: Ticket, mut pins: Vec<Pin>, rng: &mut R) -> bool {
        if !self.accept(ticket) {
            return false;
        }
        shuffle(&mut pins, rng);
        self.pins = pins;
        true
    }

    /// Put `results` in front of the current pins and reshuffle everything.
    ///
    /// Returns `false` and leaves the board untouched if `ticket` is stale.
    pub fn prepend<R: Rng + ?Sized>(&mut self, ticket: Ticket, mut results: Vec<Pin>, rng: &mut R) -> bool {
        if !self.accept(ticket) {
            return false;
        }
        results.append(&mut self.pins);
        shuffle(&mut results, rng);
        self.pins = results;
        true
    }

    fn accept(&mut self, ticket: Ticket) -> bool {
        if ticket.0 < self.applied {
            tracing::debug!(ticket = ticket.0, applied = self.applied, "dropping stale search response");
            return false;
        }
        self.applied = ticket.0;
        true
    }
}

/// Uniformly shuffle pins in place.
fn shuffle<R: Rng + ?Sized>(pins: &mut [Pin], rng: &mut R) {
    pins.shuffle(rng);
}

/// Run one search per term concurrently and concatenate the results.
///
/// Results are joined in `terms` order, not completion order. Any single
/// failure fails the whole batch.
///
/// # Errors
///
/// Returns the first [`SearchError`] produced by any of the searches.
pub async fn fetch_all<S>(search: &S, terms: &[&str]) -> Result<Vec<Pin>, SearchError>
where
    S: ImageSearch + ?Sized,
{
    let batches = try_join_all(terms.iter().map(|term| search.search(term))).await?;
    let pins: Vec<Pin> = batches.into_iter().flatten().collect();
    tracing::info!(terms = terms.len(), pins = pins.len(), "fetched initial pins");
    Ok(pins)
}
