//! Photo-search seam used by the feed.
//!
//! The board only needs "term in, pins out". Keeping that behind a trait lets
//! tests drive the feed with fixed results and keeps the HTTP client out of
//! the aggregation logic.

use crate::error::SearchError;
use crate::pin::Pin;

/// Anything that can turn a free-text query into a list of pins.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single-threaded event loop.
#[async_trait::async_trait(?Send)]
pub trait ImageSearch {
    /// Run one search. The term is passed through unvalidated, empty included.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    async fn search(&self, term: &str) -> Result<Vec<Pin>, SearchError>;
}
