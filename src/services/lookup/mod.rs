/// Movie lookup abstraction
///
/// A lookup resolves a title query to a single movie record. The only
/// implementation talks to OMDb; the trait keeps the form logic testable
/// without a network.
use crate::{error::LookupError, models::LookupSuccess};

pub mod omdb;

pub use omdb::OmdbClient;

/// Outcome of a single lookup
pub type LookupResult = Result<LookupSuccess, LookupError>;

/// Trait for movie lookup providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieLookup: Send + Sync {
    /// Look up a movie by title
    ///
    /// Callers pass a trimmed, non-empty query. Every failure is reported as a
    /// `LookupError`; implementations never panic on bad responses.
    async fn lookup(&self, query: &str) -> LookupResult;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
