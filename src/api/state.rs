use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::services::{FindMovie, MovieLookup, OmdbClient};
use crate::store::{InMemoryMovieStore, MovieStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<RwLock<AppStateInner>>,
    pub lookup: Arc<dyn MovieLookup>,
    /// Poster used for titles the provider has no image for
    pub default_poster: Arc<str>,
}

/// Inner state that can be modified
pub struct AppStateInner {
    pub form: FindMovie,
    pub movies: Box<dyn MovieStore>,
}

impl AppState {
    /// Creates state with an empty form and an empty in-memory collection
    pub fn new(lookup: Arc<dyn MovieLookup>, default_poster: impl Into<String>) -> Self {
        Self::with_store(lookup, default_poster, Box::new(InMemoryMovieStore::new()))
    }

    /// Creates state around an externally supplied movie collection
    pub fn with_store(
        lookup: Arc<dyn MovieLookup>,
        default_poster: impl Into<String>,
        movies: Box<dyn MovieStore>,
    ) -> Self {
        let default_poster: String = default_poster.into();

        Self {
            inner: Arc::new(RwLock::new(AppStateInner {
                form: FindMovie::new(default_poster.clone()),
                movies,
            })),
            lookup,
            default_poster: default_poster.into(),
        }
    }

    /// Creates state backed by the OMDb client described by `config`
    pub fn from_config(config: &Config) -> Self {
        let lookup = OmdbClient::from_config(config);
        tracing::info!(
            provider = lookup.name(),
            api_url = %config.omdb_api_url,
            expose_error_detail = config.expose_lookup_error_detail,
            "Movie lookup configured"
        );

        Self::new(Arc::new(lookup), config.default_poster_url.clone())
    }
}
