use serde::Serialize;
use std::fmt::Display;

use crate::{
    error::{LookupError, LookupErrorReason},
    models::Movie,
    services::lookup::{LookupResult, MovieLookup},
    store::MovieStore,
};

/// Inline message shown while the form is in the error state
pub const NOT_FOUND_MESSAGE: &str = "Can't find a movie with such a title";

/// Search-and-collect form state
///
/// Holds the query being typed, the busy/error flags and the staged preview.
/// The accepted collection lives outside the form and is passed to `add`.
#[derive(Debug, Clone)]
pub struct FindMovie {
    query: String,
    is_loading: bool,
    has_error: bool,
    preview: Option<Movie>,
    last_error: Option<LookupError>,
    default_poster: String,
}

/// Render model of the form
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FindMovieView {
    pub query: String,
    pub is_loading: bool,
    pub has_error: bool,
    /// Present only while `has_error` is set
    pub error_message: Option<String>,
    pub error_reason: Option<LookupErrorReason>,
    pub submit_disabled: bool,
    pub submit_busy: bool,
    /// The "add" action is offered only while a preview is staged
    pub can_add: bool,
    pub preview: Option<Movie>,
}

impl FindMovie {
    /// Creates an empty form
    ///
    /// `default_poster` is used for previews of titles without a poster.
    pub fn new(default_poster: impl Into<String>) -> Self {
        Self {
            query: String::new(),
            is_loading: false,
            has_error: false,
            preview: None,
            last_error: None,
            default_poster: default_poster.into(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    pub fn preview(&self) -> Option<&Movie> {
        self.preview.as_ref()
    }

    /// Cause of the most recent failed lookup
    pub fn last_error(&self) -> Option<&LookupError> {
        self.last_error.as_ref()
    }

    /// Replaces the query text and clears the error state
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.has_error = false;
        self.last_error = None;
    }

    /// True when a submit would trigger a lookup
    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.query.trim().is_empty()
    }

    /// Marks the form busy and returns the trimmed query to look up
    ///
    /// Returns `None` (and changes nothing) for a blank query or while a
    /// lookup is already in flight.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }

        self.is_loading = true;
        Some(self.query.trim().to_string())
    }

    /// Applies a lookup outcome and clears the busy flag
    ///
    /// A failure keeps any existing preview. Outcomes are applied even if the
    /// query changed while the lookup ran.
    pub fn finish_submit(&mut self, outcome: LookupResult) {
        match outcome {
            Ok(found) => {
                let movie = Movie::from_lookup(found, &self.default_poster);
                tracing::debug!(imdb_id = %movie.imdb_id, "Preview staged");
                self.preview = Some(movie);
            }
            Err(e) => {
                tracing::warn!(reason = %e.reason, error = %e.message, "Movie lookup failed");
                self.has_error = true;
                self.last_error = Some(e);
            }
        }

        self.is_loading = false;
    }

    /// Clears the busy flag after a lookup that ended without an outcome
    pub fn abort_submit(&mut self, cause: impl Display) {
        tracing::error!(error = %cause, "Movie lookup aborted");
        self.is_loading = false;
    }

    /// Runs a full submit against `lookup`
    ///
    /// Returns `false` when the submit was not allowed and no lookup was made.
    pub async fn submit(&mut self, lookup: &dyn MovieLookup) -> bool {
        let Some(query) = self.begin_submit() else {
            return false;
        };

        let outcome = lookup.lookup(&query).await;
        self.finish_submit(outcome);
        true
    }

    /// Commits the preview into `store`, then resets the query and preview
    ///
    /// Returns `None` when there is no preview, otherwise whether the store
    /// appended it (duplicates are skipped).
    pub fn add(&mut self, store: &mut dyn MovieStore) -> Option<bool> {
        let movie = self.preview.take()?;
        let imdb_id = movie.imdb_id.clone();
        let added = store.add(movie);

        if added {
            tracing::info!(imdb_id = %imdb_id, "Movie added to collection");
        } else {
            tracing::info!(imdb_id = %imdb_id, "Movie already in collection");
        }

        self.query.clear();
        Some(added)
    }

    /// Current render model
    pub fn view(&self) -> FindMovieView {
        FindMovieView {
            query: self.query.clone(),
            is_loading: self.is_loading,
            has_error: self.has_error,
            error_message: self.has_error.then(|| NOT_FOUND_MESSAGE.to_string()),
            error_reason: if self.has_error {
                self.last_error.as_ref().map(|e| e.reason)
            } else {
                None
            },
            submit_disabled: !self.can_submit(),
            submit_busy: self.is_loading,
            can_add: self.preview.is_some(),
            preview: self.preview.clone(),
        }
    }
}
