use serde::{Deserialize, Serialize};

use super::LookupSuccess;

/// Base of the IMDb title page linked from every accepted movie
pub const IMDB_TITLE_URL: &str = "https://www.imdb.com/title";

/// Poster value OMDb uses when it has no image for a title
const MISSING_POSTER: &str = "N/A";

/// A movie accepted into (or staged for) the collection
///
/// Built once from a successful lookup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub title: String,
    pub description: String,
    pub img_url: String,
    pub imdb_url: String,
    /// Uniqueness key within a movie collection
    pub imdb_id: String,
}

impl Movie {
    /// Builds a movie from a lookup result
    ///
    /// `default_poster` replaces a missing poster so the preview always has an image.
    pub fn from_lookup(found: LookupSuccess, default_poster: &str) -> Self {
        let img_url = match found.poster.trim() {
            "" | MISSING_POSTER => default_poster.to_string(),
            poster => poster.to_string(),
        };

        Self {
            imdb_url: imdb_url(&found.imdb_id),
            title: found.title,
            description: found.plot,
            img_url,
            imdb_id: found.imdb_id,
        }
    }
}

/// IMDb detail page for an external identifier
pub fn imdb_url(imdb_id: &str) -> String {
    format!("{}/{}", IMDB_TITLE_URL, imdb_id)
}
