use serde::{Deserialize, Serialize};

pub mod movie;

pub use movie::{imdb_url, Movie, IMDB_TITLE_URL};

// ============================================================================
// OMDb API Types
// ============================================================================

/// Raw lookup record returned by OMDb
///
/// The provider discriminates success from failure with a string `Response`
/// field ("True" / "False"). Fields we don't use are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "Response")]
pub enum RawLookupResult {
    #[serde(rename = "True")]
    Found(LookupSuccess),
    #[serde(rename = "False")]
    Failed {
        #[serde(rename = "Error")]
        error: String,
    },
}

/// Movie fields of a successful OMDb lookup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LookupSuccess {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_lookup_found_deserialization() {
        let json = r#"{
            "Title": "The Shawshank Redemption",
            "Year": "1994",
            "Rated": "R",
            "Plot": "Two imprisoned men bond over a number of years.",
            "Poster": "https://m.media-amazon.com/images/M/shawshank.jpg",
            "imdbID": "tt0111161",
            "Type": "movie",
            "Response": "True"
        }"#;

        let result: RawLookupResult = serde_json::from_str(json).unwrap();
        match result {
            RawLookupResult::Found(found) => {
                assert_eq!(found.title, "The Shawshank Redemption");
                assert_eq!(found.imdb_id, "tt0111161");
                assert_eq!(
                    found.poster,
                    "https://m.media-amazon.com/images/M/shawshank.jpg"
                );
            }
            RawLookupResult::Failed { error } => panic!("unexpected failure: {}", error),
        }
    }

    #[test]
    fn test_raw_lookup_failed_deserialization() {
        let json = r#"{"Response":"False","Error":"Movie not found!"}"#;

        let result: RawLookupResult = serde_json::from_str(json).unwrap();
        assert_eq!(
            result,
            RawLookupResult::Failed {
                error: "Movie not found!".to_string()
            }
        );
    }

    #[test]
    fn test_raw_lookup_missing_discriminant_is_rejected() {
        let json = r#"{"Title":"Inception","imdbID":"tt1375666"}"#;
        assert!(serde_json::from_str::<RawLookupResult>(json).is_err());
    }

    #[test]
    fn test_raw_lookup_found_without_id_is_rejected() {
        let json = r#"{"Response":"True","Title":"Inception"}"#;
        assert!(serde_json::from_str::<RawLookupResult>(json).is_err());
    }
}
