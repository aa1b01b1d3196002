pub mod find_movie;
pub mod lookup;

pub use find_movie::{FindMovie, FindMovieView};
pub use lookup::{MovieLookup, OmdbClient};
