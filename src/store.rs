use crate::models::Movie;

/// Owner of the accepted movie collection
///
/// The form only ever reads the collection and appends to it; removal and
/// persistence belong to the implementor.
pub trait MovieStore: Send + Sync {
    /// Current collection in insertion order
    fn get(&self) -> Vec<Movie>;

    /// Appends `movie` unless an entry with the same IMDb id already exists
    ///
    /// Returns `true` when the movie was appended.
    fn add(&mut self, movie: Movie) -> bool;
}

/// In-memory movie collection
#[derive(Debug, Clone, Default)]
pub struct InMemoryMovieStore {
    movies: Vec<Movie>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Returns true if a movie with this IMDb id is already collected
    pub fn contains(&self, imdb_id: &str) -> bool {
        self.movies.iter().any(|m| m.imdb_id == imdb_id)
    }
}

impl MovieStore for InMemoryMovieStore {
    fn get(&self) -> Vec<Movie> {
        self.movies.clone()
    }

    fn add(&mut self, movie: Movie) -> bool {
        if self.contains(&movie.imdb_id) {
            return false;
        }

        self.movies.push(movie);
        true
    }
}
