// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::RwLock;

use crate::domain::favorites::repos::FavoritesRepository;
use crate::domain::movies::models::MovieSummary;
use crate::domain::shared::models::MovieId;

#[derive(Default)]
pub struct InMemoryFavoritesRepository {
    movies: RwLock<Vec<MovieSummary>>,
}

impl InMemoryFavoritesRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FavoritesRepository for InMemoryFavoritesRepository {
    fn get_all(&self) -> Vec<MovieSummary> {
        self.movies.read().clone()
    }

    fn contains(&self, movie_id: &MovieId) -> bool {
        self.movies.read().iter().any(|movie| &movie.id == movie_id)
    }

    fn replace_all(&self, movies: Vec<MovieSummary>) {
        let mut deduplicated = Vec::with_capacity(movies.len());
        for movie in movies {
            if !deduplicated.contains(&movie) {
                deduplicated.push(movie);
            }
        }
        *self.movies.write() = deduplicated;
    }

    fn insert(&self, movie: MovieSummary) {
        let mut movies = self.movies.write();
        match movies.iter_mut().find(|existing| existing.id == movie.id) {
            Some(existing) => *existing = movie,
            None => movies.push(movie),
        }
    }

    fn delete(&self, movie_id: &MovieId) -> bool {
        let mut movies = self.movies.write();
        let len = movies.len();
        movies.retain(|movie| &movie.id != movie_id);
        movies.len() != len
    }

    fn clear(&self) {
        self.movies.write().clear();
    }
}
