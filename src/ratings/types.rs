use serde::{Deserialize, Serialize};

pub type MovieId = i32;
pub type Rating = f64;

/// Plain copy of a node's payload, detached from any chain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingEntry {
    pub movie_id: MovieId,
    pub rating: Rating,
}

impl RatingEntry {
    pub fn new(movie_id: MovieId, rating: Rating) -> Self {
        Self { movie_id, rating }
    }
}

impl From<(MovieId, Rating)> for RatingEntry {
    fn from((movie_id, rating): (MovieId, Rating)) -> Self {
        Self::new(movie_id, rating)
    }
}
