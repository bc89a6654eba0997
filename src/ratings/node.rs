use std::fmt;

use super::types::{MovieId, Rating, RatingEntry};

pub(crate) type Link = Option<Box<RatingNode>>;

/// One rated movie inside a `RatingsList`.
///
/// A node is owned by whatever holds the incoming link: the list's head
/// slot or the previous node. Only the list can relink it.
#[derive(Debug)]
pub struct RatingNode {
    movie_id: MovieId,
    rating: Rating,
    pub(crate) next: Link,
}

impl RatingNode {
    pub(crate) fn new(movie_id: MovieId, rating: Rating) -> Self {
        Self {
            movie_id,
            rating,
            next: None,
        }
    }

    pub fn movie_id(&self) -> MovieId {
        self.movie_id
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn next(&self) -> Option<&RatingNode> {
        self.next.as_deref()
    }

    pub fn entry(&self) -> RatingEntry {
        RatingEntry::new(self.movie_id, self.rating)
    }

    /// True when a node with `rating`/`movie_id` belongs after this one.
    pub(crate) fn precedes(&self, movie_id: MovieId, rating: Rating) -> bool {
        self.rating > rating || (self.rating == rating && self.movie_id < movie_id)
    }
}

impl fmt::Display for RatingNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.movie_id, self.rating)
    }
}
