use log::debug;

use super::list::RatingsList;
use super::node::RatingNode;
use super::types::{MovieId, Rating};

impl RatingsList {
    /// Appends a node at the physical tail, whatever its rating.
    ///
    /// This does not keep the list sorted. It exists for building lists in
    /// a deliberate order; use `insert_by_rating` to keep the ordering.
    pub fn append(&mut self, movie_id: MovieId, rating: Rating) {
        let tail = self.seek_link(|_| true);
        *tail = Some(Box::new(RatingNode::new(movie_id, rating)));
    }

    pub(crate) fn push_front(&mut self, movie_id: MovieId, rating: Rating) {
        let mut node = Box::new(RatingNode::new(movie_id, rating));
        node.next = self.head.take();
        self.head = Some(node);
    }

    /// Copies `nodes` into a new list, keeping their order.
    pub(crate) fn appended<'a, I>(nodes: I) -> RatingsList
    where
        I: IntoIterator<Item = &'a RatingNode>,
    {
        let mut list = RatingsList::new();
        let mut tail = &mut list.head;
        for node in nodes {
            let last = tail.insert(Box::new(RatingNode::new(node.movie_id(), node.rating())));
            tail = &mut last.next;
        }
        list
    }

    /// Movies rated within `[low, high]`, in the order of this list.
    pub fn sublist(&self, low: Rating, high: Rating) -> RatingsList {
        let result = Self::appended(
            self.iter()
                .filter(|node| node.rating() >= low && node.rating() <= high),
        );
        debug!(
            "Sublist [{}, {}] kept {} of {} movies",
            low,
            high,
            result.len(),
            self.len()
        );
        result
    }

    /// The `n` best rated movies, i.e. the first `n` nodes. Shorter lists are
    /// copied whole.
    pub fn n_best_ranked(&self, n: usize) -> RatingsList {
        Self::appended(self.iter().take(n))
    }

    /// New list holding the same ratings from the lowest to the highest.
    pub fn reverse(&self) -> RatingsList {
        Self::reverse_from(self.head())
    }

    /// Reverses the chain that starts at `start`.
    ///
    /// Each visited node is pushed onto the front of the result, so no
    /// storage other than the returned list is needed.
    pub fn reverse_from(start: Option<&RatingNode>) -> RatingsList {
        let mut reversed = RatingsList::new();
        let mut current = start;
        while let Some(node) = current {
            reversed.push_front(node.movie_id(), node.rating());
            current = node.next();
        }
        reversed
    }
}
