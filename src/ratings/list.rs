use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::{RatingsError, Result};
use super::node::{Link, RatingNode};
use super::types::{MovieId, Rating, RatingEntry};

/// Movie ratings of one user, kept in a singly linked chain sorted from the
/// highest rating to the lowest. Equal ratings are ordered by ascending
/// movie id.
///
/// Only the head is stored: there is no cached size and no tail link, so
/// every operation walks the chain.
pub struct RatingsList {
    pub(crate) head: Link,
}

impl RatingsList {
    pub fn new() -> Self {
        Self { head: None }
    }

    pub fn head(&self) -> Option<&RatingNode> {
        self.head.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of nodes, counted by traversal.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns the node holding `movie_id`, if any.
    pub fn find(&self, movie_id: MovieId) -> Option<&RatingNode> {
        self.iter().find(|node| node.movie_id() == movie_id)
    }

    pub fn contains(&self, movie_id: MovieId) -> bool {
        self.find(movie_id).is_some()
    }

    /// Rating of `movie_id`, or `None` when the movie was never rated.
    pub fn get_rating(&self, movie_id: MovieId) -> Option<Rating> {
        self.find(movie_id).map(RatingNode::rating)
    }

    /// Inserts a rating at its sorted position.
    ///
    /// A movie that is already in the list is moved to the position of its
    /// new rating instead of being duplicated.
    pub fn insert_by_rating(&mut self, movie_id: MovieId, rating: Rating) {
        if let Some(previous) = self.remove(movie_id) {
            debug!(
                "Movie {} already rated {}, re-ranking with {}",
                movie_id, previous.rating, rating
            );
        }
        self.link_sorted(movie_id, rating);
    }

    /// Changes the rating of a movie already in the list.
    ///
    /// The node is detached and a fresh one is inserted at the position of
    /// `new_rating`. An unknown movie leaves the list untouched.
    pub fn set_rating(&mut self, movie_id: MovieId, new_rating: Rating) -> Result<()> {
        if self.remove(movie_id).is_none() {
            warn!(
                "Could not change the rating: movie {} is not in the list",
                movie_id
            );
            return Err(RatingsError::NotFound(movie_id));
        }

        self.link_sorted(movie_id, new_rating);
        Ok(())
    }

    /// Unlinks the node holding `movie_id` and returns its payload.
    pub fn remove(&mut self, movie_id: MovieId) -> Option<RatingEntry> {
        let slot = self.seek_link(|node| node.movie_id() != movie_id);
        let mut detached = slot.take()?;
        *slot = detached.next.take();

        debug!("Detached movie {} from ratings list", movie_id);
        Some(detached.entry())
    }

    /// Ids of all rated movies in list order.
    pub fn movie_ids(&self) -> Vec<MovieId> {
        self.iter().map(RatingNode::movie_id).collect()
    }

    /// Snapshot of the list contents, detached from the chain.
    pub fn entries(&self) -> Vec<RatingEntry> {
        self.iter().map(RatingNode::entry).collect()
    }

    fn link_sorted(&mut self, movie_id: MovieId, rating: Rating) {
        let mut node = Box::new(RatingNode::new(movie_id, rating));
        let slot = self.seek_link(|current| current.precedes(movie_id, rating));
        node.next = slot.take();
        *slot = Some(node);
    }

    /// Walks the chain while `keep_going` holds and returns the link at
    /// which it stopped: either the link to the first rejected node or the
    /// empty link past the tail.
    pub(crate) fn seek_link<F>(&mut self, mut keep_going: F) -> &mut Link
    where
        F: FnMut(&RatingNode) -> bool,
    {
        let mut cursor = &mut self.head;
        while cursor.as_deref().is_some_and(|node| keep_going(node)) {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }
        cursor
    }
}

impl Default for RatingsList {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RatingsList {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl Clone for RatingsList {
    fn clone(&self) -> Self {
        Self::appended(self.iter())
    }
}

impl PartialEq for RatingsList {
    fn eq(&self, other: &Self) -> bool {
        self.iter()
            .map(RatingNode::entry)
            .eq(other.iter().map(RatingNode::entry))
    }
}

impl fmt::Debug for RatingsList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|node| (node.movie_id(), node.rating())))
            .finish()
    }
}

impl fmt::Display for RatingsList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.iter() {
            write!(f, "{}; ", node)?;
        }
        Ok(())
    }
}

impl Extend<RatingEntry> for RatingsList {
    fn extend<I: IntoIterator<Item = RatingEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert_by_rating(entry.movie_id, entry.rating);
        }
    }
}

impl Extend<(MovieId, Rating)> for RatingsList {
    fn extend<I: IntoIterator<Item = (MovieId, Rating)>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(RatingEntry::from));
    }
}

impl FromIterator<RatingEntry> for RatingsList {
    fn from_iter<I: IntoIterator<Item = RatingEntry>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl FromIterator<(MovieId, Rating)> for RatingsList {
    fn from_iter<I: IntoIterator<Item = (MovieId, Rating)>>(iter: I) -> Self {
        iter.into_iter().map(RatingEntry::from).collect()
    }
}

impl Serialize for RatingsList {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(RatingNode::entry))
    }
}

impl<'de> Deserialize<'de> for RatingsList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let entries = Vec::<RatingEntry>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(list: &RatingsList) -> Vec<(MovieId, Rating)> {
        list.iter().map(|n| (n.movie_id(), n.rating())).collect()
    }

    fn assert_sorted(list: &RatingsList) {
        let entries = list.entries();
        for window in entries.windows(2) {
            let (a, b) = (window[0], window[1]);
            assert!(a.rating >= b.rating, "{:?} before {:?}", a, b);
            if a.rating == b.rating {
                assert!(a.movie_id <= b.movie_id, "{:?} before {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_insert_keeps_descending_order() {
        let mut list = RatingsList::new();
        list.insert_by_rating(14, 4.0);
        list.insert_by_rating(65, 2.0);
        list.insert_by_rating(10, 5.0);
        list.insert_by_rating(17, 3.0);

        assert_eq!(
            pairs(&list),
            vec![(10, 5.0), (14, 4.0), (17, 3.0), (65, 2.0)]
        );
    }

    #[test]
    fn test_equal_ratings_ordered_by_ascending_id() {
        for order in [[6, 3, 9], [3, 6, 9], [9, 6, 3], [6, 9, 3]] {
            let mut list = RatingsList::new();
            list.insert_by_rating(1, 5.0);
            for id in order {
                list.insert_by_rating(id, 4.0);
            }
            list.insert_by_rating(2, 1.0);

            assert_eq!(list.movie_ids(), vec![1, 3, 6, 9, 2]);
        }
    }

    #[test]
    fn test_sort_invariant_after_mixed_updates() {
        let mut list = RatingsList::new();
        let ratings = [(5, 3.0), (2, 4.5), (8, 3.0), (1, 1.0), (7, 4.5), (4, 2.0)];
        for (id, rating) in ratings {
            list.insert_by_rating(id, rating);
        }
        assert_sorted(&list);

        list.set_rating(1, 5.0).unwrap();
        list.set_rating(7, 3.0).unwrap();
        list.set_rating(2, 1.0).unwrap();
        assert_sorted(&list);
        assert_eq!(list.movie_ids(), vec![1, 5, 7, 8, 4, 2]);
    }

    #[test]
    fn test_set_rating_round_trip() {
        let mut list: RatingsList = vec![(1, 5.0), (3, 2.0), (6, 2.0)].into_iter().collect();

        list.set_rating(3, 1.0).unwrap();
        assert_eq!(list.get_rating(3), Some(1.0));
        assert_eq!(list.movie_ids(), vec![1, 6, 3]);

        list.set_rating(1, 0.5).unwrap();
        assert_eq!(list.get_rating(1), Some(0.5));
        assert_eq!(list.movie_ids(), vec![6, 3, 1]);
    }

    #[test]
    fn test_set_rating_on_head() {
        let mut list: RatingsList = vec![(1, 5.0), (2, 4.0)].into_iter().collect();

        list.set_rating(1, 4.0).unwrap();

        assert_eq!(pairs(&list), vec![(1, 4.0), (2, 4.0)]);
    }

    #[test]
    fn test_set_rating_unknown_movie_is_noop() {
        let mut list: RatingsList = vec![(1, 5.0), (2, 4.0)].into_iter().collect();
        let before = list.clone();

        assert_eq!(list.set_rating(42, 1.0), Err(RatingsError::NotFound(42)));
        assert_eq!(list, before);
    }

    #[test]
    fn test_find_absent() {
        let list: RatingsList = vec![(1, 5.0)].into_iter().collect();

        assert!(list.find(2).is_none());
        assert_eq!(list.get_rating(2), None);
        assert!(!list.contains(2));
        assert_eq!(list.find(1).map(RatingNode::rating), Some(5.0));
    }

    #[test]
    fn test_negative_rating_is_not_confused_with_absence() {
        let mut list = RatingsList::new();
        list.insert_by_rating(3, -1.0);

        assert_eq!(list.get_rating(3), Some(-1.0));
        assert_eq!(list.get_rating(4), None);
    }

    #[test]
    fn test_duplicate_insert_moves_existing_movie() {
        let mut list = RatingsList::new();
        list.insert_by_rating(1, 2.0);
        list.insert_by_rating(2, 3.0);
        list.insert_by_rating(1, 4.0);

        assert_eq!(pairs(&list), vec![(1, 4.0), (2, 3.0)]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut list: RatingsList = vec![(1, 5.0), (2, 4.0), (3, 3.0)].into_iter().collect();

        assert_eq!(list.remove(2), Some(RatingEntry::new(2, 4.0)));
        assert_eq!(list.remove(1), Some(RatingEntry::new(1, 5.0)));
        assert_eq!(list.remove(9), None);
        assert_eq!(list.movie_ids(), vec![3]);
    }

    #[test]
    fn test_empty_list() {
        let mut list = RatingsList::new();

        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.head().is_none());
        assert!(list.find(1).is_none());
        assert!(list.movie_ids().is_empty());
        assert_eq!(list.remove(1), None);
        assert!(list.set_rating(1, 2.0).is_err());
        assert_eq!(list.to_string(), "");
    }

    #[test]
    fn test_display() {
        let list: RatingsList = vec![(1, 5.0), (7, 3.5)].into_iter().collect();

        assert_eq!(list.to_string(), "1:5; 7:3.5; ");
    }

    #[test]
    fn test_serde_resorts_input() {
        let json = r#"[{"movie_id":3,"rating":2.0},{"movie_id":1,"rating":5.0}]"#;

        let list: RatingsList = serde_json::from_str(json).unwrap();
        assert_eq!(list.movie_ids(), vec![1, 3]);

        let encoded = serde_json::to_string(&list).unwrap();
        assert_eq!(
            encoded,
            r#"[{"movie_id":1,"rating":5.0},{"movie_id":3,"rating":2.0}]"#
        );
    }

    #[test]
    fn test_drop_long_chain() {
        let mut list = RatingsList::new();
        for id in 0..100_000 {
            list.push_front(id, 1.0);
        }
        assert_eq!(list.len(), 100_000);
        drop(list);
    }
}
