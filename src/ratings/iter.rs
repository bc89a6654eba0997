use super::list::RatingsList;
use super::node::RatingNode;
use super::types::RatingEntry;

impl RatingsList {
    /// Borrowing iterator from head to tail.
    ///
    /// The list cannot be mutated while an `Iter` is alive; take an
    /// `entries()` snapshot first when changes are needed along the way.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.head.as_deref())
    }

    fn pop_front(&mut self) -> Option<RatingEntry> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            node.entry()
        })
    }
}

pub struct Iter<'a>(Option<&'a RatingNode>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a RatingNode;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.map(|node| {
            self.0 = node.next();
            node
        })
    }
}

pub struct IntoIter(RatingsList);

impl Iterator for IntoIter {
    type Item = RatingEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }
}

impl<'a> IntoIterator for &'a RatingsList {
    type Item = &'a RatingNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for RatingsList {
    type Item = RatingEntry;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
