use crate::list::CursorList;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

impl<T: PartialEq> PartialEq for CursorList<T> {
    /// Compares the values in anchor order; the cursor positions do not
    /// take part in the comparison.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.values().eq(other.values())
    }
}

impl<T: Eq> Eq for CursorList<T> {}

impl<T: Hash> Hash for CursorList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for value in self.values() {
            value.hash(state);
        }
        self.len().hash(state);
    }
}

impl<T: Clone> Clone for CursorList<T> {
    /// Clones the values in anchor order and parks the clone's cursor at the
    /// same position as the original's.
    fn clone(&self) -> Self {
        let mut list: Self = self.values().cloned().collect();
        list.seek_from_start(self.position());
        list
    }
}

impl<T> Default for CursorList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for CursorList<T> {
    /// Appends every item, so the last append's cursor relocation applies:
    /// after extending a non-empty list the cursor sits on the node that was
    /// last before the final item went in.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> FromIterator<T> for CursorList<T> {
    /// Collects in source order and leaves the cursor at the start.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list.move_to_start();
        list
    }
}
