use crate::list::CursorList;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The error returned by [`CursorList::move_to`] when the requested position
/// does not exist in the list. The cursor is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    /// The rejected position.
    pub position: usize,
    /// The length of the list at the time of the call.
    pub len: usize,
}

impl Display for OutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position {} is out of bounds for a list of length {}",
            self.position, self.len
        )
    }
}

impl Error for OutOfBounds {}

// Cursor navigation. `move_prev` and `move_next` are linearized: they stop at
// the anchor boundary, so the ring behaves like a bounded list for ordinary
// traversal. Only `move_next_cyclic` crosses the boundary.
impl<T> CursorList<T> {
    /// Set the cursor to the anchor node; no-op on an empty list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::CursorList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = CursorList::from_iter([1, 2, 3]);
    /// list.move_to_end();
    /// list.move_to_start();
    /// assert_eq!(list.current(), Some(&1));
    /// ```
    #[inline]
    pub fn move_to_start(&mut self) {
        if let Some(head) = self.head {
            self.cursor = Some(head);
        }
    }

    /// Set the cursor to the last node (the anchor's predecessor); no-op on
    /// an empty list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::CursorList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = CursorList::from_iter([1, 2, 3]);
    /// list.move_to_end();
    /// assert_eq!(list.current(), Some(&3));
    /// ```
    #[inline]
    pub fn move_to_end(&mut self) {
        if let Some(head) = self.head {
            // SAFETY: `head.prev` is the live last node of the ring.
            self.cursor = Some(unsafe { head.as_ref().prev });
        }
    }

    /// Move the cursor one step backward. No-op on lists of length <= 1 and
    /// when the cursor is already at the anchor: backward traversal does not
    /// wrap past the start.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::CursorList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = CursorList::from_iter([1, 2, 3]);
    /// list.move_to_end();
    /// list.move_prev();
    /// assert_eq!(list.current(), Some(&2));
    ///
    /// list.move_prev();
    /// list.move_prev(); // already at the anchor: no-op
    /// assert_eq!(list.current(), Some(&1));
    /// ```
    pub fn move_prev(&mut self) {
        if self.len <= 1 || self.cursor == self.head {
            return;
        }
        if let Some(cursor) = self.cursor {
            // SAFETY: the cursor node is live, so its `prev` link is too.
            self.cursor = Some(unsafe { cursor.as_ref().prev });
        }
    }

    /// Move the cursor one step forward. No-op on lists of length <= 1 and
    /// when the cursor is on the last node: forward traversal does not wrap
    /// past the end. See [`move_next_cyclic`] for the wrapping step.
    ///
    /// [`move_next_cyclic`]: CursorList::move_next_cyclic
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::CursorList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = CursorList::from_iter([1, 2, 3]);
    /// list.move_next();
    /// assert_eq!(list.current(), Some(&2));
    ///
    /// list.move_next();
    /// list.move_next(); // already at the end: no-op
    /// assert_eq!(list.current(), Some(&3));
    /// ```
    pub fn move_next(&mut self) {
        if self.len <= 1 {
            return;
        }
        if let Some(cursor) = self.cursor {
            // SAFETY: the cursor node is live, so its `next` link is too.
            let next = unsafe { cursor.as_ref().next };
            if Some(next) != self.head {
                self.cursor = Some(next);
            }
        }
    }

    /// Unconditionally advance the cursor to its successor, crossing the
    /// anchor boundary. This is the one operation that traverses the
    /// circular link across the logical end of the list.
    ///
    /// No-op on an empty list, where there is no node to step to.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::CursorList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = CursorList::from_iter([1, 2, 3]);
    /// list.move_to_end();
    /// assert_eq!(list.current(), Some(&3));
    ///
    /// list.move_next_cyclic(); // wraps across the anchor
    /// assert_eq!(list.current(), Some(&1));
    /// ```
    pub fn move_next_cyclic(&mut self) {
        if let Some(cursor) = self.cursor {
            // SAFETY: the cursor node is live, so its `next` link is too.
            self.cursor = Some(unsafe { cursor.as_ref().next });
        }
    }

    /// Return the 0-based offset of the cursor from the anchor, or 0 for an
    /// empty list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::CursorList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = CursorList::from_iter([1, 2, 3]);
    /// assert_eq!(list.position(), 0);
    ///
    /// list.move_to_end();
    /// assert_eq!(list.position(), 2);
    /// ```
    pub fn position(&self) -> usize {
        let (head, cursor) = match (self.head, self.cursor) {
            (Some(head), Some(cursor)) => (head, cursor),
            _ => return 0,
        };
        let mut node = head;
        let mut pos = 0;
        while node != cursor && pos < self.len {
            // SAFETY: the walk starts at the anchor and stays inside the ring.
            node = unsafe { node.as_ref().next };
            pos += 1;
        }
        debug_assert!(node == cursor, "cursor is not reachable from the anchor");
        pos
    }

    /// Move the cursor to position `pos` (0-based from the anchor), or
    /// return an error and leave the cursor untouched when `pos >= len`.
    ///
    /// Callers must check the result before assuming the cursor moved.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::CursorList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = CursorList::from_iter([1, 2, 3]);
    /// assert!(list.move_to(1).is_ok());
    /// assert_eq!(list.current(), Some(&2));
    ///
    /// // out of bounds: the cursor stays put
    /// assert!(list.move_to(3).is_err());
    /// assert_eq!(list.current(), Some(&2));
    /// ```
    pub fn move_to(&mut self, pos: usize) -> Result<(), OutOfBounds> {
        if pos >= self.len {
            return Err(OutOfBounds {
                position: pos,
                len: self.len,
            });
        }
        self.seek_from_start(pos);
        Ok(())
    }

    /// Walk the cursor to a position known to be valid (or to the boundary
    /// when it is not, since the steps are linearized).
    pub(crate) fn seek_from_start(&mut self, pos: usize) {
        self.move_to_start();
        for _ in 0..pos {
            self.move_next();
        }
    }

    /// Returns `true` iff the cursor is on the last node (the anchor's
    /// predecessor). An empty list has no end to be at, so this returns
    /// `false` rather than faulting on the absent anchor.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::CursorList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = CursorList::from_iter([1, 2, 3]);
    /// assert!(!list.is_at_end());
    ///
    /// list.move_to_end();
    /// assert!(list.is_at_end());
    ///
    /// assert!(!CursorList::<i32>::new().is_at_end());
    /// ```
    pub fn is_at_end(&self) -> bool {
        match self.head {
            None => false,
            // SAFETY: `head.prev` is the live last node of the ring.
            Some(head) => self.cursor == Some(unsafe { head.as_ref().prev }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::list::CursorList;
    use std::iter::FromIterator;

    #[test]
    fn linearized_traversal_boundary() {
        let mut list = CursorList::from_iter(0..5);
        list.move_to_start();
        let mut visited = Vec::new();
        for _ in 0..list.len() {
            visited.push(*list.current().unwrap());
            list.move_next();
        }
        assert_eq!(visited, vec![0, 1, 2, 3, 4]);
        // the len-th call and beyond stay parked on the last node
        assert_eq!(list.position(), 4);
        list.move_next();
        assert_eq!(list.position(), 4);
    }

    #[test]
    fn prev_does_not_wrap_past_start() {
        let mut list = CursorList::from_iter([1, 2, 3]);
        list.move_prev();
        assert_eq!(list.current(), Some(&1));

        list.move_to_end();
        list.move_prev();
        list.move_prev();
        list.move_prev();
        assert_eq!(list.current(), Some(&1));
    }

    #[test]
    fn navigation_is_noop_on_short_lists() {
        let mut list = CursorList::<i32>::new();
        list.move_to_start();
        list.move_to_end();
        list.move_prev();
        list.move_next();
        list.move_next_cyclic();
        assert_eq!(list.current(), None);
        list.check_invariants();

        let mut list = CursorList::from_iter([1]);
        list.move_prev();
        list.move_next();
        assert_eq!(list.current(), Some(&1));
        assert_eq!(list.position(), 0);
    }

    #[test]
    fn cyclic_step_wraps_and_closes_the_ring() {
        let mut list = CursorList::from_iter(0..6);
        list.move_to(3).unwrap();
        // exactly len cyclic steps return to the same node
        for _ in 0..list.len() {
            list.move_next_cyclic();
        }
        assert_eq!(list.position(), 3);
        assert_eq!(list.current(), Some(&3));

        // a single-element ring wraps onto itself
        let mut list = CursorList::from_iter([9]);
        list.move_next_cyclic();
        assert_eq!(list.current(), Some(&9));
    }

    #[test]
    fn move_to_round_trip() {
        let mut list = CursorList::from_iter(0..7);
        for pos in 0..list.len() {
            assert!(list.move_to(pos).is_ok());
            assert_eq!(list.position(), pos);
            assert_eq!(list.current(), Some(&pos));
        }
    }

    #[test]
    fn move_to_rejects_out_of_bounds() {
        let mut list = CursorList::from_iter([1, 2, 3]);
        list.move_to(1).unwrap();

        let err = list.move_to(3).unwrap_err();
        assert_eq!(err.position, 3);
        assert_eq!(err.len, 3);
        assert_eq!(list.current(), Some(&2));
        assert_eq!(list.position(), 1);

        assert!(list.move_to(100).is_err());
        assert_eq!(list.position(), 1);

        assert_eq!(
            err.to_string(),
            "position 3 is out of bounds for a list of length 3"
        );
    }

    #[test]
    fn move_to_fails_on_empty() {
        let mut list = CursorList::<i32>::new();
        assert!(list.move_to(0).is_err());
        assert_eq!(list.current(), None);
        list.check_invariants();
    }

    #[test]
    fn position_is_zero_on_empty() {
        let list = CursorList::<i32>::new();
        assert_eq!(list.position(), 0);
    }

    #[test]
    fn is_at_end_tracks_the_anchor_predecessor() {
        let mut list = CursorList::from_iter([1, 2, 3]);
        assert!(!list.is_at_end());
        list.move_to_end();
        assert!(list.is_at_end());
        list.move_prev();
        assert!(!list.is_at_end());

        // in a singleton ring the anchor is its own predecessor
        let list = CursorList::from_iter([1]);
        assert!(list.is_at_end());
    }

    #[test]
    fn enumeration_contract() {
        // reset to start, then len() current/move_next pairs visit every
        // element exactly once in a stable order
        let mut list = CursorList::new();
        list.append(1);
        list.insert(3);
        list.insert(2);
        list.append(4);

        let mut order = Vec::new();
        list.move_to_start();
        for _ in 0..list.len() {
            order.push(*list.current().unwrap());
            list.move_next();
        }
        assert_eq!(order.len(), list.len());
        let rendered: Vec<String> = order.iter().map(|v| v.to_string()).collect();
        assert_eq!(list.to_string(), format!("[ {} ]", rendered.join(" ")));
    }

    #[test]
    fn demo_scenario() {
        // the shipped driver sequence, derived step by step from the
        // cursor-relative contract
        let mut list = CursorList::new();
        list.append(1);
        list.insert(3);
        list.move_prev();
        list.insert(2);
        list.move_to_start();
        list.move_prev();
        list.insert(4);
        list.append(5);
        list.move_next();
        list.append(-6);
        assert!(list.move_to(9).is_err()); // out of range: cursor stays put
        list.insert(10);

        assert_eq!(list.len(), 7);
        assert_eq!(list.to_string(), "[ 4 2 3 1 10 5 -6 ]");
        list.check_invariants();

        let mut order = Vec::new();
        list.move_to_start();
        for _ in 0..list.len() {
            order.push(*list.current().unwrap());
            list.move_next();
        }
        assert_eq!(order, vec![4, 2, 3, 1, 10, 5, -6]);
    }
}
