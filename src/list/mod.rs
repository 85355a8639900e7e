use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

pub mod cursor;

mod algorithms;

/// The `CursorList` is a circular doubly-linked list with owned nodes and a
/// built-in cursor. Every positional operation — inserting, removing, reading
/// — acts on the node the cursor currently points to, in constant time.
/// Reaching an arbitrary position takes *O*(*n*) time.
///
/// The `CursorList` contains:
/// - `head`: the anchor node used to define the start and end of the ring;
/// - `cursor`: the current node;
/// - `len`: the number of nodes in the ring.
///
/// Both `head` and `cursor` are `None` exactly when the list is empty; in a
/// non-empty list they always denote live nodes of the ring. The anchor is
/// not necessarily the first-inserted node: inserting at the anchor position
/// re-anchors the ring to the new node.
pub struct CursorList<T> {
    head: Option<NonNull<Node<T>>>,
    cursor: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

// private methods
impl<T> CursorList<T> {
    pub(crate) unsafe fn connect(
        &mut self,
        mut prev: NonNull<Node<T>>,
        mut next: NonNull<Node<T>>,
    ) {
        prev.as_mut().next = next;
        next.as_mut().prev = prev;
    }

    /// Attach a single node `node` to the ring, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to the ring, or whether they are adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    ///
    /// If `prev` and `next` do not belong to the ring, or they are not
    /// adjacent nodes, this function call will make the list ill-formed.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        self.connect(prev, node);
        self.connect(node, next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }

    /// Detach a single node `node` from the ring, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the
    /// ring. If it does not, this function call will make the list
    /// ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        self.len -= 1;
        let node = Box::from_raw(node.as_ptr());
        self.connect(node.prev, node.next);
        node
    }
}

impl<T> CursorList<T> {
    /// Create an empty `CursorList`.
    ///
    /// # Examples
    /// ```
    /// use cursor_list::CursorList;
    /// let list: CursorList<u32> = CursorList::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            cursor: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `CursorList` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::CursorList;
    ///
    /// let mut list = CursorList::new();
    /// assert!(list.is_empty());
    ///
    /// list.insert("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the `CursorList`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::CursorList;
    ///
    /// let mut list = CursorList::new();
    ///
    /// list.append(1);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.insert(2);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `CursorList`, resetting it to the empty
    /// state.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::CursorList;
    ///
    /// let mut list = CursorList::new();
    ///
    /// list.append(1);
    /// list.append(2);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.current(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.remove().is_some() {}
    }

    /// Insert a new element immediately before the cursor node; the new node
    /// becomes the cursor. When the cursor was at the anchor, the new node
    /// also becomes the anchor, so the element lands at the start of the
    /// rendered order.
    ///
    /// On an empty list the new node links to itself and becomes both anchor
    /// and cursor.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::CursorList;
    ///
    /// let mut list = CursorList::new();
    /// list.insert(1);
    /// list.insert(2); // the cursor was at the anchor, so 2 is the new anchor
    /// assert_eq!(list.current(), Some(&2));
    /// assert_eq!(list.to_string(), "[ 2 1 ]");
    /// ```
    pub fn insert(&mut self, item: T) {
        let node = Node::new_detached(item);
        match self.cursor {
            None => {
                // the sole node is its own neighbor in both directions
                unsafe { self.connect(node, node) };
                self.len += 1;
                self.head = Some(node);
            }
            Some(cursor) => {
                // SAFETY: the cursor node is live and `cursor.prev` is
                // adjacent to it, so the splice keeps the ring well-formed.
                unsafe { self.attach_node(cursor.as_ref().prev, cursor, node) };
                if self.head == Some(cursor) {
                    self.head = Some(node);
                }
            }
        }
        self.cursor = Some(node);
    }

    /// Append a new element at the end of the ring (between the anchor's
    /// predecessor and the anchor).
    ///
    /// Appending relocates the cursor to the last node before splicing, and
    /// the cursor stays there: after `append`, the cursor is on the *old*
    /// last node, with the new element as its successor. On an empty list
    /// this is equivalent to [`insert`].
    ///
    /// [`insert`]: CursorList::insert
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::CursorList;
    ///
    /// let mut list = CursorList::new();
    /// list.append(1);
    /// list.append(2);
    /// list.append(3);
    /// assert_eq!(list.to_string(), "[ 1 2 3 ]");
    ///
    /// // the cursor was relocated to the last node before 3 was spliced in
    /// assert_eq!(list.current(), Some(&2));
    ///
    /// list.move_to_end();
    /// assert_eq!(list.current(), Some(&3));
    /// ```
    pub fn append(&mut self, item: T) {
        let head = match self.head {
            None => return self.insert(item),
            Some(head) => head,
        };
        // SAFETY: `head.prev` is the live last node of the ring and is
        // adjacent to `head`.
        let last = unsafe { head.as_ref().prev };
        self.cursor = Some(last);
        let node = Node::new_detached(item);
        unsafe { self.attach_node(last, head, node) };
    }

    /// Remove the element at the cursor and return it, or return `None` if
    /// the list is empty.
    ///
    /// The cursor advances to the removed node's old successor; when the
    /// anchor itself is removed, its old successor becomes the new anchor.
    /// Removing the sole element resets the list to the empty state.
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
    /// assert_eq!(list.remove(), Some(1));
    /// assert_eq!(list.current(), Some(&2));
    /// assert_eq!(list.to_string(), "[ 2 3 ]");
    ///
    /// list.clear();
    /// assert_eq!(list.remove(), None);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        let cursor = self.cursor?;
        // SAFETY: the cursor always denotes a live node of the ring.
        let node = unsafe { self.detach_node(cursor) };
        if self.len == 0 {
            self.head = None;
            self.cursor = None;
        } else {
            if self.head == Some(cursor) {
                self.head = Some(node.next);
            }
            self.cursor = Some(node.next);
        }
        Some(Node::into_element(node))
    }

    /// Return a reference to the element at the cursor, or `None` if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::CursorList;
    ///
    /// let mut list = CursorList::new();
    /// assert_eq!(list.current(), None);
    ///
    /// list.insert(1);
    /// assert_eq!(list.current(), Some(&1));
    /// ```
    #[inline]
    pub fn current(&self) -> Option<&T> {
        // SAFETY: the cursor always denotes a live node of the ring.
        self.cursor.map(|node| unsafe { &node.as_ref().element })
    }

    /// Return a mutable reference to the element at the cursor, or `None`
    /// if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::CursorList;
    ///
    /// let mut list = CursorList::new();
    /// list.insert(1);
    ///
    /// if let Some(x) = list.current_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.current(), Some(&5));
    /// ```
    #[inline]
    pub fn current_mut(&mut self) -> Option<&mut T> {
        // SAFETY: the cursor always denotes a live node of the ring.
        self.cursor.map(|mut node| unsafe { &mut node.as_mut().element })
    }
}

// crate-internal view of the values, in anchor order; the public surface
// deliberately exposes no cursor-independent iterator.
impl<T> CursorList<T> {
    pub(crate) fn values(&self) -> Values<'_, T> {
        Values {
            node: self.head.unwrap_or_else(NonNull::dangling),
            remaining: self.len,
            _marker: PhantomData,
        }
    }
}

pub(crate) struct Values<'a, T: 'a> {
    node: NonNull<Node<T>>,
    remaining: usize,
    _marker: PhantomData<&'a CursorList<T>>,
}

impl<'a, T: 'a> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        // SAFETY: `node` starts at the anchor of a list with `remaining`
        // nodes and every `next` link stays inside the ring, so it is live.
        let current = unsafe { self.node.as_ref() };
        self.node = current.next;
        Some(&current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Debug> Debug for CursorList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

/// Render all elements from the anchor forward as a bracketed,
/// space-separated sequence. The empty list renders as `[]`.
///
/// Formatting takes `&self`, so the cursor is untouched.
///
/// # Examples
///
/// ```
/// use cursor_list::CursorList;
/// use std::iter::FromIterator;
///
/// let list = CursorList::from_iter([1, 2, 3]);
/// assert_eq!(list.to_string(), "[ 1 2 3 ]");
/// assert_eq!(CursorList::<i32>::new().to_string(), "[]");
/// ```
impl<T: Display> Display for CursorList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("[]");
        }
        f.write_str("[")?;
        for value in self.values() {
            write!(f, " {}", value)?;
        }
        f.write_str(" ]")
    }
}

impl<T> Node<T> {
    /// Create a node outside any ring; its links are dangling until the node
    /// is attached.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        })))
    }

    pub(crate) fn into_element(node: Box<Node<T>>) -> T {
        node.element
    }
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

impl<T> Drop for CursorList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for CursorList<T> {}

unsafe impl<T: Sync> Sync for CursorList<T> {}

// Ensure that `CursorList` is covariant in its type parameter.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: CursorList<&'static str>) -> CursorList<&'a str> {
        x
    }
}

#[cfg(test)]
impl<T> CursorList<T> {
    /// Walk the ring and assert every structural invariant: ring closure in
    /// `len` steps, mutual `next`/`prev` inverses, and cursor membership.
    pub(crate) fn check_invariants(&self) {
        match (self.head, self.cursor) {
            (None, None) => assert_eq!(self.len, 0, "empty list must have len 0"),
            (Some(head), Some(cursor)) => {
                assert!(self.len > 0, "non-empty list must have len > 0");
                let mut node = head;
                let mut seen_cursor = false;
                for _ in 0..self.len {
                    let next = unsafe { node.as_ref().next };
                    let back = unsafe { next.as_ref().prev };
                    assert_eq!(back, node, "next/prev are not mutual inverses");
                    seen_cursor |= node == cursor;
                    node = next;
                }
                assert_eq!(node, head, "ring does not close after len steps");
                assert!(seen_cursor, "cursor is not a node of the ring");
            }
            _ => panic!("head and cursor must be both present or both absent"),
        }
    }
}
