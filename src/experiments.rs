//! A safe-Rust sketch of the node ring: `GhostCell` nodes held by fractional
//! `StaticRc` halves instead of raw pointers. Rotation moves the front
//! element to the back at the value level, which is what advancing a cursor
//! across the ring boundary does to the observed order. Unexported; kept as
//! a worked alternative to the `NonNull` representation in `list`.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

pub struct Ring<'id, T> {
    links: [Option<NodePtr<'id, T>>; 2],
}

struct Node<'id, T> {
    links: [Option<NodePtr<'id, T>>; 2],
    elem: T,
}

type NodePtr<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

const FRONT: usize = 0;
const BACK: usize = 1;

impl<'id, T> Node<'id, T> {
    fn new(elem: T) -> Self {
        Self {
            links: [None, None],
            elem,
        }
    }
}

impl<'id, T> Default for Ring<'id, T> {
    fn default() -> Self {
        Self {
            links: [None, None],
        }
    }
}

// Ownership bookkeeping: every node has exactly two halves. The ring's
// `links[side]` holds a half of the node at that end; a node's `links[side]`
// holds a half of its neighbor on that side. End nodes lend one half to the
// ring itself, so the count works out for every list length.
impl<'id, T> Ring<'id, T> {
    fn push_at(&mut self, side: usize, elem: T, token: &mut GhostToken<'id>) {
        debug_assert!(side < 2);
        let oppo = 1 - side;
        let (a, b) = Full::split(Full::new(GhostCell::new(Node::new(elem))));
        match self.links[side].take() {
            Some(old_end) => {
                old_end.deref().borrow_mut(token).links[side] = Some(a);
                b.deref().borrow_mut(token).links[oppo] = Some(old_end);
            }
            None => self.links[oppo] = Some(a),
        }
        self.links[side] = Some(b);
    }

    fn pop_at(&mut self, side: usize, token: &mut GhostToken<'id>) -> Option<T> {
        debug_assert!(side < 2);
        let oppo = 1 - side;
        let b = self.links[side].take()?;
        let a = match b.deref().borrow_mut(token).links[oppo].take() {
            Some(neighbor) => {
                let a = neighbor.deref().borrow_mut(token).links[side]
                    .take()
                    .unwrap();
                self.links[side] = Some(neighbor);
                a
            }
            None => self.links[oppo].take().unwrap(),
        };
        Some(Full::into_box(Full::join(a, b)).into_inner().elem)
    }
}

impl<'id, T> Ring<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn is_empty(&self) -> bool {
        self.links[FRONT].is_none()
    }
    pub fn push_back(&mut self, elem: T, token: &mut GhostToken<'id>) {
        self.push_at(BACK, elem, token);
    }
    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop_at(BACK, token)
    }
    pub fn push_front(&mut self, elem: T, token: &mut GhostToken<'id>) {
        self.push_at(FRONT, elem, token);
    }
    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop_at(FRONT, token)
    }
    /// Move the front element to the back, as a cyclic forward step does to
    /// the observed order.
    pub fn rotate_forward(&mut self, token: &mut GhostToken<'id>) {
        if let Some(elem) = self.pop_front(token) {
            self.push_back(elem, token);
        }
    }
    /// Move the back element to the front.
    pub fn rotate_backward(&mut self, token: &mut GhostToken<'id>) {
        if let Some(elem) = self.pop_back(token) {
            self.push_front(elem, token);
        }
    }
}
