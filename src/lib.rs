//! This crate provides a circular doubly-linked list with owned nodes and a
//! built-in cursor, the [`CursorList`].
//!
//! The [`CursorList`] allows inserting, removing and reading elements at the
//! cursor in constant time. In compromise, moving the cursor to an arbitrary
//! position takes *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use cursor_list::CursorList;
//! use std::iter::FromIterator;
//!
//! let mut list = CursorList::from_iter([1, 2, 3, 4]);
//!
//! list.insert(0); // insert 0 before the cursor (at the start of the list)
//! assert_eq!(list.current(), Some(&0));
//! assert_eq!(list.to_string(), "[ 0 1 2 3 4 ]");
//!
//! assert!(list.move_to(3).is_ok()); // move the cursor to position 3
//! assert_eq!(list.remove(), Some(3)); // remove it, cursor advances
//! assert_eq!(list.current(), Some(&4));
//! assert_eq!(list.to_string(), "[ 0 1 2 4 ]");
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────┐
//!          ↓                                                 Node N - 1  │
//!    ╔═══════════╗           ╔═══════════╗                  ╔═══════════╗│
//!    ║   next    ║ ────────→ ║   next    ║ ──→ ┄┄ ────────→ ║   next    ║┘
//!    ╟───────────╢           ╟───────────╢   Node 2, 3, ... ╟───────────╢
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←── ┄┄ ←──────── ║   prev    ║
//! │  ╟───────────╢           ╟───────────╢                  ╟───────────╢
//! │  ║ payload T ║           ║ payload T ║                  ║ payload T ║
//! │  ╚═══════════╝           ╚═══════════╝                  ╚═══════════╝
//! │      Node 0                  Node 1                         ↑  ↑
//! └─────────────────────────────────────────────────────────────┘  │
//! ╔═══════════╗                                                    │
//! ║   head    ║ ──→ Node 0                                         │
//! ╟───────────╢                                                    │
//! ║  cursor   ║ ──→ any node, e.g. ─────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!   CursorList
//! ```
//! The `CursorList` contains:
//! - a pointer `head` to the anchor node, which defines where the ring starts
//!   and ends;
//! - a pointer `cursor` to the current node;
//! - a length field `len` with the number of nodes.
//!
//! Each node of the list `CursorList<T>` is allocated on the heap, and
//! contains:
//! - the `next` pointer that points to the next node (or back to the anchor
//!   if it is the last node in the list);
//! - the `prev` pointer that points to the previous node (or to the last node
//!   if it is the anchor);
//! - the actual payload `T`.
//!
//! Every node carries a payload; the empty list has no nodes at all, and both
//! `head` and `cursor` are absent. A single node links to itself in both
//! directions.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0, 1,
//! ..., *n* - 1, starting from the anchor and following `next` links. The
//! anchor is not necessarily the oldest node: inserting while the cursor is
//! at the anchor re-anchors the ring to the new node.
//!
//! # Cursor Navigation
//!
//! The cursor belongs to the list and is part of its state. It can be moved
//! with [`move_to_start`], [`move_to_end`], [`move_prev`], [`move_next`] and
//! [`move_to`]; [`position`] reports its offset from the anchor and
//! [`is_at_end`] whether it is on the last node.
//!
//! Ordinary traversal is *linearized*: [`move_next`] stops on the last node
//! and [`move_prev`] stops on the anchor, so the ring can be walked like an
//! array. Only [`move_next_cyclic`] steps across the anchor boundary.
//!
//! ## Examples
//!
//! ```
//! use cursor_list::CursorList;
//! use std::iter::FromIterator;
//!
//! let mut list = CursorList::from_iter([1, 2, 3]);
//!
//! list.move_next();
//! list.move_next();
//! assert!(list.is_at_end());
//! list.move_next(); // linearized: stays on the last node
//! assert_eq!(list.current(), Some(&3));
//!
//! list.move_next_cyclic(); // cyclic: wraps to the anchor
//! assert_eq!(list.current(), Some(&1));
//! assert_eq!(list.position(), 0);
//! ```
//!
//! # Cursor Mutations
//!
//! All edits act at the cursor:
//! - [`insert`]: splice a new element in before the cursor; the new element
//!   becomes the current one;
//! - [`append`]: splice a new element in at the end of the list, leaving the
//!   cursor on the node that was last beforehand;
//! - [`remove`]: unlink and return the current element; the cursor advances
//!   to its old successor.
//!
//! ## Examples
//!
//! ```
//! use cursor_list::CursorList;
//!
//! let mut list = CursorList::new();
//!
//! list.append(1); // becomes [1], cursor on 1
//! list.insert(2); // becomes [2, 1], cursor on 2, which is the new anchor
//! list.move_next();
//! list.insert(3); // becomes [2, 3, 1], cursor on 3
//! assert_eq!(list.to_string(), "[ 2 3 1 ]");
//!
//! assert_eq!(list.remove(), Some(3)); // becomes [2, 1], cursor on 1
//! assert_eq!(list.current(), Some(&1));
//! ```
//!
//! There are no iterators over the list; reading several elements is done by
//! walking the cursor, and [`Display`] renders the whole list from the anchor
//! without moving it.
//!
//! [`CursorList`]: crate::CursorList
//! [`insert`]: crate::CursorList::insert
//! [`append`]: crate::CursorList::append
//! [`remove`]: crate::CursorList::remove
//! [`move_to_start`]: crate::CursorList::move_to_start
//! [`move_to_end`]: crate::CursorList::move_to_end
//! [`move_prev`]: crate::CursorList::move_prev
//! [`move_next`]: crate::CursorList::move_next
//! [`move_next_cyclic`]: crate::CursorList::move_next_cyclic
//! [`move_to`]: crate::CursorList::move_to
//! [`position`]: crate::CursorList::position
//! [`is_at_end`]: crate::CursorList::is_at_end
//! [`Display`]: std::fmt::Display

#[doc(inline)]
pub use list::cursor::OutOfBounds;
#[doc(inline)]
pub use list::CursorList;

pub mod list;

mod experiments;
