//! Intrusive doubly linked recency list over a [`SlotArena`].
//!
//! The list itself owns only the `head`/`tail` handles and a length; the
//! `prev`/`next` links live inside the arena entries (anything implementing
//! [`Linked`]). This keeps one allocation per entry and lets the cache index
//! and the list share a single `SlotId` per key.
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<T: Linked>)
//!   ┌────────┬─────────────────────────────────────────────┐
//!   │ SlotId │ entry { .., link: Link { prev, next } }     │
//!   ├────────┼─────────────────────────────────────────────┤
//!   │ id_1   │ { prev: None,       next: Some(id_2) }      │
//!   │ id_2   │ { prev: Some(id_1), next: Some(id_3) }      │
//!   │ id_3   │ { prev: Some(id_2), next: None }            │
//!   └────────┴─────────────────────────────────────────────┘
//!
//!   head ─► [id_1] ◄──► [id_2] ◄──► [id_3] ◄── tail
//!   (MRU)                                    (LRU)
//! ```
//!
//! `None` is the sentinel on both ends: a `prev` of `None` means "head side",
//! a `next` of `None` means "tail side". Sentinels are never counted in `len`.
//!
//! ## Operations
//! - `push_front(id)`: link a detached slot as most recently used
//! - `detach(id)`: unlink a slot, leaving it allocated
//! - `move_to_front(id)`: detach + push_front
//! - `pop_back()`: unlink and return the least recently used slot
//!
//! All of the above are O(1). Iteration is O(n) and never mutates.

use std::iter::FusedIterator;

use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::InvariantError;

/// The `prev`/`next` pair embedded in every list entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Link {
    pub(crate) prev: Option<SlotId>,
    pub(crate) next: Option<SlotId>,
}

impl Link {
    /// Neighbor towards the most recently used end.
    pub fn prev(&self) -> Option<SlotId> {
        self.prev
    }

    /// Neighbor towards the least recently used end.
    pub fn next(&self) -> Option<SlotId> {
        self.next
    }
}

/// An arena entry that carries its own list links.
pub trait Linked {
    fn link(&self) -> &Link;
    fn link_mut(&mut self) -> &mut Link;
}

impl Linked for Link {
    fn link(&self) -> &Link {
        self
    }

    fn link_mut(&mut self) -> &mut Link {
        self
    }
}

/// Recency ordering over live arena slots, front = MRU, back = LRU.
#[derive(Debug, Default, Clone)]
pub struct RecencyList {
    head: Option<SlotId>,
    tail: Option<SlotId>,
    len: usize,
}

impl RecencyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of linked slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Most recently used slot.
    #[inline]
    pub fn front(&self) -> Option<SlotId> {
        self.head
    }

    /// Least recently used slot.
    #[inline]
    pub fn back(&self) -> Option<SlotId> {
        self.tail
    }

    /// Returns `true` if `id` is currently linked into this list.
    pub fn is_linked<T: Linked>(&self, arena: &SlotArena<T>, id: SlotId) -> bool {
        match arena.get(id) {
            Some(entry) => self.head == Some(id) || entry.link().prev.is_some(),
            None => false,
        }
    }

    /// Links a detached slot at the front.
    ///
    /// Returns `false` (and changes nothing) if `id` is not live in `arena`
    /// or is already linked.
    pub fn push_front<T: Linked>(&mut self, arena: &mut SlotArena<T>, id: SlotId) -> bool {
        if !arena.contains(id) || self.is_linked(arena, id) {
            return false;
        }
        self.attach_front(arena, id);
        true
    }

    /// Unlinks `id`, relinking its neighbors. The slot stays allocated.
    ///
    /// Returns `false` if `id` is not linked.
    pub fn detach<T: Linked>(&mut self, arena: &mut SlotArena<T>, id: SlotId) -> bool {
        if !self.is_linked(arena, id) {
            return false;
        }
        self.unlink(arena, id);
        true
    }

    /// Promotes a linked slot to the front; returns `false` if `id` is not
    /// linked.
    #[inline]
    pub fn move_to_front<T: Linked>(&mut self, arena: &mut SlotArena<T>, id: SlotId) -> bool {
        if self.head == Some(id) {
            return true;
        }
        if !self.detach(arena, id) {
            return false;
        }
        self.attach_front(arena, id);
        true
    }

    /// Unlinks and returns the back (LRU) slot, or `None` when empty.
    #[inline]
    pub fn pop_back<T: Linked>(&mut self, arena: &mut SlotArena<T>) -> Option<SlotId> {
        let id = self.tail?;
        self.unlink(arena, id);
        Some(id)
    }

    /// Forgets every link without touching the arena.
    ///
    /// Only meaningful when the arena is cleared alongside.
    pub fn clear(&mut self) {
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates slot ids from front (MRU) to back (LRU).
    pub fn iter<'a, T: Linked>(&self, arena: &'a SlotArena<T>) -> RecencyIter<'a, T> {
        RecencyIter {
            arena,
            current: self.head,
            remaining: self.len,
        }
    }

    fn attach_front<T: Linked>(&mut self, arena: &mut SlotArena<T>, id: SlotId) {
        let old_head = self.head;
        if let Some(entry) = arena.get_mut(id) {
            let link = entry.link_mut();
            link.prev = None;
            link.next = old_head;
        }
        match old_head.and_then(|head| arena.get_mut(head)) {
            Some(head_entry) => head_entry.link_mut().prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
    }

    fn unlink<T: Linked>(&mut self, arena: &mut SlotArena<T>, id: SlotId) {
        let Some(entry) = arena.get_mut(id) else {
            return;
        };
        let Link { prev, next } = std::mem::take(entry.link_mut());

        match prev.and_then(|prev_id| arena.get_mut(prev_id)) {
            Some(prev_entry) => prev_entry.link_mut().next = next,
            None => self.head = next,
        }
        match next.and_then(|next_id| arena.get_mut(next_id)) {
            Some(next_entry) => next_entry.link_mut().prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
    }

    /// Walks the list and checks link symmetry, sentinel placement and length.
    pub fn check_invariants<T: Linked>(&self, arena: &SlotArena<T>) -> Result<(), InvariantError> {
        if self.head.is_none() || self.tail.is_none() {
            if self.head.is_some() || self.tail.is_some() || self.len != 0 {
                return Err(broken(format!(
                    "empty list has dangling endpoint (head={:?}, tail={:?}, len={})",
                    self.head, self.tail, self.len
                )));
            }
            return Ok(());
        }

        let mut count = 0usize;
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            let entry = arena
                .get(id)
                .ok_or_else(|| broken(format!("list references free slot {id:?}")))?;
            let link = entry.link();
            if link.prev != prev {
                return Err(broken(format!(
                    "slot {id:?} has prev {:?}, expected {prev:?}",
                    link.prev
                )));
            }
            count += 1;
            if count > self.len {
                return Err(broken(format!(
                    "list walk exceeded recorded length {} (cycle?)",
                    self.len
                )));
            }
            prev = Some(id);
            current = link.next;
        }

        if prev != self.tail {
            return Err(broken(format!(
                "walk ended at {prev:?} but tail is {:?}",
                self.tail
            )));
        }
        if count != self.len {
            return Err(broken(format!(
                "walked {count} slots, recorded length {}",
                self.len
            )));
        }
        Ok(())
    }
}

fn broken(detail: String) -> InvariantError {
    InvariantError::new("recency list", detail)
}

/// Iterator over slot ids from MRU to LRU.
///
/// Bounded by the list length at creation, so it always terminates.
pub struct RecencyIter<'a, T> {
    arena: &'a SlotArena<T>,
    current: Option<SlotId>,
    remaining: usize,
}

impl<'a, T: Linked> Iterator for RecencyIter<'a, T> {
    type Item = (SlotId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.current?;
        let entry = self.arena.get(id)?;
        self.current = entry.link().next;
        self.remaining -= 1;
        Some((id, entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl<T: Linked> FusedIterator for RecencyIter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Node {
        value: &'static str,
        link: Link,
    }

    impl Linked for Node {
        fn link(&self) -> &Link {
            &self.link
        }

        fn link_mut(&mut self) -> &mut Link {
            &mut self.link
        }
    }

    fn node(value: &'static str) -> Node {
        Node {
            value,
            link: Link::default(),
        }
    }

    fn values(list: &RecencyList, arena: &SlotArena<Node>) -> Vec<&'static str> {
        list.iter(arena).map(|(_, node)| node.value).collect()
    }

    #[test]
    fn recency_list_push_front_orders_mru_first() {
        let mut arena = SlotArena::new();
        let mut list = RecencyList::new();
        for v in ["a", "b", "c"] {
            let id = arena.allocate(node(v));
            assert!(list.push_front(&mut arena, id));
        }
        assert_eq!(values(&list, &arena), vec!["c", "b", "a"]);
        assert_eq!(list.len(), 3);
        list.check_invariants(&arena).unwrap();
    }

    #[test]
    fn recency_list_move_to_front_from_middle_and_back() {
        let mut arena = SlotArena::new();
        let mut list = RecencyList::new();
        let a = arena.allocate(node("a"));
        let b = arena.allocate(node("b"));
        let c = arena.allocate(node("c"));
        list.push_front(&mut arena, a);
        list.push_front(&mut arena, b);
        list.push_front(&mut arena, c);

        assert!(list.move_to_front(&mut arena, b));
        assert_eq!(values(&list, &arena), vec!["b", "c", "a"]);

        assert!(list.move_to_front(&mut arena, a));
        assert_eq!(values(&list, &arena), vec!["a", "b", "c"]);
        assert_eq!(list.back(), Some(c));

        assert!(list.move_to_front(&mut arena, a));
        assert_eq!(values(&list, &arena), vec!["a", "b", "c"]);
        list.check_invariants(&arena).unwrap();
    }

    #[test]
    fn recency_list_pop_back_returns_lru_until_empty() {
        let mut arena = SlotArena::new();
        let mut list = RecencyList::new();
        let a = arena.allocate(node("a"));
        let b = arena.allocate(node("b"));
        list.push_front(&mut arena, a);
        list.push_front(&mut arena, b);

        assert_eq!(list.pop_back(&mut arena), Some(a));
        assert_eq!(list.pop_back(&mut arena), Some(b));
        assert_eq!(list.pop_back(&mut arena), None);
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        // Popped slots stay allocated until the owner frees them.
        assert_eq!(arena.len(), 2);
        list.check_invariants(&arena).unwrap();
    }

    #[test]
    fn recency_list_detach_only_affects_linked_slots() {
        let mut arena = SlotArena::new();
        let mut list = RecencyList::new();
        let a = arena.allocate(node("a"));
        let b = arena.allocate(node("b"));
        let c = arena.allocate(node("c"));
        list.push_front(&mut arena, a);
        list.push_front(&mut arena, b);

        assert!(!list.detach(&mut arena, c));
        assert!(list.detach(&mut arena, a));
        assert!(!list.detach(&mut arena, a));
        assert!(!list.move_to_front(&mut arena, a));
        assert_eq!(values(&list, &arena), vec!["b"]);
        assert_eq!(list.front(), Some(b));
        assert_eq!(list.back(), Some(b));

        assert!(list.push_front(&mut arena, a));
        assert!(!list.push_front(&mut arena, a));
        assert_eq!(values(&list, &arena), vec!["a", "b"]);
        list.check_invariants(&arena).unwrap();
    }

    #[test]
    fn recency_list_single_element_detach() {
        let mut arena = SlotArena::new();
        let mut list = RecencyList::new();
        let a = arena.allocate(node("a"));
        list.push_front(&mut arena, a);
        assert!(list.is_linked(&arena, a));
        assert!(list.detach(&mut arena, a));
        assert!(!list.is_linked(&arena, a));
        assert!(list.is_empty());
        assert_eq!(list.back(), None);
        list.check_invariants(&arena).unwrap();
    }

    #[test]
    fn recency_list_rejects_free_slots() {
        let mut arena = SlotArena::new();
        let mut list = RecencyList::new();
        let a = arena.allocate(node("a"));
        arena.free(a);
        assert!(!list.push_front(&mut arena, a));
        assert!(list.is_empty());
    }

    #[test]
    fn recency_list_check_invariants_detects_length_drift() {
        let mut arena = SlotArena::new();
        let mut list = RecencyList::new();
        let a = arena.allocate(node("a"));
        list.push_front(&mut arena, a);
        list.len = 2;
        assert!(list.check_invariants(&arena).is_err());
    }
}
