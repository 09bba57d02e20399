//! Addressable binary min-heap
//!
//! [`IndexedMinHeap`] is a fixed-capacity binary min-heap whose entries are
//! addressed by a caller-chosen integer id. Alongside the implicit-tree entry
//! array it maintains an id→position index, so an entry can be located and
//! have its key changed without scanning the heap.
//!
//! Two invariants hold before and after every public operation:
//!
//! 1. **Heap order**: every parent's key is ≤ both children's keys.
//! 2. **Id bijection**: each present id maps to exactly one live position,
//!    and the entry at that position carries that id.
//!
//! Both the entry capacity and the id space are fixed at construction; a
//! caller that outgrows either builds a new heap.
//!
//! # Time Complexity
//!
//! | Operation       | Complexity |
//! |-----------------|------------|
//! | `insert`        | O(log n)   |
//! | `extract_min`   | O(log n)   |
//! | `update_key`    | O(log n)   |
//! | `key`           | O(1)       |
//! | `contains`      | O(1)       |
//! | `peek`          | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use indexed_min_heap::IndexedMinHeap;
//!
//! let mut heap = IndexedMinHeap::new(8, 8).unwrap();
//! heap.insert(5, "walk", 0).unwrap();
//! heap.insert(3, "run", 1).unwrap();
//! heap.insert(8, "rest", 2).unwrap();
//!
//! // Reprioritize by id, then extract in key order.
//! heap.update_key(2, 1).unwrap();
//! assert_eq!(heap.extract_min().unwrap(), (1, "rest", 2));
//! assert_eq!(heap.extract_min().unwrap(), (3, "run", 1));
//! assert_eq!(heap.extract_min().unwrap(), (5, "walk", 0));
//! ```

use std::cmp::Ordering;

use crate::error::{ConsistencyError, HeapError};

/// One heap entry: a key, the caller's item, and the id it is filed under.
#[derive(Debug)]
struct Entry<T, P> {
    key: P,
    item: T,
    id: usize,
}

/// A binary min-heap addressable by external integer ids
///
/// Ids are drawn from `[0, id_space)` and chosen by the caller; each id names
/// one logical item from its insertion until it is extracted. The item is
/// treated as opaque: the heap moves it around and hands it back on
/// extraction, nothing more.
///
/// There is no removal other than [`extract_min`](Self::extract_min). To drop
/// an arbitrary entry, lower its key below every live key with
/// [`update_key`](Self::update_key) and extract it.
pub struct IndexedMinHeap<T, P: Ord> {
    /// Live entries at positions `[0, len)`, laid out as an implicit tree
    entries: Vec<Entry<T, P>>,
    /// Fixed entry capacity; insert fails rather than grow past it
    capacity: usize,
    /// Position of each id, `None` while the id is absent
    positions: Box<[Option<usize>]>,
}

impl<T, P: Ord> IndexedMinHeap<T, P> {
    /// Creates a heap holding up to `capacity` entries with ids drawn from
    /// `[0, id_space)`.
    ///
    /// Both backing allocations are made here and never resized.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::InvalidArgument`] if `capacity` or `id_space`
    /// is zero.
    pub fn new(capacity: usize, id_space: usize) -> Result<Self, HeapError> {
        if capacity == 0 || id_space == 0 {
            return Err(HeapError::InvalidArgument);
        }
        Ok(Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            positions: vec![None; id_space].into_boxed_slice(),
        })
    }

    /// Returns the number of entries currently in the heap.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the heap holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the fixed entry capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the size of the id space; valid ids are `0..id_space`.
    pub fn id_space(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if an entry with this id is currently in the heap.
    ///
    /// Out-of-range ids answer `false` rather than failing.
    pub fn contains(&self, id: usize) -> bool {
        self.position(id).is_some()
    }

    /// Returns the minimum entry without removing it.
    pub fn peek(&self) -> Option<(&P, &T, usize)> {
        self.entries.first().map(|e| (&e.key, &e.item, e.id))
    }

    /// Returns the current key of the entry filed under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::NotFound`] if the id is absent.
    pub fn key(&self, id: usize) -> Result<&P, HeapError> {
        let index = self.position(id).ok_or(HeapError::NotFound)?;
        Ok(&self.entries[index].key)
    }

    /// Inserts `item` under `id` with the given key.
    ///
    /// The entry is appended at the last position and sifted up. On any
    /// error the heap is untouched: all checks run before the first write.
    ///
    /// # Errors
    ///
    /// - [`HeapError::InvalidArgument`] if `id >= id_space`
    /// - [`HeapError::DuplicateId`] if the id is already present
    /// - [`HeapError::CapacityExceeded`] if the heap is full
    pub fn insert(&mut self, key: P, item: T, id: usize) -> Result<(), HeapError> {
        if id >= self.positions.len() {
            return Err(HeapError::InvalidArgument);
        }
        if self.positions[id].is_some() {
            return Err(HeapError::DuplicateId);
        }
        if self.entries.len() == self.capacity {
            return Err(HeapError::CapacityExceeded);
        }

        let index = self.entries.len();
        self.entries.push(Entry { key, item, id });
        self.positions[id] = Some(index);
        self.sift_up(index);
        Ok(())
    }

    /// Removes and returns the entry with the minimum key as
    /// `(key, item, id)`.
    ///
    /// The id becomes absent and may be inserted again. If entries remain,
    /// the former last entry takes the root position and is sifted down.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    pub fn extract_min(&mut self) -> Result<(P, T, usize), HeapError> {
        if self.entries.is_empty() {
            return Err(HeapError::EmptyHeap);
        }

        let min = self.entries.swap_remove(0);
        self.positions[min.id] = None;

        if let Some(root) = self.entries.first() {
            self.positions[root.id] = Some(0);
            self.sift_down(0);
        }
        Ok((min.key, min.item, min.id))
    }

    /// Changes the key of the entry filed under `id`.
    ///
    /// A strictly smaller key sifts the entry up, a strictly larger key
    /// sifts it down, and an equal key moves nothing at all.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::NotFound`] if the id is absent.
    pub fn update_key(&mut self, id: usize, new_key: P) -> Result<(), HeapError> {
        let index = self.position(id).ok_or(HeapError::NotFound)?;
        match new_key.cmp(&self.entries[index].key) {
            Ordering::Less => {
                self.entries[index].key = new_key;
                self.sift_up(index);
            }
            Ordering::Greater => {
                self.entries[index].key = new_key;
                self.sift_down(index);
            }
            Ordering::Equal => {}
        }
        Ok(())
    }

    /// Verifies the heap-order and id-bijection invariants.
    ///
    /// Scans the whole id index and entry array in O(len + id_space) without
    /// mutating anything, and reports the first violation found. Intended
    /// for tests and debugging, not for hot paths.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConsistencyError`] encountered.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        let len = self.entries.len();

        let mut indexed = 0;
        for (id, slot) in self.positions.iter().enumerate() {
            if let Some(index) = *slot {
                indexed += 1;
                if index >= len {
                    return Err(ConsistencyError::SlotOutOfRange { id, index, len });
                }
                if self.entries[index].id != id {
                    return Err(ConsistencyError::IdMismatch {
                        id,
                        index,
                        found: self.entries[index].id,
                    });
                }
            }
        }
        // Every occupied slot points at a distinct live position carrying its
        // id, so a matching count makes the mapping a bijection onto [0, len).
        if indexed != len {
            return Err(ConsistencyError::CountMismatch { indexed, len });
        }

        for parent in 0..len {
            for child in [2 * parent + 1, 2 * parent + 2] {
                if child < len && self.entries[child].key < self.entries[parent].key {
                    return Err(ConsistencyError::OrderViolation { parent, child });
                }
            }
        }
        Ok(())
    }

    fn position(&self, id: usize) -> Option<usize> {
        self.positions.get(id).copied().flatten()
    }

    /// Swaps the entries at `i` and `j` and rewrites both id slots in the
    /// same step, so the index never dangles between the two writes.
    fn exchange(&mut self, i: usize, j: usize) {
        debug_assert!(i < self.entries.len() && j < self.entries.len());
        debug_assert!(i != j, "exchange of a position with itself");
        debug_assert!(
            {
                let (upper, lower) = if i < j { (i, j) } else { (j, i) };
                lower == 2 * upper + 1 || lower == 2 * upper + 2
            },
            "exchanged positions must be parent and child"
        );

        self.entries.swap(i, j);
        self.positions[self.entries[i].id] = Some(i);
        self.positions[self.entries[j].id] = Some(j);
    }

    /// Move the entry at `index` toward the root until its parent's key is
    /// no longer strictly greater.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].key < self.entries[parent].key {
                self.exchange(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move the entry at `index` toward the leaves while a child's key is
    /// strictly smaller. Equal keys never swap, so ordering among equal keys
    /// is whatever structural history left behind.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.entries[left].key < self.entries[smallest].key {
                smallest = left;
            }
            if right < len && self.entries[right].key < self.entries[smallest].key {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.exchange(index, smallest);
            index = smallest;
        }
    }
}

impl<T: std::fmt::Debug, P: Ord + std::fmt::Debug> std::fmt::Debug for IndexedMinHeap<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexedMinHeap")
            .field("len", &self.entries.len())
            .field("capacity", &self.capacity)
            .field("id_space", &self.positions.len())
            .field("entries", &self.entries)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_construction_is_rejected() {
        assert_eq!(
            IndexedMinHeap::<(), i32>::new(0, 4).unwrap_err(),
            HeapError::InvalidArgument
        );
        assert_eq!(
            IndexedMinHeap::<(), i32>::new(4, 0).unwrap_err(),
            HeapError::InvalidArgument
        );
    }

    #[test]
    fn basic_operations() {
        let mut heap = IndexedMinHeap::new(8, 8).unwrap();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.insert(3, "three", 0).unwrap();
        heap.insert(1, "one", 1).unwrap();
        heap.insert(2, "two", 2).unwrap();

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), Some((&1, &"one", 1)));

        assert_eq!(heap.extract_min().unwrap(), (1, "one", 1));
        assert_eq!(heap.extract_min().unwrap(), (2, "two", 2));
        assert_eq!(heap.extract_min().unwrap(), (3, "three", 0));
        assert_eq!(heap.extract_min().unwrap_err(), HeapError::EmptyHeap);
    }

    #[test]
    fn extract_on_empty_fails() {
        let mut heap: IndexedMinHeap<(), i32> = IndexedMinHeap::new(2, 2).unwrap();
        assert_eq!(heap.extract_min().unwrap_err(), HeapError::EmptyHeap);
        assert!(heap.peek().is_none());
    }

    #[test]
    fn id_lifecycle_allows_reinsertion() {
        let mut heap = IndexedMinHeap::new(4, 4).unwrap();

        heap.insert(10, (), 2).unwrap();
        assert!(heap.contains(2));

        heap.extract_min().unwrap();
        assert!(!heap.contains(2));

        // The id is free again once extracted.
        heap.insert(20, (), 2).unwrap();
        assert_eq!(heap.key(2).unwrap(), &20);
    }

    #[test]
    fn out_of_range_ids() {
        let mut heap = IndexedMinHeap::new(4, 4).unwrap();
        heap.insert(1, (), 0).unwrap();

        assert_eq!(heap.insert(1, (), 4).unwrap_err(), HeapError::InvalidArgument);
        assert_eq!(heap.insert(1, (), usize::MAX).unwrap_err(), HeapError::InvalidArgument);
        assert!(!heap.contains(4));
        assert!(!heap.contains(usize::MAX));
        assert_eq!(heap.key(4).unwrap_err(), HeapError::NotFound);
        assert_eq!(heap.update_key(4, 0).unwrap_err(), HeapError::NotFound);
    }

    #[test]
    fn update_key_moves_entry_both_ways() {
        let mut heap = IndexedMinHeap::new(8, 8).unwrap();
        for (key, id) in [(10, 0), (20, 1), (30, 2), (40, 3)] {
            heap.insert(key, (), id).unwrap();
        }

        // Decrease: id 3 jumps to the front.
        heap.update_key(3, 5).unwrap();
        assert_eq!(heap.peek().map(|(k, _, id)| (*k, id)), Some((5, 3)));

        // Increase: the old minimum sinks behind the rest.
        heap.update_key(3, 35).unwrap();
        heap.update_key(0, 50).unwrap();
        assert_eq!(heap.peek().map(|(k, _, id)| (*k, id)), Some((20, 1)));

        heap.check_consistency().unwrap();
    }

    #[test]
    fn equal_key_update_is_a_no_op() {
        let mut heap = IndexedMinHeap::new(8, 8).unwrap();
        for (key, id) in [(1, 0), (2, 1), (2, 2), (3, 3)] {
            heap.insert(key, (), id).unwrap();
        }

        let before: Vec<(usize, i32)> = (0..4).map(|id| (id, *heap.key(id).unwrap())).collect();
        heap.update_key(2, 2).unwrap();
        let after: Vec<(usize, i32)> = (0..4).map(|id| (id, *heap.key(id).unwrap())).collect();

        assert_eq!(before, after);
        heap.check_consistency().unwrap();
    }

    #[test]
    fn consistency_check_passes_through_churn() {
        let mut heap = IndexedMinHeap::new(32, 32).unwrap();

        for id in 0..32 {
            heap.insert((37 * id + 11) % 64, (), id).unwrap();
            heap.check_consistency().unwrap();
        }
        for id in (0..32).step_by(3) {
            heap.update_key(id, (13 * id) % 64).unwrap();
            heap.check_consistency().unwrap();
        }
        while !heap.is_empty() {
            heap.extract_min().unwrap();
            heap.check_consistency().unwrap();
        }
    }

    #[test]
    fn debug_formatting_names_the_counts() {
        let mut heap = IndexedMinHeap::new(4, 6).unwrap();
        heap.insert(1, "a", 0).unwrap();
        let rendered = format!("{:?}", heap);
        assert!(rendered.contains("len: 1"));
        assert!(rendered.contains("capacity: 4"));
        assert!(rendered.contains("id_space: 6"));
    }
}
