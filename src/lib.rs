//! Addressable binary min-heap for Rust
//!
//! This crate provides a fixed-capacity binary min-heap whose entries are
//! addressed by caller-chosen integer ids, giving O(1) "where is id X" lookup
//! and O(log n) reprioritization of entries already in the queue — the
//! operation that backs Dijkstra's algorithm, event simulators, and
//! schedulers that revise the priority of queued work.
//!
//! # Features
//!
//! - **Id-addressed entries**: every entry is filed under an id from a fixed
//!   id space; `contains`, `key`, and `update_key` locate it without scanning
//! - **Synchronized invariants**: heap order and the id→position bijection
//!   are restored together by every operation, and a diagnostic
//!   [`check_consistency`](IndexedMinHeap::check_consistency) scan verifies
//!   both on demand
//! - **Typed errors, no side channels**: failures come back as
//!   [`HeapError`] values and leave the heap untouched
//! - **Shortest paths**: a [`pathfinding`] module drives the heap's
//!   decrease-key path for single-source shortest paths
//!
//! # Example
//!
//! ```rust
//! use indexed_min_heap::{HeapError, IndexedMinHeap};
//!
//! let mut heap = IndexedMinHeap::new(16, 16).unwrap();
//! heap.insert(40, "flush", 7).unwrap();
//! heap.insert(10, "compact", 2).unwrap();
//!
//! // A queued task becomes urgent: address it by id.
//! heap.update_key(7, 5).unwrap();
//! assert_eq!(heap.extract_min().unwrap(), (5, "flush", 7));
//!
//! // Extracted ids are absent again.
//! assert_eq!(heap.key(7).unwrap_err(), HeapError::NotFound);
//! ```
//!
//! Keys are any `Ord` type; for `f64` keys use
//! `ordered_float::OrderedFloat<f64>`.

pub mod error;
pub mod heap;
pub mod pathfinding;

pub use error::{ConsistencyError, HeapError};
pub use heap::IndexedMinHeap;
