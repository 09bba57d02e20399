//! Dijkstra's shortest paths over the indexed heap
//!
//! This module is the workload the addressable heap exists for: single-source
//! shortest paths where already-queued vertices get reprioritized as better
//! routes appear. Vertices are numbered `0..vertex_count`, and a vertex's
//! number doubles as its heap id, so the open set needs no handle table — the
//! relax step asks the heap directly whether a vertex is queued and lowers
//! its key in place (a true decrease-key, not lazy re-insertion).
//!
//! Edge weights are any [`Cost`] type. For floating-point weights use
//! `ordered_float::OrderedFloat<f64>`, which is `Ord` and defaults to zero.
//!
//! # Example
//!
//! ```rust
//! use indexed_min_heap::pathfinding::{dijkstra, Graph};
//!
//! // 0 → 1 → 3 is longer than 0 → 2 → 3.
//! let mut graph = Graph::new(4);
//! graph.add_edge(0, 1, 1u32);
//! graph.add_edge(1, 3, 5);
//! graph.add_edge(0, 2, 2);
//! graph.add_edge(2, 3, 1);
//!
//! let paths = dijkstra(&graph, 0);
//! assert_eq!(paths.distance(3), Some(3));
//! assert_eq!(paths.path_to(3), Some(vec![0, 2, 3]));
//! ```

use std::ops::Add;

use crate::heap::IndexedMinHeap;

/// Trait for types usable as edge weights.
///
/// Requires ordering, copying, addition, and a zero value for the source
/// distance. Weights are assumed non-negative; Dijkstra's algorithm does not
/// terminate correctly on negative edges.
pub trait Cost: Ord + Copy + Add<Output = Self> + Default {}

impl<T> Cost for T where T: Ord + Copy + Add<Output = Self> + Default {}

/// A directed graph over vertices `0..vertex_count` with weighted edges.
#[derive(Debug, Clone)]
pub struct Graph<C> {
    adjacency: Vec<Vec<(usize, C)>>,
}

impl<C: Cost> Graph<C> {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Adds a directed edge.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a vertex of this graph.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: C) {
        assert!(
            from < self.adjacency.len() && to < self.adjacency.len(),
            "edge endpoints must be vertices"
        );
        self.adjacency[from].push((to, weight));
    }

    /// Returns the outgoing edges of `vertex` as `(target, weight)` pairs.
    pub fn neighbors(&self, vertex: usize) -> &[(usize, C)] {
        &self.adjacency[vertex]
    }
}

/// Distances and predecessor links computed by [`dijkstra`].
#[derive(Debug, Clone)]
pub struct ShortestPaths<C> {
    source: usize,
    dist: Vec<Option<C>>,
    prev: Vec<Option<usize>>,
}

impl<C: Cost> ShortestPaths<C> {
    /// The source vertex the search started from.
    pub fn source(&self) -> usize {
        self.source
    }

    /// The shortest distance from the source to `vertex`, or `None` if it is
    /// unreachable.
    pub fn distance(&self, vertex: usize) -> Option<C> {
        self.dist.get(vertex).copied().flatten()
    }

    /// The shortest path from the source to `vertex` inclusive, or `None` if
    /// it is unreachable.
    pub fn path_to(&self, vertex: usize) -> Option<Vec<usize>> {
        self.distance(vertex)?;

        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(previous) = self.prev[current] {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

/// Runs Dijkstra's algorithm from `source`, settling every reachable vertex.
///
/// The open set is an [`IndexedMinHeap`] sized to the vertex count; each
/// relax step that improves a queued vertex lowers its key in place.
///
/// # Panics
///
/// Panics if `source` is not a vertex of the graph.
pub fn dijkstra<C: Cost>(graph: &Graph<C>, source: usize) -> ShortestPaths<C> {
    let n = graph.vertex_count();
    assert!(source < n, "source is not a vertex");

    let mut dist: Vec<Option<C>> = vec![None; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut open: IndexedMinHeap<(), C> =
        IndexedMinHeap::new(n, n).expect("vertex count is nonzero");

    dist[source] = Some(C::default());
    open.insert(C::default(), (), source)
        .expect("source id is in range and the heap is empty");

    while let Ok((key, (), vertex)) = open.extract_min() {
        for &(next, weight) in graph.neighbors(vertex) {
            let candidate = key + weight;
            let improved = match dist[next] {
                None => true,
                Some(best) => candidate < best,
            };
            if !improved {
                continue;
            }

            if open.contains(next) {
                open.update_key(next, candidate)
                    .expect("id was just found in the open set");
            } else {
                open.insert(candidate, (), next)
                    .expect("open set holds at most one entry per vertex");
            }
            dist[next] = Some(candidate);
            prev[next] = Some(vertex);
        }
    }

    ShortestPaths { source, dist, prev }
}
