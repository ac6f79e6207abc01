// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Generic conversion-graph engine.
//!
//! [`ConversionGraph<S, V>`] is a registry of directed conversion edges: each
//! edge turns a value of type `V` expressed in scale `S` into the equivalent
//! value in another scale, through a pure function. Converting between two
//! scales that share no direct edge composes edge functions along the
//! shortest registered route.
//!
//! The engine is domain-agnostic — `S` is any copyable, comparable identifier
//! and `V` any value type. The timescale instantiation lives in
//! [`scales`](crate::scales); the engine itself never learns what a leap
//! second is.
//!
//! # Path discovery
//!
//! [`find_path`](ConversionGraph::find_path) runs a breadth-first search:
//! the frontier is expanded in FIFO order and each node's outgoing edges are
//! visited in the order they were registered. The first route that reaches
//! the target is returned, which makes the result the minimum-hop path, with
//! ties between equally short routes decided by registration order. The
//! search is deterministic: the same registration sequence always yields the
//! same path.
//!
//! # Sharing
//!
//! Registration takes `&mut self` and queries take `&self`, so the
//! populate-then-read discipline is enforced by the borrow checker. Edges
//! are plain `fn` pointers; a fully built graph is `Send + Sync` whenever
//! `S` and `V` are, and may be shared across readers without locking.
//!
//! ```
//! use tictoc::ConversionGraph;
//!
//! fn double(value: i64) -> i64 { value * 2 }
//! fn successor(value: i64) -> i64 { value + 1 }
//!
//! let mut graph = ConversionGraph::new();
//! graph.register("n", "2n", double);
//! graph.register("2n", "2n+1", successor);
//!
//! assert_eq!(graph.find_path("n", "2n+1"), Ok(vec!["n", "2n", "2n+1"]));
//! assert_eq!(graph.convert("n", "2n+1", 10), Ok(21));
//! ```

use std::collections::VecDeque;
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════
// Edge and error types
// ═══════════════════════════════════════════════════════════════════════════

/// A registered conversion: a pure function from a value in the source scale
/// to the equivalent value in the target scale.
pub type Edge<V> = fn(V) -> V;

/// No directed route of registered edges connects the two scales.
///
/// The only failure the engine reports: the target was never registered as a
/// destination, the source has no outgoing edges, or the graph is
/// disconnected between them. Conversions either apply their whole edge
/// chain or fail with this before any edge runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no conversion path from {from} to {to}")]
pub struct NoPathError<S> {
    /// Scale the conversion started from.
    pub from: S,
    /// Scale that could not be reached.
    pub to: S,
}

// ═══════════════════════════════════════════════════════════════════════════
// ConversionGraph
// ═══════════════════════════════════════════════════════════════════════════

/// Directed registry of pairwise conversions between scales of type `S`
/// over values of type `V`.
///
/// Nodes and outgoing edges are kept in insertion order — the order edges
/// are registered in is part of the path-search contract (see the module
/// docs). The node set is small by design; lookups scan linearly.
#[derive(Debug)]
pub struct ConversionGraph<S, V> {
    nodes: Vec<Node<S, V>>,
}

#[derive(Debug)]
struct Node<S, V> {
    id: S,
    /// Outgoing edges as (target node index, function), registration-ordered.
    edges: Vec<(usize, Edge<V>)>,
}

impl<S, V> Default for ConversionGraph<S, V> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<S: Copy + PartialEq, V> ConversionGraph<S, V> {
    /// An empty graph: every non-identity conversion fails until edges are
    /// registered.
    pub fn new() -> Self {
        Self::default()
    }

    // ── registration ──────────────────────────────────────────────────

    /// Insert the directed edge `source → target`.
    ///
    /// Both endpoints become graph nodes, so a later search never trips on
    /// a scale that only ever appeared as a destination. Re-registering a
    /// pair replaces the function in place: the last registration wins, but
    /// the edge keeps the position of the first one in the node's outgoing
    /// order.
    pub fn register(&mut self, source: S, target: S, edge: Edge<V>) {
        let source_index = self.intern(source);
        let target_index = self.intern(target);
        let outgoing = &mut self.nodes[source_index].edges;
        match outgoing.iter_mut().find(|(next, _)| *next == target_index) {
            Some(slot) => slot.1 = edge,
            None => outgoing.push((target_index, edge)),
        }
    }

    // ── queries ───────────────────────────────────────────────────────

    /// The registered function for `source → target`, if that exact edge
    /// exists (path composition does not count).
    pub fn edge(&self, source: S, target: S) -> Option<Edge<V>> {
        let node = &self.nodes[self.index_of(source)?];
        node.edges
            .iter()
            .find(|&&(next, _)| self.nodes[next].id == target)
            .map(|&(_, edge)| edge)
    }

    /// Shortest registered route from `source` to `target`, inclusive of
    /// both endpoints; empty when they are equal.
    ///
    /// Breadth-first, FIFO frontier, neighbors in registration order, first
    /// discovery wins — see the module docs for what that guarantees.
    pub fn find_path(&self, source: S, target: S) -> Result<Vec<S>, NoPathError<S>> {
        if source == target {
            return Ok(Vec::new());
        }
        let missing = NoPathError {
            from: source,
            to: target,
        };
        let start = self.index_of(source).ok_or(missing)?;

        let mut predecessor: Vec<Option<usize>> = vec![None; self.nodes.len()];
        let mut frontier = VecDeque::from([start]);
        while let Some(current) = frontier.pop_front() {
            for &(next, _) in &self.nodes[current].edges {
                if next == start || predecessor[next].is_some() {
                    continue;
                }
                predecessor[next] = Some(current);
                if self.nodes[next].id == target {
                    return Ok(self.trace_back(next, &predecessor));
                }
                frontier.push_back(next);
            }
        }
        Err(missing)
    }

    /// Convert `value` from `source` to `target` by applying every edge
    /// along `find_path(source, target)` in order.
    ///
    /// Equal scales are the zero-length path: the value comes back
    /// untouched. A missing route propagates as [`NoPathError`] with no
    /// edge applied.
    pub fn convert(&self, source: S, target: S, value: V) -> Result<V, NoPathError<S>> {
        let path = self.find_path(source, target)?;
        let mut value = value;
        for step in path.windows(2) {
            let edge = self
                .edge(step[0], step[1])
                .expect("paths only traverse registered edges");
            value = edge(value);
        }
        Ok(value)
    }

    // ── internals ─────────────────────────────────────────────────────

    /// Node index for `id`, creating the node if it is new.
    fn intern(&mut self, id: S) -> usize {
        match self.index_of(id) {
            Some(index) => index,
            None => {
                self.nodes.push(Node {
                    id,
                    edges: Vec::new(),
                });
                self.nodes.len() - 1
            }
        }
    }

    fn index_of(&self, id: S) -> Option<usize> {
        self.nodes.iter().position(|node| node.id == id)
    }

    /// Rebuild the discovered route by walking the predecessor chain from
    /// `end` back to the start node (the one with no predecessor).
    fn trace_back(&self, end: usize, predecessor: &[Option<usize>]) -> Vec<S> {
        let mut path = Vec::new();
        let mut current = Some(end);
        while let Some(index) = current {
            path.push(self.nodes[index].id);
            current = predecessor[index];
        }
        path.reverse();
        path
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn double(value: i64) -> i64 {
        value * 2
    }

    fn successor(value: i64) -> i64 {
        value + 1
    }

    fn negate(value: i64) -> i64 {
        -value
    }

    #[test]
    fn identity_path_is_empty_even_for_unknown_scales() {
        let graph: ConversionGraph<&str, i64> = ConversionGraph::new();
        assert_eq!(graph.find_path("ghost", "ghost"), Ok(vec![]));
        assert_eq!(graph.convert("ghost", "ghost", 7), Ok(7));
    }

    #[test]
    fn single_edge_path_includes_both_endpoints() {
        let mut graph = ConversionGraph::new();
        graph.register("a", "b", double);
        assert_eq!(graph.find_path("a", "b"), Ok(vec!["a", "b"]));
        assert_eq!(graph.convert("a", "b", 21), Ok(42));
    }

    #[test]
    fn registering_creates_the_target_node() {
        let mut graph = ConversionGraph::new();
        graph.register("a", "b", double);
        // "b" has no outgoing edges, yet searching from it must not panic.
        assert_eq!(
            graph.find_path("b", "a"),
            Err(NoPathError { from: "b", to: "a" })
        );
    }

    #[test]
    fn unknown_source_reports_no_path() {
        let mut graph = ConversionGraph::new();
        graph.register("a", "b", double);
        assert_eq!(
            graph.find_path("nowhere", "b"),
            Err(NoPathError {
                from: "nowhere",
                to: "b"
            })
        );
    }

    #[test]
    fn unknown_target_reports_no_path() {
        let mut graph = ConversionGraph::new();
        graph.register("a", "b", double);
        let error = graph.convert("a", "nowhere", 1).unwrap_err();
        assert_eq!(
            error,
            NoPathError {
                from: "a",
                to: "nowhere"
            }
        );
        assert_eq!(
            error.to_string(),
            "no conversion path from a to nowhere"
        );
    }

    #[test]
    fn chain_composes_left_to_right() {
        let mut graph = ConversionGraph::new();
        graph.register("a", "b", successor);
        graph.register("b", "c", double);
        // (10 + 1) * 2, not 10 * 2 + 1.
        assert_eq!(graph.convert("a", "c", 10), Ok(22));
        assert_eq!(graph.find_path("a", "c"), Ok(vec!["a", "b", "c"]));
    }

    #[test]
    fn direct_edge_beats_longer_chain() {
        let mut graph = ConversionGraph::new();
        graph.register("a", "b", successor);
        graph.register("b", "c", successor);
        graph.register("c", "d", successor);
        graph.register("a", "d", negate);
        assert_eq!(graph.find_path("a", "d"), Ok(vec!["a", "d"]));
        assert_eq!(graph.convert("a", "d", 5), Ok(-5));
    }

    #[test]
    fn ties_resolve_toward_the_earlier_registration() {
        // Diamond with two 2-edge routes; the branch registered first wins.
        let mut graph = ConversionGraph::new();
        graph.register("a", "left", successor);
        graph.register("a", "right", double);
        graph.register("left", "z", double);
        graph.register("right", "z", successor);
        assert_eq!(graph.find_path("a", "z"), Ok(vec!["a", "left", "z"]));
        assert_eq!(graph.convert("a", "z", 3), Ok(8));

        let mut flipped = ConversionGraph::new();
        flipped.register("a", "right", double);
        flipped.register("a", "left", successor);
        flipped.register("left", "z", double);
        flipped.register("right", "z", successor);
        assert_eq!(flipped.find_path("a", "z"), Ok(vec!["a", "right", "z"]));
        assert_eq!(flipped.convert("a", "z", 3), Ok(7));
    }

    #[test]
    fn last_registration_for_a_pair_wins_in_place() {
        let mut graph = ConversionGraph::new();
        graph.register("a", "b", double);
        graph.register("a", "c", double);
        graph.register("a", "b", successor);
        assert_eq!(graph.convert("a", "b", 10), Ok(11));
        // The replaced edge kept its slot, so "b" is still tried before "c".
        graph.register("b", "z", double);
        graph.register("c", "z", double);
        assert_eq!(graph.find_path("a", "z"), Ok(vec!["a", "b", "z"]));
    }

    #[test]
    fn edge_lookup_sees_direct_edges_only() {
        let mut graph = ConversionGraph::new();
        graph.register("a", "b", successor);
        graph.register("b", "c", double);
        assert!(graph.edge("a", "b").is_some());
        assert!(graph.edge("a", "c").is_none());
        assert!(graph.edge("c", "a").is_none());
    }

    #[test]
    fn cycles_do_not_trap_the_search() {
        let mut graph = ConversionGraph::new();
        graph.register("a", "b", successor);
        graph.register("b", "a", successor);
        graph.register("b", "c", double);
        assert_eq!(graph.find_path("a", "c"), Ok(vec!["a", "b", "c"]));
        assert_eq!(
            graph.find_path("a", "unreached"),
            Err(NoPathError {
                from: "a",
                to: "unreached"
            })
        );
    }
}
