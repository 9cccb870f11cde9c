/*
 * Copyright (c) 2019-2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Constructing graphs.
//!
//! A graph is a static object. It is assembled with a [`GraphBuilder`]
//! and, once complete, converted into an [`AdjGraph`] with
//! [`into_graph`][GraphBuilder::into_graph]. This separates the
//! mutable construction phase from the read-only query phase: edge
//! weights are validated when an edge is added, the adjacency lists
//! are sorted once at conversion time, and the finished graph never
//! changes again.
//!
//! # Example
//!
//! ```
//! use rs_routing::builder::GraphBuilder;
//!
//! let mut b = GraphBuilder::new();
//! let vs = b.add_vertices(3);
//! b.add_edge(vs.start, vs.start + 1, 4u32).unwrap();
//! b.add_edge(1, 2, 2).unwrap();
//! // a nonpositive weight is refused
//! assert!(b.add_edge(0, 2, 0).is_err());
//!
//! let g = b.into_graph();
//! assert_eq!(g.num_vertices(), 3);
//! assert_eq!(g.num_edges(), 2);
//! ```

use crate::errors::{Error, Result};
use crate::graph::AdjGraph;
use crate::num::traits::Zero;

use std::cmp::Ordering;
use std::ops::Range;

/// Incremental builder for an [`AdjGraph`].
pub struct GraphBuilder<W> {
    adj: Vec<Vec<(usize, W)>>,
}

impl<W> GraphBuilder<W>
where
    W: Copy + PartialOrd + Zero,
{
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new, empty builder with memory reserved for `n`
    /// vertices.
    ///
    /// This is only a reservation, vertices still have to be added.
    pub fn with_capacity(n: usize) -> Self {
        GraphBuilder {
            adj: Vec::with_capacity(n),
        }
    }

    /// Return the current number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    /// Add a new vertex and return its id.
    pub fn add_vertex(&mut self) -> usize {
        self.adj.push(vec![]);
        self.adj.len() - 1
    }

    /// Add `n` new vertices and return the range of their ids.
    pub fn add_vertices(&mut self, n: usize) -> Range<usize> {
        let first = self.adj.len();
        self.adj.resize_with(first + n, Vec::new);
        first..first + n
    }

    /// Add the undirected edge `{u, v}` with weight `w`.
    ///
    /// The edge is recorded for both end vertices. Fails with
    /// `InvalidEdgeWeight` unless `w` is strictly positive (note that
    /// this also rejects a NaN weight) and with `VertexNotFound` if an
    /// end vertex has not been added.
    pub fn add_edge(&mut self, u: usize, v: usize, w: W) -> Result<()> {
        if !(w > W::zero()) {
            return Err(Error::InvalidEdgeWeight { u, v });
        }
        if u >= self.adj.len() {
            return Err(Error::VertexNotFound(u));
        }
        if v >= self.adj.len() {
            return Err(Error::VertexNotFound(v));
        }
        self.adj[u].push((v, w));
        if u != v {
            self.adj[v].push((u, w));
        }
        Ok(())
    }

    /// Turn the builder into a graph.
    ///
    /// Sorts every adjacency list by ascending neighbor id and
    /// collapses parallel edges to the cheapest of their weights, so
    /// the result does not depend on the order in which edges were
    /// added.
    pub fn into_graph(mut self) -> AdjGraph<W> {
        for ns in &mut self.adj {
            ns.sort_by(|a, b| {
                a.0.cmp(&b.0)
                    .then_with(|| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
            });
            ns.dedup_by_key(|&mut (v, _)| v);
        }
        AdjGraph::from_adjacency(self.adj)
    }
}

impl<W> Default for GraphBuilder<W>
where
    W: Copy + PartialOrd + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}
