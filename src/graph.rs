/*
 * Copyright (c) 2019, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! The static weighted graph data structure.
//!
//! An [`AdjGraph`] is an undirected graph over the vertices `0..n` with
//! a strictly positive weight on each edge. It is built once, via
//! [`GraphBuilder`][crate::builder::GraphBuilder] or
//! [`AdjGraph::from_edges`], and never modified afterwards, so a search
//! may hold on to adjacency data for its whole run and independent
//! searches may share one graph.
//!
//! # Example
//!
//! ```
//! use rs_routing::AdjGraph;
//!
//! let g = AdjGraph::from_edges(4, vec![(0, 1, 2u32), (1, 2, 3), (0, 2, 7)]).unwrap();
//!
//! assert_eq!(g.num_vertices(), 4);
//! assert_eq!(g.num_edges(), 3);
//! assert_eq!(g.weight(2, 1).unwrap(), Some(3));
//! assert_eq!(g.weight(2, 3).unwrap(), None);
//! // neighbors are listed in ascending vertex order
//! let ns: Vec<_> = g.neighbors(2).unwrap().collect();
//! assert_eq!(ns, vec![(0, 7), (1, 3)]);
//! ```

use crate::builder::GraphBuilder;
use crate::errors::{Error, Result};
use crate::num::traits::Zero;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A static, undirected graph with weighted edges.
///
/// Each vertex is identified by its index in `[0, n)`. For every vertex
/// the adjacent `(neighbor, weight)` pairs are stored sorted by
/// ascending neighbor id; an undirected edge appears in the lists of
/// both of its end vertices with the same weight. Stored weights are
/// strictly positive (zero means "no edge" and is rejected during
/// construction).
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct AdjGraph<W> {
    adj: Vec<Vec<(usize, W)>>,
}

/// Iterator over the `(neighbor, weight)` pairs of one vertex.
///
/// Returned by [`AdjGraph::neighbors`]; yields neighbors in ascending
/// vertex order.
pub struct Neighbors<'a, W> {
    iter: std::slice::Iter<'a, (usize, W)>,
}

impl<'a, W> Iterator for Neighbors<'a, W>
where
    W: Copy,
{
    type Item = (usize, W);

    fn next(&mut self) -> Option<(usize, W)> {
        self.iter.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<W> AdjGraph<W> {
    /// Wrap sorted adjacency lists.
    ///
    /// Only called by the builder, which has established the invariants
    /// (sorted lists, symmetric edges, positive weights).
    pub(crate) fn from_adjacency(adj: Vec<Vec<(usize, W)>>) -> Self {
        AdjGraph { adj }
    }

    /// Return the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    /// Return the number of edges.
    pub fn num_edges(&self) -> usize {
        // every edge {u,v} with u != v is stored twice, a self-loop once
        self.adj
            .iter()
            .enumerate()
            .map(|(u, ns)| ns.iter().filter(|&&(v, _)| v >= u).count())
            .sum()
    }

    /// The adjacency list of `u`, sorted by ascending neighbor id.
    ///
    /// Used by the algorithms after they have verified their input
    /// vertices, hence no range check.
    pub(crate) fn edges_from(&self, u: usize) -> &[(usize, W)] {
        &self.adj[u]
    }
}

impl<W> AdjGraph<W>
where
    W: Copy + PartialOrd + Zero,
{
    /// Build a graph with `n` vertices from a list of weighted edges.
    ///
    /// Every item `(u, v, w)` adds the undirected edge between `u` and
    /// `v` with weight `w`. Vertices without incident edges simply stay
    /// isolated. Parallel edges collapse to the cheapest weight.
    ///
    /// # Failure
    ///
    /// Fails with `InvalidEdgeWeight` if some weight is not strictly
    /// positive and with `VertexNotFound` if an end vertex is not in
    /// `[0, n)`.
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut b = GraphBuilder::with_capacity(n);
        b.add_vertices(n);
        for (u, v, w) in edges {
            b.add_edge(u, v, w)?;
        }
        Ok(b.into_graph())
    }

    /// Return an iterator over the neighbors of `u` and the weights of
    /// the connecting edges, in ascending order of the neighbor id.
    ///
    /// The fixed order makes tie-breaking in the search algorithms
    /// reproducible.
    pub fn neighbors(&self, u: usize) -> Result<Neighbors<'_, W>> {
        match self.adj.get(u) {
            Some(ns) => Ok(Neighbors { iter: ns.iter() }),
            None => Err(Error::VertexNotFound(u)),
        }
    }

    /// Return the weight of the edge between `u` and `v`, or `None` if
    /// there is no such edge.
    ///
    /// Runs a binary search on the sorted adjacency list of `u`.
    pub fn weight(&self, u: usize, v: usize) -> Result<Option<W>> {
        if u >= self.adj.len() {
            return Err(Error::VertexNotFound(u));
        }
        if v >= self.adj.len() {
            return Err(Error::VertexNotFound(v));
        }
        let ns = &self.adj[u];
        Ok(ns
            .binary_search_by_key(&v, |&(n, _)| n)
            .ok()
            .map(|i| ns[i].1))
    }
}
