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

//! Dijkstra's shortest path algorithm.
//!
//! Computes the shortest paths from a start vertex to all other
//! vertices of a graph with nonnegative edge weights. The algorithm is
//! an [A\*-search][crate::shortestpath::astar] with the zero estimate
//! for every vertex; the implementations share their vertex selection
//! rule (smallest tentative distance, ties broken by the smallest
//! vertex id) and therefore scan vertices in the same order.
//!
//! # Example
//!
//! ```
//! use rs_routing::AdjGraph;
//! use rs_routing::shortestpath::{dijkstra, reconstruct_path};
//!
//! let g = AdjGraph::from_edges(
//!     5,
//!     vec![(0, 1, 7u32), (0, 2, 3), (1, 2, 1), (1, 3, 2), (2, 3, 7), (3, 4, 2)],
//! )
//! .unwrap();
//!
//! let (dist, preds) = dijkstra::search(&g, 0, None).unwrap();
//!
//! assert_eq!(dist, vec![Some(0), Some(4), Some(3), Some(6), Some(8)]);
//! assert_eq!(reconstruct_path(&preds, 0, 3).unwrap(), vec![0, 2, 1, 3]);
//! ```

use crate::collections::{BinHeap, ItemPriQueue};
use crate::errors::{Error, Result};
use crate::graph::AdjGraph;
use crate::shortestpath::astar::{Entry, Heuristic};
use crate::shortestpath::VertexState;

use num_traits::Zero;
use std::ops::Add;

/// The zero estimate.
///
/// Turns the A* vertex selection into plain Dijkstra selection: adding
/// it to a distance returns the distance unchanged, so vertices are
/// ordered by their tentative distance alone.
#[derive(Clone, Copy, Default)]
pub struct NoEstimate;

impl Heuristic for NoEstimate {
    type Estimate = NoEstimate;

    fn estimate(&self, _u: usize, _goal: usize) -> NoEstimate {
        NoEstimate
    }
}

impl<T> Add<T> for NoEstimate {
    type Output = T;

    fn add(self, x: T) -> T {
        x
    }
}

/// Run a Dijkstra search on `g` starting at `src`.
///
/// Returns the distance vector and the predecessor trace of the
/// search. `dist[v]` is the weight of a shortest path from `src` to
/// `v`, or `None` if `v` is unreachable; `preds[v]` is the vertex
/// preceding `v` on such a path (`None` for `src` itself and for
/// unreachable vertices). A path itself can be obtained with
/// [`reconstruct_path`][crate::shortestpath::reconstruct_path].
///
/// If `target` is given, the search stops as soon as the target is
/// finalized. This is purely an optimization: the entries of the
/// target (and of every vertex finalized before it) are the same as
/// after a full run, only vertices that were still tentative at that
/// point may keep a preliminary or empty entry.
///
/// Vertices with equal tentative distance are finalized in ascending
/// id order, so the reported trace is deterministic.
///
/// # Failure
///
/// Fails with `VertexNotFound` if `src` or `target` is out of range.
/// An unreachable target is *not* an error, it simply keeps `dist[t]
/// == None`.
pub fn search<W>(
    g: &AdjGraph<W>,
    src: usize,
    target: Option<usize>,
) -> Result<(Vec<Option<W>>, Vec<Option<usize>>)>
where
    W: Copy + PartialOrd + Zero,
{
    let n = g.num_vertices();
    if src >= n {
        return Err(Error::VertexNotFound(src));
    }
    if let Some(t) = target {
        if t >= n {
            return Err(Error::VertexNotFound(t));
        }
    }

    let mut dist: Vec<Option<W>> = vec![None; n];
    let mut preds: Vec<Option<usize>> = vec![None; n];
    let mut states = vec![VertexState::Unseen; n];
    let mut pqueue = BinHeap::new();

    dist[src] = Some(W::zero());
    states[src] = VertexState::Open(pqueue.push(src, Entry::new(W::zero(), NoEstimate, src)));

    while let Some((u, entry)) = pqueue.pop_min() {
        states[u] = VertexState::Done;
        if target == Some(u) {
            break;
        }
        for &(v, w) in g.edges_from(u) {
            let candidate = entry.distance + w;
            match &mut states[v] {
                // already finalized, its distance is optimal
                VertexState::Done => {}
                VertexState::Open(item) => {
                    if dist[v].map_or(true, |d| candidate < d) {
                        dist[v] = Some(candidate);
                        preds[v] = Some(u);
                        pqueue.decrease_key(item, Entry::new(candidate, NoEstimate, v));
                    }
                }
                state @ VertexState::Unseen => {
                    dist[v] = Some(candidate);
                    preds[v] = Some(u);
                    *state = VertexState::Open(pqueue.push(v, Entry::new(candidate, NoEstimate, v)));
                }
            }
        }
    }

    Ok((dist, preds))
}
