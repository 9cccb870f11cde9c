/*
 * Copyright (c) 2019, 2021 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! A* search.
//!
//! A goal directed single pair search. Every discovered vertex `u` is
//! ranked by `g(u) + h(u)`, where `g(u)` is the best known distance
//! from the start vertex and the estimate `h(u)` is a caller supplied
//! lower bound on the remaining distance from `u` to the goal. With
//! the zero estimate the search degenerates to
//! [Dijkstra][crate::shortestpath::dijkstra].
//!
//! The returned path is a shortest path if the estimate is
//! *admissible*, i.e. never larger than the true remaining distance.
//! Admissibility is a property of the caller's [`Heuristic`], not of
//! the graph, and is not checked here: with an overestimating
//! heuristic the search still terminates and returns a valid path,
//! only its optimality is lost.
//!
//! # Example
//!
//! ```
//! use rs_routing::shortestpath::astar;
//!
//! // a 3x3 grid with unit weights, vertices numbered row-wise
//! let g = rs_routing::classes::grid(3, 3, 1u32).unwrap();
//!
//! // manhattan distance to the goal corner, an admissible estimate
//! let manhattan = |u: usize, goal: usize| {
//!     let (x, y) = (u % 3, u / 3);
//!     let (gx, gy) = (goal % 3, goal / 3);
//!     ((x as i64 - gx as i64).abs() + (y as i64 - gy as i64).abs()) as u32
//! };
//!
//! let (path, dist) = astar::find_path(&g, 0, 8, manhattan).unwrap();
//! assert_eq!(dist, 4);
//! assert_eq!(path.len(), 5);
//! assert_eq!(path[0], 0);
//! assert_eq!(path[4], 8);
//! ```

use crate::collections::{BinHeap, ItemPriQueue};
use crate::errors::{Error, Result};
use crate::graph::AdjGraph;
use crate::shortestpath::{reconstruct_path, VertexState};

use num_traits::Zero;

use std::cmp::Ordering;
use std::ops::Add;

/// A lower bound estimate of the remaining distance to a goal vertex.
///
/// For the search result to be a shortest path the estimate must be
/// admissible: `estimate(u, goal)` must never exceed the true distance
/// from `u` to `goal`. This is a contract with the caller and cannot
/// be verified by the search itself.
///
/// Any `Fn(usize, usize) -> H` closure is a heuristic; the associated
/// type allows estimates of a different type than the edge weights as
/// long as they can be added to a weight (see
/// [`NoEstimate`][crate::shortestpath::dijkstra::NoEstimate]).
pub trait Heuristic {
    type Estimate: Copy;

    /// Estimate the remaining distance from `u` to `goal`.
    fn estimate(&self, u: usize, goal: usize) -> Self::Estimate;
}

impl<F, H> Heuristic for F
where
    F: Fn(usize, usize) -> H,
    H: Copy,
{
    type Estimate = H;

    fn estimate(&self, u: usize, goal: usize) -> H {
        (*self)(u, goal)
    }
}

/// The value stored with a queued vertex during a search.
///
/// Ordered by `lower + distance`, i.e. by the estimated total length
/// of a path through the vertex; ties are broken by the smaller vertex
/// id so that the scan order is deterministic.
#[derive(Clone)]
pub struct Entry<W, H> {
    /// Best known distance from the start vertex.
    pub distance: W,
    /// The cached estimate of the vertex.
    lower: H,
    /// The vertex this entry belongs to, as tie-breaker.
    vertex: usize,
}

impl<W, H> Entry<W, H> {
    pub(crate) fn new(distance: W, lower: H, vertex: usize) -> Self {
        Entry { distance, lower, vertex }
    }
}

impl<W, H> PartialEq for Entry<W, H>
where
    W: Copy + PartialOrd,
    H: Copy + Add<W, Output = W>,
{
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl<W, H> PartialOrd for Entry<W, H>
where
    W: Copy + PartialOrd,
    H: Copy + Add<W, Output = W>,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.lower + self.distance).partial_cmp(&(other.lower + other.distance)) {
            Some(Ordering::Equal) => self.vertex.partial_cmp(&other.vertex),
            ord => ord,
        }
    }
}

/// Run an A* search from `src` to `goal` on `g`.
///
/// Returns the vertex sequence from `src` to `goal` inclusive together
/// with its total weight. The sum of the edge weights along the
/// returned path always equals the returned distance; the path is a
/// shortest path if `heur` is admissible (see [`Heuristic`]).
///
/// Finalized vertices are never expanded again, so each vertex is
/// scanned at most once and the search terminates on every finite
/// graph, whether or not the estimate is admissible.
///
/// # Failure
///
/// Fails with `VertexNotFound` if `src` or `goal` is out of range and
/// with `NoPathFound` if all vertices reachable from `src` are
/// exhausted without reaching `goal`.
pub fn find_path<W, H>(g: &AdjGraph<W>, src: usize, goal: usize, heur: H) -> Result<(Vec<usize>, W)>
where
    W: Copy + PartialOrd + Zero,
    H: Heuristic,
    H::Estimate: Add<W, Output = W>,
{
    let n = g.num_vertices();
    if src >= n {
        return Err(Error::VertexNotFound(src));
    }
    if goal >= n {
        return Err(Error::VertexNotFound(goal));
    }

    let mut came_from: Vec<Option<usize>> = vec![None; n];
    let mut states = vec![VertexState::Unseen; n];
    let mut pqueue = BinHeap::new();

    states[src] = VertexState::Open(pqueue.push(
        src,
        Entry::new(W::zero(), heur.estimate(src, goal), src),
    ));

    while let Some((u, entry)) = pqueue.pop_min() {
        states[u] = VertexState::Done;
        if u == goal {
            let path = reconstruct_path(&came_from, src, goal)?;
            return Ok((path, entry.distance));
        }
        for &(v, w) in g.edges_from(u) {
            let tentative = entry.distance + w;
            match &mut states[v] {
                // in the closed set, not relaxed again
                VertexState::Done => {}
                VertexState::Open(item) => {
                    let (known, lower) = {
                        let val = pqueue.value(item);
                        (val.distance, val.lower)
                    };
                    if tentative < known {
                        came_from[v] = Some(u);
                        pqueue.decrease_key(item, Entry::new(tentative, lower, v));
                    }
                }
                state @ VertexState::Unseen => {
                    came_from[v] = Some(u);
                    *state = VertexState::Open(pqueue.push(
                        v,
                        Entry::new(tentative, heur.estimate(v, goal), v),
                    ));
                }
            }
        }
    }

    Err(Error::NoPathFound { src, dst: goal })
}

#[cfg(test)]
mod tests {
    use super::find_path;
    use crate::errors::Error;
    use crate::graph::AdjGraph;
    use crate::shortestpath::dijkstra::{self, NoEstimate};

    fn diamond() -> AdjGraph<u32> {
        AdjGraph::from_edges(4, vec![(0, 1, 1), (1, 3, 1), (0, 2, 2), (2, 3, 2)]).unwrap()
    }

    #[test]
    fn test_zero_estimate_matches_dijkstra() {
        let g = diamond();
        let (path, dist) = find_path(&g, 0, 3, NoEstimate).unwrap();
        let (ddist, _) = dijkstra::search(&g, 0, Some(3)).unwrap();
        assert_eq!(Some(dist), ddist[3]);
        assert_eq!(path, vec![0, 1, 3]);

        // a closure returning literal zero behaves the same
        let (path2, dist2) = find_path(&g, 0, 3, |_: usize, _: usize| 0u32).unwrap();
        assert_eq!((path2, dist2), (path, dist));
    }

    #[test]
    fn test_goal_equals_source() {
        let g = diamond();
        let (path, dist) = find_path(&g, 2, 2, NoEstimate).unwrap();
        assert_eq!(path, vec![2]);
        assert_eq!(dist, 0);
    }

    #[test]
    fn test_unreachable_goal() {
        let g = AdjGraph::from_edges(3, vec![(0, 1, 1u32)]).unwrap();
        assert_eq!(
            find_path(&g, 0, 2, NoEstimate).err(),
            Some(Error::NoPathFound { src: 0, dst: 2 })
        );
    }

    #[test]
    fn test_overestimating_heuristic_returns_valid_path() {
        // the estimate grossly overestimates the remaining distance
        // through vertex 1, steering the search onto the dearer route;
        // the result is a valid path, just not a shortest one
        let g = diamond();
        let overestimate = |u: usize, _goal: usize| if u == 1 { 100u32 } else { 0 };
        let (path, dist) = find_path(&g, 0, 3, overestimate).unwrap();
        assert_eq!(path, vec![0, 2, 3]);
        assert_eq!(dist, 4);

        let (best, _) = dijkstra::search(&g, 0, Some(3)).unwrap();
        assert_eq!(best[3], Some(2));
    }

    #[test]
    fn test_bad_vertices() {
        let g = diamond();
        assert_eq!(find_path(&g, 7, 0, NoEstimate).err(), Some(Error::VertexNotFound(7)));
        assert_eq!(find_path(&g, 0, 7, NoEstimate).err(), Some(Error::VertexNotFound(7)));
    }
}
