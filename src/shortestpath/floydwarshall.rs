// Copyright (c) 2019, 2020, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! All-Pairs-Shortest-Path algorithm of Floyd and Warshall.
//!
//! Computes the shortest path weights between every pair of vertices
//! by relaxing over all intermediate vertices, in O(n³) time. The
//! weights of this library are nonnegative by construction, so the
//! negative cycle caveat of the general algorithm does not arise.

use crate::graph::AdjGraph;
use crate::num::traits::Zero;

/// Solve the All-Pairs-Shortest-Path problem on `g`.
///
/// Returns the distance matrix and the predecessor matrix of the
/// graph. `dist[i][j]` is the weight of a shortest path from `i` to
/// `j` (`Some(0)` on the diagonal, `None` for an unreachable pair) and
/// `preds[i][j]` is the vertex preceding `j` on such a path (`None` on
/// the diagonal and for unreachable pairs).
///
/// Row `i` of the predecessor matrix is a complete predecessor trace
/// of vertex `i`, so a concrete path can be obtained with
/// [`reconstruct_path`][crate::shortestpath::reconstruct_path]:
///
/// ```
/// use rs_routing::AdjGraph;
/// use rs_routing::shortestpath::{floydwarshall, reconstruct_path};
///
/// let g = AdjGraph::from_edges(
///     4,
///     vec![(0, 1, 5u32), (0, 2, 1), (2, 1, 1), (1, 3, 2)],
/// )
/// .unwrap();
///
/// let (dist, preds) = floydwarshall::all_pairs(&g);
///
/// assert_eq!(dist[0][1], Some(2)); // 0-2-1 beats the direct edge
/// assert_eq!(dist[0][3], Some(4));
/// assert_eq!(dist[3][0], Some(4)); // the graph is undirected
/// assert_eq!(reconstruct_path(&preds[0], 0, 3).unwrap(), vec![0, 2, 1, 3]);
/// ```
pub fn all_pairs<W>(g: &AdjGraph<W>) -> (Vec<Vec<Option<W>>>, Vec<Vec<Option<usize>>>)
where
    W: Copy + PartialOrd + Zero,
{
    let n = g.num_vertices();
    let mut dist: Vec<Vec<Option<W>>> = vec![vec![None; n]; n];
    let mut preds: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];

    for u in 0..n {
        dist[u][u] = Some(W::zero());
        for &(v, w) in g.edges_from(u) {
            // a self-loop is never part of a shortest path
            if v == u {
                continue;
            }
            dist[u][v] = Some(w);
            preds[u][v] = Some(u);
        }
    }

    for k in 0..n {
        for i in 0..n {
            if i == k {
                continue;
            }
            let d_ik = match dist[i][k] {
                Some(d) => d,
                None => continue,
            };
            for j in 0..n {
                if j == k {
                    continue;
                }
                if let Some(d_kj) = dist[k][j] {
                    let through_k = d_ik + d_kj;
                    if dist[i][j].map_or(true, |d| through_k < d) {
                        dist[i][j] = Some(through_k);
                        // carry the predecessor of the k->j leg
                        preds[i][j] = preds[k][j];
                    }
                }
            }
        }
    }

    (dist, preds)
}
