// Copyright (c) 2019-2021 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Some common graph classes.
//!
//! All generators assign the same weight `w` to every edge; they fail
//! with `InvalidEdgeWeight` if `w` is not strictly positive.

use crate::builder::GraphBuilder;
use crate::errors::Result;
use crate::graph::AdjGraph;
use crate::num::traits::Zero;

/// Returns a path with `m` edges (and `m + 1` vertices) of weight `w`.
pub fn path<W>(m: usize, w: W) -> Result<AdjGraph<W>>
where
    W: Copy + PartialOrd + Zero,
{
    let mut b = GraphBuilder::with_capacity(m + 1);
    let vs = b.add_vertices(m + 1);
    for (u, v) in vs.clone().zip(vs.skip(1)) {
        b.add_edge(u, v, w)?;
    }
    Ok(b.into_graph())
}

/// Returns a cycle of length `n` with edges of weight `w`.
pub fn cycle<W>(n: usize, w: W) -> Result<AdjGraph<W>>
where
    W: Copy + PartialOrd + Zero,
{
    let mut b = GraphBuilder::with_capacity(n);
    b.add_vertices(n);
    for u in 0..n {
        b.add_edge(u, (u + 1) % n, w)?;
    }
    Ok(b.into_graph())
}

/// Returns the complete graph on `n` vertices with edges of weight `w`.
pub fn complete_graph<W>(n: usize, w: W) -> Result<AdjGraph<W>>
where
    W: Copy + PartialOrd + Zero,
{
    let mut b = GraphBuilder::with_capacity(n);
    b.add_vertices(n);
    for u in 0..n {
        for v in u + 1..n {
            b.add_edge(u, v, w)?;
        }
    }
    Ok(b.into_graph())
}

/// Return a grid graph with `n` columns and `m` rows, all edges of
/// weight `w`.
///
/// The vertices are numbered row-wise: vertex `y * n + x` is the
/// vertex in column `x` of row `y`.
pub fn grid<W>(n: usize, m: usize, w: W) -> Result<AdjGraph<W>>
where
    W: Copy + PartialOrd + Zero,
{
    let mut b = GraphBuilder::with_capacity(n * m);
    b.add_vertices(n * m);
    for y in 0..m {
        for x in 0..n {
            if x + 1 < n {
                b.add_edge(y * n + x, y * n + x + 1, w)?;
            }
            if y + 1 < m {
                b.add_edge(y * n + x, (y + 1) * n + x, w)?;
            }
        }
    }
    Ok(b.into_graph())
}
