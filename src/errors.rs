// Copyright (c) 2019-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Error types shared by graph construction and the search algorithms.

use std::error;
use std::fmt;

/// Error raised by graph construction or a shortest path query.
///
/// All variants are recoverable conditions reported to the caller, the
/// algorithms never panic on invalid user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An edge with nonpositive weight was passed to a graph builder.
    ///
    /// A weight of zero is reserved to mean "no edge" in the adjacency
    /// matrix encoding this library is usually fed from, so only
    /// strictly positive weights can be stored.
    InvalidEdgeWeight { u: usize, v: usize },
    /// A vertex index outside `[0, n)` was passed to a query.
    VertexNotFound(usize),
    /// A search exhausted all reachable vertices without connecting
    /// source and target.
    NoPathFound { src: usize, dst: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            InvalidEdgeWeight { u, v } => write!(fmt, "Edge ({}, {}) has a nonpositive weight", u, v),
            VertexNotFound(u) => write!(fmt, "Vertex {} does not exist", u),
            NoPathFound { src, dst } => write!(fmt, "No path from vertex {} to vertex {}", src, dst),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
