/*
 * Copyright (c) 2020, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

use rs_routing::shortestpath::dijkstra::NoEstimate;
use rs_routing::shortestpath::{astar, dijkstra, floydwarshall, reconstruct_path};
use rs_routing::{AdjGraph, Error};

use ordered_float::OrderedFloat;

/// The nine vertex test network, vertices A..I numbered 0..8. The
/// cheap triangles A-B-E and G-H-I are joined by the expensive edge
/// E-G, and C, D, F form a pocket behind the weight-9 edge B-C.
const EDGES: &[(usize, usize, u32)] = &[
    (0, 1, 1), // A-B
    (0, 4, 1), // A-E
    (1, 2, 9), // B-C
    (1, 4, 1), // B-E
    (2, 3, 1), // C-D
    (2, 5, 1), // C-F
    (3, 5, 1), // D-F
    (4, 6, 7), // E-G
    (6, 7, 1), // G-H
    (6, 8, 1), // G-I
    (7, 8, 1), // H-I
];

fn network() -> AdjGraph<u32> {
    AdjGraph::from_edges(9, EDGES.iter().copied()).unwrap()
}

/// Check the path invariant: consecutive vertices are adjacent and the
/// edge weights along the path sum up to the claimed distance.
fn assert_path_weight(g: &AdjGraph<u32>, path: &[usize], expected: u32) {
    let mut total = 0;
    for pair in path.windows(2) {
        let w = g.weight(pair[0], pair[1]).unwrap();
        assert!(w.is_some(), "vertices {} and {} are not adjacent", pair[0], pair[1]);
        total += w.unwrap();
    }
    assert_eq!(total, expected);
}

#[test]
fn test_dijkstra_full_tree() {
    let (dist, preds) = dijkstra::search(&network(), 0, None).unwrap();
    assert_eq!(
        dist,
        [0, 1, 10, 11, 1, 11, 8, 9, 9].iter().map(|&d| Some(d)).collect::<Vec<_>>()
    );
    assert_eq!(
        preds,
        vec![
            None,
            Some(0),
            Some(1),
            Some(2),
            Some(0),
            Some(2),
            Some(4),
            Some(6),
            Some(6)
        ]
    );
}

#[test]
fn test_dijkstra_single_pair() {
    let g = network();

    // A -> H
    let (dist, preds) = dijkstra::search(&g, 0, Some(7)).unwrap();
    assert_eq!(dist[7], Some(9));
    let path = reconstruct_path(&preds, 0, 7).unwrap();
    assert_eq!(path, vec![0, 4, 6, 7]);
    assert_path_weight(&g, &path, 9);

    // A -> I: same cost structure, distinct target
    let (dist, preds) = dijkstra::search(&g, 0, Some(8)).unwrap();
    assert_eq!(dist[8], Some(9));
    let path = reconstruct_path(&preds, 0, 8).unwrap();
    assert_eq!(path, vec![0, 4, 6, 8]);
    assert_path_weight(&g, &path, 9);
}

#[test]
fn test_dijkstra_agrees_with_floydwarshall() {
    let g = network();
    let (all_dist, _) = floydwarshall::all_pairs(&g);
    for s in 0..g.num_vertices() {
        let (dist, _) = dijkstra::search(&g, s, None).unwrap();
        assert_eq!(dist, all_dist[s], "source {}", s);
    }
}

#[test]
fn test_floydwarshall_paths() {
    let g = network();
    let (dist, preds) = floydwarshall::all_pairs(&g);
    assert_eq!(dist[0][7], Some(9));
    for i in 0..g.num_vertices() {
        for j in 0..g.num_vertices() {
            let path = reconstruct_path(&preds[i], i, j).unwrap();
            assert_eq!(path.first(), Some(&i));
            assert_eq!(path.last(), Some(&j));
            assert_path_weight(&g, &path, dist[i][j].unwrap());
        }
    }
}

#[test]
fn test_astar_zero_estimate_matches_dijkstra() {
    let g = network();
    for s in 0..g.num_vertices() {
        let (dist, _) = dijkstra::search(&g, s, None).unwrap();
        for t in 0..g.num_vertices() {
            let (path, d) = astar::find_path(&g, s, t, |_: usize, _: usize| 0u32).unwrap();
            assert_eq!(Some(d), dist[t], "pair ({}, {})", s, t);
            assert_path_weight(&g, &path, d);
        }
    }
}

#[test]
fn test_astar_with_no_estimate_type() {
    let g = network();
    let (path, dist) = astar::find_path(&g, 0, 7, NoEstimate).unwrap();
    assert_eq!(dist, 9);
    assert_eq!(path, vec![0, 4, 6, 7]);
}

#[test]
fn test_astar_overestimate_terminates_with_valid_path() {
    // the estimate of the original network scripts: the weight of the
    // connecting edge if the vertex is adjacent to the goal, a large
    // constant otherwise. It overestimates (e.g. for E it claims 100
    // although H is 8 away), so optimality is not guaranteed, but the
    // search must still terminate with a valid path.
    let g = network();
    let adjacent_or_large = |u: usize, goal: usize| g.weight(u, goal).unwrap().unwrap_or(100);
    let (path, dist) = astar::find_path(&g, 0, 7, &adjacent_or_large).unwrap();
    assert_eq!(path.first(), Some(&0));
    assert_eq!(path.last(), Some(&7));
    assert_path_weight(&g, &path, dist);
}

#[test]
fn test_isolated_vertex_is_unreachable() {
    // the A..I network plus a tenth vertex without incident edges
    let g = AdjGraph::from_edges(10, EDGES.iter().copied()).unwrap();

    let (dist, preds) = dijkstra::search(&g, 0, None).unwrap();
    assert_eq!(dist[9], None);
    assert_eq!(preds[9], None);

    let (all_dist, _) = floydwarshall::all_pairs(&g);
    for s in 0..9 {
        assert_eq!(all_dist[s][9], None);
    }

    assert_eq!(
        astar::find_path(&g, 0, 9, NoEstimate).err(),
        Some(Error::NoPathFound { src: 0, dst: 9 })
    );
}

#[test]
fn test_source_equals_target() {
    let g = network();
    let (dist, preds) = dijkstra::search(&g, 5, Some(5)).unwrap();
    assert_eq!(dist[5], Some(0));
    assert_eq!(reconstruct_path(&preds, 5, 5).unwrap(), vec![5]);
}

#[test]
fn test_roundtrip_endpoints() {
    let g = network();
    for s in 0..g.num_vertices() {
        let (_, preds) = dijkstra::search(&g, s, None).unwrap();
        for t in 0..g.num_vertices() {
            let path = reconstruct_path(&preds, s, t).unwrap();
            assert_eq!(path.first(), Some(&s));
            assert_eq!(path.last(), Some(&t));
        }
    }
}

#[test]
fn test_construction_errors() {
    assert_eq!(
        AdjGraph::from_edges(3, vec![(0, 1, 0u32)]).err(),
        Some(Error::InvalidEdgeWeight { u: 0, v: 1 })
    );
    assert_eq!(
        AdjGraph::from_edges(3, vec![(0, 3, 1u32)]).err(),
        Some(Error::VertexNotFound(3))
    );
}

#[test]
fn test_query_errors() {
    let g = network();
    assert_eq!(dijkstra::search(&g, 9, None).err(), Some(Error::VertexNotFound(9)));
    assert_eq!(dijkstra::search(&g, 0, Some(9)).err(), Some(Error::VertexNotFound(9)));
    assert_eq!(
        astar::find_path(&g, 0, 9, NoEstimate).err(),
        Some(Error::VertexNotFound(9))
    );
}

#[test]
fn test_float_weights() {
    let w = |x: f64| OrderedFloat(x);
    let g = AdjGraph::from_edges(
        4,
        vec![
            (0, 1, w(0.5)),
            (1, 3, w(0.25)),
            (0, 2, w(0.3)),
            (2, 3, w(0.6)),
        ],
    )
    .unwrap();

    let (dist, preds) = dijkstra::search(&g, 0, None).unwrap();
    assert_eq!(dist[3], Some(w(0.75)));
    assert_eq!(reconstruct_path(&preds, 0, 3).unwrap(), vec![0, 1, 3]);

    let (path, d) = astar::find_path(&g, 0, 3, NoEstimate).unwrap();
    assert_eq!(path, vec![0, 1, 3]);
    assert_eq!(d, w(0.75));
}
