//Kosat
//Copyright (C) 2022-2023 A. Dubray
//
//This program is free software: you can redistribute it and/or modify
//it under the terms of the GNU Affero General Public License as published by
//the Free Software Foundation, either version 3 of the License, or
//(at your option) any later version.
//
//This program is distributed in the hope that it will be useful,
//but WITHOUT ANY WARRANTY; without even the implied warranty of
//MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//GNU Affero General Public License for more details.
//
//You should have received a copy of the GNU Affero General Public License
//along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! This module implements a directed graph using vector indexes. A graph G = (V, E) is
//! represented by its number of vertices and, for each vertex, the ordered sequence of its
//! successors. A vertex is identified uniquely by its index in `[0, V)`, wrapped in a
//! `VertexIndex`.
//!
//! The order in which the edges are inserted is kept. Every traversal visits the successors of a
//! vertex in that order, which makes all the algorithms built on top of the graph deterministic.
//!
//! The traversals do not rely on the call stack. Implication graphs built from large formulas can
//! contain chains of millions of vertices, hence the depth-first searches are driven by an
//! explicit stack of frames allocated on the heap.
//!
//! # Note:
//! Once an edge is added, it is never removed. The graph does not validate that the endpoints
//! of an edge are in `[0, V)`; this is the responsibility of the code building the graph.

/// Abstraction used as a typesafe way of retrieving a vertex in the `DirectedGraph` structure
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct VertexIndex(pub usize);

/// Data structure representing the directed graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    /// Number of vertices in the graph
    number_vertices: usize,
    /// For each vertex, its successors in insertion order
    adjacency: Vec<Vec<VertexIndex>>,
}

impl DirectedGraph {

    /// Creates a new graph with `number_vertices` vertices and no edges
    pub fn new(number_vertices: usize) -> Self {
        Self {
            number_vertices,
            adjacency: (0..number_vertices).map(|_| vec![]).collect(),
        }
    }

    /// Returns the number of vertices in the graph
    pub fn number_vertices(&self) -> usize {
        self.number_vertices
    }

    /// Returns the number of edges in the graph
    pub fn number_edges(&self) -> usize {
        self.adjacency.iter().map(|successors| successors.len()).sum()
    }

    /// Returns an iterator on the vertices of the graph, in increasing order
    pub fn vertices_iter(&self) -> impl Iterator<Item = VertexIndex> {
        (0..self.number_vertices).map(VertexIndex)
    }

    /// Adds the edge `from -> to` at the end of the successors of `from`. Parallel edges are kept.
    pub fn add_edge(&mut self, from: VertexIndex, to: VertexIndex) {
        if from.0 >= self.adjacency.len() {
            self.adjacency.resize_with(from.0 + 1, Vec::new);
        }
        self.adjacency[from.0].push(to);
    }

    /// Returns the successors of `vertex`, in insertion order. A vertex without outgoing edges
    /// has no successors.
    pub fn neighbors(&self, vertex: VertexIndex) -> &[VertexIndex] {
        match self.adjacency.get(vertex.0) {
            Some(successors) => successors,
            None => &[],
        }
    }

    /// Returns a new graph with the same vertices and every edge reversed. The edges are inserted
    /// by increasing source vertex, so the transpose of a graph is always the same.
    pub fn transpose(&self) -> Self {
        let mut transposed = DirectedGraph::new(self.number_vertices);
        for (source, successors) in self.adjacency.iter().enumerate() {
            for target in successors.iter().copied() {
                transposed.add_edge(target, VertexIndex(source));
            }
        }
        transposed
    }

    /// Performs a depth-first search from `start` and returns the newly visited vertices in the
    /// order in which they were discovered. Every discovered vertex is marked in `visited` and
    /// already marked vertices are never entered again.
    pub fn dfs(&self, start: VertexIndex, visited: &mut [bool]) -> Vec<VertexIndex> {
        let mut reached: Vec<VertexIndex> = vec![];
        self.explore(start, visited, |vertex| reached.push(vertex), |_| {});
        reached
    }

    /// Performs a depth-first search from `start` and appends each newly visited vertex to
    /// `order` once all of its successors are processed (post-order). The last vertex of `order`
    /// is thus the one that finished last.
    pub fn post_order(&self, start: VertexIndex, visited: &mut [bool], order: &mut Vec<VertexIndex>) {
        self.explore(start, visited, |_| {}, |vertex| order.push(vertex));
    }

    /// Iterative depth-first search. Each frame of the stack holds a vertex and the position of
    /// the next successor to inspect, which reproduces exactly the visit order of the recursive
    /// formulation. `on_discover` is called when a vertex is marked and `on_finish` when its
    /// frame is popped.
    fn explore<D, F>(&self, start: VertexIndex, visited: &mut [bool], mut on_discover: D, mut on_finish: F)
        where D: FnMut(VertexIndex),
              F: FnMut(VertexIndex),
    {
        if visited[start.0] {
            return;
        }
        visited[start.0] = true;
        on_discover(start);
        let mut stack: Vec<(VertexIndex, usize)> = vec![(start, 0)];
        while let Some(frame) = stack.last_mut() {
            let (vertex, cursor) = *frame;
            match self.neighbors(vertex).get(cursor).copied() {
                Some(successor) => {
                    frame.1 += 1;
                    if !visited[successor.0] {
                        visited[successor.0] = true;
                        on_discover(successor);
                        stack.push((successor, 0));
                    }
                },
                None => {
                    stack.pop();
                    on_finish(vertex);
                },
            }
        }
    }
}

#[cfg(test)]
mod test_graph {
    use crate::core::graph::*;

    fn graph_from_edges(number_vertices: usize, edges: &[(usize, usize)]) -> DirectedGraph {
        let mut g = DirectedGraph::new(number_vertices);
        for (from, to) in edges.iter().copied() {
            g.add_edge(VertexIndex(from), VertexIndex(to));
        }
        g
    }

    fn indexes(vertices: &[VertexIndex]) -> Vec<usize> {
        vertices.iter().map(|v| v.0).collect()
    }

    #[test]
    fn new_create_graph_without_edges() {
        let g = DirectedGraph::new(4);
        assert_eq!(4, g.number_vertices());
        assert_eq!(0, g.number_edges());
        for v in g.vertices_iter() {
            assert!(g.neighbors(v).is_empty());
        }
    }

    #[test]
    fn add_edge_keeps_insertion_order() {
        let g = graph_from_edges(4, &[(0, 3), (0, 1), (0, 2)]);
        assert_eq!(vec![3, 1, 2], indexes(g.neighbors(VertexIndex(0))));
        assert_eq!(3, g.number_edges());
    }

    #[test]
    fn add_edge_keeps_parallel_edges() {
        let g = graph_from_edges(2, &[(0, 1), (0, 1)]);
        assert_eq!(vec![1, 1], indexes(g.neighbors(VertexIndex(0))));
    }

    #[test]
    fn neighbors_of_unknown_vertex_is_empty() {
        let g = graph_from_edges(2, &[(0, 1)]);
        assert!(g.neighbors(VertexIndex(1)).is_empty());
        assert!(g.neighbors(VertexIndex(10)).is_empty());
    }

    #[test]
    fn transpose_reverses_every_edge() {
        let g = graph_from_edges(3, &[(0, 1), (0, 2), (1, 2), (2, 0)]);
        let t = g.transpose();
        assert_eq!(3, t.number_vertices());
        assert_eq!(4, t.number_edges());
        assert_eq!(vec![2], indexes(t.neighbors(VertexIndex(0))));
        assert_eq!(vec![0], indexes(t.neighbors(VertexIndex(1))));
        assert_eq!(vec![0, 1], indexes(t.neighbors(VertexIndex(2))));
    }

    #[test]
    fn transpose_does_not_modify_the_graph() {
        let g = graph_from_edges(3, &[(0, 1), (1, 2)]);
        let copy = g.clone();
        let _ = g.transpose();
        assert_eq!(copy, g);
        assert_eq!(g, g.transpose().transpose());
    }

    #[test]
    fn dfs_visits_in_preorder() {
        // 0 -> 1 -> 3, 0 -> 2, 1 -> 2
        let g = graph_from_edges(5, &[(0, 1), (0, 2), (1, 3), (1, 2)]);
        let mut visited = vec![false; 5];
        let reached = g.dfs(VertexIndex(0), &mut visited);
        assert_eq!(vec![0, 1, 3, 2], indexes(&reached));
        assert_eq!(vec![true, true, true, true, false], visited);
    }

    #[test]
    fn dfs_does_not_revisit_marked_vertices() {
        let g = graph_from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        let mut visited = vec![false, false, true, false];
        let reached = g.dfs(VertexIndex(0), &mut visited);
        assert_eq!(vec![0, 1], indexes(&reached));
        assert!(g.dfs(VertexIndex(0), &mut visited).is_empty());
    }

    #[test]
    fn post_order_appends_after_successors() {
        let g = graph_from_edges(4, &[(0, 1), (0, 2), (1, 3), (3, 0)]);
        let mut visited = vec![false; 4];
        let mut order = vec![];
        g.post_order(VertexIndex(0), &mut visited, &mut order);
        assert_eq!(vec![3, 1, 2, 0], indexes(&order));
    }

    #[test]
    fn dfs_on_long_chain_does_not_overflow() {
        let n = 200_000;
        let mut g = DirectedGraph::new(n);
        for i in 0..(n - 1) {
            g.add_edge(VertexIndex(i), VertexIndex(i + 1));
        }
        let mut visited = vec![false; n];
        let mut order = vec![];
        g.post_order(VertexIndex(0), &mut visited, &mut order);
        assert_eq!(n, order.len());
        assert_eq!(VertexIndex(n - 1), order[0]);
        assert_eq!(VertexIndex(0), order[n - 1]);
    }
}
