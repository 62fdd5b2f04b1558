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

//! This module provides the detection of the strongly connected components of a `DirectedGraph`
//! with Kosaraju's algorithm. Two vertices u and v are in the same component if and only if v is
//! reachable from u and u is reachable from v.
//!
//! The algorithm works in three passes:
//!     1. A depth-first search over the whole graph (starting vertices taken by increasing index)
//!        stacks each vertex once all its successors are processed. The top of the stack is the
//!        vertex that finished last.
//!     2. The graph is transposed.
//!     3. The vertices are popped from the stack. Each vertex not yet visited is the root of a
//!        depth-first search in the transposed graph, and the vertices reached by this search form
//!        a component.
//!
//! The components are returned in the order in which their root is popped. This is a
//! topological order of the condensation of the graph: if there is an edge from a component A to
//! a component B in the original graph, then A is returned before B.
//!
//! The finder does not keep any state between two calls. Each call allocates its own visited
//! marks and stack, and returns the components as a value.

use super::graph::{DirectedGraph, VertexIndex};
use log::debug;

/// A strongly connected component. The vertices are stored in the order in which they were
/// reached by the search that discovered the component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    vertices: Vec<VertexIndex>,
}

impl Component {

    pub fn new(vertices: Vec<VertexIndex>) -> Self {
        Self { vertices }
    }

    /// Returns the vertices of the component
    pub fn vertices(&self) -> &[VertexIndex] {
        &self.vertices
    }

    /// Returns an iterator on the vertices of the component
    pub fn iter(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        self.vertices.iter().copied()
    }

    /// Returns the number of vertices in the component
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true iff `vertex` is in the component
    pub fn contains(&self, vertex: VertexIndex) -> bool {
        self.vertices.contains(&vertex)
    }
}

/// Computes the strongly connected components of a graph using Kosaraju's algorithm.
#[derive(Debug, Clone, Copy)]
pub struct SccFinder<'a> {
    graph: &'a DirectedGraph,
}

impl<'a> SccFinder<'a> {

    pub fn new(graph: &'a DirectedGraph) -> Self {
        Self { graph }
    }

    /// Returns the vertices of the graph by increasing finishing time of a depth-first search
    /// started from every unvisited vertex, in increasing order of index.
    pub fn finishing_order(&self) -> Vec<VertexIndex> {
        let mut visited = vec![false; self.graph.number_vertices()];
        let mut order: Vec<VertexIndex> = Vec::with_capacity(self.graph.number_vertices());
        for vertex in self.graph.vertices_iter() {
            if !visited[vertex.0] {
                self.graph.post_order(vertex, &mut visited, &mut order);
            }
        }
        order
    }

    /// Returns the strongly connected components of the graph, in topological order of the
    /// condensation graph. Every vertex of the graph is in exactly one component.
    pub fn components(&self) -> Vec<Component> {
        let mut stack = self.finishing_order();
        let transposed = self.graph.transpose();
        let mut visited = vec![false; self.graph.number_vertices()];
        let mut components: Vec<Component> = vec![];
        while let Some(vertex) = stack.pop() {
            if !visited[vertex.0] {
                components.push(Component::new(transposed.dfs(vertex, &mut visited)));
            }
        }
        debug!("{} strongly connected components found in a graph with {} vertices and {} edges",
               components.len(), self.graph.number_vertices(), self.graph.number_edges());
        components
    }
}

/// Returns, for each vertex, the position of its component in `components`.
pub fn component_ranks(components: &[Component], number_vertices: usize) -> Vec<usize> {
    let mut ranks = vec![0; number_vertices];
    for (rank, component) in components.iter().enumerate() {
        for vertex in component.iter() {
            ranks[vertex.0] = rank;
        }
    }
    ranks
}
