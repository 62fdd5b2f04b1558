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

//! This module builds the implication graph of a 2-SAT formula. Each literal of the formula is a
//! vertex of the graph and each clause `a || b` is encoded by the two implications `!a => b` and
//! `!b => a`. The formula is unsatisfiable if and only if a literal and its opposite are in the same
//! strongly connected component of this graph.
//!
//! The vertices are assigned to the literals by iterating over the variables in increasing order:
//! for a formula with n variables, the literal `i` is the vertex `2(i - 1)` and the literal `-i` is
//! the vertex `2(i - 1) + 1`. This mapping is stored in a `LiteralIndexMap`, built once and never
//! modified afterwards.

use super::graph::{DirectedGraph, VertexIndex};
use super::literal::{Literal, VariableIndex};
use crate::common::ClausePolicy;
use crate::error::ConstructionError;

use log::{debug, warn};
use rustc_hash::FxHashMap;

/// Bijection between the literals `{+-1, ..., +-n}` and the vertices `[0, 2n)`
#[derive(Debug, Clone)]
pub struct LiteralIndexMap {
    /// Map each literal to its vertex
    forward: FxHashMap<Literal, VertexIndex>,
    /// Map each vertex to its literal
    reverse: Vec<Literal>,
}

impl LiteralIndexMap {

    pub fn new(number_variables: usize) -> Self {
        let mut forward: FxHashMap<Literal, VertexIndex> = FxHashMap::default();
        let mut reverse: Vec<Literal> = Vec::with_capacity(2 * number_variables);
        for variable in (0..number_variables).map(VariableIndex) {
            for polarity in [true, false] {
                let literal = Literal::from_variable(variable, polarity);
                forward.insert(literal, VertexIndex(reverse.len()));
                reverse.push(literal);
            }
        }
        Self { forward, reverse }
    }

    /// Returns the number of variables covered by the map
    pub fn number_variables(&self) -> usize {
        self.reverse.len() / 2
    }

    /// Returns the number of literals (hence vertices) in the map
    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }

    /// Returns the vertex of `literal`, if the literal is in the map
    pub fn vertex(&self, literal: Literal) -> Option<VertexIndex> {
        self.forward.get(&literal).copied()
    }

    /// Returns the literal represented by `vertex`
    pub fn literal(&self, vertex: VertexIndex) -> Literal {
        self.reverse[vertex.0]
    }

    /// Returns an iterator on the pairs (literal, vertex), by increasing vertex
    pub fn iter(&self) -> impl Iterator<Item = (Literal, VertexIndex)> + '_ {
        self.reverse.iter().copied().enumerate().map(|(i, literal)| (literal, VertexIndex(i)))
    }
}

/// The implication graph of a 2-SAT formula, together with the mapping between its vertices and
/// the literals of the formula.
#[derive(Debug, Clone)]
pub struct ImplicationGraph {
    graph: DirectedGraph,
    literals: LiteralIndexMap,
    /// The clauses encoded in the graph
    clauses: Vec<(Literal, Literal)>,
    /// Number of input clauses dropped because they do not have exactly two literals
    skipped_clauses: usize,
}

impl ImplicationGraph {

    pub fn graph(&self) -> &DirectedGraph {
        &self.graph
    }

    pub fn literals(&self) -> &LiteralIndexMap {
        &self.literals
    }

    /// Returns the number of variables of the formula
    pub fn number_variables(&self) -> usize {
        self.literals.number_variables()
    }

    /// Returns the binary clauses encoded in the graph
    pub fn clauses(&self) -> &[(Literal, Literal)] {
        &self.clauses
    }

    pub fn skipped_clauses(&self) -> usize {
        self.skipped_clauses
    }

    /// Returns true iff every clause of the graph is satisfied when each variable `i` takes the
    /// value `values[i]`
    pub fn is_satisfied_by(&self, values: &[bool]) -> bool {
        let value = |literal: Literal| values[literal.to_variable().0] == literal.is_positive();
        self.clauses.iter().all(|(a, b)| value(*a) || value(*b))
    }
}

/// Builds the implication graph of a formula with a given number of variables.
#[derive(Debug, Clone, Copy)]
pub struct ImplicationGraphBuilder {
    number_variables: usize,
    policy: ClausePolicy,
}

impl ImplicationGraphBuilder {

    /// Creates a builder for formulas over `variable_count` variables. Fails if `variable_count`
    /// is not positive.
    pub fn new(variable_count: isize) -> Result<Self, ConstructionError> {
        if variable_count <= 0 {
            return Err(ConstructionError::InvalidVariableCount(variable_count.to_string()));
        }
        Ok(Self {
            number_variables: variable_count.unsigned_abs(),
            policy: ClausePolicy::default(),
        })
    }

    /// Sets the policy applied to the clauses that do not have exactly two literals
    pub fn with_policy(mut self, policy: ClausePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn number_variables(&self) -> usize {
        self.number_variables
    }

    pub fn policy(&self) -> ClausePolicy {
        self.policy
    }

    /// Builds the implication graph of the given clauses. Every literal of every clause must be
    /// non-zero and at most the number of variables in absolute value. A clause `a || b` adds the
    /// edges `!a -> b` and `!b -> a`; the other clauses are handled according to the policy.
    pub fn build(&self, clauses: &[Vec<isize>]) -> Result<ImplicationGraph, ConstructionError> {
        let literals = LiteralIndexMap::new(self.number_variables);
        let mut graph = DirectedGraph::new(literals.len());
        let mut binary_clauses: Vec<(Literal, Literal)> = Vec::with_capacity(clauses.len());
        let mut skipped_clauses = 0;
        for (index, clause) in clauses.iter().enumerate() {
            let clause_literals = clause.iter().copied().map(|value| self.literal(value)).collect::<Result<Vec<Literal>, ConstructionError>>()?;
            if clause_literals.len() != 2 {
                match self.policy {
                    ClausePolicy::Skip => debug!("Clause {} has {} literals, it is ignored", index, clause.len()),
                    ClausePolicy::Warn => warn!("Clause {} has {} literals, it is ignored", index, clause.len()),
                    ClausePolicy::Fail => return Err(ConstructionError::MalformedClause { index, arity: clause.len() }),
                }
                skipped_clauses += 1;
                continue;
            }
            let (a, b) = (clause_literals[0], clause_literals[1]);
            graph.add_edge(self.vertex(&literals, a.opposite()), self.vertex(&literals, b));
            graph.add_edge(self.vertex(&literals, b.opposite()), self.vertex(&literals, a));
            binary_clauses.push((a, b));
        }
        debug!("Implication graph built with {} vertices, {} edges ({} clauses ignored)",
               graph.number_vertices(), graph.number_edges(), skipped_clauses);
        Ok(ImplicationGraph {
            graph,
            literals,
            clauses: binary_clauses,
            skipped_clauses,
        })
    }

    /// Returns the literal represented by `value`, checking it is in range
    fn literal(&self, value: isize) -> Result<Literal, ConstructionError> {
        match Literal::new(value) {
            Some(literal) if literal.magnitude() <= self.number_variables => Ok(literal),
            _ => Err(ConstructionError::LiteralOutOfRange { literal: value, variable_count: self.number_variables }),
        }
    }

    /// Returns the vertex of a literal already checked by `literal`
    fn vertex(&self, literals: &LiteralIndexMap, literal: Literal) -> VertexIndex {
        match literals.vertex(literal) {
            Some(vertex) => vertex,
            None => unreachable!("literal {} was checked against {} variables", literal, self.number_variables),
        }
    }
}


#[cfg(test)]
mod test_implication_builder {
    use crate::common::ClausePolicy;
    use crate::core::implication::*;
    use crate::error::ConstructionError;

    fn successors(g: &ImplicationGraph, literal: isize) -> Vec<isize> {
        let vertex = g.literals().vertex(Literal::new(literal).unwrap()).unwrap();
        g.graph().neighbors(vertex).iter().map(|v| g.literals().literal(*v).value()).collect()
    }

    #[test]
    fn invalid_variable_count() {
        assert_eq!(ConstructionError::InvalidVariableCount("0".to_string()), ImplicationGraphBuilder::new(0).unwrap_err());
        assert_eq!(ConstructionError::InvalidVariableCount("-2".to_string()), ImplicationGraphBuilder::new(-2).unwrap_err());
    }

    #[test]
    fn clause_adds_contrapositive_edges() {
        let g = ImplicationGraphBuilder::new(2).unwrap().build(&[vec![1, -2]]).unwrap();
        assert_eq!(4, g.graph().number_vertices());
        assert_eq!(2, g.graph().number_edges());
        // 1 || -2 gives -1 => -2 and 2 => 1
        assert_eq!(vec![-2], successors(&g, -1));
        assert_eq!(vec![1], successors(&g, 2));
        assert!(successors(&g, 1).is_empty());
        assert!(successors(&g, -2).is_empty());
    }

    #[test]
    fn edges_follow_clause_order() {
        let g = ImplicationGraphBuilder::new(3).unwrap().build(&[vec![1, 2], vec![1, 3]]).unwrap();
        assert_eq!(vec![2, 3], successors(&g, -1));
        assert_eq!(vec![1], successors(&g, -2));
        assert_eq!(vec![1], successors(&g, -3));
    }

    #[test]
    fn empty_formula_has_isolated_vertices() {
        let clauses: Vec<Vec<isize>> = vec![];
        let g = ImplicationGraphBuilder::new(3).unwrap().build(&clauses).unwrap();
        assert_eq!(6, g.graph().number_vertices());
        assert_eq!(0, g.graph().number_edges());
        assert!(g.clauses().is_empty());
    }

    #[test]
    fn literal_out_of_range() {
        let builder = ImplicationGraphBuilder::new(2).unwrap();
        assert_eq!(ConstructionError::LiteralOutOfRange { literal: 3, variable_count: 2 }, builder.build(&[vec![1, 3]]).unwrap_err());
        assert_eq!(ConstructionError::LiteralOutOfRange { literal: -3, variable_count: 2 }, builder.build(&[vec![-3, 1]]).unwrap_err());
        assert_eq!(ConstructionError::LiteralOutOfRange { literal: 0, variable_count: 2 }, builder.build(&[vec![0, 1]]).unwrap_err());
    }

    #[test]
    fn literal_out_of_range_in_skipped_clause() {
        let builder = ImplicationGraphBuilder::new(2).unwrap();
        let clauses = vec![vec![1, 2], vec![1, 2, 7]];
        assert!(builder.build(&clauses).is_err());
    }

    #[test]
    fn non_binary_clauses_are_skipped_by_default() {
        let clauses = vec![vec![1], vec![1, -2], vec![1, 2, 3], vec![]];
        let g = ImplicationGraphBuilder::new(3).unwrap().build(&clauses).unwrap();
        assert_eq!(3, g.skipped_clauses());
        assert_eq!(1, g.clauses().len());
        assert_eq!(2, g.graph().number_edges());
    }

    #[test]
    fn non_binary_clauses_with_warn_policy() {
        let clauses = vec![vec![1], vec![1, -2]];
        let g = ImplicationGraphBuilder::new(2).unwrap().with_policy(ClausePolicy::Warn).build(&clauses).unwrap();
        assert_eq!(1, g.skipped_clauses());
        assert_eq!(1, g.clauses().len());
    }

    #[test]
    fn non_binary_clauses_with_fail_policy() {
        let clauses = vec![vec![1, -2], vec![1, 2, 3]];
        let builder = ImplicationGraphBuilder::new(3).unwrap().with_policy(ClausePolicy::Fail);
        assert_eq!(ConstructionError::MalformedClause { index: 1, arity: 3 }, builder.build(&clauses).unwrap_err());
    }

    #[test]
    fn is_satisfied_by_checks_every_clause() {
        let g = ImplicationGraphBuilder::new(2).unwrap().build(&[vec![1, 2], vec![1, -2]]).unwrap();
        assert!(g.is_satisfied_by(&[true, false]));
        assert!(g.is_satisfied_by(&[true, true]));
        assert!(!g.is_satisfied_by(&[false, true]));
        assert!(!g.is_satisfied_by(&[false, false]));
    }
}
