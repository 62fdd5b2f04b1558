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

//! This module provides the 2-SAT solver. The solver computes the strongly connected components
//! of the implication graph of the formula with Kosaraju's algorithm. The formula is
//! unsatisfiable if and only if a literal and its opposite are in the same component.
//!
//! When the formula is satisfiable, a witness is extracted from the components according to the
//! `WitnessStrategy` of the solver:
//!     - `SmallestComponent` selects the component with the fewest literals (the first one found
//!       in topological order in case of ties) and outputs one bit per literal of this component,
//!       ordered by variable: 1 for a negative literal and 0 for a positive one. This only covers
//!       the variables of that component.
//!     - `Condensation` outputs one bit per variable of the formula. A variable is true iff the
//!       component of its positive literal comes after the component of its negative literal in
//!       the topological order of the condensation graph. This assignment satisfies every clause.

use std::time::Instant;

use log::debug;

use crate::common::{Verdict, WitnessStrategy};
use crate::core::implication::ImplicationGraph;
use crate::core::literal::{Literal, VariableIndex};
use crate::core::scc::{component_ranks, Component, SccFinder};
use crate::statistics::Statistics;

#[derive(Debug, Clone)]
pub struct SatSolver {
    /// The implication graph of the formula, never modified by the solver
    implication: ImplicationGraph,
    strategy: WitnessStrategy,
}

impl SatSolver {

    pub fn new(implication: ImplicationGraph) -> Self {
        Self {
            implication,
            strategy: WitnessStrategy::default(),
        }
    }

    /// Sets the strategy used to extract the witness of a satisfiable formula
    pub fn with_strategy(mut self, strategy: WitnessStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn implication_graph(&self) -> &ImplicationGraph {
        &self.implication
    }

    pub fn strategy(&self) -> WitnessStrategy {
        self.strategy
    }

    /// Returns the strongly connected components of the implication graph, in topological order,
    /// with each vertex translated back to its literal.
    pub fn literal_components(&self) -> Vec<Vec<Literal>> {
        let components = SccFinder::new(self.implication.graph()).components();
        self.translate(&components)
    }

    /// Returns true iff the formula is satisfiable
    pub fn satisfiable(&self) -> bool {
        self.solve().is_satisfiable()
    }

    /// Solves the formula and formats the verdict: `UNSATISFIABLE`, or `SATISFIABLE` followed by
    /// the witness bits on the next line.
    pub fn sat_solve(&self) -> String {
        self.solve().to_string()
    }

    /// Solves the formula. This never fails, every check is done when the graph is built.
    pub fn solve(&self) -> Verdict {
        let mut statistics = Statistics::<false>::default();
        self.solve_with(&mut statistics)
    }

    /// Solves the formula while collecting statistics
    pub fn solve_with<const B: bool>(&self, statistics: &mut Statistics<B>) -> Verdict {
        let start = Instant::now();
        let graph = self.implication.graph();
        statistics.formula(self.implication.number_variables(), self.implication.clauses().len(), self.implication.skipped_clauses());
        statistics.graph(graph.number_vertices(), graph.number_edges());

        let components = SccFinder::new(graph).components();
        for component in components.iter() {
            statistics.component(component.len());
        }
        let ranks = component_ranks(&components, graph.number_vertices());

        let verdict = match self.conflicting_variable(&ranks) {
            Some(variable) => {
                debug!("Variable {} and its negation are in the same component", variable.0 + 1);
                Verdict::Unsatisfiable
            },
            None => {
                let assignment_bits = match self.strategy {
                    WitnessStrategy::SmallestComponent => {
                        let literal_components = self.translate(&components);
                        Self::smallest_component_witness(&literal_components).iter().map(|literal| !literal.is_positive()).collect()
                    },
                    WitnessStrategy::Condensation => self.condensation_assignment(&ranks),
                };
                Verdict::Satisfiable { assignment_bits }
            },
        };
        statistics.solving_time(start.elapsed());
        verdict
    }

    /// Returns the literals of the component selected as witness by the `SmallestComponent`
    /// strategy, ordered by variable. Returns `None` if the formula is unsatisfiable.
    pub fn witness(&self) -> Option<Vec<Literal>> {
        let components = SccFinder::new(self.implication.graph()).components();
        let ranks = component_ranks(&components, self.implication.graph().number_vertices());
        if self.conflicting_variable(&ranks).is_some() {
            return None;
        }
        Some(Self::smallest_component_witness(&self.translate(&components)))
    }

    /// Returns the first variable whose two literals are in the same component, if any
    fn conflicting_variable(&self, ranks: &[usize]) -> Option<VariableIndex> {
        let literals = self.implication.literals();
        (0..self.implication.number_variables()).map(VariableIndex).find(|variable| {
            let positive = literals.vertex(Literal::from_variable(*variable, true));
            let negative = literals.vertex(Literal::from_variable(*variable, false));
            match (positive, negative) {
                (Some(p), Some(n)) => ranks[p.0] == ranks[n.0],
                _ => false,
            }
        })
    }

    /// Assigns each variable by comparing the topological rank of its two literals
    fn condensation_assignment(&self, ranks: &[usize]) -> Vec<bool> {
        let literals = self.implication.literals();
        (0..self.implication.number_variables()).map(VariableIndex).map(|variable| {
            let positive = literals.vertex(Literal::from_variable(variable, true));
            let negative = literals.vertex(Literal::from_variable(variable, false));
            match (positive, negative) {
                (Some(p), Some(n)) => ranks[p.0] > ranks[n.0],
                _ => false,
            }
        }).collect()
    }

    fn translate(&self, components: &[Component]) -> Vec<Vec<Literal>> {
        let literals = self.implication.literals();
        components.iter().map(|component| component.iter().map(|vertex| literals.literal(vertex)).collect()).collect()
    }

    /// The smallest component (first one in case of ties), with its literals sorted by variable.
    /// In a satisfiable formula a component never holds both literals of a variable, so the order
    /// is total.
    fn smallest_component_witness(components: &[Vec<Literal>]) -> Vec<Literal> {
        let mut witness = components.iter().min_by_key(|component| component.len()).cloned().unwrap_or_default();
        witness.sort_by_key(|literal| literal.magnitude());
        witness
    }
}

#[cfg(test)]
mod test_solver {
    use crate::common::*;
    use crate::core::implication::ImplicationGraphBuilder;
    use crate::core::literal::Literal;
    use crate::solver::SatSolver;
    use crate::statistics::Statistics;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn solver(n: isize, clauses: &[Vec<isize>]) -> SatSolver {
        SatSolver::new(ImplicationGraphBuilder::new(n).unwrap().build(clauses).unwrap())
    }

    fn random_clauses(rng: &mut StdRng, n: isize) -> Vec<Vec<isize>> {
        let number_clauses = rng.gen_range(0..=(3 * n as usize));
        (0..number_clauses).map(|_| {
            (0..2).map(|_| {
                let v = rng.gen_range(1..=n);
                if rng.gen_bool(0.5) { v } else { -v }
            }).collect()
        }).collect()
    }

    fn brute_force_satisfiable(solver: &SatSolver) -> bool {
        let n = solver.implication_graph().number_variables();
        (0..(1usize << n)).any(|mask| {
            let values: Vec<bool> = (0..n).map(|i| mask & (1 << i) != 0).collect();
            solver.implication_graph().is_satisfied_by(&values)
        })
    }

    #[test]
    fn forced_literal_and_negation_is_unsat() {
        let s = solver(1, &[vec![1, 1], vec![-1, -1]]);
        assert!(!s.satisfiable());
        assert_eq!(Verdict::Unsatisfiable, s.solve());
        assert_eq!("UNSATISFIABLE", s.sat_solve());
        assert!(s.witness().is_none());
    }

    #[test]
    fn satisfiable_with_first_variable_true() {
        let s = solver(2, &[vec![1, 2], vec![1, -2]]);
        assert!(s.satisfiable());
        assert_eq!(Verdict::Satisfiable { assignment_bits: vec![true] }, s.solve());
        assert_eq!(Some(vec![Literal::new(-1).unwrap()]), s.witness());
        assert_eq!("SATISFIABLE\n1", s.sat_solve());
    }

    #[test]
    fn satisfiable_with_first_variable_true_condensation() {
        let s = solver(2, &[vec![1, 2], vec![1, -2]]).with_strategy(WitnessStrategy::Condensation);
        match s.solve() {
            Verdict::Satisfiable { assignment_bits } => {
                assert_eq!(2, assignment_bits.len());
                assert!(assignment_bits[0]);
                assert!(s.implication_graph().is_satisfied_by(&assignment_bits));
            },
            Verdict::Unsatisfiable => panic!("The formula is satisfiable"),
        }
    }

    #[test]
    fn empty_formula_is_satisfiable() {
        let s = solver(3, &[]);
        let components = s.literal_components();
        assert_eq!(6, components.len());
        assert!(components.iter().all(|c| c.len() == 1));
        assert!(s.satisfiable());
        assert_eq!("SATISFIABLE\n1", s.sat_solve());
    }

    #[test]
    fn smallest_component_is_sorted_by_variable() {
        // 1 => 2 => 3 => 1 and the opposite cycle, the smallest components have 3 literals
        let s = solver(3, &[vec![-1, 2], vec![-2, 3], vec![-3, 1]]);
        let witness = s.witness().unwrap();
        assert_eq!(3, witness.len());
        let magnitudes: Vec<usize> = witness.iter().map(|l| l.magnitude()).collect();
        assert_eq!(vec![1, 2, 3], magnitudes);
    }

    #[test]
    fn no_component_holds_a_literal_and_its_opposite_when_sat() {
        let s = solver(3, &[vec![1, 2], vec![-2, 3], vec![-1, -3]]);
        assert!(s.satisfiable());
        for component in s.literal_components() {
            for literal in component.iter() {
                assert!(!component.contains(&literal.opposite()));
            }
        }
    }

    #[test]
    fn implication_chain_to_contradiction() {
        // x1 forced, x1 => x2 => x3 => !x1
        let s = solver(3, &[vec![1, 1], vec![-1, 2], vec![-2, 3], vec![-3, -1]]);
        assert!(!s.satisfiable());
    }

    #[test]
    fn verdict_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..300 {
            let n = rng.gen_range(1..=6);
            let clauses = random_clauses(&mut rng, n);
            let s = solver(n, &clauses);
            assert_eq!(brute_force_satisfiable(&s), s.satisfiable(), "clauses {:?}", clauses);
        }
    }

    #[test]
    fn condensation_witness_satisfies_the_formula() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..300 {
            let n = rng.gen_range(1..=8);
            let clauses = random_clauses(&mut rng, n);
            let s = solver(n, &clauses).with_strategy(WitnessStrategy::Condensation);
            if let Verdict::Satisfiable { assignment_bits } = s.solve() {
                assert_eq!(n as usize, assignment_bits.len());
                assert!(s.implication_graph().is_satisfied_by(&assignment_bits), "clauses {:?}", clauses);
            }
        }
    }

    #[test]
    fn solving_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let n = rng.gen_range(1..=10);
            let clauses = random_clauses(&mut rng, n);
            let first = solver(n, &clauses);
            let second = solver(n, &clauses);
            assert_eq!(first.solve(), second.solve());
            assert_eq!(first.solve(), first.solve());
            assert_eq!(first.literal_components(), second.literal_components());
        }
    }

    #[test]
    fn long_implication_chain() {
        let n: isize = 100_000;
        let clauses: Vec<Vec<isize>> = (1..n).map(|i| vec![-i, i + 1]).collect();
        let s = solver(n, &clauses).with_strategy(WitnessStrategy::Condensation);
        match s.solve() {
            Verdict::Satisfiable { assignment_bits } => assert!(s.implication_graph().is_satisfied_by(&assignment_bits)),
            Verdict::Unsatisfiable => panic!("An implication chain is satisfiable"),
        }
    }

    #[test]
    fn statistics_are_collected() {
        let s = solver(2, &[vec![1, 2], vec![1, -2], vec![1, 2, -1]]);
        let mut statistics = Statistics::<true>::default();
        let verdict = s.solve_with(&mut statistics);
        assert!(verdict.is_satisfiable());
        assert_eq!(4, statistics.number_components());
    }
}
