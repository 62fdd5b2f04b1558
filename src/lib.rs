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

//! Kosat decides the satisfiability of 2-SAT formulas. The formula is reduced to its implication
//! graph, whose strongly connected components are computed with Kosaraju's algorithm. The formula
//! is unsatisfiable if and only if a literal and its negation are in the same component.
//!
//! The crate can be used as a library, through `build` and `solve`, or from the command line on
//! DIMACS CNF files.

// Re-export the modules
pub mod common;
pub mod core;
pub mod error;
pub mod parsers;
pub mod solver;
pub mod statistics;
pub mod args;

use log::info;

use args::*;
use crate::core::implication::ImplicationGraphBuilder;
use parsers::formula_from_file;
use statistics::Statistics;

pub use common::*;
pub use error::{ConstructionError, KosatError, KosatResult};
pub use solver::SatSolver;

use peak_alloc::PeakAlloc;
#[global_allocator]
pub static PEAK_ALLOC: PeakAlloc = PeakAlloc;

/// Builds a solver for the formula over `variable_count` variables made of the given clauses.
/// The clauses that do not have exactly two literals are ignored.
pub fn build(variable_count: isize, clauses: &[Vec<isize>]) -> Result<SatSolver, ConstructionError> {
    build_with(variable_count, clauses, ClausePolicy::default())
}

/// Same as `build`, with the given policy for the clauses that do not have exactly two literals
pub fn build_with(variable_count: isize, clauses: &[Vec<isize>], policy: ClausePolicy) -> Result<SatSolver, ConstructionError> {
    let graph = ImplicationGraphBuilder::new(variable_count)?.with_policy(policy).build(clauses)?;
    Ok(SatSolver::new(graph))
}

/// Solves the formula of the solver
pub fn solve(solver: &SatSolver) -> Verdict {
    solver.solve()
}

/// Reads the DIMACS CNF file given in the arguments and solves it
pub fn solve_file(args: &Args) -> KosatResult<Verdict> {
    let formula = formula_from_file(args.input())?;
    info!("Formula read with {} variables and {} clauses", formula.variable_count, formula.clauses.len());
    let solver = build_with(formula.variable_count, &formula.clauses, args.policy())?.with_strategy(args.witness());
    if args.statistics() {
        let mut statistics = Statistics::<true>::default();
        let verdict = solver.solve_with(&mut statistics);
        statistics.peak_memory(PEAK_ALLOC.peak_usage_as_mb());
        statistics.print();
        Ok(verdict)
    } else {
        Ok(solver.solve())
    }
}
