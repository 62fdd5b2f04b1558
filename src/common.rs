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

use clap::ValueEnum;

/// What to do with the clauses that do not have exactly two literals when building the
/// implication graph.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, ValueEnum)]
pub enum ClausePolicy {
    /// Drop the clause, only reported at the debug level
    #[default]
    Skip,
    /// Drop the clause and report it as a warning
    Warn,
    /// Reject the formula
    Fail,
}

/// How the assignment is extracted from the strongly connected components of a satisfiable
/// formula.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, ValueEnum)]
pub enum WitnessStrategy {
    /// One bit per literal of the smallest component, ordered by variable. A negative literal
    /// gives a 1 and a positive literal a 0. This does not necessarily cover every variable.
    #[default]
    SmallestComponent,
    /// One bit per variable, 1 meaning true. A variable is true iff the component of its positive
    /// literal comes after the component of its negative literal in topological order.
    Condensation,
}

impl std::fmt::Display for ClausePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClausePolicy::Skip => write!(f, "skip"),
            ClausePolicy::Warn => write!(f, "warn"),
            ClausePolicy::Fail => write!(f, "fail"),
        }
    }
}

impl std::fmt::Display for WitnessStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WitnessStrategy::SmallestComponent => write!(f, "smallest-component"),
            WitnessStrategy::Condensation => write!(f, "condensation"),
        }
    }
}

/// The outcome of solving a 2-SAT formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Satisfiable {
        /// The witness bits, in the order given by the `WitnessStrategy`
        assignment_bits: Vec<bool>,
    },
    Unsatisfiable,
}

impl Verdict {

    pub fn is_satisfiable(&self) -> bool {
        matches!(self, Verdict::Satisfiable { .. })
    }

    /// Returns the witness bits, if the formula is satisfiable
    pub fn assignment_bits(&self) -> Option<&[bool]> {
        match self {
            Verdict::Satisfiable { assignment_bits } => Some(assignment_bits),
            Verdict::Unsatisfiable => None,
        }
    }

    pub fn print(&self) {
        println!("{}", self);
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Verdict::Satisfiable { assignment_bits } => {
                let bits = assignment_bits.iter().map(|b| if *b { "1" } else { "0" }).collect::<Vec<&str>>().join(" ");
                write!(f, "SATISFIABLE\n{}", bits)
            },
            Verdict::Unsatisfiable => write!(f, "UNSATISFIABLE"),
        }
    }
}
