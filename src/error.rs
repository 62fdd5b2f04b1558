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

use thiserror::Error;

use crate::parsers::cnf::DimacsParseError;

pub type KosatResult<T> = Result<T, KosatError>;

/// Errors raised while building the implication graph of a formula. Once a `SatSolver` is built,
/// solving can not fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("the number of variables must be a positive integer, got '{0}'")]
    InvalidVariableCount(String),

    #[error("literal {literal} is out of range, it must be non-zero and at most {variable_count} in absolute value")]
    LiteralOutOfRange { literal: isize, variable_count: usize },

    /// Only raised when the clause policy asks to reject the clauses that do not have exactly two
    /// literals.
    #[error("clause {index} has {arity} literals, a 2-SAT clause must have exactly 2")]
    MalformedClause { index: usize, arity: usize },
}

#[derive(Debug, Error)]
pub enum KosatError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The dimacs file was invalid, more details: {0}")]
    InvalidDimacs(#[from] DimacsParseError),
    #[error("The formula is not a valid 2-SAT instance, more details: {0}")]
    InvalidInstance(#[from] ConstructionError),
}
