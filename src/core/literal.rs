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

//! An implementation of a literal in Kosat. That is, a variable and a
//! polarity. This is represented by a non-zero signed integer: the absolute value is the
//! variable (starting at 1, as in the DIMACS format) and the sign is the polarity.

/// Abstraction used as a typesafe way of identifying a variable. Variables are indexed from 0,
/// so the literals `3` and `-3` are on `VariableIndex(2)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct VariableIndex(pub usize);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Literal(isize);

impl Literal {

    /// Returns the literal represented by `value`, or `None` if `value` is 0
    pub fn new(value: isize) -> Option<Self> {
        if value == 0 {
            None
        } else {
            Some(Literal(value))
        }
    }

    /// Returns the literal representing the variable with the given polarity
    pub fn from_variable(variable: VariableIndex, polarity: bool) -> Self {
        if polarity {
            Literal(variable.0 as isize + 1)
        } else {
            Literal(-(variable.0 as isize + 1))
        }
    }

    /// Returns the signed integer representation of the literal
    pub fn value(&self) -> isize {
        self.0
    }

    /// Returns true iff the literal has a positive polarity
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns the variable represented by the literal
    pub fn to_variable(&self) -> VariableIndex {
        VariableIndex(self.magnitude() - 1)
    }

    /// Returns the absolute value of the literal
    pub fn magnitude(&self) -> usize {
        self.0.unsigned_abs()
    }

    /// Returns the opposite of the current literal. That is, a literal representing the same
    /// variable but with opposite polarity
    pub fn opposite(&self) -> Literal {
        Literal(-self.0)
    }
}

impl std::fmt::Display for Literal {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
