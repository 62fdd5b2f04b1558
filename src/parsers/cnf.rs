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

//! This module provides a parser for the DIMACS CNF format. An example of valid file is given
//! next
//!
//! c This line is a comment
//! c We define a problem in cnf form with 3 variables and 3 clauses
//! p cnf 3 3
//! c Each clause is a list of non-zero literals terminated by 0
//! 1 -2 0
//! 2 3 0
//! -1 -3 0
//!
//! A clause can span several lines and several clauses can be on the same line. A line starting
//! with `%` ends the clauses (as in the SATLIB benchmarks).
//! The parser does not check that the clauses have two literals nor that the literals are in the
//! range declared by the header; this is done when the implication graph is built.

use log::warn;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DimacsParseError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing dimacs header")]
    MissingHeader,

    #[error("multiple dimacs headers found")]
    DuplicateHeader,

    #[error("'{0}' is an invalid header, expected 'p cnf <variables> <clauses>'")]
    InvalidHeader(String),

    #[error("'{0}' is an invalid number of variables")]
    InvalidVariableCount(String),

    #[error("'{literal}' is an invalid DIMACS literal (line {line})")]
    InvalidLiteral { literal: String, line: usize },

    #[error("the last clause in the source is not terminated with a '0'")]
    UnterminatedClause,
}

/// The content of a DIMACS CNF file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CnfFormula {
    /// Number of variables declared in the header
    pub variable_count: isize,
    /// Number of clauses declared in the header
    pub declared_clauses: usize,
    /// The clauses, without their terminating 0
    pub clauses: Vec<Vec<isize>>,
}

/// Reads the DIMACS CNF file at `filepath`
pub fn formula_from_file(filepath: &Path) -> Result<CnfFormula, DimacsParseError> {
    let file = File::open(filepath)?;
    parse_cnf(file)
}

/// Parses a formula in DIMACS CNF format
pub fn parse_cnf(source: impl Read) -> Result<CnfFormula, DimacsParseError> {
    let reader = BufReader::new(source);
    let mut header: Option<(isize, usize)> = None;
    let mut clauses: Vec<Vec<isize>> = vec![];
    let mut clause: Vec<isize> = vec![];
    for (line_count, l) in reader.lines().enumerate() {
        let line = l?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        if line.starts_with('%') {
            break;
        }
        if line.starts_with('p') {
            if header.is_some() {
                return Err(DimacsParseError::DuplicateHeader);
            }
            header = Some(parse_header(line)?);
            continue;
        }
        if header.is_none() {
            return Err(DimacsParseError::MissingHeader);
        }
        for token in line.split_whitespace() {
            let literal = token.parse::<isize>().map_err(|_| DimacsParseError::InvalidLiteral {
                literal: token.to_string(),
                line: line_count + 1,
            })?;
            if literal == 0 {
                clauses.push(std::mem::take(&mut clause));
            } else {
                clause.push(literal);
            }
        }
    }
    let (variable_count, declared_clauses) = header.ok_or(DimacsParseError::MissingHeader)?;
    if !clause.is_empty() {
        return Err(DimacsParseError::UnterminatedClause);
    }
    if declared_clauses != clauses.len() {
        warn!("The header declares {} clauses but {} were parsed", declared_clauses, clauses.len());
    }
    Ok(CnfFormula {
        variable_count,
        declared_clauses,
        clauses,
    })
}

fn parse_header(line: &str) -> Result<(isize, usize), DimacsParseError> {
    let invalid = || DimacsParseError::InvalidHeader(line.to_string());
    let mut components = line.split_whitespace();
    if components.next() != Some("p") || components.next() != Some("cnf") {
        return Err(invalid());
    }
    let variables = components.next().ok_or_else(invalid)?;
    let variable_count = variables.parse::<isize>().map_err(|_| DimacsParseError::InvalidVariableCount(variables.to_string()))?;
    let declared_clauses = components.next().and_then(|c| c.parse::<usize>().ok()).ok_or_else(invalid)?;
    if components.next().is_some() {
        return Err(invalid());
    }
    Ok((variable_count, declared_clauses))
}
