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

use clap::Parser;

use std::path::PathBuf;
use crate::{ClausePolicy, WitnessStrategy};

#[derive(Debug, Parser)]
#[clap(name="Kosat", version, author, about)]
pub struct Args {
    /// The input file, in DIMACS CNF format
    #[clap(short, long, value_parser)]
    input: PathBuf,
    /// What to do with the clauses that do not have exactly two literals
    #[clap(short, long, value_enum, default_value_t=ClausePolicy::Skip)]
    policy: ClausePolicy,
    /// How to extract the assignment of a satisfiable formula
    #[clap(short, long, value_enum, default_value_t=WitnessStrategy::SmallestComponent)]
    witness: WitnessStrategy,
    /// Collect stats during the solving
    #[clap(long, action)]
    statistics: bool,
    /// Print debug information
    #[clap(short, long, action)]
    verbose: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            input: PathBuf::default(),
            policy: ClausePolicy::Skip,
            witness: WitnessStrategy::SmallestComponent,
            statistics: false,
            verbose: false,
        }
    }
}

impl Args {

    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            ..Default::default()
        }
    }

    pub fn with_policy(mut self, policy: ClausePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_witness(mut self, witness: WitnessStrategy) -> Self {
        self.witness = witness;
        self
    }

    pub fn with_statistics(mut self, statistics: bool) -> Self {
        self.statistics = statistics;
        self
    }

    pub fn input(&self) -> &PathBuf {
        &self.input
    }

    pub fn policy(&self) -> ClausePolicy {
        self.policy
    }

    pub fn witness(&self) -> WitnessStrategy {
        self.witness
    }

    pub fn statistics(&self) -> bool {
        self.statistics
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
