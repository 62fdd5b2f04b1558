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

use std::fmt;
use std::time::Duration;

/// Implements a bunch of statistics that are collected while solving a formula
#[derive(Default)]
pub struct Statistics<const B: bool> {
    number_variables: usize,
    number_clauses: usize,
    skipped_clauses: usize,
    number_vertices: usize,
    number_edges: usize,
    number_components: usize,
    largest_component: usize,
    solving_time: Duration,
    peak_memory: f32,
}

impl<const B: bool> Statistics<B> {
    pub fn formula(&mut self, number_variables: usize, number_clauses: usize, skipped_clauses: usize) {
        if B {
            self.number_variables = number_variables;
            self.number_clauses = number_clauses;
            self.skipped_clauses = skipped_clauses;
        }
    }

    pub fn graph(&mut self, number_vertices: usize, number_edges: usize) {
        if B {
            self.number_vertices = number_vertices;
            self.number_edges = number_edges;
        }
    }

    pub fn component(&mut self, size: usize) {
        if B {
            self.number_components += 1;
            self.largest_component = self.largest_component.max(size);
        }
    }

    pub fn solving_time(&mut self, duration: Duration) {
        if B {
            self.solving_time = duration;
        }
    }

    pub fn peak_memory(&mut self, peak_memory: f32) {
        if B {
            self.peak_memory = peak_memory;
        }
    }

    pub fn number_components(&self) -> usize {
        self.number_components
    }

    pub fn print(&self) {
        if B {
            println!("{}", self);
        }
    }
}

impl<const B: bool> fmt::Display for Statistics<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if B {
            writeln!(f, "Statistics on the solving:")?;
            writeln!(f, "\tNumber of variables: {}", self.number_variables)?;
            writeln!(f, "\tNumber of clauses: {} ({} ignored)", self.number_clauses, self.skipped_clauses)?;
            writeln!(f, "\tImplication graph: {} vertices, {} edges", self.number_vertices, self.number_edges)?;
            writeln!(f, "\tNumber of strongly connected components: {} (largest has {} vertices)", self.number_components, self.largest_component)?;
            writeln!(f, "\tTime taken for Kosaraju's algorithm: {:.6} seconds", self.solving_time.as_secs_f64())?;
            write!(f, "\tPeak memory usage: {:.3} Mb", self.peak_memory)
        } else {
            write!(f, "")
        }
    }
}

#[cfg(test)]
mod test_statistics {
    use crate::statistics::Statistics;

    #[test]
    fn quiet_statistics_do_not_record() {
        let mut stat = Statistics::<false>::default();
        stat.component(3);
        assert_eq!(0, stat.number_components());
        assert_eq!("", format!("{}", stat));
    }

    #[test]
    fn statistics_record_components() {
        let mut stat = Statistics::<true>::default();
        stat.component(3);
        stat.component(1);
        assert_eq!(2, stat.number_components());
        assert!(format!("{}", stat).contains("components: 2 (largest has 3 vertices)"));
    }
}
