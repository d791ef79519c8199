use std::fmt;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// One resolved unknown: its label and its rounded value.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SolutionEntry<T> {
    pub label: String,
    pub value: T,
}

impl<T: fmt::Display> fmt::Display for SolutionEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "solution for {} = {}", self.label, self.value)
    }
}

/// The values read off the right-hand side after elimination, one entry per row in row order.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<T> {
    entries: Vec<SolutionEntry<T>>,
}

impl<T: Copy> Solution<T> {
    pub(crate) fn new(labels: Vec<String>, values: impl IntoIterator<Item = T>) -> Self {
        let entries = labels
            .into_iter()
            .zip(values)
            .map(|(label, value)| SolutionEntry { label, value })
            .collect();
        Solution { entries }
    }

    pub fn entries(&self) -> &[SolutionEntry<T>] {
        &self.entries
    }

    /// The values alone, in row order.
    pub fn values(&self) -> Vec<T> {
        self.entries.iter().map(|e| e.value).collect()
    }

    /// Looks up the value of the unknown called `label`.
    pub fn get(&self, label: &str) -> Option<T> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(label, value)` pairs, in row order.
    pub fn into_pairs(self) -> Vec<(String, T)> {
        self.entries
            .into_iter()
            .map(|e| (e.label, e.value))
            .collect()
    }
}

impl<T: fmt::Display> fmt::Display for Solution<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Result of eliminating a well-formed system.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T> {
    /// No pivot was exactly zero, so every pivot column was reduced.
    Solved(Solution<T>),
    /// Some pivot columns had an exactly zero pivot and were skipped. `partial` holds whatever
    /// the right-hand side contained after elimination; rows tied to the skipped columns are not
    /// solutions of the system.
    Singular {
        free_columns: Vec<usize>,
        partial: Solution<T>,
    },
}

impl<T> Outcome<T> {
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }

    /// The values read off `b`, whether or not the system was fully reduced.
    pub fn solution(&self) -> &Solution<T> {
        match self {
            Outcome::Solved(solution) => solution,
            Outcome::Singular { partial, .. } => partial,
        }
    }

    /// Returns the unique solution, or [`Error::Singular`] naming the skipped columns.
    pub fn into_solution(self) -> Result<Solution<T>, Error> {
        match self {
            Outcome::Solved(solution) => Ok(solution),
            Outcome::Singular { free_columns, .. } => Err(Error::Singular {
                columns: free_columns,
            }),
        }
    }
}
