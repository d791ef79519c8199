use log::{debug, trace};
use nalgebra::RealField;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::{round_to, Error, LabelScheme, Outcome, PivotStrategy, Solution, System};

/// Decimal places kept in reported values unless configured otherwise.
const DEFAULT_PRECISION: u32 = 3;

/// Beyond this many decimals an `f64` no longer carries the digits being kept.
const MAX_PRECISION: u32 = 15;

/// Settings for a solve: how rows are arranged, how unknowns are named and how values are
/// rounded.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solver {
    pivoting: PivotStrategy,
    labels: LabelScheme,
    precision: u32,
}

impl Default for Solver {
    fn default() -> Self {
        Solver {
            pivoting: PivotStrategy::default(),
            labels: LabelScheme::default(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pivoting(mut self, pivoting: PivotStrategy) -> Self {
        self.pivoting = pivoting;
        self
    }

    pub fn with_labels(mut self, labels: LabelScheme) -> Self {
        self.labels = labels;
        self
    }

    /// Number of decimal places values are rounded to, at most 15.
    pub fn with_precision(mut self, digits: u32) -> Self {
        self.precision = digits;
        self
    }

    pub fn pivoting(&self) -> PivotStrategy {
        self.pivoting
    }

    pub fn labels(&self) -> &LabelScheme {
        &self.labels
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Arranges the rows of `system` with the configured strategy.
    pub fn arrange<T: RealField + Copy>(&self, system: &mut System<T>) -> Vec<(usize, usize)> {
        system.arrange(self.pivoting)
    }

    /// Arranges the rows of `system`, then eliminates it.
    pub fn solve<T: RealField + Copy>(&self, mut system: System<T>) -> Result<Outcome<T>, Error> {
        let swaps = self.arrange(&mut system);
        debug!(
            "arranged {0}x{0} system with {1} row swaps",
            system.dim(),
            swaps.len()
        );
        self.eliminate(system)
    }

    /// Eliminates `system` as given, without arranging its rows.
    ///
    /// Labels and precision are checked before any elimination work is done. A system where every
    /// pivot is usable is [`Outcome::Solved`]; otherwise the skipped columns are reported in
    /// [`Outcome::Singular`] along with the values left in `b`.
    pub fn eliminate<T: RealField + Copy>(
        &self,
        mut system: System<T>,
    ) -> Result<Outcome<T>, Error> {
        if self.precision > MAX_PRECISION {
            return Err(Error::Precision {
                digits: self.precision,
            });
        }
        let labels = self.labels.labels(system.dim())?;

        let free_columns = system.reduce();
        trace!("reduced b = {}", system.rhs());

        let values = system.rhs().iter().map(|&v| round_to(v, self.precision));
        let solution = Solution::new(labels, values);

        if free_columns.is_empty() {
            Ok(Outcome::Solved(solution))
        } else {
            debug!("system is singular, free columns {:?}", free_columns);
            Ok(Outcome::Singular {
                free_columns,
                partial: solution,
            })
        }
    }
}
