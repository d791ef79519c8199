//! Solves square linear systems `A x = b` by Gauss-Jordan elimination.
//!
//! A solve is two passes over an augmented system `[A | b]`:
//!
//! 1. [`arrange`] swaps whole rows so that, wherever possible, no diagonal entry is zero.
//! 2. [`solve`] reduces the system to reduced row-echelon form one pivot column at a time,
//!    eliminating above and below each pivot, and reads the unknowns off `b`.
//!
//! [`Solver`] bundles both passes with a configurable pivot strategy, label scheme and rounding
//! precision.
//!
//! ```
//! use gauss_jordan::{solve, Outcome};
//!
//! let outcome = solve(&[vec![1.0, 2.0], vec![3.0, 4.0]], &[vec![3.0], vec![2.0]]).unwrap();
//! let Outcome::Solved(solution) = outcome else { panic!() };
//! assert_eq!(solution.values(), vec![-4.0, 3.5]);
//! ```
use nalgebra::RealField;

mod arrange;
mod eliminate;
mod error;
mod labels;
mod solution;
mod solver;
mod system;

pub use arrange::{arrange_rows, PivotStrategy};
pub use eliminate::{gauss_jordan, round_to};
pub use error::Error;
pub use labels::LabelScheme;
pub use solution::{Outcome, Solution, SolutionEntry};
pub use solver::Solver;
pub use system::System;

/// Arranges the rows of `a` (and `b` in lockstep) so that zero diagonal entries are replaced by
/// the first row below holding a non-zero value in that column.
///
/// The inputs are validated and copied; the arranged system is returned as new rows.
pub fn arrange<T, RA, RB>(a: &[RA], b: &[RB]) -> Result<(Vec<Vec<T>>, Vec<Vec<T>>), Error>
where
    T: RealField + Copy,
    RA: AsRef<[T]>,
    RB: AsRef<[T]>,
{
    let mut system = System::from_rows(a, b)?;
    system.arrange(PivotStrategy::FirstNonZero);
    Ok(system.to_rows())
}

/// Runs Gauss-Jordan elimination on `a` and `b` as given, without arranging rows first.
///
/// Unknowns are labelled `x`, `y`, `z`, ... and rounded to three decimals. Use [`Solver`] to
/// arrange first or to change labels and precision.
pub fn solve<T, RA, RB>(a: &[RA], b: &[RB]) -> Result<Outcome<T>, Error>
where
    T: RealField + Copy,
    RA: AsRef<[T]>,
    RB: AsRef<[T]>,
{
    Solver::default().eliminate(System::from_rows(a, b)?)
}
