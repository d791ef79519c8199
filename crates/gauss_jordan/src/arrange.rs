//! Row arrangement ahead of elimination.
//!
use log::trace;
use nalgebra::{Dim, Matrix, RealField, StorageMut, U1};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// How rows are swapped onto the diagonal before elimination.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PivotStrategy {
    /// Only a zero diagonal entry triggers a swap, with the first row below holding a non-zero
    /// value in that column. A matrix without zero diagonal entries is left untouched.
    #[default]
    FirstNonZero,
    /// Swap in the row below with the strictly largest magnitude in the column whenever it beats
    /// the current diagonal entry. May reorder a matrix that has no zero diagonal entries.
    LargestMagnitude,
    /// Leave the rows as given.
    Disabled,
}

/// Swaps whole rows of `mat_a`, and the matching entries of `b`, so that wherever possible no
/// diagonal entry is zero.
///
/// Diagonal positions are visited in order. Only rows below the current position are considered
/// as candidates and at most one swap is made per position; columns are never permuted. When no
/// candidate exists the zero stays on the diagonal, which is not an error: the column is left for
/// the eliminator to report as free.
///
/// Returns the swaps performed as `(position, row)` pairs, in the order they were applied.
pub fn arrange_rows<T, R, C, SA, SB>(
    mat_a: &mut Matrix<T, R, C, SA>,
    b: &mut Matrix<T, R, U1, SB>,
    strategy: PivotStrategy,
) -> Vec<(usize, usize)>
where
    T: RealField + Copy,
    R: Dim,
    C: Dim,
    SA: StorageMut<T, R, C>,
    SB: StorageMut<T, R, U1>,
{
    assert_eq!(
        mat_a.nrows(),
        b.nrows(),
        "A and b must have the same number of rows"
    );

    let m = mat_a.nrows();
    let n = m.min(mat_a.ncols());
    let mut swaps = Vec::new();

    for i in 0..n {
        let candidate = match strategy {
            PivotStrategy::Disabled => None,
            PivotStrategy::FirstNonZero => {
                if mat_a[(i, i)].is_zero() {
                    ((i + 1)..m).find(|&k| !mat_a[(k, i)].is_zero())
                } else {
                    None
                }
            }
            PivotStrategy::LargestMagnitude => {
                let mut l = i;
                for k in (i + 1)..m {
                    if mat_a[(k, i)].abs() > mat_a[(l, i)].abs() {
                        l = k;
                    }
                }
                (l != i).then_some(l)
            }
        };

        if let Some(k) = candidate {
            trace!("arrange: swap rows {} and {} for pivot column {}", i, k, i);
            mat_a.swap_rows(i, k);
            b.swap_rows(i, k);
            swaps.push((i, k));
        }
    }

    if !swaps.is_empty() {
        trace!("arranged A ={}b ={}", mat_a, b);
    }

    swaps
}
