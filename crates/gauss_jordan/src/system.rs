use nalgebra::{DMatrix, DVector, RealField};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::{arrange_rows, gauss_jordan, Error, PivotStrategy};

/// An owned augmented system `[A | b]` with a square coefficient matrix.
///
/// The shape is checked once on construction; every row operation afterwards is applied to `A`
/// and `b` together so their row counts never diverge.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-serialize",
    serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))
)]
#[derive(Clone, Debug, PartialEq)]
pub struct System<T: RealField + Copy> {
    mat_a: DMatrix<T>,
    b: DVector<T>,
}

impl<T: RealField + Copy> System<T> {
    /// Builds a system from a coefficient matrix and right-hand side.
    pub fn new(mat_a: DMatrix<T>, b: DVector<T>) -> Result<Self, Error> {
        if mat_a.nrows() != mat_a.ncols() {
            return Err(Error::NotSquareMatrix {
                rows: mat_a.nrows(),
                cols: mat_a.ncols(),
            });
        }
        if mat_a.nrows() != b.nrows() {
            return Err(Error::RowCountMismatch {
                a_rows: mat_a.nrows(),
                b_rows: b.nrows(),
            });
        }
        Ok(System { mat_a, b })
    }

    /// Builds a system from `A` given as rows and `b` given as single-cell rows.
    ///
    /// Every row of `A` must have as many entries as there are rows, `b` must have the same
    /// number of rows as `A`, and each of its rows exactly one entry. The input is copied.
    pub fn from_rows<RA, RB>(a: &[RA], b: &[RB]) -> Result<Self, Error>
    where
        RA: AsRef<[T]>,
        RB: AsRef<[T]>,
    {
        let n = a.len();
        let a: Vec<&[T]> = a.iter().map(AsRef::as_ref).collect();
        let b: Vec<&[T]> = b.iter().map(AsRef::as_ref).collect();

        if let Some((row, r)) = a.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(Error::NotSquare {
                rows: n,
                row,
                len: r.len(),
            });
        }
        if b.len() != n {
            return Err(Error::RowCountMismatch {
                a_rows: n,
                b_rows: b.len(),
            });
        }
        if let Some((row, r)) = b.iter().enumerate().find(|(_, r)| r.len() != 1) {
            return Err(Error::NotAColumn { row, len: r.len() });
        }

        Ok(System {
            mat_a: DMatrix::from_fn(n, n, |i, j| a[i][j]),
            b: DVector::from_fn(n, |i, _| b[i][0]),
        })
    }

    /// Number of equations, which is also the number of unknowns.
    pub fn dim(&self) -> usize {
        self.b.nrows()
    }

    pub fn coefficients(&self) -> &DMatrix<T> {
        &self.mat_a
    }

    pub fn rhs(&self) -> &DVector<T> {
        &self.b
    }

    pub fn into_parts(self) -> (DMatrix<T>, DVector<T>) {
        (self.mat_a, self.b)
    }

    /// `A` as rows and `b` as single-cell rows.
    pub fn to_rows(&self) -> (Vec<Vec<T>>, Vec<Vec<T>>) {
        let a = self
            .mat_a
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect();
        let b = self.b.iter().map(|&v| vec![v]).collect();
        (a, b)
    }

    /// Swaps rows to move non-zero entries onto the diagonal. See [`arrange_rows`].
    pub fn arrange(&mut self, strategy: PivotStrategy) -> Vec<(usize, usize)> {
        arrange_rows(&mut self.mat_a, &mut self.b, strategy)
    }

    /// Runs Gauss-Jordan elimination in place and returns the skipped pivot columns. See
    /// [`gauss_jordan`].
    pub fn reduce(&mut self) -> Vec<usize> {
        gauss_jordan(&mut self.mat_a, &mut self.b)
    }
}
