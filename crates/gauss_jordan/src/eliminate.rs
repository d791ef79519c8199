//! Gauss-Jordan elimination of an augmented system `[A | b]`.
//!
use log::{trace, warn};
use nalgebra::{Dim, Matrix, RealField, StorageMut, U1};

/// Reduces the augmented system `[A | b]` towards reduced row-echelon form, in place.
///
/// Each pivot column `i` is handled in a single step: row `i` is divided by the pivot `A[i, i]`
/// from column `i` onward, and then a multiple of it is subtracted from every other row, above
/// and below, so that column `i` is zero everywhere except on the diagonal. For a system with a
/// unique solution `A` ends up as the identity and `b` holds the solution.
///
/// A pivot that is exactly zero is never divided. The step is skipped, leaving every row as it
/// is, and the column index is returned in the list of skipped columns. Rows are not searched for
/// a replacement pivot here; see [`crate::arrange_rows`].
///
/// The number of pivot steps is the number of rows of `b`, as `A` is expected to be square.
pub fn gauss_jordan<T, R, C, SA, SB>(
    mat_a: &mut Matrix<T, R, C, SA>,
    b: &mut Matrix<T, R, U1, SB>,
) -> Vec<usize>
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
    assert!(
        mat_a.ncols() >= mat_a.nrows(),
        "A must have at least as many columns as rows"
    );

    let m = b.nrows();
    let n = mat_a.ncols();
    let mut skipped = Vec::new();

    for i in 0..m {
        let m1 = mat_a[(i, i)];
        if m1.is_zero() {
            warn!("No usable pivot in column {}, leaving it free", i);
            skipped.push(i);
            continue;
        }

        // scale row i so that a(i,i) = 1
        for k in i..n {
            mat_a[(i, k)] /= m1;
        }
        b[i] /= m1;

        // row_j = row_j - a(j,i) * row_i, for every j != i
        for j in (0..m).filter(|&j| j != i) {
            let m2 = mat_a[(j, i)];
            if m2.is_zero() {
                continue;
            }
            for k in i..n {
                let a_ik = mat_a[(i, k)];
                mat_a[(j, k)] -= m2 * a_ik;
            }
            let b_i = b[i];
            b[j] -= m2 * b_i;
        }

        trace!("pivot {}: A ={}b ={}", i, mat_a, b);
    }

    skipped
}

/// Rounds `value` to `digits` decimal places, with halfway cases rounded away from zero.
///
/// `0.0625` rounds to `0.063` and `-0.0625` to `-0.063` at three digits. Values too large to
/// carry a fraction at that precision are returned unchanged.
pub fn round_to<T: RealField + Copy>(value: T, digits: u32) -> T {
    let scale = nalgebra::convert::<f64, T>(10f64.powi(digits as i32));
    let scaled = value * scale;
    // from 1 / epsilon upwards every representable value is already an integer
    if !scaled.is_finite() || scaled.abs() >= T::default_epsilon().recip() {
        return value;
    }
    scaled.round() / scale
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{dmatrix, dvector, matrix, vector, Matrix3, Vector3};

    use super::*;

    #[test]
    fn test_reduces_to_identity() {
        let mut mat_a = matrix![
            1.0, 2.0;
            3.0, 4.0;
        ];
        let mut b = vector![3.0, 2.0];
        let skipped = gauss_jordan(&mut mat_a, &mut b);

        assert!(skipped.is_empty());
        assert_eq!(mat_a, matrix![1.0, 0.0; 0.0, 1.0]);
        assert_eq!(b, vector![-4.0, 3.5]);
    }

    #[test]
    fn test_diagonal() {
        let mut mat_a = Matrix3::from_diagonal_element(2.0);
        let mut b = vector![4.0, 6.0, 8.0];
        assert!(gauss_jordan(&mut mat_a, &mut b).is_empty());
        assert_eq!(mat_a, Matrix3::identity());
        assert_eq!(b, vector![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_eliminates_above_the_pivot() {
        // Upper triangular: only the Jordan (upward) sweep has work to do.
        let mut mat_a = dmatrix![
            1.0, 1.0, 1.0;
            0.0, 1.0, 1.0;
            0.0, 0.0, 1.0;
        ];
        let mut b = dvector![6.0, 5.0, 3.0];
        assert!(gauss_jordan(&mut mat_a, &mut b).is_empty());
        assert_eq!(b, dvector![1.0, 2.0, 3.0]);
        assert_eq!(mat_a, nalgebra::DMatrix::identity(3, 3));
    }

    #[test]
    fn test_tridiagonal4() {
        let mut mat_a = matrix![
            4.0, 1.0, 0.0, 0.0;
            1.0, 4.0, 1.0, 0.0;
            0.0, 1.0, 4.0, 1.0;
            0.0, 0.0, 1.0, 4.0;
        ];
        let mut b = vector![6.0, 12.0, 18.0, 19.0];
        assert!(gauss_jordan(&mut mat_a, &mut b).is_empty());
        assert_relative_eq!(b, vector![1.0, 2.0, 3.0, 4.0], max_relative = 1e-9);
    }

    #[test]
    fn test_zero_pivot_is_skipped_not_searched() {
        // Without arrangement both diagonal entries are zero, so nothing happens at all.
        let mut mat_a = matrix![
            0.0, 1.0;
            1.0, 0.0;
        ];
        let mut b = vector![5.0, 7.0];
        assert_eq!(gauss_jordan(&mut mat_a, &mut b), vec![0, 1]);
        assert_eq!(mat_a, matrix![0.0, 1.0; 1.0, 0.0]);
        assert_eq!(b, vector![5.0, 7.0]);
    }

    #[test]
    fn test_zero_column() {
        let mut mat_a = matrix![
            0.0, 1.0;
            0.0, 1.0;
        ];
        let mut b = vector![3.0, 1.0];
        assert_eq!(gauss_jordan(&mut mat_a, &mut b), vec![0]);
        assert_eq!(mat_a, matrix![0.0, 0.0; 0.0, 1.0]);
        assert_eq!(b, vector![2.0, 1.0]);
    }

    #[test]
    fn test_pivot_vanishes_during_elimination() {
        // Rank 2: the third pivot becomes exactly zero after the first two steps.
        let mut mat_a = matrix![
            1.0, 0.0, 1.0;
            0.0, 1.0, 1.0;
            1.0, 1.0, 2.0;
        ];
        let mut b = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(gauss_jordan(&mut mat_a, &mut b), vec![2]);
        assert_eq!(
            mat_a,
            matrix![
                1.0, 0.0, 1.0;
                0.0, 1.0, 1.0;
                0.0, 0.0, 0.0;
            ]
        );
        assert_eq!(b, vector![1.0, 2.0, 0.0]);
    }

    #[test]
    fn test_f32() {
        let mut mat_a = matrix![
            2.0f32, 1.0;
            1.0, 3.0;
        ];
        let mut b = vector![5.0f32, 10.0];
        assert!(gauss_jordan(&mut mat_a, &mut b).is_empty());
        assert_relative_eq!(b, vector![1.0f32, 3.0], max_relative = 1e-6);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to(0.0625, 3), 0.063);
        assert_eq!(round_to(-0.0625, 3), -0.063);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-3.5, 0), -4.0);
        assert_eq!(round_to(1.0 / 3.0, 3), 0.333);
        assert_eq!(round_to(-4.0, 3), -4.0);
    }

    #[test]
    fn test_round_large_values_unchanged() {
        assert_eq!(round_to(1e306, 3), 1e306);
        assert_eq!(round_to(-1e306, 3), -1e306);
        assert_eq!(round_to(f64::MAX, 15), f64::MAX);
        assert_eq!(round_to(2f64.powi(60), 3), 2f64.powi(60));
        assert_eq!(round_to(1e36f32, 3), 1e36f32);
        assert_eq!(round_to(-1e36f32, 3), -1e36f32);
        assert_eq!(round_to(2f32.powi(30), 3), 2f32.powi(30));
        assert_eq!(round_to(0.0625f32, 3), 0.063f32);
    }
}
