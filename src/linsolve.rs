//! Dense solve for the doublet strengths.

use crate::error::PanelError;
use nalgebra as na;

/// Solve `matrix * x = rhs` by LU with partial pivoting.
///
/// Fails when the smallest pivot is below `pivot_tolerance` times the largest,
/// which covers exactly singular as well as numerically rank-deficient systems.
pub fn solve_dense(
    matrix: &na::DMatrix<f64>,
    rhs: &na::DVector<f64>,
    pivot_tolerance: f64,
) -> Result<na::DVector<f64>, PanelError> {
    let size = matrix.nrows();
    let decomposition = matrix.clone().lu();

    let pivots = decomposition.u().diagonal();
    let largest = pivots.amax();
    let relative_pivot = if largest > 0.0 {
        pivots.amin() / largest
    } else {
        0.0
    };
    if !(relative_pivot > pivot_tolerance) {
        return Err(PanelError::SingularMatrix {
            size,
            relative_pivot,
        });
    }

    let solution = decomposition
        .solve(rhs)
        .ok_or(PanelError::SingularMatrix {
            size,
            relative_pivot,
        })?;

    if solution.iter().any(|v| !v.is_finite()) {
        return Err(PanelError::SingularMatrix {
            size,
            relative_pivot,
        });
    }

    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn solves_well_conditioned_system() {
        let matrix = na::DMatrix::from_row_slice(3, 3, &[4.0, 1.0, 0.0, 1.0, 3.0, 1.0, 0.0, 1.0, 2.0]);
        let expected = na::DVector::from_vec(vec![1.0, -2.0, 3.0]);
        let rhs = &matrix * &expected;

        let solution = solve_dense(&matrix, &rhs, 1e-12).unwrap();
        for (a, b) in solution.iter().zip(expected.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn singular_matrix_is_rejected() {
        let matrix = na::DMatrix::from_row_slice(3, 3, &[1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 1.0, 1.0]);
        let rhs = na::DVector::from_vec(vec![1.0, 2.0, 3.0]);

        let err = solve_dense(&matrix, &rhs, 1e-12).unwrap_err();
        assert!(matches!(err, PanelError::SingularMatrix { size: 3, .. }));
    }

    #[test]
    fn zero_matrix_is_rejected() {
        let matrix = na::DMatrix::<f64>::zeros(2, 2);
        let rhs = na::DVector::from_vec(vec![1.0, 1.0]);
        assert!(solve_dense(&matrix, &rhs, 1e-12).is_err());
    }

    #[test]
    fn nearly_singular_matrix_is_rejected() {
        let matrix = na::DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, 1.0 + 1e-15]);
        let rhs = na::DVector::from_vec(vec![1.0, 2.0]);
        assert!(solve_dense(&matrix, &rhs, 1e-12).is_err());
    }
}
