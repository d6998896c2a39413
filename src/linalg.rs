//! Vector and matrix primitives over plain `f64` slices.
//!
//! Vectors are `&[f64]` on input and [`Vector`] (`Vec<f64>`) on output.
//! Matrices are row-major [`Matrix`] values (`Vec<Vec<f64>>`) and are
//! expected to be rectangular.
//!
//! Elementwise binary operations never broadcast: operands of different
//! lengths fail with [`Error::ShapeMismatch`].

use crate::error::{ensure_same_len, Error, Result};

/// An ordered, fixed-length sequence of reals.
pub type Vector = Vec<f64>;

/// A row-major grid of reals. All rows must have the same length.
pub type Matrix = Vec<Vec<f64>>;

// ============================================================================
// Vector arithmetic
// ============================================================================

/// Elementwise sum `v + w`.
///
/// # Errors
/// [`Error::ShapeMismatch`] if `v.len() != w.len()`.
///
/// # Examples
/// ```
/// use u_numkit::linalg::add;
/// assert_eq!(add(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), vec![5.0, 7.0, 9.0]);
/// assert!(add(&[1.0, 2.0], &[1.0, 2.0, 3.0]).is_err());
/// ```
pub fn add(v: &[f64], w: &[f64]) -> Result<Vector> {
    ensure_same_len(v.len(), w.len())?;
    Ok(v.iter().zip(w).map(|(a, b)| a + b).collect())
}

/// Elementwise difference `v − w`.
///
/// # Errors
/// [`Error::ShapeMismatch`] if `v.len() != w.len()`.
pub fn subtract(v: &[f64], w: &[f64]) -> Result<Vector> {
    ensure_same_len(v.len(), w.len())?;
    Ok(v.iter().zip(w).map(|(a, b)| a - b).collect())
}

/// Scales every component of `v` by `c`.
pub fn scalar_multiply(c: f64, v: &[f64]) -> Vector {
    v.iter().map(|x| c * x).collect()
}

/// Elementwise sum across a collection of equal-length vectors.
///
/// # Errors
/// - [`Error::EmptyInput`] if `vectors` is empty.
/// - [`Error::ShapeMismatch`] if any vector's length differs from the first.
///
/// # Examples
/// ```
/// use u_numkit::linalg::vector_sum;
/// let s = vector_sum(&[[1.0, 2.0, 3.0], [1.0, 0.0, 1.0], [3.0, 3.0, 3.0]]).unwrap();
/// assert_eq!(s, vec![5.0, 5.0, 7.0]);
/// ```
pub fn vector_sum<V: AsRef<[f64]>>(vectors: &[V]) -> Result<Vector> {
    let (first, rest) = vectors
        .split_first()
        .ok_or(Error::EmptyInput("vector_sum"))?;
    let mut acc = first.as_ref().to_vec();
    for v in rest {
        let v = v.as_ref();
        ensure_same_len(acc.len(), v.len())?;
        for (a, x) in acc.iter_mut().zip(v) {
            *a += x;
        }
    }
    Ok(acc)
}

/// Elementwise mean: `vector_sum(vectors)` scaled by `1/count`.
///
/// # Errors
/// Same as [`vector_sum`].
pub fn vector_mean<V: AsRef<[f64]>>(vectors: &[V]) -> Result<Vector> {
    let sum = vector_sum(vectors)?;
    Ok(scalar_multiply(1.0 / vectors.len() as f64, &sum))
}

// ============================================================================
// Reductions
// ============================================================================

/// Dot product `Σ vᵢ·wᵢ`.
///
/// # Errors
/// [`Error::ShapeMismatch`] if `v.len() != w.len()`.
///
/// # Examples
/// ```
/// use u_numkit::linalg::dot;
/// assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
/// ```
pub fn dot(v: &[f64], w: &[f64]) -> Result<f64> {
    ensure_same_len(v.len(), w.len())?;
    Ok(v.iter().zip(w).map(|(a, b)| a * b).sum())
}

/// `dot(v, v)`. Always `>= 0` for finite input.
pub fn sum_of_squares(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum()
}

/// Euclidean length `√(v·v)`.
///
/// # Examples
/// ```
/// use u_numkit::linalg::magnitude;
/// assert_eq!(magnitude(&[3.0, 4.0]), 5.0);
/// ```
pub fn magnitude(v: &[f64]) -> f64 {
    sum_of_squares(v).sqrt()
}

/// Squared Euclidean distance `|v − w|²`.
///
/// # Errors
/// [`Error::ShapeMismatch`] if `v.len() != w.len()`.
pub fn squared_distance(v: &[f64], w: &[f64]) -> Result<f64> {
    Ok(sum_of_squares(&subtract(v, w)?))
}

/// Euclidean distance `|v − w|`.
///
/// # Errors
/// [`Error::ShapeMismatch`] if `v.len() != w.len()`.
pub fn distance(v: &[f64], w: &[f64]) -> Result<f64> {
    squared_distance(v, w).map(f64::sqrt)
}

// ============================================================================
// Matrices
// ============================================================================

/// Returns `(rows, columns)`.
///
/// The column count is taken from the first row (0 for a matrix with no
/// rows). Rectangularity is not checked.
///
/// # Examples
/// ```
/// use u_numkit::linalg::shape;
/// assert_eq!(shape(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]), (2, 3));
/// ```
pub fn shape<R: AsRef<[f64]>>(a: &[R]) -> (usize, usize) {
    let cols = a.first().map_or(0, |row| row.as_ref().len());
    (a.len(), cols)
}

/// Returns a copy of row `i` (0-based).
///
/// # Errors
/// [`Error::IndexOutOfRange`] if `i >= rows`.
pub fn get_row<R: AsRef<[f64]>>(a: &[R], i: usize) -> Result<Vector> {
    a.get(i)
        .map(|row| row.as_ref().to_vec())
        .ok_or(Error::IndexOutOfRange {
            index: i,
            len: a.len(),
        })
}

/// Returns column `j` (0-based) as a vector.
///
/// # Errors
/// [`Error::IndexOutOfRange`] if `j` is not a valid column of the matrix,
/// including any row too short to hold it.
///
/// # Examples
/// ```
/// use u_numkit::linalg::get_column;
/// let a = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
/// assert_eq!(get_column(&a, 2).unwrap(), vec![3.0, 6.0, 9.0]);
/// ```
pub fn get_column<R: AsRef<[f64]>>(a: &[R], j: usize) -> Result<Vector> {
    let (_, cols) = shape(a);
    if j >= cols {
        return Err(Error::IndexOutOfRange { index: j, len: cols });
    }
    a.iter()
        .map(|row| {
            let row = row.as_ref();
            row.get(j).copied().ok_or(Error::IndexOutOfRange {
                index: j,
                len: row.len(),
            })
        })
        .collect()
}

/// Builds a `rows × cols` matrix whose `(i, j)` entry is `entry_fn(i, j)`.
///
/// # Examples
/// ```
/// use u_numkit::linalg::make_matrix;
/// let m = make_matrix(2, 3, |i, j| (i * 3 + j) as f64);
/// assert_eq!(m, vec![vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]]);
/// ```
pub fn make_matrix<F>(rows: usize, cols: usize, entry_fn: F) -> Matrix
where
    F: Fn(usize, usize) -> f64,
{
    (0..rows)
        .map(|i| (0..cols).map(|j| entry_fn(i, j)).collect())
        .collect()
}

/// `n × n` identity matrix.
pub fn identity_matrix(n: usize) -> Matrix {
    make_matrix(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- add / subtract / scale ---

    #[test]
    fn test_add() {
        assert_eq!(
            add(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(),
            vec![5.0, 7.0, 9.0]
        );
    }

    #[test]
    fn test_add_length_mismatch() {
        assert_eq!(
            add(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(Error::ShapeMismatch { expected: 2, actual: 3 })
        );
    }

    #[test]
    fn test_subtract() {
        assert_eq!(
            subtract(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(),
            vec![-3.0, -3.0, -3.0]
        );
        assert!(subtract(&[1.0], &[]).is_err());
    }

    #[test]
    fn test_add_empty_vectors() {
        assert_eq!(add(&[], &[]).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn test_scalar_multiply() {
        assert_eq!(scalar_multiply(5.0, &[1.0, 2.0, 3.0]), vec![5.0, 10.0, 15.0]);
        assert!(scalar_multiply(2.0, &[]).is_empty());
    }

    // --- vector_sum / vector_mean ---

    #[test]
    fn test_vector_sum() {
        let vs = vec![vec![1.0, 2.0, 3.0], vec![1.0, 0.0, 1.0], vec![3.0, 3.0, 3.0]];
        assert_eq!(vector_sum(&vs).unwrap(), vec![5.0, 5.0, 7.0]);
    }

    #[test]
    fn test_vector_sum_empty() {
        let vs: Vec<Vector> = vec![];
        assert_eq!(vector_sum(&vs), Err(Error::EmptyInput("vector_sum")));
        assert_eq!(vector_mean(&vs), Err(Error::EmptyInput("vector_sum")));
    }

    #[test]
    fn test_vector_sum_ragged() {
        let vs = vec![vec![1.0, 2.0], vec![1.0]];
        assert_eq!(
            vector_sum(&vs),
            Err(Error::ShapeMismatch { expected: 2, actual: 1 })
        );
    }

    #[test]
    fn test_vector_mean() {
        let vs = [[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        assert_eq!(vector_mean(&vs).unwrap(), vec![3.0, 4.0]);
    }

    // --- reductions ---

    #[test]
    fn test_dot() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
        assert!(dot(&[1.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_sum_of_squares() {
        assert_eq!(sum_of_squares(&[1.0, 2.0, 3.0]), 14.0);
        assert_eq!(sum_of_squares(&[]), 0.0);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(magnitude(&[3.0, 4.0]), 5.0);
        assert_eq!(magnitude(&[0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_distance() {
        assert_eq!(squared_distance(&[0.0, 0.0], &[3.0, 4.0]).unwrap(), 25.0);
        assert_eq!(distance(&[0.0, 0.0], &[3.0, 4.0]).unwrap(), 5.0);
        assert_eq!(distance(&[1.0, 1.0], &[1.0, 1.0]).unwrap(), 0.0);
        assert!(distance(&[1.0], &[1.0, 2.0]).is_err());
    }

    // --- matrices ---

    #[test]
    fn test_shape() {
        assert_eq!(shape(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]), (2, 3));
        let empty: Matrix = vec![];
        assert_eq!(shape(&empty), (0, 0));
    }

    #[test]
    fn test_get_row() {
        let a = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        assert_eq!(get_row(&a, 1).unwrap(), vec![4.0, 5.0, 6.0]);
        assert_eq!(
            get_row(&a, 2),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_get_column() {
        let a = vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ];
        assert_eq!(get_column(&a, 2).unwrap(), vec![3.0, 6.0, 9.0]);
        assert_eq!(
            get_column(&a, 3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_get_column_empty_matrix() {
        let empty: Matrix = vec![];
        assert!(get_column(&empty, 0).is_err());
    }

    #[test]
    fn test_get_column_short_row() {
        let a = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(
            get_column(&a, 1),
            Err(Error::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_make_matrix() {
        let m = make_matrix(2, 3, |i, j| (10 * i + j) as f64);
        assert_eq!(m, vec![vec![0.0, 1.0, 2.0], vec![10.0, 11.0, 12.0]]);
        assert!(make_matrix(0, 5, |_, _| 1.0).is_empty());
    }

    #[test]
    fn test_identity_matrix() {
        assert_eq!(
            identity_matrix(3),
            vec![
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0],
            ]
        );
        assert_eq!(shape(&identity_matrix(0)), (0, 0));
    }
}
