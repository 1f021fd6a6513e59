// SPDX-License-Identifier: MIT OR Apache-2.0
//! Small dense linear algebra for covariance-based projection.
//!
//! Dimensions here are tiny (six traits), so everything is plain loops over
//! row-major storage. No external LAPACK or BLAS dependencies.

use serde::{Deserialize, Serialize};

/// A square matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquareMatrix {
    data: Vec<f64>,
    dim: usize,
}

impl SquareMatrix {
    pub fn zeros(dim: usize) -> Self {
        Self {
            data: vec![0.0; dim * dim],
            dim,
        }
    }

    /// Builds a matrix from rows. Returns `None` if any row is not `rows.len()` long.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let dim = rows.len();
        if rows.iter().any(|r| r.len() != dim) {
            return None;
        }
        Some(Self {
            data: rows.iter().flatten().copied().collect(),
            dim,
        })
    }

    #[inline]
    pub const fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.dim + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.dim + col] = value;
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.dim..(row + 1) * self.dim]
    }

    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.dim {
            for j in (i + 1)..self.dim {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    pub fn frobenius_norm(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum::<f64>().sqrt()
    }
}

#[inline]
pub(crate) fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[inline]
pub(crate) fn norm(v: &[f64]) -> f64 {
    dot(v, v).sqrt()
}

/// Scale to unit length. A zero vector is returned unchanged.
pub(crate) fn normalize(mut v: Vec<f64>) -> Vec<f64> {
    let n = norm(&v);
    if n == 0.0 {
        return v;
    }
    for x in &mut v {
        *x /= n;
    }
    v
}

pub(crate) fn mat_vec_mul(m: &SquareMatrix, v: &[f64]) -> Vec<f64> {
    (0..m.dim()).map(|i| dot(m.row(i), v)).collect()
}

/// Euclidean displacement between two iterates.
pub(crate) fn displacement(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Per-dimension arithmetic mean. Caller guarantees `data` is non-empty and rectangular.
pub(crate) fn column_means<V: AsRef<[f64]>>(data: &[V], dim: usize) -> Vec<f64> {
    let mut means = vec![0.0; dim];
    for row in data {
        for (m, x) in means.iter_mut().zip(row.as_ref().iter()) {
            *m += x;
        }
    }
    let n = data.len() as f64;
    for m in &mut means {
        *m /= n;
    }
    means
}

pub(crate) fn center<V: AsRef<[f64]>>(data: &[V], means: &[f64]) -> Vec<Vec<f64>> {
    data.iter()
        .map(|row| row.as_ref().iter().zip(means.iter()).map(|(x, m)| x - m).collect())
        .collect()
}

/// Sample covariance of already-centered rows, using the N-1 denominator.
/// Requires at least two rows.
pub(crate) fn covariance(centered: &[Vec<f64>], dim: usize) -> SquareMatrix {
    let denom = (centered.len() - 1) as f64;
    let mut cov = SquareMatrix::zeros(dim);
    for i in 0..dim {
        for j in i..dim {
            let sum: f64 = centered.iter().map(|row| row[i] * row[j]).sum();
            let value = sum / denom;
            cov.set(i, j, value);
            cov.set(j, i, value);
        }
    }
    cov
}

/// `vᵀ·M·v`, the eigenvalue estimate for a unit vector `v`.
pub(crate) fn rayleigh_quotient(m: &SquareMatrix, v: &[f64]) -> f64 {
    dot(v, &mat_vec_mul(m, v))
}

/// Remove the contribution of eigenpair `(eigenvalue, v)`: `M - λ·v·vᵀ`.
pub(crate) fn deflate(m: &SquareMatrix, v: &[f64], eigenvalue: f64) -> SquareMatrix {
    let dim = m.dim();
    let mut out = SquareMatrix::zeros(dim);
    for i in 0..dim {
        for j in 0..dim {
            out.set(i, j, m.get(i, j) - eigenvalue * v[i] * v[j]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_matrix_from_rows() {
        let m = SquareMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.dim(), 2);
        assert_eq!(m.get(0, 1), 2.0);
        assert_eq!(m.get(1, 0), 3.0);
        assert_eq!(m.row(1), &[3.0, 4.0]);
    }

    #[test]
    fn test_square_matrix_from_ragged_rows() {
        assert!(SquareMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_none());
        assert!(SquareMatrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![3.0, 4.0, 5.0]]).is_none());
    }

    #[test]
    fn test_dot_and_norm() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
        assert!((norm(&[3.0, 4.0]) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize() {
        let v = normalize(vec![3.0, 4.0]);
        assert!((v[0] - 0.6).abs() < 1e-12);
        assert!((v[1] - 0.8).abs() < 1e-12);
        assert!((norm(&v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_zero_vector_unchanged() {
        let v = normalize(vec![0.0, 0.0, 0.0]);
        assert_eq!(v, vec![0.0, 0.0, 0.0]);
        assert!(v.iter().all(|x| !x.is_nan()));
    }

    #[test]
    fn test_mat_vec_mul() {
        let m = SquareMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(mat_vec_mul(&m, &[1.0, 1.0]), vec![3.0, 7.0]);
    }

    #[test]
    fn test_center_zero_mean() {
        let data = vec![vec![1.0, 10.0], vec![3.0, 20.0], vec![5.0, 30.0]];
        let means = column_means(&data, 2);
        assert_eq!(means, vec![3.0, 20.0]);

        let centered = center(&data, &means);
        for j in 0..2 {
            let sum: f64 = centered.iter().map(|r| r[j]).sum();
            assert!(sum.abs() < 1e-12);
        }
    }

    #[test]
    fn test_covariance_unbiased() {
        // Values 1,2,3 have sample variance 1.0
        let data = vec![vec![1.0, 2.0], vec![2.0, 4.0], vec![3.0, 6.0]];
        let means = column_means(&data, 2);
        let cov = covariance(&center(&data, &means), 2);
        assert!((cov.get(0, 0) - 1.0).abs() < 1e-12);
        assert!((cov.get(1, 1) - 4.0).abs() < 1e-12);
        assert!((cov.get(0, 1) - 2.0).abs() < 1e-12);
        assert!(cov.is_symmetric(0.0));
    }

    #[test]
    fn test_rayleigh_quotient_on_eigenvector() {
        let m = SquareMatrix::from_rows(&[vec![2.0, 0.0], vec![0.0, 1.0]]).unwrap();
        assert!((rayleigh_quotient(&m, &[1.0, 0.0]) - 2.0).abs() < 1e-12);
        assert!((rayleigh_quotient(&m, &[0.0, 1.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_deflate_removes_component() {
        let m = SquareMatrix::from_rows(&[vec![2.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let d = deflate(&m, &[1.0, 0.0], 2.0);
        assert!(d.get(0, 0).abs() < 1e-12);
        assert!((d.get(1, 1) - 1.0).abs() < 1e-12);
        assert!(d.is_symmetric(1e-12));
    }

    #[test]
    fn test_displacement() {
        assert!((displacement(&[0.0, 0.0], &[3.0, 4.0]) - 5.0).abs() < 1e-12);
        assert_eq!(displacement(&[1.0, 2.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn test_frobenius_norm() {
        let m = SquareMatrix::from_rows(&[vec![3.0, 0.0], vec![0.0, 4.0]]).unwrap();
        assert!((m.frobenius_norm() - 5.0).abs() < 1e-12);
    }
}
