//! Dense operator helpers.
//!
//! Everything here is plain `Array2<Complex64>` arithmetic. Operators stay
//! dense — the intended circuits are a handful of qubits, where a
//! 2^n × 2^n array is small and the Kronecker fold below dominates
//! nothing.

use ndarray::Array2;
use num_complex::Complex64;

/// The identity operator on a `dim`-dimensional state space.
pub fn identity(dim: usize) -> Array2<Complex64> {
    Array2::eye(dim)
}

/// The 1x1 seed of a Kronecker fold.
pub fn scalar_one() -> Array2<Complex64> {
    Array2::ones((1, 1))
}

/// Kronecker product `a ⊗ b`, with `a` the most significant factor.
///
/// Folding a row with `acc = kron(&column_matrix, &acc)` therefore keeps
/// column 0 in the least significant bit of the basis index.
pub fn kron(a: &Array2<Complex64>, b: &Array2<Complex64>) -> Array2<Complex64> {
    let (a_rows, a_cols) = a.dim();
    let (b_rows, b_cols) = b.dim();
    let mut out = Array2::zeros((a_rows * b_rows, a_cols * b_cols));
    for ((i, j), &va) in a.indexed_iter() {
        for ((k, l), &vb) in b.indexed_iter() {
            out[(i * b_rows + k, j * b_cols + l)] = va * vb;
        }
    }
    out
}

/// Elementwise comparison within `tol`.
pub fn approx_eq(a: &Array2<Complex64>, b: &Array2<Complex64>, tol: f64) -> bool {
    a.dim() == b.dim()
        && a.iter()
            .zip(b.iter())
            .all(|(x, y)| (x - y).norm() <= tol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates;

    #[test]
    fn test_kron_dimensions() {
        let a = gates::identity2();
        let b = identity(4);
        assert_eq!(kron(&a, &b).dim(), (8, 8));
    }

    #[test]
    fn test_kron_scalar_seed_is_neutral() {
        let h = gates::h();
        assert!(approx_eq(&kron(&h, &scalar_one()), &h, 1e-12));
        assert!(approx_eq(&kron(&scalar_one(), &h), &h, 1e-12));
    }

    #[test]
    fn test_kron_of_identities() {
        let id = kron(&gates::identity2(), &gates::identity2());
        assert!(approx_eq(&id, &identity(4), 1e-12));
    }

    #[test]
    fn test_kron_x_with_identity() {
        // X ⊗ I flips the most significant bit: |00⟩ ↔ |10⟩, |01⟩ ↔ |11⟩.
        let op = kron(&gates::x(), &gates::identity2());
        let one = Complex64::new(1.0, 0.0);
        assert_eq!(op[(0, 2)], one);
        assert_eq!(op[(2, 0)], one);
        assert_eq!(op[(1, 3)], one);
        assert_eq!(op[(3, 1)], one);
        assert_eq!(op[(0, 0)], Complex64::new(0.0, 0.0));
    }
}
