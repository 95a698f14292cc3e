//! Statevector representation and read-out.

use ndarray::{Array1, Array2};
use num_complex::Complex64;

/// A dense quantum state of `2^n` complex amplitudes.
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Array1<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = Array1::zeros(size);
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Apply a whole-circuit unitary: an ordinary matrix-vector product.
    ///
    /// The operator's dimension must match the state's; the compiler and
    /// the workbench keep the two in lockstep.
    pub fn apply(&mut self, unitary: &Array2<Complex64>) {
        self.amplitudes = unitary.dot(&self.amplitudes);
    }

    /// The raw amplitudes, indexed by basis-state integer.
    #[inline]
    pub fn amplitudes(&self) -> &Array1<Complex64> {
        &self.amplitudes
    }

    /// Measurement probabilities |amplitude|² per basis state.
    ///
    /// Sums to 1 (within floating-point tolerance) whenever the applied
    /// operators were unitary.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Binary label of a basis state, qubit 0 rightmost, e.g. index 2 of a
    /// 2-qubit state is `"10"`.
    pub fn basis_label(&self, index: usize) -> String {
        format!("{index:0width$b}", width = self.num_qubits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(1.0, 0.0)));
        for i in 1..4 {
            assert!(approx_eq(sv.amplitudes()[i], Complex64::new(0.0, 0.0)));
        }
    }

    #[test]
    fn test_apply_hadamard() {
        let s = 1.0 / 2.0_f64.sqrt();
        let h = arr2(&[
            [Complex64::new(s, 0.0), Complex64::new(s, 0.0)],
            [Complex64::new(s, 0.0), Complex64::new(-s, 0.0)],
        ]);

        let mut sv = Statevector::new(1);
        sv.apply(&h);

        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(s, 0.0)));
        assert!(approx_eq(sv.amplitudes()[1], Complex64::new(s, 0.0)));

        let probs = sv.probabilities();
        assert!((probs[0] - 0.5).abs() < 1e-10);
        assert!((probs[1] - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_probabilities_sum() {
        let sv = Statevector::new(3);
        let total: f64 = sv.probabilities().iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_basis_label() {
        let sv = Statevector::new(3);
        assert_eq!(sv.basis_label(0), "000");
        assert_eq!(sv.basis_label(5), "101");
    }
}
