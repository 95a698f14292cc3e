//! The elementary gate table.
//!
//! One constructor per gate, each an exact closed-form 2x2 complex array;
//! the only irrational entries are Hadamard's 1/√2 and the phase-gate
//! exponentials.

use ndarray::{Array2, arr2};
use num_complex::Complex64;
use std::f64::consts::PI;

use qanvas_ir::ElementaryGate;

/// The 2x2 identity.
pub fn identity2() -> Array2<Complex64> {
    arr2(&[
        [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
    ])
}

/// Pauli-X.
pub fn x() -> Array2<Complex64> {
    arr2(&[
        [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
        [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
    ])
}

/// Pauli-Y.
pub fn y() -> Array2<Complex64> {
    arr2(&[
        [Complex64::new(0.0, 0.0), Complex64::new(0.0, -1.0)],
        [Complex64::new(0.0, 1.0), Complex64::new(0.0, 0.0)],
    ])
}

/// Pauli-Z.
pub fn z() -> Array2<Complex64> {
    arr2(&[
        [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::new(-1.0, 0.0)],
    ])
}

/// Hadamard, normalized by 1/√2.
pub fn h() -> Array2<Complex64> {
    let s = 1.0 / 2.0_f64.sqrt();
    arr2(&[
        [Complex64::new(s, 0.0), Complex64::new(s, 0.0)],
        [Complex64::new(s, 0.0), Complex64::new(-s, 0.0)],
    ])
}

/// S gate: a quarter turn, diag(1, i).
pub fn s() -> Array2<Complex64> {
    arr2(&[
        [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::new(0.0, 1.0)],
    ])
}

/// T gate: an eighth turn, diag(1, e^{iπ/4}).
pub fn t() -> Array2<Complex64> {
    r(PI / 4.0)
}

/// Phase rotation R(θ) = diag(1, e^{iθ}).
pub fn r(theta: f64) -> Array2<Complex64> {
    arr2(&[
        [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::from_polar(1.0, theta)],
    ])
}

/// Projector onto |1⟩: diag(0, 1). The control-masking building block.
pub fn projector_one() -> Array2<Complex64> {
    arr2(&[
        [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
    ])
}

/// The matrix of an elementary gate key.
pub fn lookup(gate: ElementaryGate) -> Array2<Complex64> {
    match gate {
        ElementaryGate::I => identity2(),
        ElementaryGate::X => x(),
        ElementaryGate::Y => y(),
        ElementaryGate::Z => z(),
        ElementaryGate::H => h(),
        ElementaryGate::S => s(),
        ElementaryGate::T => t(),
        ElementaryGate::R(theta) => r(theta),
    }
}
