//! Property-based tests for compiled operators.
//!
//! Any grid reachable through the mutation API must compile to a unitary:
//! U†U = I, which is also what keeps measurement probabilities summing
//! to one.

use ndarray::Array2;
use num_complex::Complex64;
use proptest::prelude::*;

use qanvas_compile::compile;
use qanvas_ir::{Circuit, GridTarget};

/// A single random placement, column folded into range at apply time.
#[derive(Debug, Clone)]
struct Placement {
    col: usize,
    key: &'static str,
}

fn arb_placement() -> impl Strategy<Value = Placement> {
    (
        0usize..4,
        prop::sample::select(vec!["X", "Y", "Z", "H", "S", "T", "C"]),
    )
        .prop_map(|(col, key)| Placement { col, key })
}

/// Generate a random circuit: 1-4 qubits, 1-12 placements dropped onto
/// row 0 (occupied cells push fresh rows, so this explores multi-row
/// grids and control/target combinations).
fn arb_circuit() -> impl Strategy<Value = Circuit> {
    (1usize..=4, prop::collection::vec(arb_placement(), 1..=12)).prop_map(
        |(num_qubits, placements)| {
            let mut circuit = Circuit::new(num_qubits);
            for p in placements {
                circuit
                    .place_key(GridTarget::Main, 0, p.col % num_qubits, p.key)
                    .unwrap();
            }
            circuit
        },
    )
}

fn dagger(m: &Array2<Complex64>) -> Array2<Complex64> {
    m.t().mapv(|v| v.conj())
}

proptest! {
    /// U†U = I within 1e-9 for every reachable grid.
    #[test]
    fn test_compiled_operator_is_unitary(circuit in arb_circuit()) {
        let unitary = compile(&circuit).unwrap();
        let dim = 1 << circuit.num_qubits();
        prop_assert_eq!(unitary.dim(), (dim, dim));

        let product = dagger(&unitary).dot(&unitary);
        for i in 0..dim {
            for j in 0..dim {
                let expected = if i == j { 1.0 } else { 0.0 };
                let delta = (product[(i, j)] - Complex64::new(expected, 0.0)).norm();
                prop_assert!(delta < 1e-9, "U†U deviates at ({}, {}): {}", i, j, delta);
            }
        }
    }

    /// Columns of a unitary are unit vectors: applying the operator to a
    /// basis state preserves total probability.
    #[test]
    fn test_probability_is_preserved(circuit in arb_circuit()) {
        let unitary = compile(&circuit).unwrap();
        let norm: f64 = unitary.column(0).iter().map(|a| a.norm_sqr()).sum();
        prop_assert!((norm - 1.0).abs() < 1e-9, "first column norm² = {}", norm);
    }
}
