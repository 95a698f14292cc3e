//! End-to-end scenarios driven through the workbench, the way a UI host
//! drives it.

use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

use qanvas_ir::{GridError, GridTarget};
use qanvas_sim::{SimError, Workbench};

fn approx(a: Complex64, b: Complex64) -> bool {
    (a - b).norm() < 1e-9
}

#[test]
fn test_single_hadamard_scenario() {
    let mut bench = Workbench::new(1);
    bench.place_key(GridTarget::Main, 0, 0, "H").unwrap();

    let amps = bench.state().amplitudes();
    assert!(approx(amps[0], Complex64::new(FRAC_1_SQRT_2, 0.0)));
    assert!(approx(amps[1], Complex64::new(FRAC_1_SQRT_2, 0.0)));

    let probs = bench.probabilities();
    assert!((probs[0] - 0.5).abs() < 1e-9);
    assert!((probs[1] - 0.5).abs() < 1e-9);
}

#[test]
fn test_bell_pair() {
    let mut bench = Workbench::new(2);
    bench.place_key(GridTarget::Main, 0, 0, "C").unwrap();
    bench.place_key(GridTarget::Main, 0, 1, "X").unwrap();
    // Occupied cell: the H row is inserted before the controlled-X row.
    bench.place_key(GridTarget::Main, 0, 0, "H").unwrap();

    let amps = bench.state().amplitudes();
    assert!(approx(amps[0], Complex64::new(FRAC_1_SQRT_2, 0.0)));
    assert!(approx(amps[1], Complex64::new(0.0, 0.0)));
    assert!(approx(amps[2], Complex64::new(0.0, 0.0)));
    assert!(approx(amps[3], Complex64::new(FRAC_1_SQRT_2, 0.0)));

    let total: f64 = bench.probabilities().iter().sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn test_place_then_remove_restores_unitary() {
    let mut bench = Workbench::new(2);
    bench.place_key(GridTarget::Main, 0, 0, "H").unwrap();
    let before = bench.unitary().clone();

    bench.place_key(GridTarget::Main, 0, 1, "Y").unwrap();
    assert_ne!(bench.unitary(), &before);

    bench.remove_gate(GridTarget::Main, 0, 1).unwrap();
    // Deterministic recompute of the same grid: exact equality, not approx.
    assert_eq!(bench.unitary(), &before);
}

#[test]
fn test_remove_qubit_guard_keeps_state() {
    let mut bench = Workbench::new(2);
    bench.place_key(GridTarget::Main, 0, 1, "X").unwrap();
    let before_probs = bench.probabilities();

    let err = bench.remove_qubit(GridTarget::Main).unwrap_err();
    assert!(matches!(
        err,
        SimError::Grid(GridError::NonEmptyColumn { column: 1 })
    ));
    assert_eq!(bench.circuit().num_qubits(), 2);
    assert_eq!(bench.probabilities(), before_probs);
}

#[test]
fn test_add_qubit_grows_state() {
    let mut bench = Workbench::new(1);
    bench.add_qubit(GridTarget::Main).unwrap();

    assert_eq!(bench.circuit().num_qubits(), 2);
    let probs = bench.probabilities();
    assert_eq!(probs.len(), 4);
    assert!((probs[0] - 1.0).abs() < 1e-9);
}

#[test]
fn test_packed_gate_equals_inlined() {
    let mut packed = Workbench::new(2);
    packed.define_packed("P0", 2).unwrap();
    packed
        .place_key(GridTarget::Packed("P0"), 0, 0, "H")
        .unwrap();
    packed.place_key(GridTarget::Main, 0, 0, "P0").unwrap();

    let mut inlined = Workbench::new(2);
    inlined.place_key(GridTarget::Main, 0, 0, "H").unwrap();

    assert_eq!(bench_amps(&packed), bench_amps(&inlined));
}

fn bench_amps(bench: &Workbench) -> Vec<Complex64> {
    bench.state().amplitudes().iter().copied().collect()
}

#[test]
fn test_undefine_while_placed_is_rejected() {
    let mut bench = Workbench::new(1);
    bench.define_packed("P0", 1).unwrap();
    bench.place_key(GridTarget::Main, 0, 0, "P0").unwrap();

    let err = bench.undefine_packed("P0").unwrap_err();
    assert!(matches!(err, SimError::Grid(GridError::InUse { .. })));
    assert!(bench.circuit().is_packed_gate("P0"));
}

#[test]
fn test_probabilities_after_edit_sequence() {
    let mut bench = Workbench::new(2);
    bench.place_key(GridTarget::Main, 0, 0, "H").unwrap();
    bench.place_key(GridTarget::Main, 0, 1, "S").unwrap();
    bench.place_key(GridTarget::Main, 0, 0, "C").unwrap();
    bench.place_key(GridTarget::Main, 0, 1, "X").unwrap();
    bench.remove_gate(GridTarget::Main, 0, 1).unwrap();

    let total: f64 = bench.probabilities().iter().sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn test_basis_labels_for_graph() {
    let bench = Workbench::new(2);
    let labels: Vec<String> = (0..4).map(|i| bench.state().basis_label(i)).collect();
    assert_eq!(labels, vec!["00", "01", "10", "11"]);
}
