//! The editing workbench: circuit + compiled state, kept in lockstep.

use ndarray::{Array1, Array2};
use num_complex::Complex64;
use tracing::debug;

use qanvas_compile::{compile, operator};
use qanvas_ir::{Circuit, GateKey, GridTarget};

use crate::error::SimResult;
use crate::statevector::Statevector;

/// Owns a [`Circuit`] together with its compiled unitary and the state
/// vector that results from applying it to |0…0⟩.
///
/// Every edit runs the full validate → mutate → recompile → replace-state
/// sequence before returning; there is no partial visibility. A rejected
/// edit changes nothing, and a failed recompile (only possible if the
/// grid/registry invariants were broken) keeps the previous unitary and
/// state vector visible.
///
/// The UI layer holds this by `&mut` for edits and by `&` for rendering;
/// it never touches the underlying structures directly.
pub struct Workbench {
    circuit: Circuit,
    unitary: Array2<Complex64>,
    state: Statevector,
}

impl Workbench {
    /// Create a workbench over a fresh circuit of `num_qubits` qubits
    /// (floored at one). The compiled unitary starts as the identity.
    pub fn new(num_qubits: usize) -> Self {
        let circuit = Circuit::new(num_qubits);
        let dim = 1 << circuit.num_qubits();
        Self {
            unitary: operator::identity(dim),
            state: Statevector::new(circuit.num_qubits()),
            circuit,
        }
    }

    // =========================================================================
    // Read-out
    // =========================================================================

    /// The symbolic circuit, for rendering and queries.
    #[inline]
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// The most recently compiled whole-circuit unitary.
    #[inline]
    pub fn unitary(&self) -> &Array2<Complex64> {
        &self.unitary
    }

    /// The current state vector.
    #[inline]
    pub fn state(&self) -> &Statevector {
        &self.state
    }

    /// Measurement probabilities of the current state, indexed by basis
    /// state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.state.probabilities()
    }

    /// The current amplitudes, indexed by basis state.
    pub fn amplitudes(&self) -> &Array1<Complex64> {
        self.state.amplitudes()
    }

    // =========================================================================
    // Edits — each one recompiles on success
    // =========================================================================

    /// Place a gate key. See [`Circuit::place_gate`].
    pub fn place_gate(
        &mut self,
        target: GridTarget<'_>,
        row: usize,
        col: usize,
        key: GateKey,
    ) -> SimResult<()> {
        self.circuit.place_gate(target, row, col, key)?;
        self.recompute()
    }

    /// Resolve a selector string and place it. See [`Circuit::place_key`].
    pub fn place_key(
        &mut self,
        target: GridTarget<'_>,
        row: usize,
        col: usize,
        key: &str,
    ) -> SimResult<()> {
        self.circuit.place_key(target, row, col, key)?;
        self.recompute()
    }

    /// Clear the block covering a cell. See [`Circuit::remove_gate`].
    pub fn remove_gate(
        &mut self,
        target: GridTarget<'_>,
        row: usize,
        col: usize,
    ) -> SimResult<()> {
        self.circuit.remove_gate(target, row, col)?;
        self.recompute()
    }

    /// Append a qubit column. See [`Circuit::add_qubit`].
    pub fn add_qubit(&mut self, target: GridTarget<'_>) -> SimResult<()> {
        self.circuit.add_qubit(target)?;
        self.recompute()
    }

    /// Remove the last qubit column. See [`Circuit::remove_qubit`].
    pub fn remove_qubit(&mut self, target: GridTarget<'_>) -> SimResult<()> {
        self.circuit.remove_qubit(target)?;
        self.recompute()
    }

    /// Register a packed gate. See [`Circuit::define_packed`].
    pub fn define_packed(&mut self, name: &str, num_qubits: usize) -> SimResult<()> {
        self.circuit.define_packed(name, num_qubits)?;
        self.recompute()
    }

    /// Unregister a packed gate. See [`Circuit::undefine_packed`].
    pub fn undefine_packed(&mut self, name: &str) -> SimResult<()> {
        self.circuit.undefine_packed(name)?;
        self.recompute()
    }

    /// Recompile the whole circuit and replace the state vector.
    ///
    /// On failure the previously compiled unitary and state stay visible.
    fn recompute(&mut self) -> SimResult<()> {
        let unitary = compile(&self.circuit)?;
        let mut state = Statevector::new(self.circuit.num_qubits());
        state.apply(&unitary);

        debug!(
            qubits = self.circuit.num_qubits(),
            rows = self.circuit.main_grid().row_count(),
            "state recomputed"
        );
        self.unitary = unitary;
        self.state = state;
        Ok(())
    }
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new(1)
    }
}
