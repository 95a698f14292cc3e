//! Grid-to-unitary compilation.
//!
//! Each grid row becomes one `2^n × 2^n` operator via the control-masking
//! construction, and the rows compose by matrix multiplication into the
//! circuit unitary.
//!
//! # The control-masking construction
//!
//! A row is folded column by column into two running Kronecker products:
//! `mask` collects the |1⟩⟨1| projector at every control column and the
//! identity everywhere else; `gate` collects the projector at controls and
//! the target matrices elsewhere. The row operator is then
//!
//! ```text
//! I(2^n) − mask + gate
//! ```
//!
//! With no controls, `mask` is the full identity and the row operator
//! reduces to the plain tensor product of its gates. With controls,
//! `mask` projects onto the all-controls-|1⟩ subspace, so subtracting it
//! and adding `gate` leaves every basis state outside that subspace
//! untouched and applies the targets inside it. One formula covers zero,
//! one, or many controls.

use ndarray::Array2;
use num_complex::Complex64;
use std::time::Instant;
use tracing::{debug, trace};

use qanvas_ir::{Circuit, GateKey, Grid};

use crate::error::{CompileError, CompileResult};
use crate::gates;
use crate::operator::{identity, kron, scalar_one};

/// Compile the circuit's main grid into a single unitary.
///
/// Row 0 acts on the state first, so the result is
/// `U = R_last · … · R_1 · R_0`.
pub fn compile(circuit: &Circuit) -> CompileResult<Array2<Complex64>> {
    let start = Instant::now();
    let unitary = compile_grid(circuit.main_grid(), circuit)?;
    debug!(
        qubits = circuit.num_qubits(),
        rows = circuit.main_grid().row_count(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "circuit compiled"
    );
    Ok(unitary)
}

/// Compile one grid, recursing into packed gates through the registry held
/// by `circuit`.
fn compile_grid(grid: &Grid, circuit: &Circuit) -> CompileResult<Array2<Complex64>> {
    let dim = 1usize << grid.column_count();
    let mut unitary = identity(dim);
    for (index, row) in grid.rows().enumerate() {
        let row_op = row_operator(row, circuit)?;
        trace!(row = index, "row operator assembled");
        // Later rows act after earlier ones, so they multiply on the left.
        unitary = row_op.dot(&unitary);
    }
    Ok(unitary)
}

/// Assemble the operator of a single row.
fn row_operator(row: &[GateKey], circuit: &Circuit) -> CompileResult<Array2<Complex64>> {
    let dim = 1usize << row.len();
    let mut mask = scalar_one();
    let mut gate = scalar_one();

    for (col, key) in row.iter().enumerate() {
        match key {
            GateKey::Gate(elementary) => {
                mask = kron(&gates::identity2(), &mask);
                gate = kron(&gates::lookup(*elementary), &gate);
            }
            GateKey::Control => {
                mask = kron(&gates::projector_one(), &mask);
                gate = kron(&gates::projector_one(), &gate);
            }
            GateKey::Continuation(_) => {
                // The anchor already folded this column's share into `gate`.
                mask = kron(&gates::identity2(), &mask);
            }
            GateKey::Packed(name) => {
                mask = kron(&gates::identity2(), &mask);
                let packed = circuit.packed_gate(name).ok_or_else(|| {
                    CompileError::UnresolvedPackedGate { name: name.clone() }
                })?;
                let span = block_span(row, col);
                if span != packed.width() {
                    return Err(CompileError::BlockWidthMismatch {
                        name: name.clone(),
                        expected: packed.width(),
                        found: span,
                    });
                }
                let sub = compile_grid(packed.grid(), circuit)?;
                gate = kron(&sub, &gate);
            }
        }
    }

    Ok(identity(dim) - mask + gate)
}

/// Width of the block anchored at `col`: the anchor plus the run of
/// continuation cells pointing back at it.
fn block_span(row: &[GateKey], anchor: usize) -> usize {
    let mut span = 1;
    for (col, key) in row.iter().enumerate().skip(anchor + 1) {
        match key {
            GateKey::Continuation(offset) if anchor + offset == col => span += 1,
            _ => break,
        }
    }
    span
}
