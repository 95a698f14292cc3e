//! The rectangular symbol grid.
//!
//! Rows are sequential time steps, columns are qubits. Every row has the
//! same width, and that width *is* the qubit count of the grid: a grid with
//! `w` columns acts on a state space of size `2^w`.

use serde::{Deserialize, Serialize};

use crate::key::GateKey;

/// A rectangular grid of gate keys.
///
/// Always at least one row and one column. Freshly created grids hold a
/// single all-identity row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Vec<GateKey>>,
}

impl Grid {
    /// Create a grid with one all-identity row and `num_qubits` columns.
    ///
    /// A grid cannot be narrower than one qubit; `num_qubits` is floored
    /// at 1.
    pub fn new(num_qubits: usize) -> Self {
        let width = num_qubits.max(1);
        Self {
            cells: vec![vec![GateKey::identity(); width]],
        }
    }

    /// Number of rows (time steps).
    #[inline]
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns (qubits).
    #[inline]
    pub fn column_count(&self) -> usize {
        self.cells[0].len()
    }

    /// Whether `(row, col)` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.row_count() && col < self.column_count()
    }

    /// Look up a cell. Returns `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<&GateKey> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> &mut GateKey {
        &mut self.cells[row][col]
    }

    /// Iterate over rows as slices, top (first time step) first.
    pub fn rows(&self) -> impl Iterator<Item = &[GateKey]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Whether every cell of `row` is the identity.
    pub fn is_row_identity(&self, row: usize) -> bool {
        self.cells[row].iter().all(GateKey::is_identity)
    }

    /// Whether every cell of `col` is the identity, across all rows.
    pub fn is_column_identity(&self, col: usize) -> bool {
        self.cells.iter().all(|row| row[col].is_identity())
    }

    /// Whether the `width` cells starting at `(row, col)` are all identity.
    pub(crate) fn is_span_free(&self, row: usize, col: usize, width: usize) -> bool {
        self.cells[row][col..col + width]
            .iter()
            .all(GateKey::is_identity)
    }

    /// Insert a fresh all-identity row before `at`.
    pub(crate) fn insert_row(&mut self, at: usize) {
        let width = self.column_count();
        self.cells.insert(at, vec![GateKey::identity(); width]);
    }

    /// Drop row `at`. The caller guards against emptying the grid.
    pub(crate) fn remove_row(&mut self, at: usize) {
        self.cells.remove(at);
    }

    /// Append an identity column on the right.
    pub(crate) fn push_column(&mut self) {
        for row in &mut self.cells {
            row.push(GateKey::identity());
        }
    }

    /// Drop the last column. The caller guards emptiness and occupancy.
    pub(crate) fn pop_column(&mut self) {
        for row in &mut self.cells {
            row.pop();
        }
    }

    /// Names of all packed gates referenced by this grid, with repeats.
    pub fn packed_references(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().flatten().filter_map(|key| match key {
            GateKey::Packed(name) => Some(name.as_str()),
            _ => None,
        })
    }
}
