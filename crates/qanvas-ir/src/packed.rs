//! Packed gates — named, reusable sub-circuits.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// Display colours cycled through as packed gates are defined, so each
/// block gets a distinguishable tile in the editor.
pub const PACKED_PALETTE: [[u8; 3]; 6] = [
    [66, 135, 245],
    [240, 147, 43],
    [106, 176, 76],
    [235, 77, 75],
    [190, 46, 221],
    [34, 166, 179],
];

/// A named sub-circuit that can be placed as a single multi-qubit block.
///
/// Its grid is independently sized: the qubit count of a packed gate may
/// differ from the qubit count of any grid that references it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackedGate {
    grid: Grid,
    color: [u8; 3],
}

impl PackedGate {
    /// Create a packed gate with a fresh all-identity grid.
    pub fn new(num_qubits: usize, color: [u8; 3]) -> Self {
        Self {
            grid: Grid::new(num_qubits),
            color,
        }
    }

    /// The sub-circuit grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Number of qubit columns this gate spans when placed.
    #[inline]
    pub fn width(&self) -> usize {
        self.grid.column_count()
    }

    /// Display colour of the block tile.
    #[inline]
    pub fn color(&self) -> [u8; 3] {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_packed_gate() {
        let gate = PackedGate::new(2, PACKED_PALETTE[0]);
        assert_eq!(gate.width(), 2);
        assert_eq!(gate.grid().row_count(), 1);
        assert_eq!(gate.color(), PACKED_PALETTE[0]);
    }
}
