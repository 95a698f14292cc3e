//! The editable circuit: main grid plus packed-gate registry.
//!
//! Every mutation validates before it writes, so a failed call leaves the
//! circuit exactly as it was. Recompilation is the caller's business — this
//! crate only maintains the symbolic model.

use petgraph::algo::is_cyclic_directed;
use petgraph::graphmap::DiGraphMap;
use rustc_hash::FxHashMap;

use crate::error::{GridError, GridResult};
use crate::grid::Grid;
use crate::key::{CONTROL_KEY, ElementaryGate, GateKey};
use crate::packed::{PACKED_PALETTE, PackedGate};

/// Which grid a mutation or query addresses: the circuit itself, or the
/// sub-circuit of a registered packed gate (packed gates are edited in
/// place through the same operations).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridTarget<'a> {
    /// The top-level circuit grid.
    Main,
    /// The grid of the named packed gate.
    Packed(&'a str),
}

/// A symbolic quantum circuit: one grid plus the registry of packed gates
/// it can reference.
#[derive(Debug, Clone)]
pub struct Circuit {
    grid: Grid,
    packed: FxHashMap<String, PackedGate>,
    /// Monotone palette index so colours stay stable across undefines.
    palette_cursor: usize,
}

impl Circuit {
    /// Create a circuit with one all-identity row and `num_qubits` columns
    /// (floored at one).
    pub fn new(num_qubits: usize) -> Self {
        Self {
            grid: Grid::new(num_qubits),
            packed: FxHashMap::default(),
            palette_cursor: 0,
        }
    }

    // =========================================================================
    // Key resolution
    // =========================================================================

    /// Resolve a selector string into a placeable [`GateKey`].
    pub fn resolve_key(&self, key: &str) -> GridResult<GateKey> {
        if let Some(gate) = ElementaryGate::from_key(key) {
            return Ok(GateKey::Gate(gate));
        }
        if key == CONTROL_KEY {
            return Ok(GateKey::Control);
        }
        if self.packed.contains_key(key) {
            return Ok(GateKey::Packed(key.to_string()));
        }
        Err(GridError::UnknownGate {
            key: key.to_string(),
        })
    }

    /// Whether `key` names an elementary gate or the control marker.
    pub fn is_gate_key(&self, key: &str) -> bool {
        ElementaryGate::from_key(key).is_some() || key == CONTROL_KEY
    }

    /// Whether `key` names a registered packed gate.
    pub fn is_packed_gate(&self, key: &str) -> bool {
        self.packed.contains_key(key)
    }

    /// All keys a gate selector should offer: elementary gates, the control
    /// marker, then packed names in sorted order.
    pub fn selectable_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = ElementaryGate::selectable_keys()
            .map(str::to_string)
            .collect();
        keys.push(CONTROL_KEY.to_string());
        let mut packed: Vec<String> = self.packed.keys().cloned().collect();
        packed.sort();
        keys.extend(packed);
        keys
    }

    /// Number of columns `key` spans when placed.
    ///
    /// Fails with [`GridError::UnknownGate`] for an unregistered packed name
    /// or a bare continuation marker, which is not placeable.
    pub fn key_width(&self, key: &GateKey) -> GridResult<usize> {
        match key {
            GateKey::Gate(_) | GateKey::Control => Ok(1),
            GateKey::Packed(name) => self
                .packed
                .get(name)
                .map(PackedGate::width)
                .ok_or_else(|| GridError::UnknownGate { key: name.clone() }),
            GateKey::Continuation(offset) => Err(GridError::UnknownGate {
                key: offset.to_string(),
            }),
        }
    }

    // =========================================================================
    // Grid addressing
    // =========================================================================

    fn grid(&self, target: GridTarget<'_>) -> GridResult<&Grid> {
        match target {
            GridTarget::Main => Ok(&self.grid),
            GridTarget::Packed(name) => self
                .packed
                .get(name)
                .map(PackedGate::grid)
                .ok_or_else(|| GridError::UnknownPackedGate {
                    name: name.to_string(),
                }),
        }
    }

    fn grid_mut(&mut self, target: GridTarget<'_>) -> GridResult<&mut Grid> {
        match target {
            GridTarget::Main => Ok(&mut self.grid),
            GridTarget::Packed(name) => self
                .packed
                .get_mut(name)
                .map(PackedGate::grid_mut)
                .ok_or_else(|| GridError::UnknownPackedGate {
                    name: name.to_string(),
                }),
        }
    }

    /// The top-level grid, for compilation and rendering.
    #[inline]
    pub fn main_grid(&self) -> &Grid {
        &self.grid
    }

    /// Read-only view of the addressed grid — what an editor renders when
    /// the user switches between the circuit and a packed gate.
    pub fn grid_view(&self, target: GridTarget<'_>) -> GridResult<&Grid> {
        self.grid(target)
    }

    /// Look up a packed gate by name.
    pub fn packed_gate(&self, name: &str) -> Option<&PackedGate> {
        self.packed.get(name)
    }

    /// Number of rows of the addressed grid.
    pub fn row_count(&self, target: GridTarget<'_>) -> GridResult<usize> {
        Ok(self.grid(target)?.row_count())
    }

    /// Number of columns (= qubits) of the addressed grid.
    pub fn column_count(&self, target: GridTarget<'_>) -> GridResult<usize> {
        Ok(self.grid(target)?.column_count())
    }

    /// Qubit count of the top-level circuit.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.grid.column_count()
    }

    /// Look up a cell of the addressed grid.
    pub fn cell(&self, target: GridTarget<'_>, row: usize, col: usize) -> GridResult<&GateKey> {
        let grid = self.grid(target)?;
        grid.cell(row, col).ok_or(GridError::OutOfRange {
            row,
            col,
            rows: grid.row_count(),
            cols: grid.column_count(),
        })
    }

    /// Resolve `(row, col)` to the anchor column of the block covering it.
    ///
    /// Continuation cells walk back to their anchor; every other cell is its
    /// own anchor. Lets a renderer draw one merged glyph per block.
    pub fn block_anchor(&self, target: GridTarget<'_>, row: usize, col: usize) -> GridResult<usize> {
        match self.cell(target, row, col)? {
            GateKey::Continuation(offset) => Ok(col.saturating_sub(*offset)),
            _ => Ok(col),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Place `key` with its anchor at `(row, col)`.
    ///
    /// A multi-qubit key also writes continuation markers in the
    /// `width - 1` columns to the right of the anchor. If any cell of that
    /// span is occupied, a fresh row is inserted immediately before `row`
    /// and the placement lands there, preserving existing placements.
    pub fn place_gate(
        &mut self,
        target: GridTarget<'_>,
        row: usize,
        col: usize,
        key: GateKey,
    ) -> GridResult<()> {
        let width = self.key_width(&key)?;

        if let (GridTarget::Packed(parent), GateKey::Packed(child)) = (target, &key) {
            self.check_acyclic(parent, child)?;
        }

        let grid = self.grid(target)?;
        let (rows, cols) = (grid.row_count(), grid.column_count());
        if row >= rows || col >= cols {
            return Err(GridError::OutOfRange {
                row,
                col,
                rows,
                cols,
            });
        }
        if col + width > cols {
            // The block would overhang the last qubit column.
            return Err(GridError::OutOfRange {
                row,
                col: col + width - 1,
                rows,
                cols,
            });
        }

        let occupied = !grid.is_span_free(row, col, width);
        let grid = self.grid_mut(target)?;
        if occupied {
            grid.insert_row(row);
        }
        *grid.cell_mut(row, col) = key;
        for offset in 1..width {
            *grid.cell_mut(row, col + offset) = GateKey::Continuation(offset);
        }
        Ok(())
    }

    /// Resolve a selector string and place it. See [`Circuit::place_gate`].
    pub fn place_key(
        &mut self,
        target: GridTarget<'_>,
        row: usize,
        col: usize,
        key: &str,
    ) -> GridResult<()> {
        let key = self.resolve_key(key)?;
        self.place_gate(target, row, col, key)
    }

    /// Clear the block covering `(row, col)` back to identity.
    ///
    /// Continuation cells resolve to their anchor first; the anchor and all
    /// its continuation cells are cleared together. A row left entirely
    /// identity is deleted, unless it is the last remaining row.
    pub fn remove_gate(
        &mut self,
        target: GridTarget<'_>,
        row: usize,
        col: usize,
    ) -> GridResult<()> {
        let anchor = self.block_anchor(target, row, col)?;
        let grid = self.grid_mut(target)?;

        if grid
            .cell(row, anchor)
            .is_none_or(GateKey::is_identity)
        {
            return Ok(());
        }

        *grid.cell_mut(row, anchor) = GateKey::identity();
        let mut col = anchor + 1;
        while col < grid.column_count() {
            match grid.cell(row, col) {
                Some(GateKey::Continuation(offset)) if anchor + offset == col => {
                    *grid.cell_mut(row, col) = GateKey::identity();
                    col += 1;
                }
                _ => break,
            }
        }

        if grid.is_row_identity(row) && grid.row_count() > 1 {
            grid.remove_row(row);
        }
        Ok(())
    }

    /// Append a qubit column to the addressed grid.
    ///
    /// Resizing a packed gate that is currently placed somewhere is
    /// rejected with [`GridError::InUse`]: it would orphan the continuation
    /// cells of every placement.
    pub fn add_qubit(&mut self, target: GridTarget<'_>) -> GridResult<()> {
        self.check_resizable(target)?;
        self.grid_mut(target)?.push_column();
        Ok(())
    }

    /// Remove the last qubit column of the addressed grid.
    ///
    /// Fails with [`GridError::NonEmptyColumn`] if any row still holds a
    /// gate in that column, so no placement is silently lost.
    pub fn remove_qubit(&mut self, target: GridTarget<'_>) -> GridResult<()> {
        self.check_resizable(target)?;
        let grid = self.grid(target)?;
        let cols = grid.column_count();
        if cols == 1 {
            return Err(GridError::LastColumn);
        }
        if !grid.is_column_identity(cols - 1) {
            return Err(GridError::NonEmptyColumn { column: cols - 1 });
        }
        self.grid_mut(target)?.pop_column();
        Ok(())
    }

    /// Register a new packed gate with a fresh all-identity grid of
    /// `num_qubits` columns (floored at one).
    ///
    /// The name must not collide with an elementary key, the control
    /// marker, or an existing packed gate.
    pub fn define_packed(&mut self, name: &str, num_qubits: usize) -> GridResult<()> {
        let reserved =
            ElementaryGate::from_key(name).is_some() || name == CONTROL_KEY || name == "R";
        if reserved || self.packed.contains_key(name) {
            return Err(GridError::DuplicateKey {
                key: name.to_string(),
            });
        }
        let color = PACKED_PALETTE[self.palette_cursor % PACKED_PALETTE.len()];
        self.palette_cursor += 1;
        self.packed
            .insert(name.to_string(), PackedGate::new(num_qubits, color));
        Ok(())
    }

    /// Unregister a packed gate.
    ///
    /// Fails with [`GridError::InUse`] while any grid still references the
    /// name — otherwise those cells would become unresolvable.
    pub fn undefine_packed(&mut self, name: &str) -> GridResult<()> {
        if !self.packed.contains_key(name) {
            return Err(GridError::UnknownPackedGate {
                name: name.to_string(),
            });
        }
        if self.is_referenced(name) {
            return Err(GridError::InUse {
                name: name.to_string(),
            });
        }
        self.packed.remove(name);
        Ok(())
    }

    // =========================================================================
    // Internal checks
    // =========================================================================

    /// Whether `name` is placed in the main grid or any packed grid.
    fn is_referenced(&self, name: &str) -> bool {
        self.grid.packed_references().any(|n| n == name)
            || self
                .packed
                .values()
                .any(|gate| gate.grid().packed_references().any(|n| n == name))
    }

    fn check_resizable(&self, target: GridTarget<'_>) -> GridResult<()> {
        if let GridTarget::Packed(name) = target {
            if !self.packed.contains_key(name) {
                return Err(GridError::UnknownPackedGate {
                    name: name.to_string(),
                });
            }
            if self.is_referenced(name) {
                return Err(GridError::InUse {
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Reject a placement of `child` into `parent`'s grid that would close
    /// a reference cycle. Depth-first over the name-reference graph, run
    /// before any write.
    fn check_acyclic(&self, parent: &str, child: &str) -> GridResult<()> {
        if parent == child {
            return Err(GridError::CyclicDefinition {
                name: child.to_string(),
            });
        }
        let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
        for (name, gate) in &self.packed {
            for referenced in gate.grid().packed_references() {
                graph.add_edge(name.as_str(), referenced, ());
            }
        }
        graph.add_edge(parent, child, ());
        if is_cyclic_directed(&graph) {
            return Err(GridError::CyclicDefinition {
                name: child.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new(1)
    }
}
