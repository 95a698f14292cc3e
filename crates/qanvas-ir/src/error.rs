//! Error types for the IR crate.

use thiserror::Error;

/// Errors that can occur while editing or querying a circuit grid.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GridError {
    /// Key is neither an elementary gate, the control marker, nor a
    /// registered packed gate.
    #[error("unknown gate key '{key}'")]
    UnknownGate {
        /// The key that failed to resolve.
        key: String,
    },

    /// Row or column index outside the current grid, or a multi-qubit block
    /// that would overhang the last column.
    #[error("position (row {row}, col {col}) is outside the {rows}x{cols} grid")]
    OutOfRange {
        /// The offending row index.
        row: usize,
        /// The offending column index.
        col: usize,
        /// Current number of rows.
        rows: usize,
        /// Current number of columns.
        cols: usize,
    },

    /// Attempted removal of a qubit column that still holds a gate.
    #[error("qubit column {column} still holds a placed gate")]
    NonEmptyColumn {
        /// The occupied column index.
        column: usize,
    },

    /// A grid always keeps at least one qubit column.
    #[error("cannot remove the last remaining qubit column")]
    LastColumn,

    /// Attempted removal or resize of a packed gate that is still placed
    /// somewhere.
    #[error("packed gate '{name}' is still placed in a circuit")]
    InUse {
        /// The referenced packed gate.
        name: String,
    },

    /// Placement would make a packed gate reference itself, directly or
    /// through other packed gates.
    #[error("placing '{name}' here would make it reference itself")]
    CyclicDefinition {
        /// The packed gate whose definition would become cyclic.
        name: String,
    },

    /// A packed gate name collided with an existing selectable key.
    #[error("key '{key}' is already defined")]
    DuplicateKey {
        /// The colliding key.
        key: String,
    },

    /// A mutation or query targeted a packed gate that is not registered.
    #[error("no packed gate named '{name}'")]
    UnknownPackedGate {
        /// The missing registry entry.
        name: String,
    },
}

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;
