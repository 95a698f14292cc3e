//! Error types for the compile crate.

use thiserror::Error;

/// Errors that can occur while compiling a grid into an operator.
///
/// Both variants indicate a registry/grid disagreement that the mutation
/// layer normally makes impossible; they are defensive checks, not
/// recoverable conditions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// A grid cell references a packed gate that is no longer registered.
    #[error("grid references unregistered packed gate '{name}'")]
    UnresolvedPackedGate {
        /// The stale name.
        name: String,
    },

    /// A packed block's continuation span disagrees with the registered
    /// width of the gate.
    #[error("packed gate '{name}' spans {found} columns but is registered {expected} wide")]
    BlockWidthMismatch {
        /// The packed gate in question.
        name: String,
        /// The registered width.
        expected: usize,
        /// The span actually found in the grid row.
        found: usize,
    },
}

/// Result type for compilation.
pub type CompileResult<T> = Result<T, CompileError>;
