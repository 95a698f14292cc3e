//! Error types for the sim crate.

use thiserror::Error;

use qanvas_compile::CompileError;
use qanvas_ir::GridError;

/// Errors surfaced by the workbench.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// An edit was rejected by the grid model; nothing changed.
    #[error("edit rejected: {0}")]
    Grid(#[from] GridError),

    /// Recompilation failed after an accepted edit; the previous state
    /// vector stays in place.
    #[error("recompilation failed: {0}")]
    Compile(#[from] CompileError),
}

/// Result type for workbench operations.
pub type SimResult<T> = Result<T, SimError>;
