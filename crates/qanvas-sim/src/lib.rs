//! Qanvas state-vector engine
//!
//! The [`Workbench`] is the surface a UI drives: it owns the symbolic
//! [`qanvas_ir::Circuit`], the compiled unitary, and the resulting
//! [`Statevector`], and re-runs the whole synchronous
//! validate → mutate → recompile → replace-state pipeline on every edit.
//! Amplitudes are exact (up to floating point); there is no sampling and
//! no collapse.
//!
//! # Example: a Hadamard on one qubit
//!
//! ```rust
//! use qanvas_sim::Workbench;
//! use qanvas_ir::GridTarget;
//!
//! let mut bench = Workbench::new(1);
//! bench.place_key(GridTarget::Main, 0, 0, "H").unwrap();
//!
//! let probs = bench.probabilities();
//! assert!((probs[0] - 0.5).abs() < 1e-9);
//! assert!((probs[1] - 0.5).abs() < 1e-9);
//! ```

pub mod error;
pub mod statevector;
pub mod workbench;

pub use error::{SimError, SimResult};
pub use statevector::Statevector;
pub use workbench::Workbench;
