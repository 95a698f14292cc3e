//! Qanvas circuit-to-operator compiler
//!
//! Turns the symbolic grid of a [`qanvas_ir::Circuit`] into one dense
//! unitary operator. Each row compiles independently via the
//! control-masking construction (see [`compiler`]), packed gates expand
//! recursively through the registry, and the row operators multiply
//! together in time order.
//!
//! # Example
//!
//! ```rust
//! use qanvas_ir::{Circuit, GridTarget};
//! use qanvas_compile::compile;
//!
//! let mut circuit = Circuit::new(2);
//! circuit.place_key(GridTarget::Main, 0, 0, "C").unwrap();
//! circuit.place_key(GridTarget::Main, 0, 1, "X").unwrap();
//!
//! let unitary = compile(&circuit).unwrap();
//! assert_eq!(unitary.dim(), (4, 4));
//! ```
//!
//! Compilation is a full recompute every time — nothing is cached between
//! edits. The intended circuits are a handful of qubits wide, where the
//! dense `2^n × 2^n` operators stay tiny.

pub mod compiler;
pub mod error;
pub mod gates;
pub mod operator;

pub use compiler::compile;
pub use error::{CompileError, CompileResult};
