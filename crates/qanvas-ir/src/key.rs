//! Gate key types — the symbols a grid cell can hold.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Elementary single-qubit gates with fixed 2x2 unitaries.
///
/// The matrices themselves live in `qanvas-compile`; this crate only deals
/// in symbols.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ElementaryGate {
    /// Identity gate. The blank cell of the grid.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z), quarter turn).
    S,
    /// T gate (eighth turn).
    T,
    /// Phase rotation R(θ) = diag(1, e^{iθ}).
    ///
    /// Carries its angle inline, so it has no bare string key and is placed
    /// through the typed API rather than [`ElementaryGate::from_key`].
    R(f64),
}

/// Keys with a fixed string spelling, in selector display order.
static NAMED_KEYS: [(&str, ElementaryGate); 7] = [
    ("I", ElementaryGate::I),
    ("X", ElementaryGate::X),
    ("Y", ElementaryGate::Y),
    ("Z", ElementaryGate::Z),
    ("H", ElementaryGate::H),
    ("S", ElementaryGate::S),
    ("T", ElementaryGate::T),
];

impl ElementaryGate {
    /// Get the display name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            ElementaryGate::I => "I",
            ElementaryGate::X => "X",
            ElementaryGate::Y => "Y",
            ElementaryGate::Z => "Z",
            ElementaryGate::H => "H",
            ElementaryGate::S => "S",
            ElementaryGate::T => "T",
            ElementaryGate::R(_) => "R",
        }
    }

    /// Resolve a string key against the fixed gate set.
    ///
    /// `R` is not resolvable here because it needs an angle.
    pub fn from_key(key: &str) -> Option<Self> {
        NAMED_KEYS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, gate)| *gate)
    }

    /// The string keys offered to a gate selector, identity excluded.
    pub fn selectable_keys() -> impl Iterator<Item = &'static str> {
        NAMED_KEYS
            .iter()
            .map(|(name, _)| *name)
            .filter(|name| *name != "I")
    }
}

impl fmt::Display for ElementaryGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One cell of a circuit grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GateKey {
    /// An elementary gate occupying exactly one column.
    Gate(ElementaryGate),
    /// Control marker: this qubit must be |1⟩ for the row's target
    /// operator to apply.
    Control,
    /// Anchor of a packed-gate block, referencing the registry by name.
    Packed(String),
    /// A non-anchor cell of a multi-qubit block. The payload is the offset
    /// (≥ 1) back to the anchor column.
    Continuation(usize),
}

/// The string key of the control marker.
pub const CONTROL_KEY: &str = "C";

impl GateKey {
    /// The blank cell value.
    pub const fn identity() -> Self {
        GateKey::Gate(ElementaryGate::I)
    }

    /// Whether this cell is blank (holds the identity).
    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self, GateKey::Gate(ElementaryGate::I))
    }

    /// Whether this cell belongs to a multi-qubit block without being its
    /// anchor.
    #[inline]
    pub fn is_continuation(&self) -> bool {
        matches!(self, GateKey::Continuation(_))
    }
}

impl Default for GateKey {
    fn default() -> Self {
        GateKey::identity()
    }
}

impl From<ElementaryGate> for GateKey {
    fn from(gate: ElementaryGate) -> Self {
        GateKey::Gate(gate)
    }
}

impl fmt::Display for GateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateKey::Gate(gate) => write!(f, "{gate}"),
            GateKey::Control => write!(f, "{CONTROL_KEY}"),
            GateKey::Packed(name) => write!(f, "{name}"),
            GateKey::Continuation(offset) => write!(f, "{offset}"),
        }
    }
}
