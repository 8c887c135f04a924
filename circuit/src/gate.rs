// Copyright (c) Grover Oracle Contributors.
// Licensed under the MIT License.

use std::fmt;

/// A single gate operation, addressed by qubit identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Quarter-turn phase gate, diag(1, i).
    S(usize),
    /// Hadamard gate.
    H(usize),
    /// Pauli-X gate.
    X(usize),
    /// Controlled-NOT with a single control.
    Cx { control: usize, target: usize },
}

impl Gate {
    /// Returns the lowercase gate mnemonic, matching the `qelib1.inc` gate names.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::S(_) => "s",
            Gate::H(_) => "h",
            Gate::X(_) => "x",
            Gate::Cx { .. } => "cx",
        }
    }

    /// Returns the qubits the gate acts on, controls first.
    #[must_use]
    pub fn qubits(&self) -> Vec<usize> {
        match *self {
            Gate::S(q) | Gate::H(q) | Gate::X(q) => vec![q],
            Gate::Cx { control, target } => vec![control, target],
        }
    }

    #[must_use]
    pub fn is_two_qubit(&self) -> bool {
        matches!(self, Gate::Cx { .. })
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Gate::S(q) | Gate::H(q) | Gate::X(q) => write!(f, "{} q[{q}]", self.name()),
            Gate::Cx { control, target } => {
                write!(f, "{} q[{control}], q[{target}]", self.name())
            }
        }
    }
}
