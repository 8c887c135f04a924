// Copyright (c) Grover Oracle Contributors.
// Licensed under the MIT License.

#![deny(clippy::all, clippy::pedantic)]

//! # Gate vocabulary for small Grover circuits
//! This library describes circuits as plain lists of gate operations so that gate emission is
//! decoupled from whichever circuit-execution library eventually runs them. Anything that can
//! apply the four primitive gates used here can implement [`Circuit`] and receive the emitted
//! operations directly.

pub mod gate;
pub mod qasm;
pub mod register;

pub use gate::Gate;
pub use register::Register;

/// The minimal gate vocabulary a circuit-execution library has to provide for the oracle and
/// diffusion operators. Qubits are addressed by identifier.
pub trait Circuit {
    /// Appends a quarter-turn phase (S) gate on the given qubit.
    fn s(&mut self, qubit: usize);

    /// Appends a Hadamard gate on the given qubit.
    fn h(&mut self, qubit: usize);

    /// Appends a Pauli-X gate on the given qubit.
    fn x(&mut self, qubit: usize);

    /// Appends a controlled-NOT gate flipping `target` when `control` is set.
    fn cx(&mut self, control: usize, target: usize);

    /// Appends the operation described by `gate`.
    fn apply(&mut self, gate: &Gate) {
        match *gate {
            Gate::S(q) => self.s(q),
            Gate::H(q) => self.h(q),
            Gate::X(q) => self.x(q),
            Gate::Cx { control, target } => self.cx(control, target),
        }
    }

    /// Appends every operation in `gates`, in order.
    fn extend<'a, I>(&mut self, gates: I)
    where
        I: IntoIterator<Item = &'a Gate>,
        Self: Sized,
    {
        for gate in gates {
            self.apply(gate);
        }
    }
}

/// An append-only list of gate operations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GateList(Vec<Gate>);

impl GateList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn gates(&self) -> &[Gate] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Gate> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_gates(self) -> Vec<Gate> {
        self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of qubits needed to hold every qubit identifier used so far, i.e. one
    /// more than the highest identifier addressed.
    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.0
            .iter()
            .flat_map(Gate::qubits)
            .max()
            .map_or(0, |max| max + 1)
    }
}

impl Circuit for GateList {
    fn s(&mut self, qubit: usize) {
        self.0.push(Gate::S(qubit));
    }

    fn h(&mut self, qubit: usize) {
        self.0.push(Gate::H(qubit));
    }

    fn x(&mut self, qubit: usize) {
        self.0.push(Gate::X(qubit));
    }

    fn cx(&mut self, control: usize, target: usize) {
        self.0.push(Gate::Cx { control, target });
    }
}

impl From<Vec<Gate>> for GateList {
    fn from(gates: Vec<Gate>) -> Self {
        Self(gates)
    }
}

impl FromIterator<Gate> for GateList {
    fn from_iter<T: IntoIterator<Item = Gate>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a GateList {
    type Item = &'a Gate;
    type IntoIter = std::slice::Iter<'a, Gate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
