// Copyright (c) Grover Oracle Contributors.
// Licensed under the MIT License.

use grover_circuit::{Circuit, Gate, GateList, Register};

/// Reflection about average for amplitude amplification. Appends `H` and `X` on every register
/// qubit, a controlled-Z (`H`, `CX`, `H` on qubit 1), then `X` and `H` on every qubit again.
///
/// The sequence is the same on every call; only the qubit identifiers come from `register`.
pub fn apply_reflection_about_average(circuit: &mut impl Circuit, register: Register) {
    for q in register.iter() {
        circuit.h(q);
    }
    for q in register.iter() {
        circuit.x(q);
    }
    circuit.h(register[1]);
    circuit.cx(register[0], register[1]);
    circuit.h(register[1]);
    for q in register.iter() {
        circuit.x(q);
    }
    for q in register.iter() {
        circuit.h(q);
    }
}

/// Returns the reflection about average on `register` as a list of gates, one per qubit for the
/// steps acting on the whole register. See [`apply_reflection_about_average`].
#[must_use]
pub fn reflection_about_average(register: Register) -> Vec<Gate> {
    let mut circuit = GateList::new();
    apply_reflection_about_average(&mut circuit, register);
    circuit.into_gates()
}
