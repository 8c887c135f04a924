// Copyright (c) Grover Oracle Contributors.
// Licensed under the MIT License.

use std::path::Path;

use grover_circuit::{Circuit, Gate, GateList, Register};

use crate::{
    diffusion::apply_reflection_about_average,
    error::OracleError,
    mask::Uint4,
    oracle::{find_winner, mark_winner},
};

/// A complete single-iteration Grover search over a two-qubit register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroverCircuit {
    /// The masked table value for the searched key.
    pub winner: Uint4,
    /// The register the gates address.
    pub register: Register,
    /// Uniform superposition, oracle and reflection about average, in order.
    pub gates: Vec<Gate>,
}

impl GroverCircuit {
    /// The basis state a measurement of the register returns after the search, as an index with
    /// `register[0]` as the least significant bit. With two qubits a single iteration finds the
    /// marked state with certainty.
    #[must_use]
    pub fn expected_outcome(&self) -> usize {
        self.winner.marked_state()
    }

    /// The expected outcome as a bit string in `qelib1` display order, highest qubit first.
    #[must_use]
    pub fn expected_bits(&self) -> String {
        format!("{:02b}", self.expected_outcome())
    }

    /// Returns the number of qubits a circuit needs to hold every qubit the gates address.
    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.register.iter().max().map_or(0, |max| max + 1)
    }
}

/// Builds a Grover's search for `key` in the lookup table at `table_path`: Hadamards on both
/// register qubits, the oracle marking the key's entry, then the reflection about average.
/// # Errors
///
/// Returns [`OracleError::KeyNotFound`] if `key` is absent, or the table loading error if the
/// file cannot be read or parsed. No gates are produced on error.
pub fn search_gates(
    table_path: impl AsRef<Path>,
    key: &str,
    register: Register,
) -> Result<GroverCircuit, OracleError> {
    let winner = find_winner(table_path, key)?;

    let mut circuit = GateList::new();
    for q in register.iter() {
        circuit.h(q);
    }
    mark_winner(&mut circuit, winner, register);
    apply_reflection_about_average(&mut circuit, register);

    tracing::debug!(key, %winner, gates = circuit.len(), "assembled grover circuit");
    Ok(GroverCircuit {
        winner,
        register,
        gates: circuit.into_gates(),
    })
}
