// Copyright (c) Grover Oracle Contributors.
// Licensed under the MIT License.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use grover_circuit::{Circuit, Gate, GateList, Register};

use crate::{error::OracleError, mask::Uint4, table::LookupTable};

/// Selects which bundled lookup table a search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProblemType {
    /// The small table, `fruits.csv`.
    #[default]
    Easy,
    /// The larger table, `fruits_extended.csv`.
    Complex,
}

impl ProblemType {
    #[must_use]
    pub fn table_file_name(self) -> &'static str {
        match self {
            ProblemType::Easy => "fruits.csv",
            ProblemType::Complex => "fruits_extended.csv",
        }
    }

    /// Returns the path of this problem's table inside `data_dir`.
    #[must_use]
    pub fn table_path(self, data_dir: impl AsRef<Path>) -> PathBuf {
        data_dir.as_ref().join(self.table_file_name())
    }
}

impl FromStr for ProblemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(ProblemType::Easy),
            "complex" => Ok(ProblemType::Complex),
            _ => Err(format!(
                "Unknown problem type '{s}', expected 'easy' or 'complex'."
            )),
        }
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemType::Easy => write!(f, "easy"),
            ProblemType::Complex => write!(f, "complex"),
        }
    }
}

/// Loads the table at `table_path` and returns the masked value stored for `key`.
/// # Errors
///
/// Returns [`OracleError::KeyNotFound`] if `key` is absent, or the table loading error if the
/// file cannot be read or parsed.
pub fn find_winner(table_path: impl AsRef<Path>, key: &str) -> Result<Uint4, OracleError> {
    let table_path = table_path.as_ref();
    let table = LookupTable::load(table_path)?;
    match table.get(key) {
        Ok(winner) => {
            tracing::debug!(key, path = %table_path.display(), %winner, "found oracle winner");
            Ok(winner)
        }
        Err(e) => {
            tracing::warn!(key, path = %table_path.display(), "key missing from lookup table");
            Err(e)
        }
    }
}

/// Appends the phase-marking sequence for `winner` to `circuit`. The two-qubit basis state whose
/// index (qubit 0 least significant) equals the low two bits of `winner` has its sign flipped,
/// up to a global phase, and every other basis state is left unchanged.
///
/// The marking is a controlled-Z built from `H`, `CX`, `H` on qubit 1, bracketed by `S` gates on
/// each qubit whose selecting bit is clear. Bit 1 of `winner` selects qubit 0 and bit 0 selects
/// qubit 1.
pub fn mark_winner(circuit: &mut impl Circuit, winner: Uint4, register: Register) {
    phase_flips(circuit, winner, register);
    circuit.h(register[1]);
    circuit.cx(register[0], register[1]);
    circuit.h(register[1]);
    phase_flips(circuit, winner, register);
}

fn phase_flips(circuit: &mut impl Circuit, winner: Uint4, register: Register) {
    if !winner.bit(1) {
        circuit.s(register[0]);
    }
    if !winner.bit(0) {
        circuit.s(register[1]);
    }
}

/// Returns the phase-marking sequence for `winner` on `register`. See [`mark_winner`].
#[must_use]
pub fn marking_gates(winner: Uint4, register: Register) -> Vec<Gate> {
    let mut circuit = GateList::new();
    mark_winner(&mut circuit, winner, register);
    circuit.into_gates()
}

/// Returns the oracle gates marking the entry for `key` in the lookup table at `table_path`. The
/// table is read on every call.
/// # Errors
///
/// Returns [`OracleError::KeyNotFound`] if `key` is absent, or the table loading error if the
/// file cannot be read or parsed.
pub fn oracle_gates(
    table_path: impl AsRef<Path>,
    key: &str,
    register: Register,
) -> Result<Vec<Gate>, OracleError> {
    let winner = find_winner(table_path, key)?;
    Ok(marking_gates(winner, register))
}

/// Black box oracle encoding the winner entry of a lookup table: appends gates to `circuit` that
/// invert the phase of the register state matching the value stored for `key`, leaving all
/// other states unchanged.
///
/// Appends 3, 5 or 7 gates depending on the value. Nothing is appended on error.
/// # Errors
///
/// Returns [`OracleError::KeyNotFound`] if `key` is absent, or the table loading error if the
/// file cannot be read or parsed.
pub fn black_box_check(
    circuit: &mut impl Circuit,
    table_path: impl AsRef<Path>,
    key: &str,
    register: Register,
) -> Result<(), OracleError> {
    let winner = find_winner(table_path, key)?;
    mark_winner(circuit, winner, register);
    Ok(())
}
