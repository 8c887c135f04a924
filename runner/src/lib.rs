// Copyright (c) Grover Oracle Contributors.
// Licensed under the MIT License.

#![deny(clippy::all, clippy::pedantic)]

mod cli;
pub use cli::main;

pub use grover_circuit::{
    qasm::{write_qasm, LINE_ENDING},
    Circuit, Gate, GateList, Register,
};
pub use grover_oracle::{search_gates, GroverCircuit, OracleError, ProblemType};

use std::{io::Write, path::Path};

/// Builds the Grover's search circuit for `key` over the lookup table at `table_path` and writes
/// it to `output_writer` as an OpenQASM 2.0 program, preceded by a comment naming the winner and
/// the measurement outcome the search should produce.
/// # Errors
///
/// Will return `Err` if
/// - `table_path` does not exist or the user does not have permission to read it.
/// - `table_path` is not a `;`-delimited table with a `name` column and an integer value column.
/// - `key` is not in the table.
/// - writing to `output_writer` fails.
pub fn run_search(
    table_path: impl AsRef<Path>,
    key: &str,
    measure: bool,
    output_writer: &mut impl Write,
) -> Result<(), String> {
    let table_path = table_path.as_ref();
    tracing::info!(key, table = %table_path.display(), "building grover search");

    let search =
        search_gates(table_path, key, Register::default()).map_err(|e| e.to_string())?;

    let to_message = |e: std::io::Error| format!("Failed to write output: {e}");
    output_writer
        .write_fmt(format_args!(
            "// winner: {key} = {} (expected |{}⟩)",
            search.winner,
            search.expected_bits()
        ))
        .map_err(to_message)?;
    output_writer.write_all(LINE_ENDING).map_err(to_message)?;
    write_qasm(&search.gates, search.num_qubits(), measure, output_writer).map_err(to_message)
}
