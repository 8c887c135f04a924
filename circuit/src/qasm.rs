// Copyright (c) Grover Oracle Contributors.
// Licensed under the MIT License.

//! OpenQASM 2.0 rendering of gate lists, the interchange format read by most circuit-execution
//! libraries.

use std::io::Write;

use crate::Gate;

#[cfg(windows)]
pub const LINE_ENDING: &[u8] = b"\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &[u8] = b"\n";

/// Writes `gates` as an OpenQASM 2.0 program over a `num_qubits` quantum register `q` and a
/// classical register `c` of the same width. When `measure` is set, the program ends with a
/// measurement of the full register.
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_qasm<'a>(
    gates: impl IntoIterator<Item = &'a Gate>,
    num_qubits: usize,
    measure: bool,
    writer: &mut impl Write,
) -> std::io::Result<()> {
    writer.write_all(b"OPENQASM 2.0;")?;
    writer.write_all(LINE_ENDING)?;
    writer.write_all(b"include \"qelib1.inc\";")?;
    writer.write_all(LINE_ENDING)?;
    writer.write_fmt(format_args!("qreg q[{num_qubits}];"))?;
    writer.write_all(LINE_ENDING)?;
    writer.write_fmt(format_args!("creg c[{num_qubits}];"))?;
    writer.write_all(LINE_ENDING)?;

    for gate in gates {
        writer.write_fmt(format_args!("{gate};"))?;
        writer.write_all(LINE_ENDING)?;
    }

    if measure {
        writer.write_all(b"measure q -> c;")?;
        writer.write_all(LINE_ENDING)?;
    }
    Ok(())
}

/// Renders `gates` to an OpenQASM 2.0 string. See [`write_qasm`].
#[must_use]
#[allow(clippy::missing_panics_doc)] // reason="Writing to a Vec<u8> cannot fail and the output is ASCII."
pub fn to_qasm<'a>(
    gates: impl IntoIterator<Item = &'a Gate>,
    num_qubits: usize,
    measure: bool,
) -> String {
    let mut buffer = Vec::new();
    write_qasm(gates, num_qubits, measure, &mut buffer)
        .expect("Writing to an in-memory buffer should not fail.");
    String::from_utf8(buffer).expect("OpenQASM output should be valid UTF8.")
}
