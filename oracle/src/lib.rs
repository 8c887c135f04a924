// Copyright (c) Grover Oracle Contributors.
// Licensed under the MIT License.

#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # Grover oracle and diffusion operators
//! Building blocks for a two-qubit Grover's search over a small lookup table: an oracle that
//! marks the entry for a key by phase inversion, and the reflection about average that amplifies
//! the marked amplitude. Both emit gate descriptors from [`grover_circuit`], either returned as a
//! list or appended to a caller-supplied [`Circuit`](grover_circuit::Circuit).

pub mod diffusion;
pub mod error;
pub mod grover;
pub mod mask;
pub mod oracle;
pub mod table;

// Test-only unitary construction for checking emitted gate sequences against the operators they
// are meant to implement.
#[cfg(test)]
mod matrix_testing;


pub use diffusion::{apply_reflection_about_average, reflection_about_average};
pub use error::OracleError;
pub use grover::{search_gates, GroverCircuit};
pub use mask::{uint4, Uint4};
pub use oracle::{
    black_box_check, find_winner, mark_winner, marking_gates, oracle_gates, ProblemType,
};
pub use table::LookupTable;
