// Copyright (c) Grover Oracle Contributors.
// Licensed under the MIT License.

use std::ops::Index;

/// An ordered pair of qubit identifiers owned by the caller. Operators address the qubits by
/// position, so `register[0]` and `register[1]` may map to any identifiers in a larger circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Register([usize; 2]);

impl Register {
    /// Creates a register from two distinct qubit identifiers.
    /// # Panics
    ///
    /// Panics if both positions refer to the same qubit, since the controlled gates emitted on
    /// a register would then have a target equal to their control.
    #[must_use]
    pub fn new(q0: usize, q1: usize) -> Self {
        assert!(q0 != q1, "Register qubits must be distinct, got {q0} twice.");
        Self([q0, q1])
    }

    /// Iterates the qubit identifiers in register order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn len(&self) -> usize {
        2
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// The register addressing qubits 0 and 1.
impl Default for Register {
    fn default() -> Self {
        Self([0, 1])
    }
}

impl Index<usize> for Register {
    type Output = usize;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_in_order() {
        let reg = Register::new(4, 2);
        assert_eq!(reg[0], 4);
        assert_eq!(reg[1], 2);
        assert_eq!(reg.iter().collect::<Vec<_>>(), vec![4, 2]);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    #[should_panic(expected = "Register qubits must be distinct")]
    fn rejects_duplicate_qubits() {
        let _ = Register::new(1, 1);
    }

    #[test]
    #[should_panic]
    fn out_of_range_index_panics() {
        let reg = Register::default();
        let _ = reg[2];
    }
}
