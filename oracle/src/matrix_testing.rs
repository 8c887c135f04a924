// Copyright (c) Grover Oracle Contributors.
// Licensed under the MIT License.

use core::f64::consts::FRAC_1_SQRT_2;
use grover_circuit::Gate;
use ndarray::{array, Array1, Array2};
use num_complex::Complex64;
use num_traits::{One, Zero};

/// Returns a unitary matrix representing the `X` operation.
#[must_use]
pub fn x() -> Array2<Complex64> {
    array![
        [Complex64::zero(), Complex64::one()],
        [Complex64::one(), Complex64::zero()]
    ]
}

/// Returns a unitary matrix representing the `Z` operation.
#[must_use]
pub fn z() -> Array2<Complex64> {
    array![
        [Complex64::one(), Complex64::zero()],
        [Complex64::zero(), -Complex64::one()]
    ]
}

/// Returns a unitary matrix representing the single-qubit Hadamard transformation.
#[must_use]
pub fn h() -> Array2<Complex64> {
    array![
        [Complex64::one(), Complex64::one()],
        [Complex64::one(), -Complex64::one()]
    ] * FRAC_1_SQRT_2
}

/// Returns a unitary matrix representing the `S` operation.
#[must_use]
pub fn s() -> Array2<Complex64> {
    array![
        [Complex64::one(), Complex64::zero()],
        [Complex64::zero(), Complex64::i()]
    ]
}

/// Transforms the given matrix into it's adjoint using the transpose of the complex conjugate.
#[must_use]
pub fn adjoint(u: &Array2<Complex64>) -> Array2<Complex64> {
    u.t().map(Complex64::conj)
}

/// Lifts the single-qubit unitary `u` acting on `qubit` into the full `num_qubits` space. Basis
/// state indices treat qubit 0 as the least significant bit.
#[must_use]
pub fn on_qubit(u: &Array2<Complex64>, qubit: usize, num_qubits: usize) -> Array2<Complex64> {
    let dim = 1 << num_qubits;
    let mut full = Array2::zeros((dim, dim));
    for col in 0..dim {
        let in_bit = (col >> qubit) & 1;
        for out_bit in 0..2 {
            let row = (col & !(1 << qubit)) | (out_bit << qubit);
            full[[row, col]] = u[[out_bit, in_bit]];
        }
    }
    full
}

/// Returns the permutation matrix of a controlled-NOT in the full `num_qubits` space.
#[must_use]
pub fn cnot(control: usize, target: usize, num_qubits: usize) -> Array2<Complex64> {
    let dim = 1 << num_qubits;
    let mut full = Array2::zeros((dim, dim));
    for col in 0..dim {
        let row = if (col >> control) & 1 == 1 {
            col ^ (1 << target)
        } else {
            col
        };
        full[[row, col]] = Complex64::one();
    }
    full
}

/// Returns the unitary implemented by applying `gates` in order.
#[must_use]
pub fn unitary(gates: &[Gate], num_qubits: usize) -> Array2<Complex64> {
    let dim = 1 << num_qubits;
    gates
        .iter()
        .fold(Array2::eye(dim), |acc: Array2<Complex64>, gate| {
            let op = match *gate {
                Gate::S(q) => on_qubit(&s(), q, num_qubits),
                Gate::H(q) => on_qubit(&h(), q, num_qubits),
                Gate::X(q) => on_qubit(&x(), q, num_qubits),
                Gate::Cx { control, target } => cnot(control, target, num_qubits),
            };
            op.dot(&acc)
        })
}

/// The two-qubit reference oracle: identity with the sign of `marked` flipped.
#[must_use]
pub fn oracle_reference(marked: usize) -> Array2<Complex64> {
    let mut u = Array2::eye(4);
    u[[marked, marked]] = -Complex64::one();
    u
}

/// The two-qubit reflection about the uniform superposition, `2|s⟩⟨s| - I`.
#[must_use]
pub fn diffusion_reference() -> Array2<Complex64> {
    Array2::from_elem((4, 4), Complex64::new(0.5, 0.0)) - Array2::<Complex64>::eye(4)
}

/// Returns the state reached by applying `gates` to the all-zero state.
#[must_use]
pub fn run_from_zero(gates: &[Gate], num_qubits: usize) -> Array1<Complex64> {
    let mut initial = Array1::zeros(1 << num_qubits);
    initial[0] = Complex64::one();
    unitary(gates, num_qubits).dot(&initial)
}

#[must_use]
pub fn are_equal_to_precision(actual: &Array2<Complex64>, expected: &Array2<Complex64>) -> bool {
    // If we use assert_eq here, we'll get bitten by finite precision.
    (actual - expected).map(|x| x.norm()).sum() <= 1e-10
}

/// Compares two unitaries while ignoring a global phase, which no measurement can observe.
#[must_use]
pub fn are_equal_up_to_global_phase(
    actual: &Array2<Complex64>,
    expected: &Array2<Complex64>,
) -> bool {
    let Some((pivot, _)) = expected
        .indexed_iter()
        .max_by(|(_, a), (_, b)| a.norm().total_cmp(&b.norm()))
    else {
        return actual.is_empty();
    };
    if expected[pivot].norm() <= 1e-10 || actual[pivot].norm() <= 1e-10 {
        return false;
    }
    let phase = actual[pivot] / expected[pivot];
    are_equal_to_precision(actual, &(expected * phase))
}

mod tests {
    use super::*;

    fn is_self_adjoint(arr: &Array2<Complex64>) -> bool {
        arr == adjoint(arr)
    }

    #[test]
    fn h_is_self_adjoint() {
        assert!(is_self_adjoint(&h()));
    }

    #[test]
    fn x_is_self_adjoint() {
        assert!(is_self_adjoint(&x()));
    }

    #[test]
    fn s_squares_to_z() {
        assert_eq!(s().dot(&s()), z());
    }

    #[test]
    fn qubit_zero_is_least_significant() {
        // X on qubit 0 maps |00⟩ to index 1, X on qubit 1 maps it to index 2.
        assert_eq!(on_qubit(&x(), 0, 2)[[1, 0]], Complex64::one());
        assert_eq!(on_qubit(&x(), 1, 2)[[2, 0]], Complex64::one());
    }

    #[test]
    fn cnot_flips_target_when_control_set() {
        let u = cnot(0, 1, 2);
        assert_eq!(u[[0, 0]], Complex64::one());
        assert_eq!(u[[2, 2]], Complex64::one());
        assert_eq!(u[[3, 1]], Complex64::one());
        assert_eq!(u[[1, 3]], Complex64::one());
    }

    #[test]
    fn h_cx_h_is_cz() {
        let gates = [
            Gate::H(1),
            Gate::Cx {
                control: 0,
                target: 1,
            },
            Gate::H(1),
        ];
        assert!(are_equal_to_precision(
            &unitary(&gates, 2),
            &oracle_reference(3)
        ));
    }

    #[test]
    fn global_phase_is_ignored() {
        let u = oracle_reference(1);
        assert!(are_equal_up_to_global_phase(&(&u * -Complex64::one()), &u));
        assert!(are_equal_up_to_global_phase(&(&u * Complex64::i()), &u));
        assert!(!are_equal_up_to_global_phase(&oracle_reference(2), &u));
    }
}
