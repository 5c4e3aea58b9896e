//! High-level, ergonomic library API: run the full parse -> compute pipeline
//! or each stage on its own. Prefer these entrypoints over the low-level
//! `core` modules when embedding ARITH.
use crate::core::arith::{divide, multiply};
use crate::core::parse::parse_pair;
use crate::error::{Error, Result};
use crate::types::{Computation, UserInput};

/// Compute both outputs for the given inputs.
///
/// Establishes the invariant that `div` is present if and only if
/// `input.b != 0`.
pub fn run_computation(input: UserInput) -> Computation {
    Computation {
        input,
        mul: multiply(input.a, input.b),
        div: divide(input.a, input.b),
    }
}

/// Parse raw operands and compute in one step.
///
/// Fails with [`Error::InvalidArgumentCount`] unless exactly two operands
/// are given. A zero divisor is not an error here; it surfaces as an absent
/// `div` in the returned [`Computation`] (see [`all_successful`]).
pub fn evaluate<S: AsRef<str>>(operands: &[S]) -> Result<Computation> {
    let input = parse_pair(operands).ok_or(Error::InvalidArgumentCount {
        got: operands.len(),
    })?;
    Ok(run_computation(input))
}

/// True when every output, division included, was produced.
pub fn all_successful(result: &Computation) -> bool {
    result.div.is_some()
}

/// Division result of a computation, or [`Error::DivisionByZero`] when the
/// divisor was zero. Callers that must not proceed without a quotient go
/// through this instead of unwrapping the optional.
pub fn require_division(result: &Computation) -> Result<crate::types::DivisionResult> {
    result.div.ok_or(Error::DivisionByZero { a: result.input.a })
}
