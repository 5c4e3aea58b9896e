//! Shared data model used across ARITH.
//! Includes `UserInput`, `DivisionResult`, and the `Computation` record
//! carried through the parse -> compute -> report pipeline.
use serde::{Deserialize, Serialize};

/// The two operands, immutable once parsed
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UserInput {
    pub a: i32,
    pub b: i32,
}

/// Truncating integer division outcome: `remainder = a - b * quotient`
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DivisionResult {
    pub quotient: i32,
    pub remainder: i32,
}

/// Full result of one run: inputs plus both outputs.
///
/// `div` is `Some` if and only if `input.b != 0`; the pair is established
/// together in `api::run_computation` and never mutated afterwards.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Computation {
    pub input: UserInput,
    pub mul: i32,
    pub div: Option<DivisionResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_division_serializes_as_null() {
        let computation = Computation {
            input: UserInput { a: 5, b: 0 },
            mul: 0,
            div: None,
        };
        let json = serde_json::to_value(&computation).unwrap();
        assert_eq!(json["div"], serde_json::Value::Null);
        assert_eq!(json["mul"], 0);
    }

    #[test]
    fn present_division_serializes_both_fields() {
        let computation = Computation {
            input: UserInput { a: 10, b: 3 },
            mul: 30,
            div: Some(DivisionResult {
                quotient: 3,
                remainder: 1,
            }),
        };
        let json = serde_json::to_value(&computation).unwrap();
        assert_eq!(json["div"]["quotient"], 3);
        assert_eq!(json["div"]["remainder"], 1);
    }
}
