//! Argument parsing primitives: C-style parse-or-zero integer conversion
//! and the exactly-two-operands contract.
use crate::types::UserInput;

/// C-style `atoi` conversion: skip leading whitespace, accept one optional
/// sign, consume the longest digit prefix, ignore the rest. Non-numeric
/// text yields 0. Accumulation wraps on overflow.
pub fn atoi(text: &str) -> i32 {
    let mut rest = text.trim_start();
    let mut negative = false;
    if let Some(stripped) = rest.strip_prefix('-') {
        negative = true;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }

    let mut value: i32 = 0;
    for c in rest.chars() {
        let Some(digit) = c.to_digit(10) else { break };
        value = value.wrapping_mul(10).wrapping_add(digit as i32);
    }

    if negative { value.wrapping_neg() } else { value }
}

/// Build a `UserInput` from raw operands. `None` unless exactly two were
/// given; each operand goes through [`atoi`], so well-formedness beyond
/// "is text" is not checked here.
pub fn parse_pair<S: AsRef<str>>(operands: &[S]) -> Option<UserInput> {
    match operands {
        [a, b] => Some(UserInput {
            a: atoi(a.as_ref()),
            b: atoi(b.as_ref()),
        }),
        _ => None,
    }
}
