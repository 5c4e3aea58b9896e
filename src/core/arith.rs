//! Integer arithmetic primitives: product and guarded truncating division.
use crate::types::DivisionResult;

/// Product of the operands. Overflow wraps, matching native signed
/// integer semantics.
pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Truncating-toward-zero division. `None` when the divisor is zero;
/// `i32::MIN / -1` wraps rather than trapping.
pub fn divide(a: i32, b: i32) -> Option<DivisionResult> {
    if b == 0 {
        return None;
    }
    Some(DivisionResult {
        quotient: a.wrapping_div(b),
        remainder: a.wrapping_rem(b),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiply_basics() {
        assert_eq!(multiply(3, 4), 12);
        assert_eq!(multiply(-7, 2), -14);
        assert_eq!(multiply(0, 9), 0);
    }

    #[test]
    fn multiply_wraps_on_overflow() {
        assert_eq!(multiply(i32::MAX, 2), -2);
    }

    #[test]
    fn divide_by_zero_is_absent() {
        assert_eq!(divide(5, 0), None);
        assert_eq!(divide(0, 0), None);
    }

    #[test]
    fn divide_truncates_toward_zero() {
        assert_eq!(
            divide(-7, 2),
            Some(DivisionResult {
                quotient: -3,
                remainder: -1,
            })
        );
        assert_eq!(
            divide(7, -2),
            Some(DivisionResult {
                quotient: -3,
                remainder: 1,
            })
        );
    }

    #[test]
    fn division_identity_holds() {
        for a in [-100, -17, -1, 0, 1, 3, 10, 99, i32::MAX] {
            for b in [-13, -3, -1, 1, 2, 4, 7, 1000] {
                let d = divide(a, b).unwrap();
                assert_eq!(d.quotient.wrapping_mul(b).wrapping_add(d.remainder), a);
                assert!(d.remainder.unsigned_abs() < b.unsigned_abs());
            }
        }
    }

    #[test]
    fn divide_min_by_minus_one_wraps() {
        assert_eq!(
            divide(i32::MIN, -1),
            Some(DivisionResult {
                quotient: i32::MIN,
                remainder: 0,
            })
        );
    }
}
