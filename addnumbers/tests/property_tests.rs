use addnumbers::{add, add_with_policy, AddNumbersError, OverflowPolicy};
use proptest::prelude::*;

// Operands whose sum always fits in i64
fn operand() -> impl Strategy<Value = i64> {
    (i64::MIN / 2)..=(i64::MAX / 2)
}

proptest! {
    #[test]
    fn test_result_is_sum(a in operand(), b in operand()) {
        let sum = add(a, b).unwrap();
        prop_assert_eq!(sum.result, a + b);
    }

    #[test]
    fn test_inputs_are_echoed(a in operand(), b in operand()) {
        let sum = add(a, b).unwrap();
        prop_assert_eq!(sum.number1, a);
        prop_assert_eq!(sum.number2, b);
    }

    #[test]
    fn test_operation_string(a in operand(), b in operand()) {
        let sum = add(a, b).unwrap();
        prop_assert_eq!(sum.operation, format!("{} + {} = {}", a, b, a + b));
    }

    #[test]
    fn test_commutative(a in operand(), b in operand()) {
        prop_assert_eq!(add(a, b).unwrap().result, add(b, a).unwrap().result);
    }

    #[test]
    fn test_zero_is_identity(a: i64) {
        prop_assert_eq!(add(a, 0).unwrap().result, a);
    }

    #[test]
    fn test_error_policy_matches_checked_add(a: i64, b: i64) {
        match (a.checked_add(b), add(a, b)) {
            (Some(expected), Ok(sum)) => prop_assert_eq!(sum.result, expected),
            (None, Err(AddNumbersError::ArithmeticOverflow { number1, number2 })) => {
                prop_assert_eq!(number1, a);
                prop_assert_eq!(number2, b);
            }
            (expected, actual) => {
                prop_assert!(false, "checked_add gave {:?}, add gave {:?}", expected, actual);
            }
        }
    }

    #[test]
    fn test_lenient_policies_never_fail(a: i64, b: i64) {
        prop_assert_eq!(
            add_with_policy(a, b, OverflowPolicy::Wrap).unwrap().result,
            a.wrapping_add(b)
        );
        prop_assert_eq!(
            add_with_policy(a, b, OverflowPolicy::Saturate).unwrap().result,
            a.saturating_add(b)
        );
    }
}
