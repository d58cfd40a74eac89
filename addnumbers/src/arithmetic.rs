//! Integer addition producing a descriptive result record
//!
//! The operation is pure: it reads no shared state and can be called from any
//! number of tasks at once.

use crate::{AddNumbersError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of adding two integers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionResult {
    /// Left operand, echoed unchanged
    pub number1: i64,
    /// Right operand, echoed unchanged
    pub number2: i64,
    /// The computed sum
    pub result: i64,
    /// Human-readable expression, `"<number1> + <number2> = <result>"`
    pub operation: String,
}

impl AdditionResult {
    /// Build a record for an already computed sum
    pub fn new(number1: i64, number2: i64, result: i64) -> Self {
        Self {
            number1,
            number2,
            result,
            operation: format!("{number1} + {number2} = {result}"),
        }
    }
}

impl fmt::Display for AdditionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.operation)
    }
}

/// How a sum that does not fit in `i64` is resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Fail with [`AddNumbersError::ArithmeticOverflow`]
    #[default]
    Error,
    /// Two's-complement wraparound
    Wrap,
    /// Clamp to `i64::MIN` / `i64::MAX`
    Saturate,
}

impl OverflowPolicy {
    /// All accepted policy names
    pub const VARIANTS: [&'static str; 3] = ["error", "wrap", "saturate"];

    /// The canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            OverflowPolicy::Error => "error",
            OverflowPolicy::Wrap => "wrap",
            OverflowPolicy::Saturate => "saturate",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverflowPolicy {
    type Err = AddNumbersError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(OverflowPolicy::Error),
            "wrap" => Ok(OverflowPolicy::Wrap),
            "saturate" => Ok(OverflowPolicy::Saturate),
            other => Err(AddNumbersError::InvalidInput(format!(
                "unknown overflow policy '{other}', expected one of: {}",
                Self::VARIANTS.join(", ")
            ))),
        }
    }
}

/// Add two integers, failing if the sum overflows `i64`
///
/// # Examples
///
/// ```
/// let sum = addnumbers::add(-5, 5).unwrap();
/// assert_eq!(sum.operation, "-5 + 5 = 0");
/// ```
pub fn add(number1: i64, number2: i64) -> Result<AdditionResult> {
    add_with_policy(number1, number2, OverflowPolicy::Error)
}

/// Add two integers, resolving overflow according to `policy`
///
/// Only [`OverflowPolicy::Error`] can fail.
pub fn add_with_policy(
    number1: i64,
    number2: i64,
    policy: OverflowPolicy,
) -> Result<AdditionResult> {
    let result = match number1.checked_add(number2) {
        Some(sum) => sum,
        None => match policy {
            OverflowPolicy::Error => {
                tracing::debug!("Rejecting overflowing sum {} + {}", number1, number2);
                return Err(AddNumbersError::ArithmeticOverflow { number1, number2 });
            }
            OverflowPolicy::Wrap => {
                tracing::warn!("Sum {} + {} overflowed, wrapping", number1, number2);
                number1.wrapping_add(number2)
            }
            OverflowPolicy::Saturate => {
                tracing::warn!("Sum {} + {} overflowed, saturating", number1, number2);
                number1.saturating_add(number2)
            }
        },
    };

    tracing::debug!("Computed {} + {} = {}", number1, number2, result);
    Ok(AdditionResult::new(number1, number2, result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_small_positive() {
        let sum = add(2, 3).unwrap();
        assert_eq!(
            sum,
            AdditionResult {
                number1: 2,
                number2: 3,
                result: 5,
                operation: "2 + 3 = 5".to_string(),
            }
        );
    }

    #[test]
    fn test_add_negative_cancels() {
        let sum = add(-5, 5).unwrap();
        assert_eq!(sum.number1, -5);
        assert_eq!(sum.number2, 5);
        assert_eq!(sum.result, 0);
        assert_eq!(sum.operation, "-5 + 5 = 0");
    }

    #[test]
    fn test_add_zeros() {
        let sum = add(0, 0).unwrap();
        assert_eq!(sum.result, 0);
        assert_eq!(sum.operation, "0 + 0 = 0");
    }

    #[test]
    fn test_add_hundreds() {
        let sum = add(100, 250).unwrap();
        assert_eq!(sum.result, 350);
        assert_eq!(sum.operation, "100 + 250 = 350");
    }

    #[test]
    fn test_add_negative_result_renders_sign() {
        let sum = add(-7, -8).unwrap();
        assert_eq!(sum.operation, "-7 + -8 = -15");
        assert_eq!(sum.to_string(), sum.operation);
    }

    #[test]
    fn test_add_overflow_is_an_error() {
        let err = add(i64::MAX, 1).unwrap_err();
        assert!(matches!(
            err,
            AddNumbersError::ArithmeticOverflow {
                number1: i64::MAX,
                number2: 1
            }
        ));

        let err = add(i64::MIN, -1).unwrap_err();
        assert!(matches!(err, AddNumbersError::ArithmeticOverflow { .. }));
    }

    #[test]
    fn test_add_at_the_edges_without_overflow() {
        assert_eq!(add(i64::MAX, 0).unwrap().result, i64::MAX);
        assert_eq!(add(i64::MIN, i64::MAX).unwrap().result, -1);
    }

    #[test]
    fn test_wrap_policy() {
        let sum = add_with_policy(i64::MAX, 1, OverflowPolicy::Wrap).unwrap();
        assert_eq!(sum.result, i64::MIN);
        assert_eq!(
            sum.operation,
            "9223372036854775807 + 1 = -9223372036854775808"
        );
    }

    #[test]
    fn test_saturate_policy() {
        let high = add_with_policy(i64::MAX, 10, OverflowPolicy::Saturate).unwrap();
        assert_eq!(high.result, i64::MAX);

        let low = add_with_policy(i64::MIN, -10, OverflowPolicy::Saturate).unwrap();
        assert_eq!(low.result, i64::MIN);
    }

    #[test]
    fn test_policies_agree_without_overflow() {
        for policy in [
            OverflowPolicy::Error,
            OverflowPolicy::Wrap,
            OverflowPolicy::Saturate,
        ] {
            assert_eq!(add_with_policy(40, 2, policy).unwrap().result, 42);
        }
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("error".parse::<OverflowPolicy>().unwrap(), OverflowPolicy::Error);
        assert_eq!(" Wrap ".parse::<OverflowPolicy>().unwrap(), OverflowPolicy::Wrap);
        assert_eq!(
            "SATURATE".parse::<OverflowPolicy>().unwrap(),
            OverflowPolicy::Saturate
        );

        let err = "panic".parse::<OverflowPolicy>().unwrap_err();
        assert!(err.to_string().contains("error, wrap, saturate"));
    }

    #[test]
    fn test_result_serializes_with_field_names() {
        let json = serde_json::to_string(&add(2, 3).unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"number1":2,"number2":3,"result":5,"operation":"2 + 3 = 5"}"#
        );
    }
}
