//! Python-like numeric operations for target functions.
//!
//! This module provides:
//! - A raw kernel (`py_div`) that panics with `ZeroDivisionError: division by zero`, for targets that fail by panicking.
//! - [`Value`]-level operators (`py_add`, `py_div_values`) that return `Result<Value, Exception>` instead of panicking,
//!   with `TypeError` for unsupported operand types.
//!
//! ## Examples
//!
//! ```rust
//! use unitcase_core::Value;
//! use unitcase_stdlib::num::{py_add, py_div};
//!
//! assert!((py_div(7_i64, 2_i64) - 3.5).abs() < 1e-10);
//! assert_eq!(py_add(&Value::Int(2), &Value::Float(0.5)), Ok(Value::Float(2.5)));
//! ```

use unitcase_core::{Exception, Value};

use crate::errors::raise_zero_division;

mod sealed {
    /// Sealing trait to restrict external implementations.
    pub trait Sealed {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}

    /// Unified numeric trait to allow shared bounds across supported ints/floats.
    pub trait Numeric: Sealed {
        fn to_float(self) -> f64;
    }

    impl Numeric for i64 {
        #[inline]
        fn to_float(self) -> f64 {
            self as f64
        }
    }

    impl Numeric for f64 {
        #[inline]
        fn to_float(self) -> f64 {
            self
        }
    }
}

/// Python-like division: always returns `f64`.
///
/// # Panics
///
/// Panics with `ZeroDivisionError: division by zero` if `rhs` is zero.
pub fn py_div<L, R>(lhs: L, rhs: R) -> f64
where
    L: sealed::Numeric,
    R: sealed::Numeric,
{
    let r = rhs.to_float();
    if r == 0.0 {
        raise_zero_division();
    }
    lhs.to_float() / r
}

/// Python-like `+` over values.
///
/// - `int + int` stays `int` (falls back to `float` on overflow), any other numeric mix yields `float`.
/// - `str + str` concatenates, `list + list` and `tuple + tuple` extend.
/// - Anything else is a `TypeError`.
pub fn py_add(lhs: &Value, rhs: &Value) -> Result<Value, Exception> {
    match (lhs, rhs) {
        (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
        (Value::List(a), Value::List(b)) => Ok(Value::List(a.iter().chain(b).cloned().collect())),
        (Value::Tuple(a), Value::Tuple(b)) => Ok(Value::Tuple(a.iter().chain(b).cloned().collect())),
        _ => match (lhs.as_i64(), rhs.as_i64(), lhs.as_f64(), rhs.as_f64()) {
            (Some(a), Some(b), _, _) => Ok(a
                .checked_add(b)
                .map_or_else(|| Value::Float(a as f64 + b as f64), Value::Int)),
            (_, _, Some(a), Some(b)) => Ok(Value::Float(a + b)),
            _ => Err(unsupported("+", lhs, rhs)),
        },
    }
}

/// Python-like `/` over values: always `float`, `ZeroDivisionError` on a zero divisor.
pub fn py_div_values(lhs: &Value, rhs: &Value) -> Result<Value, Exception> {
    match (lhs.as_f64(), rhs.as_f64()) {
        (Some(_), Some(b)) if b == 0.0 => Err(Exception::zero_division()),
        (Some(a), Some(b)) => Ok(Value::Float(a / b)),
        _ => Err(unsupported("/", lhs, rhs)),
    }
}

fn unsupported(op: &str, lhs: &Value, rhs: &Value) -> Exception {
    Exception::type_error(format!(
        "unsupported operand type(s) for {op}: '{}' and '{}'",
        lhs.type_name(),
        rhs.type_name()
    ))
}
