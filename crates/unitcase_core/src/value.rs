//! Dynamically typed values passed across the target-function boundary.
//!
//! ## Notes
//! - **Equality** follows Python: `bool`, `int` and `float` compare numerically (`1 == 1.0`, `True == 1`), lists and
//!   tuples compare element-wise but never equal each other, and `NaN` is unequal to everything. Exceptions compare
//!   by kind and message.
//! - **Type names** follow Python spelling; an exception's type name is its kind (`"ZeroDivisionError"`).
//! - **`repr`** follows Python's `repr` for the supported types and is what renderers show.

use std::fmt;

use crate::errors::Exception;

/// A value handed to or returned from a target function.
#[derive(Debug, Clone)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Exception(Exception),
}

impl Value {
    /// Python-like type name (e.g. `"int"`, `"NoneType"`, `"ZeroDivisionError"`).
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Exception(e) => e.kind.as_str(),
        }
    }

    /// Whether this value can serve as a positional argument sequence.
    ///
    /// Strings are deliberately excluded.
    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::List(_) | Value::Tuple(_))
    }

    /// Borrow the items of a list or tuple.
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_exception(&self) -> Option<&Exception> {
        match self {
            Value::Exception(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_exception(&self) -> bool {
        matches!(self, Value::Exception(_))
    }

    /// Numeric view for `bool`/`int`/`float`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Bool(b) => Some(i64::from(*b)),
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Python-like `repr`.
    ///
    /// ## Examples
    /// ```rust
    /// use unitcase_core::Value;
    ///
    /// assert_eq!(Value::from("x").repr(), "'x'");
    /// assert_eq!(Value::from(vec![1, 2]).repr(), "[1, 2]");
    /// assert_eq!(Value::Tuple(vec![Value::Int(1)]).repr(), "(1,)");
    /// assert_eq!(Value::from(5.0).repr(), "5.0");
    /// ```
    pub fn repr(&self) -> String {
        match self {
            Value::None => "None".to_string(),
            Value::Bool(true) => "True".to_string(),
            Value::Bool(false) => "False".to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => float_repr(*f),
            Value::Str(s) => str_repr(s),
            Value::List(items) => format!("[{}]", join_repr(items)),
            Value::Tuple(items) if items.len() == 1 => format!("({},)", items[0].repr()),
            Value::Tuple(items) => format!("({})", join_repr(items)),
            Value::Exception(e) => e.repr(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Exception(a), Value::Exception(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(i), Value::Float(f)) | (Value::Float(f), Value::Int(i)) => int_eq_float(*i, *f),
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }
}

/// Exact `int == float`: the float must be integral, inside `i64` range, and name the same integer.
fn int_eq_float(i: i64, f: f64) -> bool {
    // -(i64::MIN as f64) is 2^63, the first float past i64::MAX.
    f.fract() == 0.0 && f >= i64::MIN as f64 && f < -(i64::MIN as f64) && f as i64 == i
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Exception(e) => write!(f, "{e}"),
            other => f.write_str(&other.repr()),
        }
    }
}

/// Join item reprs with `", "` (the argument-list form used in diagnostics).
pub fn join_repr(items: &[Value]) -> String {
    items.iter().map(Value::repr).collect::<Vec<_>>().join(", ")
}

/// Python-like string `repr`: single quotes unless the text contains `'` but no `"`.
pub fn str_repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

fn float_repr(f: f64) -> String {
    if f.is_nan() {
        "nan".to_string()
    } else if f.is_infinite() {
        let sign = if f > 0.0 { "" } else { "-" };
        format!("{sign}inf")
    } else {
        // Debug already switches to exponent form at the same magnitudes; only the exponent spelling differs.
        let text = format!("{f:?}");
        match text.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = exponent.strip_prefix('-').map_or(("+", exponent), |digits| ("-", digits));
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => text,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Exception> for Value {
    fn from(e: Exception) -> Self {
        Value::Exception(e)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::None
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::None, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_numeric_cross_equality() {
        assert_eq!(Value::Int(1), Value::Float(1.0));
        assert_eq!(Value::Bool(true), Value::Int(1));
        assert_ne!(Value::Int(1), Value::Str("1".into()));
    }

    #[test]
    fn test_int_float_equality_is_exact_beyond_f64_precision() {
        let two_53 = 2_f64.powi(53);
        assert_eq!(Value::Int(1 << 53), Value::Float(two_53));
        assert_ne!(Value::Int((1 << 53) + 1), Value::Float(two_53));
        assert_ne!(Value::Float(two_53), Value::Int((1 << 53) + 1));
        assert_ne!(Value::Int(i64::MAX), Value::Float(2_f64.powi(63)));
        assert_eq!(Value::Int(i64::MIN), Value::Float(-(2_f64.powi(63))));
        assert_ne!(Value::Int(3), Value::Float(3.5));
        assert_ne!(Value::Int(0), Value::Float(f64::NAN));
    }

    #[test]
    fn test_float_repr_uses_python_exponent_form() {
        assert_eq!(Value::Float(1e16).repr(), "1e+16");
        assert_eq!(Value::Float(1e-7).repr(), "1e-07");
        assert_eq!(Value::Float(-2.5e-10).repr(), "-2.5e-10");
        assert_eq!(Value::Float(1.5e300).repr(), "1.5e+300");
        assert_eq!(Value::Float(1e15).repr(), "1000000000000000.0");
        assert_eq!(Value::Float(0.0001).repr(), "0.0001");
        assert_eq!(Value::Float(f64::NEG_INFINITY).repr(), "-inf");
    }

    #[test]
    fn test_nan_is_not_equal_to_itself() {
        assert_ne!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    }

    #[test]
    fn test_list_and_tuple_never_equal() {
        let items = vec![Value::Int(1)];
        assert_ne!(Value::List(items.clone()), Value::Tuple(items));
    }

    #[test]
    fn test_exception_equality_is_structural() {
        assert_eq!(Value::from(Exception::zero_division()), Value::from(Exception::zero_division()));
        assert_ne!(
            Value::from(Exception::bare(ErrorKind::ZeroDivisionError)),
            Value::from(Exception::zero_division())
        );
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::None.type_name(), "NoneType");
        assert_eq!(Value::from(3).type_name(), "int");
        assert_eq!(Value::from(3.0).type_name(), "float");
        assert_eq!(Value::from(Exception::type_error("x")).type_name(), "TypeError");
    }

    #[test]
    fn test_is_sequence_excludes_strings() {
        assert!(Value::from(vec![1]).is_sequence());
        assert!(Value::Tuple(vec![]).is_sequence());
        assert!(!Value::from("abc").is_sequence());
        assert!(!Value::from(3).is_sequence());
    }

    #[test]
    fn test_repr_matches_python() {
        assert_eq!(Value::None.repr(), "None");
        assert_eq!(Value::Bool(false).repr(), "False");
        assert_eq!(Value::Float(0.1 + 0.2).repr(), "0.30000000000000004");
        assert_eq!(Value::Float(f64::NEG_INFINITY).repr(), "-inf");
        assert_eq!(Value::from("it's").repr(), "\"it's\"");
        assert_eq!(Value::from("a\nb").repr(), "'a\\nb'");
        assert_eq!(Value::Tuple(vec![]).repr(), "()");
        assert_eq!(Value::from(vec!["x", "y"]).repr(), "['x', 'y']");
    }

    #[test]
    fn test_display_prints_strings_unquoted() {
        assert_eq!(Value::from("x").to_string(), "x");
        assert_eq!(Value::from(Exception::zero_division()).to_string(), "ZeroDivisionError: division by zero");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i64>), Value::None);
        assert_eq!(Value::from(Some(2)), Value::Int(2));
    }
}
