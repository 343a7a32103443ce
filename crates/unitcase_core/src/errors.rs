//! Canonical exception taxonomy shared by the harness and target-side helpers.
//!
//! An [`Exception`] is the descriptor a target function fails with. Its canonical text form is `Kind: message`
//! (or just `Kind` for an empty message), which is also the text the `unitcase_stdlib` raise helpers panic with, so a
//! caught panic can be turned back into a descriptor with [`Exception::parse`].

use std::fmt;

use crate::lang;
use crate::value::str_repr;

/// Canonical message for division or modulo by zero.
pub const ZERO_DIVISION_MSG: &str = "division by zero";

/// Identify a builtin exception kind.
///
/// ## Notes
/// - Declaration order is the index into [`lang::errors::EXCEPTIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Exception,
    ValueError,
    TypeError,
    ZeroDivisionError,
    IndexError,
    KeyError,
    AssertionError,
    RuntimeError,
}

impl ErrorKind {
    /// Every kind, in registry order.
    pub const ALL: [ErrorKind; 8] = [
        ErrorKind::Exception,
        ErrorKind::ValueError,
        ErrorKind::TypeError,
        ErrorKind::ZeroDivisionError,
        ErrorKind::IndexError,
        ErrorKind::KeyError,
        ErrorKind::AssertionError,
        ErrorKind::RuntimeError,
    ];

    /// Return the canonical spelling (e.g. `"ZeroDivisionError"`).
    pub fn as_str(self) -> &'static str {
        lang::errors::as_str(self)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describe a raised (or expected) exception: its kind plus a free-form message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Exception {
    pub kind: ErrorKind,
    pub message: String,
}

impl Exception {
    /// Create an exception with a message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Create an exception without a message, e.g. an expected `ZeroDivisionError()`.
    pub fn bare(kind: ErrorKind) -> Self {
        Self::new(kind, String::new())
    }

    pub fn value_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ValueError, message)
    }

    pub fn type_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TypeError, message)
    }

    pub fn index_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IndexError, message)
    }

    pub fn key_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeyError, message)
    }

    /// `ZeroDivisionError: division by zero`.
    pub fn zero_division() -> Self {
        Self::new(ErrorKind::ZeroDivisionError, ZERO_DIVISION_MSG)
    }

    /// Parse the canonical `Kind: message` / `Kind` text form.
    ///
    /// ## Returns
    /// - The matching kind and the remaining message when the prefix names a known kind.
    /// - `RuntimeError` carrying the whole (trimmed) text otherwise.
    ///
    /// ## Examples
    /// ```rust
    /// use unitcase_core::{ErrorKind, Exception};
    ///
    /// let e = Exception::parse("ZeroDivisionError: division by zero");
    /// assert_eq!(e.kind, ErrorKind::ZeroDivisionError);
    /// assert_eq!(e.message, "division by zero");
    ///
    /// assert_eq!(Exception::parse("boom").kind, ErrorKind::RuntimeError);
    /// ```
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if let Some(kind) = lang::errors::from_str(text) {
            return Self::bare(kind);
        }
        if let Some((prefix, message)) = text.split_once(':') {
            if let Some(kind) = lang::errors::from_str(prefix.trim()) {
                return Self::new(kind, message.trim_start());
            }
        }
        Self::new(ErrorKind::RuntimeError, text)
    }

    /// Python-like `repr`: `ZeroDivisionError('division by zero')` or `ZeroDivisionError()`.
    pub fn repr(&self) -> String {
        if self.message.is_empty() {
            format!("{}()", self.kind)
        } else {
            format!("{}({})", self.kind, str_repr(&self.message))
        }
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}

impl std::error::Error for Exception {}
