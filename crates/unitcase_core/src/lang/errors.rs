//! Builtin exception vocabulary (Python-like).
//!
//! The table is indexed by [`ErrorKind`] discriminant, so entries must stay in declaration order.

use crate::errors::ErrorKind;

use super::registry::LangItemInfo;

/// Metadata for a builtin exception kind.
pub type ExceptionInfo = LangItemInfo<ErrorKind>;

/// Registry of builtin exception kinds.
pub const EXCEPTIONS: &[ExceptionInfo] = &[
    info(
        ErrorKind::Exception,
        "Exception",
        &["BaseException"],
        "Generic failure raised by a target function that does not name a more specific kind.",
    ),
    info(
        ErrorKind::ValueError,
        "ValueError",
        &[],
        "Raised when an operation receives a value of the right type but an invalid value.",
    ),
    info(
        ErrorKind::TypeError,
        "TypeError",
        &[],
        "Raised when an operation receives a value of an inappropriate type.",
    ),
    info(
        ErrorKind::ZeroDivisionError,
        "ZeroDivisionError",
        &[],
        "Raised when dividing or taking modulo by zero.",
    ),
    info(
        ErrorKind::IndexError,
        "IndexError",
        &[],
        "Raised when an index is out of bounds.",
    ),
    info(ErrorKind::KeyError, "KeyError", &[], "Raised when a mapping key is missing."),
    info(
        ErrorKind::AssertionError,
        "AssertionError",
        &[],
        "Raised when an assertion inside the target function fails.",
    ),
    info(
        ErrorKind::RuntimeError,
        "RuntimeError",
        &[],
        "Raised for failures that carry no recognizable kind (e.g. a bare panic message).",
    ),
];

/// Return the canonical spelling for an exception kind (e.g. `"ValueError"`).
#[inline]
pub fn as_str(kind: ErrorKind) -> &'static str {
    info_for(kind).canonical
}

/// Return the user-facing description for an exception kind.
#[inline]
pub fn description(kind: ErrorKind) -> &'static str {
    info_for(kind).description
}

/// Resolve a spelling to an exception kind.
///
/// Matching is case-sensitive.
pub fn from_str(name: &str) -> Option<ErrorKind> {
    EXCEPTIONS.iter().find(|e| e.matches(name)).map(|e| e.id)
}

/// Return full metadata for an exception kind.
#[inline]
pub fn info_for(kind: ErrorKind) -> &'static ExceptionInfo {
    &EXCEPTIONS[kind as usize]
}

const fn info(
    id: ErrorKind,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
) -> ExceptionInfo {
    LangItemInfo {
        id,
        canonical,
        aliases,
        description,
    }
}
