//! Raise helpers for target functions.
//!
//! The semantic core (`unitcase_core`) owns the exception taxonomy + formatting (`Exception`).
//! These helpers *raise* those exceptions as panics, keeping the text the harness parses back aligned.

use core::fmt::Display;

use unitcase_core::Exception;

/// Raise an exception (implemented as a panic) with canonical formatting.
#[cold]
#[track_caller]
pub fn raise(err: impl Display) -> ! {
    panic!("{err}");
}

/// Raise a `ValueError` with a canonical `ValueError: ...` prefix.
#[cold]
#[track_caller]
pub fn raise_value_error(msg: &str) -> ! {
    raise(Exception::value_error(msg))
}

/// Raise a `TypeError` with a canonical `TypeError: ...` prefix.
#[cold]
#[track_caller]
pub fn raise_type_error(msg: &str) -> ! {
    raise(Exception::type_error(msg))
}

/// Raise a canonical `ZeroDivisionError: division by zero`.
#[cold]
#[track_caller]
pub fn raise_zero_division() -> ! {
    raise(Exception::zero_division())
}
