//! Integration tests for `unitcase_stdlib::errors`.
//!
//! These lock in the **canonical panic text** the harness parses back into an `Exception` (`Kind: message`).

use std::panic;

use unitcase_core::{ErrorKind, Exception};
use unitcase_stdlib::errors::{raise, raise_type_error, raise_value_error, raise_zero_division};

fn panic_text(f: impl FnOnce() + panic::UnwindSafe) -> String {
    let payload = panic::catch_unwind(f).expect_err("helper must panic");
    match payload.downcast::<String>() {
        Ok(s) => *s,
        Err(payload) => payload.downcast_ref::<&str>().map(|s| s.to_string()).unwrap_or_default(),
    }
}

#[test]
/// A raised `TypeError` must survive the panic round trip with kind and message intact.
fn raised_type_error_parses_back() {
    let text = panic_text(|| raise_type_error("bad operand"));
    assert_eq!(text, "TypeError: bad operand");
    assert_eq!(Exception::parse(&text), Exception::type_error("bad operand"));
}

#[test]
fn raise_value_error_uses_canonical_prefix() {
    let text = panic_text(|| raise_value_error("cannot convert 'abc' to int"));
    assert_eq!(text, "ValueError: cannot convert 'abc' to int");
}

#[test]
fn raise_zero_division_has_fixed_message() {
    let text = panic_text(|| raise_zero_division());
    assert_eq!(Exception::parse(&text), Exception::zero_division());
}

#[test]
fn raise_accepts_any_exception_descriptor() {
    let text = panic_text(|| raise(Exception::bare(ErrorKind::KeyError)));
    assert_eq!(text, "KeyError");
    assert_eq!(Exception::parse(&text).kind, ErrorKind::KeyError);
}
