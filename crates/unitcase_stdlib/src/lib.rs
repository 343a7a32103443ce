//! Helpers for writing unitcase target functions.
//!
//! Target functions may fail by returning `Err(Exception)` or by panicking. The helpers here panic with the canonical
//! `Kind: message` text so the harness can recover the exception kind from the caught panic, and implement the
//! Python-like numeric operations most test targets need.

#![deny(clippy::unwrap_used)]

pub mod errors;
pub mod num;

pub use errors::{raise, raise_type_error, raise_value_error, raise_zero_division};
pub use num::{py_add, py_div, py_div_values};
