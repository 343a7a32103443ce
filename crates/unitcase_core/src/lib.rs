//! Provide the value model and exception vocabulary shared by the unitcase harness and target helpers.
//!
//! This crate is intentionally small and dependency-free. It contains the pieces that both:
//! - the harness uses to register cases, classify outcomes and compare them, and
//! - target-side helpers (`unitcase_stdlib`) use to raise failures with the same canonical text.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global state, and no harness-specific types.
//! - Current scope: the dynamically typed [`Value`] handed across the target-function boundary, Python-like
//!   equality/`repr`, and the canonical exception taxonomy ([`ErrorKind`], [`Exception`]).

pub mod errors;
pub mod lang;
pub mod value;

pub use errors::{ErrorKind, Exception, ZERO_DIVISION_MSG};
pub use value::Value;
