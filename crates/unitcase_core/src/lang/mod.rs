//! Vocabulary registries.
//!
//! Callers work with **stable IDs** (e.g. [`crate::ErrorKind`]) and look up spellings/metadata via registry
//! tables instead of scattering string comparisons across the harness.
//!
//! ## Examples
//! ```rust
//! use unitcase_core::lang::errors;
//! use unitcase_core::ErrorKind;
//!
//! assert_eq!(errors::from_str("TypeError"), Some(ErrorKind::TypeError));
//! assert_eq!(errors::as_str(ErrorKind::TypeError), "TypeError");
//! ```

pub mod errors;
pub mod registry;
