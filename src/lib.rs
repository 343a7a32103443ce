#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
//! unitcase: a small ad-hoc test harness for single functions.
//!
//! Register `(arguments, expected value)` and `(arguments, expected exception)` cases against a target function, run
//! them under fault isolation with per-case timing, judge each one with a pluggable [`Criterion`], and hand the
//! ordered [`ResultRecord`]s to a [`Renderer`].
//!
//! ## Panic Policy
//!
//! - **Production code**: `Result` with `?`; `unwrap`/`expect` are denied outside tests.
//! - **Target functions**: may panic. Panics are caught by the engine and classified like `Err(Exception)` returns;
//!   panic text in the canonical `Kind: message` form keeps its exception kind.
//! - **Criteria**: a panicking criterion aborts the run with [`HarnessError::Criterion`].
//!
//! ## Modules
//!
//! - `timer` - stopwatch
//! - `criterion` - pass/fail predicates
//! - `registry` - case registration and validation
//! - `engine` - isolated execution and outcome classification
//! - `diagnostics` - unexpected-exception side-channel
//! - `report` - report boundary and renderers
//! - `harness` - the `UnitTest` entry point

pub mod config;
pub mod criterion;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod harness;
pub mod registry;
pub mod report;
pub mod timer;

pub use config::{ReportType, RunConfig};
pub use criterion::Criterion;
pub use diagnostics::{CollectingSink, DiagnosticSink, StderrSink, UnexpectedException};
pub use engine::{AbortRun, Outcome, ResultRecord, Target};
pub use error::HarnessError;
pub use harness::UnitTest;
pub use registry::{Case, CaseRegistry, OutcomeKind, RegistrationError};
pub use report::{COLUMN_HEADERS, JsonRenderer, MarkdownRenderer, Renderer, Report};
pub use timer::Timer;
