//! Error-reporting side-channel for unexpected exceptions.
//!
//! Diagnostics are kept apart from the pass/fail report: the engine emits exactly one line per unexpected
//! exception, whether or not the run is verbose.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

use unitcase_core::value::join_repr;
use unitcase_core::{Exception, Value};

/// A target function raised while the case expected a normal value.
#[derive(Debug, Clone, Copy)]
pub struct UnexpectedException<'a> {
    pub function: &'a str,
    pub arguments: &'a [Value],
    pub exception: &'a Exception,
}

impl fmt::Display for UnexpectedException<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unexpected exception {} during execution of {}({}):",
            self.exception.kind,
            self.function,
            join_repr(self.arguments)
        )
    }
}

/// Receiver for unexpected-exception diagnostics.
pub trait DiagnosticSink {
    fn unexpected_exception(&mut self, diagnostic: &UnexpectedException<'_>);
}

/// Default sink: one line per diagnostic on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn unexpected_exception(&mut self, diagnostic: &UnexpectedException<'_>) {
        // Nowhere left to report a failing stderr.
        let _ = writeln!(io::stderr().lock(), "{diagnostic}");
    }
}

/// In-memory sink; clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the collected lines.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn unexpected_exception(&mut self, diagnostic: &UnexpectedException<'_>) {
        self.lines.borrow_mut().push(diagnostic.to_string());
    }
}
