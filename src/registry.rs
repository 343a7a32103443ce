//! Ordered collection of registered cases.
//!
//! Cases are validated on the way in and never change afterwards. Registration order is execution order and report
//! order.

use thiserror::Error;
use unitcase_core::Value;

use crate::criterion::Criterion;

/// Whether a case expects a normal return value or an exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Value,
    Exception,
}

/// Errors raised synchronously by the registration entry points.
///
/// A failed registration leaves the registry untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrationError {
    #[error("expected argument 'args' to be a list or tuple, given {type_name} {repr}")]
    NotASequence { type_name: &'static str, repr: String },

    #[error("expected argument 'expected' to be an exception, given {type_name} {repr}")]
    NotAnException { type_name: &'static str, repr: String },
}

impl RegistrationError {
    fn not_a_sequence(value: &Value) -> Self {
        RegistrationError::NotASequence {
            type_name: value.type_name(),
            repr: value.repr(),
        }
    }

    fn not_an_exception(value: &Value) -> Self {
        RegistrationError::NotAnException {
            type_name: value.type_name(),
            repr: value.repr(),
        }
    }
}

/// One registered case.
#[derive(Debug, Clone)]
pub struct Case {
    arguments: Vec<Value>,
    expected: Value,
    kind: OutcomeKind,
    criterion: Criterion,
}

impl Case {
    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    pub fn expected(&self) -> &Value {
        &self.expected
    }

    pub fn kind(&self) -> OutcomeKind {
        self.kind
    }

    pub fn expects_exception(&self) -> bool {
        self.kind == OutcomeKind::Exception
    }

    pub fn criterion(&self) -> &Criterion {
        &self.criterion
    }
}

/// Cases in registration order.
#[derive(Debug, Clone, Default)]
pub struct CaseRegistry {
    cases: Vec<Case>,
}

impl CaseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a case expecting `expected` to be returned.
    pub fn register_value(
        &mut self,
        arguments: Value,
        expected: Value,
        criterion: Criterion,
    ) -> Result<(), RegistrationError> {
        self.add(arguments, expected, criterion, OutcomeKind::Value)
    }

    /// Register a case expecting the call to raise; `expected` must be an exception.
    pub fn register_exception(
        &mut self,
        arguments: Value,
        expected: Value,
        criterion: Criterion,
    ) -> Result<(), RegistrationError> {
        self.add(arguments, expected, criterion, OutcomeKind::Exception)
    }

    fn add(
        &mut self,
        arguments: Value,
        expected: Value,
        criterion: Criterion,
        kind: OutcomeKind,
    ) -> Result<(), RegistrationError> {
        let arguments = match arguments {
            Value::List(items) | Value::Tuple(items) => items,
            other => return Err(RegistrationError::not_a_sequence(&other)),
        };
        if kind == OutcomeKind::Exception && !expected.is_exception() {
            return Err(RegistrationError::not_an_exception(&expected));
        }

        self.cases.push(Case {
            arguments,
            expected,
            kind,
            criterion,
        });
        Ok(())
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
