//! Harness-level error type.

use std::io;

use miette::Diagnostic;
use thiserror::Error;
use unitcase_core::Exception;
use unitcase_core::value::join_repr;

use crate::engine::AbortRun;
use crate::registry::RegistrationError;

/// Errors surfaced to the harness caller.
#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    #[error(transparent)]
    #[diagnostic(code(unitcase::registration))]
    Registration(#[from] RegistrationError),

    #[error("invalid report type '{0}'")]
    #[diagnostic(code(unitcase::report_type), help("supported report types: md"))]
    InvalidReportType(String),

    #[error("unexpected exception {exception} during execution of {function}({arguments})")]
    #[diagnostic(
        code(unitcase::unexpected_exception),
        help("register the case with `register_exception` if the failure is intended, or run non-verbose to record it")
    )]
    UnexpectedException {
        function: String,
        arguments: String,
        exception: Exception,
    },

    #[error("criterion '{criterion}' panicked on case #{case}: {message}")]
    #[diagnostic(code(unitcase::criterion))]
    Criterion {
        case: usize,
        criterion: String,
        message: String,
    },

    #[error("failed to write report: {0}")]
    #[diagnostic(code(unitcase::io))]
    Io(#[from] io::Error),

    #[error("failed to serialize report: {0}")]
    #[diagnostic(code(unitcase::serialize))]
    Serialize(#[from] serde_json::Error),
}

impl HarnessError {
    /// Attach the target name to an engine abort.
    pub fn from_abort(function: &str, abort: AbortRun) -> Self {
        match abort {
            AbortRun::UnexpectedException {
                arguments, exception, ..
            } => HarnessError::UnexpectedException {
                function: function.to_string(),
                arguments: join_repr(&arguments),
                exception,
            },
            AbortRun::CriterionPanicked {
                case,
                criterion,
                message,
            } => HarnessError::Criterion {
                case,
                criterion,
                message,
            },
        }
    }

    /// The target's exception, when this error is a verbose-mode abort.
    pub fn exception(&self) -> Option<&Exception> {
        match self {
            HarnessError::UnexpectedException { exception, .. } => Some(exception),
            _ => None,
        }
    }
}
