//! Report boundary between the harness and its renderers.
//!
//! The harness hands renderers raw typed records, never pre-formatted strings, so output formats stay swappable.
//! An empty record list is an explicit state ([`Report::is_empty`]) that renderers present differently from an
//! empty table.
//!
//! ## Renderers
//!
//! - [`MarkdownRenderer`]: the built-in `"md"` report type.
//! - [`JsonRenderer`]: machine-readable output, selected by passing it to [`crate::UnitTest::run_with`].

mod json;
mod markdown;

pub use json::{JsonRenderer, record_to_json, report_to_json, value_to_json};
pub use markdown::{MarkdownRenderer, code_format, colorize, render_markdown};

use crate::engine::ResultRecord;
use crate::error::HarnessError;

/// Column headers of a result table.
pub const COLUMN_HEADERS: [&str; 5] = ["Arguments", "Output", "Expected", "✓", "ms"];

/// Everything a renderer needs to present one run.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub title: &'a str,
    pub function_name: &'a str,
    pub headers: &'a [&'a str],
    pub rows: &'a [ResultRecord],
}

impl<'a> Report<'a> {
    pub fn new(title: &'a str, function_name: &'a str, rows: &'a [ResultRecord]) -> Self {
        Self {
            title,
            function_name,
            headers: &COLUMN_HEADERS,
            rows,
        }
    }

    /// The "no results" state.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn passed(&self) -> usize {
        self.rows.iter().filter(|r| r.success).count()
    }

    pub fn failed(&self) -> usize {
        self.rows.len() - self.passed()
    }
}

/// Presentation collaborator consuming a [`Report`].
pub trait Renderer {
    fn present(&mut self, report: &Report<'_>) -> Result<(), HarnessError>;
}

#[cfg(test)]
pub(crate) mod fixtures {
    use unitcase_core::{ErrorKind, Exception, Value};

    use crate::engine::ResultRecord;

    pub fn passing_add() -> ResultRecord {
        ResultRecord {
            arguments: vec![Value::Int(2), Value::Int(3)],
            actual: Value::Int(5),
            actual_is_exception: false,
            expected: Value::Int(5),
            expected_is_exception: false,
            success: true,
            elapsed_ms: 0.0042,
        }
    }

    pub fn expected_zero_division() -> ResultRecord {
        ResultRecord {
            arguments: vec![Value::Int(1), Value::Int(0)],
            actual: Value::Exception(Exception::zero_division()),
            actual_is_exception: true,
            expected: Value::Exception(Exception::bare(ErrorKind::ZeroDivisionError)),
            expected_is_exception: true,
            success: true,
            elapsed_ms: 0.128,
        }
    }

    pub fn unexpected_type_error() -> ResultRecord {
        ResultRecord {
            arguments: vec![Value::from("x")],
            actual: Value::Exception(Exception::type_error("unsupported operand")),
            actual_is_exception: true,
            expected: Value::Int(42),
            expected_is_exception: false,
            success: false,
            elapsed_ms: 1.5,
        }
    }
}
