//! `UnitTest`: registers cases against one target function, runs them, and reports the results.
//!
//! A harness owns its target, its case registry, one timer and the most recent result snapshot. Each completed run
//! replaces the snapshot wholesale; a run aborted in verbose mode leaves the previous snapshot untouched and produces
//! no report.
//!
//! ## Examples
//!
//! ```rust
//! use unitcase::{Criterion, MarkdownRenderer, RunConfig, UnitTest};
//! use unitcase_core::{ErrorKind, Exception, Value};
//!
//! let mut test = UnitTest::new("divide", |args: &[Value]| match (args[0].as_f64(), args[1].as_f64()) {
//!     (Some(_), Some(b)) if b == 0.0 => Err(Exception::zero_division()),
//!     (Some(a), Some(b)) => Ok(Value::Float(a / b)),
//!     _ => Err(Exception::type_error("operands must be numbers")),
//! });
//! test.register_value(vec![1, 2], 0.5).unwrap();
//! test.register_value_with(vec![1, 3], 0.33, Criterion::approx(0.01)).unwrap();
//! test.register_exception(vec![1, 0], Exception::bare(ErrorKind::ZeroDivisionError)).unwrap();
//!
//! let mut renderer = MarkdownRenderer::new(Vec::new());
//! test.run_with(&RunConfig::default(), &mut renderer).unwrap();
//! assert!(test.results().iter().all(|r| r.success));
//! ```

use unitcase_core::{Exception, Value};

use crate::config::{ReportType, RunConfig};
use crate::criterion::Criterion;
use crate::diagnostics::{DiagnosticSink, StderrSink};
use crate::engine::{self, ResultRecord, Target};
use crate::error::HarnessError;
use crate::registry::{Case, CaseRegistry};
use crate::report::{MarkdownRenderer, Renderer, Report};
use crate::timer::Timer;

/// Ad-hoc test harness for a single target function.
pub struct UnitTest {
    name: String,
    target: Target,
    registry: CaseRegistry,
    timer: Timer,
    results: Vec<ResultRecord>,
    diagnostics: Box<dyn DiagnosticSink>,
}

impl UnitTest {
    /// Create a harness for a fallible target; the title defaults to `unit test for {function_name}`.
    pub fn new<F>(function_name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, Exception> + 'static,
    {
        let function_name = function_name.into();
        Self {
            name: format!("unit test for {function_name}"),
            target: Target::new(function_name, func),
            registry: CaseRegistry::new(),
            timer: Timer::new(),
            results: Vec::new(),
            diagnostics: Box::new(StderrSink),
        }
    }

    /// Create a harness for a target that signals failure only by panicking.
    pub fn from_fn<F>(function_name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + 'static,
    {
        Self::new(function_name, move |args: &[Value]| Ok(func(args)))
    }

    /// Override the report title.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the unexpected-exception side-channel (stderr by default).
    pub fn with_diagnostics(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.diagnostics = Box::new(sink);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn function_name(&self) -> &str {
        self.target.name()
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register a case expecting `expected` under equality.
    pub fn register_value(
        &mut self,
        arguments: impl Into<Value>,
        expected: impl Into<Value>,
    ) -> Result<(), HarnessError> {
        self.register_value_with(arguments, expected, Criterion::equality())
    }

    pub fn register_value_with(
        &mut self,
        arguments: impl Into<Value>,
        expected: impl Into<Value>,
        criterion: Criterion,
    ) -> Result<(), HarnessError> {
        self.registry
            .register_value(arguments.into(), expected.into(), criterion)?;
        Ok(())
    }

    /// Register a case expecting the call to raise `expected` (compared by type).
    pub fn register_exception(
        &mut self,
        arguments: impl Into<Value>,
        expected: impl Into<Value>,
    ) -> Result<(), HarnessError> {
        self.register_exception_with(arguments, expected, Criterion::type_match())
    }

    pub fn register_exception_with(
        &mut self,
        arguments: impl Into<Value>,
        expected: impl Into<Value>,
        criterion: Criterion,
    ) -> Result<(), HarnessError> {
        self.registry
            .register_exception(arguments.into(), expected.into(), criterion)?;
        Ok(())
    }

    pub fn cases(&self) -> &[Case] {
        self.registry.cases()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    // ========================================================================
    // Execution and reporting
    // ========================================================================

    /// Execute every case and replace the result snapshot.
    ///
    /// ## Errors
    /// - [`HarnessError::UnexpectedException`] when `verbose` and a value case raised.
    /// - [`HarnessError::Criterion`] when a criterion panicked.
    pub fn execute(&mut self, verbose: bool) -> Result<&[ResultRecord], HarnessError> {
        let span = tracing::info_span!("unit_test", name = %self.name, cases = self.registry.len(), verbose);
        let _guard = span.enter();

        let records = engine::execute(
            &self.target,
            self.registry.cases(),
            &mut self.timer,
            self.diagnostics.as_mut(),
            verbose,
        )
        .map_err(|abort| {
            let err = HarnessError::from_abort(self.target.name(), abort);
            tracing::error!(error = %err, "run aborted");
            err
        })?;

        tracing::debug!(
            passed = records.iter().filter(|r| r.success).count(),
            total = records.len(),
            "run complete"
        );
        self.results = records;
        Ok(&self.results)
    }

    /// Result records of the most recent completed run.
    pub fn results(&self) -> &[ResultRecord] {
        &self.results
    }

    /// Report over the most recent results.
    pub fn report(&self) -> Report<'_> {
        Report::new(&self.name, self.target.name(), &self.results)
    }

    /// Execute and render to stdout with the renderer named by `report_type`.
    ///
    /// The report type is validated before any case runs.
    pub fn run(&mut self, report_type: &str, verbose: bool) -> Result<(), HarnessError> {
        let config = RunConfig::parse(report_type, verbose)?;
        match config.report_type {
            ReportType::Markdown => self.run_with(&config, &mut MarkdownRenderer::stdout()),
        }
    }

    /// Execute and hand the report to `renderer`.
    pub fn run_with(&mut self, config: &RunConfig, renderer: &mut dyn Renderer) -> Result<(), HarnessError> {
        self.execute(config.verbose)?;
        renderer.present(&self.report())
    }
}

impl std::fmt::Debug for UnitTest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnitTest")
            .field("name", &self.name)
            .field("target", &self.target)
            .field("cases", &self.registry.len())
            .field("results", &self.results.len())
            .finish_non_exhaustive()
    }
}
