//! Execution engine: runs every registered case against the target under fault isolation.
//!
//! For each case, in registration order:
//! 1. start the timer, call the target inside `catch_unwind`, stop the timer (raising time included);
//! 2. classify the call into an [`Outcome`]: a returned value, or a raised exception (an `Err` return or a panic);
//! 3. report an exception the case did not expect to the diagnostic sink, and abort the run when verbose;
//! 4. apply the case criterion to the raw `(actual, expected)` pair and record a [`ResultRecord`].
//!
//! An exception case whose call returns normally is not special-cased: the returned value is fed to the criterion
//! like any other outcome.
//!
//! A criterion that panics aborts the run with [`AbortRun::CriterionPanicked`]; it is never recorded as a target
//! failure.
//!
//! Panics caught here never reach the process panic hook: the only stderr output for a failing case is the
//! diagnostic line. Panics outside an isolated call are still reported by the previously installed hook.

use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use unitcase_core::{ErrorKind, Exception, Value};

use crate::diagnostics::{DiagnosticSink, UnexpectedException};
use crate::registry::Case;
use crate::timer::Timer;

/// Signature of a target function.
pub type TargetFn = dyn Fn(&[Value]) -> Result<Value, Exception>;

/// The function under test plus the name used in titles and diagnostics.
pub struct Target {
    name: String,
    func: Box<TargetFn>,
}

impl Target {
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, Exception> + 'static,
    {
        Self {
            name: name.into(),
            func: Box::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Call the target, capturing both `Err` returns and panics.
    pub fn invoke(&self, arguments: &[Value]) -> Outcome {
        match catch_quietly(|| (self.func)(arguments)) {
            Ok(Ok(value)) => Outcome::Returned(value),
            Ok(Err(exception)) => Outcome::Raised(exception),
            Err(payload) => Outcome::Raised(exception_from_panic(payload.as_ref())),
        }
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Tagged result of one isolated target call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Returned(Value),
    Raised(Exception),
}

impl Outcome {
    pub fn is_raised(&self) -> bool {
        matches!(self, Outcome::Raised(_))
    }

    /// Split into the reported value and its exception flag.
    pub fn into_parts(self) -> (Value, bool) {
        match self {
            Outcome::Returned(value) => (value, false),
            Outcome::Raised(exception) => (Value::Exception(exception), true),
        }
    }
}

/// The engine's output for one executed case.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub arguments: Vec<Value>,
    pub actual: Value,
    pub actual_is_exception: bool,
    pub expected: Value,
    pub expected_is_exception: bool,
    pub success: bool,
    pub elapsed_ms: f64,
}

/// Signal that a run stopped before every case was executed.
#[derive(Debug, Clone, PartialEq)]
pub enum AbortRun {
    /// Verbose mode hit an exception in a value case.
    UnexpectedException {
        case: usize,
        arguments: Vec<Value>,
        exception: Exception,
    },
    /// The criterion itself panicked.
    CriterionPanicked { case: usize, criterion: String, message: String },
}

/// Execute `cases` in order against `target`.
///
/// ## Returns
/// - `Ok(records)`: one record per case, in registration order.
/// - `Err(AbortRun)`: the run stopped early; no records are returned.
pub fn execute(
    target: &Target,
    cases: &[Case],
    timer: &mut Timer,
    diagnostics: &mut dyn DiagnosticSink,
    verbose: bool,
) -> Result<Vec<ResultRecord>, AbortRun> {
    let mut records = Vec::with_capacity(cases.len());

    for (index, case) in cases.iter().enumerate() {
        timer.start();
        let outcome = target.invoke(case.arguments());
        timer.stop();
        let elapsed_ms = timer.elapsed_ms();

        if let Outcome::Raised(exception) = &outcome {
            if !case.expects_exception() {
                tracing::warn!(
                    case = index,
                    function = target.name(),
                    kind = %exception.kind,
                    "unexpected exception"
                );
                diagnostics.unexpected_exception(&UnexpectedException {
                    function: target.name(),
                    arguments: case.arguments(),
                    exception,
                });
                if verbose {
                    return Err(AbortRun::UnexpectedException {
                        case: index,
                        arguments: case.arguments().to_vec(),
                        exception: exception.clone(),
                    });
                }
            }
        }

        let (actual, actual_is_exception) = outcome.into_parts();
        let success = evaluate(case, index, &actual)?;
        tracing::debug!(case = index, elapsed_ms, success, "case executed");

        records.push(ResultRecord {
            arguments: case.arguments().to_vec(),
            actual,
            actual_is_exception,
            expected: case.expected().clone(),
            expected_is_exception: case.expects_exception(),
            success,
            elapsed_ms,
        });
    }

    Ok(records)
}

fn evaluate(case: &Case, index: usize, actual: &Value) -> Result<bool, AbortRun> {
    let criterion = case.criterion();
    catch_quietly(|| criterion.evaluate(actual, case.expected())).map_err(|payload| {
        AbortRun::CriterionPanicked {
            case: index,
            criterion: criterion.name().to_string(),
            message: panic_message(payload.as_ref()),
        }
    })
}

thread_local! {
    static QUIET_PANICS: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Wrap the current panic hook so it skips panics raised while this thread is inside [`catch_quietly`].
///
/// The hook is process-global; the mute flag is per thread, so concurrent runs do not silence each other.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !QUIET_PANICS.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

/// `catch_unwind` with the panic hook muted on this thread for the duration of `f`.
fn catch_quietly<R>(f: impl FnOnce() -> R) -> std::thread::Result<R> {
    install_quiet_hook();
    let was_quiet = QUIET_PANICS.with(|quiet| quiet.replace(true));
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    QUIET_PANICS.with(|quiet| quiet.set(was_quiet));
    result
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "<non-string panic payload>".to_string()
    }
}

/// Recover an exception from a panic payload.
///
/// Text in the canonical `Kind: message` form keeps its kind; anything else becomes a `RuntimeError`.
pub fn exception_from_panic(payload: &(dyn Any + Send)) -> Exception {
    if let Some(exception) = payload.downcast_ref::<Exception>() {
        return exception.clone();
    }
    let message = panic_message(payload);
    if payload.is::<&str>() || payload.is::<String>() {
        Exception::parse(&message)
    } else {
        Exception::new(ErrorKind::RuntimeError, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criterion::Criterion;
    use crate::diagnostics::CollectingSink;
    use crate::registry::CaseRegistry;

    fn divide() -> Target {
        Target::new("divide", |args| unitcase_stdlib::py_div_values(&args[0], &args[1]))
    }

    #[test]
    fn test_invoke_classifies_err_return() {
        let outcome = divide().invoke(&[Value::Int(1), Value::Int(0)]);
        assert_eq!(outcome, Outcome::Raised(Exception::zero_division()));
    }

    #[test]
    fn test_invoke_classifies_panic_with_canonical_text() {
        let target = Target::new("boom", |_| unitcase_stdlib::raise_value_error("bad"));
        assert_eq!(target.invoke(&[]), Outcome::Raised(Exception::value_error("bad")));
    }

    #[test]
    fn test_invoke_classifies_plain_panic_as_runtime_error() {
        let target = Target::new("boom", |args| Ok(args[3].clone()));
        match target.invoke(&[]) {
            Outcome::Raised(e) => assert_eq!(e.kind, ErrorKind::RuntimeError),
            other => panic!("expected a raised outcome, got {other:?}"),
        }
    }

    #[test]
    fn test_invoke_mutes_hook_only_while_target_runs() {
        let seen_inside = std::rc::Rc::new(Cell::new(false));
        let flag = seen_inside.clone();
        let target = Target::new("div", move |args| {
            flag.set(QUIET_PANICS.with(Cell::get));
            Ok(Value::Float(unitcase_stdlib::py_div(
                args[0].as_f64().unwrap_or_default(),
                args[1].as_f64().unwrap_or_default(),
            )))
        });

        let outcome = target.invoke(&[Value::Int(1), Value::Int(0)]);

        assert_eq!(outcome, Outcome::Raised(Exception::zero_division()));
        assert!(seen_inside.get());
        assert!(!QUIET_PANICS.with(Cell::get));
    }

    #[test]
    fn test_panic_with_exception_payload_keeps_it() {
        let payload: Box<dyn Any + Send> = Box::new(Exception::key_error("k"));
        assert_eq!(exception_from_panic(payload.as_ref()), Exception::key_error("k"));
    }

    #[test]
    fn test_panic_with_opaque_payload() {
        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        let e = exception_from_panic(payload.as_ref());
        assert_eq!(e, Exception::new(ErrorKind::RuntimeError, "<non-string panic payload>"));
    }

    #[test]
    fn test_exception_case_that_returns_is_fed_to_criterion() {
        let mut registry = CaseRegistry::new();
        registry
            .register_exception(
                vec![1, 2].into(),
                Exception::bare(ErrorKind::ZeroDivisionError).into(),
                Criterion::type_match(),
            )
            .unwrap();
        let mut sink = CollectingSink::new();

        let records = execute(&divide(), registry.cases(), &mut Timer::new(), &mut sink, true).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].actual, Value::Float(0.5));
        assert!(!records[0].actual_is_exception);
        assert!(records[0].expected_is_exception);
        assert!(!records[0].success);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_verbose_abort_stops_at_first_unexpected_exception() {
        let mut registry = CaseRegistry::new();
        registry.register_value(vec![1, 0].into(), 0.into(), Criterion::equality()).unwrap();
        registry.register_value(vec![2, 0].into(), 0.into(), Criterion::equality()).unwrap();
        let mut sink = CollectingSink::new();

        let abort = execute(&divide(), registry.cases(), &mut Timer::new(), &mut sink, true).unwrap_err();

        assert_eq!(
            abort,
            AbortRun::UnexpectedException {
                case: 0,
                arguments: vec![Value::Int(1), Value::Int(0)],
                exception: Exception::zero_division(),
            }
        );
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_panicking_criterion_aborts_regardless_of_verbosity() {
        let mut registry = CaseRegistry::new();
        let strict = Criterion::custom("strict", |_, _| panic!("comparison exploded"));
        registry.register_value(vec![1, 1].into(), 1.into(), strict).unwrap();

        for verbose in [true, false] {
            let abort = execute(
                &divide(),
                registry.cases(),
                &mut Timer::new(),
                &mut CollectingSink::new(),
                verbose,
            )
            .unwrap_err();
            assert_eq!(
                abort,
                AbortRun::CriterionPanicked {
                    case: 0,
                    criterion: "strict".to_string(),
                    message: "comparison exploded".to_string(),
                }
            );
        }
    }
}
