//! Panics caught while running cases must not reach the process panic hook.
//!
//! Kept in its own test binary: it installs a process-wide hook.

use std::panic;
use std::sync::atomic::{AtomicUsize, Ordering};

use unitcase::{CollectingSink, UnitTest};
use unitcase_core::{ErrorKind, Exception, Value};
use unitcase_stdlib::py_div;

static HOOK_CALLS: AtomicUsize = AtomicUsize::new(0);

#[test]
fn caught_target_panics_bypass_the_installed_hook() {
    panic::set_hook(Box::new(|_| {
        HOOK_CALLS.fetch_add(1, Ordering::SeqCst);
    }));

    let sink = CollectingSink::new();
    let mut test = UnitTest::new("divide", |args: &[Value]| match (args[0].as_f64(), args[1].as_f64()) {
        (Some(a), Some(b)) => Ok(Value::Float(py_div(a, b))),
        _ => Err(Exception::type_error("operands must be numbers")),
    })
    .with_diagnostics(sink.clone());
    test.register_exception(vec![1, 0], Exception::bare(ErrorKind::ZeroDivisionError))
        .unwrap();
    test.register_value(vec![2, 0], 0).unwrap();

    let records = test.execute(false).unwrap();

    assert!(records[0].success);
    assert!(records[1].actual_is_exception);
    assert_eq!(HOOK_CALLS.load(Ordering::SeqCst), 0);
    assert_eq!(sink.len(), 1, "only the unexpected exception is reported");

    let _ = panic::catch_unwind(|| panic!("outside the harness"));
    assert_eq!(HOOK_CALLS.load(Ordering::SeqCst), 1);

    let _ = panic::take_hook();
}
