//! Pass/fail predicates over `(actual, expected)`.
//!
//! A [`Criterion`] is bound to each case at registration time, so the engine never branches on how a case is
//! compared. Three strategies ship with the harness:
//!
//! - [`Criterion::equality`]: Python-like `actual == expected` (default for value cases).
//! - [`Criterion::type_match`]: `type(actual) == type(expected)` (default for exception cases; for exceptions the
//!   type is the exception kind).
//! - [`Criterion::approx`]: `|actual − expected| ≤ ε` for numeric values.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use unitcase_core::Value;

type Predicate = dyn Fn(&Value, &Value) -> bool + Send + Sync;

/// A named binary predicate deciding whether a case passed.
#[derive(Clone)]
pub struct Criterion {
    name: Cow<'static, str>,
    predicate: Arc<Predicate>,
}

impl Criterion {
    /// Wrap an arbitrary predicate.
    ///
    /// ## Examples
    /// ```rust
    /// use unitcase::Criterion;
    /// use unitcase_core::Value;
    ///
    /// let same_len = Criterion::custom("same_len", |a: &Value, b: &Value| {
    ///     a.as_str().map(str::len) == b.as_str().map(str::len)
    /// });
    /// assert!(same_len.evaluate(&"abc".into(), &"xyz".into()));
    /// ```
    pub fn custom<F>(name: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn equality() -> Self {
        Self::custom("equality", |actual, expected| actual == expected)
    }

    pub fn type_match() -> Self {
        Self::custom("type_match", |actual, expected| {
            actual.type_name() == expected.type_name()
        })
    }

    /// Approximate numeric match with tolerance `epsilon`.
    ///
    /// Non-numeric operands never match.
    pub fn approx(epsilon: f64) -> Self {
        Self::custom(format!("approx({epsilon})"), move |actual, expected| {
            match (actual.as_f64(), expected.as_f64()) {
                (Some(a), Some(b)) => (a - b).abs() <= epsilon,
                _ => false,
            }
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply the predicate.
    pub fn evaluate(&self, actual: &Value, expected: &Value) -> bool {
        (self.predicate)(actual, expected)
    }
}

impl fmt::Debug for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Criterion").field(&self.name).finish()
    }
}
