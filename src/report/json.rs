//! JSON renderer.
//!
//! Writes one pretty-printed document per report:
//! `{"title", "function", "empty", "passed", "failed", "rows": [...]}`. Each row keeps the actual/expected pair as
//! `{"value", "is_exception"}`; exceptions serialize as `{"exception": kind, "message": msg}` and non-finite floats
//! as `null`.

use std::io::{self, Write};

use serde_json::{Map, Number, json};
use unitcase_core::Value;

use super::{Renderer, Report};
use crate::engine::ResultRecord;
use crate::error::HarnessError;

/// Writes JSON reports to `W`.
#[derive(Debug)]
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl JsonRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn present(&mut self, report: &Report<'_>) -> Result<(), HarnessError> {
        serde_json::to_writer_pretty(&mut self.out, &report_to_json(report))?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::None => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::Value::Number((*i).into()),
        Value::Float(f) => Number::from_f64(*f).map_or(serde_json::Value::Null, serde_json::Value::Number),
        Value::Str(s) => serde_json::Value::String(s.clone()),
        Value::List(items) | Value::Tuple(items) => serde_json::Value::Array(items.iter().map(value_to_json).collect()),
        Value::Exception(e) => {
            let mut map = Map::new();
            map.insert("exception".into(), e.kind.as_str().into());
            map.insert("message".into(), e.message.clone().into());
            serde_json::Value::Object(map)
        }
    }
}

pub fn record_to_json(record: &ResultRecord) -> serde_json::Value {
    json!({
        "arguments": record.arguments.iter().map(value_to_json).collect::<Vec<_>>(),
        "actual": {
            "value": value_to_json(&record.actual),
            "is_exception": record.actual_is_exception,
        },
        "expected": {
            "value": value_to_json(&record.expected),
            "is_exception": record.expected_is_exception,
        },
        "success": record.success,
        "elapsed_ms": record.elapsed_ms,
    })
}

pub fn report_to_json(report: &Report<'_>) -> serde_json::Value {
    json!({
        "title": report.title,
        "function": report.function_name,
        "empty": report.is_empty(),
        "passed": report.passed(),
        "failed": report.failed(),
        "rows": report.rows.iter().map(record_to_json).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures;
    use unitcase_core::Exception;

    #[test]
    fn test_value_to_json() {
        assert_eq!(value_to_json(&Value::from(vec![1, 2])), json!([1, 2]));
        assert_eq!(value_to_json(&Value::Float(f64::NAN)), json!(null));
        assert_eq!(
            value_to_json(&Value::from(Exception::zero_division())),
            json!({"exception": "ZeroDivisionError", "message": "division by zero"})
        );
    }

    #[test]
    fn test_record_to_json_keeps_raw_values() {
        let record = fixtures::expected_zero_division();
        let value = record_to_json(&record);
        assert_eq!(value["arguments"], json!([1, 0]));
        assert_eq!(value["actual"]["is_exception"], json!(true));
        assert_eq!(value["expected"]["value"]["message"], json!(""));
        assert_eq!(value["success"], json!(true));
    }

    #[test]
    fn test_present_empty_report() {
        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.present(&Report::new("unit test for add", "add", &[])).unwrap();
        let written = String::from_utf8(renderer.into_inner()).unwrap();

        insta::assert_snapshot!(written, @r#"
        {
          "empty": true,
          "failed": 0,
          "function": "add",
          "passed": 0,
          "rows": [],
          "title": "unit test for add"
        }
        "#);
    }
}
