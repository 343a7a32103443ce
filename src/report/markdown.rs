//! Markdown renderer (`report_type = "md"`).
//!
//! Layout: a `### {title}:` heading, then a five-column table. Normal values are shown as `` `repr` `` code spans,
//! exception payloads as red HTML spans, pass/fail as green `*ok*` / red `***fail***`, and timing as lightgray
//! milliseconds with two decimals. An empty report renders `no test case results for {function}.` instead of a table.

use std::io::{self, Write};

use unitcase_core::Value;

use super::{Renderer, Report};
use crate::engine::ResultRecord;
use crate::error::HarnessError;

const ALIGNMENT_ROW: &str = "| :-------- | :----- | :------- | -- | -- |";

/// Writes markdown reports to `W`.
#[derive(Debug)]
pub struct MarkdownRenderer<W: Write> {
    out: W,
}

impl MarkdownRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> MarkdownRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for MarkdownRenderer<W> {
    fn present(&mut self, report: &Report<'_>) -> Result<(), HarnessError> {
        let markdown = render_markdown(report);
        self.out.write_all(markdown.as_bytes())?;
        if !markdown.ends_with('\n') {
            self.out.write_all(b"\n")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// `` `repr` `` code span.
pub fn code_format(value: &Value) -> String {
    format!("`{}`", escape_cell(&value.repr()))
}

/// HTML color span.
pub fn colorize(msg: &str, color: &str) -> String {
    format!("<span style=\"color:{color}\">{msg}</span>")
}

/// Render a whole report to a markdown string.
pub fn render_markdown(report: &Report<'_>) -> String {
    if report.is_empty() {
        return format!("no test case results for {}.", report.function_name);
    }

    let mut md = format!("### {}:\n\n", report.title);
    md.push_str(&format!("| {} |\n", report.headers.join(" | ")));
    md.push_str(ALIGNMENT_ROW);
    md.push('\n');
    for record in report.rows {
        md.push_str(&format!("| {} |\n", render_row(record).join(" | ")));
    }
    md
}

fn render_row(record: &ResultRecord) -> [String; 5] {
    let arguments = record.arguments.iter().map(code_format).collect::<Vec<_>>().join(", ");
    let success = if record.success {
        colorize("*ok*", "green")
    } else {
        colorize("***fail***", "red")
    };
    [
        arguments,
        outcome_cell(&record.actual, record.actual_is_exception),
        outcome_cell(&record.expected, record.expected_is_exception),
        success,
        colorize(&format!("{:.2}", record.elapsed_ms), "lightgray"),
    ]
}

fn outcome_cell(value: &Value, is_exception: bool) -> String {
    if is_exception {
        colorize(&escape_cell(&value.repr()), "red")
    } else {
        code_format(value)
    }
}

// `|` would end the table cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
