//! Run configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::HarnessError;

/// Built-in renderer selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportType {
    /// Five-column markdown table with color-coded pass/fail.
    #[default]
    Markdown,
}

impl ReportType {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportType::Markdown => "md",
        }
    }
}

impl FromStr for ReportType {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md" => Ok(ReportType::Markdown),
            other => Err(HarnessError::InvalidReportType(other.to_string())),
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a run executes and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Renderer used by [`crate::UnitTest::run`]
    pub report_type: ReportType,
    /// Abort on the first unexpected exception instead of recording it
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            report_type: ReportType::Markdown,
            verbose: true,
        }
    }
}

impl RunConfig {
    /// Create a new config with default settings (markdown, verbose)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from a report-type name, rejecting unknown names.
    pub fn parse(report_type: &str, verbose: bool) -> Result<Self, HarnessError> {
        Ok(Self {
            report_type: report_type.parse()?,
            verbose,
        })
    }

    pub fn with_report_type(mut self, report_type: ReportType) -> Self {
        self.report_type = report_type;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
