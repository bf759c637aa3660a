//! Output formatting module for solver reports.
//!
//! Reports mirror the JSON bodies of the booking service: camelCase keys,
//! a running total and the solver's wall-clock time. Each [`OutputFormat`]
//! maps to one [`ReportFormatter`].

mod formatters;
mod reports;

use crate::config::OutputFormat;
use crate::Result;

pub use formatters::{CsvFormatter, HumanFormatter, JsonFormatter};
pub use reports::{CombinationReport, CostReport, ReportDays, ReportRoom};

/// Trait for rendering reports into a specific output format.
pub trait ReportFormatter {
    /// Render a combination report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_combination(&self, report: &CombinationReport) -> Result<String>;

    /// Render a cost report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_cost(&self, report: &CostReport) -> Result<String>;
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn ReportFormatter> {
        match self {
            Self::Json => Box::new(JsonFormatter),
            Self::Human => Box::new(HumanFormatter),
            Self::Csv => Box::new(CsvFormatter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_formatter_dispatch() {
        let report = CostReport {
            total_cost: 0.0,
            total_days: 0,
            allocation: Vec::new(),
            execution_time_ms: 0.0,
        };

        let json = OutputFormat::Json.create_formatter().format_cost(&report).unwrap();
        assert!(json.contains("\"totalCost\""));

        let human = OutputFormat::Human.create_formatter().format_cost(&report).unwrap();
        assert!(human.starts_with("Cheapest split"));

        let csv = OutputFormat::Csv.create_formatter().format_cost(&report).unwrap();
        assert!(csv.is_empty());
    }
}
