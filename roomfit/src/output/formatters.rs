//! Output formatter implementations.

use serde::Serialize;

use crate::{Error, Result};

use super::{CombinationReport, CostReport, ReportFormatter};

/// Formatter for JSON output.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format_combination(&self, report: &CombinationReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn format_cost(&self, report: &CostReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl ReportFormatter for HumanFormatter {
    fn format_combination(&self, report: &CombinationReport) -> Result<String> {
        if report.rooms.is_empty() {
            return Ok("No rooms requested.".to_string());
        }

        let id_width = report
            .rooms
            .iter()
            .map(|r| r.room_id.len())
            .max()
            .unwrap_or(0);
        let type_width = report
            .rooms
            .iter()
            .map(|r| r.room_type.len())
            .max()
            .unwrap_or(0);

        let mut lines = vec![format!("Selected {} room(s):", report.rooms.len())];
        for room in &report.rooms {
            lines.push(format!(
                "  {:<id_width$}  {:<type_width$}  {:>10.2}",
                room.room_id, room.room_type, room.price_per_day
            ));
        }
        lines.push(format!("Total per night: {:.2}", report.total_amount));
        lines.push(format!("Solved in {:.3} ms", report.execution_time_ms));

        Ok(lines.join("\n"))
    }

    fn format_cost(&self, report: &CostReport) -> Result<String> {
        let mut lines = vec![format!(
            "Cheapest split of {} day(s): {:.2}",
            report.total_days, report.total_cost
        )];
        for entry in &report.allocation {
            lines.push(format!("  {}: {} day(s)", entry.room_id, entry.days));
        }
        lines.push(format!("Solved in {:.3} ms", report.execution_time_ms));

        Ok(lines.join("\n"))
    }
}

/// Formatter for CSV output.
///
/// One row per room, header always included. Every row repeats the
/// report totals.
pub struct CsvFormatter;

impl CsvFormatter {
    fn write_rows<T: Serialize>(header: &[&str], rows: &[T]) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(header)?;
        for row in rows {
            writer.serialize(row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| Error::Validation {
            field: "csv_output".to_string(),
            message: format!("produced invalid UTF-8: {e}"),
        })
    }
}

impl ReportFormatter for CsvFormatter {
    fn format_combination(&self, report: &CombinationReport) -> Result<String> {
        let rows: Vec<_> = report
            .rooms
            .iter()
            .map(|room| {
                (
                    room.room_id.as_str(),
                    room.room_type.as_str(),
                    room.price_per_day,
                    report.total_amount,
                )
            })
            .collect();
        Self::write_rows(&["roomId", "roomType", "pricePerDay", "totalAmount"], &rows)
    }

    fn format_cost(&self, report: &CostReport) -> Result<String> {
        let rows: Vec<_> = report
            .allocation
            .iter()
            .map(|entry| {
                (
                    entry.room_id.as_str(),
                    entry.days,
                    report.total_days,
                    report.total_cost,
                )
            })
            .collect();
        Self::write_rows(&["roomId", "days", "totalDays", "totalCost"], &rows)
    }
}
