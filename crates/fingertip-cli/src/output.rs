//! Report rendering

use crate::commands::OutputFormat;
use crate::error::CliResult;
use crate::runner::GestureReport;
use std::fmt::Write as _;

/// Render a report in the requested format
pub fn render(report: &GestureReport, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Human-readable trace: one event per line, then a summary
#[must_use]
pub fn render_text(report: &GestureReport) -> String {
    let mut out = String::new();
    for (i, event) in report.events.iter().enumerate() {
        let _ = writeln!(out, "{i:>5}  {event}");
    }
    let _ = writeln!(
        out,
        "{}: {} events, {} sleeps, {:.3} ms virtual",
        report.gesture,
        report.events.len(),
        report.sleeps,
        report.virtual_ms
    );
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use fingertip::{FingerId, Point, TouchEvent};

    fn sample() -> GestureReport {
        GestureReport {
            gesture: "tap",
            events: vec![
                TouchEvent::down(FingerId(0), Point::new(1.0, 2.0)),
                TouchEvent::up(FingerId(0)),
            ],
            sleeps: 1,
            virtual_ms: 100.0,
        }
    }

    #[test]
    fn test_text() {
        let text = render(&sample(), OutputFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "    0  down  #0 (1, 2)");
        assert_eq!(lines[2], "tap: 2 events, 1 sleeps, 100.000 ms virtual");
    }

    #[test]
    fn test_json() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["gesture"], "tap");
        assert_eq!(value["events"][1]["phase"], "up");
        assert_eq!(value["sleeps"], 1);
    }
}
