//! Report rendering
//!
//! Text output mirrors the playground's inline results; JSON output is one
//! NDJSON event per principle so CI can consume it line by line.

use std::fmt::Write as _;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::SolidResult;
use crate::playground::{Inspection, PrincipleReport};

/// NDJSON event wrapping one principle report
#[derive(Debug, Clone, Serialize)]
pub struct ReportEvent<'a> {
    pub event: &'static str,
    pub version: &'static str,
    #[serde(flatten)]
    pub report: &'a PrincipleReport,
}

impl<'a> ReportEvent<'a> {
    pub fn new(report: &'a PrincipleReport) -> Self {
        Self {
            event: "report",
            version: env!("CARGO_PKG_VERSION"),
            report,
        }
    }
}

/// Render reports in the requested format
pub fn render(reports: &[PrincipleReport], format: OutputFormat) -> SolidResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(reports)),
        OutputFormat::Json => render_json(reports),
    }
}

/// Human readable rendering, one block per principle
pub fn render_text(reports: &[PrincipleReport]) -> String {
    let mut out = String::new();
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "{}. {} ({})",
            report.principle.ordinal(),
            report.title,
            report.principle
        );
        write_section(&mut out, "violating", &report.violating);
        write_section(&mut out, "corrected", &report.corrected);
    }
    out
}

fn write_section(out: &mut String, name: &str, inspections: &[Inspection]) {
    let _ = writeln!(out, "  {}:", name);
    for inspection in inspections {
        let _ = writeln!(out, "    {} = {}", inspection.label, inspection.value);
    }
}

/// NDJSON rendering, one line per principle
pub fn render_json(reports: &[PrincipleReport]) -> SolidResult<String> {
    let mut out = String::new();
    for report in reports {
        out.push_str(&serde_json::to_string(&ReportEvent::new(report))?);
        out.push('\n');
    }
    Ok(out)
}
