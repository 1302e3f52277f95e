//! Squad report rendering.

use serde::Serialize;
use squad_core::{RunReport, RunSummary, Squad};

/// One line per run, e.g. `Squad 1: [(C, 7), (A, 3)] total=10`.
pub fn render_text(report: &RunReport) -> String {
    match &report.outcome {
        Ok(squad) => format!("Squad {}: {}", report.number(), squad),
        Err(err) => format!("Squad {} aborted: {}", report.number(), err),
    }
}

/// Trailer printed after the last text report, if any.
pub fn render_text_footer(summary: &RunSummary, requested: usize) -> Option<String> {
    summary.halted.then(|| {
        let skipped = requested.saturating_sub(summary.reports.len());
        format!("Stopped after an abort, {skipped} squad(s) not generated")
    })
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    squad_number: usize,
    squad: Option<&'a Squad>,
    error: Option<String>,
    error_code: Option<&'static str>,
    stuck_cost: Option<u32>,
}

#[derive(Debug, Serialize)]
struct JsonSummary<'a> {
    reports: Vec<JsonReport<'a>>,
    halted: bool,
}

/// Whole-run JSON document.
pub fn render_json(summary: &RunSummary) -> serde_json::Result<String> {
    let reports = summary
        .reports
        .iter()
        .map(|report| JsonReport {
            squad_number: report.number(),
            squad: report.squad(),
            error: report.error().map(ToString::to_string),
            error_code: report.error().map(|err| err.draw_error().error_code()),
            stuck_cost: report.error().and_then(|err| err.stuck_cost()),
        })
        .collect();

    serde_json::to_string_pretty(&JsonSummary {
        reports,
        halted: summary.halted,
    })
}
