use std::fmt::Write as _;
use std::path::Path;

use crate::foundation::error::{RoseError, RoseResult};

pub const REPORT_SEPARATOR: &str = "-------------------------------------";

/// End-of-run frame-rate summary.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FpsReport {
    /// Number of samples reduced.
    pub count: usize,
    /// Mean of the samples, rounded to hundredths like the samples themselves.
    pub average: f64,
    pub min: f64,
    pub max: f64,
    /// Sample at rank `count / 100` of the ascending-sorted history.
    pub one_percent_low: f64,
}

impl FpsReport {
    /// Reduce a sample history. `None` for an empty history.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let average = round_to_hundredths(sorted.iter().sum::<f64>() / count as f64);
        Some(Self {
            count,
            average,
            min: sorted[0],
            max: sorted[count - 1],
            one_percent_low: sorted[count / 100],
        })
    }
}

pub(crate) fn round_to_hundredths(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Render the flat text report.
pub fn render_report(title: &str, curve_count: usize, report: &FpsReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "Cantidad de Rosas: {curve_count}");
    let _ = writeln!(out, "{REPORT_SEPARATOR}");
    let _ = writeln!(out, "Metrics Report:");
    let _ = writeln!(out, "Average FPS: {}", report.average);
    let _ = writeln!(out, "Minimum FPS: {}", report.min);
    let _ = writeln!(out, "Maximum FPS: {}", report.max);
    let _ = writeln!(out, "1% Low FPS: {}", report.one_percent_low);
    out
}

/// Write the text report to `path`, creating its parent directory when missing.
pub fn write_report(
    path: &Path,
    title: &str,
    curve_count: usize,
    report: &FpsReport,
) -> RoseResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            RoseError::report(format!("create report dir '{}': {e}", parent.display()))
        })?;
    }
    std::fs::write(path, render_report(title, curve_count, report))
        .map_err(|e| RoseError::report(format!("write report '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/metrics/report.rs"]
mod tests;
