//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use super::{Labels, format_value};
use crate::compare::ComparisonRow;

/// Format rows as an aligned console table.
///
/// Increases are green, decreases red, and missing values are shown as a dimmed `-`.
pub fn format_console(rows: &[ComparisonRow], labels: &Labels, precision: usize) -> String {
    let mut output = String::new();

    let beatmap_width = rows
        .iter()
        .map(|r| r.beatmap.to_string().len())
        .chain(std::iter::once("beatmap".len()))
        .max()
        .unwrap_or(0);
    let baseline_column = labels.baseline_column();
    let candidate_column = labels.candidate_column();
    let number_width = (precision + 5)
        .max(baseline_column.len())
        .max(candidate_column.len());

    let header = format!(
        "{:<bw$}  {:<4}  {:>nw$}  {:>nw$}  {:>nw$}",
        "beatmap",
        "mods",
        baseline_column,
        candidate_column,
        "delta",
        bw = beatmap_width,
        nw = number_width
    );
    let _ = writeln!(output, "{}", header.bold());
    let _ = writeln!(output, "{}", "━".repeat(header.chars().count()).dimmed());

    for row in rows {
        let _ = writeln!(
            output,
            "{:<bw$}  {:<4}  {}  {}  {}",
            row.beatmap.to_string(),
            row.modifier.short_name(),
            cell(row.star_rating_baseline, precision, number_width),
            cell(row.star_rating_candidate, precision, number_width),
            delta_cell(row.delta, precision, number_width),
            bw = beatmap_width
        );
    }

    output
}

fn cell(value: Option<f64>, precision: usize, width: usize) -> String {
    match value {
        Some(_) => format!("{:>w$}", format_value(value, Some(precision)), w = width),
        None => format!("{:>w$}", "-", w = width).dimmed().to_string(),
    }
}

fn delta_cell(delta: Option<f64>, precision: usize, width: usize) -> String {
    match delta {
        Some(d) if d > 0.0 => format!("{:>+w$.p$}", d, w = width, p = precision)
            .green()
            .to_string(),
        Some(d) if d < 0.0 => format!("{:>+w$.p$}", d, w = width, p = precision)
            .red()
            .to_string(),
        Some(d) => format!("{:>w$.p$}", d, w = width, p = precision),
        None => format!("{:>w$}", "-", w = width).dimmed().to_string(),
    }
}
