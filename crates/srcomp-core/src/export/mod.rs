//! Text renderings of comparison output: markdown tables, spreadsheet TSV,
//! JSON and colored console tables.
//!
//! Rounding to a display precision happens here and nowhere else.

mod console;

pub use console::*;

use std::fmt::Write as _;

use crate::compare::ComparisonRow;
use crate::error::Result;
use crate::strain::{StrainPoint, StrainSeries, section_time_ms};
use crate::summary::{DeltaHistogram, DeltaSummary};

const HISTOGRAM_BAR_WIDTH: usize = 40;

/// Column labels derived from the two variant names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub baseline: String,
    pub candidate: String,
}

impl Labels {
    pub fn new(baseline: impl Into<String>, candidate: impl Into<String>) -> Self {
        Self {
            baseline: baseline.into(),
            candidate: candidate.into(),
        }
    }

    pub fn baseline_column(&self) -> String {
        format!("sr_{}", self.baseline)
    }

    pub fn candidate_column(&self) -> String {
        format!("sr_{}", self.candidate)
    }

    pub fn header(&self) -> Vec<String> {
        vec![
            "beatmap".to_string(),
            "mods".to_string(),
            self.baseline_column(),
            self.candidate_column(),
            "delta".to_string(),
        ]
    }
}

/// Render an optional number; missing values become an empty cell.
pub fn format_value(value: Option<f64>, precision: Option<usize>) -> String {
    match (value, precision) {
        (None, _) => String::new(),
        (Some(v), Some(p)) => format!("{:.*}", p, v),
        (Some(v), None) => v.to_string(),
    }
}

/// Make free text safe inside a markdown table cell.
pub fn markdown_cell(text: &str) -> String {
    text.replace('|', "\\|").replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Make free text safe inside a TSV field.
pub fn tsv_cell(text: &str) -> String {
    text.replace(['\t', '\n', '\r'], " ")
}

fn row_cells(
    row: &ComparisonRow,
    precision: Option<usize>,
    escape: fn(&str) -> String,
) -> Vec<String> {
    vec![
        escape(&row.beatmap.to_string()),
        row.modifier.short_name().to_string(),
        format_value(row.star_rating_baseline, precision),
        format_value(row.star_rating_candidate, precision),
        format_value(row.delta, precision),
    ]
}

/// Markdown pipe table, numeric columns right-aligned.
pub fn format_markdown(
    rows: &[ComparisonRow],
    labels: &Labels,
    precision: Option<usize>,
) -> String {
    let mut output = String::new();

    let header: Vec<String> = labels.header().iter().map(|c| markdown_cell(c)).collect();
    let _ = writeln!(output, "| {} |", header.join(" | "));
    let _ = writeln!(output, "|:--|:--|--:|--:|--:|");
    for row in rows {
        let cells = row_cells(row, precision, markdown_cell);
        let _ = writeln!(output, "| {} |", cells.join(" | "));
    }

    output
}

/// Tab-separated table with a header row, ready to paste into a spreadsheet.
pub fn format_tsv(rows: &[ComparisonRow], labels: &Labels, precision: Option<usize>) -> String {
    let header: Vec<String> = labels.header().iter().map(|c| tsv_cell(c)).collect();
    let mut lines = vec![header.join("\t")];
    lines.extend(rows.iter().map(|row| row_cells(row, precision, tsv_cell).join("\t")));
    lines.join("\n")
}

/// Pretty JSON array of rows, values unrounded.
pub fn format_json(rows: &[ComparisonRow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// Paired strain series as TSV: section, time and one column per variant.
pub fn format_strains_tsv(
    points: &[StrainPoint],
    labels: &Labels,
    precision: Option<usize>,
) -> String {
    let mut lines = vec![format!(
        "section\ttime_ms\t{}\t{}",
        tsv_cell(&labels.baseline),
        tsv_cell(&labels.candidate)
    )];
    lines.extend(points.iter().map(|p| {
        format!(
            "{}\t{}\t{}\t{}",
            p.section,
            p.time_ms,
            format_value(p.baseline, precision),
            format_value(p.candidate, precision)
        )
    }));
    lines.join("\n")
}

/// Several maps' strain series of one variant side by side, one column per map.
/// Shorter series leave their trailing cells empty.
pub fn format_series_tsv(series: &[StrainSeries], precision: Option<usize>) -> String {
    let mut header = vec!["section".to_string(), "time_ms".to_string()];
    header.extend(series.iter().map(|s| tsv_cell(&s.key.to_string())));

    let timelines: Vec<Vec<(u64, f64)>> = series.iter().map(StrainSeries::timeline).collect();
    let sections = timelines.iter().map(Vec::len).max().unwrap_or(0);
    let mut lines = vec![header.join("\t")];
    for section in 0..sections {
        let mut cells = vec![section.to_string(), section_time_ms(section).to_string()];
        cells.extend(
            timelines
                .iter()
                .map(|t| format_value(t.get(section).map(|&(_, v)| v), precision)),
        );
        lines.push(cells.join("\t"));
    }
    lines.join("\n")
}

pub fn format_summary(summary: &DeltaSummary, precision: usize) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Compared:  {}", summary.count);
    let _ = writeln!(output, "Increased: {}", summary.increased);
    let _ = writeln!(output, "Decreased: {}", summary.decreased);
    let _ = writeln!(output, "Unchanged: {}", summary.unchanged);
    let _ = writeln!(output, "Mean:      {}", format_value(summary.mean, Some(precision)));
    let _ = writeln!(output, "Min:       {}", format_value(summary.min, Some(precision)));
    let _ = writeln!(output, "Max:       {}", format_value(summary.max, Some(precision)));
    output
}

/// Horizontal bar chart of a delta histogram.
pub fn format_histogram(histogram: &DeltaHistogram, precision: usize) -> String {
    let mut output = String::new();
    let max_count = histogram.max_count();

    for bin in &histogram.bins {
        let width = if max_count == 0 {
            0
        } else {
            (bin.count * HISTOGRAM_BAR_WIDTH).div_ceil(max_count)
        };
        let _ = writeln!(
            output,
            "[{:>w$.p$}, {:>w$.p$}] {:>6} {}",
            bin.lower,
            bin.upper,
            bin.count,
            "█".repeat(width),
            w = precision + 4,
            p = precision
        );
    }
    let _ = writeln!(output, "({} changes at or below the noise floor)", histogram.excluded);

    output
}
