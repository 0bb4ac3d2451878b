//! Aggregate views of a comparison: overall statistics and a delta histogram.

use serde::Serialize;

use crate::compare::ComparisonRow;

/// Statistics over the rows that have a delta.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DeltaSummary {
    pub count: usize,
    pub increased: usize,
    pub decreased: usize,
    pub unchanged: usize,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl DeltaSummary {
    pub fn from_rows(rows: &[ComparisonRow]) -> Self {
        let mut summary = Self::default();
        let mut total = 0.0;

        for delta in rows.iter().filter_map(|r| r.delta) {
            summary.count += 1;
            total += delta;
            if delta > 0.0 {
                summary.increased += 1;
            } else if delta < 0.0 {
                summary.decreased += 1;
            } else {
                summary.unchanged += 1;
            }
            summary.min = Some(summary.min.map_or(delta, |m| m.min(delta)));
            summary.max = Some(summary.max.map_or(delta, |m| m.max(delta)));
        }

        if summary.count > 0 {
            summary.mean = Some(total / summary.count as f64);
        }
        summary
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram of deltas whose magnitude exceeds a noise floor.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DeltaHistogram {
    pub bins: Vec<HistogramBin>,
    /// Rows with a delta at or below the noise floor.
    pub excluded: usize,
}

impl DeltaHistogram {
    pub fn build(rows: &[ComparisonRow], min_abs_delta: f64, bins: usize) -> Self {
        let deltas: Vec<f64> = rows.iter().filter_map(|r| r.delta).collect();
        let included: Vec<f64> = deltas
            .iter()
            .copied()
            .filter(|d| d.abs() > min_abs_delta)
            .collect();
        let excluded = deltas.len() - included.len();

        if included.is_empty() || bins == 0 {
            return Self {
                bins: Vec::new(),
                excluded,
            };
        }

        let min = included.iter().copied().fold(f64::INFINITY, f64::min);
        let max = included.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        // All values identical: a single bin holds everything.
        if max == min {
            return Self {
                bins: vec![HistogramBin {
                    lower: min,
                    upper: max,
                    count: included.len(),
                }],
                excluded,
            };
        }

        let width = (max - min) / bins as f64;
        let mut result: Vec<HistogramBin> = (0..bins)
            .map(|i| HistogramBin {
                lower: min + width * i as f64,
                upper: if i + 1 == bins {
                    max
                } else {
                    min + width * (i + 1) as f64
                },
                count: 0,
            })
            .collect();

        for delta in included {
            let index = (((delta - min) / width) as usize).min(bins - 1);
            result[index].count += 1;
        }

        Self {
            bins: result,
            excluded,
        }
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}
