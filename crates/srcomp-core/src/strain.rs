//! Strain series: per-section difficulty of a single map, and side-by-side
//! alignment of two variants' series for plotting.

use serde::Serialize;

use crate::config::defaults::STRAIN_SECTION_MS;
use crate::result::{NormalizedTable, ResultKey};

/// Strain values of one map in one variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrainSeries {
    pub key: ResultKey,
    pub values: Vec<f64>,
}

impl StrainSeries {
    pub fn from_table(table: &NormalizedTable, key: &ResultKey) -> Option<Self> {
        table.strains(key).map(|values| Self {
            key: key.clone(),
            values: values.to_vec(),
        })
    }

    pub fn sections(&self) -> usize {
        self.values.len()
    }

    /// Highest strain, `None` for an empty series.
    pub fn peak(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    /// `(time_ms, strain)` pairs.
    pub fn timeline(&self) -> Vec<(u64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(section, &value)| (section_time_ms(section), value))
            .collect()
    }
}

/// One section of two aligned strain series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrainPoint {
    pub section: usize,
    pub time_ms: u64,
    pub baseline: Option<f64>,
    pub candidate: Option<f64>,
}

pub fn section_time_ms(section: usize) -> u64 {
    section as u64 * u64::from(STRAIN_SECTION_MS)
}

/// Align two strain sequences section by section. The shorter side is padded with `None`.
pub fn pair_strains(baseline: &[f64], candidate: &[f64]) -> Vec<StrainPoint> {
    let sections = baseline.len().max(candidate.len());
    (0..sections)
        .map(|section| StrainPoint {
            section,
            time_ms: section_time_ms(section),
            baseline: baseline.get(section).copied(),
            candidate: candidate.get(section).copied(),
        })
        .collect()
}

/// Pair the strains of `key` from both variants.
///
/// Returns `None` when neither variant has strains for the key.
pub fn compare_strains(
    baseline: &NormalizedTable,
    candidate: &NormalizedTable,
    key: &ResultKey,
) -> Option<Vec<StrainPoint>> {
    let base = baseline.strains(key);
    let cand = candidate.strains(key);
    if base.is_none() && cand.is_none() {
        return None;
    }
    Some(pair_strains(base.unwrap_or_default(), cand.unwrap_or_default()))
}
