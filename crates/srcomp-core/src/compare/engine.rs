use std::cmp::Ordering;
use std::collections::BTreeSet;

use tracing::debug;

use super::{CompareOptions, ComparisonRow, JoinMode, SortKey, SortOrder, SortSpec};
use crate::result::{NormalizedTable, ResultKey};

/// Align two tables on `(beatmap, modifier)`, in ascending key order.
pub fn join(
    baseline: &NormalizedTable,
    candidate: &NormalizedTable,
    mode: JoinMode,
) -> Vec<ComparisonRow> {
    let keys: Vec<&ResultKey> = match mode {
        JoinMode::Inner => baseline
            .keys()
            .filter(|key| candidate.contains_key(key))
            .collect(),
        JoinMode::Outer => baseline
            .keys()
            .chain(candidate.keys())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect(),
    };

    keys.into_iter()
        .map(|key| {
            ComparisonRow::new(
                key.clone(),
                baseline.star_rating(key),
                candidate.star_rating(key),
            )
        })
        .collect()
}

/// Keep rows whose |delta| is strictly greater than `threshold`.
///
/// Rows without a delta never pass.
pub fn filter_by_threshold(rows: Vec<ComparisonRow>, threshold: f64) -> Vec<ComparisonRow> {
    rows.into_iter()
        .filter(|row| row.delta.is_some_and(|delta| delta.abs() > threshold))
        .collect()
}

/// Stable sort. Rows missing the sort value go last in either direction.
pub fn sort_rows(mut rows: Vec<ComparisonRow>, spec: SortSpec) -> Vec<ComparisonRow> {
    let value = |row: &ComparisonRow| match spec.key {
        SortKey::Delta => row.delta,
        SortKey::Baseline => row.star_rating_baseline,
    };

    rows.sort_by(|a, b| match (value(a), value(b)) {
        (Some(x), Some(y)) => match spec.order {
            SortOrder::Ascending => x.total_cmp(&y),
            SortOrder::Descending => y.total_cmp(&x),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    rows
}

pub fn truncate(mut rows: Vec<ComparisonRow>, limit: usize) -> Vec<ComparisonRow> {
    rows.truncate(limit);
    rows
}

/// Join two variants and apply the optional filter, sort and limit, in that order.
pub fn compare(
    baseline: &NormalizedTable,
    candidate: &NormalizedTable,
    options: &CompareOptions,
) -> Vec<ComparisonRow> {
    let mut rows = join(baseline, candidate, options.join);
    debug!(
        "{} join of '{}' ({}) and '{}' ({}) produced {} rows",
        options.join,
        baseline.name(),
        baseline.len(),
        candidate.name(),
        candidate.len(),
        rows.len()
    );

    if let Some(threshold) = options.threshold {
        rows = filter_by_threshold(rows, threshold);
    }
    if let Some(spec) = options.sort {
        rows = sort_rows(rows, spec);
    }
    if let Some(limit) = options.limit {
        rows = truncate(rows, limit);
    }
    rows
}
