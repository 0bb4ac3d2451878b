use serde::Serialize;

use crate::result::{BeatmapId, Modifier, ResultKey};

/// One aligned key of a baseline/candidate comparison.
///
/// `delta` is `candidate - baseline` and is `None` whenever either side is missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub beatmap: BeatmapId,
    #[serde(rename = "mods")]
    pub modifier: Modifier,
    pub star_rating_baseline: Option<f64>,
    pub star_rating_candidate: Option<f64>,
    pub delta: Option<f64>,
}

impl ComparisonRow {
    pub fn new(key: ResultKey, baseline: Option<f64>, candidate: Option<f64>) -> Self {
        let delta = match (baseline, candidate) {
            (Some(b), Some(c)) => Some(c - b),
            _ => None,
        };
        Self {
            beatmap: key.beatmap,
            modifier: key.modifier,
            star_rating_baseline: baseline,
            star_rating_candidate: candidate,
            delta,
        }
    }

    pub fn key(&self) -> ResultKey {
        ResultKey::new(self.beatmap.clone(), self.modifier)
    }

    pub fn is_complete(&self) -> bool {
        self.delta.is_some()
    }
}
