use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Which keys a comparison covers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum JoinMode {
    /// Keys present in both tables.
    #[default]
    Inner,
    /// Keys present in either table.
    Outer,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Delta,
    Baseline,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[strum(to_string = "asc", serialize = "ascending")]
    Ascending,
    #[default]
    #[strum(to_string = "desc", serialize = "descending")]
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, SortOrder::Ascending)
    }

    pub fn descending(key: SortKey) -> Self {
        Self::new(key, SortOrder::Descending)
    }
}

/// Call-time parameters of a comparison. Every post-processing step is off by default.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CompareOptions {
    pub join: JoinMode,
    /// Keep only rows whose |delta| exceeds this value.
    pub threshold: Option<f64>,
    pub sort: Option<SortSpec>,
    /// Keep at most this many rows after sorting.
    pub limit: Option<usize>,
}

impl CompareOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn join(mut self, join: JoinMode) -> Self {
        self.join = join;
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn sort(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort = Some(SortSpec::new(key, order));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
