//! Star-rating result comparison.
//!
//! Loads the per-modifier result files of two difficulty-calculation runs
//! ("variants"), aligns them on `(beatmap, modifier)`, and computes the star
//! rating change of each map.

pub mod compare;
pub mod config;
pub mod error;
pub mod export;
pub mod result;
pub mod strain;
pub mod summary;

pub use compare::{
    CompareOptions, ComparisonRow, JoinMode, SortKey, SortOrder, SortSpec, compare,
    filter_by_threshold, join, sort_rows, truncate,
};
pub use config::{ResultFile, ResultLayout};
pub use error::{Error, Result};
pub use export::Labels;
pub use result::{
    BeatmapId, Modifier, NormalizedTable, ResultKey, ResultRecord, flatten, list_variants,
    load_documents, load_variant,
};
pub use strain::{StrainPoint, StrainSeries, compare_strains, pair_strains};
pub use summary::{DeltaHistogram, DeltaSummary};
