//! Loading calculator result files into normalized tables.
//!
//! - `BeatmapId`, `Modifier` - the two halves of the composite key
//! - `flatten`, `tag_modifier`, `ResultRecord` - per-entry reshaping
//! - `NormalizedTable` - one variant's results keyed by `(beatmap, modifier)`
//! - `load_variant`, `load_documents` - the loading pipeline

mod beatmap;
mod loader;
mod modifier;
mod record;
mod table;

pub use beatmap::*;
pub use loader::*;
pub use modifier::*;
pub use record::*;
pub use table::*;
