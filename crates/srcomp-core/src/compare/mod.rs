//! Baseline/candidate comparison of two normalized tables.

mod engine;
mod options;
mod row;

pub use engine::*;
pub use options::*;
pub use row::*;
