//! Configuration for loading and presenting result sets.
//!
//! - `ResultLayout` - which files make up a variant directory and their modifiers
//! - `defaults` - constants shared by the comparison and presentation code

mod layout;

pub use layout::*;

/// Defaults used when the caller does not supply a value.
pub mod defaults {
    /// Duration (in ms) of one strain section emitted by the calculator.
    pub const STRAIN_SECTION_MS: u32 = 400;

    /// Rows kept per ranking in a markdown report.
    pub const REPORT_ROW_LIMIT: usize = 250;

    /// Minimum |delta| for a change to be listed in a filtered comparison.
    pub const DELTA_THRESHOLD: f64 = 0.01;

    /// Minimum |delta| for a change to count towards the histogram.
    pub const HISTOGRAM_MIN_DELTA: f64 = 0.001;

    /// Number of histogram bins.
    pub const HISTOGRAM_BINS: usize = 20;

    /// Decimal places used by text exports.
    pub const DISPLAY_PRECISION: usize = 2;
}
