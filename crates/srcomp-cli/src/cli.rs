//! CLI argument definitions for srcomp.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use srcomp_core::config::defaults;
use srcomp_core::{JoinMode, Modifier, SortKey, SortOrder};

#[derive(Parser)]
#[command(name = "srcomp")]
#[command(about = "Compare star rating results of two difficulty calculation runs", version)]
pub struct Args {
    /// Show progress logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// The two result directories being compared.
#[derive(clap::Args, Debug, Clone)]
pub struct VariantArgs {
    /// Baseline result directory (e.g. master)
    pub baseline: PathBuf,
    /// Candidate result directory
    pub candidate: PathBuf,
    /// JSON file listing the result files and their modifiers
    #[arg(long, value_name = "FILE")]
    pub layout: Option<PathBuf>,
    /// Label for the baseline columns (defaults to the directory name)
    #[arg(long)]
    pub baseline_label: Option<String>,
    /// Label for the candidate columns (defaults to the directory name)
    #[arg(long)]
    pub candidate_label: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare star ratings between two variants
    Compare {
        #[command(flatten)]
        variants: VariantArgs,
        /// Which keys to include
        #[arg(long, default_value = "inner")]
        join: JoinMode,
        /// Only show rows whose |delta| exceeds this value
        /// (0.01 when the flag is given without a value)
        #[arg(long, num_args = 0..=1, default_missing_value = "0.01")]
        threshold: Option<f64>,
        /// Sort rows by this column
        #[arg(long)]
        sort: Option<SortKey>,
        /// Sort direction
        #[arg(long, default_value = "desc")]
        order: SortOrder,
        /// Maximum number of rows
        #[arg(long, short = 'n')]
        limit: Option<usize>,
        /// Output format
        #[arg(long, short, value_enum, default_value = "console")]
        format: OutputFormat,
        /// Decimal places in text output
        #[arg(long, default_value_t = defaults::DISPLAY_PRECISION)]
        precision: usize,
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Write the largest increases and decreases as markdown tables
    Report {
        #[command(flatten)]
        variants: VariantArgs,
        /// Rows per table
        #[arg(long, short = 'n', default_value_t = defaults::REPORT_ROW_LIMIT)]
        limit: usize,
        /// Directory the reports are written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Decimal places (full precision when omitted)
        #[arg(long)]
        precision: Option<usize>,
    },
    /// Show the strain sections of one map side by side
    Strains {
        #[command(flatten)]
        variants: VariantArgs,
        /// Beatmap identifier
        #[arg(long, short)]
        beatmap: String,
        /// Modifier (NT, DT, HT)
        #[arg(long, short, default_value = "NT", value_parser = Modifier::parse)]
        mods: Modifier,
        /// Decimal places (full precision when omitted)
        #[arg(long)]
        precision: Option<usize>,
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Show the strain sections of several maps from one variant
    Series {
        /// Result directory
        dir: PathBuf,
        /// Beatmap identifier, repeat for more maps
        #[arg(long, short, required = true)]
        beatmap: Vec<String>,
        /// Modifier (NT, DT, HT)
        #[arg(long, short, default_value = "NT", value_parser = Modifier::parse)]
        mods: Modifier,
        /// JSON file listing the result files and their modifiers
        #[arg(long, value_name = "FILE")]
        layout: Option<PathBuf>,
        /// Decimal places (full precision when omitted)
        #[arg(long)]
        precision: Option<usize>,
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// List the beatmaps in one variant
    Maps {
        /// Result directory
        dir: PathBuf,
        /// Only load the results of this modifier
        #[arg(long, short, value_parser = Modifier::parse)]
        mods: Option<Modifier>,
        /// JSON file listing the result files and their modifiers
        #[arg(long, value_name = "FILE")]
        layout: Option<PathBuf>,
    },
    /// Summarize the star rating changes with a histogram
    Summary {
        #[command(flatten)]
        variants: VariantArgs,
        /// Changes at or below this magnitude are left out of the histogram
        #[arg(long, default_value_t = defaults::HISTOGRAM_MIN_DELTA)]
        min_delta: f64,
        /// Number of histogram bins
        #[arg(long, default_value_t = defaults::HISTOGRAM_BINS)]
        bins: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the variant directories under a results root
    Projects {
        /// Results root directory
        root: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Console,
    Markdown,
    Tsv,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compare_defaults() {
        let args = Args::try_parse_from(["srcomp", "compare", "master", "cand"]).unwrap();
        assert!(!args.verbose);
        match args.command {
            Command::Compare {
                variants,
                join,
                threshold,
                sort,
                order,
                limit,
                format,
                precision,
                output,
            } => {
                assert_eq!(variants.baseline, PathBuf::from("master"));
                assert_eq!(variants.candidate, PathBuf::from("cand"));
                assert!(variants.layout.is_none());
                assert_eq!(join, JoinMode::Inner);
                assert!(threshold.is_none());
                assert!(sort.is_none());
                assert_eq!(order, SortOrder::Descending);
                assert!(limit.is_none());
                assert_eq!(format, OutputFormat::Console);
                assert_eq!(precision, 2);
                assert!(output.is_none());
            }
            _ => panic!("Expected Compare command"),
        }
    }

    #[test]
    fn test_parse_compare_all_options() {
        let args = Args::try_parse_from([
            "srcomp",
            "-v",
            "compare",
            "master",
            "cand",
            "--join",
            "outer",
            "--threshold",
            "0.01",
            "--sort",
            "baseline",
            "--order",
            "asc",
            "-n",
            "250",
            "--format",
            "markdown",
            "--output",
            "out.md",
        ])
        .unwrap();
        assert!(args.verbose);
        match args.command {
            Command::Compare {
                join,
                threshold,
                sort,
                order,
                limit,
                format,
                output,
                ..
            } => {
                assert_eq!(join, JoinMode::Outer);
                assert_eq!(threshold, Some(0.01));
                assert_eq!(sort, Some(SortKey::Baseline));
                assert_eq!(order, SortOrder::Ascending);
                assert_eq!(limit, Some(250));
                assert_eq!(format, OutputFormat::Markdown);
                assert_eq!(output, Some(PathBuf::from("out.md")));
            }
            _ => panic!("Expected Compare command"),
        }
    }

    #[test]
    fn test_parse_threshold_without_value() {
        let args =
            Args::try_parse_from(["srcomp", "compare", "master", "cand", "--threshold"]).unwrap();
        match args.command {
            Command::Compare { threshold, .. } => {
                assert_eq!(threshold, Some(defaults::DELTA_THRESHOLD));
            }
            _ => panic!("Expected Compare command"),
        }
    }

    #[test]
    fn test_parse_invalid_join() {
        assert!(Args::try_parse_from(["srcomp", "compare", "a", "b", "--join", "left"]).is_err());
    }

    #[test]
    fn test_parse_report_defaults() {
        let args = Args::try_parse_from(["srcomp", "report", "master", "cand"]).unwrap();
        match args.command {
            Command::Report {
                limit,
                out_dir,
                precision,
                ..
            } => {
                assert_eq!(limit, 250);
                assert_eq!(out_dir, PathBuf::from("."));
                assert!(precision.is_none());
            }
            _ => panic!("Expected Report command"),
        }
    }

    #[test]
    fn test_parse_strains() {
        let args = Args::try_parse_from([
            "srcomp", "strains", "master", "cand", "--beatmap", "3469849", "--mods", "dt",
        ])
        .unwrap();
        match args.command {
            Command::Strains { beatmap, mods, .. } => {
                assert_eq!(beatmap, "3469849");
                assert_eq!(mods, Modifier::DoubleTime);
            }
            _ => panic!("Expected Strains command"),
        }
    }

    #[test]
    fn test_parse_unknown_modifier() {
        let result = Args::try_parse_from([
            "srcomp", "strains", "master", "cand", "--beatmap", "1", "--mods", "HR",
        ]);
        let err = result.err().unwrap().to_string();
        assert!(err.contains("Unknown modifier: HR"));
    }

    #[test]
    fn test_parse_series_repeated_beatmaps() {
        let args = Args::try_parse_from([
            "srcomp", "series", "master", "-b", "100", "-b", "map.osu", "-m", "HT",
        ])
        .unwrap();
        match args.command {
            Command::Series {
                dir, beatmap, mods, ..
            } => {
                assert_eq!(dir, PathBuf::from("master"));
                assert_eq!(beatmap, vec!["100", "map.osu"]);
                assert_eq!(mods, Modifier::HalfTime);
            }
            _ => panic!("Expected Series command"),
        }
    }

    #[test]
    fn test_parse_series_requires_beatmap() {
        assert!(Args::try_parse_from(["srcomp", "series", "master"]).is_err());
    }

    #[test]
    fn test_parse_maps() {
        let args = Args::try_parse_from(["srcomp", "maps", "master"]).unwrap();
        assert!(matches!(args.command, Command::Maps { mods: None, .. }));

        let args = Args::try_parse_from(["srcomp", "maps", "master", "--mods", "dt"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Maps {
                mods: Some(Modifier::DoubleTime),
                ..
            }
        ));
    }

    #[test]
    fn test_parse_strains_requires_beatmap() {
        assert!(Args::try_parse_from(["srcomp", "strains", "master", "cand"]).is_err());
    }

    #[test]
    fn test_parse_summary_defaults() {
        let args = Args::try_parse_from(["srcomp", "summary", "master", "cand"]).unwrap();
        match args.command {
            Command::Summary {
                min_delta,
                bins,
                json,
                ..
            } => {
                assert_eq!(min_delta, 0.001);
                assert_eq!(bins, 20);
                assert!(!json);
            }
            _ => panic!("Expected Summary command"),
        }
    }

    #[test]
    fn test_parse_projects() {
        let args = Args::try_parse_from(["srcomp", "projects", "results"]).unwrap();
        assert!(matches!(args.command, Command::Projects { root } if root == PathBuf::from("results")));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["srcomp"]).is_err());
    }
}
