mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG takes precedence; otherwise warn, or info with --verbose
    let default_level = if args.verbose { "info" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "srcomp={level},srcomp_core={level}",
            level = default_level
        ))
    });
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

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
        } => commands::compare::run(commands::compare::CompareArgs {
            variants: &variants,
            join,
            threshold,
            sort,
            order,
            limit,
            format,
            precision,
            output: output.as_deref(),
        }),
        Command::Report {
            variants,
            limit,
            out_dir,
            precision,
        } => commands::report::run(&variants, limit, &out_dir, precision),
        Command::Strains {
            variants,
            beatmap,
            mods,
            precision,
            output,
        } => commands::strains::run(&variants, &beatmap, mods, precision, output.as_deref()),
        Command::Series {
            dir,
            beatmap,
            mods,
            layout,
            precision,
            output,
        } => commands::series::run(
            &dir,
            &beatmap,
            mods,
            layout.as_deref(),
            precision,
            output.as_deref(),
        ),
        Command::Maps { dir, mods, layout } => commands::maps::run(&dir, mods, layout.as_deref()),
        Command::Summary {
            variants,
            min_delta,
            bins,
            json,
        } => commands::summary::run(&variants, min_delta, bins, json),
        Command::Projects { root } => commands::projects::run(&root),
    }
}
