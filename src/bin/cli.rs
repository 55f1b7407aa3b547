// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Footmount CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use footmount::batch::{default_outputs, find_output, BatchDriver};
use footmount::cli::Reporter;
use footmount::config::Config;
use footmount::{FootmountError, PartSpec, SlopeStyle};
use std::path::PathBuf;
use std::time::Instant;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "footmount")]
#[command(about = "Generate the footmount parts as OpenSCAD files and STL meshes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Write .scad files only
    #[arg(long, visible_alias = "fast", global = true)]
    skip_mesh: bool,

    /// Output directory
    #[arg(short, long, value_name = "DIR", global = true)]
    output: Option<PathBuf>,

    /// Configuration file (defaults to ./footmount.toml)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Only build outputs whose stem contains this text
    #[arg(long, value_name = "STEM", global = true)]
    only: Vec<String>,

    /// Mesh export workers
    #[arg(short, long, value_name = "N", global = true)]
    jobs: Option<usize>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build every output (default)
    Build,

    /// List the output table
    List,

    /// Print the geometry tree of one output as JSON
    Tree {
        /// Output stem, e.g. `feet`
        stem: String,

        /// Override the wing slope of a feet output (flat, sloped, back_sloped)
        #[arg(long)]
        slope: Option<String>,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            Reporter::report_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns `false` when the run finished but some output failed
fn run(cli: Cli) -> Result<bool> {
    let config = load_config(&cli)?;

    match &cli.command {
        None | Some(Commands::Build) => build_command(config),
        Some(Commands::List) => {
            list_command(&config);
            Ok(true)
        }
        Some(Commands::Tree { stem, slope }) => {
            tree_command(&config, stem, slope.as_deref())?;
            Ok(true)
        }
        Some(Commands::Version) => {
            println!("footmount v{}", env!("CARGO_PKG_VERSION"));
            Ok(true)
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = Config::from_file(path)?;
            config.apply_env();
            config
        }
        None => Config::load()?,
    };

    let build = &mut config.build;
    if cli.skip_mesh {
        build.skip_mesh = true;
    }
    if let Some(dir) = &cli.output {
        build.output_dir = dir.clone();
    }
    if !cli.only.is_empty() {
        build.filters = cli.only.clone();
    }
    if cli.jobs.is_some() {
        build.parallelism = cli.jobs;
    }
    build.verbose |= cli.verbose;
    Ok(config)
}

fn build_command(config: Config) -> Result<bool> {
    let start = Instant::now();
    let driver = BatchDriver::new(config);

    if driver.selected().is_empty() {
        Reporter::report_warning("No output matches the given filters");
        return Ok(true);
    }

    let report = driver.run()?;
    Reporter::report_build(&report, start.elapsed());

    if report.has_failures() {
        Reporter::report_error(&format!("{} mesh export(s) failed", report.failed()));
        Ok(false)
    } else {
        Reporter::success(&format!(
            "Wrote {} output(s) to {}",
            report.outputs.len(),
            driver.config().build.output_dir.display()
        ));
        Ok(true)
    }
}

fn list_command(config: &Config) {
    for output in default_outputs() {
        if config.build.matches_filter(&output.stem) {
            Reporter::report_info(&format!("{:<12} {}", output.stem, output.part.name()));
        }
    }
}

fn tree_command(config: &Config, stem: &str, slope: Option<&str>) -> Result<()> {
    let mut output =
        find_output(stem).ok_or_else(|| FootmountError::UnknownPart(stem.to_string()))?;

    if let Some(slope) = slope {
        let slope: SlopeStyle = slope.parse()?;
        match &mut output.part {
            PartSpec::Feet(options) => options.slope = slope,
            _ => warn!(stem, "Output has no wings, ignoring --slope"),
        }
    }

    let node = output.part.build(&config.parts);
    println!("{}", serde_json::to_string_pretty(&node)?);
    Ok(())
}
