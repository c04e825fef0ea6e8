//! `pascal-simplex` — Prints Pascal simplices, their hyperplane sums and the
//! matching recurrence, and runs the exhaustive validation sweep.
//!
//! **Usage:**
//! ```text
//! pascal-simplex build --layers <N> --dimension <D> [--json]
//! pascal-simplex hypersums --layers <N> --dimension <D> --slope <M> [--json]
//! pascal-simplex sequence --dimension <D> --slope <M> --length <N> [--json]
//! pascal-simplex validate [--max-dimension <D>] [--max-slope <M>] [--max-length <N>]
//!                         [--bounds <file.json>] [--verbose]
//! pascal-simplex demo
//! ```
//!
//! `validate` exits non-zero if any triple disagrees. Log verbosity follows
//! `RUST_LOG` (default `pascal_simplex=info`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pascal_simplex::{
    build, hypersums, sequence, validate_report, BigUint, Severity, SimplexNode, ValidationBounds,
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Explore Pascal simplices and their hyperplane sums.
#[derive(Parser)]
#[command(
    name = "pascal-simplex",
    about = "Pascal simplices, hyperplane sums, and their recurrence"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every layer of a simplex.
    Build {
        /// Number of layers.
        #[arg(long)]
        layers: usize,
        /// Number of parts per multi-index (2 = Pascal's Triangle).
        #[arg(long)]
        dimension: usize,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print the hyperplane sums of a simplex.
    Hypersums {
        /// Number of layers.
        #[arg(long)]
        layers: usize,
        /// Number of parts per multi-index.
        #[arg(long)]
        dimension: usize,
        /// Hyperplane slope.
        #[arg(long)]
        slope: usize,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print the recurrence terms without building a simplex.
    Sequence {
        /// Number of parts per multi-index.
        #[arg(long)]
        dimension: usize,
        /// Hyperplane slope.
        #[arg(long)]
        slope: usize,
        /// Number of terms.
        #[arg(long)]
        length: usize,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Cross-check hypersums against the recurrence over a parameter sweep.
    Validate {
        /// Exclusive upper bound on dimension.
        #[arg(long)]
        max_dimension: Option<usize>,
        /// Exclusive upper bound on slope.
        #[arg(long)]
        max_slope: Option<usize>,
        /// Exclusive upper bound on length.
        #[arg(long)]
        max_length: Option<usize>,
        /// JSON file with bounds; flags take precedence.
        #[arg(long)]
        bounds: Option<PathBuf>,
        /// Also print passing checks.
        #[arg(long)]
        verbose: bool,
    },
    /// Print Pascal's Triangle and Pascal's Tetrahedron with their sums.
    Demo,
}

#[derive(Serialize)]
struct SequenceOutput {
    dimension: usize,
    slope: usize,
    values: Vec<SimplexNode>,
}

impl SequenceOutput {
    fn new(dimension: usize, slope: usize, values: Vec<BigUint>) -> Self {
        Self {
            dimension,
            slope,
            values: values.into_iter().map(SimplexNode::Scalar).collect(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new("pascal_simplex=info"))?,
        )
        .with_writer(std::io::stderr)
        .init();

    match Args::parse().command {
        Command::Build {
            layers,
            dimension,
            json,
        } => {
            let simplex = build(layers, dimension)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&simplex)?);
            } else {
                print!("{simplex}");
            }
        }
        Command::Hypersums {
            layers,
            dimension,
            slope,
            json,
        } => {
            let sums = hypersums(&build(layers, dimension)?, slope)?;
            print_sequence(SequenceOutput::new(dimension, slope, sums), json)?;
        }
        Command::Sequence {
            dimension,
            slope,
            length,
            json,
        } => {
            let terms = sequence(dimension, slope, length)?;
            print_sequence(SequenceOutput::new(dimension, slope, terms), json)?;
        }
        Command::Validate {
            max_dimension,
            max_slope,
            max_length,
            bounds,
            verbose,
        } => {
            let mut resolved = match bounds {
                Some(path) => load_bounds(&path)?,
                None => ValidationBounds::default(),
            };
            resolved.max_dimension = max_dimension.unwrap_or(resolved.max_dimension);
            resolved.max_slope = max_slope.unwrap_or(resolved.max_slope);
            resolved.max_length = max_length.unwrap_or(resolved.max_length);
            run_validation(&resolved, verbose);
        }
        Command::Demo => demo()?,
    }
    Ok(())
}

fn load_bounds(path: &Path) -> Result<ValidationBounds> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as validation bounds", path.display()))
}

fn print_sequence(output: SequenceOutput, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", SimplexNode::Nested(output.values));
    }
    Ok(())
}

fn run_validation(bounds: &ValidationBounds, verbose: bool) {
    info!(triples = bounds.triple_count(), ?bounds, "starting validation sweep");
    let report = validate_report(bounds);

    println!("Pascal Simplex Validation Report");
    println!("================================");
    println!(
        "dimension < {}, slope < {}, length < {}",
        bounds.max_dimension, bounds.max_slope, bounds.max_length
    );
    println!();

    for result in &report.results {
        let status = match result.severity {
            Severity::Pass if !verbose => continue,
            Severity::Pass => "PASS",
            Severity::Failure => "FAIL",
        };
        println!("[{}] {} — {}", status, result.parameters, result.message);
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    let failed = report.failure_count();
    println!();
    println!(
        "Summary: {} passed, {} failed",
        report.pass_count(),
        failed
    );

    if failed > 0 {
        eprintln!("Validation FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    println!("Validation PASSED.");
}

fn demo() -> Result<()> {
    for (title, dimension) in [("Pascal's Triangle", 2usize), ("Pascal's Tetrahedron", 3)] {
        let simplex = build(6, dimension)?;
        println!("{title} (dimension {dimension})");
        print!("{simplex}");
        for slope in 1..=2 {
            let sums = hypersums(&simplex, slope)?;
            let terms = sequence(dimension, slope, simplex.len())?;
            let agree = if sums == terms { "agrees" } else { "DISAGREES" };
            println!(
                "  slope {slope}: hypersums {} {agree} with recurrence {}",
                SimplexNode::Nested(sums.into_iter().map(SimplexNode::Scalar).collect()),
                SimplexNode::Nested(terms.into_iter().map(SimplexNode::Scalar).collect()),
            );
        }
        println!();
    }
    Ok(())
}
