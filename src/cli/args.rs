//! Command line argument parsing for the Veracity CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::corpus::Label;

/// Veracity - a statistical real/fake headline classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "veracity")]
#[command(about = "A statistical real/fake headline classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct VeracityArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl VeracityArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a classifier and report held-out accuracy
    Train(TrainArgs),

    /// Classify a single headline (trains from the dataset first)
    Classify(ClassifyArgs),

    /// Show dataset class statistics
    Stats(StatsArgs),

    /// Show the most frequent terms for a class
    Terms(TermsArgs),
}

/// Arguments for training a classifier.
#[derive(Args, Debug, Clone)]
pub struct TrainArgs {
    /// Path to the labeled dataset (CSV with title and label columns)
    #[arg(short, long)]
    pub dataset: PathBuf,

    /// Fraction of the dataset held out for evaluation
    #[arg(long, default_value_t = 0.2)]
    pub test_fraction: f64,

    /// Random seed for the train/test split
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Arguments for classifying a headline.
///
/// Fitted models are in-memory only, so this command retrains from the
/// dataset before classifying.
#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// Path to the labeled dataset (CSV with title and label columns)
    #[arg(short, long)]
    pub dataset: PathBuf,

    /// Fraction of the dataset held out for evaluation
    #[arg(long, default_value_t = 0.2)]
    pub test_fraction: f64,

    /// Random seed for the train/test split
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Headline text to classify
    pub headline: String,
}

/// Arguments for dataset statistics.
#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the labeled dataset (CSV with title and label columns)
    #[arg(short, long)]
    pub dataset: PathBuf,
}

/// Arguments for per-class term frequencies.
#[derive(Args, Debug, Clone)]
pub struct TermsArgs {
    /// Path to the labeled dataset (CSV with title and label columns)
    #[arg(short, long)]
    pub dataset: PathBuf,

    /// Class to summarize
    #[arg(short, long)]
    pub label: LabelArg,

    /// Maximum number of terms to show
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

/// Class label as a CLI value.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelArg {
    /// Genuine headlines (dataset label 1)
    Real,
    /// Fabricated headlines (dataset label 0)
    Fake,
}

impl From<LabelArg> for Label {
    fn from(value: LabelArg) -> Label {
        match value {
            LabelArg::Real => Label::Real,
            LabelArg::Fake => Label::Fake,
        }
    }
}
