//! Command implementations for the Veracity CLI.

use crate::analysis::analyzer::StandardAnalyzer;
use crate::classification::{self, TrainOptions};
use crate::cli::args::{
    ClassifyArgs, Command, StatsArgs, TermsArgs, TrainArgs, VeracityArgs,
};
use crate::cli::output::*;
use crate::corpus::{Corpus, Label};
use crate::error::{Result, VeracityError};
use crate::report;

/// Execute a CLI command.
pub fn execute_command(args: VeracityArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args.clone(), &args),
        Command::Classify(classify_args) => classify(classify_args.clone(), &args),
        Command::Stats(stats_args) => stats(stats_args.clone(), &args),
        Command::Terms(terms_args) => terms(terms_args.clone(), &args),
    }
}

/// Train a classifier and report held-out accuracy.
fn train(args: TrainArgs, cli_args: &VeracityArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading dataset from: {}", args.dataset.display());
    }

    let corpus = Corpus::from_csv_path(&args.dataset)?;
    let options = TrainOptions::default()
        .with_test_fraction(args.test_fraction)
        .with_seed(args.seed);

    let (pipeline, accuracy) = classification::train(&corpus, &options)?;

    let test_headlines = (corpus.len() as f64 * args.test_fraction).round() as usize;
    let result = TrainResult {
        accuracy,
        vocabulary_size: pipeline.vocabulary_size(),
        training_headlines: corpus.len() - test_headlines,
        test_headlines,
    };

    print_train_result(&result, cli_args)
}

/// Classify a single headline, training from the dataset first.
fn classify(args: ClassifyArgs, cli_args: &VeracityArgs) -> Result<()> {
    // Reject blank input before doing any training work; the core would
    // reject it too, but only after a full fit.
    if args.headline.trim().is_empty() {
        return Err(VeracityError::validation("headline must not be empty"));
    }

    let corpus = Corpus::from_csv_path(&args.dataset)?;
    let options = TrainOptions::default()
        .with_test_fraction(args.test_fraction)
        .with_seed(args.seed);

    let (pipeline, accuracy) = classification::train(&corpus, &options)?;
    if cli_args.verbosity() > 1 {
        println!("Model accuracy: {:.2}%", accuracy * 100.0);
    }

    let prediction = classification::classify(&pipeline, &args.headline)?;
    let verdict = match prediction.label {
        Label::Real => "REAL NEWS".to_string(),
        Label::Fake => "FAKE NEWS".to_string(),
    };

    let result = ClassifyResult {
        label: prediction.label,
        verdict,
        confidence: prediction.confidence,
    };

    print_classify_result(&result, cli_args)
}

/// Show dataset class statistics.
fn stats(args: StatsArgs, cli_args: &VeracityArgs) -> Result<()> {
    let corpus = Corpus::from_csv_path(&args.dataset)?;
    let counts = report::class_counts(&corpus);

    print_stats_result(&counts, cli_args)
}

/// Show the most frequent terms for a class.
fn terms(args: TermsArgs, cli_args: &VeracityArgs) -> Result<()> {
    let corpus = Corpus::from_csv_path(&args.dataset)?;
    let analyzer = StandardAnalyzer::new()?;

    let frequencies = report::term_frequencies(&corpus, args.label.into(), &analyzer)?;
    let terms = frequencies
        .into_iter()
        .take(args.limit)
        .map(|(term, count)| TermCount { term, count })
        .collect();

    let result = TermsResult {
        label: args.label.into(),
        terms,
    };

    print_terms_result(&result, cli_args)
}
