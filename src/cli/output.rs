//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, VeracityArgs};
use crate::corpus::Label;
use crate::error::Result;
use crate::report::ClassCounts;

/// Result structure for training.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainResult {
    pub accuracy: f64,
    pub vocabulary_size: usize,
    pub training_headlines: usize,
    pub test_headlines: usize,
}

/// Result structure for classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResult {
    pub label: Label,
    pub verdict: String,
    pub confidence: f64,
}

/// Result structure for per-class term frequencies.
#[derive(Debug, Serialize, Deserialize)]
pub struct TermsResult {
    pub label: Label,
    pub terms: Vec<TermCount>,
}

/// A single term with its aggregate count.
#[derive(Debug, Serialize, Deserialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

/// Print a training result in the requested format.
pub fn print_train_result(result: &TrainResult, args: &VeracityArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(result, args.pretty),
        OutputFormat::Human => {
            println!("Model accuracy: {:.2}%", result.accuracy * 100.0);
            if args.verbosity() > 1 {
                println!("Vocabulary size: {}", result.vocabulary_size);
                println!(
                    "Partition: {} training / {} test headlines",
                    result.training_headlines, result.test_headlines
                );
            }
            Ok(())
        }
    }
}

/// Print a classification result in the requested format.
pub fn print_classify_result(result: &ClassifyResult, args: &VeracityArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(result, args.pretty),
        OutputFormat::Human => {
            println!(
                "{} | Confidence: {:.2}",
                result.verdict, result.confidence
            );
            Ok(())
        }
    }
}

/// Print dataset class counts in the requested format.
pub fn print_stats_result(counts: &ClassCounts, args: &VeracityArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(counts, args.pretty),
        OutputFormat::Human => {
            println!("Total samples: {}", counts.total);
            println!("Real headlines: {}", counts.real);
            println!("Fake headlines: {}", counts.fake);
            Ok(())
        }
    }
}

/// Print per-class term frequencies in the requested format.
pub fn print_terms_result(result: &TermsResult, args: &VeracityArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(result, args.pretty),
        OutputFormat::Human => {
            println!("Top terms for {} headlines:", result.label);
            for entry in &result.terms {
                println!("{:>8}  {}", entry.count, entry.term);
            }
            Ok(())
        }
    }
}
