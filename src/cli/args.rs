//! Command line argument parsing for the symptomatch CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Symptomatch - match symptoms to likely conditions
#[derive(Parser, Debug, Clone)]
#[command(name = "symptomatch")]
#[command(about = "Match symptoms to likely conditions, with fuzzy symptom entry")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SymptomatchArgs {
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

    /// Catalog file (JSON) to use instead of the builtin catalog
    #[arg(long, value_name = "CATALOG_FILE", env = "SYMPTOMATCH_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SymptomatchArgs {
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

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Edit distance between two strings
    Distance(DistanceArgs),

    /// Spell-correct a free-text symptom
    Correct(CorrectArgs),

    /// Autocomplete a partially typed symptom name
    Suggest(SuggestArgs),

    /// Rank conditions for a set of symptoms
    Match(MatchArgs),

    /// List catalog symptoms
    Symptoms(SymptomsArgs),

    /// List catalog conditions
    Conditions,

    /// Check catalog integrity
    Validate,
}

/// Arguments for the distance command
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// First string
    #[arg(value_name = "A")]
    pub a: String,

    /// Second string
    #[arg(value_name = "B")]
    pub b: String,
}

/// Arguments for spelling correction
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Text to correct
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for autocomplete
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Partially typed symptom name
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Maximum number of suggestions to return
    #[arg(short, long, default_value = "5")]
    pub limit: usize,

    /// Show the tier each suggestion matched on
    #[arg(long)]
    pub tiers: bool,
}

/// Arguments for condition matching
#[derive(Parser, Debug, Clone)]
pub struct MatchArgs {
    /// Symptom ids
    #[arg(value_name = "SYMPTOM_ID")]
    pub ids: Vec<String>,

    /// Free-text symptom, resolved through spelling correction (repeatable)
    #[arg(short, long = "text", value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Include scores and matched symptoms
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for listing symptoms
#[derive(Parser, Debug, Clone)]
pub struct SymptomsArgs {
    /// Only list symptoms in this category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
