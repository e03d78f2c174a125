//! CLI options.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use perfindex_cli::pipeline::{DEFAULT_SEED, DEFAULT_TEST_RATIO};
use perfindex_cli::PipelineConfig;
use perfindex_datasets::StudyFactors;

/// Predicts a student's performance index from their study habits
#[derive(Parser, Debug)]
#[command(name = "perfindex")]
#[command(author, version, about, long_about = None)]
pub struct Opts {
    /// Student performance dataset, plain or gzipped CSV
    #[arg(
        long,
        global = true,
        env = "PERFINDEX_DATASET",
        default_value = "assets/student_performance_sample.csv"
    )]
    pub dataset: PathBuf,

    /// Seed of the train/test split
    #[arg(long, global = true, env = "PERFINDEX_SEED", default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Share of the dataset held back for evaluation
    #[arg(long, global = true, default_value_t = DEFAULT_TEST_RATIO)]
    pub test_ratio: f64,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Increases log verbosity
    #[arg(short, long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub subcommand: Command,
}

impl Opts {
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            seed: self.seed,
            test_ratio: self.test_ratio,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Predicts the performance index of a single student
    Predict(PredictOpts),

    /// Predicts every row of a query file
    Batch(BatchOpts),

    /// Shows how strongly each factor relates to the performance index
    Correlation,
}

#[derive(Args, Debug)]
pub struct PredictOpts {
    /// Hours studied per day, 0 to 10
    #[arg(long)]
    pub hours_studied: u32,

    /// Score of previous exams, 0 to 100
    #[arg(long)]
    pub previous_scores: f64,

    /// Takes part in extracurricular activities
    #[arg(long, value_enum)]
    pub extracurricular: YesNo,

    /// Average hours of sleep per day, 0 to 12
    #[arg(long)]
    pub sleep_hours: u32,

    /// Sample question papers practiced, 0 to 10
    #[arg(long)]
    pub papers_practiced: u32,
}

impl PredictOpts {
    pub fn to_factors(&self) -> StudyFactors {
        StudyFactors {
            hours_studied: self.hours_studied,
            previous_scores: self.previous_scores,
            extracurricular_activities: self.extracurricular == YesNo::Yes,
            sleep_hours: self.sleep_hours,
            sample_question_papers_practiced: self.papers_practiced,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum YesNo {
    Yes,
    No,
}

#[derive(Args, Debug)]
pub struct BatchOpts {
    /// CSV file with the five study factor columns, one query per row
    #[arg(long)]
    pub queries: PathBuf,
}
