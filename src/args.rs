//! Command-line flags.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::quiz::{LoadRequest, QuizError};

#[derive(Debug, Parser)]
#[command(
    name = "quizterm",
    version,
    about = "Trivia quiz in the terminal, with questions from Open Trivia DB"
)]
pub struct Cli {
    /// Question category, e.g. "History" (see --list-categories)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Number of questions in the session (1-50)
    #[arg(short = 'n', long)]
    pub amount: Option<u32>,

    /// Easy, Medium, Hard or "All Difficulty"
    #[arg(short, long)]
    pub difficulty: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the available categories and exit
    #[arg(long)]
    pub list_categories: bool,
}

impl Cli {
    /// Flags override the `[quiz]` section of the config.
    pub fn load_request(&self, config: &Config) -> Result<LoadRequest, QuizError> {
        LoadRequest::parse(
            Some(self.category.as_deref().unwrap_or(&config.quiz.category)),
            Some(self.amount.unwrap_or(config.quiz.amount)),
            Some(self.difficulty.as_deref().unwrap_or(&config.quiz.difficulty)),
        )
    }

    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    pub fn log_path(&self, config: &Config) -> PathBuf {
        self.log_file
            .clone()
            .or_else(|| config.logging.file.clone())
            .unwrap_or_else(Config::default_log_path)
    }
}
