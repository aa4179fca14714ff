use crate::domain::model::Mode;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "tally")]
#[command(about = "Counts words in files, or standard input when no file is given")]
pub struct CliConfig {
    #[arg(
        short = 'c',
        long = "count",
        conflicts_with = "frequency",
        help = "Count the total number of words (default)"
    )]
    pub count: bool,

    #[arg(
        short = 'f',
        long = "frequency",
        help = "Count the frequency of each word"
    )]
    pub frequency: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(value_name = "FILE", help = "Input files; standard input when omitted")]
    pub inputs: Vec<PathBuf>,
}

impl ConfigProvider for CliConfig {
    fn mode(&self) -> Mode {
        if self.frequency {
            Mode::Frequency
        } else {
            Mode::Count
        }
    }

    fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        for path in &self.inputs {
            validate_path("inputs", path)?;
        }
        Ok(())
    }
}
