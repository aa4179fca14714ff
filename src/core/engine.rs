use crate::core::ledger::WordLedger;
use crate::core::report;
use crate::core::sort::{sort_entries, wordcount_less};
use crate::core::tokenizer;
use crate::core::{ConfigProvider, Mode, RunSummary};
use crate::utils::error::{Result, TallyError};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

/// Drives one full run: opens each input, feeds it through the tokenizer,
/// and renders the requested report to `out`.
///
/// An input that cannot be opened is reported and skipped; the run carries on
/// with the remaining inputs and still completes normally.
pub struct CountEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> CountEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        tracing::debug!(
            "starting {:?} run over {} input(s)",
            self.config.mode(),
            self.config.inputs().len()
        );

        match self.config.mode() {
            Mode::Count => self.run_count(out),
            Mode::Frequency => self.run_frequency(out),
        }
    }

    fn run_count<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        if self.config.inputs().is_empty() {
            summary.total_words = tokenizer::count_words(io::stdin().lock())?;
        } else {
            for path in self.config.inputs() {
                let Some(reader) = open_input(path, &mut summary) else {
                    continue;
                };
                summary.total_words += tokenizer::count_words(reader)?;
            }
        }

        writeln!(out, "The total number of words is: {}", summary.total_words)?;
        Ok(summary)
    }

    fn run_frequency<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        let mut ledger = WordLedger::new();

        if self.config.inputs().is_empty() {
            tokenizer::scan_words(io::stdin().lock(), &mut ledger)?;
        } else {
            for path in self.config.inputs() {
                let Some(reader) = open_input(path, &mut summary) else {
                    continue;
                };
                tokenizer::scan_words(reader, &mut ledger)?;
            }
        }

        sort_entries(&mut ledger, wordcount_less);

        summary.total_words = ledger.iter().map(|e| e.count).sum();
        summary.distinct_words = ledger.len();

        // Trailing space before the newline is part of the report format.
        writeln!(out, "The frequencies of each word are: ")?;
        report::write_entries(&ledger, out)?;
        Ok(summary)
    }
}

/// Opens one input file. On failure, names the path on stderr and records the
/// skip; the handle returned here is dropped at the end of the caller's loop
/// iteration, so the stream is released on every exit path.
fn open_input(path: &Path, summary: &mut RunSummary) -> Option<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Some(BufReader::new(file)),
        Err(e) => {
            let err = TallyError::InputOpen {
                path: path.display().to_string(),
                source: e,
            };
            tracing::warn!("skipping input: {}", err);
            eprintln!("❌ {}", err);
            summary.skipped_inputs.push(path.to_path_buf());
            None
        }
    }
}
