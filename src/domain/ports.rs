use crate::domain::model::Mode;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Runtime configuration the engine reads, regardless of where it came from.
pub trait ConfigProvider {
    fn mode(&self) -> Mode;
    /// Input files in argument order; empty means read standard input.
    fn inputs(&self) -> &[PathBuf];
    fn verbose(&self) -> bool;
}

/// Receives completed words from the tokenizer's materializing path.
///
/// The ledger is the usual sink; the seam exists so a failure in the sink
/// (for example an I/O-backed one) propagates instead of being swallowed
/// mid-scan.
pub trait WordSink {
    fn accept(&mut self, word: &str) -> Result<()>;
}
