pub mod engine;
pub mod ledger;
pub mod report;
pub mod sort;
pub mod tokenizer;

pub use crate::domain::model::{Mode, RunSummary, WordEntry};
pub use crate::domain::ports::{ConfigProvider, WordSink};
pub use crate::utils::error::Result;
