pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{engine::CountEngine, ledger::WordLedger};
pub use crate::domain::model::{Mode, RunSummary, WordEntry};
pub use crate::utils::error::{Result, TallyError};
