use crate::core::ledger::WordLedger;
use crate::utils::error::Result;
use std::io::Write;

/// Writes one `<count>\t<word>` line per entry, in the ledger's current
/// traversal order. Sort first for an ordered report.
pub fn write_entries<W: Write>(ledger: &WordLedger, mut out: W) -> Result<()> {
    for entry in ledger.iter() {
        writeln!(out, "{}\t{}", entry.count, entry.word)?;
    }
    Ok(())
}
