use crate::domain::ports::WordSink;
use crate::utils::error::Result;
use std::io::Read;

const SPACE: u8 = b' ';
const NEWLINE: u8 = b'\n';

/// Word bytes are everything that is not a separator. Only space and newline
/// separate words; tabs, punctuation and any other bytes belong to the word.
fn is_word_byte(b: u8) -> bool {
    b != SPACE && b != NEWLINE
}

fn is_separator(b: u8) -> bool {
    b == SPACE || b == NEWLINE
}

/// Initial word buffer capacity; `Vec` doubles from here as needed.
const WORD_BUF_CAPACITY: usize = 16;

/// Counts words in `input` without materializing them.
///
/// A word ends when a separator (or end of stream) follows a word byte, so
/// runs of separators contribute nothing and a trailing word without a final
/// newline still counts. One byte of lookback is the only state.
pub fn count_words<R: Read>(input: R) -> Result<u64> {
    let mut total: u64 = 0;
    let mut prev = SPACE;

    for byte in input.bytes() {
        let b = byte?;
        if is_separator(b) && is_word_byte(prev) {
            total += 1;
        }
        prev = b;
    }

    if is_word_byte(prev) {
        total += 1;
    }

    Ok(total)
}

/// Scans `input` with the same boundary rule as [`count_words`], handing each
/// completed word to `sink` as an owned copy.
///
/// Words are accumulated as raw bytes and lossy-converted at the sink
/// boundary, so malformed UTF-8 degrades to replacement characters instead of
/// failing the scan.
pub fn scan_words<R: Read, S: WordSink>(input: R, sink: &mut S) -> Result<()> {
    let mut buf: Vec<u8> = Vec::with_capacity(WORD_BUF_CAPACITY);
    let mut prev = SPACE;

    for byte in input.bytes() {
        let b = byte?;
        if is_word_byte(b) {
            buf.push(b);
        }
        if is_separator(b) && is_word_byte(prev) {
            sink.accept(&String::from_utf8_lossy(&buf))?;
            buf.clear();
        }
        prev = b;
    }

    if is_word_byte(prev) {
        sink.accept(&String::from_utf8_lossy(&buf))?;
    }

    Ok(())
}
