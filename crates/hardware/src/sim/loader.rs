//! Program image loader.
//!
//! This module reads program images and places them in memory. It performs:
//! 1. **Parsing:** Reads whitespace-separated decimal integers, each reduced modulo 4096.
//! 2. **Truncation:** Keeps at most 2048 values; anything after that is ignored.
//!    Text that is not a decimal integer ends the image early.
//! 3. **Placement:** Fills memory from address 0, clears the rest, and sets the start address.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::{Addr, MEMORY_SIZE, Result, SimError, WORD_MASK, Word};
use crate::core::machine::Machine;

/// Parses a program image.
///
/// Values may be negative; `-1` is stored as `0xFFF`, and integers of any
/// magnitude wrap modulo 4096. Parsing stops once memory is full, or at the
/// first token that does not begin with a decimal integer. Either way the
/// words read so far are kept and a warning is logged.
///
/// # Arguments
///
/// * `reader` - Source of the image text.
///
/// # Returns
///
/// The words in image order, at most `MEMORY_SIZE` of them.
///
/// # Errors
///
/// `SimError::ImageRead` on I/O failure.
pub fn parse_image<R: BufRead>(reader: R) -> Result<Vec<Word>> {
    let mut words = Vec::with_capacity(MEMORY_SIZE);

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| SimError::ImageRead { source })?;
        for token in line.split_whitespace() {
            if words.len() == MEMORY_SIZE {
                tracing::warn!(
                    line = idx + 1,
                    "program image exceeds {MEMORY_SIZE} words; ignoring the remainder"
                );
                return Ok(words);
            }
            let (value, rest) = parse_leading_decimal(token);
            if let Some(value) = value {
                words.push(value);
            }
            if !rest.is_empty() {
                tracing::warn!(
                    line = idx + 1,
                    token,
                    words = words.len(),
                    "program image stops at a non-integer token"
                );
                return Ok(words);
            }
        }
    }

    Ok(words)
}

/// Splits `token` into a leading signed decimal integer, reduced modulo
/// 4096, and whatever text follows it.
fn parse_leading_decimal(token: &str) -> (Option<Word>, &str) {
    let (negative, body) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    let digits = body.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return (None, token);
    }

    let modulus = i64::from(WORD_MASK) + 1;
    let magnitude = body.as_bytes()[..digits]
        .iter()
        .fold(0_i64, |acc, d| (acc * 10 + i64::from(d - b'0')) % modulus);
    let value = if negative { -magnitude } else { magnitude };
    (Some(Word::from_signed(value)), &body[digits..])
}

/// Copies `words` into memory from address 0.
///
/// # Returns
///
/// The number of words placed in memory.
pub fn load_image(machine: &mut Machine, words: &[Word], start: Addr) -> usize {
    let count = machine.load(words, start);
    tracing::debug!(words = count, start = start.val(), "program image loaded");
    count
}

/// Opens, parses and loads the image at `path`.
///
/// # Errors
///
/// `SimError::ImageOpen` if the file cannot be opened, otherwise any error
/// from [`parse_image`]. Memory is untouched on failure.
pub fn load_file<P: AsRef<Path>>(path: P, machine: &mut Machine, start: Addr) -> Result<usize> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SimError::ImageOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_image(BufReader::new(file))?;
    tracing::info!(path = %path.display(), words = words.len(), "read program image");
    Ok(load_image(machine, &words, start))
}
