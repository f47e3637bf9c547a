//! Scanners: the two leaf routines every validation is built from.
//!
//! What it does
//! - [`scan_words`] tests whole [`WORD_WIDTH`]-byte chunks with a single AND
//!   against [`HIGH_BIT_MASK`] per chunk, then locates the offending byte
//!   inside the first dirty chunk from the mask bits.
//! - [`scan_scalar`] tests bytes one at a time. It handles spans too short to
//!   fill a chunk and is the baseline the word path is checked against: it
//!   behaves exactly like [`scan_words`] would with a width of one.
//! - [`words_are_ascii`] and [`bytes_are_ascii`] are the boolean variants.
//!   They OR every unit together and test the mask once, so the loop body
//!   never branches on the data.
//! - Both word routines first walk [`STRIDE_WIDTH`]-byte strides, four
//!   independent `u64` lanes at a time, the width of one 256-bit vector
//!   register. Whole words left over after the last stride go through the
//!   single-word loop.
//!
//! Invariants
//! - Chunks are read with `u64::from_le_bytes`, so byte `i` of a chunk always
//!   lands in bits `8 * i .. 8 * i + 8` regardless of the host's endianness.
//! - Offsets returned are relative to the span passed in.
//!
//! Example
//! ```rust
//! use asciicheck::{ScanResult, scanner};
//!
//! let span = *b"abcdefgh\xC3bcdefgh";
//! assert_eq!(scanner::scan_words(&span[..16]), ScanResult::Invalid(8));
//! assert_eq!(scanner::scan_scalar(&span[..16]), ScanResult::Invalid(8));
//! ```

use crate::ScanResult;

/// Number of bytes the word scanner tests per step.
///
/// Buffers are split into an unaligned head, a body of whole chunks of this
/// width and an unaligned tail; see [`crate::validate_at`].
pub const WORD_WIDTH: usize = core::mem::size_of::<u64>();

/// Bit 7 of a single byte. A byte is ASCII iff this bit is clear.
pub const HIGH_BIT: u8 = 0x80;

/// [`HIGH_BIT`] repeated across every byte of a word.
pub const HIGH_BIT_MASK: u64 = 0x8080_8080_8080_8080;

/// Bytes per stride of the wide loop: four words.
pub const STRIDE_WIDTH: usize = 4 * WORD_WIDTH;

#[inline]
fn load_word(chunk: &[u8]) -> u64 {
    let mut bytes = [0u8; WORD_WIDTH];
    bytes.copy_from_slice(chunk);
    u64::from_le_bytes(bytes)
}

/// OR of the four words of a stride.
#[inline]
fn fold_stride(stride: &[u8]) -> u64 {
    let mut lanes = [0u64; 4];
    for (lane, chunk) in lanes.iter_mut().zip(stride.chunks_exact(WORD_WIDTH)) {
        *lane = load_word(chunk);
    }
    (lanes[0] | lanes[1]) | (lanes[2] | lanes[3])
}

fn assert_whole_words(span: &[u8]) {
    assert!(
        span.len() % WORD_WIDTH == 0,
        "word span of {} bytes is not a multiple of {WORD_WIDTH}",
        span.len()
    );
}

/// Scan a span of whole words for the first non-ASCII byte.
///
/// # Panics
///
/// Panics if `span.len()` is not a multiple of [`WORD_WIDTH`].
#[must_use]
pub fn scan_words(span: &[u8]) -> ScanResult {
    assert_whole_words(span);
    // Skip clean strides; the word loop below starts at the first dirty one.
    let clean = span
        .chunks_exact(STRIDE_WIDTH)
        .take_while(|stride| fold_stride(stride) & HIGH_BIT_MASK == 0)
        .count()
        * STRIDE_WIDTH;
    for (index, chunk) in span[clean..].chunks_exact(WORD_WIDTH).enumerate() {
        let masked = load_word(chunk) & HIGH_BIT_MASK;
        if masked != 0 {
            // Little-endian load: the lowest set bit belongs to the first
            // offending byte.
            let in_chunk = (masked.trailing_zeros() / 8) as usize;
            return ScanResult::Invalid(clean + index * WORD_WIDTH + in_chunk);
        }
    }
    ScanResult::Valid
}

/// Scan `span` byte by byte, stopping at the first non-ASCII byte.
#[must_use]
pub fn scan_scalar(span: &[u8]) -> ScanResult {
    match span.iter().position(|&b| b & HIGH_BIT != 0) {
        Some(offset) => ScanResult::Invalid(offset),
        None => ScanResult::Valid,
    }
}

/// Boolean form of [`scan_words`].
///
/// # Panics
///
/// Panics if `span.len()` is not a multiple of [`WORD_WIDTH`].
#[must_use]
pub fn words_are_ascii(span: &[u8]) -> bool {
    assert_whole_words(span);
    let strides = span.chunks_exact(STRIDE_WIDTH);
    let leftover = strides.remainder();
    let all_words = strides.fold(0u64, |acc, stride| acc | fold_stride(stride));
    let all_words = leftover
        .chunks_exact(WORD_WIDTH)
        .fold(all_words, |acc, chunk| acc | load_word(chunk));
    all_words & HIGH_BIT_MASK == 0
}

/// Boolean form of [`scan_scalar`].
#[must_use]
pub fn bytes_are_ascii(span: &[u8]) -> bool {
    span.iter().fold(0u8, |acc, &b| acc | b) & HIGH_BIT == 0
}
