//! Multi-threaded validation of large buffers.
//!
//! The buffer is cut into independent sub-ranges scanned on the rayon pool.
//! `find_map_first` returns the hit from the lowest sub-range and stops
//! scheduling sub-ranges that lie after an already-found offender.

use rayon::prelude::*;

use crate::{ScanResult, driver::validate, scanner::WORD_WIDTH};

/// Validate `buf` in parallel sub-ranges of `chunk_size` bytes.
///
/// `chunk_size` is rounded up to a multiple of [`WORD_WIDTH`], or down when
/// rounding up would overflow. The result is identical to [`validate`].
///
/// # Panics
///
/// Panics if `chunk_size` is zero.
pub fn validate_parallel(buf: &[u8], chunk_size: usize) -> ScanResult {
    assert!(chunk_size > 0, "parallel chunk size must be non-zero");
    let chunk_size = chunk_size
        .checked_next_multiple_of(WORD_WIDTH)
        .unwrap_or(usize::MAX & !(WORD_WIDTH - 1));
    buf.par_chunks(chunk_size)
        .enumerate()
        .find_map_first(|(index, range)| {
            validate(range)
                .invalid_offset()
                .map(|offset| index * chunk_size + offset)
        })
        .into()
}
