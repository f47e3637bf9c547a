//! Helpers for cutting payloads into blocks in tests and benchmarks.

use alloc::vec::Vec;

/// Split `payload` into `parts` approximately equal-sized blocks.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_blocks(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    assert!(parts > 0);
    if payload.is_empty() {
        return Vec::new();
    }
    payload.chunks(payload.len().div_ceil(parts)).collect()
}

/// Split `payload` at the given cut points.
///
/// Each cut yields a block of `1 + cut % remaining` bytes, so any sequence of
/// numbers gives non-empty blocks whose concatenation is `payload`.
#[must_use]
pub fn split_at_cuts<'a>(payload: &'a [u8], cuts: &[usize]) -> Vec<&'a [u8]> {
    let mut blocks = Vec::with_capacity(cuts.len() + 1);
    let mut rest = payload;
    for &cut in cuts {
        if rest.is_empty() {
            break;
        }
        let (block, tail) = rest.split_at(1 + cut % rest.len());
        blocks.push(block);
        rest = tail;
    }
    if !rest.is_empty() {
        blocks.push(rest);
    }
    blocks
}
