//! Composes the scanners into whole-buffer checks.

use crate::{
    ScanResult,
    error::NonAsciiError,
    scanner::{WORD_WIDTH, bytes_are_ascii, scan_scalar, scan_words, words_are_ascii},
};

/// A buffer split into an unaligned head, a body of whole words and an
/// unaligned tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Partition<'a> {
    pub head: &'a [u8],
    pub body: &'a [u8],
    pub tail: &'a [u8],
}

impl<'a> Partition<'a> {
    /// Split `buf`, whose first byte sits at logical position `origin`, on
    /// the [`WORD_WIDTH`] grid anchored at position zero.
    pub fn new(buf: &'a [u8], origin: usize) -> Self {
        let head_len = ((WORD_WIDTH - origin % WORD_WIDTH) % WORD_WIDTH).min(buf.len());
        let (head, rest) = buf.split_at(head_len);
        let body_len = rest.len() - rest.len() % WORD_WIDTH;
        let (body, tail) = rest.split_at(body_len);
        Self { head, body, tail }
    }
}

/// Find the first non-ASCII byte in `buf`.
///
/// ```rust
/// use asciicheck::{ScanResult, validate};
///
/// assert_eq!(validate(b"plain text"), ScanResult::Valid);
/// assert_eq!(validate("na\u{ef}ve".as_bytes()), ScanResult::Invalid(2));
/// ```
pub fn validate(buf: &[u8]) -> ScanResult {
    validate_at(buf, 0)
}

/// Like [`validate`], but groups words as if `buf` started at logical
/// position `origin`.
///
/// The returned offset is still relative to `buf`. The result never depends
/// on `origin`; only which bytes go through the word scanner does.
pub fn validate_at(buf: &[u8], origin: usize) -> ScanResult {
    let Partition { head, body, tail } = Partition::new(buf, origin);

    if let ScanResult::Invalid(offset) = scan_scalar(head) {
        return ScanResult::Invalid(offset);
    }
    if let ScanResult::Invalid(offset) = scan_words(body) {
        return ScanResult::Invalid(head.len() + offset);
    }
    scan_scalar(tail).offset_by(head.len() + body.len())
}

/// Returns `true` if every byte of `buf` is ASCII.
///
/// Faster than [`validate`] when the position is not needed: the whole
/// buffer is folded into one word and tested once.
#[must_use]
pub fn is_ascii(buf: &[u8]) -> bool {
    let Partition { head, body, tail } = Partition::new(buf, 0);
    bytes_are_ascii(head) && words_are_ascii(body) && bytes_are_ascii(tail)
}

/// [`validate`] as a `Result`.
///
/// # Errors
///
/// Returns a [`NonAsciiError`] describing the first non-ASCII byte.
///
/// ```rust
/// let err = asciicheck::check(b"caf\xC3\xA9").unwrap_err();
/// assert_eq!((err.offset, err.byte), (3, 0xC3));
/// ```
pub fn check(buf: &[u8]) -> Result<(), NonAsciiError> {
    validate(buf).into_result(buf)
}
