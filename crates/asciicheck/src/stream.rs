//! Streaming validation over a sequence of byte blocks.
//!
//! ASCII has no cross-byte state, so the only thing carried from one block to
//! the next is the running byte count used to translate block-local offsets
//! into stream offsets. Each block is checked with [`validate_at`] anchored at
//! its stream position, which keeps word reads on the stream's global
//! [`WORD_WIDTH`](crate::scanner::WORD_WIDTH) grid.

use core::convert::Infallible;

use crate::{ScanResult, driver::validate_at};

/// Supplies successive blocks of a stream.
///
/// `Ok(None)` or an empty block ends the stream. Errors are passed through
/// [`validate_stream`] unchanged.
pub trait BlockSource {
    /// Failure to produce the next block.
    type Error;

    /// Produce the next block, or `None` at end of stream.
    ///
    /// # Errors
    ///
    /// Whatever the underlying source fails with.
    fn next_block(&mut self) -> Result<Option<&[u8]>, Self::Error>;
}

impl<S: BlockSource + ?Sized> BlockSource for &mut S {
    type Error = S::Error;

    fn next_block(&mut self) -> Result<Option<&[u8]>, Self::Error> {
        (**self).next_block()
    }
}

/// A [`BlockSource`] over an iterator of in-memory blocks.
///
/// ```rust
/// use asciicheck::{IterSource, ScanResult, validate_stream};
///
/// let blocks = ["hello ", "w\u{f6}rld"];
/// let outcome = validate_stream(IterSource::new(blocks)).unwrap();
/// assert_eq!(outcome.result, ScanResult::Invalid(7));
/// ```
pub struct IterSource<I: Iterator> {
    blocks: I,
    current: Option<I::Item>,
}

impl<I: Iterator> IterSource<I> {
    /// Wrap anything iterable over byte blocks.
    pub fn new<B: IntoIterator<IntoIter = I>>(blocks: B) -> Self {
        Self {
            blocks: blocks.into_iter(),
            current: None,
        }
    }
}

impl<I> BlockSource for IterSource<I>
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
{
    type Error = Infallible;

    fn next_block(&mut self) -> Result<Option<&[u8]>, Infallible> {
        self.current = self.blocks.next();
        Ok(self.current.as_ref().map(AsRef::as_ref))
    }
}

/// Final answer for a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamOutcome {
    /// `Invalid` carries the offset from the start of the stream.
    pub result: ScanResult,
    /// Bytes confirmed ASCII: the stream length when valid, otherwise the
    /// offset of the offending byte.
    pub bytes_scanned: u64,
}

/// Push-style stream validator.
///
/// Feed blocks in order with [`feed`](Self::feed). Once a non-ASCII byte is
/// found the validator is terminal and later blocks are ignored.
#[derive(Debug, Clone, Default)]
pub struct StreamValidator {
    bytes_confirmed: u64,
    failed_at: Option<u64>,
}

impl StreamValidator {
    /// Start a new stream at offset zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the next block.
    ///
    /// Returns the stream-level result so far: `Invalid` with a stream
    /// offset as soon as any block has failed.
    ///
    /// # Panics
    ///
    /// Panics if the stream offset does not fit in `usize`.
    pub fn feed(&mut self, block: &[u8]) -> ScanResult {
        if let Some(offset) = self.failed_at {
            tracing::trace!(len = block.len(), "stream already failed; block ignored");
            return ScanResult::Invalid(to_usize(offset));
        }

        // Only the grid phase matters for alignment.
        #[allow(clippy::cast_possible_truncation)]
        let origin = (self.bytes_confirmed % crate::scanner::WORD_WIDTH as u64) as usize;
        tracing::trace!(position = self.bytes_confirmed, len = block.len(), "scanning block");

        match validate_at(block, origin) {
            ScanResult::Valid => {
                self.bytes_confirmed += block.len() as u64;
                ScanResult::Valid
            }
            ScanResult::Invalid(local) => {
                let offset = self.bytes_confirmed + local as u64;
                tracing::debug!(offset, "non-ASCII byte found; stream terminated");
                self.failed_at = Some(offset);
                self.bytes_confirmed = offset;
                ScanResult::Invalid(to_usize(offset))
            }
        }
    }

    /// Bytes confirmed ASCII so far.
    #[must_use]
    pub fn bytes_confirmed(&self) -> u64 {
        self.bytes_confirmed
    }

    /// Whether a non-ASCII byte has been found.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.failed_at.is_some()
    }

    /// Finish the stream.
    ///
    /// # Panics
    ///
    /// Panics if the failure offset does not fit in `usize`.
    #[must_use]
    pub fn finish(self) -> StreamOutcome {
        let result = self.failed_at.map(to_usize).into();
        StreamOutcome {
            result,
            bytes_scanned: self.bytes_confirmed,
        }
    }
}

fn to_usize(offset: u64) -> usize {
    usize::try_from(offset).expect("stream offset exceeds usize")
}

/// Validate every block `source` produces, stopping at the first non-ASCII
/// byte.
///
/// Blocks are requested one at a time and none are requested after a
/// failure.
///
/// # Errors
///
/// Propagates the source's error unchanged.
pub fn validate_stream<S: BlockSource>(mut source: S) -> Result<StreamOutcome, S::Error> {
    let mut validator = StreamValidator::new();
    while let Some(block) = source.next_block()? {
        if block.is_empty() {
            break;
        }
        if !validator.feed(block).is_valid() {
            break;
        }
    }
    let outcome = validator.finish();
    tracing::debug!(
        valid = outcome.result.is_valid(),
        bytes_scanned = outcome.bytes_scanned,
        "stream finished"
    );
    Ok(outcome)
}
