//! Fast checks for pure 7-bit ASCII input.
//!
//! Bytes are tested a word at a time: a `u64` ANDed with
//! `0x8080_8080_8080_8080` is non-zero iff one of its eight bytes has the high
//! bit set. Short unaligned edges fall back to a byte-at-a-time scan.
//!
//! ```rust
//! use asciicheck::{ScanResult, is_ascii, validate};
//!
//! assert!(is_ascii(b"In het Nederlands komen bijzondere leestekens niet vaak voor."));
//! assert_eq!(validate(b"In sp\xe4terer Zeit"), ScanResult::Invalid(5));
//! ```
//!
//! Streams are checked block by block with [`validate_stream`] or a
//! [`StreamValidator`]; offsets are reported from the start of the stream.

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod driver;
mod error;
#[cfg(feature = "std")]
mod io;
mod options;
#[cfg(feature = "parallel")]
mod parallel;
mod scan_result;
pub mod scanner;
mod stream;

#[doc(hidden)]
pub mod chunk_utils;

#[cfg(test)]
mod tests;

pub use driver::{check, is_ascii, validate, validate_at};
pub use error::{CONTEXT_LEN, NonAsciiError};
#[cfg(feature = "std")]
pub use io::{DEFAULT_BLOCK_SIZE, ReaderSource};
pub use options::ValidateOptions;
#[cfg(feature = "parallel")]
pub use parallel::validate_parallel;
pub use scan_result::ScanResult;
pub use stream::{BlockSource, IterSource, StreamOutcome, StreamValidator, validate_stream};

/// [`validate`], picking a strategy by buffer size.
///
/// With the `parallel` feature, buffers of at least
/// [`ValidateOptions::parallel_threshold`] bytes are scanned on the rayon
/// pool. The result never depends on the strategy.
#[cfg_attr(not(feature = "parallel"), allow(unused_variables))]
pub fn validate_with(buf: &[u8], options: &ValidateOptions) -> ScanResult {
    #[cfg(feature = "parallel")]
    if buf.len() >= options.parallel_threshold {
        tracing::debug!(
            len = buf.len(),
            chunk_size = options.parallel_chunk_size,
            "validating in parallel"
        );
        return validate_parallel(buf, options.parallel_chunk_size);
    }
    validate(buf)
}
