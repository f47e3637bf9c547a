//! [`BlockSource`] over [`std::io::Read`].

use std::{
    io::{self, ErrorKind, Read},
    vec,
    vec::Vec,
};

use crate::stream::BlockSource;

/// Block size used by [`ReaderSource::new`]: 128 KiB.
pub const DEFAULT_BLOCK_SIZE: usize = 128 * 1024;

/// Reads a stream in fixed-size blocks, reusing one buffer.
///
/// ```rust
/// use asciicheck::{ReaderSource, ScanResult, validate_stream};
///
/// let input: &[u8] = b"GET / HTTP/1.1\r\n";
/// let outcome = validate_stream(ReaderSource::new(input))?;
/// assert_eq!(outcome.result, ScanResult::Valid);
/// assert_eq!(outcome.bytes_scanned, 16);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: Read> ReaderSource<R> {
    /// Read in blocks of [`DEFAULT_BLOCK_SIZE`].
    pub fn new(reader: R) -> Self {
        Self::with_block_size(reader, DEFAULT_BLOCK_SIZE)
    }

    /// Read in blocks of at most `block_size` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `block_size` is zero.
    pub fn with_block_size(reader: R, block_size: usize) -> Self {
        assert!(block_size > 0, "block size must be non-zero");
        Self {
            reader,
            buf: vec![0; block_size],
        }
    }

    /// Give back the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> BlockSource for ReaderSource<R> {
    type Error = io::Error;

    fn next_block(&mut self) -> io::Result<Option<&[u8]>> {
        let n = loop {
            match self.reader.read(&mut self.buf) {
                Ok(n) => break n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        };
        Ok((n > 0).then(|| &self.buf[..n]))
    }
}
