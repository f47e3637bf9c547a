use bstr::{BString, ByteSlice};
use thiserror::Error;

/// Bytes of preceding input kept in [`NonAsciiError::context`].
pub const CONTEXT_LEN: usize = 16;

/// A non-ASCII byte, reported as an error by [`crate::check`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("non-ASCII byte {byte:#04x} at offset {offset} (after {context:?})")]
pub struct NonAsciiError {
    /// Offset of the offending byte within the scanned buffer.
    pub offset: usize,
    /// Value of the offending byte; always `>= 0x80`.
    pub byte: u8,
    context: BString,
}

impl NonAsciiError {
    pub(crate) fn new(scanned: &[u8], offset: usize) -> Self {
        let byte = scanned[offset];
        debug_assert!(!byte.is_ascii(), "byte at {offset} is ASCII");
        let start = offset.saturating_sub(CONTEXT_LEN);
        Self {
            offset,
            byte,
            context: scanned[start..offset].into(),
        }
    }

    /// Up to [`CONTEXT_LEN`] ASCII bytes immediately before the offender.
    #[must_use]
    pub fn context(&self) -> &[u8] {
        self.context.as_bytes()
    }
}
