use crate::error::NonAsciiError;

/// Outcome of scanning a buffer or stream.
///
/// A non-ASCII byte is an ordinary answer rather than an error, so it is
/// returned as [`ScanResult::Invalid`]. Use [`ScanResult::into_result`] or
/// [`crate::check`] to turn it into a [`NonAsciiError`] for `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub enum ScanResult {
    /// Every byte is in `0x00..=0x7F`.
    Valid,
    /// Offset of the first byte `>= 0x80`. All earlier bytes are ASCII.
    Invalid(usize),
}

impl ScanResult {
    /// Returns `true` for [`ScanResult::Valid`].
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, ScanResult::Valid)
    }

    /// Offset of the first non-ASCII byte, if any.
    #[must_use]
    pub const fn invalid_offset(self) -> Option<usize> {
        match self {
            ScanResult::Valid => None,
            ScanResult::Invalid(offset) => Some(offset),
        }
    }

    /// Shift an `Invalid` offset by `base`, e.g. from a sub-range back into
    /// its enclosing buffer.
    pub const fn offset_by(self, base: usize) -> Self {
        match self {
            ScanResult::Valid => ScanResult::Valid,
            ScanResult::Invalid(offset) => ScanResult::Invalid(base + offset),
        }
    }

    /// Convert into a `Result`, describing the offender with bytes from
    /// `scanned`, the buffer this result was computed over.
    ///
    /// # Errors
    ///
    /// Returns [`NonAsciiError`] for [`ScanResult::Invalid`].
    ///
    /// # Panics
    ///
    /// Panics if the offset is out of bounds for `scanned`.
    pub fn into_result(self, scanned: &[u8]) -> Result<(), NonAsciiError> {
        match self {
            ScanResult::Valid => Ok(()),
            ScanResult::Invalid(offset) => Err(NonAsciiError::new(scanned, offset)),
        }
    }
}

impl From<Option<usize>> for ScanResult {
    fn from(offset: Option<usize>) -> Self {
        offset.map_or(ScanResult::Valid, ScanResult::Invalid)
    }
}
