/// Configuration for [`crate::validate_with`].
///
/// # Examples
///
/// ```rust
/// use asciicheck::{ScanResult, ValidateOptions, validate_with};
///
/// let options = ValidateOptions {
///     parallel_threshold: 4 * 1024 * 1024,
///     ..Default::default()
/// };
/// assert_eq!(validate_with(b"abc", &options), ScanResult::Valid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Buffers at least this long are split across the rayon pool.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    ///
    /// # Default
    ///
    /// 1 MiB
    pub parallel_threshold: usize,

    /// Size of each sub-range handed to a worker, rounded up to a multiple
    /// of [`WORD_WIDTH`](crate::scanner::WORD_WIDTH).
    ///
    /// Must be non-zero when the parallel strategy is used.
    ///
    /// # Default
    ///
    /// 256 KiB
    pub parallel_chunk_size: usize,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: 1024 * 1024,
            parallel_chunk_size: 256 * 1024,
        }
    }
}
