// error.rs - Error type for breakscan.
//
// Segmentation itself is total; the only failures are caller buffers of
// the wrong size and ranges that do not fit the text.

use thiserror::Error;

/// Error type for segmentation operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreakError {
    /// The attribute buffer does not hold exactly one record per codepoint
    /// plus the end position.
    #[error("attribute buffer has {actual} entries, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    /// A codepoint range does not fit in a text of `len` codepoints.
    #[error("range {start}..={end} out of bounds for {len} positions")]
    InvalidRange { start: usize, end: usize, len: usize },
}

impl BreakError {
    pub(crate) fn length_mismatch(char_count: usize, actual: usize) -> Self {
        BreakError::LengthMismatch {
            expected: char_count + 1,
            actual,
        }
    }
}
