//! Error types for mapped-array operations that need no I/O

/// Errors raised by element access, cursor construction and size validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// Checked access with an index past the last element
    IndexOutOfRange { index: usize, len: usize },
    /// Cursor requested over a null address
    NullCursor,
    /// Element type has no size, so no element count can be derived
    ZeroSizedElement,
    /// Byte length of the requested array does not fit in memory
    SizeOverflow,
    /// Region is not aligned for the element type
    Misaligned,
}

impl core::fmt::Display for CoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CoreError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for length {len}")
            }
            CoreError::NullCursor => write!(f, "cannot create cursor from null pointer"),
            CoreError::ZeroSizedElement => write!(f, "zero-sized element types cannot be mapped"),
            CoreError::SizeOverflow => write!(f, "array byte length overflows"),
            CoreError::Misaligned => write!(f, "region is not aligned for element type"),
        }
    }
}

impl core::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
