//! Error types for mapping files

use mapper_core::CoreError;
use std::{fmt, io, path::PathBuf};

/// Errors that can occur while creating, mapping or syncing a file
#[derive(Debug)]
pub enum Error {
    /// The file could not be created, sized or opened read-write
    Open { path: PathBuf, source: io::Error },
    /// File status could not be retrieved after opening
    Stat { path: PathBuf, source: io::Error },
    /// The mapping itself could not be established
    Map { path: PathBuf, source: io::Error },
    /// Dirty pages could not be written back to the file
    Flush(io::Error),
    /// Size, index or cursor violation
    Core(CoreError),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Construction failed; no mapping exists
    Construction,
    /// The mapping is live but could not be synced
    Durability,
    /// A checked access was refused; the mapping is still usable
    Access,
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Open { .. } | Error::Stat { .. } | Error::Map { .. } => {
                ErrorCategory::Construction
            }
            Error::Flush(_) => ErrorCategory::Durability,
            Error::Core(CoreError::IndexOutOfRange { .. }) => ErrorCategory::Access,
            Error::Core(_) => ErrorCategory::Construction,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Open { path, source } => {
                write!(f, "could not open file '{}': {source}", path.display())
            }
            Error::Stat { path, source } => {
                write!(f, "could not get status of '{}': {source}", path.display())
            }
            Error::Map { path, source } => {
                write!(f, "could not map file '{}': {source}", path.display())
            }
            Error::Flush(source) => write!(f, "could not flush mapping: {source}"),
            Error::Core(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Open { source, .. }
            | Error::Stat { source, .. }
            | Error::Map { source, .. }
            | Error::Flush(source) => Some(source),
            Error::Core(err) => Some(err),
        }
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        Error::Core(err)
    }
}

/// Result type for mapping operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_categories() {
        let open = Error::Open {
            path: PathBuf::from("missing.bin"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(open.category(), ErrorCategory::Construction);
        assert!(open.source().is_some());
        assert!(open.to_string().starts_with("could not open file 'missing.bin'"));

        let range = Error::from(CoreError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(range.category(), ErrorCategory::Access);
        assert_eq!(range.to_string(), "index 3 is out of range for length 3");

        let flush = Error::Flush(io::Error::from(io::ErrorKind::Other));
        assert_eq!(flush.category(), ErrorCategory::Durability);
    }
}
