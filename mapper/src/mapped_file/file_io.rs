//! File preparation and mapping syscalls
//!
//! Each step maps its `io::Error` to the construction error naming that
//! step, so callers can tell a missing file from a failed mapping.

use crate::error::{Error, Result};
use mapper_core::byte_len;
use memmap2::{MmapMut, MmapOptions};
use std::{
    fs::{File, OpenOptions},
    path::Path,
};

/// Create or truncate `path` and size it to `element_count` zeroed `T`s
///
/// The write handle is closed before returning.
pub(crate) fn create_zeroed<T>(path: &Path, element_count: usize) -> Result<()> {
    let bytes = byte_len::<T>(element_count)?;
    let open_error = |source| Error::Open {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(open_error)?;
    // Extending with set_len zero-fills the new bytes
    file.set_len(bytes as u64).map_err(open_error)?;
    Ok(())
}

/// Open an existing file for reading and writing
pub(crate) fn open_read_write(path: &Path) -> Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Byte size of an open file
pub(crate) fn file_len(file: &File, path: &Path) -> Result<usize> {
    let stat_error = |source| Error::Stat {
        path: path.to_path_buf(),
        source,
    };

    let metadata = file.metadata().map_err(stat_error)?;
    usize::try_from(metadata.len()).map_err(|_| {
        stat_error(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "file size exceeds the address space",
        ))
    })
}

/// Map the whole file shared and writable
pub(crate) fn map_shared(file: &File, path: &Path, populate: bool) -> Result<MmapMut> {
    let mut options = MmapOptions::new();
    if populate {
        options.populate();
    }

    // SAFETY: The file is opened read-write and kept alive alongside the
    // mapping. Concurrent modification of the file by other processes is
    // outside what this type can guard against, as with any shared mapping.
    unsafe {
        options.map_mut(file).map_err(|source| Error::Map {
            path: path.to_path_buf(),
            source,
        })
    }
}
