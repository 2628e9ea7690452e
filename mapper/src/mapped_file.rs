//! Memory-mapped file container
//!
//! [`MappedFile`] owns an open file and a shared read-write mapping of it,
//! and exposes the mapping as an array of `T`. The file and the mapping are
//! acquired together at construction and released together on drop.

mod cursors;
mod file_io;

use crate::config::MapOptions;
use crate::error::Result;
use mapper_core::{check_index, element_count, typed_prefix, MapElement};
use memmap2::MmapMut;
use std::{
    fs::File,
    marker::PhantomData,
    ops::{Deref, DerefMut},
    path::{Path, PathBuf},
};

/// A file mapped into memory as an array of `T`
///
/// The element count is the file size divided by `size_of::<T>()`, rounded
/// down; trailing bytes stay in the file but are not addressable.
///
/// Dropping the value syncs the mapping (ignoring failure), unmaps it and
/// closes the file. Call [`MappedFile::flush`] when durability must be
/// confirmed.
pub struct MappedFile<T: MapElement = u8> {
    // Declared before `_file` so the region is unmapped before the descriptor closes
    mmap: MmapMut,
    _file: File,
    len: usize,
    path: PathBuf,
    options: MapOptions,
    _element: PhantomData<T>,
}

impl<T: MapElement> MappedFile<T> {
    /// Map an existing file as-is
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_options(path, MapOptions::default())
    }

    /// Create or overwrite `path` with `element_count` zeroed elements and map it
    pub fn create<P: AsRef<Path>>(path: P, element_count: usize) -> Result<Self> {
        Self::with_options(path, MapOptions::new().create(element_count))
    }

    /// Prepare, open and map `path` according to `options`
    ///
    /// # Errors
    ///
    /// - [`Error::Open`](crate::Error::Open) if the file cannot be (re)created
    ///   or opened read-write
    /// - [`Error::Stat`](crate::Error::Stat) if its size cannot be read
    /// - [`Error::Map`](crate::Error::Map) if the mapping fails
    /// - [`Error::Core`](crate::Error::Core) for zero-sized or misaligned `T`
    ///
    /// The file is closed again on every failure after it was opened.
    pub fn with_options<P: AsRef<Path>>(path: P, options: MapOptions) -> Result<Self> {
        let path = path.as_ref();

        if options.creates_file() {
            file_io::create_zeroed::<T>(path, options.create_len)?;
        }

        let file = file_io::open_read_write(path)?;
        let file_len = file_io::file_len(&file, path)?;
        let len = element_count::<T>(file_len)?;
        let mmap = file_io::map_shared(&file, path, options.populate)?;
        typed_prefix::<T>(&mmap)?;

        Ok(Self {
            mmap,
            _file: file,
            len,
            path: path.to_path_buf(),
            options,
            _element: PhantomData,
        })
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of elements (alias of [`len`](Self::len))
    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes covered by the element array
    pub fn byte_len(&self) -> usize {
        self.len * T::size_bytes()
    }

    /// Path the mapping was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Options the mapping was opened with
    pub fn options(&self) -> MapOptions {
        self.options
    }

    /// Base address of the element array
    ///
    /// Never null, also for an empty mapping.
    pub fn data(&self) -> *const T {
        self.mmap.as_ptr().cast()
    }

    /// Mutable base address of the element array
    pub fn data_mut(&mut self) -> *mut T {
        self.mmap.as_mut_ptr().cast()
    }

    /// The element array; starts at [`data`](Self::data) even when empty
    pub fn as_slice(&self) -> &[T] {
        bytemuck::cast_slice(&self.mmap[..self.byte_len()])
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let byte_len = self.byte_len();
        bytemuck::cast_slice_mut(&mut self.mmap[..byte_len])
    }

    /// Checked access to element `index`
    ///
    /// # Errors
    ///
    /// [`CoreError::IndexOutOfRange`](mapper_core::CoreError::IndexOutOfRange)
    /// when `index >= len()`. The mapping stays usable.
    pub fn at(&self, index: usize) -> Result<&T> {
        check_index(index, self.len)?;
        Ok(&self.as_slice()[index])
    }

    /// Checked mutable access to element `index`
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        check_index(index, self.len)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Synchronously write dirty pages back to the file
    ///
    /// Safe to call any number of times; it never changes the contents.
    pub fn flush(&self) -> Result<()> {
        self.mmap.flush().map_err(crate::Error::Flush)
    }
}

impl<T: MapElement> Drop for MappedFile<T> {
    fn drop(&mut self) {
        // Best effort; callers that need durability call flush() themselves
        let _ = self.mmap.flush();
    }
}

impl<T: MapElement> Deref for MappedFile<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: MapElement> DerefMut for MappedFile<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: MapElement> AsRef<[T]> for MappedFile<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: MapElement> AsMut<[T]> for MappedFile<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T: MapElement> IntoIterator for &'a MappedFile<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T: MapElement> IntoIterator for &'a mut MappedFile<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: MapElement> std::fmt::Debug for MappedFile<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappedFile")
            .field("path", &self.path)
            .field("len", &self.len)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
