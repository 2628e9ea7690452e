//! Mapping configuration
//!
//! [`MapOptions`] is the builder behind [`crate::map`]: it decides whether
//! the file is (re)created before mapping and whether pages are faulted in
//! up front.

use crate::error::Result;
use crate::mapped_file::MappedFile;
use mapper_core::MapElement;
use std::path::Path;

/// Options controlling how a file is prepared and mapped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapOptions {
    /// Elements to create the file with; `0` maps the existing file as-is
    pub create_len: usize,
    /// Pre-fault every page when mapping instead of on first access
    pub populate: bool,
}

impl MapOptions {
    /// Map an existing file, pre-faulting its pages
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or overwrite the file with `element_count` zeroed elements
    ///
    /// This discards any existing content. `0` restores the default of
    /// mapping whatever file already exists.
    pub fn create(mut self, element_count: usize) -> Self {
        self.create_len = element_count;
        self
    }

    /// Set whether pages are populated eagerly at map time
    pub fn populate(mut self, populate: bool) -> Self {
        self.populate = populate;
        self
    }

    /// Whether opening with these options rewrites the file
    pub fn creates_file(&self) -> bool {
        self.create_len > 0
    }

    /// Open and map `path` as an array of `T`
    pub fn open<T: MapElement, P: AsRef<Path>>(&self, path: P) -> Result<MappedFile<T>> {
        MappedFile::with_options(path, *self)
    }
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            create_len: 0,
            populate: true,
        }
    }
}
