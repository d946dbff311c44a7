//! File writer - the filesystem seam used by the generators

use std::path::Path;
use crate::Result;
use crate::error::Error;

/// Writer trait - interface for creating bundle directories and files
pub trait FileWriter {
    /// Create a directory and any missing ancestors.
    /// Succeeds if the directory already exists.
    fn create_directory(&self, path: &Path) -> Result<()>;

    /// Write `content` to `path`, creating or overwriting the file
    fn write_file(&self, path: &Path, content: &[u8]) -> Result<()>;
}

/// Writer backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileWriter;

impl FileWriter for LocalFileWriter {
    fn create_directory(&self, path: &Path) -> Result<()> {
        tracing::debug!("Creating directory {:?}", path);
        std::fs::create_dir_all(path).map_err(|e| Error::file_system(path, e))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> Result<()> {
        tracing::debug!("Writing {} bytes to {:?}", content.len(), path);
        std::fs::write(path, content).map_err(|e| Error::file_system(path, e))
    }
}
