use std::io;
use std::path::{Path, PathBuf};

/// File access needed to locate and read `.langpack-guard.toml`.
pub trait FileSystem {
    /// # Errors
    /// Returns an error if the file cannot be read as UTF-8 text.
    fn read_file(&self, path: &Path) -> io::Result<String>;

    fn is_file(&self, path: &Path) -> bool;

    /// Directory the local config file is looked up in.
    ///
    /// # Errors
    /// Returns an error if the working directory is unavailable.
    fn working_dir(&self) -> io::Result<PathBuf>;
}

/// Backed by `std::fs` and the process working directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_file(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn working_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}
