use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A thread-safe source of raw file content, addressed by path.
/// Allows multiple threads to render trees against the same source simultaneously.
pub trait ByteSource: Send + Sync {
    /// Reads the complete content stored at `path`.
    /// This must NOT modify any internal state observable by later reads.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

impl<S: ByteSource + ?Sized> ByteSource for &S {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }
}

// --- Implementation: Local File ---

/// Reads files from the local file system.
///
/// Relative paths are resolved against `root`; absolute paths are read as-is.
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    root: PathBuf, // empty means the working directory
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ByteSource for FileSource {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(self.root.join(path))
    }
}

// --- Implementation: In-Memory ---

/// An in-memory ByteSource backed by a map of paths to bytes.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `data` at `path`, replacing any previous content.
    pub fn insert(&mut self, path: impl Into<PathBuf>, data: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), data.into());
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with_file(mut self, path: impl Into<PathBuf>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(path, data);
        self
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ByteSource for MemorySource {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no entry for {}", path.display()),
            )
        })
    }
}
