//! Recursive discovery of `.eml` files under an input directory.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ConvertError, Result};

/// Lazy iterator over every `.eml` file under a root directory.
///
/// Files are yielded in filesystem traversal order (not sorted). The
/// iterator is finite and not restartable; a fresh [`EmlWalker::new`]
/// re-scans the tree.
pub struct EmlWalker {
    root: PathBuf,
    inner: walkdir::IntoIter,
}

impl std::fmt::Debug for EmlWalker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmlWalker")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl EmlWalker {
    /// Start a walk over `root`.
    ///
    /// Fails with [`ConvertError::DirectoryNotFound`] if the root does not
    /// exist or is not a directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(ConvertError::DirectoryNotFound(root.to_path_buf()));
        }
        Ok(Self {
            root: root.to_path_buf(),
            inner: WalkDir::new(root).into_iter(),
        })
    }
}

impl Iterator for EmlWalker {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    let source = e.into_io_error().unwrap_or_else(|| {
                        std::io::Error::other("directory traversal failed")
                    });
                    return Some(Err(ConvertError::io(path, source)));
                }
            };

            if entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == "eml")
            {
                return Some(Ok(entry.into_path()));
            }
        }
    }
}
