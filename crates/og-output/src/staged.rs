//! Output files written to a temporary sibling and renamed on commit.

use std::fs::File;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::OutputResult;

/// A file under construction.  Dropping it without [`commit`](Self::commit)
/// deletes the temporary and leaves `dest` untouched.
pub(crate) struct StagedFile {
    tmp:  NamedTempFile,
    dest: PathBuf,
}

impl StagedFile {
    /// Create the temporary in `dest`'s directory so the final rename stays
    /// on one filesystem.
    pub fn new(dest: PathBuf) -> OutputResult<Self> {
        let dir = dest
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let prefix = format!(
            ".{}.",
            dest.file_name().map(|n| n.to_string_lossy()).unwrap_or_default()
        );
        let tmp = tempfile::Builder::new().prefix(&prefix).tempfile_in(dir)?;
        Ok(Self { tmp, dest })
    }

    pub fn file(&mut self) -> &mut File {
        self.tmp.as_file_mut()
    }

    pub fn dest(&self) -> &Path {
        &self.dest
    }

    /// Flush to disk and atomically replace `dest`.
    pub fn commit(self) -> OutputResult<PathBuf> {
        self.tmp.as_file().sync_all()?;
        self.tmp.persist(&self.dest)?;
        Ok(self.dest)
    }
}
