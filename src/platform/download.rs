//! Delivery of exported files to the host

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::{Error, Result};

/// The host's file-download mechanism
pub trait DownloadSink {
    /// Hand `bytes` to the host under `file_name`; returns where it landed.
    fn deliver(&mut self, file_name: &str, bytes: &[u8]) -> Result<PathBuf>;
}

/// Saves downloads into a directory.
///
/// Bytes go to `<name>.part` first and are renamed into place once fully
/// written, so a reader never sees a truncated wallpaper.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&mut self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        if file_name.is_empty() || file_name.contains(['/', '\\']) || file_name == ".." {
            return Err(Error::DeliveryError(format!(
                "refusing to save under {:?}",
                file_name
            )));
        }

        fs::create_dir_all(&self.dir)?;
        let target = self.dir.join(file_name);
        let mut partial = PartialFile::create(self.dir.join(format!("{}.part", file_name)))?;
        partial.write_all(bytes)?;
        let path = partial.commit(&target)?;
        info!("Saved {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }
}

/// Temporary file that removes itself unless committed
struct PartialFile {
    path: PathBuf,
    file: Option<File>,
    committed: bool,
}

impl PartialFile {
    fn create(path: PathBuf) -> Result<Self> {
        let file = File::create(&path)?;
        Ok(Self {
            path,
            file: Some(file),
            committed: false,
        })
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        match self.file.as_mut() {
            Some(f) => Ok(f.write_all(bytes)?),
            None => Err(Error::Other("partial file already closed".into())),
        }
    }

    fn commit(mut self, target: &Path) -> Result<PathBuf> {
        if let Some(f) = self.file.take() {
            f.sync_all()?;
        }
        fs::rename(&self.path, target)?;
        self.committed = true;
        Ok(target.to_path_buf())
    }
}

impl Drop for PartialFile {
    fn drop(&mut self) {
        self.file.take();
        if !self.committed {
            debug!("removing unfinished download {}", self.path.display());
            let _ = fs::remove_file(&self.path);
        }
    }
}
