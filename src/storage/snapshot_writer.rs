use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::Snapshot;

pub struct SnapshotWriter {
    path: PathBuf,
}

impl SnapshotWriter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Temp file then rename, so a failed run keeps the previous snapshot.
    pub fn write(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| Error::filesystem(dir, e))?;
        }

        let json = serde_json::to_string_pretty(snapshot)?;

        let tmp = self.tmp_path();
        fs::write(&tmp, json).map_err(|e| Error::filesystem(&tmp, e))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(Error::filesystem(&self.path, e));
        }

        tracing::info!("Stats written to {}", self.path.display());
        Ok(())
    }

    pub fn read(&self) -> Result<Snapshot> {
        let json = fs::read_to_string(&self.path).map_err(|e| Error::filesystem(&self.path, e))?;
        Ok(serde_json::from_str(&json)?)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
