//! Temp-file writer with atomic finalize.

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use super::{DeliveryError, TEMP_SUFFIX};

/// Writer for a uniquely named `<final>.XXXXXX.part` temp file next to the
/// final path. The temp file is removed on drop unless `finalize` persisted it.
pub struct ArtifactWriter {
    file: NamedTempFile,
}

impl ArtifactWriter {
    /// Create a fresh temp file in `dir` named after `final_name`.
    pub fn create(dir: &Path, final_name: &str) -> Result<Self, DeliveryError> {
        let file = tempfile::Builder::new()
            .prefix(&format!("{final_name}."))
            .suffix(TEMP_SUFFIX)
            .tempfile_in(dir)
            .map_err(|source| DeliveryError::Write {
                path: dir.join(final_name),
                source,
            })?;
        Ok(Self { file })
    }

    pub fn write_all(&mut self, data: &[u8]) -> Result<(), DeliveryError> {
        let path = self.file.path().to_path_buf();
        let f = self.file.as_file_mut();
        f.write_all(data)
            .and_then(|()| f.flush())
            .map_err(|source| DeliveryError::Write { path, source })
    }

    /// Path to the current temp file.
    pub fn temp_path(&self) -> &Path {
        self.file.path()
    }

    /// Sync, then atomically rename the temp file to `final_path`.
    pub fn finalize(self, final_path: &Path) -> Result<(), DeliveryError> {
        self.file
            .as_file()
            .sync_all()
            .map_err(|source| DeliveryError::Write {
                path: self.file.path().to_path_buf(),
                source,
            })?;
        self.file
            .persist(final_path)
            .map_err(|e| DeliveryError::Finalize {
                path: final_path.to_path_buf(),
                source: e.error,
            })?;
        Ok(())
    }
}
