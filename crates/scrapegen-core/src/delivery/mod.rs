//! Saving the generated text as `webscraper.txt`.
//!
//! The artifact is written to a per-call `.part` temp file in the target
//! directory, synced, then atomically renamed to the final name. The temp
//! file never survives the call, and concurrent deliveries never share one.

mod writer;

pub use writer::ArtifactWriter;

use std::path::{Path, PathBuf};

use crate::transport::ResponseArtifact;

/// Fixed name of the delivered file.
pub const ARTIFACT_FILENAME: &str = "webscraper.txt";

/// MIME type the artifact is delivered as.
pub const ARTIFACT_MIME: &str = "text/plain";

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Failure while saving the artifact.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("Failed to save {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to move {} into place: {source}", .path.display())]
    Finalize {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes `artifact` to `<dir>/webscraper.txt`, replacing any previous file.
/// Returns the final path.
pub fn deliver(artifact: &ResponseArtifact, dir: &Path) -> Result<PathBuf, DeliveryError> {
    let final_path = dir.join(ARTIFACT_FILENAME);
    let mut writer = ArtifactWriter::create(dir, ARTIFACT_FILENAME)?;
    writer.write_all(artifact.as_str().as_bytes())?;
    writer.finalize(&final_path)?;
    tracing::info!(
        path = %final_path.display(),
        bytes = artifact.len(),
        mime = ARTIFACT_MIME,
        "artifact delivered"
    );
    Ok(final_path)
}
