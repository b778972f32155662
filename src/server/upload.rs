//! Temporary storage for uploaded files.

use std::path::{Path, PathBuf};

use actix_multipart::Multipart;
use futures_util::TryStreamExt;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use uuid::Uuid;

use super::ApiError;

/// Multipart field that carries the CSV file.
pub const FILE_FIELD: &str = "file";

/// An uploaded file on disk. The file is removed when this value is dropped.
#[derive(Debug)]
pub struct TempUpload {
    path: PathBuf,
    /// Client-supplied file name, kept for logging only.
    original_name: String,
    bytes: usize,
}

impl TempUpload {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    pub fn bytes(&self) -> usize {
        self.bytes
    }
}

impl Drop for TempUpload {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "removed upload"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "failed to remove upload"),
        }
    }
}

/// Stream the `file` field of `payload` into a fresh, uniquely named file under `dir`.
///
/// Other fields are skipped. Fails with [`ApiError::NoFile`] if no field named `file`
/// carries a file name, [`ApiError::EmptyFilename`] if the name is empty, and
/// [`ApiError::TooLarge`] once more than `max_bytes` have arrived.
pub async fn save_upload(
    mut payload: Multipart,
    dir: &Path,
    max_bytes: usize,
) -> Result<TempUpload, ApiError> {
    while let Some(mut field) = payload.try_next().await? {
        let Some(disposition) = field.content_disposition() else {
            continue;
        };
        if disposition.get_name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(original_name) = disposition.get_filename().map(str::to_owned) else {
            continue;
        };
        if original_name.is_empty() {
            return Err(ApiError::EmptyFilename);
        }

        tokio::fs::create_dir_all(dir).await?;
        let mut upload = TempUpload {
            path: dir.join(format!("{}.csv", Uuid::new_v4())),
            original_name,
            bytes: 0,
        };
        let mut file = tokio::fs::File::create(&upload.path).await?;
        while let Some(chunk) = field.try_next().await? {
            upload.bytes += chunk.len();
            if upload.bytes > max_bytes {
                return Err(ApiError::TooLarge { limit: max_bytes });
            }
            file.write_all(&chunk).await?;
        }
        file.flush().await?;
        return Ok(upload);
    }
    Err(ApiError::NoFile)
}
