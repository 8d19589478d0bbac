//! JSON-file persistence for slots and assignments.
//!
//! Both files are read whole and overwritten whole. Each overwrite goes
//! through a temp file in the same directory and a rename, so a reader never
//! sees a half-written file. Nothing here serializes writers; callers that
//! read-modify-write must hold the assignment service's lock.

pub mod assignments;
pub mod slots;

use std::io::Write;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::errors::AppError;

/// Reads `path` as JSON, or returns `T::default()` when the file is absent.
pub async fn read_json_or_default<T>(path: &Path) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    match tokio::fs::read(path).await {
        Ok(bytes) => {
            debug!(path = %path.display(), bytes = bytes.len(), "Store read");
            Ok(serde_json::from_slice(&bytes)?)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "Store absent; using empty default");
            Ok(T::default())
        }
        Err(e) => Err(AppError::Storage(format!("{}: {e}", path.display()))),
    }
}

/// Replaces `path` with the pretty-printed JSON of `value`.
pub async fn write_json_atomic<T>(path: &Path, value: &T) -> Result<(), AppError>
where
    T: Serialize + ?Sized,
{
    let bytes = serde_json::to_vec_pretty(value)?;
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || persist(&path, &bytes)).await?
}

fn persist(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.write_all(b"\n")?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .map_err(|e| AppError::Storage(format!("{}: {}", path.display(), e.error)))?;

    debug!(path = %path.display(), bytes = bytes.len(), "Store written");
    Ok(())
}
