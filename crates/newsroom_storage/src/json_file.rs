//! Shared JSON file plumbing: tolerant reads, atomic writes.

use newsroom_error::{NewsroomResult, StoreError, StoreErrorKind};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read and parse a JSON file, treating a missing file as `None`.
///
/// # Errors
///
/// Returns [`StoreErrorKind::FileRead`] if the file exists but cannot be read,
/// and [`StoreErrorKind::Corrupt`] if its contents do not parse as `T`.
pub fn read_optional_json<T: DeserializeOwned>(path: &Path) -> NewsroomResult<Option<T>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(StoreError::new(StoreErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into());
        }
    };

    let value = serde_json::from_str(&contents).map_err(|e| {
        StoreError::new(StoreErrorKind::Corrupt(format!("{}: {}", path.display(), e)))
    })?;
    Ok(Some(value))
}

/// Serialize `value` as pretty JSON and replace `path` atomically.
///
/// The payload is written to a sibling `.tmp` file first and then renamed over
/// the destination, so readers never observe a half-written document.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> NewsroomResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| StoreError::new(StoreErrorKind::Serialization(e.to_string())))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            StoreError::new(StoreErrorKind::DirectoryCreation(format!(
                "{}: {}",
                parent.display(),
                e
            )))
        })?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = std::path::PathBuf::from(temp_name);

    std::fs::write(&temp_path, json).map_err(|e| {
        StoreError::new(StoreErrorKind::FileWrite(format!(
            "{}: {}",
            temp_path.display(),
            e
        )))
    })?;

    std::fs::rename(&temp_path, path).map_err(|e| {
        StoreError::new(StoreErrorKind::FileWrite(format!(
            "rename {} to {}: {}",
            temp_path.display(),
            path.display(),
            e
        )))
    })?;

    Ok(())
}
