//! Tabular (CSV) and JSON writers for result rows.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::IoError;

/// Writes `rows` to `path` as CSV with a header derived from the row type's
/// field names. Parent directories are created if needed.
///
/// # Errors
///
/// [`IoError::Io`] if the file cannot be created and [`IoError::Csv`] if a
/// row cannot be serialized.
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), IoError> {
    let file = create(path)?;
    let mut wtr = csv::Writer::from_writer(BufWriter::new(file));
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(|e| IoError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), rows = rows.len(), "wrote csv");
    Ok(())
}

/// Serializes `value` as pretty-printed JSON.
///
/// # Errors
///
/// [`IoError::Serialization`] if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, IoError> {
    serde_json::to_string_pretty(value).map_err(|e| IoError::Serialization {
        reason: e.to_string(),
    })
}

/// Writes `value` to `path` as pretty-printed JSON.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), IoError> {
    let json = to_json(value)?;
    ensure_parent(path)?;
    std::fs::write(path, json).map_err(|e| IoError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), "wrote json");
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), IoError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            std::fs::create_dir_all(dir).map_err(|e| IoError::Io {
                path: dir.to_path_buf(),
                reason: e.to_string(),
            })
        }
        _ => Ok(()),
    }
}

fn create(path: &Path) -> Result<File, IoError> {
    ensure_parent(path)?;
    File::create(path).map_err(|e| IoError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
