//! Async file helpers.
//!
//! Thin wrappers over `tokio::fs` that report failures as [`Error`] values
//! carrying the offending path. Writes land in a sibling temporary file and
//! are renamed into place, so readers never observe a partial file.

use crate::error::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Returns `true` if `path` exists (file or directory).
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

fn ensure_not_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Err(Error::IsDirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// The path [`write_file_json`] writes for `path`.
pub fn json_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if is_json(path) {
        path.to_path_buf()
    } else {
        path.with_extension("json")
    }
}

/// Read a whole file as UTF-8 text.
pub async fn read_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    ensure_not_dir(path)?;
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}

/// Read and deserialize a `.json` file.
pub async fn read_file_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    ensure_not_dir(path)?;
    if !is_json(path) {
        return Err(Error::NotJson {
            path: path.to_path_buf(),
        });
    }
    let data = read_file(path).await?;
    Ok(serde_json::from_str(&data)?)
}

/// Write `data` to `path`, creating parent directories as needed.
pub async fn write_file(path: impl AsRef<Path>, data: &str) -> Result<()> {
    let path = path.as_ref();
    ensure_not_dir(path)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::io_with_path(e, parent))?;
    }

    let tmp = temp_sibling(path);
    tokio::fs::write(&tmp, data)
        .await
        .map_err(|e| Error::io_with_path(e, &tmp))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}

/// Serialize `value` as 2-space indented JSON and write it.
///
/// A path without the `.json` extension has its extension replaced. The
/// path actually written is returned.
pub async fn write_file_json<T: Serialize + ?Sized>(
    path: impl AsRef<Path>,
    value: &T,
) -> Result<PathBuf> {
    let path = path.as_ref();
    ensure_not_dir(path)?;

    let target = json_path(path);

    let json = serde_json::to_string_pretty(value)?;
    write_file(&target, &json).await?;
    Ok(target)
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use tempfile::TempDir;

    #[test]
    fn test_json_path() {
        assert_eq!(json_path("a/events.json"), PathBuf::from("a/events.json"));
        assert_eq!(json_path("a/events.log"), PathBuf::from("a/events.json"));
        assert_eq!(json_path("a/events"), PathBuf::from("a/events.json"));
    }

    #[tokio::test]
    async fn test_write_then_read_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.md");

        write_file(&path, "# Title\n").await.unwrap();

        assert!(file_exists(&path));
        assert_eq!(read_file(&path).await.unwrap(), "# Title\n");
    }

    #[tokio::test]
    async fn test_write_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a/b/c.txt");

        write_file(&path, "x").await.unwrap();
        assert_eq!(read_file(&path).await.unwrap(), "x");
    }

    #[tokio::test]
    async fn test_write_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.json");

        write_file(&path, "[]").await.unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["events.json".to_string()]);
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_file(dir.path().join("missing.txt")).await.unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_read_directory_rejected() {
        let dir = TempDir::new().unwrap();
        let err = read_file(dir.path()).await.unwrap_err();
        assert!(matches!(err, Error::IsDirectory { .. }));

        let err = write_file(dir.path(), "x").await.unwrap_err();
        assert!(matches!(err, Error::IsDirectory { .. }));
    }

    #[tokio::test]
    async fn test_read_json_requires_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.txt");
        std::fs::write(&path, "{}").unwrap();

        let err = read_file_json::<Value>(&path).await.unwrap_err();
        assert!(matches!(err, Error::NotJson { .. }));
    }

    #[tokio::test]
    async fn test_write_json_pretty_and_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");

        let written = write_file_json(&path, &json!({"a": [1, 2]})).await.unwrap();
        assert_eq!(written, path);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n  \"a\": ["));

        let value: Value = read_file_json(&path).await.unwrap();
        assert_eq!(value["a"][1], 2);
    }

    #[tokio::test]
    async fn test_write_json_replaces_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.txt");

        let written = write_file_json(&path, &json!([])).await.unwrap();

        assert_eq!(written, dir.path().join("data.json"));
        assert!(!path.exists());
        assert!(written.exists());
    }

    #[tokio::test]
    async fn test_read_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = read_file_json::<Value>(&path).await.unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
