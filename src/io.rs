//! Configuration file I/O.
//!
//! Reads are validated (the path must exist and be a regular file) and
//! writes are atomic: content goes to a uniquely named temporary file in the
//! same directory as the target, which is then renamed onto the target path.
//! A failed write never corrupts or truncates an existing file, and the
//! temporary file does not outlive the attempt.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use log::debug;
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::error::{Result, SerializationError};
use crate::serializers::{FormatSerializer, SerializationContext};

/// File extensions accepted for user-supplied configuration file names.
const ALLOWED_EXTENSIONS: &[&str] = &["json", "yaml", "yml", "ini"];

/// Reads a file into a string after validating the path.
///
/// # Errors
///
/// Returns [`SerializationError::FileIo`] when the path does not exist, is
/// not a regular file, or cannot be read, and
/// [`SerializationError::Encoding`] when the content is not valid UTF-8.
pub fn read_file_content(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SerializationError::file_io(format!(
            "file does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(SerializationError::file_io(format!(
            "not a regular file: {}",
            path.display()
        )));
    }
    fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::InvalidData => SerializationError::encoding(format!(
            "{} is not valid UTF-8: {err}",
            path.display()
        )),
        _ => SerializationError::file_io(format!("failed to read {}: {err}", path.display())),
    })
}

/// Reads and deserializes a configuration file.
pub fn read_configuration_file(
    path: impl AsRef<Path>,
    serializer: &dyn FormatSerializer,
) -> Result<Value> {
    let content = read_file_content(&path)?;
    serializer.deserialize(&content)
}

/// Atomically replaces the file at `path` with `content`.
///
/// The content is written to a uniquely named temporary file in the target's
/// directory (same filesystem, so the final rename is atomic). On any
/// failure the temporary file is removed and the target is left untouched.
pub fn write_file_content(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|err| {
        SerializationError::file_io(format!(
            "failed to create temporary file in {}: {err}",
            dir.display()
        ))
    })?;
    // 失败时 temp 随 Drop 自动删除
    temp.write_all(content.as_bytes()).map_err(|err| {
        SerializationError::file_io(format!("failed to write temporary file: {err}"))
    })?;
    temp.flush().map_err(|err| {
        SerializationError::file_io(format!("failed to flush temporary file: {err}"))
    })?;

    temp.persist(path).map_err(|err| {
        SerializationError::file_io(format!(
            "failed to move temporary file onto {}: {}",
            path.display(),
            err.error
        ))
    })?;
    debug!("wrote {}", path.display());
    Ok(())
}

/// Serializes the context's document and writes it atomically.
///
/// The destination is the context's `file_path`; pre-serialization
/// validation is honored when the context requests it.
pub fn write_configuration_file(
    serializer: &dyn FormatSerializer,
    context: &SerializationContext,
) -> Result<()> {
    let path = context.file_path.as_ref().ok_or_else(|| {
        SerializationError::file_io("serialization context carries no file path")
    })?;
    let text = serializer.serialize(context)?;
    write_file_content(path, &text)
}

/// Validates a user-supplied configuration file name.
///
/// Rejects path traversal (`..`, `/`, `\`) and any extension outside the
/// allow-list (`json`, `yaml`, `yml`, `ini`).
pub fn sanitize_file_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains("..") || name.contains('/') || name.contains('\\') {
        return Err(SerializationError::file_io(format!(
            "unsafe file name: {name:?}"
        )));
    }
    let ext = Path::new(name)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(SerializationError::invalid_format(format!(
            "file extension not allowed: {name:?}"
        )));
    }
    Ok(())
}

/// Copies an existing file to a timestamped backup beside it.
///
/// The backup is named `<stem>.bk-<unix-secs>.<ext>`. Returns `None` when
/// the file does not exist yet (nothing to back up).
pub fn create_backup(path: impl AsRef<Path>) -> Result<Option<PathBuf>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    let secs = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map_err(|err| SerializationError::Unknown(err.to_string()))?
        .as_secs();
    let backup_path = path.with_extension(format!("bk-{secs}.{ext}"));
    fs::copy(path, &backup_path).map_err(|err| {
        SerializationError::file_io(format!(
            "failed to back up {} to {}: {err}",
            path.display(),
            backup_path.display()
        ))
    })?;
    Ok(Some(backup_path))
}
