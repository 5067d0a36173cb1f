// SPDX-License-Identifier: MPL-2.0
//! Local file registry.
//!
//! Maps a file name to a preview reference so the editor can find the image
//! the library handed it. The registry is a JSON array stored as
//! `uploadedFiles.json` in the data directory:
//!
//! ```json
//! [{ "name": "cat.png", "preview": "file:///home/me/cat.png", "id": "af13…" }]
//! ```
//!
//! Storage failures never propagate: reads degrade to an empty list and
//! writes are logged.

use crate::app::paths;
use crate::error::{Error, Result};
use crate::upload::UploadedFile;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the registry inside the data directory.
pub const STORAGE_FILE: &str = "uploadedFiles.json";

const FILE_SCHEME: &str = "file://";
const DATA_SCHEME: &str = "data:";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    pub name: String,
    pub preview: String,
    pub id: String,
}

impl StoredFile {
    /// Builds an entry pointing at the file on disk, or embedding its bytes
    /// when it has no path.
    #[must_use]
    pub fn from_upload(upload: &UploadedFile) -> Self {
        let blob = &upload.file;
        let preview = match &blob.path {
            Some(path) => file_url(path),
            None => format!("data:{};base64,{}", blob.mime, STANDARD.encode(&*blob.bytes)),
        };

        Self {
            name: blob.name.clone(),
            preview,
            id: blake3::hash(&blob.bytes).to_hex().to_string(),
        }
    }
}

fn file_url(path: &Path) -> String {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    format!("{FILE_SCHEME}{}", absolute.display())
}

fn storage_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_data_dir_with_override(base_dir).map(|dir| dir.join(STORAGE_FILE))
}

/// Overwrites the whole registry.
pub fn save_files(files: &[StoredFile]) {
    save_files_with_override(files, None);
}

pub fn save_files_with_override(files: &[StoredFile], base_dir: Option<PathBuf>) {
    let Some(path) = storage_path(base_dir) else {
        log::warn!("no data directory, registry not saved");
        return;
    };

    let write = || -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(files)?;
        fs::write(&path, json)?;
        Ok(())
    };

    if let Err(err) = write() {
        log::warn!("cannot write registry {}: {err}", path.display());
    }
}

/// Reads the registry. Missing, unreadable or corrupt storage yields an empty list.
#[must_use]
pub fn get_stored_files() -> Vec<StoredFile> {
    get_stored_files_with_override(None)
}

#[must_use]
pub fn get_stored_files_with_override(base_dir: Option<PathBuf>) -> Vec<StoredFile> {
    let Some(path) = storage_path(base_dir) else {
        return Vec::new();
    };

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(err) => {
            log::warn!("cannot read registry {}: {err}", path.display());
            return Vec::new();
        }
    };

    serde_json::from_str(&content).unwrap_or_else(|err| {
        log::warn!("discarding corrupt registry {}: {err}", path.display());
        Vec::new()
    })
}

/// First entry whose name matches exactly.
#[must_use]
pub fn get_file_by_name(name: &str) -> Option<StoredFile> {
    get_file_by_name_with_override(name, None)
}

#[must_use]
pub fn get_file_by_name_with_override(name: &str, base_dir: Option<PathBuf>) -> Option<StoredFile> {
    get_stored_files_with_override(base_dir)
        .into_iter()
        .find(|file| file.name == name)
}

/// Replaces the entry with the same name, or appends.
pub fn upsert(file: StoredFile) {
    upsert_with_override(file, None);
}

pub fn upsert_with_override(file: StoredFile, base_dir: Option<PathBuf>) {
    let mut files = get_stored_files_with_override(base_dir.clone());
    match files.iter_mut().find(|existing| existing.name == file.name) {
        Some(existing) => *existing = file,
        None => files.push(file),
    }
    save_files_with_override(&files, base_dir);
}

/// Loads the bytes a preview reference points at.
///
/// # Errors
///
/// Returns [`Error::Storage`] for malformed or unsupported references and
/// [`Error::Io`] when a referenced file cannot be read.
pub fn resolve_preview(preview: &str) -> Result<Vec<u8>> {
    if let Some(path) = preview.strip_prefix(FILE_SCHEME) {
        return Ok(fs::read(path)?);
    }

    if let Some(rest) = preview.strip_prefix(DATA_SCHEME) {
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| Error::Storage("data URL without payload".to_string()))?;
        if !header.ends_with(";base64") {
            return Err(Error::Storage("only base64 data URLs are supported".to_string()));
        }
        return STANDARD
            .decode(payload)
            .map_err(|err| Error::Storage(format!("invalid base64 payload: {err}")));
    }

    Err(Error::Storage(format!("unsupported preview reference: {preview}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::{self, FileBlob};
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn stored(name: &str, preview: &str) -> StoredFile {
        StoredFile {
            name: name.to_string(),
            preview: preview.to_string(),
            id: format!("id-{name}"),
        }
    }

    fn png_bytes() -> Vec<u8> {
        let mut bytes = Vec::new();
        RgbaImage::from_pixel(1, 1, Rgba([9, 9, 9, 255]))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode");
        bytes
    }

    #[test]
    fn missing_registry_is_empty() {
        let dir = tempdir().expect("temp dir");
        assert!(get_stored_files_with_override(Some(dir.path().to_path_buf())).is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("temp dir");
        let base = Some(dir.path().to_path_buf());
        let files = vec![stored("a.png", "data:image/png;base64,AA=="), stored("b.png", "file:///b.png")];

        save_files_with_override(&files, base.clone());
        assert_eq!(get_stored_files_with_override(base), files);
    }

    #[test]
    fn storage_format_uses_expected_keys() {
        let dir = tempdir().expect("temp dir");
        save_files_with_override(&[stored("a.png", "p")], Some(dir.path().to_path_buf()));

        let raw = fs::read_to_string(dir.path().join(STORAGE_FILE)).expect("read");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(value[0]["name"], "a.png");
        assert_eq!(value[0]["preview"], "p");
        assert_eq!(value[0]["id"], "id-a.png");
    }

    #[test]
    fn corrupt_registry_degrades_to_empty() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(STORAGE_FILE), "{not json").expect("write");
        assert!(get_stored_files_with_override(Some(dir.path().to_path_buf())).is_empty());
    }

    #[test]
    fn get_file_by_name_returns_first_exact_match() {
        let dir = tempdir().expect("temp dir");
        let base = Some(dir.path().to_path_buf());
        save_files_with_override(
            &[stored("cat.png", "first"), stored("Cat.png", "other"), stored("cat.png", "second")],
            base.clone(),
        );

        let found = get_file_by_name_with_override("cat.png", base.clone()).expect("found");
        assert_eq!(found.preview, "first");
        assert!(get_file_by_name_with_override("dog.png", base).is_none());
    }

    #[test]
    fn upsert_replaces_by_name_or_appends() {
        let dir = tempdir().expect("temp dir");
        let base = Some(dir.path().to_path_buf());

        upsert_with_override(stored("a.png", "old"), base.clone());
        upsert_with_override(stored("b.png", "b"), base.clone());
        upsert_with_override(stored("a.png", "new"), base.clone());

        let files = get_stored_files_with_override(base);
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].preview, "new");
        assert_eq!(files[1].name, "b.png");
    }

    #[test]
    fn resolve_preview_decodes_data_url() {
        let encoded = STANDARD.encode(b"pixels");
        let bytes = resolve_preview(&format!("data:image/png;base64,{encoded}")).expect("decode");
        assert_eq!(bytes, b"pixels");
    }

    #[test]
    fn resolve_preview_reads_file_url() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("img.png");
        fs::write(&path, b"content").expect("write");

        let bytes = resolve_preview(&file_url(&path)).expect("read");
        assert_eq!(bytes, b"content");
    }

    #[test]
    fn resolve_preview_rejects_unknown_schemes() {
        assert!(matches!(resolve_preview("blob:abc"), Err(Error::Storage(_))));
        assert!(matches!(resolve_preview("data:image/png,raw"), Err(Error::Storage(_))));
        assert!(matches!(resolve_preview("data:nopayload"), Err(Error::Storage(_))));
    }

    #[test]
    fn from_upload_embeds_bytes_without_path() {
        let batch = upload::accept(
            vec![Ok(FileBlob::from_bytes("mem.png", png_bytes(), None))],
            upload::DEFAULT_MAX_FILE_SIZE,
        );
        let entry = StoredFile::from_upload(&batch.accepted[0]);

        assert_eq!(entry.name, "mem.png");
        assert!(entry.preview.starts_with("data:image/png;base64,"));
        assert_eq!(entry.id.len(), 64);
        assert_eq!(resolve_preview(&entry.preview).expect("resolve"), png_bytes());
    }

    #[test]
    fn from_upload_references_path_when_known() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("disk.png");
        fs::write(&path, png_bytes()).expect("write");

        let batch = upload::accept(
            vec![Ok(FileBlob::from_bytes("disk.png", png_bytes(), Some(path.clone())))],
            upload::DEFAULT_MAX_FILE_SIZE,
        );
        let entry = StoredFile::from_upload(&batch.accepted[0]);
        assert!(entry.preview.starts_with(FILE_SCHEME));
        assert_eq!(resolve_preview(&entry.preview).expect("resolve"), png_bytes());
    }
}
