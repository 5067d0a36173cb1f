// SPDX-License-Identifier: MPL-2.0
//! Upload validation and preview creation.
//!
//! Files arrive from the native picker, window drops or the command line. Each
//! one is read into a [`FileBlob`], validated independently, and turned into an
//! [`UploadedFile`] carrying a [`PreviewHandle`] the library can draw.

use crate::error::UploadRejection;
use crate::media::{self, mime};
use iced::widget::image;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::io::AsyncReadExt;

/// Default upload limit: 5 MiB. A file of exactly this size is accepted.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Stable identity of an uploaded file, independent of list position or filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(u64);

impl FileId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Raw file contents as selected by the user.
#[derive(Debug, Clone)]
pub struct FileBlob {
    pub name: String,
    pub path: Option<PathBuf>,
    pub size: u64,
    pub mime: String,
    pub bytes: Arc<Vec<u8>>,
}

impl FileBlob {
    /// Wraps in-memory bytes, sniffing the MIME type.
    #[must_use]
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>, path: Option<PathBuf>) -> Self {
        let name = name.into();
        let mime = mime::detect_mime(&name, &bytes);
        Self {
            size: bytes.len() as u64,
            name,
            path,
            mime,
            bytes: Arc::new(bytes),
        }
    }
}

/// In-memory image source for one uploaded file.
///
/// Consumed by [`PreviewHandle::revoke`]; once revoked it cannot be drawn again.
#[derive(Debug, Clone)]
pub struct PreviewHandle {
    handle: image::Handle,
}

impl PreviewHandle {
    fn create(blob: &FileBlob) -> crate::error::Result<Self> {
        Ok(Self {
            handle: media::image::preview_handle(&blob.bytes, &blob.mime)?,
        })
    }

    #[must_use]
    pub fn handle(&self) -> &image::Handle {
        &self.handle
    }

    /// Releases the preview. The handle's pixel memory is freed once the
    /// renderer drops its last reference.
    pub fn revoke(self) {
        log::debug!("revoked preview {:?}", self.handle.id());
    }
}

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub id: FileId,
    pub file: FileBlob,
    pub preview: PreviewHandle,
}

impl UploadedFile {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.file.name
    }
}

/// Outcome of one selection or drop.
#[derive(Debug, Default)]
pub struct UploadBatch {
    pub accepted: Vec<UploadedFile>,
    pub rejections: Vec<UploadRejection>,
}

impl UploadBatch {
    /// The rejection shown inline; later files overwrite earlier ones.
    #[must_use]
    pub fn last_rejection(&self) -> Option<&UploadRejection> {
        self.rejections.last()
    }
}

/// Checks the MIME type first, then the size limit.
///
/// # Errors
///
/// Returns [`UploadRejection::NotAnImage`] or [`UploadRejection::TooLarge`].
pub fn validate(blob: &FileBlob, max_size: u64) -> Result<(), UploadRejection> {
    check_type_and_size(&blob.name, &blob.mime, blob.size, max_size)
}

fn check_type_and_size(
    name: &str,
    mime: &str,
    size: u64,
    max_size: u64,
) -> Result<(), UploadRejection> {
    if !mime::is_image_mime(mime) {
        return Err(UploadRejection::NotAnImage {
            name: name.to_string(),
            mime: mime.to_string(),
        });
    }

    if size > max_size {
        return Err(UploadRejection::TooLarge {
            name: name.to_string(),
            size,
            limit: max_size,
        });
    }

    Ok(())
}

/// Validates each file independently and creates previews for the valid ones.
#[must_use]
pub fn accept(
    blobs: impl IntoIterator<Item = Result<FileBlob, UploadRejection>>,
    max_size: u64,
) -> UploadBatch {
    let mut batch = UploadBatch::default();

    for blob in blobs {
        let blob = match blob {
            Ok(blob) => blob,
            Err(rejection) => {
                batch.rejections.push(rejection);
                continue;
            }
        };

        if let Err(rejection) = validate(&blob, max_size) {
            log::info!("rejected upload: {rejection}");
            batch.rejections.push(rejection);
            continue;
        }

        match PreviewHandle::create(&blob) {
            Ok(preview) => {
                log::info!("accepted upload {} ({} bytes)", blob.name, blob.size);
                batch.accepted.push(UploadedFile {
                    id: FileId::next(),
                    file: blob,
                    preview,
                });
            }
            Err(err) => batch.rejections.push(UploadRejection::Unreadable {
                name: blob.name.clone(),
                reason: err.to_string(),
            }),
        }
    }

    batch
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Bytes read from the start of a file to sniff its type.
const SNIFF_LEN: u64 = 1024;

fn unreadable(name: &str, path: &Path, err: &std::io::Error) -> UploadRejection {
    log::warn!("cannot read {}: {err}", path.display());
    UploadRejection::Unreadable {
        name: name.to_string(),
        reason: err.to_string(),
    }
}

/// Reads a file from disk.
///
/// The type is sniffed from the first bytes and the size taken from the file
/// metadata; the rest of the file is only read once both pass `max_size`
/// validation.
///
/// # Errors
///
/// Returns [`UploadRejection::Unreadable`] when the file cannot be read, or
/// the rejection from [`validate`].
pub async fn read_blob(path: PathBuf, max_size: u64) -> Result<FileBlob, UploadRejection> {
    let name = display_name(&path);

    let mut file = tokio::fs::File::open(&path)
        .await
        .map_err(|err| unreadable(&name, &path, &err))?;
    let size = file
        .metadata()
        .await
        .map_err(|err| unreadable(&name, &path, &err))?
        .len();

    let mut bytes = Vec::new();
    (&mut file)
        .take(SNIFF_LEN)
        .read_to_end(&mut bytes)
        .await
        .map_err(|err| unreadable(&name, &path, &err))?;

    let mime = mime::detect_mime(&name, &bytes);
    check_type_and_size(&name, &mime, size, max_size)?;

    file.read_to_end(&mut bytes)
        .await
        .map_err(|err| unreadable(&name, &path, &err))?;

    Ok(FileBlob {
        size: bytes.len() as u64,
        name,
        path: Some(path),
        mime,
        bytes: Arc::new(bytes),
    })
}

/// Reads several files, preserving their order.
pub async fn read_blobs(
    paths: Vec<PathBuf>,
    max_size: u64,
) -> Vec<Result<FileBlob, UploadRejection>> {
    let mut blobs = Vec::with_capacity(paths.len());
    for path in paths {
        blobs.push(read_blob(path, max_size).await);
    }
    blobs
}
