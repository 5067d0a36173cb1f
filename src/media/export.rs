// SPDX-License-Identifier: MPL-2.0
//! Encoding and writing the edited image.

use super::composition;
use super::image_transform;
use crate::domain::editing::TransformState;
use crate::error::{Error, Result};
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::{DynamicImage, Rgb};
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix added to the original stem of every exported file.
pub const EXPORT_PREFIX: &str = "edited_";

/// Extension of the exported format.
pub const EXPORT_EXTENSION: &str = "jpg";

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Renders at the source resolution, flattens transparency onto white and
/// encodes as JPEG.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the JPEG encoder fails.
pub fn export(image: &DynamicImage, transform: &TransformState, quality: u8) -> Result<Vec<u8>> {
    let rendered = composition::render(image, transform, None);
    let flat = image_transform::flatten_onto(&rendered, WHITE);

    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100))
        .encode_image(&flat)
        .map_err(|e| Error::Encode(e.to_string()))?;

    log::info!(
        "exported {}x{} image ({} bytes, quality {quality})",
        flat.width(),
        flat.height(),
        bytes.len()
    );
    Ok(bytes)
}

/// `cat.png` becomes `edited_cat.jpg`.
#[must_use]
pub fn export_file_name(name: &str) -> String {
    let stem = Path::new(name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or("image");
    format!("{EXPORT_PREFIX}{stem}.{EXPORT_EXTENSION}")
}

/// First free path for `file_name` in `dir`: `name.jpg`, `name (1).jpg`, ...
#[must_use]
pub fn unique_path(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    let extension = path.extension().and_then(|e| e.to_str());

    (1u32..)
        .map(|n| match extension {
            Some(ext) => dir.join(format!("{stem} ({n}).{ext}")),
            None => dir.join(format!("{stem} ({n})")),
        })
        .find(|candidate| !candidate.exists())
        .unwrap_or(candidate)
}

/// Writes the encoded bytes into `dir` without overwriting existing files.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory cannot be created or written to.
pub fn save_into_dir(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = unique_path(dir, file_name);
    fs::write(&path, bytes)?;
    log::info!("saved edited image to {}", path.display());
    Ok(path)
}

/// Writes the encoded bytes to an exact path chosen by the user.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be written.
pub fn save_to_path(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes)?;
    log::info!("saved edited image to {}", path.display());
    Ok(())
}
