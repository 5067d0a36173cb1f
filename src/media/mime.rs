// SPDX-License-Identifier: MPL-2.0
//! MIME type detection for uploaded files.
//!
//! Content sniffing comes first so a renamed PNG is still recognized as an
//! image. The file extension is only consulted when the magic bytes are unknown.

use image_rs::ImageFormat;
use std::path::Path;

pub const SVG_MIME: &str = "image/svg+xml";
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Returns the MIME type of a file from its content, then its name.
#[must_use]
pub fn detect_mime(name: &str, bytes: &[u8]) -> String {
    if let Ok(format) = image_rs::guess_format(bytes) {
        return format.to_mime_type().to_string();
    }

    if looks_like_svg(bytes) {
        return SVG_MIME.to_string();
    }

    mime_from_extension(name).to_string()
}

/// MIME type implied by the file extension alone.
#[must_use]
pub fn mime_from_extension(name: &str) -> &'static str {
    let Some(extension) = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
    else {
        return OCTET_STREAM;
    };

    match extension.as_str() {
        "svg" | "svgz" => SVG_MIME,
        "txt" | "md" | "log" => "text/plain",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "mp4" => "video/mp4",
        "mp3" => "audio/mpeg",
        other => ImageFormat::from_extension(other)
            .map(|format| format.to_mime_type())
            .unwrap_or(OCTET_STREAM),
    }
}

#[must_use]
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(512)];
    // The cut may split a multi-byte character; keep the valid prefix.
    let text = match std::str::from_utf8(head) {
        Ok(text) => text,
        Err(err) => std::str::from_utf8(&head[..err.valid_up_to()]).unwrap_or_default(),
    };
    let trimmed = text.trim_start_matches('\u{feff}').trim_start();
    trimmed.starts_with("<svg") || (trimmed.starts_with("<?xml") && trimmed.contains("<svg"))
}
