// SPDX-License-Identifier: MPL-2.0
//! Default values for every configurable setting, grouped by section.

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// Largest accepted upload, in mebibytes. Files of exactly this size pass.
pub const DEFAULT_MAX_FILE_SIZE_MB: u32 = 5;

pub const MIN_MAX_FILE_SIZE_MB: u32 = 1;

pub const MAX_MAX_FILE_SIZE_MB: u32 = 512;

// ==========================================================================
// Editor Defaults
// ==========================================================================

/// JPEG quality used for exported images.
pub const DEFAULT_EXPORT_QUALITY: u8 = 95;

pub const MIN_EXPORT_QUALITY: u8 = 1;

pub const MAX_EXPORT_QUALITY: u8 = 100;

/// Bounding box of the editor preview canvas, in pixels.
pub const DEFAULT_PREVIEW_MAX_WIDTH: u32 = 1200;
pub const DEFAULT_PREVIEW_MAX_HEIGHT: u32 = 800;

/// Smallest preview bounds accepted from `settings.toml`.
pub const MIN_PREVIEW_DIMENSION: u32 = 64;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAX_FILE_SIZE_MB > 0);
    assert!(DEFAULT_MAX_FILE_SIZE_MB >= MIN_MAX_FILE_SIZE_MB);
    assert!(DEFAULT_MAX_FILE_SIZE_MB <= MAX_MAX_FILE_SIZE_MB);

    assert!(MIN_EXPORT_QUALITY > 0);
    assert!(DEFAULT_EXPORT_QUALITY >= MIN_EXPORT_QUALITY);
    assert!(DEFAULT_EXPORT_QUALITY <= MAX_EXPORT_QUALITY);

    assert!(DEFAULT_PREVIEW_MAX_WIDTH >= MIN_PREVIEW_DIMENSION);
    assert!(DEFAULT_PREVIEW_MAX_HEIGHT >= MIN_PREVIEW_DIMENSION);
};
