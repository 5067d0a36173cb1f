// SPDX-License-Identifier: MPL-2.0
//! Image decoding, the transform pipeline and export.
//!
//! - [`mime`]: content sniffing for uploads
//! - [`image`]: raster and SVG decoding
//! - [`image_transform`]: pixel operations
//! - [`composition`]: the composed editor render
//! - [`export`]: JPEG encoding and file output

pub mod composition;
pub mod export;
pub mod image;
pub mod image_transform;
pub mod mime;

pub use composition::{plan, render, Bounds, Composition};
pub use export::{export, export_file_name};
pub use image::{decode, ImageData};
pub use mime::detect_mime;
