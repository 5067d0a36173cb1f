// SPDX-License-Identifier: MPL-2.0
//! Decoding uploaded bytes into pixels, including SVG rasterization.

use super::mime::SVG_MIME;
use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{DynamicImage, GenericImageView, RgbaImage};
use resvg::usvg;

/// Decoded pixels plus the handle iced uses to draw them.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    #[must_use]
    pub fn from_rgba(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let handle = image::Handle::from_rgba(width, height, image.into_raw());
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Decodes raster or SVG bytes.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the bytes are not a supported image or the
/// SVG has no drawable area.
pub fn decode(bytes: &[u8], mime: &str) -> Result<DynamicImage> {
    if mime == SVG_MIME {
        return rasterize_svg(bytes).map(DynamicImage::ImageRgba8);
    }

    let image = image_rs::load_from_memory(bytes)?;
    let (width, height) = image.dimensions();
    log::debug!("decoded {mime} image {width}x{height}");
    Ok(image)
}

/// Renders an SVG document at its intrinsic size.
///
/// # Errors
///
/// Returns [`Error::Decode`] if parsing fails or the document is empty.
pub fn rasterize_svg(bytes: &[u8]) -> Result<RgbaImage> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| Error::Decode(e.to_string()))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    if width == 0 || height == 0 {
        return Err(Error::Decode("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Decode("Failed to allocate SVG pixmap".into()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha, the rest of the pipeline does not.
    let mut raw = Vec::with_capacity(pixmap.pixels().len() * 4);
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        raw.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    RgbaImage::from_raw(width, height, raw)
        .ok_or_else(|| Error::Decode("SVG pixel buffer has the wrong length".into()))
}

/// Handle suitable for thumbnails: raster formats are decoded lazily by iced,
/// SVG is rasterized up front because iced's image widget cannot parse it.
///
/// # Errors
///
/// Returns [`Error::Decode`] for unparseable SVG documents.
pub fn preview_handle(bytes: &[u8], mime: &str) -> Result<image::Handle> {
    if mime == SVG_MIME {
        let rgba = rasterize_svg(bytes)?;
        return Ok(ImageData::from_rgba(rgba).handle);
    }
    Ok(image::Handle::from_bytes(bytes.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba};
    use std::io::Cursor;

    fn encode_png(image: &RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    #[test]
    fn decode_png_returns_expected_dimensions() {
        let source = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        let decoded = decode(&encode_png(&source), "image/png").expect("decode");
        assert_eq!(decoded.dimensions(), (4, 2));
    }

    #[test]
    fn decode_garbage_is_decode_error() {
        match decode(b"definitely not an image", "image/png") {
            Err(Error::Decode(_)) => {}
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn svg_is_rasterized_at_intrinsic_size() {
        let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
            <rect width="6" height="3" fill="#00ff00"/>
        </svg>"##;
        let image = decode(svg, SVG_MIME).expect("rasterize");
        assert_eq!(image.dimensions(), (6, 3));
        let pixel = image.to_rgba8().get_pixel(3, 1).0;
        assert_eq!(pixel, [0, 255, 0, 255]);
    }

    #[test]
    fn invalid_svg_is_rejected() {
        assert!(rasterize_svg(b"<svg").is_err());
    }

    #[test]
    fn image_data_keeps_dimensions() {
        let data = ImageData::from_rgba(RgbaImage::new(7, 5));
        assert_eq!((data.width, data.height), (7, 5));
    }
}
