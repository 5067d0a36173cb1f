// SPDX-License-Identifier: MPL-2.0
//! Pixel operations used by the composition pipeline: rotate, flip, crop,
//! resample, tone filters and flattening.

use crate::domain::editing::{FilterPercent, RotationAngle};
use image_rs::{imageops::FilterType, DynamicImage, GenericImageView, Rgb, RgbImage, RgbaImage};

/// Rotate clockwise by the given quarter-turn angle.
#[must_use]
pub fn rotate(image: &DynamicImage, angle: RotationAngle) -> DynamicImage {
    match angle.degrees() {
        90 => image.rotate90(),
        180 => image.rotate180(),
        270 => image.rotate270(),
        _ => image.clone(),
    }
}

/// Mirror left to right.
#[must_use]
pub fn flip_horizontal(image: &DynamicImage) -> DynamicImage {
    image.fliph()
}

/// Mirror top to bottom.
#[must_use]
pub fn flip_vertical(image: &DynamicImage) -> DynamicImage {
    image.flipv()
}

/// Resample to the exact dimensions with a Lanczos filter.
///
/// Returns a clone when the size is unchanged.
#[must_use]
pub fn resize(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let width = width.max(1);
    let height = height.max(1);
    if image.dimensions() == (width, height) {
        return image.clone();
    }
    image.resize_exact(width, height, FilterType::Lanczos3)
}

/// Crop to a rectangle clamped to the image boundaries.
///
/// Returns `None` when the image itself is empty.
#[must_use]
pub fn crop(image: &DynamicImage, x: u32, y: u32, width: u32, height: u32) -> Option<DynamicImage> {
    let (img_width, img_height) = image.dimensions();
    if img_width == 0 || img_height == 0 {
        return None;
    }

    let x = x.min(img_width - 1);
    let y = y.min(img_height - 1);
    let width = width.min(img_width - x).max(1);
    let height = height.min(img_height - y).max(1);

    if (x, y, width, height) == (0, 0, img_width, img_height) {
        return Some(image.clone());
    }
    Some(image.crop_imm(x, y, width, height))
}

/// Lookup table for `brightness(b%) contrast(c%)`, applied in that order.
///
/// Brightness multiplies each channel by `b / 100`. Contrast maps `v` to
/// `(v - 0.5) * c / 100 + 0.5`. Each step is clamped to `[0, 1]`.
#[must_use]
pub fn tone_lut(brightness: FilterPercent, contrast: FilterPercent) -> [u8; 256] {
    let b = f64::from(brightness.as_factor());
    let c = f64::from(contrast.as_factor());
    let mut lut = [0u8; 256];

    for (value, slot) in lut.iter_mut().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let normalized = value as f64 / 255.0;
        let brightened = (normalized * b).clamp(0.0, 1.0);
        let contrasted = ((brightened - 0.5) * c + 0.5).clamp(0.0, 1.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let out = (contrasted * 255.0).round() as u8;
        *slot = out;
    }

    lut
}

/// Applies brightness and contrast to the color channels. Alpha is untouched.
pub fn apply_tone(image: &mut RgbaImage, brightness: FilterPercent, contrast: FilterPercent) {
    if brightness.is_neutral() && contrast.is_neutral() {
        return;
    }
    let lut = tone_lut(brightness, contrast);
    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        pixel.0 = [lut[r as usize], lut[g as usize], lut[b as usize], a];
    }
}

/// Composites the image onto an opaque background color.
#[must_use]
pub fn flatten_onto(image: &RgbaImage, background: Rgb<u8>) -> RgbImage {
    let (width, height) = image.dimensions();
    RgbImage::from_fn(width, height, |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let alpha = u32::from(a);
        let blend = |fg: u8, bg: u8| -> u8 {
            let mixed = (u32::from(fg) * alpha + u32::from(bg) * (255 - alpha) + 127) / 255;
            u8::try_from(mixed).unwrap_or(u8::MAX)
        };
        Rgb([
            blend(r, background[0]),
            blend(g, background[1]),
            blend(b, background[2]),
        ])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageBuffer, Rgba};

    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(ImageBuffer::from_pixel(width, height, Rgba([0, 0, 0, 0])))
    }

    fn half_black_half_white(width: u32, height: u32) -> DynamicImage {
        let buffer = ImageBuffer::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        });
        DynamicImage::ImageRgba8(buffer)
    }

    #[test]
    fn rotate_quarter_turns_swap_dimensions() {
        let img = create_test_image(4, 3);
        assert_eq!(rotate(&img, RotationAngle::new(90)).dimensions(), (3, 4));
        assert_eq!(rotate(&img, RotationAngle::new(180)).dimensions(), (4, 3));
        assert_eq!(rotate(&img, RotationAngle::new(270)).dimensions(), (3, 4));
    }

    #[test]
    fn rotate_right_moves_left_column_to_top_row() {
        let img = half_black_half_white(4, 2);
        let rotated = rotate(&img, RotationAngle::new(90)).to_rgba8();
        // Clockwise: the left (black) half ends up on top.
        assert_eq!(rotated.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(rotated.get_pixel(0, 3).0, [255, 255, 255, 255]);
    }

    #[test]
    fn flip_horizontal_mirrors_pixels_left_to_right() {
        let flipped = flip_horizontal(&half_black_half_white(4, 2)).to_rgba8();
        assert_eq!(flipped.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(flipped.get_pixel(3, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn flip_vertical_mirrors_pixels_top_to_bottom() {
        let buffer = ImageBuffer::from_fn(2, 4, |_, y| {
            if y < 2 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        });
        let flipped = flip_vertical(&DynamicImage::ImageRgba8(buffer)).to_rgba8();
        assert_eq!(flipped.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(flipped.get_pixel(0, 3).0, [0, 0, 0, 255]);
    }

    #[test]
    fn resize_changes_dimensions_and_never_hits_zero() {
        let img = create_test_image(8, 4);
        assert_eq!(resize(&img, 4, 2).dimensions(), (4, 2));
        assert_eq!(resize(&img, 0, 0).dimensions(), (1, 1));
    }

    #[test]
    fn crop_clamps_to_boundaries() {
        let img = create_test_image(10, 8);
        let cropped = crop(&img, 8, 6, 10, 10).expect("crop");
        assert_eq!(cropped.dimensions(), (2, 2));
    }

    #[test]
    fn crop_of_empty_image_is_none() {
        assert!(crop(&create_test_image(0, 0), 0, 0, 1, 1).is_none());
    }

    #[test]
    fn neutral_tone_lut_is_identity() {
        let lut = tone_lut(FilterPercent::default(), FilterPercent::default());
        for (value, mapped) in lut.iter().enumerate() {
            assert_eq!(usize::from(*mapped), value);
        }
    }

    #[test]
    fn brightness_scales_channels() {
        let lut = tone_lut(FilterPercent::new(50), FilterPercent::default());
        assert_eq!(lut[200], 100);
        assert_eq!(lut[0], 0);

        let doubled = tone_lut(FilterPercent::new(200), FilterPercent::default());
        assert_eq!(doubled[100], 200);
        assert_eq!(doubled[200], 255);
    }

    #[test]
    fn zero_contrast_collapses_to_mid_gray() {
        let lut = tone_lut(FilterPercent::default(), FilterPercent::new(0));
        assert!(lut.iter().all(|&v| v == 128));
    }

    #[test]
    fn contrast_pushes_values_away_from_middle() {
        let lut = tone_lut(FilterPercent::default(), FilterPercent::new(200));
        assert!(lut[64] < 64);
        assert!(lut[192] > 192);
    }

    #[test]
    fn apply_tone_leaves_alpha_alone() {
        let mut image = RgbaImage::from_pixel(1, 1, Rgba([200, 100, 50, 77]));
        apply_tone(&mut image, FilterPercent::new(50), FilterPercent::default());
        assert_eq!(image.get_pixel(0, 0).0, [100, 50, 25, 77]);
    }

    #[test]
    fn flatten_blends_transparency_onto_white() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        image.put_pixel(1, 0, Rgba([10, 20, 30, 255]));
        let flat = flatten_onto(&image, Rgb([255, 255, 255]));
        assert_eq!(flat.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(flat.get_pixel(1, 0).0, [10, 20, 30]);
    }
}
